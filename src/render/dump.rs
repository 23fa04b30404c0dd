//! Render the whole context for `%bytes`.

use std::fmt;

/// Bytes per line.
const LINE_WIDTH: usize = 32;

/// Lowercase zero-padded hex bytes, each one preceded by a space.
///
/// Every line, including the last one, is terminated by a newline. An empty
/// slice is rendered as an empty string.
pub struct ByteDump<'a>(pub &'a [u8]);

impl fmt::Display for ByteDump<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for line in self.0.chunks(LINE_WIDTH) {
            for byte in line {
                write!(fmt, " {:02x}", byte)?;
            }

            fmt.write_str("\n")?;
        }

        Ok(())
    }
}

#[test]
fn wrap_lines() {
    let bytes: Vec<u8> = (0..33).collect();
    let dump = ByteDump(&bytes).to_string();
    let lines: Vec<&str> = dump.split_terminator('\n').collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 32 * 3);
    assert!(lines[0].starts_with(" 00 01 02"));
    assert!(lines[0].ends_with(" 1e 1f"));
    assert_eq!(lines[1], " 20");
    assert!(dump.ends_with('\n'));
}

#[test]
fn exact_lines() {
    let bytes = [0xffu8; 64];
    let dump = ByteDump(&bytes).to_string();

    assert_eq!(dump.matches('\n').count(), 2);
    assert_eq!(ByteDump(&[]).to_string(), "");
    assert_eq!(ByteDump(&[0xA5, 0x5A]).to_string(), " a5 5a\n");
}
