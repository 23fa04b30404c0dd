//! Recognize the command line that follows a `%` marker.
//!
//! The table of forms is generated by `build.rs` from `directives.spec`, and
//! it is sorted with the longest names first. The first form that accepts
//! the command line wins.

use crate::error::{Error, Result};

/// A directive form, as declared in `directives.spec`.
#[derive(Debug)]
pub struct Form {
    /// Usage string, without the `%` marker.
    pub usage: &'static str,

    /// Text that the command line has to start with.
    pub name: &'static str,

    pub action: Action,
}

/// Effect of a directive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Directive that takes the whole command line.
    Command(Command),

    /// Print a value from the context. The numeric argument is read from
    /// the command line starting at offset `at`.
    Render { format: Format, at: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Load,
    Next,
    Empty,
    Bytes,
    Stop,
}

/// How a value from the context is printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// One byte, zero-padded hex.
    Byte,

    /// One byte counted from the end of the context, zero-padded hex.
    ByteFromEnd,

    /// `0x` and capital hex of a number of the given width.
    PrefixedHex(usize),

    /// Decimal of a number of the given width.
    Decimal(usize),

    /// `0xHEX (decimal)` of a number of the given width.
    Hybrid(usize),
}

/// Directive forms, longest names first.
pub static FORMS: &[Form] = include!(concat!(env!("OUT_DIR"), "/forms.rs"));

/// A command line accepted by a form.
#[derive(Debug, PartialEq, Eq)]
pub enum Matched<'a> {
    /// Directive that consumes the whole line. `argument` is the text after
    /// the name.
    Line { command: Command, argument: &'a str },

    /// Directive that only consumes `consumed` bytes of the line (name and
    /// digits of its argument).
    Span {
        format: Format,
        index: usize,
        consumed: usize,
    },
}

impl Form {
    /// Check if the command line is accepted by this form.
    ///
    /// Returns `Ok(None)` if the next form should be tried.
    pub fn try_match<'a>(&self, line: &'a str) -> Result<Option<Matched<'a>>> {
        let rest = match line.strip_prefix(self.name) {
            Some(rest) => rest,
            None => return Ok(None),
        };

        match self.action {
            Action::Command(command @ (Command::Empty | Command::Bytes | Command::Stop)) => {
                Ok(Some(Matched::Line {
                    command,
                    argument: rest,
                }))
            }

            _ if rest.is_empty() => Ok(None),

            Action::Command(command) => Ok(Some(Matched::Line {
                command,
                argument: rest,
            })),

            Action::Render { format, at } => {
                // The bare form is only a number.
                if self.name.is_empty() && !rest.starts_with(|c: char| c.is_ascii_digit()) {
                    return Ok(None);
                }

                let (index, span) = parse_number(&line[at..])?;
                Ok(Some(Matched::Span {
                    format,
                    index,
                    consumed: self.name.len() + span,
                }))
            }
        }
    }
}

/// Find the first form that accepts the command line.
pub fn match_line(line: &str) -> Result<Matched> {
    for form in FORMS {
        if let Some(matched) = form.try_match(line)? {
            return Ok(matched);
        }
    }

    Err(Error::UnknownCommand(line.to_owned()))
}

/// Parse the digits at the start of `text`.
///
/// Returns the number and how many bytes it takes.
pub fn parse_number(text: &str) -> Result<(usize, usize)> {
    let span = text.bytes().take_while(u8::is_ascii_digit).count();

    match text[..span].parse() {
        Ok(num) if span > 0 => Ok((num, span)),
        _ => Err(Error::BadNumber(text.to_owned())),
    }
}

/// Parse the `<count>` argument of `%next`: the first word after the name.
pub fn parse_count(argument: &str) -> Result<i64> {
    argument
        .split_whitespace()
        .next()
        .and_then(|word| word.parse().ok())
        .ok_or_else(|| Error::BadNumber(argument.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(format: Format, index: usize, consumed: usize) -> Matched<'static> {
        Matched::Span {
            format,
            index,
            consumed,
        }
    }

    #[test]
    fn longest_names_first() {
        for pair in FORMS.windows(2) {
            assert!(
                pair[0].name.len() >= pair[1].name.len(),
                "{:?} before {:?}",
                pair[0].usage,
                pair[1].usage
            );
        }

        assert_eq!(FORMS.last().map(|f| f.usage), Some("{num}"));
    }

    #[test]
    fn numeric_families() {
        assert_eq!(match_line("d3").unwrap(), span(Format::Decimal(1), 3, 2));
        assert_eq!(match_line("dddd12 x").unwrap(), span(Format::Decimal(4), 12, 6));
        assert_eq!(match_line("dddddd0").unwrap(), span(Format::Decimal(6), 0, 7));
        assert_eq!(match_line("xx8").unwrap(), span(Format::PrefixedHex(2), 8, 3));
        assert_eq!(match_line("nnn1)").unwrap(), span(Format::Hybrid(3), 1, 4));
        assert_eq!(match_line("-1").unwrap(), span(Format::ByteFromEnd, 1, 2));
        assert_eq!(match_line("42abc").unwrap(), span(Format::Byte, 42, 2));
    }

    #[test]
    fn keywords() {
        assert_eq!(
            match_line("file data/a.bin").unwrap(),
            Matched::Line {
                command: Command::Load,
                argument: "data/a.bin"
            }
        );

        assert_eq!(
            match_line("next 16").unwrap(),
            Matched::Line {
                command: Command::Next,
                argument: "16"
            }
        );

        // Only the prefix is checked.
        assert_eq!(
            match_line("stopped here").unwrap(),
            Matched::Line {
                command: Command::Stop,
                argument: "ped here"
            }
        );

        assert!(matches!(
            match_line("bytes"),
            Ok(Matched::Line {
                command: Command::Bytes,
                ..
            })
        ));
    }

    #[test]
    fn keywords_need_an_argument() {
        assert!(matches!(match_line("file "), Err(Error::UnknownCommand(l)) if l == "file "));

        // `n` family takes `next` without a space.
        assert!(matches!(match_line("next"), Err(Error::BadNumber(t)) if t == "ext"));
    }

    #[test]
    fn unknown_commands() {
        for line in ["", "d", "foo", " 1", "-"] {
            match match_line(line) {
                Err(Error::UnknownCommand(l)) => assert_eq!(l, line),
                r => panic!("{:?}: {:?}", line, r),
            }
        }
    }

    #[test]
    fn bad_numbers() {
        assert!(matches!(match_line("dz"), Err(Error::BadNumber(t)) if t == "z"));
        assert!(matches!(match_line("-x"), Err(Error::BadNumber(t)) if t == "x"));
        assert!(matches!(match_line("xx"), Err(Error::BadNumber(t)) if t == "x"));
        assert!(matches!(
            match_line("d99999999999999999999999"),
            Err(Error::BadNumber(_))
        ));
    }

    #[test]
    fn five_byte_hex_reads_argument_from_last_name_letter() {
        assert!(matches!(match_line("xxxxx0"), Err(Error::BadNumber(t)) if t == "x0"));
    }

    #[test]
    fn next_count() {
        assert_eq!(parse_count("4").unwrap(), 4);
        assert_eq!(parse_count("  12 bytes").unwrap(), 12);
        assert_eq!(parse_count("-3").unwrap(), -3);
        assert!(matches!(parse_count("   "), Err(Error::BadNumber(_))));
        assert!(matches!(parse_count("four"), Err(Error::BadNumber(_))));
    }
}
