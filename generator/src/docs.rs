//! Generate files for documentation.
//!
//! The plain text template has a placeholder for every group of directives.
//! Each group is rendered as a two-column list: usage and description.

use crate::DocumentationItem;
use std::io::{self, Write};

const TEMPLATE: &str = include_str!("plain_text.tpl");

const LEFT_MARGIN: usize = 4;

/// Space between the usage and the description.
const GAP: usize = 2;

/// Placeholders in the template, and the items rendered in them.
const GROUPS: &[(&str, bool)] = &[("%COMMANDS%\n", false), ("%NUMBERS%\n", true)];

pub fn generate_plain_text(mut output: impl Write, items: &[DocumentationItem]) -> io::Result<()> {
    let column = LEFT_MARGIN + items.iter().map(|i| i.specs.len()).max().unwrap_or(0) + GAP;

    let mut template = TEMPLATE;
    for (placeholder, numeric) in GROUPS {
        let (head, tail) = template.split_once(placeholder).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("missing {}", placeholder.trim()),
            )
        })?;

        output.write_all(head.as_bytes())?;

        for item in items.iter().filter(|i| i.numeric == *numeric) {
            write_item(&mut output, item, column)?;
        }

        template = tail;
    }

    output.write_all(template.as_bytes())
}

/// Write the usage, and the description starting at `column`.
fn write_item(mut output: impl Write, item: &DocumentationItem, column: usize) -> io::Result<()> {
    let usage = format!("{:1$}{2}", "", LEFT_MARGIN, item.specs);

    for (idx, line) in item.doc.trim().lines().enumerate() {
        let prefix = if idx == 0 { usage.as_str() } else { "" };
        writeln!(output, "{:1$}{2}", prefix, column, line)?;
    }

    Ok(())
}

#[test]
fn two_columns() {
    let items = [
        DocumentationItem {
            specs: "%stop".into(),
            doc: "Stop.\n".into(),
            numeric: false,
        },
        DocumentationItem {
            specs: "%dd{num}".into(),
            doc: "First.\nSecond.\n".into(),
            numeric: true,
        },
    ];

    let mut output = vec![];
    generate_plain_text(&mut output, &items).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("\n    %stop     Stop.\n"));
    assert!(text.contains("\n    %dd{num}  First.\n              Second.\n"));
    assert!(text.find("%stop").unwrap() < text.find("Numbers:").unwrap());
    assert!(text.find("%dd{num}").unwrap() > text.find("Numbers:").unwrap());
}
