//! Source parser for `directives.spec` file.
//!
//! # File Format
//!
//! Each entry is started with a `:` line. The rest of the line is the usage
//! of the directive, without the `%` marker.
//!
//! Lines with `*//! ` are used as the documentation of the directive.
//!
//! Everything else is a Rust expression, of type `Action`, for the effect of
//! the directive.
//!
//! Lines before the first entry are ignored.

use crate::DirectiveSpec;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the `directives.spec` file and extract directives data.
pub fn parse_specs<T: AsRef<Path>>(source: T) -> Result<Vec<DirectiveSpec>, Box<dyn Error>> {
    parse_source(BufReader::new(File::open(source)?))
}

/// Extract directives data from the contents of a `directives.spec` file.
pub fn parse_source(source: impl BufRead) -> Result<Vec<DirectiveSpec>, Box<dyn Error>> {
    let mut specs: Vec<DirectiveSpec> = vec![];

    for line in source.lines() {
        let line = line?;

        // New directives are started when a line starts with ':'.
        if let Some(header) = line.strip_prefix(':') {
            specs.push(DirectiveSpec {
                usage: header.trim().to_owned(),
                ..Default::default()
            });
            continue;
        }

        // Parse a body, only if there is an active directive.
        if let Some(spec) = specs.last_mut() {
            if let Some(item) = line.trim().strip_prefix("//!") {
                spec.description.push_str(item.trim());
                spec.description.push('\n');
            } else if !line.trim().is_empty() {
                spec.action.push_str(&line);
                spec.action.push('\n');
            }
        }
    }

    if let Some(spec) = specs.iter().find(|s| s.action.trim().is_empty()) {
        return Err(format!("missing action for '{}'", spec.usage).into());
    }

    Ok(specs)
}
