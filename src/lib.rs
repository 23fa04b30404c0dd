//! Annotated hex dumps from templates.
//!
//! A template is plain text with `%` directives. Directives load a binary
//! file, take a window of bytes from it (the context), and print values
//! from that window as hex or decimal numbers.
//!
//! ```text
//! %file header.bin
//! %next 4
//! magic: %xxxx0 (%d0 %d1 %d2 %d3)
//! %empty
//! ```
//!
//! See [`HELP`] for the list of directives.

mod buffers;
mod error;
mod forms;
mod interpret;
mod render;

#[cfg(test)]
mod tests;

pub use buffers::{byte, byte_from_end, number, Buffers, MAX_WIDTH};
pub use error::{Error, Result};
pub use forms::{match_line, Action, Command, Form, Format, Matched, FORMS};
pub use interpret::{interpret, FileSystem, Interpreter, Loader};
pub use render::{ByteDump, Hybrid, PrefixedHex, ZeroPadded};

/// Reference of the directives, in plain text.
pub const HELP: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/doc.txt"));
