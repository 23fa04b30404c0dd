//! Errors that stop the interpretation of a template.

use std::io;
use thiserror::Error;

/// Any failure while interpreting a template.
///
/// There is no recovery: the first error ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// A `%file` could not be read.
    #[error("cannot load '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: io::Error,
    },

    /// `%empty` found data not taken by `%next`.
    #[error("there are leftover bytes: {0:?}")]
    LeftoverData(Vec<u8>),

    /// The command line does not match any directive.
    #[error("Unhandled command %{0}")]
    UnknownCommand(String),

    /// The argument of a directive is not a number.
    #[error("bad number at [{0}]")]
    BadNumber(String),

    /// `%next` asked for more bytes than the pending data holds.
    #[error("cannot take {requested} bytes with %next: {available} bytes available")]
    NextPastEnd { requested: i64, available: usize },

    /// A directive addressed bytes outside of the context.
    #[error("bytes {index}..{index}+{width} are outside of the context ({len} bytes)")]
    OutOfContext {
        index: usize,
        width: usize,
        len: usize,
    },

    /// A `%-{num}` directive addressed a byte outside of the context.
    #[error("byte -{offset} is outside of the context ({len} bytes)")]
    FromEndOutOfContext { offset: usize, len: usize },

    /// Output or diagnostics could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
