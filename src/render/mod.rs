//! Print values taken from the context.

use crate::buffers;
use crate::error::Result;
use crate::forms::Format;
use std::io::Write;

mod dump;
mod numbers;

pub use dump::ByteDump;
pub use numbers::{Hybrid, PrefixedHex, ZeroPadded};

impl Format {
    /// Print the value at `index` of the context.
    pub fn write(self, context: &[u8], index: usize, mut output: impl Write) -> Result<()> {
        match self {
            Format::Byte => {
                let byte = buffers::byte(context, index)?;
                write!(output, "{}", ZeroPadded(byte))?;
            }

            Format::ByteFromEnd => {
                let byte = buffers::byte_from_end(context, index)?;
                write!(output, "{}", ZeroPadded(byte))?;
            }

            Format::PrefixedHex(width) => {
                let value = buffers::number(context, index, width)?;
                write!(output, "{}", PrefixedHex(value))?;
            }

            Format::Decimal(width) => {
                let value = buffers::number(context, index, width)?;
                write!(output, "{}", value)?;
            }

            Format::Hybrid(width) => {
                let value = buffers::number(context, index, width)?;
                write!(output, "{}", Hybrid(value))?;
            }
        }

        Ok(())
    }
}
