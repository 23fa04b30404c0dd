//! Data loaded from `%file`, and the context taken from it with `%next`.

use crate::error::{Error, Result};
use std::mem;

/// Widest number that can be decoded from the context.
pub const MAX_WIDTH: usize = 6;

#[derive(Default, Debug)]
pub struct Buffers {
    data: Vec<u8>,
    context: Vec<u8>,
}

impl Buffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes not taken yet with `next`.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes addressed by the numeric directives.
    pub fn context(&self) -> &[u8] {
        &self.context
    }

    /// Replace the pending data. The context is not modified.
    pub fn load(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Move the first `count` bytes of the pending data to the context.
    pub fn next(&mut self, count: i64) -> Result<()> {
        let available = self.data.len();
        let count = match usize::try_from(count) {
            Ok(c) if c <= available => c,
            _ => {
                return Err(Error::NextPastEnd {
                    requested: count,
                    available,
                })
            }
        };

        let rest = self.data.split_off(count);
        self.context = mem::replace(&mut self.data, rest);
        Ok(())
    }

    /// Fails if there is pending data.
    pub fn ensure_empty(&self) -> Result<()> {
        if self.data.is_empty() {
            Ok(())
        } else {
            Err(Error::LeftoverData(self.data.clone()))
        }
    }
}

/// Decode `width` bytes of `context`, starting at `index`.
///
/// The byte at `index` is the least significant one, so spans are always
/// read as little-endian numbers.
pub fn number(context: &[u8], index: usize, width: usize) -> Result<u64> {
    debug_assert!(width <= MAX_WIDTH);

    let bytes = index
        .checked_add(width)
        .and_then(|end| context.get(index..end))
        .ok_or(Error::OutOfContext {
            index,
            width,
            len: context.len(),
        })?;

    Ok(bytes
        .iter()
        .enumerate()
        .fold(0, |value, (n, byte)| value | u64::from(*byte) << (8 * n)))
}

/// Byte at `index` of `context`.
pub fn byte(context: &[u8], index: usize) -> Result<u8> {
    context.get(index).copied().ok_or(Error::OutOfContext {
        index,
        width: 1,
        len: context.len(),
    })
}

/// Byte at `offset` from the end of `context`. `1` is the last byte.
pub fn byte_from_end(context: &[u8], offset: usize) -> Result<u8> {
    context
        .len()
        .checked_sub(offset)
        .filter(|_| offset > 0)
        .map(|index| context[index])
        .ok_or(Error::FromEndOutOfContext {
            offset,
            len: context.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_numbers() {
        let context = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];

        assert_eq!(number(&context, 0, 1).unwrap(), 0x01);
        assert_eq!(number(&context, 0, 2).unwrap(), 0x0201);
        assert_eq!(number(&context, 1, 3).unwrap(), 0x040302);
        assert_eq!(number(&context, 3, 4).unwrap(), 0x07060504);
        assert_eq!(number(&context, 1, 5).unwrap(), 0x0605040302);
        assert_eq!(number(&context, 0, 6).unwrap(), 0x060504030201);
        assert_eq!(number(&context, 1, 6).unwrap(), 0x070605040302);
        assert_eq!(number(&[0xff; 6], 0, 6).unwrap(), (1 << 48) - 1);
    }

    #[test]
    fn numbers_outside_of_context() {
        let context = [0xAA, 0xBB];

        assert!(matches!(
            number(&context, 1, 2),
            Err(Error::OutOfContext {
                index: 1,
                width: 2,
                len: 2
            })
        ));

        assert!(number(&context, 2, 1).is_err());
        assert!(number(&context, usize::MAX, 2).is_err());
        assert!(number(&[], 0, 1).is_err());
    }

    #[test]
    fn single_bytes() {
        let context = [0x11, 0x22];

        assert_eq!(byte(&context, 1).unwrap(), 0x22);
        assert!(matches!(
            byte(&context, 2),
            Err(Error::OutOfContext {
                index: 2,
                width: 1,
                len: 2
            })
        ));
    }

    #[test]
    fn bytes_from_end() {
        let context = [0x11, 0x22, 0x33];

        assert_eq!(byte_from_end(&context, 1).unwrap(), 0x33);
        assert_eq!(byte_from_end(&context, 3).unwrap(), 0x11);
        assert!(matches!(
            byte_from_end(&context, 0),
            Err(Error::FromEndOutOfContext { offset: 0, len: 3 })
        ));
        assert!(byte_from_end(&context, 4).is_err());
    }

    #[test]
    fn take_context_from_data() {
        let mut buffers = Buffers::new();
        buffers.load(vec![1, 2, 3, 4, 5]);

        buffers.next(2).unwrap();
        assert_eq!(buffers.context(), &[1, 2]);
        assert_eq!(buffers.data(), &[3, 4, 5]);

        buffers.next(0).unwrap();
        assert_eq!(buffers.context(), &[] as &[u8]);

        buffers.next(3).unwrap();
        assert_eq!(buffers.context(), &[3, 4, 5]);
        assert!(buffers.ensure_empty().is_ok());
    }

    #[test]
    fn next_past_end() {
        let mut buffers = Buffers::new();
        buffers.load(vec![1, 2]);

        assert!(matches!(
            buffers.next(3),
            Err(Error::NextPastEnd {
                requested: 3,
                available: 2
            })
        ));

        assert!(matches!(buffers.next(-1), Err(Error::NextPastEnd { .. })));

        // Nothing was taken.
        assert_eq!(buffers.data(), &[1, 2]);
    }

    #[test]
    fn leftover_data() {
        let mut buffers = Buffers::new();
        buffers.load(vec![9, 8, 7]);
        buffers.next(1).unwrap();

        match buffers.ensure_empty() {
            Err(e @ Error::LeftoverData(_)) => {
                assert_eq!(e.to_string(), "there are leftover bytes: [8, 7]")
            }
            r => panic!("{:?}", r),
        }
    }

    #[test]
    fn load_discards_pending_data() {
        let mut buffers = Buffers::new();
        buffers.load(vec![1, 2, 3]);
        buffers.next(1).unwrap();
        buffers.load(vec![4]);

        assert_eq!(buffers.data(), &[4]);
        assert_eq!(buffers.context(), &[1]);
    }
}
