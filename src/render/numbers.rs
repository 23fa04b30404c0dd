//! Display adaptors for numbers.

use std::fmt;

/// Two-digit lowercase hex, without prefix.
pub struct ZeroPadded(pub u8);

/// `0x` and uppercase hex, without padding.
pub struct PrefixedHex(pub u64);

/// `0xHEX (decimal)`, or only the decimal value when it is less than 10,
/// since both representations are the same.
pub struct Hybrid(pub u64);

impl fmt::Display for ZeroPadded {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:02x}", self.0)
    }
}

impl fmt::Display for PrefixedHex {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "0x{:X}", self.0)
    }
}

impl fmt::Display for Hybrid {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.0 < 10 {
            write!(fmt, "{}", self.0)
        } else {
            write!(fmt, "{} ({})", PrefixedHex(self.0), self.0)
        }
    }
}

#[test]
fn render_numbers() {
    assert_eq!(ZeroPadded(0).to_string(), "00");
    assert_eq!(ZeroPadded(0xAB).to_string(), "ab");
    assert_eq!(PrefixedHex(0).to_string(), "0x0");
    assert_eq!(PrefixedHex(0xBEEF).to_string(), "0xBEEF");
    assert_eq!(PrefixedHex((1 << 48) - 1).to_string(), "0xFFFFFFFFFFFF");
    assert_eq!(Hybrid(0).to_string(), "0");
    assert_eq!(Hybrid(9).to_string(), "9");
    assert_eq!(Hybrid(10).to_string(), "0xA (10)");
    assert_eq!(Hybrid(65536).to_string(), "0x10000 (65536)");
}
