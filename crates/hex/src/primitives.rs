//! Stateless helpers shared by both codecs.
//!
//! Everything here works on raw code point values (`u32`) so the helpers stay
//! independent of the text unit type a caller picked.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns `true` for `0-9`, `a-f` and `A-F`.
#[inline]
pub fn is_hex_digit(code: u32) -> bool {
    nibble_from_low_hex_digit(code).is_some()
}

/// Value of a hex digit read as the low nibble of a byte.
#[inline]
pub fn nibble_from_low_hex_digit(code: u32) -> Option<u8> {
    let value = match code {
        0x30..=0x39 => code - 0x30,
        0x61..=0x66 => code - 0x61 + 0xa,
        0x41..=0x46 => code - 0x41 + 0xA,
        _ => return None,
    };
    u8::try_from(value).ok()
}

/// Value of a hex digit read as the high nibble of a byte, already shifted.
#[inline]
pub fn nibble_from_high_hex_digit(code: u32) -> Option<u8> {
    nibble_from_low_hex_digit(code).map(|nibble| nibble << 4)
}

/// Uppercase hex digit for the high nibble of `byte`.
#[inline]
pub fn high_hex_digit(byte: u8) -> u8 {
    HEX_DIGITS[usize::from(byte >> 4)]
}

/// Uppercase hex digit for the low nibble of `byte`.
#[inline]
pub fn low_hex_digit(byte: u8) -> u8 {
    HEX_DIGITS[usize::from(byte & 0xF)]
}

#[inline]
pub fn hex_pair(byte: u8) -> [u8; 2] {
    [high_hex_digit(byte), low_hex_digit(byte)]
}

/// Upper 8 bits of a 16-bit code unit.
#[inline]
pub fn high_byte(unit: u16) -> u8 {
    unit.to_be_bytes()[0]
}

/// Lower 8 bits of a 16-bit code unit.
#[inline]
pub fn low_byte(unit: u16) -> u8 {
    unit.to_be_bytes()[1]
}

/// Unicode `White_Space`; surrogates and out-of-range values are never whitespace.
#[inline]
pub fn is_whitespace(code: u32) -> bool {
    char::from_u32(code).is_some_and(char::is_whitespace)
}

/// A hex digit waiting for its partner.
///
/// Two digits form one byte, high nibble first. A digit left alone, either
/// because a separator or the end of input follows it, is flushed as a byte
/// equal to the digit's own value: `A` alone decodes to `0x0A`, not `0xA0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingNibble {
    pending: Option<u8>,
}

impl PendingNibble {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feeds one digit value, returning the completed byte when it closes a pair.
    pub fn push(&mut self, nibble: u8) -> Option<u8> {
        match self.pending.take() {
            Some(high) => Some((high << 4) | nibble),
            None => {
                self.pending = Some(nibble);
                None
            }
        }
    }

    /// Emits a lone pending digit as a byte of its bare value.
    pub fn flush(&mut self) -> Option<u8> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit_classification() {
        for c in "0123456789abcdefABCDEF".chars() {
            assert!(is_hex_digit(c as u32), "{c} should be a hex digit");
        }
        for c in "gG xz{}-\u{0660}\u{FF10}".chars() {
            assert!(!is_hex_digit(c as u32), "{c} should not be a hex digit");
        }
    }

    #[test]
    fn test_nibble_values() {
        assert_eq!(nibble_from_low_hex_digit('0' as u32), Some(0x0));
        assert_eq!(nibble_from_low_hex_digit('9' as u32), Some(0x9));
        assert_eq!(nibble_from_low_hex_digit('a' as u32), Some(0xA));
        assert_eq!(nibble_from_low_hex_digit('F' as u32), Some(0xF));
        assert_eq!(nibble_from_low_hex_digit('g' as u32), None);

        assert_eq!(nibble_from_high_hex_digit('0' as u32), Some(0x00));
        assert_eq!(nibble_from_high_hex_digit('c' as u32), Some(0xC0));
        assert_eq!(nibble_from_high_hex_digit('F' as u32), Some(0xF0));
        assert_eq!(nibble_from_high_hex_digit('/' as u32), None);
    }

    #[test]
    fn test_byte_to_hex_digits() {
        let pairs = [(255, b"FF"), (0, b"00"), (15, b"0F"), (16, b"10"), (154, b"9A"), (167, b"A7"), (6, b"06")];
        for (byte, hex) in pairs {
            assert_eq!(hex_pair(byte), *hex);
            assert_eq!(high_hex_digit(byte), hex[0]);
            assert_eq!(low_hex_digit(byte), hex[1]);
        }
    }

    #[test]
    fn test_split_code_unit() {
        assert_eq!(high_byte(0x263A), 0x26);
        assert_eq!(low_byte(0x263A), 0x3A);
        assert_eq!(high_byte(0x007D), 0x00);
        assert_eq!(low_byte(0x007D), 0x7D);
    }

    #[test]
    fn test_whitespace() {
        assert!(is_whitespace(' ' as u32));
        assert!(is_whitespace('\t' as u32));
        assert!(is_whitespace('\n' as u32));
        assert!(is_whitespace(0x00A0));
        assert!(is_whitespace(0x3000));
        assert!(!is_whitespace('A' as u32));
        assert!(!is_whitespace(0xD800));
    }

    #[test]
    fn test_pending_nibble() {
        let mut nibble = PendingNibble::new();
        assert_eq!(nibble.push(0xA), None);
        assert!(nibble.is_pending());
        assert_eq!(nibble.push(0xB), Some(0xAB));
        assert!(!nibble.is_pending());

        assert_eq!(nibble.push(0xC), None);
        assert_eq!(nibble.flush(), Some(0x0C));
        assert_eq!(nibble.flush(), None);
    }
}
