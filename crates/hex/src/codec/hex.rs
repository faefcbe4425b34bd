//! Plain hexadecimal codec.
//!
//! Encodes each byte as two uppercase hex digits, pairs separated by a single
//! space: `[0xAB, 0xCD]` becomes `"AB CD"`. Decoding accepts either case and
//! any whitespace between digits.

use super::{TextCodec, scaled};
use crate::error::{CodecError, Result};
use crate::primitives::{PendingNibble, hex_pair, is_whitespace, nibble_from_low_hex_digit};
use crate::span::destination;
use crate::text::TextUnit;
use tracing::{trace, warn};

const EXPECTED: &str = "'\\s0-9a-fA-F' symbols";

/// The plain hex codec. Stateless; use the shared [`HEX`] instance or build
/// one freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hex;

pub static HEX: Hex = Hex;

/// Feeds one text unit to the pair accumulator, returning a completed byte.
///
/// Shared by the count and fill passes so they agree on every unit.
#[inline]
fn scan<T: TextUnit>(nibble: &mut PendingNibble, index: usize, unit: T) -> Result<Option<u8>> {
    let code = unit.code();
    if let Some(value) = nibble_from_low_hex_digit(code) {
        Ok(nibble.push(value))
    } else if is_whitespace(code) {
        Ok(nibble.flush())
    } else {
        Err(CodecError::invalid_character(index, code, EXPECTED))
    }
}

impl TextCodec for Hex {
    fn name(&self) -> &'static str {
        "Hex"
    }

    fn count_bytes_needed<T: TextUnit>(&self, text: &[T]) -> Result<usize> {
        let mut nibble = PendingNibble::new();
        let mut count = 0;
        for (index, &unit) in text.iter().enumerate() {
            if scan(&mut nibble, index, unit)?.is_some() {
                count += 1;
            }
        }
        if nibble.flush().is_some() {
            count += 1;
        }
        trace!(chars = text.len(), bytes = count, "counted hex bytes");
        Ok(count)
    }

    fn fill_bytes<T: TextUnit>(&self, text: &[T], bytes: &mut [u8], offset: usize) -> Result<usize> {
        let needed = self.count_bytes_needed(text)?;
        let dst = destination(bytes, offset, needed).inspect_err(|e| warn!(cause = %e, "reject hex decode"))?;

        let mut nibble = PendingNibble::new();
        let mut written = 0;
        for (index, &unit) in text.iter().enumerate() {
            if let Some(byte) = scan(&mut nibble, index, unit)? {
                dst[written] = byte;
                written += 1;
            }
        }
        if let Some(byte) = nibble.flush() {
            dst[written] = byte;
            written += 1;
        }
        Ok(written)
    }

    fn count_chars_needed(&self, bytes: &[u8]) -> Result<usize> {
        let count = self.max_chars_for(bytes.len())?;
        trace!(bytes = bytes.len(), chars = count, "counted hex chars");
        Ok(count)
    }

    fn fill_chars<T: TextUnit>(&self, bytes: &[u8], chars: &mut [T], offset: usize) -> Result<usize> {
        let needed = self.count_chars_needed(bytes)?;
        let dst = destination(chars, offset, needed).inspect_err(|e| warn!(cause = %e, "reject hex encode"))?;

        let mut written = 0;
        for &byte in bytes {
            if written > 0 {
                dst[written] = T::from_ascii(b' ');
                written += 1;
            }
            let [high, low] = hex_pair(byte);
            dst[written] = T::from_ascii(high);
            dst[written + 1] = T::from_ascii(low);
            written += 2;
        }
        Ok(written)
    }

    fn max_bytes_for(&self, char_count: usize) -> usize {
        char_count.div_ceil(2)
    }

    fn max_chars_for(&self, byte_count: usize) -> Result<usize> {
        if byte_count == 0 {
            return Ok(0);
        }
        // three units per byte, minus the separator the first pair lacks
        Ok(scaled(byte_count, 3, 0)? - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use indoc::indoc;

    #[test]
    fn test_decode_pairs() {
        assert_eq!(HEX.decode("AB").unwrap(), vec![0xAB]);
        assert_eq!(HEX.decode("ab cd ef").unwrap(), vec![0xAB, 0xCD, 0xEF]);
        assert_eq!(HEX.decode("00ff").unwrap(), vec![0x00, 0xFF]);
        assert_eq!(HEX.decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(HEX.decode("   ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_lone_digit() {
        assert_eq!(HEX.decode("A").unwrap(), vec![0x0A]);
        assert_eq!(HEX.decode("A B").unwrap(), vec![0x0A, 0x0B]);
        assert_eq!(HEX.decode("ABC").unwrap(), vec![0xAB, 0x0C]);
        assert_eq!(HEX.decode("1 23 4").unwrap(), vec![0x01, 0x23, 0x04]);
    }

    #[test]
    fn test_decode_multiline() {
        let text = indoc! {"
            48 65 6C
            6C\t6F
        "};
        assert_eq!(HEX.decode(text).unwrap(), b"Hello");
    }

    #[test]
    fn test_decode_invalid_digit() {
        let error = HEX.decode("G1").unwrap_err();
        assert_eq!(error, CodecError::invalid_character(0, 'G' as u32, EXPECTED));
        assert_eq!(error.kind(), ErrorKind::Format);

        assert!(HEX.decode("AB {CD}").is_err());
        assert!(HEX.decode("AB,CD").is_err());
    }

    #[test]
    fn test_fill_bytes_never_writes_invalid_input() {
        let text: Vec<u16> = "AB CD G1".encode_utf16().collect();
        let mut bytes = [0x55u8; 4];
        assert!(HEX.fill_bytes(&text, &mut bytes, 0).is_err());
        assert_eq!(bytes, [0x55; 4]);
    }

    #[test]
    fn test_fill_bytes_at_offset() {
        let text: Vec<u16> = "AB CD".encode_utf16().collect();
        let mut bytes = [0u8; 4];
        assert_eq!(HEX.fill_bytes(&text, &mut bytes, 2).unwrap(), 2);
        assert_eq!(bytes, [0x00, 0x00, 0xAB, 0xCD]);
    }

    #[test]
    fn test_fill_bytes_capacity() {
        let text: Vec<u16> = "AB CD EF".encode_utf16().collect();
        let mut bytes = [0u8; 4];
        let error = HEX.fill_bytes(&text, &mut bytes, 2).unwrap_err();
        assert_eq!(error, CodecError::insufficient_capacity(3, 2));
        assert_eq!(error.kind(), ErrorKind::Range);
        assert_eq!(bytes, [0; 4]);

        let error = HEX.fill_bytes(&text, &mut bytes, 5).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_encode() {
        assert_eq!(HEX.encode(&[]).unwrap(), "");
        assert_eq!(HEX.encode(&[0xAB]).unwrap(), "AB");
        assert_eq!(HEX.encode(&[0xAB, 0xCD]).unwrap(), "AB CD");
        assert_eq!(HEX.encode(b"Hi\n").unwrap(), "48 69 0A");
    }

    #[test]
    fn test_fill_chars_capacity() {
        let mut chars = ['.'; 4];
        let error = HEX.fill_chars(&[0xAB, 0xCD], &mut chars, 0).unwrap_err();
        assert_eq!(error, CodecError::insufficient_capacity(5, 4));
        assert_eq!(chars, ['.'; 4]);
    }

    #[test]
    fn test_fill_chars_at_offset() {
        let mut chars = [b'.'; 7];
        assert_eq!(HEX.fill_chars(&[0x01, 0x02], &mut chars, 2).unwrap(), 5);
        assert_eq!(&chars, b"..01 02");
    }

    #[test]
    fn test_counts() {
        assert_eq!(HEX.count_chars_needed(&[]).unwrap(), 0);
        assert_eq!(HEX.count_chars_needed(&[1]).unwrap(), 2);
        assert_eq!(HEX.count_chars_needed(&[1, 2, 3]).unwrap(), 8);
        assert_eq!(HEX.count_bytes_needed(&"A B CD".chars().collect::<Vec<_>>()).unwrap(), 3);
    }

    #[test]
    fn test_max_counts() {
        assert_eq!(HEX.max_bytes_for(0), 0);
        assert_eq!(HEX.max_bytes_for(1), 1);
        assert_eq!(HEX.max_bytes_for(5), 3);
        assert_eq!(HEX.max_chars_for(0).unwrap(), 0);
        assert_eq!(HEX.max_chars_for(1).unwrap(), 2);
        assert_eq!(HEX.max_chars_for(4).unwrap(), 11);
        assert_eq!(HEX.max_chars_for(usize::MAX).unwrap_err().kind(), ErrorKind::Range);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                let text = HEX.encode(&bytes).unwrap();
                prop_assert_eq!(HEX.decode(&text).unwrap(), bytes);
            }

            #[test]
            fn fill_matches_count(text in "[0-9a-fA-F \t\n]{0,64}") {
                let units: Vec<u16> = text.encode_utf16().collect();
                let needed = HEX.count_bytes_needed(&units).unwrap();
                prop_assert_eq!(HEX.count_bytes_needed(&units).unwrap(), needed);
                prop_assert!(needed <= HEX.max_bytes_for(units.len()));

                let mut bytes = vec![0u8; needed];
                prop_assert_eq!(HEX.fill_bytes(&units, &mut bytes, 0).unwrap(), needed);
            }

            #[test]
            fn encoded_length_matches_bound(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
                let needed = HEX.count_chars_needed(&bytes).unwrap();
                prop_assert_eq!(needed, HEX.max_chars_for(bytes.len()).unwrap());
                prop_assert_eq!(HEX.encode(&bytes).unwrap().len(), needed);
            }
        }
    }
}
