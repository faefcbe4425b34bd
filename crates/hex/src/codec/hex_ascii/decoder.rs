use super::{CLOSE, OPEN, Piece};
use crate::error::{CodecError, Result};
use crate::primitives::{PendingNibble, is_whitespace, nibble_from_low_hex_digit};
use crate::text::TextUnit;

const EXPECTED: &str = "'\\s{}0-9a-fA-F' symbols";

/// Up to two bytes: a flushed lone digit followed by a literal `}`.
pub(super) type Decoded = Piece<2>;

/// Scanner state for HexAscii text.
///
/// Decoding needs only two flags: whether an escape is open, and whether a
/// hex digit is waiting for its partner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct DecodeState {
    nibble: PendingNibble,
    escaping: bool,
}

impl DecodeState {
    /// Feeds the unit at `index`, returning the bytes it completes.
    pub(super) fn feed<T: TextUnit>(&mut self, index: usize, unit: T) -> Result<Decoded> {
        let code = unit.code();

        if self.escaping {
            if code == u32::from(CLOSE) {
                self.escaping = false;
                return Ok(Piece::empty());
            }
            let Ok(byte) = u8::try_from(code) else {
                return Err(CodecError::unrepresentable_character(index, code));
            };
            return Ok(Piece::new(&[byte]));
        }

        let mut decoded = Piece::empty();
        if code == u32::from(OPEN) {
            decoded.extend(self.nibble.flush());
            self.escaping = true;
        } else if code == u32::from(CLOSE) {
            decoded.extend(self.nibble.flush());
            decoded.extend(Some(CLOSE));
        } else if let Some(value) = nibble_from_low_hex_digit(code) {
            decoded.extend(self.nibble.push(value));
        } else if is_whitespace(code) {
            decoded.extend(self.nibble.flush());
        } else {
            return Err(CodecError::invalid_character(index, code, EXPECTED));
        }
        Ok(decoded)
    }

    /// Flushes a lone trailing digit. An escape left open simply ends here.
    pub(super) fn finish(&mut self) -> Option<u8> {
        self.escaping = false;
        self.nibble.flush()
    }
}
