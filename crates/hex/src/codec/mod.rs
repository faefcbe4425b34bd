//! Text codecs for binary data.
//!
//! Every conversion follows the same two-pass contract:
//!
//! 1. a **count** pass walks the input, validates it and returns the exact
//!    number of output units;
//! 2. a **fill** pass re-derives that count, checks it against the
//!    destination and only then writes exactly that many units.
//!
//! Malformed input therefore fails before any output is touched, and callers
//! can size their storage exactly.
//!
//! # Codecs
//!
//! - [`Hex`]: space separated pairs of hex digits, `"AB CD"`
//! - [`HexAscii`]: hex pairs for non-printable bytes mixed with `{...}`
//!   escaped runs of printable ASCII, `"00 {Hi}"`
//!
//! # Example
//!
//! ```
//! use micro_hex::codec::{TextCodec, HEX_ASCII};
//!
//! let text = HEX_ASCII.encode(b"\x00Hi").unwrap();
//! assert_eq!(text, "00 {Hi}");
//! assert_eq!(HEX_ASCII.decode(&text).unwrap(), b"\x00Hi");
//! ```

mod hex;
mod hex_ascii;

pub use hex::{HEX, Hex};
pub use hex_ascii::{HEX_ASCII, HexAscii};

use crate::error::{CodecError, Result};
use crate::text::TextUnit;
use bytes::{BufMut, BytesMut};

/// A bidirectional converter between bytes and text units.
///
/// Implementors supply the count and fill passes. The owned conversions are
/// provided on top of them and always size their output exactly.
pub trait TextCodec {
    /// Human readable name of the encoding.
    fn name(&self) -> &'static str;

    /// Exact number of bytes `text` decodes to. Validates the whole input.
    fn count_bytes_needed<T: TextUnit>(&self, text: &[T]) -> Result<usize>;

    /// Decodes `text` into `bytes` starting at `offset`, returning the number of
    /// bytes written.
    fn fill_bytes<T: TextUnit>(&self, text: &[T], bytes: &mut [u8], offset: usize) -> Result<usize>;

    /// Exact number of text units `bytes` encodes to.
    fn count_chars_needed(&self, bytes: &[u8]) -> Result<usize>;

    /// Encodes `bytes` into `chars` starting at `offset`, returning the number of
    /// units written.
    fn fill_chars<T: TextUnit>(&self, bytes: &[u8], chars: &mut [T], offset: usize) -> Result<usize>;

    /// Upper bound of decoded bytes for any text of `char_count` units.
    fn max_bytes_for(&self, char_count: usize) -> usize;

    /// Upper bound of encoded units for any input of `byte_count` bytes.
    fn max_chars_for(&self, byte_count: usize) -> Result<usize>;

    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let units: Vec<char> = text.chars().collect();
        self.decode_units(&units)
    }

    fn decode_units<T: TextUnit>(&self, text: &[T]) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; self.count_bytes_needed(text)?];
        let written = self.fill_bytes(text, &mut bytes, 0)?;
        bytes.truncate(written);
        Ok(bytes)
    }

    /// Appends the decoded bytes of `text` to `dst`, reserving exactly what is needed.
    fn decode_into<T: TextUnit>(&self, text: &[T], dst: &mut BytesMut) -> Result<usize> {
        let needed = self.count_bytes_needed(text)?;
        let start = dst.len();
        dst.reserve(needed);
        dst.put_bytes(0, needed);
        let written = match self.fill_bytes(text, &mut dst[start..], 0) {
            Ok(written) => written,
            Err(e) => {
                dst.truncate(start);
                return Err(e);
            }
        };
        dst.truncate(start + written);
        Ok(written)
    }

    fn encode(&self, bytes: &[u8]) -> Result<String> {
        let units: Vec<u8> = self.encode_units(bytes)?;
        Ok(units.into_iter().map(char::from).collect())
    }

    fn encode_units<T: TextUnit>(&self, bytes: &[u8]) -> Result<Vec<T>> {
        let mut chars = vec![T::from_ascii(0); self.count_chars_needed(bytes)?];
        let written = self.fill_chars(bytes, &mut chars, 0)?;
        chars.truncate(written);
        Ok(chars)
    }
}

/// Multiplies and adds in `usize`, reporting overflow against `count`.
pub(crate) fn scaled(count: usize, factor: usize, extra: usize) -> Result<usize> {
    count
        .checked_mul(factor)
        .and_then(|n| n.checked_add(extra))
        .ok_or_else(|| CodecError::length_overflow(count))
}
