//! Hybrid hex / escaped-ASCII codec.
//!
//! Printable ASCII bytes are written literally inside `{...}` runs, every
//! other byte falls back to a hex pair. Outside a run, a bare `}` stands for
//! the byte `0x7D` itself, so that byte never needs escaping.
//!
//! ```text
//! [0x00, 'H', 'i', 0x7D, 0xFF]  <->  "00 {Hi}} FF"
//! ```

mod decoder;
mod encoder;

use super::TextCodec;
use crate::error::{CodecError, Result};
use crate::span::destination;
use crate::text::TextUnit;
use decoder::DecodeState;
use encoder::EncodeState;
use tracing::{trace, warn};

const OPEN: u8 = b'{';
const CLOSE: u8 = b'}';

/// The HexAscii codec. Stateless; use the shared [`HEX_ASCII`] instance or
/// build one freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexAscii;

pub static HEX_ASCII: HexAscii = HexAscii;

/// A short run of units emitted for a single input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Piece<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> Piece<N> {
    fn empty() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    fn new(units: &[u8]) -> Self {
        let mut piece = Self::empty();
        piece.extend(units.iter().copied());
        piece
    }

    fn push(&mut self, unit: u8) {
        self.buf[self.len] = unit;
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<const N: usize> Extend<u8> for Piece<N> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for unit in iter {
            self.push(unit);
        }
    }
}

impl TextCodec for HexAscii {
    fn name(&self) -> &'static str {
        "Hex{US-ASCII}"
    }

    fn count_bytes_needed<T: TextUnit>(&self, text: &[T]) -> Result<usize> {
        let mut state = DecodeState::default();
        let mut count = 0;
        for (index, &unit) in text.iter().enumerate() {
            count += state.feed(index, unit)?.len();
        }
        if state.finish().is_some() {
            count += 1;
        }
        trace!(chars = text.len(), bytes = count, "counted hex-ascii bytes");
        Ok(count)
    }

    fn fill_bytes<T: TextUnit>(&self, text: &[T], bytes: &mut [u8], offset: usize) -> Result<usize> {
        let needed = self.count_bytes_needed(text)?;
        let dst = destination(bytes, offset, needed).inspect_err(|e| warn!(cause = %e, "reject hex-ascii decode"))?;

        let mut state = DecodeState::default();
        let mut written = 0;
        for (index, &unit) in text.iter().enumerate() {
            let decoded = state.feed(index, unit)?;
            dst[written..written + decoded.len()].copy_from_slice(decoded.as_slice());
            written += decoded.len();
        }
        if let Some(byte) = state.finish() {
            dst[written] = byte;
            written += 1;
        }
        Ok(written)
    }

    fn count_chars_needed(&self, bytes: &[u8]) -> Result<usize> {
        let mut state = EncodeState::default();
        let mut count: usize = 0;
        for &byte in bytes {
            let (emitted, next) = state.step(byte);
            count = count.checked_add(emitted.len()).ok_or_else(|| CodecError::length_overflow(bytes.len()))?;
            state = next;
        }
        count = count.checked_add(state.finish().len()).ok_or_else(|| CodecError::length_overflow(bytes.len()))?;
        trace!(bytes = bytes.len(), chars = count, "counted hex-ascii chars");
        Ok(count)
    }

    fn fill_chars<T: TextUnit>(&self, bytes: &[u8], chars: &mut [T], offset: usize) -> Result<usize> {
        let needed = self.count_chars_needed(bytes)?;
        let dst = destination(chars, offset, needed).inspect_err(|e| warn!(cause = %e, "reject hex-ascii encode"))?;

        let mut state = EncodeState::default();
        let mut written = 0;
        let mut emit = |units: &[u8]| {
            for (slot, &unit) in dst[written..written + units.len()].iter_mut().zip(units) {
                *slot = T::from_ascii(unit);
            }
            written += units.len();
        };
        for &byte in bytes {
            let (emitted, next) = state.step(byte);
            emit(emitted.as_slice());
            state = next;
        }
        emit(state.finish().as_slice());
        Ok(written)
    }

    fn max_bytes_for(&self, char_count: usize) -> usize {
        char_count
    }

    fn max_chars_for(&self, byte_count: usize) -> Result<usize> {
        if byte_count == 0 {
            return Ok(0);
        }
        // seven units cover any two bytes ("{A} 00"), four cover a trailing one
        (byte_count / 2)
            .checked_mul(7)
            .and_then(|n| n.checked_add(byte_count % 2 * 4))
            .map(|n| n - 1)
            .ok_or_else(|| CodecError::length_overflow(byte_count))
    }
}
