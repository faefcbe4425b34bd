//! Runtime selection of a codec by name.

use crate::codec::{HEX, HEX_ASCII, TextCodec};
use crate::error::{CodecError, Result};
use crate::text::TextUnit;
use std::fmt;
use std::str::FromStr;

/// One of the available codecs, chosen at runtime.
///
/// `Encoding` is itself a [`TextCodec`] and forwards every operation to the
/// codec it names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Hex,
    HexAscii,
}

impl Encoding {
    pub const ALL: [Encoding; 2] = [Encoding::Hex, Encoding::HexAscii];
}

macro_rules! dispatch {
    ($self:ident, $codec:ident => $call:expr) => {
        match $self {
            Encoding::Hex => {
                let $codec = &HEX;
                $call
            }
            Encoding::HexAscii => {
                let $codec = &HEX_ASCII;
                $call
            }
        }
    };
}

impl TextCodec for Encoding {
    fn name(&self) -> &'static str {
        dispatch!(self, codec => codec.name())
    }

    fn count_bytes_needed<T: TextUnit>(&self, text: &[T]) -> Result<usize> {
        dispatch!(self, codec => codec.count_bytes_needed(text))
    }

    fn fill_bytes<T: TextUnit>(&self, text: &[T], bytes: &mut [u8], offset: usize) -> Result<usize> {
        dispatch!(self, codec => codec.fill_bytes(text, bytes, offset))
    }

    fn count_chars_needed(&self, bytes: &[u8]) -> Result<usize> {
        dispatch!(self, codec => codec.count_chars_needed(bytes))
    }

    fn fill_chars<T: TextUnit>(&self, bytes: &[u8], chars: &mut [T], offset: usize) -> Result<usize> {
        dispatch!(self, codec => codec.fill_chars(bytes, chars, offset))
    }

    fn max_bytes_for(&self, char_count: usize) -> usize {
        dispatch!(self, codec => codec.max_bytes_for(char_count))
    }

    fn max_chars_for(&self, byte_count: usize) -> Result<usize> {
        dispatch!(self, codec => codec.max_chars_for(byte_count))
    }
}

impl FromStr for Encoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let found = Encoding::ALL.into_iter().find(|encoding| encoding.name().eq_ignore_ascii_case(name));
        if let Some(encoding) = found {
            return Ok(encoding);
        }
        match name.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "hexascii" | "hex-ascii" | "hascii" => Ok(Encoding::HexAscii),
            _ => Err(CodecError::unknown_encoding(s)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
