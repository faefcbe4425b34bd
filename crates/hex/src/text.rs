//! Text unit abstraction.
//!
//! The text side of both codecs is a sequence of units, each holding one
//! code point. UTF-16 code units (`u16`) are the canonical form; `char` and
//! `u8` (read as Latin-1) work the same way. Encoders only ever produce ASCII,
//! which every unit type can hold.

/// A single unit of a text sequence.
pub trait TextUnit: Copy {
    /// The code point value of this unit.
    fn code(self) -> u32;

    /// Builds a unit from an ASCII byte.
    fn from_ascii(byte: u8) -> Self;
}

impl TextUnit for u16 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        u16::from(byte)
    }
}

impl TextUnit for char {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        char::from(byte)
    }
}

impl TextUnit for u8 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_ascii(byte: u8) -> Self {
        byte
    }
}
