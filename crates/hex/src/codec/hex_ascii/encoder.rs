//! Four-state machine driving HexAscii encoding.
//!
//! The state is carried across the whole input. Each byte is classified, and
//! the pair `(state, class)` selects both the emitted text and the next state
//! from a single table. Count and fill replay the same table, so they cannot
//! disagree on the output length.

use super::{CLOSE, OPEN, Piece};
use crate::primitives::hex_pair;
use EncodeState::*;

/// Encoding progress, as seen by the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum EncodeState {
    /// Nothing emitted yet
    #[default]
    Start,
    /// Inside an open `{...}` run
    Escaping,
    /// Last emitted token was a hex pair
    Hex,
    /// Last emitted token was a bare `}`
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    /// Outside `0x20..=0x7E`, written as a hex pair
    Hex,
    /// Printable ASCII other than `}`, written literally inside an escape
    Printable,
    /// `}` itself, which is literal outside an escape
    Close,
}

impl ByteClass {
    fn of(byte: u8) -> Self {
        match byte {
            CLOSE => ByteClass::Close,
            0x20..=0x7E => ByteClass::Printable,
            _ => ByteClass::Hex,
        }
    }
}

pub(super) type Emitted = Piece<4>;

impl EncodeState {
    /// Emits the text for `byte` and returns the state after it.
    pub(super) fn step(self, byte: u8) -> (Emitted, EncodeState) {
        let [high, low] = hex_pair(byte);
        match (self, ByteClass::of(byte)) {
            (Start, ByteClass::Hex) => (Piece::new(&[high, low]), Hex),
            (Start | Other, ByteClass::Printable) => (Piece::new(&[OPEN, byte]), Escaping),
            (Start | Other, ByteClass::Close) => (Piece::new(&[CLOSE]), Other),

            (Hex | Other, ByteClass::Hex) => (Piece::new(&[b' ', high, low]), Hex),
            (Hex, ByteClass::Printable) => (Piece::new(&[b' ', OPEN, byte]), Escaping),
            (Hex, ByteClass::Close) => (Piece::new(&[b' ', CLOSE]), Other),

            (Escaping, ByteClass::Hex) => (Piece::new(&[CLOSE, b' ', high, low]), Hex),
            (Escaping, ByteClass::Printable) => (Piece::new(&[byte]), Escaping),
            (Escaping, ByteClass::Close) => (Piece::new(&[CLOSE, CLOSE]), Other),
        }
    }

    /// Closes a dangling escape at the end of input.
    pub(super) fn finish(self) -> Emitted {
        match self {
            Escaping => Piece::new(&[CLOSE]),
            Start | Hex | Other => Piece::empty(),
        }
    }
}
