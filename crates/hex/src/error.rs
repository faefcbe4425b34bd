use thiserror::Error;

/// Broad classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An offset, length or capacity outside the bounds of its sequence.
    Range,
    /// Input text outside the grammar of the codec.
    Format,
    /// An encoding name that no codec answers to.
    Lookup,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("span out of range: offset {offset} with length {len} exceeds sequence length {available}")]
    SpanOutOfRange { offset: usize, len: usize, available: usize },

    #[error("not enough capacity: need {needed} units, only {available} available from the offset")]
    InsufficientCapacity { needed: usize, available: usize },

    #[error("length overflow while sizing output for {count} units")]
    LengthOverflow { count: usize },

    #[error("invalid character {code:#06x} at index {index}, must contain only {expected}")]
    InvalidCharacter { index: usize, code: u32, expected: &'static str },

    #[error("escaped character {code:#06x} at index {index} does not fit in a single byte")]
    UnrepresentableCharacter { index: usize, code: u32 },

    #[error("unknown encoding: {name}")]
    UnknownEncoding { name: String },
}

impl CodecError {
    pub fn span_out_of_range(offset: usize, len: usize, available: usize) -> Self {
        Self::SpanOutOfRange { offset, len, available }
    }

    pub fn insufficient_capacity(needed: usize, available: usize) -> Self {
        Self::InsufficientCapacity { needed, available }
    }

    pub fn length_overflow(count: usize) -> Self {
        Self::LengthOverflow { count }
    }

    pub fn invalid_character(index: usize, code: u32, expected: &'static str) -> Self {
        Self::InvalidCharacter { index, code, expected }
    }

    pub fn unrepresentable_character(index: usize, code: u32) -> Self {
        Self::UnrepresentableCharacter { index, code }
    }

    pub fn unknown_encoding<S: ToString>(name: S) -> Self {
        Self::UnknownEncoding { name: name.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SpanOutOfRange { .. } | Self::InsufficientCapacity { .. } | Self::LengthOverflow { .. } => {
                ErrorKind::Range
            }
            Self::InvalidCharacter { .. } | Self::UnrepresentableCharacter { .. } => ErrorKind::Format,
            Self::UnknownEncoding { .. } => ErrorKind::Lookup,
        }
    }
}

pub type Result<T, E = CodecError> = std::result::Result<T, E>;
