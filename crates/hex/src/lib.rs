//! Micro hex text codecs
//!
//! This crate converts arbitrary binary data to and from two human readable
//! text forms:
//!
//! - **Hex**: space separated hex pairs, `"48 69 0A"`
//! - **HexAscii**: hex pairs for non-printable bytes and `{...}` escaped runs
//!   for printable ASCII, `"{Hi} 0A"`
//!
//! Both are lossless: decoding the encoded form of any byte sequence gives the
//! same bytes back.
//!
//! # Two-pass conversions
//!
//! Every direction is split into a **count** pass and a **fill** pass. Count
//! validates the input and returns the exact output size; fill writes exactly
//! that many units into caller-owned storage, starting at an offset. Bad input
//! or a short destination is reported before anything is written.
//!
//! ```
//! use micro_hex::codec::{TextCodec, HEX};
//!
//! let text: Vec<u16> = "AB CD".encode_utf16().collect();
//! let needed = HEX.count_bytes_needed(&text).unwrap();
//!
//! let mut bytes = vec![0u8; needed];
//! let written = HEX.fill_bytes(&text, &mut bytes, 0).unwrap();
//! assert_eq!(written, needed);
//! assert_eq!(bytes, [0xAB, 0xCD]);
//! ```
//!
//! The provided methods [`TextCodec::encode`] and [`TextCodec::decode`] do both
//! passes for you when owned output is fine.
//!
//! # Architecture
//!
//! - [`codec`]: the [`codec::TextCodec`] trait and the [`codec::Hex`] and
//!   [`codec::HexAscii`] codecs
//! - [`encoding`]: choosing a codec by name at runtime
//! - [`primitives`]: hex digit classification and nibble helpers
//! - [`span`]: checked sub-range views
//! - [`text`]: the [`text::TextUnit`] abstraction over `u16`, `char` and `u8`
//!
//! Codecs carry no state. The shared instances [`codec::HEX`] and
//! [`codec::HEX_ASCII`] can be used from any thread without synchronization.

pub mod codec;
pub mod encoding;
pub mod error;
pub mod primitives;
pub mod span;
pub mod text;

mod utils;

pub use bytes;
pub use codec::TextCodec;
pub use encoding::Encoding;
pub use error::{CodecError, ErrorKind, Result};
pub use text::TextUnit;
