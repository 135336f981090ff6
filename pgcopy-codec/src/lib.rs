#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod consts;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;

mod sink;

pub use consts::NULL_SENTINEL;
pub use error::{DecodeError, DecodeErrorKind, EncodeError, EncodeErrorKind};
pub use options::{DecodeOptions, EmptyHex, UnknownEscape};

// Allocation-free API
pub use decode::{decode_into, decode_into_with, is_null, needs_unescape};
pub use encode::{encode_into, encoded_len, needs_escape};

#[cfg(feature = "alloc")]
pub use decode::{decode_copy_value, decode_copy_value_with};
#[cfg(feature = "alloc")]
pub use encode::encode_copy_value;
