//! Wire layout constants
//!
//! Every value type in this crate is persisted as a single fixed-width
//! signed 32-bit cell. There is no length prefix and no tag byte, so an
//! enclosing record can place cells at known offsets.
//!
//! ## Layout
//!
//! ```text
//! [value: i32, WireOrder]          non-nullable, must be >= 0
//! [value: i32, WireOrder]          nullable, -1 = absent
//! ```
//!
//! ## Contract
//!
//! The byte order is FROZEN per deployment: encoders and decoders must agree.
//! The `_with` codec variants take the order as a type parameter for
//! deployments that fix a different one.

/// Byte order used by the default codec functions
pub type WireOrder = byteorder::BigEndian;

/// Width of an encoded cell in bytes
pub const ENCODED_LEN: usize = 4;

/// Cell value marking an absent optional field
///
/// Safe only while the value domain excludes negative numbers.
pub const NULL_SENTINEL: i32 = -1;
