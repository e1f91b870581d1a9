//! Core value types for geotrack
//!
//! This crate defines the leaf value types embedded in track/route records
//! and their fixed-width binary encoding:
//! - UInt: Validated non-negative 32-bit integer
//! - Error: Error type for construction, parsing and decoding
//! - WireEncode / NullableWire: Binary cell codec, including the sentinel-based
//!   optional form
//! - wire: Layout constants (cell width, sentinel, byte order)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod uint;
pub mod wire;

pub use codec::{NullableWire, WireEncode};
pub use error::{Error, Result};
pub use uint::UInt;
pub use wire::{WireOrder, ENCODED_LEN, NULL_SENTINEL};
