//! geotrack - Value types for GPS track and route records
//!
//! This crate provides the leaf value types used by the track/route document
//! model together with their fixed-width binary encoding.
//!
//! # Quick Start
//!
//! ```
//! use geotrack::{NullableWire, UInt, WireEncode};
//!
//! let sats = UInt::of(12)?;
//!
//! let mut buf = Vec::new();
//! sats.write_to(&mut buf)?;
//! UInt::write_nullable(None, &mut buf)?;
//!
//! let mut reader = buf.as_slice();
//! assert_eq!(UInt::read_from(&mut reader)?, sats);
//! assert_eq!(UInt::read_nullable(&mut reader)?, None);
//! # Ok::<(), geotrack::Error>(())
//! ```

// Re-export the public API from geotrack-core
pub use geotrack_core::*;
