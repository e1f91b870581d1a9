//! Binary cell encoding
//!
//! Value types are written as a single signed 32-bit cell (see [`crate::wire`]).
//! Decoding never assigns the raw cell directly: every decoded cell goes
//! through the same validating constructor used by normal construction, so a
//! corrupted or hostile byte stream cannot produce an invalid instance.
//!
//! ## Nullable cells
//!
//! Optional fields inside fixed-layout records use the same 4-byte cell with
//! [`NULL_SENTINEL`] (`-1`) marking an absent value. There is no separate
//! presence byte. This only works because the value domain is non-negative.
//!
//! ```text
//! Some(17)  ->  00 00 00 11
//! None      ->  FF FF FF FF
//! ```

use crate::error::Result;
use crate::uint::UInt;
use crate::wire::{WireOrder, ENCODED_LEN, NULL_SENTINEL};
use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use tracing::{trace, warn};

/// Fixed-width binary encoding of a value type
///
/// The `_with` methods take the byte order as a type parameter; the plain
/// methods use [`WireOrder`].
pub trait WireEncode: Sized {
    /// Write the cell using byte order `B`
    fn write_to_with<B: ByteOrder, W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Read exactly one cell using byte order `B`
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` on a short read and `Error::InvalidArgument` if the
    /// cell holds a value outside the type's domain.
    fn read_from_with<B: ByteOrder, R: Read>(reader: &mut R) -> Result<Self>;

    /// Write the cell in wire order
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.write_to_with::<WireOrder, W>(writer)
    }

    /// Read one cell in wire order
    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        Self::read_from_with::<WireOrder, R>(reader)
    }
}

/// Sentinel-based optional encoding
///
/// Only implemented by types whose domain can never contain [`NULL_SENTINEL`].
pub trait NullableWire: WireEncode {
    /// Write `Some(v)` as the plain cell of `v` and `None` as the sentinel
    fn write_nullable_with<B: ByteOrder, W: Write>(
        value: Option<&Self>,
        writer: &mut W,
    ) -> Result<()>;

    /// Read one cell, mapping the sentinel to `None`
    fn read_nullable_with<B: ByteOrder, R: Read>(reader: &mut R) -> Result<Option<Self>>;

    /// Write an optional value in wire order
    fn write_nullable<W: Write>(value: Option<&Self>, writer: &mut W) -> Result<()> {
        Self::write_nullable_with::<WireOrder, W>(value, writer)
    }

    /// Read an optional value in wire order
    fn read_nullable<R: Read>(reader: &mut R) -> Result<Option<Self>> {
        Self::read_nullable_with::<WireOrder, R>(reader)
    }
}

/// Validate a raw cell
fn decode_cell(cell: i32) -> Result<UInt> {
    UInt::of(cell).map_err(|e| {
        warn!(value = cell, "Negative value in UInt cell, data is corrupt");
        e
    })
}

impl WireEncode for UInt {
    fn write_to_with<B: ByteOrder, W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<B>(self.value())?;
        Ok(())
    }

    fn read_from_with<B: ByteOrder, R: Read>(reader: &mut R) -> Result<Self> {
        let cell = reader.read_i32::<B>()?;
        decode_cell(cell)
    }
}

impl NullableWire for UInt {
    fn write_nullable_with<B: ByteOrder, W: Write>(
        value: Option<&Self>,
        writer: &mut W,
    ) -> Result<()> {
        match value {
            Some(v) => v.write_to_with::<B, W>(writer),
            None => {
                writer.write_i32::<B>(NULL_SENTINEL)?;
                Ok(())
            }
        }
    }

    fn read_nullable_with<B: ByteOrder, R: Read>(reader: &mut R) -> Result<Option<Self>> {
        let cell = reader.read_i32::<B>()?;
        if cell == NULL_SENTINEL {
            trace!("Absent UInt cell");
            return Ok(None);
        }
        decode_cell(cell).map(Some)
    }
}

// =============================================================================
// Fixed-offset helpers
// =============================================================================

impl UInt {
    /// Encode as a wire-order cell
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        WireOrder::write_i32(&mut buf, self.value());
        buf
    }

    /// Decode a wire-order cell
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the cell is negative.
    pub fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Result<Self> {
        decode_cell(WireOrder::read_i32(&bytes))
    }

    /// Encode an optional value as a wire-order cell
    pub fn nullable_to_bytes(value: Option<UInt>) -> [u8; ENCODED_LEN] {
        match value {
            Some(v) => v.to_bytes(),
            None => {
                let mut buf = [0u8; ENCODED_LEN];
                WireOrder::write_i32(&mut buf, NULL_SENTINEL);
                buf
            }
        }
    }

    /// Decode an optional value from a wire-order cell
    pub fn nullable_from_bytes(bytes: [u8; ENCODED_LEN]) -> Result<Option<UInt>> {
        let cell = WireOrder::read_i32(&bytes);
        if cell == NULL_SENTINEL {
            return Ok(None);
        }
        decode_cell(cell).map(Some)
    }
}
