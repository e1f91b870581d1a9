//! Non-negative integer value type
//!
//! `UInt` wraps a signed 32-bit cell that is guaranteed to hold a value in
//! `0..=i32::MAX`. It is used for counts and indices inside track records
//! (satellite counts, track numbers, DGPS station ids) where a negative
//! number is meaningless.
//!
//! ## Construction
//!
//! The only way to obtain a `UInt` is through a validating path:
//!
//! ```
//! use geotrack_core::UInt;
//!
//! let sats = UInt::of(12).unwrap();
//! assert_eq!(sats.value(), 12);
//! assert!(UInt::of(-3).is_err());
//! ```
//!
//! Conversions (`TryFrom`, `FromStr`), serde deserialization and the binary
//! codec all route through [`UInt::of`], so no instance with a negative
//! stored value can exist.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Non-negative 32-bit integer
///
/// ## Invariants
///
/// - The stored value is always in `0..=i32::MAX`
/// - Equality, ordering and hashing are by value
/// - Immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UInt(i32);

impl UInt {
    /// The smallest value
    pub const ZERO: UInt = UInt(0);

    /// The largest value (2^31 - 1)
    pub const MAX: UInt = UInt(i32::MAX);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a new unsigned integer with the given value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `value` is negative.
    pub fn of(value: i32) -> Result<Self> {
        if value < 0 {
            return Err(Error::InvalidArgument {
                value: value as i64,
            });
        }
        Ok(UInt(value))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the stored value
    #[inline]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Check if this is zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    // =========================================================================
    // Numeric coercions
    // =========================================================================

    /// Widen to `i64`
    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.0 as i64
    }

    /// Reinterpret as `u32` (lossless, the value is never negative)
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0 as u32
    }

    /// Widen to `u64`
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0 as u64
    }

    /// Convert to `f64` (lossless)
    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Convert to `f32`
    ///
    /// Values above 2^24 are rounded to the nearest representable float.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        self.0 as f32
    }
}

impl fmt::Display for UInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Conversions into UInt
// =============================================================================

impl TryFrom<i32> for UInt {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        UInt::of(value)
    }
}

impl TryFrom<i64> for UInt {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::InvalidArgument { value });
        }
        let cell = i32::try_from(value).map_err(|_| Error::OutOfRange {
            value: value as u64,
            max: i32::MAX as u64,
        })?;
        UInt::of(cell)
    }
}

impl TryFrom<u64> for UInt {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        let cell = i32::try_from(value).map_err(|_| Error::OutOfRange {
            value,
            max: i32::MAX as u64,
        })?;
        UInt::of(cell)
    }
}

impl TryFrom<u32> for UInt {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        UInt::try_from(u64::from(value))
    }
}

impl FromStr for UInt {
    type Err = Error;

    /// Parse a decimal number
    ///
    /// Accepts what the integer parser accepts: an optional `+` and leading
    /// zeros (`"+5"`, `"007"`). Surrounding whitespace is ignored. No grouping
    /// separators, no locale.
    ///
    /// Negative text is always `InvalidArgument`; text too large for the cell
    /// is always `OutOfRange`. Beyond the `i64` range the carried value
    /// saturates at `i64::MIN` / `u64::MAX`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<i64>() {
            Ok(n) => UInt::try_from(n),
            Err(e) => match e.kind() {
                IntErrorKind::NegOverflow => Err(Error::InvalidArgument { value: i64::MIN }),
                IntErrorKind::PosOverflow => Err(Error::OutOfRange {
                    value: u64::MAX,
                    max: i32::MAX as u64,
                }),
                _ => Err(Error::Parse(format!("{:?}: {}", s, e))),
            },
        }
    }
}

// =============================================================================
// Conversions out of UInt
// =============================================================================

impl From<UInt> for i32 {
    fn from(v: UInt) -> Self {
        v.0
    }
}

impl From<UInt> for i64 {
    fn from(v: UInt) -> Self {
        v.as_i64()
    }
}

impl From<UInt> for u32 {
    fn from(v: UInt) -> Self {
        v.as_u32()
    }
}

impl From<UInt> for u64 {
    fn from(v: UInt) -> Self {
        v.as_u64()
    }
}

impl From<UInt> for f64 {
    fn from(v: UInt) -> Self {
        v.as_f64()
    }
}

// ============================================================================
// Tests
// ============================================================================
