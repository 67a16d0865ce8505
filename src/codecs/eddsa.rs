//! The EdDSA-style point format of RFC 8032.
//!
//! The primary coordinate is encoded little-endian in `ceil(bits / 8)`
//! bytes, and the low bit of the secondary coordinate is stored at bit
//! position `bits`, the spare top bit of the final byte. The format is
//! therefore only defined for curves whose bit length is not a multiple
//! of eight; a byte-aligned curve has no spare bit to store the sign in.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::curves::{Curve, Point};
use crate::error::Error;
use crate::math::{Endian, ldec, lenc};

use super::{coordinate_width, finite_coordinates};

/// Rejects curves the format is not defined for.
fn check_supported(curve: Curve) -> Result<(), Error> {
    if curve.bits() % 8 == 0 {
        return Err(Error::Unsupported("the eddsa encoding"));
    }
    Ok(())
}

/// Serializes a point.
///
/// Fails for byte-aligned curves and for the identity.
pub fn encode(point: &Point) -> Result<Vec<u8>, Error> {
    let curve = point.curve();
    check_supported(curve)?;

    let (primary, secondary) = finite_coordinates(point)?;
    let v = if secondary.bit(0) {
        primary | (BigInt::one() << curve.bits())
    } else {
        primary
    };
    lenc(&v, coordinate_width(curve.bits()), Endian::Little)
}

/// Parses a point.
///
/// The sign bit is read from bit position `bits` and cleared before
/// recovery; any set bit above it makes the input non-canonical and is
/// rejected.
pub fn decode(curve: Curve, bytes: &[u8]) -> Result<Point, Error> {
    check_supported(curve)?;
    if bytes.len() != coordinate_width(curve.bits()) {
        return Err(Error::InvalidEncoding("wrong length"));
    }

    let v = ldec(bytes, Endian::Little);
    let bit = v.bit(curve.bits());
    let mut primary = v;
    if bit {
        primary -= BigInt::one() << curve.bits();
    }
    if !(&primary >> (curve.bits() + 1)).is_zero() {
        return Err(Error::InvalidEncoding("non-canonical encoding"));
    }

    let point = curve.recover(&primary, bit)?;
    if !point.is_valid() {
        return Err(Error::InvalidPoint);
    }
    Ok(point)
}
