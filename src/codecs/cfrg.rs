//! The CFRG little-endian point format.
//!
//! A fixed-width little-endian encoding one byte wider than the primary
//! coordinate: `ceil(bits / 8) + 1` bytes, with the low bit of the
//! secondary coordinate stored in the most significant bit of the final
//! byte. The extra byte means the sign bit never collides with the
//! coordinate, for any curve.

use num_bigint::BigInt;
use num_traits::One;

use crate::curves::{Curve, Point};
use crate::error::Error;
use crate::math::{Endian, ldec, lenc};

use super::{coordinate_width, finite_coordinates};

/// The encoded width for a curve, in bytes.
fn encoded_width(curve: Curve) -> usize {
    coordinate_width(curve.bits()) + 1
}

/// Serializes a point.
///
/// Fails when the point is the identity.
pub fn encode(point: &Point) -> Result<Vec<u8>, Error> {
    let (primary, secondary) = finite_coordinates(point)?;
    let width = encoded_width(point.curve());

    let sign_position = (width * 8 - 1) as u64;
    let v = if secondary.bit(0) {
        primary | (BigInt::one() << sign_position)
    } else {
        primary
    };
    lenc(&v, width, Endian::Little)
}

/// Parses a point.
///
/// The input must be exactly the encoded width, and the recovered point
/// must satisfy the curve equation.
pub fn decode(curve: Curve, bytes: &[u8]) -> Result<Point, Error> {
    let width = encoded_width(curve);
    if bytes.len() != width {
        return Err(Error::InvalidEncoding("wrong length"));
    }

    let v = ldec(bytes, Endian::Little);
    let sign_position = (width * 8 - 1) as u64;
    let bit = v.bit(sign_position);
    let primary = if bit {
        v - (BigInt::one() << sign_position)
    } else {
        v
    };

    let point = curve.recover(&primary, bit)?;
    if !point.is_valid() {
        return Err(Error::InvalidPoint);
    }
    Ok(point)
}
