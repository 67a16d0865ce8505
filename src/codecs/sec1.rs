//! The SEC1 point format.
//!
//! Wire layout: a single tag byte, then big-endian coordinates of fixed
//! width `ceil(bits / 8)`. Tag `0x04` is the uncompressed form carrying
//! both coordinates; tags `0x02` and `0x03` are the compressed form
//! carrying the primary coordinate, with the tag's low bit holding the
//! low bit of the secondary coordinate. There is no length prefix.

use crate::curves::{Curve, Point};
use crate::error::Error;
use crate::math::{Endian, ldec, lenc};

use super::{coordinate_width, finite_coordinates};

/// Serializes a point.
///
/// Fails when the point is the identity, which SEC1 cannot represent.
pub fn encode(point: &Point, compressed: bool) -> Result<Vec<u8>, Error> {
    let (primary, secondary) = finite_coordinates(point)?;
    let width = coordinate_width(point.curve().bits());

    let mut out;
    if compressed {
        out = vec![0x02 | (secondary.bit(0) as u8)];
        out.extend(lenc(&primary, width, Endian::Big)?);
    } else {
        out = vec![0x04];
        out.extend(lenc(&primary, width, Endian::Big)?);
        out.extend(lenc(&secondary, width, Endian::Big)?);
    }
    Ok(out)
}

/// Parses a point, accepting either form.
///
/// The input length must match the tag exactly, and the resulting point
/// must satisfy the curve equation.
pub fn decode(curve: Curve, bytes: &[u8]) -> Result<Point, Error> {
    let width = coordinate_width(curve.bits());
    let (&tag, rest) = bytes
        .split_first()
        .ok_or(Error::InvalidEncoding("empty input"))?;

    let point = match tag {
        0x04 => {
            if rest.len() != 2 * width {
                return Err(Error::InvalidEncoding("wrong length"));
            }
            let primary = ldec(&rest[..width], Endian::Big);
            let secondary = ldec(&rest[width..], Endian::Big);
            curve.create(primary, secondary)
        }
        0x02 | 0x03 => {
            if rest.len() != width {
                return Err(Error::InvalidEncoding("wrong length"));
            }
            curve.recover(&ldec(rest, Endian::Big), tag & 1 == 1)?
        }
        _ => return Err(Error::InvalidEncoding("unknown tag byte")),
    };

    if !point.is_valid() {
        return Err(Error::InvalidPoint);
    }
    Ok(point)
}
