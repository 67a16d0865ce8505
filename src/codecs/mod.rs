//! Point serialization formats.
//!
//! Four codecs are provided, all operating through the point contract's
//! `primary`/`secondary` coordinate pair so that one implementation
//! serves both curve families:
//!
//! - [`sec1`]
//!   The SEC1 format: a tag byte followed by big-endian fixed-width
//!   coordinates. Uncompressed (`0x04`) carries both coordinates;
//!   compressed (`0x02`/`0x03`) carries the primary coordinate and folds
//!   the secondary into the tag.
//!
//! - [`cfrg`]
//!   The little-endian format discussed on the CFRG list: one byte wider
//!   than the primary coordinate, with the sign bit stored in the top bit
//!   of the final byte.
//!
//! - [`eddsa`]
//!   The RFC 8032 style encoding: little-endian primary coordinate with
//!   the sign bit packed into its spare top bit. Only defined for curves
//!   whose bit length is not a multiple of eight, since a byte-aligned
//!   curve has no spare bit.
//!
//! - [`jwk`]
//!   JSON Web Keys for the three NIST P curves, with base64url
//!   coordinates and an optional private scalar.
//!
//! Every decoder is strict: it checks lengths and tags, and it rejects
//! any decoded point that fails the curve equation. Encoders refuse the
//! identity, which has no finite coordinates to serialize.

pub mod cfrg;
pub mod eddsa;
pub mod jwk;
pub mod sec1;

use num_bigint::BigInt;

use crate::curves::Point;
use crate::error::Error;

/// The byte width of one coordinate, `ceil(bits / 8)`.
pub(crate) fn coordinate_width(bits: u64) -> usize {
    bits.div_ceil(8) as usize
}

/// The primary and secondary coordinates of a finite point.
///
/// Fails with [`Error::InvalidPoint`] for the identity.
pub(crate) fn finite_coordinates(point: &Point) -> Result<(BigInt, BigInt), Error> {
    match (point.primary(), point.secondary()) {
        (Some(primary), Some(secondary)) => Ok((primary, secondary)),
        _ => Err(Error::InvalidPoint),
    }
}
