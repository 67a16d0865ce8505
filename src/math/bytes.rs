//! Fixed-width integer and byte-string conversion.

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::error::Error;

/// Byte order of a fixed-width integer encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Encodes a non-negative integer as exactly `width` bytes.
///
/// The value is zero-padded to the requested width. Fails when `v` is
/// negative or needs more than `width` bytes.
pub fn lenc(v: &BigInt, width: usize, endian: Endian) -> Result<Vec<u8>, Error> {
    if v.is_negative() {
        return Err(Error::InvalidEncoding("negative integer"));
    }

    let (_, bytes) = v.to_bytes_be();
    let bytes = if v.is_zero() { Vec::new() } else { bytes };
    if bytes.len() > width {
        return Err(Error::Overflow(width));
    }

    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(&bytes);
    if endian == Endian::Little {
        out.reverse();
    }
    Ok(out)
}

/// Decodes a non-negative integer from a byte string.
pub fn ldec(bytes: &[u8], endian: Endian) -> BigInt {
    match endian {
        Endian::Big => BigInt::from_bytes_be(Sign::Plus, bytes),
        Endian::Little => BigInt::from_bytes_le(Sign::Plus, bytes),
    }
}
