//! Curve parameter tables, group laws, and the curve registry.
//!
//! Each supported curve is one static parameter record, reproduced
//! bit-exactly from its defining standard:
//!
//! - [`sec`]: the NIST/SECG prime curves of SEC 2 (`secp192r1` through
//!   `secp521r1`),
//! - [`brainpool`]: the seven random-prime curves of RFC 5639,
//! - [`cfrg`]: the twisted Edwards curves of the CFRG drafts
//!   (`edwards25519`, `edwards448`),
//! - [`mdc`]: the Million Dollar Curve, `MDC201601`.
//!
//! The group laws live in [`weierstrass`] and [`edwards`], one generic
//! implementation per family; a parameter record selects which one a
//! point uses. [`find`] resolves a curve from a canonical name, an alias
//! such as `P-256` or `ed25519`, or a dotted OID string; [`supported`]
//! enumerates every record.

use num_bigint::BigInt;

use crate::error::Error;

pub mod edwards;
pub mod weierstrass;

mod brainpool;
mod cfrg;
mod mdc;
mod point;
mod sec;

pub use point::{Curve, Point};

/// Parses a hexadecimal parameter literal.
pub(crate) fn hex_int(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 16).unwrap()
}

/// Parses a decimal parameter literal.
pub(crate) fn dec_int(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 10).unwrap()
}

/// The NIST P-192 curve.
pub fn secp192r1() -> Curve {
    Curve::Weierstrass(&sec::SECP192R1)
}

/// The NIST P-224 curve.
pub fn secp224r1() -> Curve {
    Curve::Weierstrass(&sec::SECP224R1)
}

/// The NIST P-256 curve.
pub fn secp256r1() -> Curve {
    Curve::Weierstrass(&sec::SECP256R1)
}

/// The NIST P-384 curve.
pub fn secp384r1() -> Curve {
    Curve::Weierstrass(&sec::SECP384R1)
}

/// The NIST P-521 curve.
pub fn secp521r1() -> Curve {
    Curve::Weierstrass(&sec::SECP521R1)
}

/// The Brainpool 160-bit curve.
pub fn brainpool_p160r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P160R1)
}

/// The Brainpool 192-bit curve.
pub fn brainpool_p192r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P192R1)
}

/// The Brainpool 224-bit curve.
pub fn brainpool_p224r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P224R1)
}

/// The Brainpool 256-bit curve.
pub fn brainpool_p256r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P256R1)
}

/// The Brainpool 320-bit curve.
pub fn brainpool_p320r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P320R1)
}

/// The Brainpool 384-bit curve.
pub fn brainpool_p384r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P384R1)
}

/// The Brainpool 512-bit curve.
pub fn brainpool_p512r1() -> Curve {
    Curve::Weierstrass(&brainpool::BRAINPOOL_P512R1)
}

/// The CFRG curve over the field of 2^255 - 19.
pub fn edwards25519() -> Curve {
    Curve::Edwards(&cfrg::EDWARDS25519)
}

/// The CFRG curve over the field of 2^448 - 2^224 - 1.
pub fn edwards448() -> Curve {
    Curve::Edwards(&cfrg::EDWARDS448)
}

/// The Million Dollar Curve.
pub fn mdc201601() -> Curve {
    Curve::Edwards(&mdc::MDC201601)
}

/// Every curve this crate supports.
pub fn supported() -> [Curve; 15] {
    [
        secp192r1(),
        secp224r1(),
        secp256r1(),
        secp384r1(),
        secp521r1(),
        brainpool_p160r1(),
        brainpool_p192r1(),
        brainpool_p224r1(),
        brainpool_p256r1(),
        brainpool_p320r1(),
        brainpool_p384r1(),
        brainpool_p512r1(),
        edwards25519(),
        edwards448(),
        mdc201601(),
    ]
}

/// Resolves a curve from a canonical name, an alias, or a dotted OID.
///
/// ```
/// use ecgroup::curves;
///
/// assert_eq!(curves::find("P-256").unwrap().name(), "secp256r1");
/// assert_eq!(curves::find("ed25519").unwrap().name(), "edwards25519");
/// assert_eq!(curves::find("1.2.840.10045.3.1.1").unwrap().name(), "secp192r1");
/// assert!(curves::find("snoopyCurve").is_err());
/// ```
pub fn find(id: &str) -> Result<Curve, Error> {
    supported()
        .into_iter()
        .find(|c| c.name() == id || c.aliases().contains(&id) || c.oid() == Some(id))
        .ok_or_else(|| Error::UnknownCurve(id.to_string()))
}
