//! JSON Web Keys for the NIST P curves.
//!
//! Produces and consumes the RFC 7518 `EC` key type: an object holding
//! the curve name and base64url-encoded fixed-width coordinates, plus an
//! optional private scalar under `d`. Only `P-256`, `P-384` and `P-521`
//! have registered JWK names, so the codec is limited to those three
//! curves.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::curves::{Point, find};
use crate::error::Error;
use crate::math::{Endian, ldec, lenc};

use super::coordinate_width;

/// Registered JWK curve names, keyed by canonical curve name.
const NAMES: [(&str, &str); 3] = [
    ("secp256r1", "P-256"),
    ("secp384r1", "P-384"),
    ("secp521r1", "P-521"),
];

/// A JSON Web Key of key type `EC`.
///
/// Serializes to exactly the member set RFC 7518 defines for an elliptic
/// curve key; `d` is omitted for a public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type; always `"EC"`.
    pub kty: String,
    /// JWK curve name, e.g. `"P-256"`.
    pub crv: String,
    /// Base64url x coordinate.
    pub x: String,
    /// Base64url y coordinate.
    pub y: String,
    /// Base64url private scalar, present for private keys only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

fn b64(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn b64_decode(s: &str) -> Result<Vec<u8>, Error> {
    URL_SAFE_NO_PAD
        .decode(s)
        .map_err(|_| Error::InvalidEncoding("invalid base64url"))
}

/// Serializes a public point, optionally together with its private
/// scalar.
///
/// Fails for the identity and for curves without a registered JWK name.
pub fn encode(point: &Point, prv: Option<&BigInt>) -> Result<Jwk, Error> {
    let curve = point.curve();
    let crv = NAMES
        .iter()
        .find(|(name, _)| *name == curve.name())
        .map(|(_, jwk)| *jwk)
        .ok_or(Error::Unsupported("the jwk encoding"))?;

    let (Some(x), Some(y)) = (point.x(), point.y()) else {
        return Err(Error::InvalidPoint);
    };
    let width = coordinate_width(curve.bits());

    let d = match prv {
        Some(prv) => Some(b64(&lenc(prv, width, Endian::Big)?)),
        None => None,
    };

    Ok(Jwk {
        kty: "EC".to_string(),
        crv: crv.to_string(),
        x: b64(&lenc(&x, width, Endian::Big)?),
        y: b64(&lenc(&y, width, Endian::Big)?),
        d,
    })
}

/// Parses a JWK into a point and, when present, its private scalar.
///
/// Coordinates must have exactly the fixed width of the named curve, and
/// the point must satisfy the curve equation.
pub fn decode(jwk: &Jwk) -> Result<(Point, Option<BigInt>), Error> {
    if jwk.kty != "EC" {
        return Err(Error::InvalidEncoding("key type is not EC"));
    }
    if !NAMES.iter().any(|(_, name)| *name == jwk.crv) {
        return Err(Error::UnknownCurve(jwk.crv.clone()));
    }

    let curve = find(&jwk.crv)?;
    let width = coordinate_width(curve.bits());

    let x = b64_decode(&jwk.x)?;
    let y = b64_decode(&jwk.y)?;
    if x.len() != width || y.len() != width {
        return Err(Error::InvalidEncoding("wrong coordinate length"));
    }

    let point = curve.from_affine(ldec(&x, Endian::Big), ldec(&y, Endian::Big));
    if !point.is_valid() {
        return Err(Error::InvalidPoint);
    }

    let d = match &jwk.d {
        Some(d) => Some(ldec(&b64_decode(d)?, Endian::Big)),
        None => None,
    };
    Ok((point, d))
}
