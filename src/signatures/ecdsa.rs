//! ECDSA signing and verification, per FIPS 186 and RFC 4754.
//!
//! Both operations take the message digest as an opaque byte string and
//! interpret it as a big-endian integer truncated to the curve's bit
//! length. Nonce generation draws from a caller-supplied RNG; a fixed
//! nonce can be injected for running published test vectors. There is no
//! deterministic (RFC 6979) nonce derivation here.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::curves::{Curve, Point};
use crate::error::Error;
use crate::math::{Endian, inv, ldec};

/// Interprets a digest as an integer truncated to the curve bit length.
fn truncate_digest(curve: Curve, digest: &[u8]) -> BigInt {
    ldec(digest, Endian::Big) & ((BigInt::one() << curve.bits()) - 1)
}

/// Signs a digest with the private scalar `prv`, returning `(r, s)`.
///
/// The nonce is a fresh random private key per attempt, or `k_override`
/// when one is supplied; the loop retries on the astronomically rare
/// zero `r` or `s`. A fixed nonce that produces a zero component cannot
/// be retried and is rejected instead.
///
/// Fails when the curve is not a short Weierstrass curve, or when `prv`
/// or `k_override` lies outside `[1, order - 1]`.
pub fn sign<R: RngCore + CryptoRng>(
    curve: Curve,
    prv: &BigInt,
    digest: &[u8],
    k_override: Option<&BigInt>,
    rng: &mut R,
) -> Result<(BigInt, BigInt), Error> {
    if !matches!(curve, Curve::Weierstrass(_)) {
        return Err(Error::Unsupported("ecdsa signing"));
    }

    let n = curve.order();
    let one = BigInt::one();
    if prv < &one || prv >= n {
        return Err(Error::InvalidScalar);
    }
    if let Some(k) = k_override {
        if k < &one || k >= n {
            return Err(Error::InvalidScalar);
        }
    }

    let z = truncate_digest(curve, digest);
    let generator = curve.generator();

    loop {
        let k = match k_override {
            Some(k) => k.clone(),
            None => curve.private_key(rng, &one),
        };

        // k is in [1, n - 1], so both the point and the inverse exist.
        let Some(primary) = (&generator * &k).primary() else {
            continue;
        };
        let Some(ki) = inv(&k, n) else {
            continue;
        };

        let r = primary.mod_floor(n);
        let s = (&ki * (&z + &r * prv)).mod_floor(n);

        if !r.is_zero() && !s.is_zero() {
            return Ok((r, s));
        }
        if k_override.is_some() {
            return Err(Error::InvalidScalar);
        }
    }
}

/// Verifies an `(r, s)` signature over a digest against a public key.
///
/// Returns `false`, never an error, for anything that does not verify:
/// an invalid or wrong-order public key, an out-of-range `r` or `s`, or
/// a mismatched digest. Only defined for short Weierstrass curves.
pub fn verify(public: &Point, digest: &[u8], r: &BigInt, s: &BigInt) -> bool {
    let curve = public.curve();
    if !matches!(curve, Curve::Weierstrass(_)) {
        return false;
    }
    if !public.is_valid() {
        return false;
    }

    let n = curve.order();
    if !(public * n).is_identity() {
        return false;
    }

    let one = BigInt::one();
    if r < &one || r >= n || s < &one || s >= n {
        return false;
    }

    let z = truncate_digest(curve, digest);
    let Some(w) = inv(s, n) else {
        return false;
    };
    let u1 = (&z * &w).mod_floor(n);
    let u2 = (r * &w).mod_floor(n);

    let point = &(&curve.generator() * &u1) + &(public * &u2);
    match point.primary() {
        Some(primary) => primary.mod_floor(n) == *r,
        None => false,
    }
}
