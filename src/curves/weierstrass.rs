//! Short Weierstrass curves in projective coordinates.
//!
//! Curves of the form `y² = x³ + a·x + b` over a prime field, following
//! the group laws of RFC 6090. Points are kept in homogeneous projective
//! coordinates `(X, Y, Z)` with `x = X/Z` and `y = Y/Z`, so that addition
//! and doubling need no field inversions; an inversion happens only when
//! affine coordinates are requested. The identity is any triple with
//! `Z = 0`, canonically `(0, 1, 0)`.

use std::ops::{Add, Neg};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::Error;
use crate::math::{inv, sqrt};

/// The constants defining one short Weierstrass curve.
///
/// A single static record exists per supported curve; points refer to it
/// by reference, so two points interoperate exactly when they carry the
/// same record.
#[derive(Debug)]
pub struct Params {
    /// Canonical curve name, e.g. `secp256r1`.
    pub name: &'static str,
    /// Human-readable aliases, e.g. `P-256`.
    pub aliases: &'static [&'static str],
    /// Dotted object identifier, where one is assigned.
    pub oid: Option<&'static str>,
    /// The field prime.
    pub p: BigInt,
    /// Curve coefficient `a`.
    pub a: BigInt,
    /// Curve coefficient `b`.
    pub b: BigInt,
    /// Order of the generator.
    pub order: BigInt,
    /// Cofactor of the prime-order subgroup.
    pub cofactor: u32,
    /// Bit length used by the serialization codecs.
    pub bits: u64,
    /// Generator x coordinate.
    pub gx: BigInt,
    /// Generator y coordinate.
    pub gy: BigInt,
}

impl Params {
    /// The right-hand side of the curve equation, `x³ + a·x + b mod p`.
    fn equation_rhs(&self, x: &BigInt) -> BigInt {
        (x.modpow(&BigInt::from(3), &self.p) + &self.a * x + &self.b).mod_floor(&self.p)
    }

    /// The neutral element of the group.
    pub fn identity(&'static self) -> Point {
        Point {
            curve: self,
            x: BigInt::zero(),
            y: BigInt::one(),
            z: BigInt::zero(),
        }
    }

    /// The standard base point.
    pub fn generator(&'static self) -> Point {
        self.affine(self.gx.clone(), self.gy.clone())
    }

    /// Builds a point from affine coordinates, reduced modulo `p`.
    pub fn affine(&'static self, x: BigInt, y: BigInt) -> Point {
        Point {
            curve: self,
            x: x.mod_floor(&self.p),
            y: y.mod_floor(&self.p),
            z: BigInt::one(),
        }
    }

    /// Recovers a point from its x coordinate and the low bit of y.
    ///
    /// Fails when `x³ + a·x + b` has no square root modulo `p`.
    pub fn recover(&'static self, x: &BigInt, bit: bool) -> Result<Point, Error> {
        let s = sqrt(&self.equation_rhs(x), &self.p);
        if s.is_zero() {
            return Err(Error::InvalidPoint);
        }

        let y = if s.is_odd() == bit { s } else { &self.p - s };
        Ok(self.affine(x.clone(), y))
    }
}

/// A point on a short Weierstrass curve, in projective coordinates.
#[derive(Clone, Debug)]
pub struct Point {
    curve: &'static Params,
    x: BigInt,
    y: BigInt,
    z: BigInt,
}

impl Point {
    /// The parameter record of the curve this point lives on.
    #[inline]
    pub fn params(&self) -> &'static Params {
        self.curve
    }

    /// Whether this point is the neutral element.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Whether this point is a finite point satisfying the curve equation.
    ///
    /// The identity is not a finite point and reports `false`.
    pub fn is_valid(&self) -> bool {
        match self.to_affine() {
            Some((x, y)) => (&y * &y).mod_floor(&self.curve.p) == self.curve.equation_rhs(&x),
            None => false,
        }
    }

    /// Normalized affine coordinates, or `None` for the identity.
    pub fn to_affine(&self) -> Option<(BigInt, BigInt)> {
        if self.is_identity() {
            return None;
        }
        if self.z.is_one() {
            return Some((self.x.clone(), self.y.clone()));
        }

        let p = &self.curve.p;
        let zi = inv(&self.z, p)?;
        Some((
            (&self.x * &zi).mod_floor(p),
            (&self.y * &zi).mod_floor(p),
        ))
    }

    /// Doubles a non-identity point.
    fn double(&self) -> Point {
        let p = &self.curve.p;

        let xx = (&self.x * &self.x).mod_floor(p);
        let yy = (&self.y * &self.y).mod_floor(p);
        let zz = (&self.z * &self.z).mod_floor(p);
        let yz = (&self.y * &self.z).mod_floor(p);
        let yyz = (&yy * &self.z).mod_floor(p);

        // w = 3·X² + a·Z²
        let w = (BigInt::from(3) * &xx + &self.curve.a * &zz).mod_floor(p);
        let ww = (&w * &w).mod_floor(p);
        let www = (&w * &ww).mod_floor(p);

        let x3 = (&ww - BigInt::from(8) * &self.x * &yyz).mod_floor(p);
        let x3 = (BigInt::from(2) * &yz * &x3).mod_floor(p);
        let y3 = (BigInt::from(3) * &w * &self.x - BigInt::from(2) * &yyz).mod_floor(p);
        let y3 = (BigInt::from(4) * &yyz * &y3 - &www).mod_floor(p);
        let z3 = (BigInt::from(8) * &yyz * &zz * &self.y).mod_floor(p);

        Point {
            curve: self.curve,
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    /// Adds two points with the complete projective case analysis of
    /// RFC 6090 §3: identity short-circuits, inverse pairs collapse to
    /// the identity, equal points double, and the general formula
    /// otherwise.
    ///
    /// # Panics
    ///
    /// Panics when the operands live on different curves.
    fn add(self, other: &Point) -> Point {
        assert!(
            std::ptr::eq(self.curve, other.curve),
            "cannot add points on different curves",
        );

        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let p = &self.curve.p;
        let u = (&other.y * &self.z - &self.y * &other.z).mod_floor(p);
        let v = (&other.x * &self.z - &self.x * &other.z).mod_floor(p);

        if v.is_zero() {
            if u.is_zero() {
                return self.double();
            }
            // Same x, different y: the operands are inverses.
            return self.curve.identity();
        }

        let uu = (&u * &u).mod_floor(p);
        let uuu = (&u * &uu).mod_floor(p);
        let vv = (&v * &v).mod_floor(p);
        let vvv = (&v * &vv).mod_floor(p);
        let x1vv = (&self.x * &vv).mod_floor(p);

        let t = (&self.z * &uu - BigInt::from(2) * &x1vv).mod_floor(p);
        let x3 = (&v * (&other.z * &t - &vvv)).mod_floor(p);
        let y3 = (BigInt::from(3) * &u * &x1vv).mod_floor(p);
        let y3 = (&y3 - &self.y * &vvv - &self.z * &uuu).mod_floor(p);
        let y3 = (&other.z * &y3 + &u * &vvv).mod_floor(p);
        let z3 = (&vvv * &self.z * &other.z).mod_floor(p);

        Point {
            curve: self.curve,
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            curve: self.curve,
            x: self.x.clone(),
            y: (-&self.y).mod_floor(&self.curve.p),
            z: self.z.clone(),
        }
    }
}

impl PartialEq for Point {
    /// Projective equality by cross-multiplication; no normalization is
    /// performed.
    fn eq(&self, other: &Self) -> bool {
        if !std::ptr::eq(self.curve, other.curve) {
            return false;
        }

        let p = &self.curve.p;
        (&other.x * &self.z).mod_floor(p) == (&self.x * &other.z).mod_floor(p)
            && (&other.y * &self.z).mod_floor(p) == (&self.y * &other.z).mod_floor(p)
    }
}

impl Eq for Point {}
