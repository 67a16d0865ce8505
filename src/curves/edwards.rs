//! Twisted Edwards curves in extended coordinates.
//!
//! Curves of the form `a·x² + y² = 1 + d·x²·y²` over a prime field.
//! Points are kept in the extended coordinates of Hisil, Wong, Carter and
//! Dawson: `(X, Y, Z, T)` with `x = X/Z`, `y = Y/Z` and the auxiliary
//! invariant `T·Z = X·Y`, which makes both addition and doubling a short
//! sequence of multiplications. The identity is `(0, 1, 1, 0)`; any
//! representative with `Z = 0`, or with `X = 0` and `Y = Z`, denotes it.
//!
//! Note that on an Edwards curve the y coordinate is the primary one: a
//! compressed encoding stores `y` plus the low bit of `x`.

use std::ops::{Add, Neg};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::Error;
use crate::math::{inv, sqrt};

/// The constants defining one twisted Edwards curve.
#[derive(Debug)]
pub struct Params {
    /// Canonical curve name, e.g. `edwards25519`.
    pub name: &'static str,
    /// Human-readable aliases, e.g. `ed25519`.
    pub aliases: &'static [&'static str],
    /// Dotted object identifier, where one is assigned.
    pub oid: Option<&'static str>,
    /// The field prime.
    pub p: BigInt,
    /// Curve coefficient `a`.
    pub a: BigInt,
    /// Curve coefficient `d`.
    pub d: BigInt,
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
    /// The neutral element of the group.
    pub fn identity(&'static self) -> Point {
        Point {
            curve: self,
            x: BigInt::zero(),
            y: BigInt::one(),
            z: BigInt::one(),
            t: BigInt::zero(),
        }
    }

    /// The standard base point.
    pub fn generator(&'static self) -> Point {
        self.affine(self.gx.clone(), self.gy.clone())
    }

    /// Builds a point from affine coordinates, reduced modulo `p`.
    pub fn affine(&'static self, x: BigInt, y: BigInt) -> Point {
        let x = x.mod_floor(&self.p);
        let y = y.mod_floor(&self.p);
        let t = (&x * &y).mod_floor(&self.p);
        Point {
            curve: self,
            x,
            y,
            z: BigInt::one(),
            t,
        }
    }

    /// Recovers a point from its y coordinate and the low bit of x.
    ///
    /// Solves `x² = (y² - 1) / (d·y² - a)` and picks the root whose low
    /// bit matches `bit`. Fails when the quotient has no square root.
    pub fn recover(&'static self, y: &BigInt, bit: bool) -> Result<Point, Error> {
        let p = &self.p;
        let yy = (y * y).mod_floor(p);
        let num = (&yy - BigInt::one()).mod_floor(p);
        let den = (&self.d * &yy - &self.a).mod_floor(p);
        let den = inv(&den, p).ok_or(Error::InvalidPoint)?;

        let s = sqrt(&(num * den).mod_floor(p), p);
        if s.is_zero() {
            return Err(Error::InvalidPoint);
        }

        let x = if s.is_odd() == bit { s } else { p - s };
        Ok(self.affine(x, y.clone()))
    }
}

/// A point on a twisted Edwards curve, in extended coordinates.
#[derive(Clone, Debug)]
pub struct Point {
    curve: &'static Params,
    x: BigInt,
    y: BigInt,
    z: BigInt,
    t: BigInt,
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
        self.z.is_zero() || (self.x.is_zero() && self.y == self.z)
    }

    /// Whether this point is a finite point satisfying the curve equation.
    ///
    /// The identity is not a finite point and reports `false`.
    pub fn is_valid(&self) -> bool {
        let Some((x, y)) = self.to_affine() else {
            return false;
        };

        let p = &self.curve.p;
        let xx = (&x * &x).mod_floor(p);
        let yy = (&y * &y).mod_floor(p);

        let lhs = (&self.curve.a * &xx + &yy).mod_floor(p);
        let rhs = (BigInt::one() + &self.curve.d * &xx * &yy).mod_floor(p);
        lhs == rhs
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
}

impl Add<&Point> for &Point {
    type Output = Point;

    /// Adds two points with the twisted-extended formulas of Hisil, Wong,
    /// Carter and Dawson, switching to the dedicated doubling sequence
    /// when the operands are equal.
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
        let (e, f, g, h);

        if self == other {
            // dbl-2008-hwcd
            let a = (&self.x * &self.x).mod_floor(p);
            let b = (&self.y * &self.y).mod_floor(p);
            let c = (BigInt::from(2) * &self.z * &self.z).mod_floor(p);
            let d = (&self.curve.a * &a).mod_floor(p);
            let xy = &self.x + &self.y;

            e = ((&xy * &xy) - &a - &b).mod_floor(p);
            g = (&d + &b).mod_floor(p);
            f = (&g - &c).mod_floor(p);
            h = (&d - &b).mod_floor(p);
        } else {
            // add-2008-hwcd-2
            let a = (&self.x * &other.x).mod_floor(p);
            let b = (&self.y * &other.y).mod_floor(p);
            let c = (&self.z * &other.t).mod_floor(p);
            let d = (&self.t * &other.z).mod_floor(p);

            e = (&d + &c).mod_floor(p);
            f = ((&self.x - &self.y) * (&other.x + &other.y) + &b - &a).mod_floor(p);
            g = (&b + &self.curve.a * &a).mod_floor(p);
            h = (&d - &c).mod_floor(p);
        }

        Point {
            curve: self.curve,
            x: (&e * &f).mod_floor(p),
            y: (&g * &h).mod_floor(p),
            z: (&f * &g).mod_floor(p),
            t: (&e * &h).mod_floor(p),
        }
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        let p = &self.curve.p;
        Point {
            curve: self.curve,
            x: (-&self.x).mod_floor(p),
            y: self.y.clone(),
            z: self.z.clone(),
            t: (-&self.t).mod_floor(p),
        }
    }
}

impl PartialEq for Point {
    /// Projective equality by cross-multiplication; no normalization is
    /// performed. The auxiliary `T` coordinate never participates.
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
