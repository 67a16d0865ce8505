//! The uniform group contract shared by both curve families.
//!
//! A [`Curve`] is a cheap handle to one static parameter record; a
//! [`Point`] is a value on one of those curves. Both are two-variant
//! enums, one variant per curve family, so that callers can work with any
//! supported curve chosen at run time while each family keeps its own
//! group-law implementation.
//!
//! The codecs never address coordinates as `x` and `y` directly. They use
//! the `primary`/`secondary` pair instead: for a short Weierstrass curve
//! the primary coordinate is `x`, for a twisted Edwards curve it is `y`,
//! and the bit stored by a compressed encoding is always the low bit of
//! the secondary coordinate.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Signed};
use rand::{CryptoRng, RngCore};

use crate::error::Error;
use crate::math::{Endian, inv, ldec};

use super::{edwards, weierstrass};

/// A handle to one supported curve.
#[derive(Clone, Copy, Debug)]
pub enum Curve {
    /// A short Weierstrass curve, `y² = x³ + a·x + b`.
    Weierstrass(&'static weierstrass::Params),
    /// A twisted Edwards curve, `a·x² + y² = 1 + d·x²·y²`.
    Edwards(&'static edwards::Params),
}

impl Curve {
    /// Canonical curve name.
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Weierstrass(c) => c.name,
            Curve::Edwards(c) => c.name,
        }
    }

    /// Aliases the registry accepts besides the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Curve::Weierstrass(c) => c.aliases,
            Curve::Edwards(c) => c.aliases,
        }
    }

    /// Dotted object identifier, where one is assigned.
    pub fn oid(&self) -> Option<&'static str> {
        match self {
            Curve::Weierstrass(c) => c.oid,
            Curve::Edwards(c) => c.oid,
        }
    }

    /// The field prime.
    pub fn prime(&self) -> &'static BigInt {
        match self {
            Curve::Weierstrass(c) => &c.p,
            Curve::Edwards(c) => &c.p,
        }
    }

    /// The order of the generator.
    pub fn order(&self) -> &'static BigInt {
        match self {
            Curve::Weierstrass(c) => &c.order,
            Curve::Edwards(c) => &c.order,
        }
    }

    /// The cofactor of the prime-order subgroup.
    pub fn cofactor(&self) -> u32 {
        match self {
            Curve::Weierstrass(c) => c.cofactor,
            Curve::Edwards(c) => c.cofactor,
        }
    }

    /// The bit length the serialization codecs size their fields by.
    pub fn bits(&self) -> u64 {
        match self {
            Curve::Weierstrass(c) => c.bits,
            Curve::Edwards(c) => c.bits,
        }
    }

    /// The neutral element of the group.
    pub fn identity(&self) -> Point {
        match self {
            Curve::Weierstrass(c) => Point::Weierstrass(c.identity()),
            Curve::Edwards(c) => Point::Edwards(c.identity()),
        }
    }

    /// The standard base point.
    pub fn generator(&self) -> Point {
        match self {
            Curve::Weierstrass(c) => Point::Weierstrass(c.generator()),
            Curve::Edwards(c) => Point::Edwards(c.generator()),
        }
    }

    /// Builds a point from affine `x` and `y` coordinates.
    ///
    /// No curve-equation check is performed; use [`Point::is_valid`] on
    /// the result where the coordinates are untrusted.
    pub fn from_affine(&self, x: BigInt, y: BigInt) -> Point {
        match self {
            Curve::Weierstrass(c) => Point::Weierstrass(c.affine(x, y)),
            Curve::Edwards(c) => Point::Edwards(c.affine(x, y)),
        }
    }

    /// Builds a point from its primary and secondary coordinates.
    ///
    /// For a Weierstrass curve this is `(x, y)`; for an Edwards curve the
    /// arguments arrive as `(y, x)`, which is the order the SEC1 decoder
    /// hands them over in.
    pub fn create(&self, primary: BigInt, secondary: BigInt) -> Point {
        match self {
            Curve::Weierstrass(_) => self.from_affine(primary, secondary),
            Curve::Edwards(_) => self.from_affine(secondary, primary),
        }
    }

    /// Recovers a point from its primary coordinate and the low bit of
    /// the secondary coordinate.
    pub fn recover(&self, primary: &BigInt, bit: bool) -> Result<Point, Error> {
        match self {
            Curve::Weierstrass(c) => c.recover(primary, bit).map(Point::Weierstrass),
            Curve::Edwards(c) => c.recover(primary, bit).map(Point::Edwards),
        }
    }

    /// Draws a random scalar in `[min, order - 1]` suitable for use as a
    /// private key.
    ///
    /// Each attempt reads one byte per eight bits of the order, masks the
    /// value down to the order's bit length, and rejects anything outside
    /// the requested range. Rejection sampling keeps the distribution
    /// uniform; the loop retries until a draw is accepted.
    pub fn private_key<R: RngCore + CryptoRng>(&self, rng: &mut R, min: &BigInt) -> BigInt {
        let order = self.order();
        let nbits = order.bits();
        let mask = (BigInt::one() << nbits) - 1;
        let mut buf = vec![0u8; nbits.div_ceil(8) as usize];

        loop {
            rng.fill_bytes(&mut buf);
            let r = ldec(&buf, Endian::Big) & &mask;
            if &r >= min && &r < order {
                return r;
            }
        }
    }
}

/// A point on one of the supported curves.
///
/// Points are immutable values; every group operation allocates a fresh
/// result. The usual operators are available: `+`, unary and binary `-`,
/// `*` by a scalar, `/` by a scalar, and `==`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    /// A point on a short Weierstrass curve.
    Weierstrass(weierstrass::Point),
    /// A point on a twisted Edwards curve.
    Edwards(edwards::Point),
}

impl Point {
    /// The curve this point lives on.
    pub fn curve(&self) -> Curve {
        match self {
            Point::Weierstrass(p) => Curve::Weierstrass(p.params()),
            Point::Edwards(p) => Curve::Edwards(p.params()),
        }
    }

    /// Whether this point is the neutral element.
    pub fn is_identity(&self) -> bool {
        match self {
            Point::Weierstrass(p) => p.is_identity(),
            Point::Edwards(p) => p.is_identity(),
        }
    }

    /// Whether this point is a finite point satisfying the curve
    /// equation. The identity reports `false`.
    pub fn is_valid(&self) -> bool {
        match self {
            Point::Weierstrass(p) => p.is_valid(),
            Point::Edwards(p) => p.is_valid(),
        }
    }

    /// The affine x coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<BigInt> {
        self.to_affine().map(|(x, _)| x)
    }

    /// The affine y coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<BigInt> {
        self.to_affine().map(|(_, y)| y)
    }

    /// The coordinate a compressed encoding stores in full.
    ///
    /// `x` on a Weierstrass curve, `y` on an Edwards curve.
    pub fn primary(&self) -> Option<BigInt> {
        match self {
            Point::Weierstrass(_) => self.x(),
            Point::Edwards(_) => self.y(),
        }
    }

    /// The coordinate a compressed encoding reduces to a single bit.
    ///
    /// `y` on a Weierstrass curve, `x` on an Edwards curve.
    pub fn secondary(&self) -> Option<BigInt> {
        match self {
            Point::Weierstrass(_) => self.y(),
            Point::Edwards(_) => self.x(),
        }
    }

    /// Normalized affine coordinates, or `None` for the identity.
    pub fn to_affine(&self) -> Option<(BigInt, BigInt)> {
        match self {
            Point::Weierstrass(p) => p.to_affine(),
            Point::Edwards(p) => p.to_affine(),
        }
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    /// # Panics
    ///
    /// Panics when the operands live on different curves or different
    /// curve families.
    fn add(self, other: &Point) -> Point {
        match (self, other) {
            (Point::Weierstrass(a), Point::Weierstrass(b)) => Point::Weierstrass(a + b),
            (Point::Edwards(a), Point::Edwards(b)) => Point::Edwards(a + b),
            _ => panic!("cannot add points on different curves"),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        &self + &other
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        match self {
            Point::Weierstrass(p) => Point::Weierstrass(-p),
            Point::Edwards(p) => Point::Edwards(-p),
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, other: &Point) -> Point {
        self + &-other
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        &self - &other
    }
}

impl Mul<&BigInt> for &Point {
    type Output = Point;

    /// Scalar multiplication by a non-negative multiplier.
    ///
    /// Runs a uniform double-and-add ladder over the multiplier bits from
    /// the highest set bit down to bit zero, updating both accumulators
    /// at every step. The ladder shape is uniform but the underlying
    /// bignum operations are not constant-time. Multiplying by zero
    /// yields the identity.
    ///
    /// # Panics
    ///
    /// Panics when the multiplier is negative.
    fn mul(self, multiplier: &BigInt) -> Point {
        assert!(!multiplier.is_negative(), "multiplier must be non-negative");

        let mut q = self.curve().identity();
        let mut p = self.clone();

        for o in (0..multiplier.bits()).rev() {
            if multiplier.bit(o) {
                q = &q + &p;
                p = &p + &p;
            } else {
                p = &p + &q;
                q = &q + &q;
            }
        }

        q
    }
}

impl Mul<&BigInt> for Point {
    type Output = Point;

    fn mul(self, multiplier: &BigInt) -> Point {
        &self * multiplier
    }
}

impl Div<&BigInt> for &Point {
    type Output = Point;

    /// Divides by a scalar: multiplies by its inverse modulo the curve
    /// order.
    ///
    /// # Panics
    ///
    /// Panics when the divisor shares a factor with the curve order and
    /// therefore has no inverse.
    fn div(self, divisor: &BigInt) -> Point {
        let order = self.curve().order();
        let Some(di) = inv(divisor, order) else {
            panic!("divisor has no inverse modulo the curve order");
        };
        self * &di
    }
}

impl Div<&BigInt> for Point {
    type Output = Point;

    fn div(self, divisor: &BigInt) -> Point {
        &self / divisor
    }
}

impl fmt::Display for Point {
    /// Formats as `name(∞)` for the identity and as a fixed-width
    /// uppercase-hex coordinate pair otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.curve().name();
        match self.to_affine() {
            None => write!(f, "{name}(∞)"),
            Some((x, y)) => {
                let width = (self.curve().bits().div_ceil(8) * 2) as usize;
                write!(f, "{name}({x:0width$X}, {y:0width$X})")
            }
        }
    }
}
