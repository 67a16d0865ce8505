//! Number-theoretic kernels over `BigInt`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes the Legendre symbol of `n` modulo the odd prime `p`.
///
/// Returns `0` when `n ≡ 0 (mod p)`, `1` when `n` is a quadratic residue,
/// and `-1` when it is a non-residue. Evaluated as `n^((p-1)/2) mod p`.
pub fn legendre(n: &BigInt, p: &BigInt) -> i32 {
    let e = (p - BigInt::one()) >> 1;
    let r = n.mod_floor(p).modpow(&e, p);

    if r.is_zero() {
        0
    } else if r == p - BigInt::one() {
        -1
    } else {
        1
    }
}

/// Computes a square root of `n` modulo the prime `p` using Tonelli–Shanks.
///
/// Returns `0` when `n` is zero or has no square root modulo `p`. For a
/// residue, one of the two roots is returned; which of the pair is
/// unspecified, and callers disambiguate with a sign bit. When
/// `p ≡ 3 (mod 4)` the root is computed directly as `n^((p+1)/4)`.
pub fn sqrt(n: &BigInt, p: &BigInt) -> BigInt {
    if legendre(n, p) != 1 {
        return BigInt::zero();
    }
    if *p == BigInt::from(2) {
        return n.clone();
    }

    let one = BigInt::one();

    // Factor p - 1 as q * 2^s with q odd.
    let mut s = 0u64;
    let mut q: BigInt = p - &one;
    while q.is_even() {
        q >>= 1;
        s += 1;
    }

    if s == 1 {
        let e = (p + &one) >> 2;
        return n.modpow(&e, p);
    }

    // Any non-residue serves as the progression base.
    let mut z = BigInt::from(2);
    while legendre(&z, p) != -1 {
        z += 1;
    }

    let mut r = n.modpow(&((&q + &one) >> 1), p);
    let mut t = n.modpow(&q, p);
    let mut c = z.modpow(&q, p);
    let mut m = s;

    while !t.is_one() {
        // Least i with t^(2^i) == 1; i < m is guaranteed for a residue.
        let mut i = 0u64;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = (&t2 * &t2).mod_floor(p);
            i += 1;
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = (&b * &b).mod_floor(p);
        }

        r = (&r * &b).mod_floor(p);
        c = (&b * &b).mod_floor(p);
        t = (&t * &c).mod_floor(p);
        m = i;
    }

    r
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a*x + b*y = g` where `g = gcd(a, b)`.
pub fn egcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next);
        let next = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next);
        let next = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next);
    }

    (old_r, old_s, old_t)
}

/// Computes the multiplicative inverse of `n` modulo `m`.
///
/// Returns `None` when `gcd(n, m) != 1`, in which case no inverse exists.
pub fn inv(n: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (g, x, _) = egcd(n, m);
    g.is_one().then(|| x.mod_floor(m))
}
