//! Digital signature schemes built on the curve groups.
//!
//! Currently this is ECDSA only, over the short Weierstrass curves. The
//! twisted Edwards curves expose `y` as their primary coordinate, which
//! does not match the `r = x mod n` contract of ECDSA, and the EdDSA
//! signature scheme proper is out of scope for this crate.
//!
//! Callers supply a precomputed digest; no hash function is bundled.

pub mod ecdsa;
