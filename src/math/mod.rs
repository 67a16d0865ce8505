//! Arbitrary-precision modular arithmetic kernels.
//!
//! This module provides the small set of number-theoretic operations the
//! group laws and codecs are built on:
//!
//! - [`arith`]
//!   The Legendre symbol, modular square roots via Tonelli–Shanks, the
//!   extended Euclidean algorithm, and modular inversion. These operate on
//!   [`num_bigint::BigInt`] and make no assumption about the shape of the
//!   modulus beyond primality where primality is required; the NIST primes
//!   happen to have special structure, the Brainpool and MDC primes do not.
//!
//! - [`bytes`]
//!   Fixed-width conversion between non-negative integers and byte
//!   strings, in either byte order. The codecs rely on the encoder
//!   rejecting integers that do not fit the requested width.
//!
//! None of these operations attempts to be constant-time.

pub mod arith;
pub mod bytes;

pub use arith::{egcd, inv, legendre, sqrt};
pub use bytes::{Endian, ldec, lenc};
