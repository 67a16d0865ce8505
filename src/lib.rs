//! Standard elliptic-curve groups over prime fields.
//!
//! This crate implements a family of standardized elliptic curves as
//! algebraic groups: point construction and validation, negation, addition,
//! scalar multiplication, equality, and the serialization formats commonly
//! layered on top of them. An ECDSA signer and verifier is provided for the
//! short Weierstrass curves.
//!
//! The focus is on **correctness and standards compliance**, not on speed
//! or side-channel resistance. All arithmetic runs on arbitrary-precision
//! integers whose operation time depends on the operand values; do not use
//! this crate where a constant-time implementation is required. It is well
//! suited to offline cryptography, protocol tooling, and cross-checking
//! lower-level implementations against the reference test vectors of
//! RFC 4754, SEC 1, RFC 5639, and the CFRG curve drafts.
//!
//! # Module overview
//!
//! - `math`
//!   Arbitrary-precision modular kernels: the Legendre symbol, modular
//!   square roots via Tonelli–Shanks, the extended Euclidean algorithm and
//!   modular inversion, and fixed-width integer/byte conversion.
//!
//! - `curves`
//!   The curve parameter tables (SEC 2, Brainpool, CFRG, and MDC201601),
//!   the two generic group-law implementations (projective short
//!   Weierstrass and extended twisted Edwards), the uniform [`Point`]
//!   contract shared by both families, and a registry that resolves curves
//!   by canonical name, alias, or dotted OID.
//!
//! - `codecs`
//!   Point serialization: SEC1 compressed/uncompressed, the CFRG
//!   little-endian format, the EdDSA-style little-endian format, and JSON
//!   Web Keys for the NIST P curves. Every decoder validates the point it
//!   produces.
//!
//! - `signatures`
//!   ECDSA signing and verification over any short Weierstrass curve with
//!   a caller-supplied digest.
//!
//! # Design goals
//!
//! - Bit-exact agreement with the defining standards
//! - Minimal and explicit APIs over immutable point values
//! - A single group-law implementation per curve family, shared by every
//!   parameter set
//! - No global state; randomness is always supplied by the caller
//!
//! [`Point`]: curves::Point

pub mod codecs;
pub mod curves;
pub mod error;
pub mod math;
pub mod signatures;

pub use error::Error;
