//! Crate-wide error type.
//!
//! Every fallible operation in this crate reports one of a small set of
//! failure classes. Decoders are strict: a wrong length, a wrong leading
//! byte, an off-curve point, or an identity handed to an encoder all fail
//! loudly rather than producing a degenerate value. Signature verification
//! is the one deliberate exception; malformed but well-typed inputs make
//! it return `false` instead of an error.

use thiserror::Error;

/// Errors produced by curve lookup, codecs, and signing.
#[derive(Debug, Error)]
pub enum Error {
    /// A byte string does not match the expected wire format.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    /// An integer does not fit in the fixed-width encoding requested.
    #[error("integer does not fit in {0} bytes")]
    Overflow(usize),

    /// Decoded or recovered coordinates do not satisfy the curve equation,
    /// or the identity was passed where a finite point is required.
    #[error("point is not a valid point on the curve")]
    InvalidPoint,

    /// No curve matches the requested name, alias, or OID.
    #[error("unknown curve '{0}'")]
    UnknownCurve(String),

    /// A scalar is outside the range required by the operation.
    #[error("scalar out of range")]
    InvalidScalar,

    /// The operation is not defined for the given curve.
    #[error("{0} is not defined for this curve")]
    Unsupported(&'static str),
}
