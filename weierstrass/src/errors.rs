//! Error types for curve construction and group arithmetic.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Errors that can occur while building a curve group or evaluating the group law.
///
/// Every error is a deterministic function of the inputs, so none of them is
/// worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The supplied point does not satisfy `y^2 = x^3 + ax + b (mod p)`.
    #[error("point ({x}, {y}) does not lie on the curve")]
    PointNotOnCurve { x: BigInt, y: BigInt },

    /// A modular inverse was requested for a value sharing a factor with the modulus.
    ///
    /// With a prime modulus this only happens for `value ≡ 0`, which the group
    /// law never asks for. Seeing it during point arithmetic means the modulus
    /// is not prime.
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverseExists { value: BigInt, modulus: BigUint },

    /// Rejected before any arithmetic begins.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = core::result::Result<T, CurveError>;
