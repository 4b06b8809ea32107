//! Error types for curve arithmetic.

/// Errors raised by modular arithmetic, curve solving and the curve registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// A modular inverse was requested for a value sharing a factor with the
    /// modulus (including zero).
    ///
    /// Inside the engine this only happens on corrupted inputs, since every
    /// modulus in use is prime and every inverted value is range-checked first.
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,

    /// No point with the requested coordinates lies on the curve.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// No registered curve matches the given name or object identifier.
    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    /// Curve parameters violate a structural invariant.
    #[error("invalid curve parameters: {0}")]
    InvalidParameters(&'static str),
}
