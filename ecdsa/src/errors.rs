//! Error types for ECDSA key handling, signing and verification.

use curve::CurveError;

/// Errors that can occur while handling keys and signatures.
///
/// A signature that is well-formed but does not match the message and key is
/// not an error: verification reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A modular inverse did not exist. Signals corrupted state rather than
    /// bad user input.
    #[error("value is not invertible modulo the curve order")]
    NotInvertible,

    /// Point bytes or coordinates do not describe a point on the curve.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The encoded key names a curve the registry does not know.
    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    /// Curve domain parameters are inconsistent.
    #[error("invalid curve parameters: {0}")]
    InvalidCurve(&'static str),

    /// The private scalar is zero or not below the curve order.
    #[error("private key must lie in [1, n-1]")]
    InvalidPrivateKey,

    /// The public point is the point at infinity.
    #[error("public key must not be the point at infinity")]
    InvalidPublicKey,

    /// Malformed key, point or signature bytes.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Signature components fall outside `[1, n-1]`.
    #[error("signature components must lie in [1, n-1]")]
    InvalidSignature,

    /// An explicitly supplied nonce is out of range or yields `r = 0` or
    /// `s = 0`.
    #[error("nonce must lie in [1, n-1] and yield non-zero r and s")]
    InvalidNonce,

    /// Every nonce drawn during signing produced `r = 0` or `s = 0`.
    ///
    /// With a working random source the probability of this is negligible;
    /// seeing it means the RNG is broken.
    #[error("no usable nonce after {attempts} attempts")]
    NonceExhausted { attempts: u32 },
}

impl From<CurveError> for Error {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::NotInvertible => Error::NotInvertible,
            CurveError::NotOnCurve => Error::NotOnCurve,
            CurveError::UnknownCurve(name) => Error::UnknownCurve(name),
            CurveError::InvalidParameters(reason) => Error::InvalidCurve(reason),
        }
    }
}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::InvalidEncoding(err.to_string())
    }
}

impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::InvalidEncoding(err.to_string())
    }
}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Self {
        Error::InvalidEncoding(err.to_string())
    }
}
