//! ECDSA signatures over the secp256k1 and prime256v1 curves.
//!
//! This library implements:
//! - Key generation, with keys bound to a curve from the `curve` registry
//! - Signing and verification generic over the message digest (SHA-256 by
//!   default) with a configurable low-s policy
//! - SEC1 / SubjectPublicKeyInfo DER and PEM key encodings
//! - DER, base64 and fixed-width signature encodings
//!
//! # Example
//!
//! ```
//! use ecdsa::{PrivateKey, SECP256K1};
//!
//! let mut rng = rand::rng();
//! let private_key = PrivateKey::random(&SECP256K1, &mut rng);
//! let public_key = private_key.public_key();
//!
//! let signature = ecdsa::sign(b"hello world", &private_key, &mut rng).unwrap();
//! assert!(ecdsa::verify(b"hello world", &signature, &public_key).unwrap());
//!
//! // signatures travel as base64 DER
//! let encoded = signature.to_base64().unwrap();
//! let decoded = ecdsa::Signature::from_base64(&encoded).unwrap();
//! assert!(public_key.verify(b"hello world", &decoded).unwrap());
//! ```
//!
//! # Security Considerations
//!
//! - Nonces must come from a cryptographically secure RNG; the API only
//!   accepts `rand::CryptoRng` sources
//! - Big integer arithmetic is not constant time
//! - [`Ecdsa::sign_prehash_with_nonce`] exists for known-answer tests only

mod codec;
mod config;
mod constants;
mod engine;
mod errors;
mod keys;
mod signatures;


pub use config::{EcdsaConfig, LowSPolicy};
pub use constants::DEFAULT_MAX_NONCE_ATTEMPTS;
pub use curve::{curve_by_name, curve_by_oid, supported_curves, BigUint, CurveFp, Point, PRIME256V1, SECP256K1};
pub use engine::Ecdsa;
pub use errors::Error;
pub use keys::{PrivateKey, PublicKey};
pub use signatures::Signature;

use rand::CryptoRng;

/// Sign `message` with SHA-256 and the default configuration.
pub fn sign<R: CryptoRng + ?Sized>(
    message: &[u8],
    key: &PrivateKey<'_>,
    rng: &mut R,
) -> Result<Signature, Error> {
    Ecdsa::new().sign(message, key, rng)
}

/// Verify a SHA-256 signature with the default configuration.
pub fn verify(message: &[u8], signature: &Signature, key: &PublicKey<'_>) -> Result<bool, Error> {
    Ecdsa::new().verify(message, signature, key)
}
