//! The ECDSA signing and verification engine.

use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use curve::modular::{add_mod, inv_mod, inv_mod_prime, mul_mod};
use curve::{multiply_and_add, RandomScalar};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::CryptoRng;
use sha2::{Digest, Sha256};
use tracing::{debug, trace, warn};

use crate::config::{EcdsaConfig, LowSPolicy};
use crate::errors::Error;
use crate::keys::{PrivateKey, PublicKey};
use crate::signatures::{Signature, digest_to_scalar};

/// ECDSA over any registry curve, hashing messages with `D`.
///
/// The engine holds no key material, only its [`EcdsaConfig`], and can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use ecdsa::{Ecdsa, EcdsaConfig, LowSPolicy, PrivateKey, PRIME256V1};
/// use sha2::Sha384;
///
/// let mut rng = rand::rng();
/// let engine = Ecdsa::<Sha384>::with_config(
///     EcdsaConfig::default().with_low_s(LowSPolicy::Enforce),
/// );
///
/// let private_key = PrivateKey::random(&PRIME256V1, &mut rng);
/// let signature = engine.sign(b"payload", &private_key, &mut rng).unwrap();
/// assert!(engine.verify(b"payload", &signature, &private_key.public_key()).unwrap());
/// ```
pub struct Ecdsa<D = Sha256> {
    config: EcdsaConfig,
    digest: PhantomData<fn() -> D>,
}

impl Ecdsa {
    /// SHA-256 with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EcdsaConfig::default())
    }
}

impl<D: Digest> Ecdsa<D> {
    /// Default configuration with the digest chosen by type.
    pub fn with_digest() -> Self {
        Self::with_config(EcdsaConfig::default())
    }

    pub fn with_config(config: EcdsaConfig) -> Self {
        Ecdsa {
            config,
            digest: PhantomData,
        }
    }

    #[inline]
    pub fn config(&self) -> &EcdsaConfig {
        &self.config
    }

    /// Sign `message` with `key`, drawing nonces from `rng`.
    ///
    /// A nonce that yields `r = 0` or `s = 0` is discarded and a new one
    /// drawn, at most `max_nonce_attempts` times.
    pub fn sign<R: CryptoRng + ?Sized>(
        &self,
        message: &[u8],
        key: &PrivateKey<'_>,
        rng: &mut R,
    ) -> Result<Signature, Error> {
        let curve = key.curve();
        let e = digest_to_scalar(&D::digest(message), curve.n());

        let attempts = self.config.max_nonce_attempts;
        for attempt in 1..=attempts {
            let k = curve.random_scalar(rng);
            if let Some(signature) = self.try_sign(&e, key, &k)? {
                return Ok(signature);
            }
            debug!(attempt, curve = curve.name(), "nonce gave a zero signature component");
        }

        warn!(attempts, curve = curve.name(), "no usable nonce");
        Err(Error::NonceExhausted { attempts })
    }

    /// Sign an already hashed message with an explicit nonce `k`.
    ///
    /// Meant for known-answer tests. Reusing `k` across two messages reveals
    /// the private key.
    pub fn sign_prehash_with_nonce(
        &self,
        prehash: &[u8],
        key: &PrivateKey<'_>,
        k: &BigUint,
    ) -> Result<Signature, Error> {
        let n = key.curve().n();
        if k.is_zero() || k >= n {
            return Err(Error::InvalidNonce);
        }

        let e = digest_to_scalar(prehash, n);
        self.try_sign(&e, key, k)?.ok_or(Error::InvalidNonce)
    }

    /// Verify `signature` over `message`.
    ///
    /// Returns `Err(InvalidSignature)` when `r` or `s` lies outside
    /// `[1, N-1]`, and `Ok(false)` for a well-formed signature that does not
    /// match.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
        key: &PublicKey<'_>,
    ) -> Result<bool, Error> {
        self.verify_prehash(&D::digest(message), signature, key)
    }

    /// Verify `signature` over an already hashed message.
    pub fn verify_prehash(
        &self,
        prehash: &[u8],
        signature: &Signature,
        key: &PublicKey<'_>,
    ) -> Result<bool, Error> {
        let curve = key.curve();
        let n = curve.n();
        let Signature { r, s } = signature;

        if r.is_zero() || r >= n || s.is_zero() || s >= n {
            return Err(Error::InvalidSignature);
        }

        if self.config.low_s == LowSPolicy::Enforce && !signature.is_low_s(curve) {
            trace!(curve = curve.name(), "rejected high-s signature");
            return Ok(false);
        }

        let e = digest_to_scalar(prehash, n);
        let w = inv_mod(s, n)?;
        let u1 = mul_mod(&e, &w, n);
        let u2 = mul_mod(r, &w, n);

        let point = multiply_and_add(&curve.generator(), &u1, key.point(), &u2);
        if point.is_infinity() {
            trace!(curve = curve.name(), "verification point at infinity");
            return Ok(false);
        }

        let valid = &(point.x() % n) == r;
        if !valid {
            trace!(curve = curve.name(), "signature does not match");
        }
        Ok(valid)
    }

    /// One signing attempt with nonce `k`; `None` when `r` or `s` is zero.
    fn try_sign(
        &self,
        e: &BigUint,
        key: &PrivateKey<'_>,
        k: &BigUint,
    ) -> Result<Option<Signature>, Error> {
        let curve = key.curve();
        let n = curve.n();

        let point = curve.generator().multiply(k);
        let r = point.x() % n;
        if point.is_infinity() || r.is_zero() {
            return Ok(None);
        }

        let k_inv = inv_mod_prime(k, n)?;
        let s = mul_mod(&k_inv, &add_mod(e, &mul_mod(&r, key.secret(), n), n), n);
        if s.is_zero() {
            return Ok(None);
        }

        let signature = Signature::new(r, s);
        if self.config.low_s.normalizes() {
            Ok(Some(signature.normalize_s(curve)))
        } else {
            Ok(Some(signature))
        }
    }
}

impl Default for Ecdsa {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Ecdsa<D> {
    fn clone(&self) -> Self {
        Ecdsa {
            config: self.config,
            digest: PhantomData,
        }
    }
}

impl<D> Debug for Ecdsa<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecdsa")
            .field("digest", &std::any::type_name::<D>())
            .field("config", &self.config)
            .finish()
    }
}
