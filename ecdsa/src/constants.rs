//! Constants used by the key codecs and the signing loop.

use der::asn1::ObjectIdentifier;

/// Upper bound on nonce draws per signature before giving up with
/// [`crate::Error::NonceExhausted`].
pub const DEFAULT_MAX_NONCE_ATTEMPTS: u32 = 32;

/// `id-ecPublicKey` (RFC 5480), the algorithm of every EC
/// SubjectPublicKeyInfo.
pub(crate) const EC_PUBLIC_KEY_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// PEM label of a SEC1 `ECPrivateKey` document.
pub(crate) const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

/// PEM label of a SubjectPublicKeyInfo document.
pub(crate) const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// SEC1 point tags.
pub(crate) const SEC1_UNCOMPRESSED: u8 = 0x04;
pub(crate) const SEC1_COMPRESSED_EVEN: u8 = 0x02;
pub(crate) const SEC1_COMPRESSED_ODD: u8 = 0x03;
