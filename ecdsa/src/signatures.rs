//! ECDSA signature values and their encodings.

use base64ct::{Base64, Encoding};
use curve::CurveFp;
use der::asn1::UintRef;
use der::{Decode, Encode, Sequence};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::codec::fixed_be_bytes;
use crate::errors::Error;

/// An ECDSA signature `(r, s)`.
///
/// Both components are integers modulo the order `N` of the signing curve.
/// A signature does not remember its curve; the encodings that need a width
/// take the curve explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// `x(k*G) mod N` for the signing nonce `k`
    pub r: BigUint,
    /// `k^-1 * (e + r*d) mod N`
    pub s: BigUint,
}

/// `SEQUENCE { r INTEGER, s INTEGER }`
#[derive(Sequence)]
struct DerSignature<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Canonical DER encoding.
    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        let r = self.r.to_bytes_be();
        let s = self.s.to_bytes_be();
        let der = DerSignature {
            r: UintRef::new(&r)?,
            s: UintRef::new(&s)?,
        };
        Ok(der.to_der()?)
    }

    /// Parse a DER signature. Non-canonical integers and trailing bytes are
    /// rejected; range checks happen at verification.
    pub fn from_der(bytes: &[u8]) -> Result<Self, Error> {
        let der = DerSignature::from_der(bytes)?;
        Ok(Signature {
            r: BigUint::from_bytes_be(der.r.as_bytes()),
            s: BigUint::from_bytes_be(der.s.as_bytes()),
        })
    }

    /// Standard base64 of the DER encoding.
    pub fn to_base64(&self) -> Result<String, Error> {
        Ok(Base64::encode_string(&self.to_der()?))
    }

    pub fn from_base64(text: &str) -> Result<Self, Error> {
        let der = Base64::decode_vec(text.trim())?;
        Self::from_der(&der)
    }

    /// Fixed-width `r || s`, each half padded to the byte length of `N`.
    pub fn to_bytes(&self, curve: &CurveFp) -> Result<Vec<u8>, Error> {
        let len = curve.length();
        let mut out = fixed_be_bytes(&self.r, len).ok_or(Error::InvalidSignature)?;
        out.extend(fixed_be_bytes(&self.s, len).ok_or(Error::InvalidSignature)?);
        Ok(out)
    }

    /// Split a fixed-width `r || s` encoding in half.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(Error::InvalidEncoding(format!(
                "fixed-width signature has odd length {}",
                bytes.len()
            )));
        }

        let (r, s) = bytes.split_at(bytes.len() / 2);
        Ok(Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }

    /// Whether `s <= N/2`.
    pub fn is_low_s(&self, curve: &CurveFp) -> bool {
        self.s <= curve.n() >> 1
    }

    /// The equivalent signature `(r, N - s)` when `s` is in the upper half.
    pub fn normalize_s(&self, curve: &CurveFp) -> Self {
        if self.is_low_s(curve) {
            return self.clone();
        }
        Signature {
            r: self.r.clone(),
            s: curve.n() - &self.s,
        }
    }
}

/// Reduce a message digest to a scalar modulo `n`.
///
/// The digest is read big-endian and, when it is wider than `n`, only its
/// leftmost `bits(n)` bits are kept.
pub(crate) fn digest_to_scalar(digest: &[u8], n: &BigUint) -> BigUint {
    let mut e = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() as u64 * 8;
    let order_bits = n.bits();
    if digest_bits > order_bits {
        e >>= digest_bits - order_bits;
    }
    e % n
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::{PRIME256V1, SECP256K1};
    use hex_literal::hex;

    const HELLOWORLD_DER: [u8; 72] = hex!(
        "30460221008b791797742e036716576f7fe7aaf9e74bf04f1e2c222f623fc0ca58e2bf610e"
        "022100fcb32e2e5f6e0213ba181a894027f9934548189a7e2dc7a91ff02de6a441a3db"
    );
    const HELLOWORLD_BASE64: &str =
        "MEYCIQCLeReXdC4DZxZXb3/nqvnnS/BPHiwiL2I/wMpY4r9hDgIhAPyzLi5fbgITuhgaiUAn+ZNFSBiafi3HqR/wLeakQaPb";

    fn helloworld() -> Signature {
        Signature::new(
            BigUint::from_bytes_be(&hex!(
                "8b791797742e036716576f7fe7aaf9e74bf04f1e2c222f623fc0ca58e2bf610e"
            )),
            BigUint::from_bytes_be(&hex!(
                "fcb32e2e5f6e0213ba181a894027f9934548189a7e2dc7a91ff02de6a441a3db"
            )),
        )
    }

    #[test]
    fn test_der_matches_reference() {
        let sig = helloworld();
        assert_eq!(sig.to_der().unwrap(), HELLOWORLD_DER.to_vec());
        assert_eq!(Signature::from_der(&HELLOWORLD_DER).unwrap(), sig);
    }

    #[test]
    fn test_base64_matches_reference() {
        let sig = helloworld();
        assert_eq!(sig.to_base64().unwrap(), HELLOWORLD_BASE64);
        assert_eq!(Signature::from_base64(HELLOWORLD_BASE64).unwrap(), sig);
    }

    #[test]
    fn test_der_small_components() {
        let sig = Signature::new(BigUint::from(1u32), BigUint::from(0x80u32));
        let der = sig.to_der().unwrap();
        assert_eq!(der, hex!("3007020101020200 80").to_vec());
        assert_eq!(Signature::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn test_der_rejects_malformed() {
        // truncated
        assert!(matches!(
            Signature::from_der(&HELLOWORLD_DER[..70]),
            Err(Error::InvalidEncoding(_))
        ));
        // trailing byte
        let mut long = HELLOWORLD_DER.to_vec();
        long.push(0);
        assert!(matches!(Signature::from_der(&long), Err(Error::InvalidEncoding(_))));
        // non-minimal integer
        assert!(matches!(
            Signature::from_der(&hex!("300702020001020101")),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(matches!(
            Signature::from_base64("not base64!"),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_fixed_width_bytes() {
        let sig = Signature::new(BigUint::from(1u32), BigUint::from(2u32));
        let bytes = sig.to_bytes(&PRIME256V1).unwrap();
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 1);
        assert_eq!(bytes[63], 2);
        assert_eq!(Signature::from_bytes(&bytes).unwrap(), sig);

        assert!(matches!(
            Signature::from_bytes(&bytes[..63]),
            Err(Error::InvalidEncoding(_))
        ));

        let oversized = Signature::new(BigUint::from(1u32) << 300u32, BigUint::from(1u32));
        assert_eq!(oversized.to_bytes(&PRIME256V1), Err(Error::InvalidSignature));
    }

    #[test]
    fn test_normalize_s() {
        let sig = helloworld();
        assert!(!sig.is_low_s(&SECP256K1));

        let low = sig.normalize_s(&SECP256K1);
        assert!(low.is_low_s(&SECP256K1));
        assert_eq!(low.r, sig.r);
        assert_eq!(
            low.s,
            BigUint::from_bytes_be(&hex!(
                "034cd1d1a091fdec45e7e576bfd8066b7566c44c311ad8929fe230a62bf49d66"
            ))
        );
        assert_eq!(low.normalize_s(&SECP256K1), low);
    }

    #[test]
    fn test_digest_to_scalar_truncates_wide_digests() {
        let n = BigUint::from(0xffffu32);
        // 16-bit order keeps the leading two bytes
        assert_eq!(digest_to_scalar(&[0x12, 0x34, 0x56], &n), BigUint::from(0x1234u32));
        assert_eq!(digest_to_scalar(&[0x12], &n), BigUint::from(0x12u32));

        let digest = hex!("936a185caaa266bb9cbe981e9e05cb78cd732b0b3280eb944412bb6f8f8f07af");
        assert_eq!(
            digest_to_scalar(&digest, SECP256K1.n()),
            BigUint::from_bytes_be(&digest)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let sig = helloworld();
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(serde_json::from_str::<Signature>(&json).unwrap(), sig);
    }
}
