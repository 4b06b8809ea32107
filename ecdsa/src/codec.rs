//! DER and PEM containers for EC keys.
//!
//! The codec only moves bytes in and out of the standard envelopes; it knows
//! nothing about curve arithmetic. Private keys use the SEC1 `ECPrivateKey`
//! structure (RFC 5915) and public keys a SubjectPublicKeyInfo with
//! `id-ecPublicKey` (RFC 5480). In both cases the curve travels as a named
//! curve object identifier.

use der::asn1::{BitStringRef, ObjectIdentifier};
use der::{Decode, Encode};
use num_bigint::BigUint;
use num_traits::Zero;
use pem_rfc7468::LineEnding;
use sec1::{EcParameters, EcPrivateKey};
use spki::{AlgorithmIdentifier, SubjectPublicKeyInfo};

use crate::constants::EC_PUBLIC_KEY_OID;
use crate::errors::Error;

type EcSubjectPublicKeyInfo<'a> = SubjectPublicKeyInfo<ObjectIdentifier, BitStringRef<'a>>;

/// Encode a private scalar as a SEC1 `ECPrivateKey` document.
pub fn encode_private_key(
    curve_oid: &[u32],
    secret: &[u8],
    public_key: &[u8],
) -> Result<Vec<u8>, Error> {
    let key = EcPrivateKey {
        private_key: secret,
        parameters: Some(EcParameters::NamedCurve(oid_from_arcs(curve_oid)?)),
        public_key: Some(public_key),
    };
    Ok(key.to_der()?)
}

/// Decode a SEC1 `ECPrivateKey` document into the curve OID arcs and the
/// big-endian secret scalar.
pub fn decode_private_key(bytes: &[u8]) -> Result<(Vec<u32>, Vec<u8>), Error> {
    let key = EcPrivateKey::from_der(bytes)?;
    let oid = key
        .parameters
        .and_then(|parameters| parameters.named_curve())
        .ok_or_else(|| Error::InvalidEncoding("private key has no named curve".into()))?;

    Ok((oid.arcs().collect(), key.private_key.to_vec()))
}

/// Encode SEC1 point bytes as a SubjectPublicKeyInfo document.
pub fn encode_public_key(curve_oid: &[u32], point: &[u8]) -> Result<Vec<u8>, Error> {
    let spki = EcSubjectPublicKeyInfo {
        algorithm: AlgorithmIdentifier {
            oid: EC_PUBLIC_KEY_OID,
            parameters: Some(oid_from_arcs(curve_oid)?),
        },
        subject_public_key: BitStringRef::from_bytes(point)?,
    };
    Ok(spki.to_der()?)
}

/// Decode a SubjectPublicKeyInfo document into the curve OID arcs and the
/// SEC1 point bytes.
pub fn decode_public_key(bytes: &[u8]) -> Result<(Vec<u32>, Vec<u8>), Error> {
    let spki = EcSubjectPublicKeyInfo::from_der(bytes)?;
    if spki.algorithm.oid != EC_PUBLIC_KEY_OID {
        return Err(Error::InvalidEncoding(format!(
            "unexpected public key algorithm {}",
            spki.algorithm.oid
        )));
    }

    let curve_oid = spki
        .algorithm
        .parameters
        .ok_or_else(|| Error::InvalidEncoding("public key has no named curve".into()))?;
    let point = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| Error::InvalidEncoding("public key bit string is not byte aligned".into()))?;

    Ok((curve_oid.arcs().collect(), point.to_vec()))
}

/// Extract and decode the PEM block carrying `label`. Anything around the
/// block, such as a leading `EC PARAMETERS` block, is ignored.
pub fn pem_decode(text: &str, label: &str) -> Result<Vec<u8>, Error> {
    let begin = format!("-----BEGIN {label}-----");
    let end = format!("-----END {label}-----");

    let start = text
        .find(&begin)
        .ok_or_else(|| Error::InvalidEncoding(format!("no {label} PEM block")))?;
    let stop = text[start..]
        .find(&end)
        .map(|offset| start + offset + end.len())
        .ok_or_else(|| Error::InvalidEncoding(format!("unterminated {label} PEM block")))?;

    let mut block = text[start..stop].to_owned();
    block.push('\n');

    let (found, der) = pem_rfc7468::decode_vec(block.as_bytes())?;
    if found != label {
        return Err(Error::InvalidEncoding(format!("unexpected PEM label {found}")));
    }
    Ok(der)
}

pub fn pem_encode(label: &str, der: &[u8]) -> Result<String, Error> {
    Ok(pem_rfc7468::encode_string(label, LineEnding::LF, der)?)
}

/// Big-endian bytes of `value` left-padded to `len`, or `None` when the
/// value does not fit.
pub(crate) fn fixed_be_bytes(value: &BigUint, len: usize) -> Option<Vec<u8>> {
    let bytes = value.to_bytes_be();
    if value.is_zero() {
        return Some(vec![0u8; len]);
    }
    if bytes.len() > len {
        return None;
    }

    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    Some(out)
}

fn oid_from_arcs(arcs: &[u32]) -> Result<ObjectIdentifier, Error> {
    let dotted = arcs
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(".");
    ObjectIdentifier::new(&dotted)
        .map_err(|err| Error::InvalidEncoding(format!("invalid curve identifier {dotted}: {err}")))
}
