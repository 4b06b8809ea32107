//! Named curves.
//!
//! Each curve is built once on first use and never mutated afterwards, so the
//! statics can be shared freely between threads.

use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

use crate::{CurveError, CurveFp};

/// secp256k1: `y^2 = x^3 + 7` over `p = 2^256 - 2^32 - 977` (SEC 2, 2.4.1).
pub static SECP256K1: Lazy<CurveFp> = Lazy::new(|| {
    CurveFp::new(
        "secp256k1",
        BigUint::zero(),
        BigUint::from(7u32),
        BigUint::from_bytes_be(&hex!(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        )),
        BigUint::from_bytes_be(&hex!(
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        )),
        BigUint::from_bytes_be(&hex!(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        )),
        BigUint::from_bytes_be(&hex!(
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        )),
        &[1, 3, 132, 0, 10],
    )
});

/// prime256v1 (NIST P-256, secp256r1): `y^2 = x^3 - 3x + b` (SEC 2, 2.4.2).
pub static PRIME256V1: Lazy<CurveFp> = Lazy::new(|| {
    CurveFp::new(
        "prime256v1",
        BigUint::from_bytes_be(&hex!(
            "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"
        )),
        BigUint::from_bytes_be(&hex!(
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"
        )),
        BigUint::from_bytes_be(&hex!(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
        )),
        BigUint::from_bytes_be(&hex!(
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
        )),
        BigUint::from_bytes_be(&hex!(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        )),
        BigUint::from_bytes_be(&hex!(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
        )),
        &[1, 2, 840, 10045, 3, 1, 7],
    )
});

/// All curves known to the registry.
pub fn supported_curves() -> [&'static CurveFp; 2] {
    [&*SECP256K1, &*PRIME256V1]
}

/// Look a curve up by name. `secp256r1` and `P-256` are accepted as aliases
/// of `prime256v1`.
pub fn curve_by_name(name: &str) -> Result<&'static CurveFp, CurveError> {
    let canonical = match name {
        "secp256r1" | "P-256" => "prime256v1",
        other => other,
    };

    supported_curves()
        .into_iter()
        .find(|curve| curve.name() == canonical)
        .ok_or_else(|| CurveError::UnknownCurve(name.to_owned()))
}

/// Look a curve up by its object identifier arcs.
pub fn curve_by_oid(oid: &[u32]) -> Result<&'static CurveFp, CurveError> {
    supported_curves()
        .into_iter()
        .find(|curve| curve.oid() == oid)
        .ok_or_else(|| {
            let dotted: Vec<String> = oid.iter().map(u32::to_string).collect();
            CurveError::UnknownCurve(dotted.join("."))
        })
}
