//! Modular arithmetic over arbitrary-precision unsigned integers.
//!
//! `num-bigint` provides the ring operations (add, subtract, multiply,
//! divide-with-remainder). This module layers reduction, inversion,
//! exponentiation and square roots modulo an arbitrary modulus on top.
//!
//! Every function expects a non-zero modulus.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::CurveError;

/// Reduce `a` into `[0, m)`.
#[inline]
pub fn modulo(a: &BigUint, m: &BigUint) -> BigUint {
    a % m
}

#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `a - b mod m` without leaving the unsigned domain.
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    (a + m - b) % m
}

#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Binary exponentiation, most-significant exponent bit first.
///
/// Each exponent bit costs one squaring and one multiplication; the product
/// is computed unconditionally and only selected afterwards.
pub fn pow_mod(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let base = base % modulus;
    let mut result = BigUint::one();

    for i in (0..exp.bits()).rev() {
        result = &result * &result % modulus;
        let product = &result * &base % modulus;
        if exp.bit(i) {
            result = product;
        }
    }

    result
}

/// Modular inverse via the extended Euclidean algorithm.
///
/// Works for any modulus. Returns [`CurveError::NotInvertible`] when
/// `gcd(a, m) != 1`. The running time depends on `a`, so secret operands go
/// through [`inv_mod_prime`] instead.
pub fn inv_mod(a: &BigUint, m: &BigUint) -> Result<BigUint, CurveError> {
    if m.is_zero() {
        return Err(CurveError::NotInvertible);
    }

    let modulus = BigInt::from(m.clone());
    let a = BigInt::from(a % m);
    let egcd = a.extended_gcd(&modulus);
    if !egcd.gcd.is_one() {
        return Err(CurveError::NotInvertible);
    }

    egcd.x
        .mod_floor(&modulus)
        .to_biguint()
        .ok_or(CurveError::NotInvertible)
}

/// Modular inverse modulo a prime, computed as `a^(p-2) mod p`.
///
/// The work done is fixed by the bit length of `p`, independent of `a`.
/// A result that does not multiply back to one (the modulus was not prime)
/// is reported as [`CurveError::NotInvertible`].
pub fn inv_mod_prime(a: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    if p <= &BigUint::one() {
        return Err(CurveError::NotInvertible);
    }

    let a = a % p;
    if a.is_zero() {
        return Err(CurveError::NotInvertible);
    }

    let inverse = pow_mod(&a, &(p - 2u32), p);
    if mul_mod(&a, &inverse, p).is_one() {
        Ok(inverse)
    } else {
        Err(CurveError::NotInvertible)
    }
}

/// Square root of `value` modulo the odd prime `p`, if one exists.
///
/// Uses the `(p+1)/4` exponent shortcut when `p ≡ 3 (mod 4)` and
/// Tonelli-Shanks otherwise. Only one of the two roots is returned.
pub fn sqrt_mod(value: &BigUint, p: &BigUint) -> Option<BigUint> {
    let value = value % p;
    if value.is_zero() {
        return Some(BigUint::zero());
    }

    let candidate = if p % 4u32 == BigUint::from(3u32) {
        pow_mod(&value, &((p + 1u32) >> 2), p)
    } else {
        tonelli_shanks(&value, p)?
    };

    (mul_mod(&candidate, &candidate, p) == value).then_some(candidate)
}

fn tonelli_shanks(n: &BigUint, p: &BigUint) -> Option<BigUint> {
    let one = BigUint::one();
    let p_minus_one = p - &one;
    let half = &p_minus_one >> 1;

    // Euler's criterion
    if pow_mod(n, &half, p) != one {
        return None;
    }

    let s = p_minus_one.trailing_zeros()?;
    let q = &p_minus_one >> s;

    let mut z = BigUint::from(2u32);
    while pow_mod(&z, &half, p) != p_minus_one {
        z += 1u32;
    }

    let mut m = s;
    let mut c = pow_mod(&z, &q, p);
    let mut t = pow_mod(n, &q, p);
    let mut r = pow_mod(n, &((&q + 1u32) >> 1), p);

    while !t.is_one() {
        let mut i = 0u64;
        let mut t_pow = t.clone();
        while !t_pow.is_one() {
            t_pow = &t_pow * &t_pow % p;
            i += 1;
            if i == m {
                return None;
            }
        }

        let b = pow_mod(&c, &(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }

    Some(r)
}
