use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::CryptoRng;

use crate::CurveFp;

/// Helper trait for sampling secret scalars from a cryptographically secure
/// random source.
pub trait RandomScalar {
    /// Uniform scalar in `[1, N-1]`.
    fn random_scalar<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint;
}

impl RandomScalar for CurveFp {
    #[inline]
    fn random_scalar<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> BigUint {
        random_in_range(rng, &BigUint::one(), self.n())
    }
}

/// Uniform integer in `[low, high)` by rejection sampling over
/// `bits(high - low)`-bit candidates. Returns `low` when the range is empty.
pub fn random_in_range<R: CryptoRng + ?Sized>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> BigUint {
    if high <= low {
        return low.clone();
    }

    let span = high - low;
    let bits = span.bits();
    let mut buf = vec![0u8; bits.div_ceil(8) as usize];
    let excess = buf.len() as u64 * 8 - bits;

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xffu8 >> excess;
        let candidate = BigUint::from_bytes_be(&buf);
        if candidate < span {
            return low + candidate;
        }
    }
}

/// Uniform integer in `[0, high)`.
#[inline]
pub fn random_below<R: CryptoRng + ?Sized>(rng: &mut R, high: &BigUint) -> BigUint {
    random_in_range(rng, &BigUint::zero(), high)
}
