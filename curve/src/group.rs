use num_bigint::BigUint;

use crate::CurveFp;

/// Group law shared by the affine and Jacobian point representations.
pub trait Group<'c>: Sized + Clone {
    fn identity(curve: &'c CurveFp) -> Self;
    fn curve(&self) -> &'c CurveFp;
    fn is_identity(&self) -> bool;
    fn add(&self, other: &Self) -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Scalar multiplication with a Montgomery ladder.
    ///
    /// The scalar is used as given, not reduced modulo the curve order, so
    /// the result is exact for points outside the subgroup generated by `G`.
    /// The ladder walks [`ladder_width`] bits starting from the identity, so
    /// every scalar below the curve order takes the same number of steps and
    /// every bit costs exactly one addition and one doubling.
    fn scalar_mul(&self, scalar: &BigUint) -> Self {
        let width = ladder_width(scalar, self.curve().n());

        // invariant: r1 = r0 + self
        let mut r0 = Self::identity(self.curve());
        let mut r1 = self.clone();

        for i in (0..width).rev() {
            let sum = r0.add(&r1);
            if scalar.bit(i) {
                r0 = sum;
                r1 = r1.double();
            } else {
                r1 = sum;
                r0 = r0.double();
            }
        }

        r0
    }

    fn mul_u64(&self, n: u64) -> Self {
        self.scalar_mul(&BigUint::from(n))
    }
}

/// Number of ladder steps for `k`: one more than the wider of `k` and `n`.
/// Leading zero bits only double the identity.
pub(crate) fn ladder_width(k: &BigUint, n: &BigUint) -> u64 {
    k.bits().max(n.bits()) + 1
}
