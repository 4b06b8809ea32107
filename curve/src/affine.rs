use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Mul, Neg};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::modular::{add_mod, mul_mod, sub_mod};
use crate::{CurveFp, Group, Jacobian};

/// Affine point on a short Weierstrass curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// The point borrows its curve; two points compare equal when both are at
/// infinity or both carry the same coordinates, whatever curve they came from.
#[derive(Clone)]
pub struct Point<'c> {
    curve: &'c CurveFp,
    x: BigUint,
    y: BigUint,
    is_infinity: bool,
}

impl<'c> Point<'c> {
    /// Create a new affine point. Membership is not checked; see
    /// [`CurveFp::contains`].
    pub fn new(curve: &'c CurveFp, x: BigUint, y: BigUint) -> Self {
        Point {
            curve,
            x,
            y,
            is_infinity: false,
        }
    }

    /// The point at infinity (identity element)
    pub fn infinity(curve: &'c CurveFp) -> Self {
        Point {
            curve,
            x: BigUint::zero(),
            y: BigUint::zero(),
            is_infinity: true,
        }
    }

    #[inline]
    pub fn curve(&self) -> &'c CurveFp {
        self.curve
    }

    #[inline]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check whether the point satisfies its curve's equation.
    #[inline]
    pub fn is_on_curve(&self) -> bool {
        self.curve.contains(self)
    }

    /// Point addition with the chord rule.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinity {
            return other.clone();
        }
        if other.is_infinity {
            return self.clone();
        }

        let p = self.curve.p();
        if self.x == other.x {
            if add_mod(&self.y, &other.y, p).is_zero() {
                return Self::infinity(self.curve);
            }
            return self.double();
        }

        // λ = (y2 - y1) / (x2 - x1)
        let numerator = sub_mod(&other.y, &self.y, p);
        let denominator = sub_mod(&other.x, &self.x, p);
        let lambda = mul_mod(&numerator, &self.curve.invert(&denominator), p);

        self.chord(&lambda, &other.x)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        // If y = 0, the tangent is vertical and 2P = O
        if self.is_infinity || self.y.is_zero() {
            return Self::infinity(self.curve);
        }

        // λ = (3x^2 + a) / (2y)
        let p = self.curve.p();
        let x2 = mul_mod(&self.x, &self.x, p);
        let numerator = add_mod(&(x2 * 3u32), self.curve.a(), p);
        let denominator = add_mod(&self.y, &self.y, p);
        let lambda = mul_mod(&numerator, &self.curve.invert(&denominator), p);

        self.chord(&lambda, &self.x)
    }

    // x_r = λ^2 - x1 - x2, y_r = λ(x1 - x_r) - y1
    fn chord(&self, lambda: &BigUint, other_x: &BigUint) -> Self {
        let p = self.curve.p();
        let lambda2 = mul_mod(lambda, lambda, p);
        let x_r = sub_mod(&sub_mod(&lambda2, &self.x, p), other_x, p);
        let y_r = sub_mod(&mul_mod(lambda, &sub_mod(&self.x, &x_r, p), p), &self.y, p);

        Point::new(self.curve, x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }
        let y = sub_mod(&BigUint::zero(), &self.y, self.curve.p());
        Point::new(self.curve, self.x.clone(), y)
    }

    /// Scalar multiplication `k*P` for any `k`, without reducing it modulo the
    /// curve order.
    ///
    /// Runs a Montgomery ladder in Jacobian coordinates and converts back
    /// with a single field inversion.
    pub fn multiply(&self, k: &BigUint) -> Self {
        Jacobian::from_affine(self).scalar_mul(k).to_affine()
    }
}

impl<'c> Group<'c> for Point<'c> {
    #[inline]
    fn identity(curve: &'c CurveFp) -> Self {
        Self::infinity(curve)
    }

    #[inline]
    fn curve(&self) -> &'c CurveFp {
        self.curve
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        Point::add(self, other)
    }

    #[inline]
    fn double(&self) -> Self {
        Point::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Point::negate(self)
    }

    #[inline]
    fn scalar_mul(&self, scalar: &BigUint) -> Self {
        self.multiply(scalar)
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity, other.is_infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for Point<'_> {}

impl Debug for Point<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_infinity {
            return write!(f, "Point({}, infinity)", self.curve.name());
        }
        write!(
            f,
            "Point({}, x: {:#x}, y: {:#x})",
            self.curve.name(),
            self.x,
            self.y
        )
    }
}

impl<'c> Add for &Point<'c> {
    type Output = Point<'c>;

    fn add(self, other: Self) -> Point<'c> {
        Point::add(self, other)
    }
}

impl<'c> Neg for &Point<'c> {
    type Output = Point<'c>;

    fn neg(self) -> Point<'c> {
        self.negate()
    }
}

impl<'c> Mul<&BigUint> for &Point<'c> {
    type Output = Point<'c>;

    fn mul(self, scalar: &BigUint) -> Point<'c> {
        self.multiply(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PRIME256V1, SECP256K1};
    use hex_literal::hex;
    use proptest::prelude::*;

    fn scalar(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_infinity() {
        let inf = Point::infinity(&SECP256K1);
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = SECP256K1.generator();
        let inf = Point::infinity(&SECP256K1);

        assert_eq!(g.add(&inf), g);
        assert_eq!(inf.add(&g), g);
        assert_eq!(inf.add(&inf), inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = SECP256K1.generator();
        let g2 = g.double();

        let expected = Point::new(
            &SECP256K1,
            BigUint::from_bytes_be(&hex!(
                "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
            )),
            BigUint::from_bytes_be(&hex!(
                "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"
            )),
        );
        assert_eq!(g2, expected);
        assert!(g2.is_on_curve());
        assert_eq!(g.add(&g), g2);
        assert_eq!(g.multiply(&scalar(2)), g2);
    }

    #[test]
    fn test_point_negation() {
        let g = SECP256K1.generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(&neg_g.x, &g.x);
        assert_eq!(g.add(&neg_g), Point::infinity(&SECP256K1));
        assert_eq!(Point::infinity(&SECP256K1).negate(), Point::infinity(&SECP256K1));
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = PRIME256V1.generator();
        let result = g.multiply(&scalar(5));

        // 5*G = G + G + G + G + G
        let expected = g.add(&g).add(&g).add(&g).add(&g);
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = SECP256K1.generator();
        assert_eq!(g.multiply(&BigUint::zero()), Point::infinity(&SECP256K1));
        assert_eq!(g.multiply(&scalar(1)), g);
    }

    #[test]
    fn test_order_times_generator_is_infinity() {
        for curve in [&*SECP256K1, &*PRIME256V1] {
            let g = curve.generator();
            assert!(g.multiply(curve.n()).is_infinity());
            assert_eq!(g.multiply(&(curve.n() + 1u32)), g);
            assert_eq!(g.multiply(&(curve.n() - 1u32)), g.negate());
        }
    }

    #[test]
    fn test_multiply_infinity() {
        let inf = Point::infinity(&SECP256K1);
        assert!(inf.multiply(&scalar(12345)).is_infinity());
    }

    #[test]
    fn test_doubling_point_with_zero_y() {
        // y = 0 has no solution on secp256k1, so build one on a toy curve:
        // y^2 = x^3 - x over F_23 contains (1, 0).
        let curve = CurveFp::new(
            "toy",
            scalar(22),
            BigUint::zero(),
            scalar(23),
            scalar(24),
            scalar(1),
            BigUint::zero(),
            &[],
        );
        let point = curve.generator();
        assert!(point.is_on_curve());
        assert!(point.double().is_infinity());
        assert!(point.add(&point).is_infinity());
    }

    #[test]
    fn test_multiply_point_outside_generator_subgroup() {
        // y^2 = x^3 - x over F_23 with G = (2, 11) of order 3; P = (6, 7) has
        // order 4, so k*P depends on k itself and not on k mod 3
        let curve = CurveFp::new(
            "toy3",
            scalar(22),
            BigUint::zero(),
            scalar(23),
            scalar(3),
            scalar(2),
            scalar(11),
            &[],
        );
        assert!(curve.validate().is_ok());

        let p = Point::new(&curve, scalar(6), scalar(7));
        assert!(p.is_on_curve());
        assert_eq!(p.multiply(&scalar(1)), p);

        let two_p = Point::new(&curve, scalar(1), BigUint::zero());
        assert_eq!(p.add(&p), two_p);
        assert_eq!(p.multiply(&scalar(2)), two_p);
        assert_eq!(p.mul_u64(2), two_p);
        assert_eq!(p.multiply(&scalar(3)), Point::new(&curve, scalar(6), scalar(16)));
        assert!(p.multiply(&scalar(4)).is_infinity());
        assert_eq!(p.multiply(&scalar(5)), p);
        assert!(curve.generator().multiply(&scalar(3)).is_infinity());
    }

    #[test]
    fn test_equality_ignores_curve() {
        let a = Point::new(&SECP256K1, scalar(3), scalar(4));
        let b = Point::new(&PRIME256V1, scalar(3), scalar(4));
        assert_eq!(a, b);
        assert_ne!(a, Point::infinity(&SECP256K1));
        assert_eq!(Point::infinity(&SECP256K1), Point::infinity(&PRIME256V1));
    }

    #[test]
    fn test_operators() {
        let g = SECP256K1.generator();
        let three = &g * &scalar(3);
        assert_eq!(&three + &(-&g), g.double());
    }

    #[test]
    fn test_associativity() {
        let g = SECP256K1.generator();
        let a = scalar(3);
        let b = scalar(5);

        // (a + b) * G = a*G + b*G
        let left = g.multiply(&(&a + &b));
        let right = g.multiply(&a).add(&g.multiply(&b));

        assert_eq!(left, right);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_double_matches_add_and_multiply(k in 1u64..) {
            let p = SECP256K1.generator().multiply(&scalar(k));
            prop_assert_eq!(p.double(), p.add(&p));
            prop_assert_eq!(p.multiply(&scalar(2)), p.double());
            prop_assert!(p.double().is_on_curve());
        }

        #[test]
        fn prop_add_negation_is_infinity(k in 1u64..) {
            let p = PRIME256V1.generator().multiply(&scalar(k));
            prop_assert!(p.add(&p.negate()).is_infinity());
            prop_assert_eq!(p.add(&Point::infinity(&PRIME256V1)), p);
        }

        #[test]
        fn prop_multiply_is_linear(a in any::<u64>(), b in any::<u64>()) {
            let g = SECP256K1.generator();
            let left = g.multiply(&(scalar(a) + scalar(b)));
            let right = g.multiply(&scalar(a)).add(&g.multiply(&scalar(b)));
            prop_assert_eq!(left, right);
        }
    }
}
