use core::fmt::{self, Debug, Formatter};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::modular::{add_mod, mul_mod, pow_mod, sqrt_mod, sub_mod};
use crate::{CurveError, Group, Point};

/// Short Weierstrass curve `y^2 = x^3 + A*x + B` over the prime field `F_P`,
/// with a base point `G` of prime order `N`.
///
/// Curves are plain immutable data. Points borrow the curve they belong to,
/// so the named curves live in process-wide statics (see [`crate::registry`]).
#[derive(Clone, PartialEq, Eq)]
pub struct CurveFp {
    name: String,
    a: BigUint,
    b: BigUint,
    p: BigUint,
    n: BigUint,
    gx: BigUint,
    gy: BigUint,
    oid: Vec<u32>,
}

impl CurveFp {
    /// Build a curve from its domain parameters.
    ///
    /// `a` and `b` are reduced modulo `p`. Primality of `p` and `n` is not
    /// checked; [`CurveFp::validate`] covers the remaining invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        a: BigUint,
        b: BigUint,
        p: BigUint,
        n: BigUint,
        gx: BigUint,
        gy: BigUint,
        oid: &[u32],
    ) -> Self {
        CurveFp {
            name: name.into(),
            a: &a % &p,
            b: &b % &p,
            p,
            n,
            gx,
            gy,
            oid: oid.to_vec(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The field modulus.
    #[inline]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The order of the base point.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Object identifier arcs, e.g. `[1, 3, 132, 0, 10]` for secp256k1.
    #[inline]
    pub fn oid(&self) -> &[u32] {
        &self.oid
    }

    /// The base point `G`.
    pub fn generator(&self) -> Point<'_> {
        Point::new(self, self.gx.clone(), self.gy.clone())
    }

    /// Byte length of the group order; the width of scalars and of each
    /// half of a fixed-width signature.
    #[inline]
    pub fn length(&self) -> usize {
        self.n.bits().div_ceil(8) as usize
    }

    /// Byte length of a field element.
    #[inline]
    pub fn field_length(&self) -> usize {
        self.p.bits().div_ceil(8) as usize
    }

    /// Right-hand side of the curve equation, `x^3 + A*x + B mod P`.
    pub(crate) fn evaluate(&self, x: &BigUint) -> BigUint {
        let x2 = mul_mod(x, x, &self.p);
        let x3 = mul_mod(&x2, x, &self.p);
        let ax = mul_mod(&self.a, x, &self.p);
        add_mod(&add_mod(&x3, &ax, &self.p), &self.b, &self.p)
    }

    /// Field inverse `a^(P-2) mod P`. Callers guarantee `a != 0 mod P`.
    #[inline]
    pub(crate) fn invert(&self, a: &BigUint) -> BigUint {
        pow_mod(a, &(&self.p - 2u32), &self.p)
    }

    /// Check `y^2 = x^3 + A*x + B (mod P)`. The point at infinity is always
    /// on the curve; unreduced coordinates never are.
    pub fn contains(&self, point: &Point<'_>) -> bool {
        if point.is_infinity() {
            return true;
        }

        let (x, y) = (point.x(), point.y());
        if x >= &self.p || y >= &self.p {
            return false;
        }

        mul_mod(y, y, &self.p) == self.evaluate(x)
    }

    /// Solve the curve equation for `y` given `x`, picking the root whose
    /// least significant bit matches `is_even`.
    pub fn y(&self, x: &BigUint, is_even: bool) -> Result<BigUint, CurveError> {
        if x >= &self.p {
            return Err(CurveError::NotOnCurve);
        }
        let rhs = self.evaluate(x);
        let root = sqrt_mod(&rhs, &self.p).ok_or(CurveError::NotOnCurve)?;
        if mul_mod(&root, &root, &self.p) != rhs {
            return Err(CurveError::NotOnCurve);
        }

        let root_is_even = !root.bit(0);
        if root_is_even == is_even {
            Ok(root)
        } else {
            Ok(sub_mod(&self.p, &root, &self.p))
        }
    }

    /// Check the structural invariants of the domain parameters:
    /// non-singularity, `G` on the curve and `N*G = O`.
    pub fn validate(&self) -> Result<(), CurveError> {
        let p = &self.p;
        let a3 = mul_mod(&mul_mod(&self.a, &self.a, p), &self.a, p);
        let b2 = mul_mod(&self.b, &self.b, p);
        let discriminant = add_mod(
            &mul_mod(&BigUint::from(4u32), &a3, p),
            &mul_mod(&BigUint::from(27u32), &b2, p),
            p,
        );
        if discriminant.is_zero() {
            return Err(CurveError::InvalidParameters("curve is singular"));
        }

        let g = self.generator();
        if g.is_infinity() || !self.contains(&g) {
            return Err(CurveError::InvalidParameters("base point is not on the curve"));
        }

        if !g.scalar_mul(&self.n).is_identity() {
            return Err(CurveError::InvalidParameters("base point order is not N"));
        }

        Ok(())
    }
}

impl Debug for CurveFp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveFp")
            .field("name", &self.name)
            .field("p", &format_args!("{:#x}", self.p))
            .field("n", &format_args!("{:#x}", self.n))
            .finish_non_exhaustive()
    }
}
