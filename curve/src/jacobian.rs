use core::fmt::{self, Debug, Formatter};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::modular::{add_mod, mul_mod, sub_mod};
use crate::{CurveFp, Group, Point};

/// Point in Jacobian coordinates (X:Y:Z), where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is represented as (0:1:0).
///
/// Addition and doubling need no field inversion, which keeps the scalar
/// multiplication ladder down to a single inversion at the end.
#[derive(Clone)]
pub struct Jacobian<'c> {
    curve: &'c CurveFp,
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl<'c> Jacobian<'c> {
    /// The point at infinity (identity element): (0:1:0)
    pub fn infinity(curve: &'c CurveFp) -> Self {
        Jacobian {
            curve,
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Point<'c>) -> Self {
        if point.is_infinity() {
            return Self::infinity(point.curve());
        }

        Jacobian {
            curve: point.curve(),
            x: point.x().clone(),
            y: point.y().clone(),
            z: BigUint::one(),
        }
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Point<'c> {
        if self.is_infinity() {
            return Point::infinity(self.curve);
        }

        let p = self.curve.p();
        let z_inv = self.curve.invert(&self.z);
        let z_inv2 = mul_mod(&z_inv, &z_inv, p);
        let z_inv3 = mul_mod(&z_inv2, &z_inv, p);
        let x = mul_mod(&self.x, &z_inv2, p);
        let y = mul_mod(&self.y, &z_inv3, p);

        Point::new(self.curve, x, y)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity(self.curve);
        }

        let p = self.curve.p();

        // S = 4*X*Y^2, M = 3*X^2 + a*Z^4
        let y2 = mul_mod(&self.y, &self.y, p);
        let s = mul_mod(&(&self.x * 4u32), &y2, p);
        let z2 = mul_mod(&self.z, &self.z, p);
        let z4 = mul_mod(&z2, &z2, p);
        let x2 = mul_mod(&self.x, &self.x, p);
        let m = add_mod(&(x2 * 3u32), &mul_mod(self.curve.a(), &z4, p), p);

        // X' = M^2 - 2S
        let x_r = sub_mod(&mul_mod(&m, &m, p), &(&s * 2u32), p);
        // Y' = M*(S - X') - 8*Y^4
        let y4 = mul_mod(&y2, &y2, p);
        let y_r = sub_mod(&mul_mod(&m, &sub_mod(&s, &x_r, p), p), &(y4 * 8u32), p);
        // Z' = 2*Y*Z
        let z_r = mul_mod(&(&self.y * 2u32), &self.z, p);

        Jacobian {
            curve: self.curve,
            x: x_r,
            y: y_r,
            z: z_r,
        }
    }

    /// Point addition.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let p = self.curve.p();

        let z1z1 = mul_mod(&self.z, &self.z, p);
        let z2z2 = mul_mod(&other.z, &other.z, p);
        let u1 = mul_mod(&self.x, &z2z2, p);
        let u2 = mul_mod(&other.x, &z1z1, p);
        let s1 = mul_mod(&mul_mod(&self.y, &other.z, p), &z2z2, p);
        let s2 = mul_mod(&mul_mod(&other.y, &self.z, p), &z1z1, p);

        if u1 == u2 {
            if s1 != s2 {
                return Self::infinity(self.curve);
            }
            return self.double();
        }

        let h = sub_mod(&u2, &u1, p);
        let r = sub_mod(&s2, &s1, p);
        let h2 = mul_mod(&h, &h, p);
        let h3 = mul_mod(&h2, &h, p);
        let u1h2 = mul_mod(&u1, &h2, p);

        // X3 = R^2 - H^3 - 2*U1*H^2
        let x_r = sub_mod(&sub_mod(&mul_mod(&r, &r, p), &h3, p), &(&u1h2 * 2u32), p);
        // Y3 = R*(U1*H^2 - X3) - S1*H^3
        let y_r = sub_mod(
            &mul_mod(&r, &sub_mod(&u1h2, &x_r, p), p),
            &mul_mod(&s1, &h3, p),
            p,
        );
        // Z3 = H*Z1*Z2
        let z_r = mul_mod(&mul_mod(&h, &self.z, p), &other.z, p);

        Jacobian {
            curve: self.curve,
            x: x_r,
            y: y_r,
            z: z_r,
        }
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        Jacobian {
            curve: self.curve,
            x: self.x.clone(),
            y: sub_mod(&BigUint::zero(), &self.y, self.curve.p()),
            z: self.z.clone(),
        }
    }
}

impl<'c> Group<'c> for Jacobian<'c> {
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
        self.is_infinity()
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        Jacobian::add(self, other)
    }

    #[inline]
    fn double(&self) -> Self {
        Jacobian::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Jacobian::negate(self)
    }
}

/// Projective equality: X1*Z2^2 = X2*Z1^2 and Y1*Z2^3 = Y2*Z1^3.
impl PartialEq for Jacobian<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }

        let p = self.curve.p();
        let z1z1 = mul_mod(&self.z, &self.z, p);
        let z2z2 = mul_mod(&other.z, &other.z, p);
        let x_eq = mul_mod(&self.x, &z2z2, p) == mul_mod(&other.x, &z1z1, p);
        let y_eq = mul_mod(&mul_mod(&self.y, &other.z, p), &z2z2, p)
            == mul_mod(&mul_mod(&other.y, &self.z, p), &z1z1, p);

        x_eq && y_eq
    }
}

impl Eq for Jacobian<'_> {}

impl Debug for Jacobian<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jacobian")
            .field("curve", &self.curve.name())
            .field("x", &format_args!("{:#x}", self.x))
            .field("y", &format_args!("{:#x}", self.y))
            .field("z", &format_args!("{:#x}", self.z))
            .finish()
    }
}
