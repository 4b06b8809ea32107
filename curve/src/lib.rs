//! Elliptic curve groups over prime fields.
//!
//! This crate provides short Weierstrass curve parameters, affine and Jacobian
//! curve points, modular arithmetic over `num-bigint` integers, and helpers
//! for random sampling. The named curves secp256k1 and prime256v1 live in the
//! `registry` module as immutable statics.

mod affine;
mod curve;
mod errors;
mod group;
mod jacobian;
pub mod modular;
mod msm;
pub mod registry;
mod random;

pub use affine::Point;
pub use curve::CurveFp;
pub use errors::CurveError;
pub use group::Group;
pub use jacobian::Jacobian;
pub use msm::multiply_and_add;
pub use num_bigint::BigUint;
pub use random::{random_below, random_in_range, RandomScalar};
pub use registry::{curve_by_name, curve_by_oid, supported_curves, PRIME256V1, SECP256K1};
