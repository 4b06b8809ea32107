use num_bigint::BigUint;

use crate::{Jacobian, Point};

/// Compute `a*P + b*Q` with Shamir's trick: one shared doubling chain and a
/// precomputed `P + Q`.
///
/// The loop branches on the scalar bits, so this is only meant for public
/// scalars such as the ones used during signature verification.
pub fn multiply_and_add<'c>(p: &Point<'c>, a: &BigUint, q: &Point<'c>, b: &BigUint) -> Point<'c> {
    let jp = Jacobian::from_affine(p);
    let jq = Jacobian::from_affine(q);
    let jpq = jp.add(&jq);

    let bits = a.bits().max(b.bits());
    let mut result = Jacobian::infinity(p.curve());

    for i in (0..bits).rev() {
        result = result.double();
        match (a.bit(i), b.bit(i)) {
            (true, true) => result = result.add(&jpq),
            (true, false) => result = result.add(&jp),
            (false, true) => result = result.add(&jq),
            (false, false) => {}
        }
    }

    result.to_affine()
}
