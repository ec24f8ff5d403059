use persistent::quaternion::Quaternion;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A quaternion whose coefficients are small integers, so every arithmetic
/// law below holds exactly in `f64` with no tolerance fudging.
#[derive(Clone, Copy, Debug)]
struct SmallQuaternion(Quaternion);

impl Arbitrary for SmallQuaternion {
    fn arbitrary(g: &mut Gen) -> Self {
        let coefficient = |g: &mut Gen| f64::from(i8::arbitrary(g));
        Self(Quaternion::new(
            coefficient(g),
            coefficient(g),
            coefficient(g),
            coefficient(g),
        ))
    }
}

#[quickcheck]
fn conjugate_is_an_involution(p: SmallQuaternion) -> bool {
    p.0.conjugate().conjugate() == p.0
}

#[quickcheck]
fn addition_commutes(p: SmallQuaternion, q: SmallQuaternion) -> bool {
    p.0 + q.0 == q.0 + p.0
}

#[quickcheck]
fn addition_associates(p: SmallQuaternion, q: SmallQuaternion, r: SmallQuaternion) -> bool {
    (p.0 + q.0) + r.0 == p.0 + (q.0 + r.0)
}

#[quickcheck]
fn zero_is_the_additive_identity(p: SmallQuaternion) -> bool {
    p.0 + Quaternion::ZERO == p.0
}

#[quickcheck]
fn conjugate_distributes_over_addition(p: SmallQuaternion, q: SmallQuaternion) -> bool {
    (p.0 + q.0).conjugate() == p.0.conjugate() + q.0.conjugate()
}

#[quickcheck]
fn conjugate_reverses_multiplication(p: SmallQuaternion, q: SmallQuaternion) -> bool {
    (p.0 * q.0).conjugate() == q.0.conjugate() * p.0.conjugate()
}

#[quickcheck]
fn coefficients_round_trip(p: SmallQuaternion) -> bool {
    let [a, b, c, d] = p.0.coefficients();

    Quaternion::new(a, b, c, d) == p.0
}

#[quickcheck]
fn rendering_never_produces_plus_minus(p: SmallQuaternion) -> bool {
    !p.0.to_string().contains("+-")
}

#[quickcheck]
fn rendering_is_zero_exactly_for_the_zero_quaternion(p: SmallQuaternion) -> bool {
    (p.0.to_string() == "0") == (p.0.coefficients() == [0.0; 4])
}
