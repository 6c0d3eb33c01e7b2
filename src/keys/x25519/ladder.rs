//! The Montgomery ladder: x-only scalar multiplication on Curve25519.

use super::field::FieldElement;

/// Computes the x-coordinate of `[k]·P` where `P` has affine x-coordinate
/// `x1`, using the x-only Montgomery ladder with a constant iteration
/// count and branch-free conditional swaps.
///
/// `scalar` must already be clamped (see [`super::codec::clamp`]); the
/// ladder walks its bits directly and does not validate them.
pub(crate) fn scalarmult(scalar: &[u8; 32], x1: FieldElement) -> FieldElement {
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;
    let mut swap: u32 = 0;

    for t in (0..=254).rev() {
        let kt = ((scalar[t / 8] >> (t % 8)) & 1) as u32;

        swap ^= kt;
        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = kt;

        let a = x2 + z2;
        let aa = a.square();
        let b = x2 - z2;
        let bb = b.square();
        let e = aa - bb;
        let c = x3 + z3;
        let d = x3 - z3;
        let da = d * a;
        let cb = c * b;

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;
        z2 = e * (aa + e.mul_a24());
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    x2 * z2.invert()
}
