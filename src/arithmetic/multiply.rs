use core::ops::{Mul, MulAssign};

use crate::Signed;
use crate::words::{DoubleWord, WORD_BITS};

/// Splits into (low, high), with `x = high · 2^(31·k) + low`.
///
/// The low part is the `k` least significant words, hence non-negative; the
/// high part carries the sign. If `x` has at most `k` words, it is all low part.
fn split(x: &Signed, k: usize) -> (Signed, Signed) {
    if k >= x.0.len() {
        return (x.clone(), Signed::zero());
    }
    let (low, high) = x.0.split_at(k);
    (Signed::from_words(low.to_vec()), Signed::from_words(high.to_vec()))
}

/// Karatsuba multiplication on signed values.
///
/// With `a = w · B + x`, `b = y · B + z` and `B = 2^(31·k)`:
/// ```text
/// a · b = p · B² + (r - p - q) · B + q,   p = w·y,  q = x·z,  r = (w + x)(y + z)
/// ```
/// which costs three half-size products instead of four.
pub(crate) fn mul(a: &Signed, b: &Signed) -> Signed {
    if a.is_zero() || b.is_zero() {
        return Signed::zero();
    }
    if a.is_minus_one() {
        return -b;
    }
    if b.is_minus_one() {
        return -a;
    }

    if let ([a], [b]) = (a.words(), b.words()) {
        // up to 2^62, which takes three words
        return Signed::from(DoubleWord::from(*a) * DoubleWord::from(*b));
    }

    let k = (a.0.len().max(b.0.len()) + 1) / 2;
    let shift = WORD_BITS * k;

    let (x, w) = split(a, k);
    let (z, y) = split(b, k);

    let p = mul(&w, &y);
    let q = mul(&x, &z);
    let r = mul(&(&w + &x), &(&y + &z));

    let mut middle = &(&r - &p) - &q;
    middle <<= shift;

    let mut product = p;
    product <<= 2 * shift;
    product += &middle;
    product += &q;
    product
}

impl<'a, 'b> Mul<&'b Signed> for &'a Signed {
    type Output = Signed;

    fn mul(self, factor: &'b Signed) -> Self::Output {
        mul(self, factor)
    }
}

impl MulAssign<&Signed> for Signed {
    fn mul_assign(&mut self, factor: &Signed) {
        *self = mul(self, factor);
    }
}
