use alloc::vec::Vec;
use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::{Error, Result, Signed};
use crate::words::{self, DoubleWord, Word, WORD_BITS};

/// Divides non-negative `words` in-place by the positive `divisor`, returning the remainder.
///
/// This is schoolbook short division, running down the words while carrying
/// the remainder along; `remainder · 2^31 + word` always fits a [`DoubleWord`].
pub(crate) fn div_rem_assign_word(words: &mut Vec<Word>, divisor: Word) -> Word {
    debug_assert!(divisor > 0);
    debug_assert!(!words::Words::new(words).is_negative());

    let divisor = DoubleWord::from(divisor);
    let mut remainder = DoubleWord::default();

    for word in words.iter_mut().rev() {
        let x = (remainder << WORD_BITS) | DoubleWord::from(*word);
        *word = (x / divisor) as Word;
        remainder = x % divisor;
    }

    words::normalize(words);
    remainder as Word
}

impl Signed {
    /// Truncating division with remainder.
    ///
    /// Returns `(q, r)` with `self = q · divisor + r`, where `|r| < |divisor|` and `r`
    /// takes the sign of `self` (as for the native integer types).
    ///
    /// Restoring binary long division on the magnitudes: the divisor is aligned with
    /// the most significant bit of the dividend, then walked back down one bit at a
    /// time, subtracting wherever it fits.
    pub fn div_rem(&self, divisor: &Signed) -> Result<(Signed, Signed)> {
        if divisor.is_zero() {
            debug!("division of {}-word value by zero", self.0.len());
            return Err(Error::DivisionByZero);
        }

        let mut remainder = self.abs();
        let mut divisor_shifted = divisor.abs();

        if remainder < divisor_shifted {
            return Ok((Signed::zero(), self.clone()));
        }

        let shift = remainder.bits() - divisor_shifted.bits();
        divisor_shifted <<= shift;

        let mut quotient = Signed::zero();
        for _ in 0..=shift {
            quotient <<= 1;
            if divisor_shifted <= remainder {
                remainder -= &divisor_shifted;
                // just shifted, so bit 0 is free
                quotient.0[0] |= 1;
            }
            divisor_shifted >>= 1;
        }

        if self.is_negative() != divisor.is_negative() {
            quotient.negate();
        }
        if self.is_negative() {
            remainder.negate();
        }

        Ok((quotient, remainder))
    }
}

fn div_rem_or_panic(dividend: &Signed, divisor: &Signed) -> (Signed, Signed) {
    match dividend.div_rem(divisor) {
        Ok(qr) => qr,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

//
// Implement Div
//

impl<'a, 'b> Div<&'b Signed> for &'a Signed {
    type Output = Signed;

    /// Panics on a zero divisor, see [`Signed::div_rem`] for the fallible version.
    fn div(self, divisor: &'b Signed) -> Self::Output {
        div_rem_or_panic(self, divisor).0
    }
}

impl DivAssign<&Signed> for Signed {
    fn div_assign(&mut self, divisor: &Signed) {
        *self = div_rem_or_panic(self, divisor).0;
    }
}

//
// Implement Rem
//

impl<'a, 'b> Rem<&'b Signed> for &'a Signed {
    type Output = Signed;

    /// Panics on a zero divisor, see [`Signed::div_rem`] for the fallible version.
    fn rem(self, divisor: &'b Signed) -> Self::Output {
        div_rem_or_panic(self, divisor).1
    }
}

impl RemAssign<&Signed> for Signed {
    fn rem_assign(&mut self, divisor: &Signed) {
        *self = div_rem_or_panic(self, divisor).1;
    }
}
