use alloc::vec::Vec;
use core::ops::{Neg, Sub, SubAssign};

use crate::Signed;
use crate::words::{Word, WORD_MASK};
use super::add::{add_assign_words, add_word_at};

/// Two's-complement negation in place: complement every bit, add one.
///
/// May grow by one word (the negation of the most negative value of a length).
pub(crate) fn negate(words: &mut Vec<Word>) {
    let top = words.len() - 1;
    for word in words[..top].iter_mut() {
        *word = !*word & WORD_MASK;
    }
    words[top] = !words[top];
    add_word_at(words, 1, 0);
}

impl Signed {
    pub fn negate(&mut self) {
        negate(&mut self.0);
    }

    pub fn abs(&self) -> Signed {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }
}

impl Neg for &Signed {
    type Output = Signed;

    fn neg(self) -> Self::Output {
        let mut negated = self.clone();
        negated.negate();
        negated
    }
}

impl Neg for Signed {
    type Output = Signed;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

// Subtraction is addition of the negated subtrahend.

impl SubAssign<&Signed> for Signed {
    fn sub_assign(&mut self, subtrahend: &Signed) {
        let negated = -subtrahend;
        add_assign_words(&mut self.0, &negated.0);
    }
}

impl<'a, 'b> Sub<&'b Signed> for &'a Signed {
    type Output = Signed;

    fn sub(self, subtrahend: &'b Signed) -> Self::Output {
        let mut difference = self.clone();
        difference -= subtrahend;
        difference
    }
}
