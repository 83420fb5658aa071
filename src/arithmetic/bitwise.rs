use alloc::vec::Vec;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::Signed;
use crate::words::{self, Word, Words, WORD_MASK};

/// Bitwise complement, i.e. `-x - 1`. Never changes the length.
pub(crate) fn not(words: &mut Vec<Word>) {
    let top = words.len() - 1;
    for word in words[..top].iter_mut() {
        *word = !*word & WORD_MASK;
    }
    words[top] = !words[top];
    words::normalize(words);
}

/// Applies `op` digit-wise, on the infinite sign extensions of both operands.
///
/// Past `len`, every result digit equals `op` of the two extensions, which is
/// how the sign of the result is decided.
fn combine(a: &Words, b: &Words, len: usize, op: impl Fn(Word, Word) -> Word) -> Vec<Word> {
    let digits = (0..len).map(|i| op(a.digit(i), b.digit(i))).collect();
    let negative = op(a.extension(), b.extension()) == WORD_MASK;
    words::assemble(digits, negative)
}

/// The shorter operand first.
fn by_length<'a>(a: &'a Words, b: &'a Words) -> (&'a Words, &'a Words) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

pub(crate) fn and(a: &Words, b: &Words) -> Vec<Word> {
    let (shorter, longer) = by_length(a, b);
    // a non-negative shorter operand zeroes everything above it
    let len = if shorter.is_negative() { longer.len() } else { shorter.len() };
    combine(a, b, len, |x, y| x & y)
}

pub(crate) fn or(a: &Words, b: &Words) -> Vec<Word> {
    let (shorter, longer) = by_length(a, b);
    // a negative shorter operand saturates everything above it
    let len = if shorter.is_negative() { shorter.len() } else { longer.len() };
    combine(a, b, len, |x, y| x | y)
}

impl Not for &Signed {
    type Output = Signed;

    fn not(self) -> Self::Output {
        let mut complement = self.clone();
        not(&mut complement.0);
        complement
    }
}

impl Not for Signed {
    type Output = Signed;

    fn not(mut self) -> Self::Output {
        not(&mut self.0);
        self
    }
}

impl<'a, 'b> BitAnd<&'b Signed> for &'a Signed {
    type Output = Signed;

    fn bitand(self, other: &'b Signed) -> Self::Output {
        Signed(and(self.as_words(), other.as_words()))
    }
}

impl BitAndAssign<&Signed> for Signed {
    fn bitand_assign(&mut self, other: &Signed) {
        self.0 = and(self.as_words(), other.as_words());
    }
}

impl<'a, 'b> BitOr<&'b Signed> for &'a Signed {
    type Output = Signed;

    fn bitor(self, other: &'b Signed) -> Self::Output {
        Signed(or(self.as_words(), other.as_words()))
    }
}

impl BitOrAssign<&Signed> for Signed {
    fn bitor_assign(&mut self, other: &Signed) {
        self.0 = or(self.as_words(), other.as_words());
    }
}
