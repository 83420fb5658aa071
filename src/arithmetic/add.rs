use alloc::vec::Vec;
use core::ops::{Add, AddAssign};

use crate::Signed;
use crate::words::{self, DoubleWord, Word, WORD_BITS, WORD_MASK};

/// Add with carry, for all but the top word:
/// stores the low 31 bits, keeps the rest in the accumulator.
#[inline]
fn adc(a: Word, b: Word, acc: &mut DoubleWord) -> Word {
    *acc += DoubleWord::from(a);
    *acc += DoubleWord::from(b);
    let lo = (*acc & DoubleWord::from(WORD_MASK)) as Word;
    *acc >>= WORD_BITS;
    lo
}

/// words += word · 2^(31·index)
///
/// `word` is a signed quantity. The carry stops propagating as soon as it
/// collapses to zero; only the top word can grow the sequence, by one word.
pub(crate) fn add_word_at(words: &mut Vec<Word>, word: Word, index: usize) {
    if words.len() <= index {
        words::resize(words, index + 1);
    }
    let top = words.len() - 1;

    let mut carry = DoubleWord::from(word);
    let mut i = index;
    while i < top && carry != 0 {
        words[i] = adc(words[i], 0, &mut carry);
        i += 1;
    }

    if carry != 0 {
        let sum = DoubleWord::from(words[top]) + carry;
        words::store_top(words, sum);
    }

    words::normalize(words);
}

/// Two's-complement addition of word slices: `acc += addend`.
///
/// The addend's words are folded into the accumulator with a single ripple
/// carry; its top word takes part as a signed quantity. `acc` is sign-extended
/// first if it is the shorter one.
pub(crate) fn add_assign_words(acc: &mut Vec<Word>, addend: &[Word]) {
    if acc.len() < addend.len() {
        words::resize(acc, addend.len());
    }
    let top = acc.len() - 1;

    let (lower, upper) = addend.split_at(addend.len().min(top));
    let mut carry = DoubleWord::default();

    for (a, &b) in acc[..lower.len()].iter_mut().zip(lower) {
        *a = adc(*a, b, &mut carry);
    }

    let mut i = lower.len();
    while i < top && carry != 0 {
        acc[i] = adc(acc[i], 0, &mut carry);
        i += 1;
    }

    // only non-empty if addend and accumulator have the same length
    let pending = carry + upper.first().map_or(0, |&b| DoubleWord::from(b));
    if pending != 0 {
        let sum = DoubleWord::from(acc[top]) + pending;
        words::store_top(acc, sum);
    }

    words::normalize(acc);
}

impl Signed {
    pub fn increment(&mut self) {
        add_word_at(&mut self.0, 1, 0);
    }

    pub fn decrement(&mut self) {
        add_word_at(&mut self.0, -1, 0);
    }
}

impl AddAssign<&Signed> for Signed {
    fn add_assign(&mut self, summand: &Signed) {
        add_assign_words(&mut self.0, &summand.0);
    }
}

impl<'a, 'b> Add<&'b Signed> for &'a Signed {
    type Output = Signed;

    /// The longer operand is the accumulator.
    fn add(self, summand: &'b Signed) -> Self::Output {
        let (longer, shorter) = if self.0.len() >= summand.0.len() {
            (self, summand)
        } else {
            (summand, self)
        };

        let mut sum = longer.clone();
        add_assign_words(&mut sum.0, &shorter.0);
        sum
    }
}
