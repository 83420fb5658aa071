//! Word vectors, the representation underneath [`Signed`][crate::Signed].
//!
//! A value is a little-endian sequence of `i32` words. Only the low
//! [`WORD_BITS`] bits of a word are magnitude. Bit 31 is reserved: it is 0 in
//! every word except the most significant one, where it is the two's-complement
//! sign of the whole value. Reading the most significant word as a signed
//! 32-bit number, the value is $\sum_i w_i \cdot 2^{31 i}$.
//!
//! ```text
//!        -1: 1|1111111111111111111111111111111
//!  2^31 + 5: 0|0000000000000000000000000000001 0|0000000000000000000000000000101
//! ```
//!
//! Equivalently, the value is an infinite sequence of 31-bit digits, where all
//! digits past the most significant word repeat the *extension* (all zeros for
//! non-negative values, all ones for negative ones). The kernels lean on this
//! view whenever operands of different lengths meet.

use alloc::vec::Vec;
use core::cmp::Ordering;

use ref_cast::RefCast;

/// A word on the machine. [`Signed`][crate::Signed] is composed of many words.
pub type Word = i32;

/// Signed type with twice as many bits as [`Word`], for carries.
pub(crate) type DoubleWord = i64;

/// Number of magnitude bits per word.
pub const WORD_BITS: usize = 31;

/// The magnitude bits of a word.
pub(crate) const WORD_MASK: Word = 0x7fff_ffff;

/// The reserved bit, set only in the most significant word of a negative value.
pub(crate) const SIGN_BIT: Word = Word::MIN;

/// Borrowed view of a normalized little-endian word slice.
///
/// Like `[Word]`, this is unsized; obtain it via [`Words::new`] or
/// [`Signed::as_words`][crate::Signed::as_words].
#[derive(RefCast)]
#[repr(transparent)]
pub struct Words([Word]);

impl Words {
    pub fn new(words: &[Word]) -> &Self {
        Self::ref_cast(words)
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The most significant word; an empty slice reads as zero.
    pub fn top(&self) -> Word {
        self.0.last().copied().unwrap_or(0)
    }

    pub fn is_negative(&self) -> bool {
        self.top() < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    /// The 31-bit pattern of every implicit word above the top.
    pub fn extension(&self) -> Word {
        if self.is_negative() {
            WORD_MASK
        } else {
            0
        }
    }

    /// The 31 magnitude bits at `index`, past the end the sign extension.
    pub fn digit(&self, index: usize) -> Word {
        match self.0.get(index) {
            Some(&word) => word & WORD_MASK,
            None => self.extension(),
        }
    }

    /// Index + 1 of the most significant set bit, 0 for zero.
    ///
    /// Only meaningful for non-negative values.
    pub fn bit_length(&self) -> usize {
        debug_assert!(!self.is_negative());
        match self.len() {
            0 => 0,
            l => (l - 1) * WORD_BITS + (32 - self.top().leading_zeros() as usize),
        }
    }

    /// Total order on (normalized) signed values.
    ///
    /// Normalization guarantees that a longer word sequence carries more magnitude,
    /// so differing lengths are settled by the sign of the longer operand alone.
    pub fn compare(&self, other: &Self) -> Ordering {
        let l_self = self.len();
        let l_other = other.len();

        if l_self > l_other {
            return if self.is_negative() { Ordering::Less } else { Ordering::Greater };
        }
        if l_self < l_other {
            return if other.is_negative() { Ordering::Greater } else { Ordering::Less };
        }

        match (self.is_negative(), other.is_negative()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        // the top words compare as signed, the rest are plain 31-bit magnitudes
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => (),
                not_equal => return not_equal,
            }
        }
        Ordering::Equal
    }
}

/// Grows or shrinks `words` to exactly `n` words.
///
/// Growing sign-extends. Shrinking keeps a negative sign only if every discarded
/// word was part of the all-ones extension, otherwise the new top word is cleared
/// of its sign bit.
pub(crate) fn resize(words: &mut Vec<Word>, n: usize) {
    debug_assert!(n > 0);

    if words.is_empty() {
        words.push(0);
    }

    let l = words.len();
    let negative = Words::new(words).is_negative();

    if n > l {
        words[l - 1] &= WORD_MASK;
        words.resize(n, if negative { WORD_MASK } else { 0 });
        if negative {
            words[n - 1] |= SIGN_BIT;
        }
    } else if n < l {
        let survives = negative && words[n..].iter().all(|&word| word & WORD_MASK == WORD_MASK);
        words.truncate(n);
        words[n - 1] &= WORD_MASK;
        if survives {
            words[n - 1] |= SIGN_BIT;
        }
    }
}

/// Strips redundant most significant words (0, or -1 for negative values),
/// leaving at least one word.
pub(crate) fn normalize(words: &mut Vec<Word>) {
    if words.is_empty() {
        words.push(0);
        return;
    }

    let extension = Words::new(words).extension();
    let mut l = words.len();
    while l > 1 && words[l - 1] & WORD_MASK == extension {
        l -= 1;
    }
    resize(words, l);

    debug_assert!(is_normalized(words));
}

/// Stores the full new value of the top word, splitting off at most one extra word.
///
/// The caller guarantees `value` fits in 63 bits.
pub(crate) fn store_top(words: &mut Vec<Word>, value: DoubleWord) {
    let top = words.len() - 1;
    if value >= DoubleWord::from(Word::MIN) && value <= DoubleWord::from(Word::MAX) {
        words[top] = value as Word;
    } else {
        words[top] = (value & DoubleWord::from(WORD_MASK)) as Word;
        words.push((value >> WORD_BITS) as Word);
    }
}

/// Builds words from 31-bit digits and the sign of the extension above them.
pub(crate) fn assemble(mut digits: Vec<Word>, negative: bool) -> Vec<Word> {
    if digits.is_empty() {
        digits.push(0);
    }
    if negative {
        let top = digits.len() - 1;
        digits[top] |= SIGN_BIT;
    }
    normalize(&mut digits);
    digits
}

pub(crate) fn is_normalized(words: &[Word]) -> bool {
    match words.split_last() {
        None => false,
        Some((&top, lower)) => {
            lower.iter().all(|&word| word & SIGN_BIT == 0)
                && (lower.is_empty() || (top != 0 && top != -1))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const M: Word = WORD_MASK;

    #[test]
    fn normalize_strips_extension() {
        let mut w = vec![5, 0, 0];
        normalize(&mut w);
        assert_eq!(w, [5]);

        let mut w = vec![5, M, -1];
        normalize(&mut w);
        assert_eq!(w, [5 | SIGN_BIT]);

        let mut w = vec![0, 1];
        normalize(&mut w);
        assert_eq!(w, [0, 1]);

        let mut w = vec![M, -2];
        normalize(&mut w);
        assert_eq!(w, [M, -2]);

        let mut w = vec![];
        normalize(&mut w);
        assert_eq!(w, [0]);

        let mut w = vec![M, -1];
        normalize(&mut w);
        assert_eq!(w, [-1]);
    }

    #[test]
    fn normalize_is_idempotent() {
        for case in [vec![0], vec![-1], vec![7, 3], vec![0, 0, SIGN_BIT], vec![M, M, -5]] {
            let mut once = case.clone();
            normalize(&mut once);
            let mut twice = once.clone();
            normalize(&mut twice);
            assert_eq!(once, twice);
            assert!(is_normalized(&once));
        }
    }

    #[test]
    fn resize_grows_with_sign_extension() {
        let mut w = vec![-18];
        resize(&mut w, 3);
        assert_eq!(w, [-18 & M, M, -1]);

        let mut w = vec![42];
        resize(&mut w, 2);
        assert_eq!(w, [42, 0]);

        let mut w = vec![];
        resize(&mut w, 2);
        assert_eq!(w, [0, 0]);
    }

    #[test]
    fn resize_shrink_sign_survival() {
        // discarded words are all extension: the sign survives
        let mut w = vec![5, M, -1];
        resize(&mut w, 1);
        assert_eq!(w, [5 | SIGN_BIT]);

        // discarded words carry magnitude: the sign is dropped
        let mut w = vec![5, 3, -1];
        resize(&mut w, 1);
        assert_eq!(w, [5]);

        let mut w = vec![5, 3, 9];
        resize(&mut w, 2);
        assert_eq!(w, [5, 3]);
    }

    #[test]
    fn digits_and_extension() {
        let w = Words::new(&[3, -2]);
        assert!(w.is_negative());
        assert_eq!(w.digit(0), 3);
        assert_eq!(w.digit(1), -2 & M);
        assert_eq!(w.digit(7), M);

        let w = Words::new(&[3, 2]);
        assert_eq!(w.digit(7), 0);
    }

    #[test]
    fn bit_length() {
        assert_eq!(Words::new(&[0]).bit_length(), 0);
        assert_eq!(Words::new(&[1]).bit_length(), 1);
        assert_eq!(Words::new(&[M]).bit_length(), 31);
        assert_eq!(Words::new(&[0, 1]).bit_length(), 32);
        assert_eq!(Words::new(&[0, 0, 4]).bit_length(), 65);
    }

    #[test]
    fn compare() {
        use Ordering::*;
        let cmp = |a: &[Word], b: &[Word]| Words::new(a).compare(Words::new(b));

        assert_eq!(cmp(&[0, 1], &[M]), Greater);
        assert_eq!(cmp(&[0, -2], &[SIGN_BIT]), Less);
        assert_eq!(cmp(&[SIGN_BIT], &[0, -2]), Greater);
        assert_eq!(cmp(&[-1], &[0]), Less);
        assert_eq!(cmp(&[5, 3], &[6, 3]), Less);
        assert_eq!(cmp(&[5, -3], &[6, -4]), Greater);
        assert_eq!(cmp(&[5, -3], &[5, -3]), Equal);
    }
}
