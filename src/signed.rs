use alloc::vec;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::words::{self, Word, Words};

mod trait_implementations;

/// Arbitrary-precision signed integer, in two's complement.
///
/// Internal representation is little-endian [`Word`]s, see [`crate::words`]
/// for the layout. The word sequence is always *normalized*: it is non-empty,
/// and no redundant most significant word (0, or -1 for negative values) is
/// kept. Hence two values are equal if and only if their words are.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Signed(pub(crate) Vec<Word>);

// c'tors and such
impl Signed {
    pub fn zero() -> Self {
        Self(vec![0])
    }

    pub fn one() -> Self {
        Self(vec![1])
    }

    /// Takes ownership of words that satisfy the per-word invariant, normalizing them.
    pub(crate) fn from_words(mut words: Vec<Word>) -> Self {
        words::normalize(&mut words);
        Self(words)
    }

    /// Little-endian words, most significant word last.
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    pub fn as_words(&self) -> &Words {
        Words::new(&self.0)
    }
}

/// Observers
impl Signed {
    pub fn is_negative(&self) -> bool {
        self.as_words().is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    pub fn is_one(&self) -> bool {
        self.0 == [1]
    }

    pub(crate) fn is_minus_one(&self) -> bool {
        self.0 == [-1]
    }

    pub fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    /// Number of significant bits of the magnitude, 0 for zero.
    pub fn bits(&self) -> usize {
        if self.is_negative() {
            self.abs().as_words().bit_length()
        } else {
            self.as_words().bit_length()
        }
    }
}

impl Zeroize for Signed {
    /// Wipes the words, leaving a (normalized) zero.
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0.push(0);
    }
}
