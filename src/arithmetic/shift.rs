use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::Signed;
use crate::words::{self, DoubleWord, Word, WORD_BITS, WORD_MASK};

impl ShlAssign<usize> for Signed {
    /// Multiplication by $2^\text{bits}$, growing as needed.
    ///
    /// Note that "left" means "higher number".
    fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }

        let n_words = bits / WORD_BITS;
        let n_bits = bits % WORD_BITS;
        let data = &mut self.0;

        // shift up sub-word amount of bits
        if n_bits > 0 {
            let top = data.len() - 1;
            let mut carry = 0;
            for word in data[..top].iter_mut() {
                let new_carry = *word >> (WORD_BITS - n_bits);
                *word = (*word << n_bits) & WORD_MASK | carry;
                carry = new_carry;
            }
            let value = (DoubleWord::from(data[top]) << n_bits) | DoubleWord::from(carry);
            words::store_top(data, value);
        }

        // shift up by n_words
        let l = data.len();
        data.resize(l + n_words, 0);
        data.rotate_right(n_words);

        words::normalize(data);
    }
}

impl ShrAssign<usize> for Signed {
    /// Floor division by $2^\text{bits}$: the sign is kept, negative values round towards -∞.
    ///
    /// Note that "right" means "lower number".
    fn shr_assign(&mut self, bits: usize) {
        let n_words = bits / WORD_BITS;
        let n_bits = bits % WORD_BITS;
        let negative = self.is_negative();
        let data = &mut self.0;

        if n_words >= data.len() {
            let extension: Word = if negative { -1 } else { 0 };
            data.clear();
            data.push(extension);
            return;
        }

        // shift down by n_words
        data.drain(..n_words);

        // shift down sub-word amount of bits
        if n_bits > 0 {
            let top = data.len() - 1;
            for i in 0..top {
                let borrow = (data[i + 1] << (WORD_BITS - n_bits)) & WORD_MASK;
                data[i] = (data[i] >> n_bits) | borrow;
            }
            // arithmetic shift keeps the sign
            data[top] >>= n_bits;
        }

        words::normalize(data);
    }
}

impl Shl<usize> for &Signed {
    type Output = Signed;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result <<= bits;
        result
    }
}

impl Shl<usize> for Signed {
    type Output = Signed;

    #[inline]
    fn shl(mut self, bits: usize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl Shr<usize> for &Signed {
    type Output = Signed;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result >>= bits;
        result
    }
}

impl Shr<usize> for Signed {
    type Output = Signed;

    #[inline]
    fn shr(mut self, bits: usize) -> Self::Output {
        self >>= bits;
        self
    }
}
