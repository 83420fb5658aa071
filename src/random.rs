use alloc::vec::Vec;

use rand_core::RngCore;

use crate::Signed;
use crate::words::{Word, WORD_BITS, WORD_MASK};

/// Bit budget used where no other is given.
pub const DEFAULT_RANDOM_BITS: usize = 1000;

impl Signed {
    /// Non-negative random value of at most `max_bits` bits.
    ///
    /// The bit length is drawn uniformly from `1..=max_bits` first, then that
    /// many bits are filled from `rng`. Hence small values are far more likely
    /// than under a uniform draw from $[0, 2^\text{max\_bits})$.
    pub fn random(mut rng: impl RngCore, max_bits: usize) -> Signed {
        if max_bits == 0 {
            return Signed::zero();
        }

        let bits = (rng.next_u64() % max_bits as u64) as usize + 1;
        let n_words = (bits + WORD_BITS - 1) / WORD_BITS;

        let mut words: Vec<Word> = (0..n_words)
            .map(|_| rng.next_u32() as Word & WORD_MASK)
            .collect();

        let remaining = bits % WORD_BITS;
        if remaining > 0 {
            if let Some(top) = words.last_mut() {
                *top &= (1 << remaining) - 1;
            }
        }

        debug!("random value of {} bits in {} words", bits, n_words);
        Signed::from_words(words)
    }
}
