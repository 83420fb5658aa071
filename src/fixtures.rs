//! Shared test helpers: deterministic randomness and edge values.

use alloc::vec::Vec;

use rand_chacha::ChaCha8Rng;
pub use rand_core::RngCore;
use rand_core::{Error, SeedableRng};

use crate::Signed;

/// Not random at all, every draw returns the next integer.
pub struct CountingRng(pub u64);

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.0;
        self.0 = self.0.wrapping_add(1);
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_u32() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random bit length in 0..=124 and random sign, so sums and differences stay in range.
pub fn random_i128(rng: &mut impl RngCore) -> i128 {
    let bits = rng.next_u32() % 125;
    if bits == 0 {
        return 0;
    }
    let full = (u128::from(rng.next_u64()) << 64) | u128::from(rng.next_u64());
    let magnitude = (full >> (128 - bits)) as i128;
    if rng.next_u32() & 1 == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// [`Signed::random`], with a random sign.
pub fn random_signed(rng: &mut impl RngCore, max_bits: usize) -> Signed {
    let magnitude = Signed::random(&mut *rng, max_bits);
    if rng.next_u32() & 1 == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// Values at word and sign boundaries.
pub fn edge_values() -> Vec<Signed> {
    let mut values: Vec<Signed> = [
        0,
        1,
        -1,
        i128::from(i32::MAX),
        i128::from(i32::MIN),
        1 << 31,
        -(1 << 31) - 1,
        1 << 62,
        -(1 << 62),
        i128::from(i64::MIN),
        i128::from(u64::MAX),
        i128::MAX,
        i128::MIN,
    ]
    .iter()
    .map(|&n| Signed::from(n))
    .collect();
    values.push(Signed::from(u128::MAX));
    values
}

/// The edge values, followed by `count` random ones.
pub fn samples(rng: &mut impl RngCore, count: usize, max_bits: usize) -> Vec<Signed> {
    let mut values = edge_values();
    values.extend((0..count).map(|_| random_signed(&mut *rng, max_bits)));
    values
}

mod test {
    use super::*;

    #[test]
    fn counting_rng_draws_in_sequence() {
        // bit length 4 % 10 + 1 = 5, then the word 5 masked to 5 bits
        assert_eq!(Signed::random(CountingRng(4), 10), Signed::from(5));
        // bit length 1, then the word 41 masked to 1 bit
        assert_eq!(Signed::random(CountingRng(40), 10), Signed::one());
    }
}
