use alloc::vec::Vec;
use core::{cmp::Ordering, convert::TryFrom, fmt};

use super::Signed;
use crate::words::{Word, WORD_BITS, WORD_MASK};
use crate::{Error, Result};

impl Default for Signed {
    fn default() -> Self {
        Self::zero()
    }
}

// Since we store little-endian with the sign in the last word, comparison must
// start at the last word and treat it as signed, which the derived ordering on
// `Vec` would not do.
impl Ord for Signed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_words().compare(other.as_words())
    }
}

impl PartialOrd for Signed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signed")
            .field("value", &format_args!("{}", self))
            .field("words", &format_args!("{:X?}", self.0))
            .finish()
    }
}

//
// From native integers
//

impl Signed {
    /// Peels off 31 bits at a time until the rest fits a signed top word.
    fn from_i128(mut n: i128) -> Self {
        let mut words = Vec::with_capacity(5);
        while Word::try_from(n).is_err() {
            words.push((n & i128::from(WORD_MASK)) as Word);
            n >>= WORD_BITS;
        }
        words.push(n as Word);
        Self(words)
    }

    fn from_u128(mut n: u128) -> Self {
        let mut words = Vec::with_capacity(5);
        while n > WORD_MASK as u128 {
            words.push((n & WORD_MASK as u128) as Word);
            n >>= WORD_BITS;
        }
        words.push(n as Word);
        Self(words)
    }

    /// `None` if more than 128 bits are needed.
    fn to_i128(&self) -> Option<i128> {
        let (&top, lower) = self.0.split_last()?;
        if lower.len() > 4 {
            return None;
        }
        let low = lower
            .iter()
            .rev()
            .fold(0i128, |acc, &word| (acc << WORD_BITS) | i128::from(word));
        i128::from(top)
            .checked_mul(1i128 << (WORD_BITS * lower.len()))?
            .checked_add(low)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Signed {
            fn from(n: $t) -> Self {
                Self::from_i128(n as i128)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Signed {
            fn from(n: $t) -> Self {
                Self::from_u128(n as u128)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

//
// Back to native integers
//

macro_rules! impl_try_from_signed {
    ($($t:ty),*) => {
        $(impl TryFrom<&Signed> for $t {
            type Error = Error;
            /// Fails if the value does not fit.
            fn try_from(value: &Signed) -> Result<Self> {
                value
                    .to_i128()
                    .and_then(|n| <$t>::try_from(n).ok())
                    .ok_or_else(|| {
                        debug!("{} words do not fit {}", value.0.len(), stringify!($t));
                        Error::ConversionOverflow
                    })
            }
        }

        impl TryFrom<Signed> for $t {
            type Error = Error;
            fn try_from(value: Signed) -> Result<Self> {
                <$t>::try_from(&value)
            }
        })*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
