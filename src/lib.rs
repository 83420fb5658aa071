#![cfg_attr(not(test), no_std)]
//! Arbitrary-precision signed integers in two's complement.
//!
//! A [`Signed`] is a little-endian vector of `i32` words holding 31 bits of
//! magnitude each; the sign lives in the reserved top bit of the most
//! significant word (see [`words`] for the details). Values are kept
//! normalized, so equality is equality of words.
//!
//! ```
//! use bigsigned::Signed;
//!
//! let x: Signed = "-37650129374".parse().unwrap();
//! assert_eq!(x.words(), &[1_004_576_290, -18]);
//!
//! let y = &(&x * &x) / &Signed::from(2);
//! assert_eq!(y.to_string(), "708766120939468815938");
//! assert_eq!(x.pow(&Signed::from(2)).unwrap() >> 1, y);
//! ```
//!
//! Arithmetic operators are implemented for all owned/borrowed operand
//! combinations. Like the native integer types, `/` and `%` panic on a zero
//! divisor; [`Signed::div_rem`] is the fallible alternative.
//!
//! There is no global random source: [`Signed::random`] draws from the
//! [`RngCore`][rand_core::RngCore] it is given.

extern crate alloc;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

delog::generate_macros!();

mod arithmetic;
mod decimal;
mod error;
pub use error::{Error, Result};
mod random;
pub use random::DEFAULT_RANDOM_BITS;
mod signed;
pub use signed::Signed;
pub mod words;
pub use words::{Word, Words, WORD_BITS};

#[cfg(test)]
mod fixtures;
