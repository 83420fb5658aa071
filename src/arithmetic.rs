//! Arithmetic on [`Signed`][crate::Signed].
//!
//! Each kernel is a free function on word vectors (`&mut Vec<Word>` for the
//! accumulator, `&[Word]` or [`Words`][crate::Words] for operands) plus the
//! operator implementations on `&Signed`. The owned/borrowed operand variants
//! are forwarded in [`impls`].
//!
//! Every kernel ends with its output normalized.
//!
//! - addition: ripple carry in a 64-bit accumulator, at most one word of growth
//! - subtraction: addition of the two's-complement negation
//! - multiplication: Karatsuba, with a direct single-word base case
//! - division: restoring binary long division (plus a single-word short division)
//! - NOT/AND/OR and arithmetic shifts, on the infinite sign extension
//! - exponentiation: square-and-multiply

pub(crate) mod add;
pub(crate) mod bitwise;
pub(crate) mod divide;
mod impls;
pub(crate) mod multiply;
mod power;
pub(crate) mod shift;
pub(crate) mod subtract;
