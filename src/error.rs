use core::fmt;

/// Everything that can go wrong in the engine.
///
/// Allocation failure is not in here; like everywhere else in Rust, it aborts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The divisor is zero.
    DivisionByZero,
    /// A character is neither a decimal digit nor a leading minus.
    InvalidFormat,
    /// The value does not fit the requested native integer type.
    ConversionOverflow,
    /// Exponentiation was asked for a negative exponent.
    NegativeExponent,
    /// Decimal digit index past the most significant digit.
    DigitOutOfRange,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::DivisionByZero => "division by zero",
            Error::InvalidFormat => "invalid decimal digits",
            Error::ConversionOverflow => "value does not fit the target integer type",
            Error::NegativeExponent => "exponent must be non-negative",
            Error::DigitOutOfRange => "decimal digit index out of range",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
