//! Text conversions: decimal parsing and rendering, digit access, the binary
//! dump and a character-stream scanner.

use alloc::string::String;
use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use crate::arithmetic::divide::div_rem_assign_word;
use crate::words::WORD_BITS;
use crate::{Error, Result, Signed};

impl Signed {
    /// Parses an optional leading '-' followed by decimal digits.
    ///
    /// The digits are accumulated from the least significant one up, each scaled by
    /// a running power of ten. The empty string and a lone "-" parse as zero.
    pub fn from_decimal(text: &str) -> Result<Signed> {
        let ten = Signed::from(10);
        let mut value = Signed::zero();
        let mut power = Signed::one();

        for (i, byte) in text.bytes().enumerate().rev() {
            match byte {
                b'0'..=b'9' => {
                    let digit = byte - b'0';
                    if digit != 0 {
                        value += &(&power * &Signed::from(digit));
                    }
                    power *= &ten;
                }
                b'-' if i == 0 => value.negate(),
                _ => {
                    debug!("invalid character {:?} at {} in decimal", byte as char, i);
                    return Err(Error::InvalidFormat);
                }
            }
        }

        Ok(value)
    }

    /// Decimal digits of the magnitude, least significant first.
    fn magnitude_digits(&self) -> Vec<u8> {
        let mut magnitude = self.abs().0;
        let mut digits = Vec::new();
        loop {
            let digit = div_rem_assign_word(&mut magnitude, 10);
            digits.push(b'0' + digit as u8);
            if magnitude == [0] {
                break;
            }
        }
        digits
    }

    pub fn to_decimal(&self) -> String {
        let mut text = String::new();
        if self.is_negative() {
            text.push('-');
        }
        text.extend(self.magnitude_digits().iter().rev().map(|&digit| digit as char));
        text
    }

    /// The decimal digit at `index` of the magnitude, counting from the least significant.
    pub fn decimal_digit(&self, index: usize) -> Result<u8> {
        self.magnitude_digits()
            .get(index)
            .map(|&digit| digit - b'0')
            .ok_or(Error::DigitOutOfRange)
    }

    /// Bit dump of the words, for debugging.
    ///
    /// The sign, a '|', then the 31 magnitude bits of every word from the most
    /// significant word down, optionally separated by `delimiter`:
    /// ```text
    /// -2: 1|1111111111111111111111111111110
    /// ```
    pub fn binary_string(&self, delimiter: Option<char>) -> String {
        let mut dump = String::with_capacity(2 + self.0.len() * (WORD_BITS + 1));
        dump.push_str(if self.is_negative() { "1|" } else { "0|" });

        for (i, word) in self.0.iter().enumerate().rev() {
            for bit in (0..WORD_BITS).rev() {
                dump.push(if (word >> bit) & 1 == 1 { '1' } else { '0' });
            }
            if let (true, Some(delimiter)) = (i > 0, delimiter) {
                dump.push(delimiter);
            }
        }
        dump
    }

    /// Reads one value off a character stream.
    ///
    /// Skips ahead to the first '-' or digit, then takes it and the run of digits
    /// following it. A newline or the end of input ends the scan; if nothing was
    /// taken by then, the value is zero. The character ending the run is consumed.
    pub fn scan<I: IntoIterator<Item = char>>(input: I) -> Result<Signed> {
        let mut text = String::new();
        for c in input {
            if c == '\n' {
                break;
            }
            if text.is_empty() {
                if c == '-' || c.is_ascii_digit() {
                    text.push(c);
                }
            } else if c.is_ascii_digit() {
                text.push(c);
            } else {
                break;
            }
        }
        Signed::from_decimal(&text)
    }
}

impl FromStr for Signed {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Signed::from_decimal(text)
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits: String = self.magnitude_digits().iter().rev().map(|&digit| digit as char).collect();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}
