use crate::{Error, Result, Signed};

impl Signed {
    /// Exponentiation by squaring, $\text{self}^\text{exponent}$.
    ///
    /// Fails for negative exponents, there is no integral result.
    pub fn pow(&self, exponent: &Signed) -> Result<Signed> {
        if exponent.is_negative() {
            debug!("negative exponent ({} words)", exponent.0.len());
            return Err(Error::NegativeExponent);
        }

        let mut result = Signed::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();

        while !exponent.is_zero() {
            if !exponent.is_even() {
                result *= &base;
            }
            exponent >>= 1;
            if !exponent.is_zero() {
                base = &base * &base;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn small_powers() {
        let three = Signed::from(3);
        assert_eq!(three.pow(&Signed::zero()), Ok(Signed::one()));
        assert_eq!(three.pow(&Signed::one()), Ok(three.clone()));
        assert_eq!(three.pow(&Signed::from(40)), Ok(Signed::from(3i128.pow(40))));
        assert_eq!(Signed::from(-3).pow(&Signed::from(41)), Ok(Signed::from((-3i128).pow(41))));
        assert_eq!(Signed::from(-2).pow(&Signed::from(126)), Ok(Signed::from(1i128 << 126)));
        assert_eq!(Signed::zero().pow(&Signed::zero()), Ok(Signed::one()));
        assert!(Signed::zero().pow(&Signed::from(5)).unwrap().is_zero());
    }

    #[test]
    fn repeated_multiplication() {
        let mut rng = rng(61);
        for base in samples(&mut rng, 10, 200) {
            let mut expected = Signed::one();
            for e in 0..8 {
                assert_eq!(base.pow(&Signed::from(e)), Ok(expected.clone()));
                expected *= &base;
            }
        }
    }

    #[test]
    fn power_of_two_is_shift() {
        let two = Signed::from(2);
        for &n in &[31usize, 62, 100, 333] {
            assert_eq!(two.pow(&Signed::from(n)), Ok(Signed::one() << n));
        }
    }

    #[test]
    fn exponents_add() {
        let mut rng = rng(60);
        for _ in 0..10 {
            let base = random_signed(&mut rng, 64);
            let (m, n) = (Signed::from(rng.next_u32() % 20), Signed::from(rng.next_u32() % 20));
            let lhs = base.pow(&(&m + &n)).unwrap();
            let rhs = &base.pow(&m).unwrap() * &base.pow(&n).unwrap();
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn negative_exponent() {
        assert_eq!(Signed::from(2).pow(&Signed::from(-1)), Err(Error::NegativeExponent));
    }
}
