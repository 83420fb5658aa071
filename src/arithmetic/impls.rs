//! Owned operand variants, forwarded to the `&Signed` implementations.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, DivAssign, Mul, MulAssign,
    Rem, RemAssign, Sub, SubAssign,
};

use crate::Signed;

macro_rules! forward_binop {
    ($($Op:ident $op:ident $OpAssign:ident $op_assign:ident;)*) => {$(
        impl<'a> $Op<&'a Signed> for Signed {
            type Output = Signed;

            #[inline]
            fn $op(mut self, other: &'a Signed) -> Signed {
                self.$op_assign(other);
                self
            }
        }

        impl<'a> $Op<Signed> for &'a Signed {
            type Output = Signed;

            #[inline]
            fn $op(self, other: Signed) -> Signed {
                self.$op(&other)
            }
        }

        impl $Op<Signed> for Signed {
            type Output = Signed;

            #[inline]
            fn $op(mut self, other: Signed) -> Signed {
                self.$op_assign(&other);
                self
            }
        }

        impl $OpAssign<Signed> for Signed {
            #[inline]
            fn $op_assign(&mut self, other: Signed) {
                self.$op_assign(&other);
            }
        }
    )*};
}

forward_binop! {
    Add add AddAssign add_assign;
    Sub sub SubAssign sub_assign;
    Mul mul MulAssign mul_assign;
    Div div DivAssign div_assign;
    Rem rem RemAssign rem_assign;
    BitAnd bitand BitAndAssign bitand_assign;
    BitOr bitor BitOrAssign bitor_assign;
}

#[cfg(test)]
mod test {
    use crate::Signed;

    /// Assert that an op works for all val/ref combinations
    macro_rules! assert_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {
            assert_eq!((&$left) $op (&$right), $expected);
            assert_eq!((&$left) $op $right.clone(), $expected);
            assert_eq!($left.clone() $op (&$right), $expected);
            assert_eq!($left.clone() $op $right.clone(), $expected);
        };
    }

    /// Assert that an assign-op works for all val/ref combinations
    macro_rules! assert_assign_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {{
            let mut left = $left.clone();
            assert_eq!({ left $op &$right; left }, $expected);

            let mut left = $left.clone();
            assert_eq!({ left $op $right.clone(); left }, $expected);
        }};
    }

    const PAIRS: &[(i128, i128)] = &[
        (0, 1),
        (1, -1),
        (-1, -1),
        (12345, -678),
        (1 << 40, 3),
        (-(1 << 61), (1 << 31) - 1),
        (-(1 << 90) + 7, -(1 << 33)),
    ];

    #[test]
    fn all_combinations() {
        for &(a, b) in PAIRS {
            let (x, y) = (Signed::from(a), Signed::from(b));

            assert_op!(x + y == Signed::from(a + b));
            assert_op!(x - y == Signed::from(a - b));
            assert_op!(x * y == Signed::from(a * b));
            assert_op!(x / y == Signed::from(a / b));
            assert_op!(x % y == Signed::from(a % b));
            assert_op!(x & y == Signed::from(a & b));
            assert_op!(x | y == Signed::from(a | b));

            assert_assign_op!(x += y == Signed::from(a + b));
            assert_assign_op!(x -= y == Signed::from(a - b));
            assert_assign_op!(x *= y == Signed::from(a * b));
            assert_assign_op!(x /= y == Signed::from(a / b));
            assert_assign_op!(x %= y == Signed::from(a % b));
            assert_assign_op!(x &= y == Signed::from(a & b));
            assert_assign_op!(x |= y == Signed::from(a | b));
        }
    }
}
