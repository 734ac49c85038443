use std::ops::{Add, BitAnd, BitOr, BitXor, Sub};

use crate::{error::Result, flag_set::FlagSet, operand::Operand};

// Operators return `Result` since the right-hand side may belong to another
// enumeration. `-` is the only non-commutative one.
macro_rules! flag_set_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<'a, 'b, R: Into<Operand<'b>>> $trait<R> for &'a FlagSet {
            type Output = Result<FlagSet>;

            fn $method(self, rhs: R) -> Self::Output {
                self.$op(rhs)
            }
        }

        impl<'b, R: Into<Operand<'b>>> $trait<R> for FlagSet {
            type Output = Result<FlagSet>;

            fn $method(self, rhs: R) -> Self::Output {
                self.$op(rhs)
            }
        }
    };
}

flag_set_op!(Add, add, union);
flag_set_op!(BitOr, bitor, union);
flag_set_op!(BitAnd, bitand, intersection);
flag_set_op!(BitXor, bitxor, symmetric_difference);
flag_set_op!(Sub, sub, difference);
