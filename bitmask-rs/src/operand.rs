use std::fmt;

use crate::{
    error::{FlagSetError, Result},
    flag_enumeration::Flag,
    flag_set::FlagSet,
};

/// Right-hand side of a flag set operation.
///
/// Only [`Operand::Set`] and [`Operand::Flag`] are accepted by the set algebra.
/// The remaining variants exist so that callers holding a plain number, string
/// or boolean get a [`FlagSetError::UnsupportedOperand`](crate::FlagSetError)
/// instead of a silent coercion.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Set(&'a FlagSet),
    Flag(Flag),
    Int(i128),
    Text(&'a str),
    Bool(bool),
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Set(set) => write!(f, "flag set {set:?}"),
            Operand::Flag(flag) => write!(f, "flag {flag:?}"),
            Operand::Int(value) => write!(f, "integer {value}"),
            Operand::Text(text) => write!(f, "string {text:?}"),
            Operand::Bool(value) => write!(f, "boolean {value}"),
        }
    }
}

impl<'a> From<&'a FlagSet> for Operand<'a> {
    fn from(set: &'a FlagSet) -> Self {
        Operand::Set(set)
    }
}

impl From<Flag> for Operand<'_> {
    fn from(flag: Flag) -> Self {
        Operand::Flag(flag)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(text)
    }
}

impl From<bool> for Operand<'_> {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

macro_rules! int_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand<'_> {
                fn from(value: $ty) -> Self {
                    Operand::Int(value as i128)
                }
            }
        )*
    };
}

int_operand!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

/// Input to [`FlagSet::set_value`].
///
/// Raw assignment only accepts non-negative integers that fit the `u64` domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue {
    Int(i128),
    Float(f64),
    Bool(bool),
}

impl RawValue {
    pub(crate) fn to_bits(self) -> Result<u64> {
        match self {
            RawValue::Int(value) => u64::try_from(value).map_err(|_| {
                FlagSetError::InvalidValue(format!(
                    "value must be a non-negative integer below 2^64 (got {value})"
                ))
            }),
            RawValue::Float(value) => Err(FlagSetError::InvalidValue(format!(
                "value must be an integer (got float {value})"
            ))),
            RawValue::Bool(value) => Err(FlagSetError::InvalidValue(format!(
                "value must be an integer (got boolean {value})"
            ))),
        }
    }
}

macro_rules! int_raw_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::Int(value as i128)
                }
            }
        )*
    };
}

int_raw_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64, isize, usize);

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(value as f64)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}
