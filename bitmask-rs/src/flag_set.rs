use std::hash::{Hash, Hasher};

use crate::{
    binding::Binding,
    error::{FlagSetError, Result},
    flag_enumeration::{Flag, FlagEnum, FlagEnumeration},
    iter::{Iter, Members},
    operand::{Operand, RawValue},
};

/// The bit operations a flag set can be combined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitOp {
    Union,
    Intersection,
    SymmetricDifference,
    Difference,
}

impl BitOp {
    fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            BitOp::Union => a | b,
            BitOp::Intersection => a & b,
            BitOp::SymmetricDifference => a ^ b,
            BitOp::Difference => a & !b,
        }
    }
}

/// A set of named flags stored as a single integer.
///
/// A `FlagSet` is scoped to one [`FlagEnumeration`]. The enumeration is either
/// given up front ([`FlagSet::of`], [`FlagSet::bound`], or constructing from
/// flags) or picked up from the first flag or flag set the set is combined with.
/// Once bound, mixing in flags of any other enumeration fails with
/// [`FlagSetError::TypeConflict`].
///
/// ```rust
/// use bitmask_rs::{flag_enum, flag_set, FlagSet};
///
/// flag_enum! {
///     pub enum Desc {
///         SMALL = 1,
///         ROUND = 1 << 1,
///         FUNKY = 1 << 2,
///     }
/// }
///
/// let mut set = FlagSet::new();
/// set.add(Desc::FUNKY).unwrap();
/// set.add(Desc::SMALL).unwrap();
///
/// assert!(set.contains(Desc::SMALL).unwrap());
/// assert_eq!(set.to_string(), "SMALL|FUNKY");
/// assert_eq!((&set - Desc::SMALL).unwrap(), flag_set![Desc::FUNKY]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FlagSet {
    binding: Binding,
    value: u64,
}

impl FlagSet {
    /// Creates an empty, unbound flag set.
    pub const fn new() -> Self {
        Self {
            binding: Binding::Unbound,
            value: 0,
        }
    }

    /// Creates an empty flag set bound to `enumeration`.
    pub const fn bound(enumeration: &'static FlagEnumeration) -> Self {
        Self {
            binding: Binding::Bound(enumeration),
            value: 0,
        }
    }

    /// Creates an empty flag set bound to `E`'s enumeration.
    pub fn of<E: FlagEnum>() -> Self {
        Self::bound(E::enumeration())
    }

    /// Creates a flag set from typed members. The result is bound to `E` even if
    /// `members` is empty.
    pub fn from_members<E: FlagEnum>(members: impl IntoIterator<Item = E>) -> Self {
        let value = members
            .into_iter()
            .fold(0, |acc, member| acc | member.bits());
        Self {
            binding: Binding::Bound(E::enumeration()),
            value,
        }
    }

    /// Creates a flag set from type-erased flags, binding to the first flag's
    /// enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSetError::TypeConflict`] if the flags come from more than one
    /// enumeration.
    pub fn from_flags<F: Into<Flag>>(flags: impl IntoIterator<Item = F>) -> Result<Self> {
        let mut set = Self::new();
        for flag in flags {
            set.add(flag.into())?;
        }
        Ok(set)
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    pub fn enumeration(&self) -> Option<&'static FlagEnumeration> {
        self.binding.enumeration()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// The raw bit pattern.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Replaces the raw bit pattern.
    ///
    /// This bypasses binding resolution: the bits are not checked against the
    /// enumeration's members.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSetError::InvalidValue`] for negative integers, integers
    /// outside the `u64` domain, floats and booleans.
    pub fn set_value(&mut self, value: impl Into<RawValue>) -> Result<()> {
        self.value = value.into().to_bits()?;
        Ok(())
    }

    /// Number of enumeration members enabled in this set.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Checks if no enumeration member is enabled. Raw bits without a member
    /// behind them do not count, so this agrees with [`FlagSet::len`] and with
    /// the `"0"` text form.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Bits of the raw value that no enabled member accounts for.
    pub(crate) fn unnamed_bits(&self) -> u64 {
        let named = self.binding.enumeration().map_or(0, FlagEnumeration::all_bits);
        self.value & !named
    }

    /// Enabled flags in enumeration order.
    pub fn iter(&self) -> Iter {
        Iter::new(self.binding.enumeration(), self.value)
    }

    /// Enabled flags as typed members.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSetError::TypeConflict`] if the set is bound to an enumeration
    /// other than `E`'s.
    pub fn members<E: FlagEnum>(&self) -> Result<Members<E>> {
        let enumeration = E::enumeration();
        match self.binding {
            Binding::Bound(bound) if !bound.is(enumeration) => Err(FlagSetError::TypeConflict {
                expected: bound.name(),
                found: enumeration.name(),
            }),
            _ => Ok(Members::new(self.iter())),
        }
    }

    /// Checks if a flag is enabled, or if every flag of a flag set is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSetError::TypeConflict`] for flags or sets of a different
    /// enumeration and [`FlagSetError::UnsupportedOperand`] for anything that is
    /// neither a flag nor a flag set.
    pub fn contains<'a>(&self, item: impl Into<Operand<'a>>) -> Result<bool> {
        let item = item.into();
        let (_, bits) = self.binding.resolve(&item)?;
        Ok(match item {
            Operand::Set(_) => self.value & bits == bits,
            _ => self.value & bits != 0,
        })
    }

    /// Checks equality against any operand. Never fails: anything that is not a
    /// compatible flag set compares unequal.
    pub fn equals<'a>(&self, other: impl Into<Operand<'a>>) -> bool {
        match other.into() {
            Operand::Set(set) => self == set,
            _ => false,
        }
    }

    pub(crate) fn combine(&self, operand: Operand<'_>, op: BitOp) -> Result<FlagSet> {
        let (binding, bits) = self.binding.resolve(&operand)?;
        Ok(FlagSet {
            binding,
            value: op.apply(self.value, bits),
        })
    }

    /// Returns the flags enabled in either operand.
    pub fn union<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FlagSet> {
        self.combine(other.into(), BitOp::Union)
    }

    /// Returns the flags enabled in both operands.
    pub fn intersection<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FlagSet> {
        self.combine(other.into(), BitOp::Intersection)
    }

    /// Returns the flags enabled in exactly one operand.
    pub fn symmetric_difference<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FlagSet> {
        self.combine(other.into(), BitOp::SymmetricDifference)
    }

    /// Returns the flags of `self` that are not enabled in `other`.
    pub fn difference<'a>(&self, other: impl Into<Operand<'a>>) -> Result<FlagSet> {
        self.combine(other.into(), BitOp::Difference)
    }

    fn update(&mut self, operand: Operand<'_>, op: BitOp) -> Result<()> {
        *self = self.combine(operand, op)?;
        Ok(())
    }

    /// Enables a flag, or every flag of a flag set.
    ///
    /// With [`std::ops::Add`] in scope, `set.add(flag)` resolves to the `+`
    /// operator, which returns a new set and leaves `set` untouched. Call this
    /// as `FlagSet::add(&mut set, flag)` or use [`FlagSet::union_update`] there.
    pub fn add<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<()> {
        self.update(other.into(), BitOp::Union)
    }

    pub fn union_update<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<()> {
        self.update(other.into(), BitOp::Union)
    }

    pub fn intersection_update<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<()> {
        self.update(other.into(), BitOp::Intersection)
    }

    pub fn symmetric_difference_update<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<()> {
        self.update(other.into(), BitOp::SymmetricDifference)
    }

    pub fn difference_update<'a>(&mut self, other: impl Into<Operand<'a>>) -> Result<()> {
        self.update(other.into(), BitOp::Difference)
    }

    /// Disables `flag` if it is enabled.
    ///
    /// On an unbound set this binds the set to the flag's enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSetError::TypeConflict`] if `flag` belongs to a different
    /// enumeration and [`FlagSetError::UnsupportedOperand`] if it is not a flag.
    pub fn discard<'a>(&mut self, flag: impl Into<Operand<'a>>) -> Result<()> {
        let (binding, flag) = self.binding.resolve_flag(&flag.into())?;
        self.binding = binding;
        self.value = BitOp::Difference.apply(self.value, flag.bits());
        Ok(())
    }

    /// Disables `flag`, failing if it is not enabled.
    ///
    /// # Errors
    ///
    /// Same as [`FlagSet::discard`], plus [`FlagSetError::NotFound`] if `flag` is
    /// not enabled. Nothing is changed on error.
    pub fn remove<'a>(&mut self, flag: impl Into<Operand<'a>>) -> Result<()> {
        let (binding, flag) = self.binding.resolve_flag(&flag.into())?;
        if self.value & flag.bits() == 0 {
            return Err(FlagSetError::NotFound(format!("{flag:?}")));
        }
        self.binding = binding;
        self.value = BitOp::Difference.apply(self.value, flag.bits());
        Ok(())
    }

    /// Renders the raw value as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.value)
    }
}

impl PartialEq for FlagSet {
    fn eq(&self, other: &Self) -> bool {
        self.binding.is_compatible(other.binding) && self.value == other.value
    }
}

impl PartialEq<Flag> for FlagSet {
    fn eq(&self, _: &Flag) -> bool {
        false
    }
}

impl PartialOrd for FlagSet {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if !self.binding.is_compatible(other.binding) {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl Hash for FlagSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl From<FlagSet> for u64 {
    fn from(set: FlagSet) -> Self {
        set.value
    }
}

impl From<&FlagSet> for u64 {
    fn from(set: &FlagSet) -> Self {
        set.value
    }
}

impl<E: FlagEnum> From<E> for FlagSet {
    fn from(member: E) -> Self {
        Self::from_members([member])
    }
}

impl<E: FlagEnum> FromIterator<E> for FlagSet {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_members(iter)
    }
}

/// Builds a [`FlagSet`] from typed flags. `flag_set![]` is an empty, unbound set.
#[macro_export]
macro_rules! flag_set {
    () => {
        $crate::FlagSet::new()
    };
    ($($flag:expr),+ $(,)?) => {
        $crate::FlagSet::from_members([$($flag),+])
    };
}
