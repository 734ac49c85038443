use tracing::trace;

use crate::{
    error::{FlagSetError, Result},
    flag_enumeration::{Flag, FlagEnumeration},
    operand::Operand,
};

/// The enumeration a flag set is scoped to.
///
/// A flag set starts `Unbound` unless it was created from an enumeration or a
/// concrete flag, and moves to `Bound` the first time an operation introduces an
/// enumeration. A bound flag set never changes enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub enum Binding {
    #[default]
    Unbound,
    Bound(&'static FlagEnumeration),
}

impl Binding {
    pub fn enumeration(self) -> Option<&'static FlagEnumeration> {
        match self {
            Binding::Unbound => None,
            Binding::Bound(enumeration) => Some(enumeration),
        }
    }

    pub fn is_bound(self) -> bool {
        matches!(self, Binding::Bound(_))
    }

    /// Checks if two bindings could belong to the same flag set type. Only two
    /// differing concrete enumerations are incompatible.
    pub fn is_compatible(self, other: Binding) -> bool {
        match (self, other) {
            (Binding::Bound(a), Binding::Bound(b)) => a.is(b),
            _ => true,
        }
    }

    /// Combines two bindings, adopting whichever side is bound.
    pub(crate) fn merge(self, other: Binding) -> Result<Binding> {
        match (self, other) {
            (Binding::Bound(a), Binding::Bound(b)) if !a.is(b) => Err(FlagSetError::TypeConflict {
                expected: a.name(),
                found: b.name(),
            }),
            (Binding::Bound(a), _) => Ok(Binding::Bound(a)),
            (Binding::Unbound, other) => {
                if let Binding::Bound(b) = other {
                    trace!(enumeration = b.name(), "adopting binding");
                }
                Ok(other)
            }
        }
    }

    /// Resolves the binding of a set operation against `operand`, returning the
    /// binding of the result and the operand's raw bits.
    pub(crate) fn resolve(self, operand: &Operand<'_>) -> Result<(Binding, u64)> {
        match operand {
            Operand::Set(set) => Ok((self.merge(set.binding())?, set.value())),
            Operand::Flag(flag) => Ok((self.merge(Binding::Bound(flag.enumeration()))?, flag.bits())),
            other => Err(self.unsupported(other, true)),
        }
    }

    /// Like [`Binding::resolve`], but only single flags are accepted.
    pub(crate) fn resolve_flag(self, operand: &Operand<'_>) -> Result<(Binding, Flag)> {
        match operand {
            Operand::Flag(flag) => Ok((self.merge(Binding::Bound(flag.enumeration()))?, *flag)),
            other => Err(self.unsupported(other, false)),
        }
    }

    pub(crate) fn unsupported(self, operand: &Operand<'_>, accepts_sets: bool) -> FlagSetError {
        let flags = match self {
            Binding::Unbound => "a flag".to_string(),
            Binding::Bound(enumeration) => enumeration.name().to_string(),
        };
        let expected = if accepts_sets {
            format!("FlagSet or {flags}")
        } else {
            flags
        };
        FlagSetError::UnsupportedOperand {
            expected,
            found: operand.to_string(),
        }
    }
}

impl PartialEq for Binding {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Binding::Unbound, Binding::Unbound) => true,
            (Binding::Bound(a), Binding::Bound(b)) => a.is(b),
            _ => false,
        }
    }
}

impl Eq for Binding {}
