use std::fmt;

/// A single named member of a [`FlagEnumeration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    /// The member's name, used when rendering flag sets.
    pub name: &'static str,
    /// The member's bit. Either a single power of two or zero.
    pub bits: u64,
}

/// Describes a closed, ordered enumeration of named flags.
///
/// Flag sets hold a `&'static` reference to one of these, and two enumerations are
/// the same enumeration only if they are the same `static`. Declaration order is
/// the order in which flags are iterated and rendered.
///
/// Enumerations are normally declared through [`flag_enum!`](crate::flag_enum), but
/// can be written by hand:
///
/// ```rust
/// use bitmask_rs::{FlagEnumeration, FlagSet, Member};
///
/// static COLORS: FlagEnumeration = FlagEnumeration::new(
///     "Colors",
///     &[
///         Member { name: "TEAL", bits: 1 },
///         Member { name: "PINK", bits: 2 },
///         Member { name: "BLUE", bits: 4 },
///     ],
/// );
///
/// let mut set = FlagSet::bound(&COLORS);
/// set.add(COLORS.flag("PINK").unwrap()).unwrap();
/// assert_eq!(set.to_string(), "PINK");
/// ```
pub struct FlagEnumeration {
    name: &'static str,
    members: &'static [Member],
}

impl FlagEnumeration {
    /// Creates a new enumeration descriptor.
    ///
    /// # Panics
    ///
    /// Panics if a member's bits are neither zero nor a single power of two, or if
    /// two members share the same bits. In a `static` initializer this is a
    /// compile-time error.
    pub const fn new(name: &'static str, members: &'static [Member]) -> Self {
        let mut i = 0;
        while i < members.len() {
            let bits = members[i].bits;
            if bits != 0 && bits & (bits - 1) != 0 {
                panic!("flag enumeration members must be a single bit or zero");
            }
            let mut j = i + 1;
            while j < members.len() {
                if members[j].bits == bits {
                    panic!("flag enumeration members must have unique values");
                }
                j += 1;
            }
            i += 1;
        }
        Self { name, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &'static [Member] {
        self.members
    }

    /// Checks if `bits` is the value of one of the members.
    pub fn contains(&self, bits: u64) -> bool {
        self.members.iter().any(|member| member.bits == bits)
    }

    /// Union of every member's bits.
    pub fn all_bits(&self) -> u64 {
        self.members.iter().fold(0, |acc, member| acc | member.bits)
    }

    /// Looks up a member by name and returns it as a [`Flag`].
    pub fn flag(&'static self, name: &str) -> Option<Flag> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(|member| Flag::from_parts(self, member.name, member.bits))
    }

    /// Looks up a member by value and returns it as a [`Flag`].
    pub fn flag_from_bits(&'static self, bits: u64) -> Option<Flag> {
        self.members
            .iter()
            .find(|member| member.bits == bits)
            .map(|member| Flag::from_parts(self, member.name, member.bits))
    }

    /// Checks if both references point at the same enumeration.
    pub fn is(&self, other: &FlagEnumeration) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for FlagEnumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagEnumeration")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}

/// A single named flag, carrying the enumeration it belongs to.
#[derive(Clone, Copy)]
pub struct Flag {
    enumeration: &'static FlagEnumeration,
    name: &'static str,
    bits: u64,
}

impl Flag {
    pub(crate) fn from_parts(
        enumeration: &'static FlagEnumeration,
        name: &'static str,
        bits: u64,
    ) -> Self {
        Self {
            enumeration,
            name,
            bits,
        }
    }

    pub fn enumeration(&self) -> &'static FlagEnumeration {
        self.enumeration
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }
}

impl PartialEq for Flag {
    fn eq(&self, other: &Self) -> bool {
        self.enumeration.is(other.enumeration) && self.bits == other.bits
    }
}

impl Eq for Flag {}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.enumeration.name(), self.name)
    }
}

/// A Rust enum whose variants are the members of a [`FlagEnumeration`].
///
/// Usually implemented by [`flag_enum!`](crate::flag_enum).
pub trait FlagEnum: Copy + 'static {
    /// The descriptor shared by every variant.
    fn enumeration() -> &'static FlagEnumeration;

    fn name(self) -> &'static str;

    fn bits(self) -> u64;

    /// Returns the variant whose value is exactly `bits`.
    fn from_bits(bits: u64) -> Option<Self>;

    fn flag(self) -> Flag {
        Flag::from_parts(Self::enumeration(), self.name(), self.bits())
    }
}

/// Declares a flag enumeration as a Rust enum.
///
/// The macro generates the enum, a `static` [`FlagEnumeration`] describing it,
/// the [`FlagEnum`] impl, conversions into [`Flag`](crate::Flag) and
/// [`Operand`](crate::Operand), and the commutative operators with a flag on the
/// left-hand side (`Desc::ROUND | &set`).
///
/// ```rust
/// use bitmask_rs::{flag_enum, flag_set};
///
/// flag_enum! {
///     pub enum Desc {
///         SMALL = 1,
///         ROUND = 1 << 1,
///         FUNKY = 1 << 2,
///     }
/// }
///
/// let set = flag_set![Desc::SMALL, Desc::FUNKY];
/// assert_eq!(set.value(), 5);
/// assert_eq!((Desc::ROUND + &set).unwrap().to_string(), "SMALL|ROUND|FUNKY");
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[repr(u64)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $crate::FlagEnum for $name {
            fn enumeration() -> &'static $crate::FlagEnumeration {
                static ENUMERATION: $crate::FlagEnumeration = $crate::FlagEnumeration::new(
                    stringify!($name),
                    &[$($crate::Member {
                        name: stringify!($variant),
                        bits: $value,
                    }),+],
                );
                &ENUMERATION
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            fn bits(self) -> u64 {
                self as u64
            }

            fn from_bits(bits: u64) -> Option<Self> {
                $(
                    if bits == $name::$variant as u64 {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl From<$name> for $crate::Flag {
            fn from(member: $name) -> Self {
                $crate::FlagEnum::flag(member)
            }
        }

        impl<'a> From<$name> for $crate::Operand<'a> {
            fn from(member: $name) -> Self {
                $crate::Operand::Flag($crate::FlagEnum::flag(member))
            }
        }

        $crate::__flag_enum_reverse_op!($name, Add, add, union);
        $crate::__flag_enum_reverse_op!($name, BitOr, bitor, union);
        $crate::__flag_enum_reverse_op!($name, BitAnd, bitand, intersection);
        $crate::__flag_enum_reverse_op!($name, BitXor, bitxor, symmetric_difference);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __flag_enum_reverse_op {
    ($name:ident, $trait:ident, $method:ident, $op:ident) => {
        impl<'a> ::std::ops::$trait<&'a $crate::FlagSet> for $name {
            type Output = $crate::Result<$crate::FlagSet>;

            fn $method(self, rhs: &'a $crate::FlagSet) -> Self::Output {
                rhs.$op(self)
            }
        }

        impl ::std::ops::$trait<$crate::FlagSet> for $name {
            type Output = $crate::Result<$crate::FlagSet>;

            fn $method(self, rhs: $crate::FlagSet) -> Self::Output {
                rhs.$op(self)
            }
        }
    };
}
