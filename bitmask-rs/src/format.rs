use std::fmt;

use crate::flag_set::FlagSet;

const SEPARATOR: &str = "|";
const EMPTY: &str = "0";

/// Renders a flag set with a custom separator and empty-set text.
///
/// Returned by [`FlagSet::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayWith<'a> {
    set: &'a FlagSet,
    separator: &'a str,
    empty: &'a str,
}

impl FlagSet {
    /// Renders enabled flag names joined by `separator`, or `empty` if none are
    /// enabled. The plain `Display` impl uses `"|"` and `"0"`.
    pub fn display_with<'a>(&'a self, separator: &'a str, empty: &'a str) -> DisplayWith<'a> {
        DisplayWith {
            set: self,
            separator,
            empty,
        }
    }
}

impl fmt::Display for DisplayWith<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = self.set.iter();
        match flags.next() {
            Some(first) => f.write_str(first.name())?,
            None => return f.write_str(self.empty),
        }
        for flag in flags {
            f.write_str(self.separator)?;
            f.write_str(flag.name())?;
        }
        Ok(())
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(SEPARATOR, EMPTY), f)
    }
}

/// `FlagSet(Desc, Desc.SMALL, Desc.FUNKY)`, or `FlagSet()` while unbound.
/// Bits with no member behind them are appended in hex: `FlagSet(Desc, Desc.SMALL, 0x20)`.
impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FlagSet(")?;
        let mut first = true;
        if let Some(enumeration) = self.enumeration() {
            f.write_str(enumeration.name())?;
            first = false;
            for flag in self {
                write!(f, ", {flag:?}")?;
            }
        }
        let unnamed = self.unnamed_bits();
        if unnamed != 0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{unnamed:#x}")?;
        }
        f.write_str(")")
    }
}

macro_rules! value_fmt {
    ($($trait:ident),*) => {
        $(
            impl fmt::$trait for FlagSet {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.value(), f)
                }
            }
        )*
    };
}

value_fmt!(LowerHex, UpperHex, Octal, Binary);
