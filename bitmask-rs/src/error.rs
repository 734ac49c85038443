/// Represents all possible errors that can occur when working with flag sets.
///
/// Every operation detects its error before touching the flag set's raw value,
/// so a returned error never leaves a partially updated set behind.
#[derive(Debug)]
pub enum FlagSetError {
    /// Two differing flag enumerations were combined, or a bound flag set was
    /// asked to adopt a different enumeration.
    TypeConflict {
        /// Enumeration the flag set is bound to.
        expected: &'static str,
        /// Enumeration carried by the offending operand.
        found: &'static str,
    },
    /// An operand was neither a flag set nor a flag.
    UnsupportedOperand {
        /// The operand kinds the operation accepts.
        expected: String,
        /// Description of the rejected operand.
        found: String,
    },
    /// A raw value assignment received a non-integer or negative value.
    InvalidValue(String),
    /// Strict removal targeted a flag that is not enabled.
    NotFound(String),
    /// A serialized record is malformed.
    InvalidData(String),
    /// A serialized record names an enumeration the registry does not know.
    UnknownEnumeration(String),
    /// Represents an error that occurs during I/O operations.
    Io(std::io::Error),
}

/// Provides a user-friendly string representation for each error variant in `FlagSetError`.
impl std::fmt::Display for FlagSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagSetError::TypeConflict { expected, found } => {
                write!(f, "Type conflict: expected {expected} flags, got {found}")
            }
            FlagSetError::UnsupportedOperand { expected, found } => {
                write!(f, "Unsupported operand: can only apply {expected} (got {found})")
            }
            FlagSetError::InvalidValue(err) => write!(f, "Invalid value: {err}"),
            FlagSetError::NotFound(flag) => write!(f, "Flag not found: {flag}"),
            FlagSetError::InvalidData(err) => write!(f, "Invalid data: {err}"),
            FlagSetError::UnknownEnumeration(name) => write!(f, "Unknown enumeration: {name}"),
            FlagSetError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

/// Implements the standard error trait for `FlagSetError`, allowing it to be used with
/// error chaining and other error handling utilities.
impl std::error::Error for FlagSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlagSetError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Allows automatic conversion from `std::io::Error` to `FlagSetError`.
impl From<std::io::Error> for FlagSetError {
    fn from(error: std::io::Error) -> Self {
        FlagSetError::Io(error)
    }
}

pub type Result<T> = std::result::Result<T, FlagSetError>;
