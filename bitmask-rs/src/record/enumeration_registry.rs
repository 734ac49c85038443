use std::collections::HashMap;

use crate::flag_enumeration::{FlagEnum, FlagEnumeration};

/// Maps enumeration names to their descriptors so that records can be restored
/// into bound flag sets.
#[derive(Debug, Default, Clone)]
pub struct EnumerationRegistry {
    enumerations: HashMap<&'static str, &'static FlagEnumeration>,
}

impl EnumerationRegistry {
    /// Creates a new, empty `EnumerationRegistry`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `enumeration` under its name, returning the descriptor it
    /// replaced, if any.
    pub fn register(
        &mut self,
        enumeration: &'static FlagEnumeration,
    ) -> Option<&'static FlagEnumeration> {
        self.enumerations.insert(enumeration.name(), enumeration)
    }

    /// Registers `E`'s enumeration and returns the registry, for chaining.
    pub fn with<E: FlagEnum>(mut self) -> Self {
        self.register(E::enumeration());
        self
    }

    pub fn get(&self, name: &str) -> Option<&'static FlagEnumeration> {
        self.enumerations.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.enumerations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enumerations.is_empty()
    }
}
