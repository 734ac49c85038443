//! Explicit serialization of flag sets as enumeration name plus raw value.

pub mod enumeration_registry;
pub mod flag_set_record;
pub mod record_flags;
