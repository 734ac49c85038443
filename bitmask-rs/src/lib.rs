//! # bitmask-rs
//!
//! `bitmask-rs` wraps an integer bit pattern in a set of named flags drawn from a
//! caller-defined enumeration, replacing raw bit twiddling with set operations.
//!
//! ## Features
//! - Declare flag enumerations with [`flag_enum!`]
//! - Union, intersection, symmetric difference and difference, as methods or operators
//! - Lazy binding: an empty [`FlagSet`] adopts the enumeration of the first flag it sees
//! - Mixing flags of different enumerations is an error, never a silent coercion
//! - Optional record codec (`record` feature) for rebuilding flag sets by enumeration name
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! bitmask-rs = "0.1"
//! ```
//!
//! ### Example: Combining Flags
//! ```rust
//! use bitmask_rs::{flag_enum, flag_set, FlagSet, FlagSetError};
//!
//! flag_enum! {
//!     pub enum Desc {
//!         SMALL = 1,
//!         ROUND = 1 << 1,
//!         FUNKY = 1 << 2,
//!         SONAR = 1 << 4,
//!     }
//! }
//!
//! flag_enum! {
//!     pub enum Colors {
//!         TEAL = 1,
//!         PINK = 1 << 1,
//!     }
//! }
//!
//! let mask = flag_set![Desc::SMALL, Desc::FUNKY];
//! assert_eq!(mask.value(), 5);
//!
//! let rounder = (&mask + Desc::ROUND).unwrap();
//! assert_eq!(rounder.to_string(), "SMALL|ROUND|FUNKY");
//! assert!(rounder.contains(&mask).unwrap());
//!
//! // Flags of another enumeration are rejected.
//! assert!(matches!(&mask | Colors::TEAL, Err(FlagSetError::TypeConflict { .. })));
//!
//! // Iterate in enumeration order.
//! for flag in &rounder {
//!     println!("{flag}");
//! }
//!
//! assert_eq!(FlagSet::new().to_string(), "0");
//! ```

mod binding;
mod error;
#[cfg(feature = "record")]
mod ext;
mod flag_enumeration;
mod flag_set;
mod format;
mod iter;
mod operand;
mod ops;
#[cfg(feature = "record")]
pub mod record;

pub use binding::Binding;
pub use error::{FlagSetError, Result};
pub use flag_enumeration::{Flag, FlagEnum, FlagEnumeration, Member};
pub use flag_set::FlagSet;
pub use format::DisplayWith;
pub use iter::{Iter, Members};
pub use operand::{Operand, RawValue};
