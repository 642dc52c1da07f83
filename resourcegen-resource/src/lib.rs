#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! The resource property derivation engine (§2 Component B) and
//! pseudo-structure synthesizer (§2 Component C) — the algorithmic core of
//! the specification.

mod constraint;
mod context;
mod derive;
mod property;
#[cfg(test)]
mod proptests;
mod synthesize;
mod table;
#[cfg(test)]
mod tests;

pub use constraint::{add_create_only, add_read_only, add_write_only, identity, ConstraintSet, Mutability};
pub use context::DerivationContext;
pub use derive::derive;
pub use property::ResourcePropertyDefinition;
pub use synthesize::{synthesize, synthetic_id, AugmentedModel};
pub use table::DerivationTable;
