#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! The schema document model (§2 Component D) and its serialization (§2
//! Component F), plus the [`Converter`] trait the engine hands the
//! synthesized structure (§2 Component C's output) to.

mod converter;
mod node;
pub mod naive;
mod schema;

pub use converter::{Converter, SchemaDocument};
pub use node::to_node;
pub use schema::{Build, Handler, Property, ResourceSchema, Schema};
