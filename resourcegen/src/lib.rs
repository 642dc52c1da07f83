#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Wires the trait/model query layer, derivation engine, pseudo-structure
//! synthesizer, mapper pipeline, and schema document model into the single
//! public entry point of the resource-schema conversion engine (§2
//! Orchestration, §4.E.1/4.E.2).
//!
//! The shape-to-schema converter (`resourcegen_schema::Converter`) and the
//! mapper list are accepted as input rather than discovered by this crate,
//! mirroring the teacher's facade, which wires an `Interrogator` together
//! from caller-supplied `Dialect`s and keywords rather than hardcoding them.

mod convert;

pub use convert::convert_service;

pub use resourcegen_mappers::{
    Configuration, ConfigurationBuilder, Context, DeprecatedMapper, DocumentationMapper, IdentifierMapper,
    JsonAddMapper, Mapper, MutabilityMapper,
};
pub use resourcegen_model::{Error, ErrorKind, Model, Result, ShapeId};
pub use resourcegen_schema::{naive::NaiveConverter, Converter, SchemaDocument};

/// The five built-in mappers of §4.E, in a list suitable for
/// [`convert_service`]. Callers that need additional mappers can push onto
/// this `Vec` before calling `convert_service` — ordering is resolved at
/// call time by each mapper's `order()`, not by list position.
#[must_use]
pub fn default_mappers() -> Vec<Box<dyn Mapper>> {
    vec![
        Box::new(IdentifierMapper),
        Box::new(MutabilityMapper),
        Box::new(DocumentationMapper),
        Box::new(DeprecatedMapper),
        Box::new(JsonAddMapper),
    ]
}
