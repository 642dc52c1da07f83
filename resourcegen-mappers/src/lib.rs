#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod configuration;
mod context;
mod mapper;
mod mappers;

pub use configuration::{Configuration, ConfigurationBuilder};
pub use context::Context;
pub use mapper::{sorted, Mapper};
pub use mappers::{DeprecatedMapper, DocumentationMapper, IdentifierMapper, JsonAddMapper, MutabilityMapper};
