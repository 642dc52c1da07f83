use resourcegen_model::Result;
use resourcegen_schema::Build;

use crate::context::Context;
use crate::mapper::Mapper;

/// Writes `create_only_properties`, `read_only_properties`, and
/// `write_only_properties` from the derivation engine's queries, as JSON
/// pointers (§4.E).
#[derive(Debug, Clone, Copy, Default)]
pub struct MutabilityMapper;

impl Mapper for MutabilityMapper {
    fn before(&self, context: &Context<'_>, builder: Build) -> Result<Build> {
        let pointers = |names: Vec<String>| -> Vec<String> {
            names.iter().map(|name| context.property_pointer(name)).collect()
        };

        let create_only = pointers(context.derivation.get_create_only_properties(&context.resource));
        let read_only = pointers(context.derivation.get_read_only_properties(&context.resource));
        let write_only = pointers(context.derivation.get_write_only_properties(&context.resource));

        Ok(builder
            .create_only_properties(create_only)
            .read_only_properties(read_only)
            .write_only_properties(write_only))
    }
}
