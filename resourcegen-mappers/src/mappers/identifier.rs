use resourcegen_model::Result;
use resourcegen_schema::Build;

use crate::context::Context;
use crate::mapper::Mapper;

/// Writes `primary_identifier` and each `additional_identifiers` entry,
/// translating each property name to its JSON pointer (§4.E).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierMapper;

impl Mapper for IdentifierMapper {
    fn before(&self, context: &Context<'_>, builder: Build) -> Result<Build> {
        let primary = context
            .derivation
            .get_primary_identifiers(&context.resource)
            .iter()
            .map(|name| context.property_pointer(name))
            .collect();

        let additional = context
            .derivation
            .get_additional_identifiers(&context.resource)
            .iter()
            .map(|set| set.iter().map(|name| context.property_pointer(name)).collect())
            .collect();

        Ok(builder.primary_identifier(primary).additional_identifiers(additional))
    }
}
