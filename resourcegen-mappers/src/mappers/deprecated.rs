use resourcegen_model::{Result, TraitId};
use resourcegen_schema::Build;

use crate::context::Context;
use crate::mapper::Mapper;

/// Adds each deprecated member's JSON pointer to `deprecated_properties`
/// (§4.E), unless suppressed by configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeprecatedMapper;

impl Mapper for DeprecatedMapper {
    fn before(&self, context: &Context<'_>, builder: Build) -> Result<Build> {
        if context.configuration.disable_deprecated_property_generation {
            return Ok(builder);
        }
        let deprecated: Vec<String> = context
            .derivation
            .get_properties(&context.resource)
            .iter()
            .filter(|(_, def)| {
                context
                    .model
                    .get_trait(&def.shape_id, TraitId::Deprecated)
                    .is_some()
            })
            .map(|(name, _)| context.property_pointer(name))
            .collect();
        Ok(builder.deprecated_properties(deprecated))
    }
}
