use resourcegen_model::{Result, TraitId};
use resourcegen_schema::Build;

use crate::context::Context;
use crate::mapper::Mapper;

/// From the resource's `externalDocumentation` trait, picks the first URL
/// whose key (case-insensitive) matches a configured `source_doc_keys`
/// entry for `source_url`, and similarly for `external_doc_keys` for
/// `documentation_url` (§4.E).
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentationMapper;

impl Mapper for DocumentationMapper {
    fn before(&self, context: &Context<'_>, mut builder: Build) -> Result<Build> {
        let Some(links) = context
            .model
            .get_trait(&context.resource, TraitId::ExternalDocumentation)
            .and_then(|value| value.as_external_documentation())
        else {
            return Ok(builder);
        };

        if let Some(url) = first_matching(links, &context.configuration.source_doc_keys) {
            builder = builder.source_url(url);
        }
        if let Some(url) = first_matching(links, &context.configuration.external_doc_keys) {
            builder = builder.documentation_url(url);
        }
        Ok(builder)
    }
}

fn first_matching(
    links: &indexmap::IndexMap<String, String>,
    candidate_keys: &[String],
) -> Option<String> {
    candidate_keys.iter().find_map(|candidate| {
        links
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(candidate))
            .map(|(_, url)| url.clone())
    })
}
