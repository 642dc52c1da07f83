use resourcegen_model::{Model, ShapeId};
use resourcegen_resource::DerivationContext;
use resourcegen_schema::Converter;

use crate::configuration::Configuration;

/// The environment a mapper pipeline runs in (§4.E): everything a mapper
/// hook may need to decorate a resource schema, bundled together the way
/// the teacher bundles compile-time state into `Compile<'i>`
/// (`grill-core/src/keyword.rs`).
pub struct Context<'a> {
    pub model: &'a dyn Model,
    pub service: ShapeId,
    pub resource: ShapeId,
    pub synthetic_structure: ShapeId,
    pub configuration: &'a Configuration,
    pub converter: &'a dyn Converter,
    pub derivation: &'a DerivationContext<'a>,
}

impl<'a> Context<'a> {
    /// `capitalize(name)` unless configuration disables capitalization.
    #[must_use]
    pub fn resolved_property_name(&self, name: &str) -> String {
        if self.configuration.disable_capitalized_properties {
            name.to_string()
        } else {
            capitalize(name)
        }
    }

    /// `"/properties/" + resolved_property_name(name)`.
    #[must_use]
    pub fn property_pointer(&self, name: &str) -> String {
        format!("/properties/{}", self.resolved_property_name(name))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalizes_first_character_only() {
        assert_eq!(capitalize("fooId"), "FooId");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
    }
}
