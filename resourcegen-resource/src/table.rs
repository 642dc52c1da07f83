use indexmap::{IndexMap, IndexSet};
use resourcegen_model::ShapeId;

use crate::property::ResourcePropertyDefinition;

/// The full per-resource derivation result (§3, "Per-resource derivation
/// table"). Built once per `(model, resource)` by [`crate::derive`] and
/// immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct DerivationTable {
    /// All properties produced by §4.B, *before* exclusion filtering.
    /// Callers should use [`DerivationTable::properties`] (or
    /// [`crate::DerivationContext::get_properties`]) rather than this field
    /// directly, unless they specifically need the pre-exclusion view.
    pub properties: IndexMap<String, ResourcePropertyDefinition>,
    pub primary_identifiers: IndexSet<String>,
    pub additional_identifiers: Vec<IndexSet<String>>,
    pub excluded_property_ids: IndexSet<ShapeId>,
}

impl DerivationTable {
    /// Properties with exclusion filtering applied (§4.B.6: "When
    /// publishing `properties()` from the derivation table, filter out any
    /// entry whose shape id is in this set").
    #[must_use]
    pub fn properties(&self) -> IndexMap<String, ResourcePropertyDefinition> {
        self.properties
            .iter()
            .filter(|(_, def)| !self.excluded_property_ids.contains(&def.shape_id))
            .map(|(name, def)| (name.clone(), def.clone()))
            .collect()
    }
}
