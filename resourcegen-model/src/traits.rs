use indexmap::IndexMap;

use crate::ShapeId;

/// Discriminator for the trait kinds the core queries against the model.
///
/// The model may carry other trait types; the engine only ever asks for the
/// ones listed here (§3 of the specification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TraitId {
    Resource,
    AdditionalIdentifier,
    ExcludeProperty,
    CreateOnlyProperty,
    ReadOnlyProperty,
    WriteOnlyProperty,
    MutableProperty,
    PropertyName,
    Documentation,
    ExternalDocumentation,
    Deprecated,
}

/// A decoded trait value. Only the payload the core reads is modeled; traits
/// that are purely markers (e.g. `excludeProperty`) carry no data.
#[derive(Debug, Clone, PartialEq)]
pub enum TraitValue {
    Resource {
        name: Option<String>,
        additional_schemas: Vec<ShapeId>,
    },
    AdditionalIdentifier,
    ExcludeProperty,
    CreateOnlyProperty,
    ReadOnlyProperty,
    WriteOnlyProperty,
    MutableProperty,
    PropertyName(String),
    Documentation(String),
    ExternalDocumentation(IndexMap<String, String>),
    Deprecated,
}

impl TraitValue {
    #[must_use]
    pub fn id(&self) -> TraitId {
        match self {
            Self::Resource { .. } => TraitId::Resource,
            Self::AdditionalIdentifier => TraitId::AdditionalIdentifier,
            Self::ExcludeProperty => TraitId::ExcludeProperty,
            Self::CreateOnlyProperty => TraitId::CreateOnlyProperty,
            Self::ReadOnlyProperty => TraitId::ReadOnlyProperty,
            Self::WriteOnlyProperty => TraitId::WriteOnlyProperty,
            Self::MutableProperty => TraitId::MutableProperty,
            Self::PropertyName(_) => TraitId::PropertyName,
            Self::Documentation(_) => TraitId::Documentation,
            Self::ExternalDocumentation(_) => TraitId::ExternalDocumentation,
            Self::Deprecated => TraitId::Deprecated,
        }
    }

    #[must_use]
    pub fn as_resource(&self) -> Option<(Option<&str>, &[ShapeId])> {
        match self {
            Self::Resource {
                name,
                additional_schemas,
            } => Some((name.as_deref(), additional_schemas.as_slice())),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property_name(&self) -> Option<&str> {
        match self {
            Self::PropertyName(name) => Some(name.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_documentation(&self) -> Option<&str> {
        match self {
            Self::Documentation(doc) => Some(doc.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_external_documentation(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::ExternalDocumentation(map) => Some(map),
            _ => None,
        }
    }
}
