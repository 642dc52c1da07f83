use indexmap::IndexMap;
use resourcegen_model::error::error::EmptyPropertiesCtx;
use resourcegen_model::{Result, ShapeId};
use snafu::ensure;

/// A JSON Schema fragment, as produced by the external shape-to-schema
/// converter (§6). Modeled as a raw [`serde_json::Value`] rather than a
/// hand-rolled tree — see `SPEC_FULL.md` §5 supplemental decision 4.
pub type Schema = serde_json::Value;

/// A resource's permissions for a single lifecycle handler (§3,
/// `handlers: mapping<lifecycle_name, Handler>`; `SPEC_FULL.md` §5
/// supplemental decision 2).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handler {
    pub permissions: Vec<String>,
}

/// A root-level resource property: its schema plus whether the emitted node
/// should carry `"insertionOrder": true` (§4.F).
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub schema: Schema,
    pub insertion_order: bool,
}

impl Property {
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            insertion_order: false,
        }
    }
}

/// The output document of the engine (§3, `ResourceSchema`): immutable once
/// built, with every list/map field preserving insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    pub type_name: String,
    pub description: String,
    pub source_url: Option<String>,
    pub documentation_url: Option<String>,
    pub definitions: IndexMap<String, Schema>,
    pub properties: IndexMap<String, Property>,
    pub read_only_properties: Vec<String>,
    pub write_only_properties: Vec<String>,
    pub create_only_properties: Vec<String>,
    pub deprecated_properties: Vec<String>,
    pub primary_identifier: Vec<String>,
    pub additional_identifiers: Vec<Vec<String>>,
    pub handlers: IndexMap<String, Handler>,
}

impl ResourceSchema {
    /// Returns a new [`Build`] with the three fields §4.D requires up front.
    #[must_use]
    pub fn build(
        resource: ShapeId,
        type_name: impl Into<String>,
        description: impl Into<String>,
        properties: IndexMap<String, Property>,
    ) -> Build {
        Build {
            resource,
            type_name: type_name.into(),
            description: description.into(),
            properties,
            source_url: None,
            documentation_url: None,
            definitions: IndexMap::new(),
            read_only_properties: Vec::new(),
            write_only_properties: Vec::new(),
            create_only_properties: Vec::new(),
            deprecated_properties: Vec::new(),
            primary_identifier: Vec::new(),
            additional_identifiers: Vec::new(),
            handlers: IndexMap::new(),
        }
    }
}

/// Builds a [`ResourceSchema`], mirroring the teacher's
/// `Dialect::build(id) -> Build` / `Build::finish()` pattern
/// (`grill-core/src/schema/dialect.rs`).
#[derive(Debug, Clone)]
pub struct Build {
    resource: ShapeId,
    type_name: String,
    description: String,
    properties: IndexMap<String, Property>,
    source_url: Option<String>,
    documentation_url: Option<String>,
    definitions: IndexMap<String, Schema>,
    read_only_properties: Vec<String>,
    write_only_properties: Vec<String>,
    create_only_properties: Vec<String>,
    deprecated_properties: Vec<String>,
    primary_identifier: Vec<String>,
    additional_identifiers: Vec<Vec<String>>,
    handlers: IndexMap<String, Handler>,
}

impl Build {
    #[must_use]
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn definitions(mut self, definitions: IndexMap<String, Schema>) -> Self {
        self.definitions = definitions;
        self
    }

    #[must_use]
    pub fn read_only_properties(mut self, pointers: Vec<String>) -> Self {
        self.read_only_properties = pointers;
        self
    }

    #[must_use]
    pub fn write_only_properties(mut self, pointers: Vec<String>) -> Self {
        self.write_only_properties = pointers;
        self
    }

    #[must_use]
    pub fn create_only_properties(mut self, pointers: Vec<String>) -> Self {
        self.create_only_properties = pointers;
        self
    }

    #[must_use]
    pub fn deprecated_properties(mut self, pointers: Vec<String>) -> Self {
        self.deprecated_properties = pointers;
        self
    }

    #[must_use]
    pub fn primary_identifier(mut self, pointers: Vec<String>) -> Self {
        self.primary_identifier = pointers;
        self
    }

    #[must_use]
    pub fn additional_identifiers(mut self, pointers: Vec<Vec<String>>) -> Self {
        self.additional_identifiers = pointers;
        self
    }

    #[must_use]
    pub fn handlers(mut self, handlers: IndexMap<String, Handler>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Finalizes the [`ResourceSchema`]. Fails with `EmptyProperties` if no
    /// properties survived derivation and exclusion (§4.D, §7).
    pub fn finish(self) -> Result<ResourceSchema> {
        ensure!(
            !self.properties.is_empty(),
            EmptyPropertiesCtx { resource: self.resource }
        );
        Ok(ResourceSchema {
            type_name: self.type_name,
            description: self.description,
            source_url: self.source_url,
            documentation_url: self.documentation_url,
            definitions: self.definitions,
            properties: self.properties,
            read_only_properties: self.read_only_properties,
            write_only_properties: self.write_only_properties,
            create_only_properties: self.create_only_properties,
            deprecated_properties: self.deprecated_properties,
            primary_identifier: self.primary_identifier,
            additional_identifiers: self.additional_identifiers,
            handlers: self.handlers,
        })
    }
}
