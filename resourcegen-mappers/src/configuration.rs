use indexmap::IndexMap;
use resourcegen_model::error::error::MissingConfigurationCtx;
use resourcegen_model::{Result, ShapeId};
use serde_json::Value;
use snafu::ensure;

/// §6's configuration table, built with the teacher's `Build`/`finish()`
/// pattern (`grill-core/src/schema/dialect.rs`'s `Dialect::build`).
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub organization_name: String,
    pub service: ShapeId,
    pub service_name: Option<String>,
    pub disable_capitalized_properties: bool,
    pub default_blob_format: String,
    pub external_doc_keys: Vec<String>,
    pub source_doc_keys: Vec<String>,
    pub json_add: IndexMap<String, Value>,
    pub disable_deprecated_property_generation: bool,
}

impl Configuration {
    /// Returns a new [`ConfigurationBuilder`] with the two fields §6 marks
    /// required.
    #[must_use]
    pub fn build(organization_name: impl Into<String>, service: ShapeId) -> ConfigurationBuilder {
        ConfigurationBuilder {
            organization_name: organization_name.into(),
            service,
            service_name: None,
            disable_capitalized_properties: false,
            default_blob_format: "byte".to_string(),
            external_doc_keys: vec!["documentation".to_string()],
            source_doc_keys: vec!["source".to_string()],
            json_add: IndexMap::new(),
            disable_deprecated_property_generation: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    organization_name: String,
    service: ShapeId,
    service_name: Option<String>,
    disable_capitalized_properties: bool,
    default_blob_format: String,
    external_doc_keys: Vec<String>,
    source_doc_keys: Vec<String>,
    json_add: IndexMap<String, Value>,
    disable_deprecated_property_generation: bool,
}

impl ConfigurationBuilder {
    #[must_use]
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn disable_capitalized_properties(mut self, disable: bool) -> Self {
        self.disable_capitalized_properties = disable;
        self
    }

    #[must_use]
    pub fn default_blob_format(mut self, format: impl Into<String>) -> Self {
        self.default_blob_format = format.into();
        self
    }

    #[must_use]
    pub fn external_doc_keys(mut self, keys: Vec<String>) -> Self {
        self.external_doc_keys = keys;
        self
    }

    #[must_use]
    pub fn source_doc_keys(mut self, keys: Vec<String>) -> Self {
        self.source_doc_keys = keys;
        self
    }

    #[must_use]
    pub fn json_add(mut self, pointer: impl Into<String>, value: Value) -> Self {
        self.json_add.insert(pointer.into(), value);
        self
    }

    #[must_use]
    pub fn disable_deprecated_property_generation(mut self, disable: bool) -> Self {
        self.disable_deprecated_property_generation = disable;
        self
    }

    /// Finalizes the [`Configuration`]. Fails with `MissingConfiguration` if
    /// `organization_name` is empty (§6, §7).
    pub fn finish(self) -> Result<Configuration> {
        ensure!(
            !self.organization_name.is_empty(),
            MissingConfigurationCtx {
                field: "organization_name"
            }
        );
        Ok(Configuration {
            organization_name: self.organization_name,
            service: self.service,
            service_name: self.service_name,
            disable_capitalized_properties: self.disable_capitalized_properties,
            default_blob_format: self.default_blob_format,
            external_doc_keys: self.external_doc_keys,
            source_doc_keys: self.source_doc_keys,
            json_add: self.json_add,
            disable_deprecated_property_generation: self.disable_deprecated_property_generation,
        })
    }
}
