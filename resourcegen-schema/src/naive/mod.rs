//! A minimal, structurally-recursive [`Converter`](crate::Converter)
//! implementation.
//!
//! The real shape-to-schema converter is an external collaborator (§1, §6)
//! with full knowledge of a shape graph's scalar types, constraints, and
//! traits. This one only knows what [`resourcegen_model::Model`] exposes —
//! structure membership and nothing about scalar kinds — so every
//! non-structure target naively becomes a `{"type": "string"}` fragment
//! (with `default_blob_format` applied as a best-effort heuristic for shape
//! names that look blob-like). It exists so the pipeline is exercisable
//! end-to-end in tests, the same way `NoResolve` gives the teacher's
//! `Resolve` trait a trivial but real implementation.

use std::collections::HashSet;

use indexmap::IndexMap;
use resourcegen_model::{Model, Result, ShapeId, ShapeKind};
use serde_json::json;

use crate::converter::{Converter, SchemaDocument};
use crate::schema::Schema;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

#[derive(Debug, Clone)]
pub struct NaiveConverter {
    default_blob_format: String,
}

impl NaiveConverter {
    #[must_use]
    pub fn new(default_blob_format: impl Into<String>) -> Self {
        Self {
            default_blob_format: default_blob_format.into(),
        }
    }

    fn scalar_schema(&self, id: &ShapeId) -> Schema {
        if id.name().to_lowercase().contains("blob") {
            json!({ "type": "string", "format": self.default_blob_format })
        } else {
            json!({ "type": "string" })
        }
    }

    fn object_schema(
        &self,
        model: &dyn Model,
        id: &ShapeId,
        definitions: &mut IndexMap<String, Schema>,
        in_progress: &mut HashSet<ShapeId>,
    ) -> Schema {
        let mut properties = serde_json::Map::new();
        if let Some(structure) = model.structure(id) {
            for member in structure.members.values() {
                properties.insert(
                    member.name.clone(),
                    self.schema_for(model, &member.target, definitions, in_progress),
                );
            }
        } else {
            tracing::debug!(%id, "structure not found while converting; emitting empty object");
        }
        json!({ "type": "object", "properties": properties })
    }

    fn schema_for(
        &self,
        model: &dyn Model,
        id: &ShapeId,
        definitions: &mut IndexMap<String, Schema>,
        in_progress: &mut HashSet<ShapeId>,
    ) -> Schema {
        match model.shape_kind(id) {
            Some(ShapeKind::Structure) => {
                let pointer = format!("{DEFINITIONS_PREFIX}{}", id.name());
                if !definitions.contains_key(&pointer) && in_progress.insert(id.clone()) {
                    let schema = self.object_schema(model, id, definitions, in_progress);
                    definitions.insert(pointer.clone(), schema);
                    in_progress.remove(id);
                }
                json!({ "$ref": pointer })
            }
            _ => self.scalar_schema(id),
        }
    }
}

impl Converter for NaiveConverter {
    fn convert(&self, model: &dyn Model, root: &ShapeId) -> Result<SchemaDocument> {
        let mut definitions = IndexMap::new();
        let mut in_progress = HashSet::new();
        in_progress.insert(root.clone());
        let root_schema = self.object_schema(model, root, &mut definitions, &mut in_progress);
        Ok(SchemaDocument {
            root_schema,
            definitions,
        })
    }
}
