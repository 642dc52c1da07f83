use indexmap::IndexMap;
use resourcegen_model::{Model, Result, ShapeId};

use crate::schema::Schema;

/// The output of a shape-to-schema conversion (§6): a root schema carrying
/// a top-level `properties` object, plus any named definitions the
/// converter chose to hoist out of line.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub root_schema: Schema,
    pub definitions: IndexMap<String, Schema>,
}

impl SchemaDocument {
    /// The root schema's `properties` object, if any, as an ordered map of
    /// property name to its schema fragment — the form §4.E.1's converter
    /// assembly step consumes directly.
    #[must_use]
    pub fn root_properties(&self) -> IndexMap<String, Schema> {
        self.root_schema
            .get("properties")
            .and_then(|value| value.as_object())
            .map(|object| {
                object
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The shape-to-schema converter (§1, §6): an external collaborator that
/// turns an arbitrary shape graph into a JSON schema. Treated as a trait,
/// mirroring the teacher's `Resolve` trait (`grill-core/src/resolve.rs`):
/// an interface the core consumes but never implements itself beyond a
/// trivial reference implementation ([`crate::naive::NaiveConverter`]).
pub trait Converter {
    /// Converts the shape rooted at `root` (typically the synthetic
    /// structure from §4.C) into a [`SchemaDocument`].
    ///
    /// # Errors
    /// Returns an error if `root` cannot be resolved or converted.
    fn convert(&self, model: &dyn Model, root: &ShapeId) -> Result<SchemaDocument>;
}
