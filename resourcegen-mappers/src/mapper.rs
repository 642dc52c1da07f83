use resourcegen_model::Result;
use resourcegen_schema::{Build, ResourceSchema};
use serde_json::Value;

use crate::context::Context;

/// A pipeline stage that decorates or post-processes a resource schema
/// (§4.E). All three hooks are optional — the default implementations are
/// the identity — mirroring the teacher's `Keyword` trait, whose hooks
/// beyond `compile`/`evaluate` all default to a no-op
/// (`grill-core/src/keyword.rs`).
#[allow(unused_variables)]
pub trait Mapper: std::fmt::Debug {
    /// Fixed ordering key; ties break by insertion order in the mapper list
    /// (§9).
    fn order(&self) -> i8 {
        0
    }

    /// Called in ascending `order` before properties are populated from the
    /// schema converter.
    fn before(&self, context: &Context<'_>, builder: Build) -> Result<Build> {
        Ok(builder)
    }

    /// Called in ascending `order` after the [`ResourceSchema`] is built.
    fn after(&self, context: &Context<'_>, schema: ResourceSchema) -> Result<ResourceSchema> {
        Ok(schema)
    }

    /// Called in ascending `order` on the serialized document tree.
    fn update_node(&self, context: &Context<'_>, schema: &ResourceSchema, node: Value) -> Value {
        node
    }
}

/// Sorts `mappers` by [`Mapper::order`] ascending, stable (ties break by
/// insertion order, §9).
pub fn sorted<'a>(mappers: &'a [Box<dyn Mapper>]) -> Vec<&'a dyn Mapper> {
    let mut indexed: Vec<(usize, &dyn Mapper)> = mappers.iter().map(|m| m.as_ref()).enumerate().collect();
    indexed.sort_by_key(|(index, mapper)| (mapper.order(), *index));
    indexed.into_iter().map(|(_, mapper)| mapper).collect()
}
