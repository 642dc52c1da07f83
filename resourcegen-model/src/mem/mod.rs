//! A trivial, in-process [`Model`](crate::Model) implementation.
//!
//! The real IR loader (the parser of the source description language) is
//! out of scope (§1) — this module exists so the rest of the engine, and
//! its tests, have a concrete model to query without depending on one. It
//! plays the same role `grill-core::resolve::NoResolve`/the blanket `Resolve`
//! impls for `HashMap`/`BTreeMap` play for the teacher's `Resolve` trait:
//! a real, if minimal, implementation of an otherwise-pluggable interface.

mod builder;

pub use builder::ModelBuilder;

use indexmap::{IndexMap, IndexSet};

use crate::shape::{Member, ResourceShape, ServiceShape, ShapeKind, StructureShape};
use crate::traits::{TraitId, TraitValue};
use crate::{Model, ShapeId};

/// An immutable, fully in-memory model, built with [`ModelBuilder`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    pub(crate) resources: IndexMap<ShapeId, ResourceShape>,
    pub(crate) services: IndexMap<ShapeId, ServiceShape>,
    pub(crate) structures: IndexMap<ShapeId, StructureShape>,
    pub(crate) members: IndexMap<ShapeId, Member>,
    pub(crate) shape_kinds: IndexMap<ShapeId, ShapeKind>,
    pub(crate) traits: IndexMap<ShapeId, IndexMap<TraitId, TraitValue>>,
    pub(crate) operation_inputs: IndexMap<ShapeId, ShapeId>,
    pub(crate) operation_outputs: IndexMap<ShapeId, ShapeId>,
    pub(crate) identifier_bindings: IndexMap<(ShapeId, ShapeId), IndexMap<String, String>>,
}

impl InMemoryModel {
    #[must_use]
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }
}

impl Model for InMemoryModel {
    fn enumerate_resources(&self) -> Vec<ShapeId> {
        self.resources.keys().cloned().collect()
    }

    fn resource(&self, id: &ShapeId) -> Option<&ResourceShape> {
        self.resources.get(id)
    }

    fn service(&self, id: &ShapeId) -> Option<&ServiceShape> {
        self.services.get(id)
    }

    fn structure(&self, id: &ShapeId) -> Option<&StructureShape> {
        self.structures.get(id)
    }

    fn member(&self, id: &ShapeId) -> Option<&Member> {
        self.members.get(id)
    }

    fn shape_kind(&self, id: &ShapeId) -> Option<ShapeKind> {
        self.shape_kinds.get(id).copied()
    }

    fn get_trait(&self, shape: &ShapeId, trait_id: TraitId) -> Option<&TraitValue> {
        self.traits.get(shape).and_then(|traits| traits.get(&trait_id))
    }

    fn operation_input(&self, op: &ShapeId) -> Option<ShapeId> {
        self.operation_inputs.get(op).cloned()
    }

    fn operation_output(&self, op: &ShapeId) -> Option<ShapeId> {
        self.operation_outputs.get(op).cloned()
    }

    fn operation_identifier_bindings(
        &self,
        resource: &ShapeId,
        op: &ShapeId,
    ) -> IndexMap<String, String> {
        self.identifier_bindings
            .get(&(resource.clone(), op.clone()))
            .cloned()
            .unwrap_or_default()
    }

    fn transitive_resources(&self, service: &ShapeId) -> Vec<ShapeId> {
        let Some(service) = self.services.get(service) else {
            return Vec::new();
        };
        let mut seen = IndexSet::new();
        let mut stack: Vec<ShapeId> = service.resources.iter().rev().cloned().collect();
        let mut ordered = Vec::new();
        while let Some(id) = stack.pop() {
            if !seen.insert(id.clone()) {
                continue;
            }
            ordered.push(id.clone());
            if let Some(resource) = self.resources.get(&id) {
                for child in resource.resources.iter().rev() {
                    stack.push(child.clone());
                }
            }
        }
        ordered
    }
}
