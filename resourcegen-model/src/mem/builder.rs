use indexmap::IndexMap;

use super::InMemoryModel;
use crate::shape::{Member, ResourceShape, ServiceShape, ShapeKind, StructureShape};
use crate::traits::TraitValue;
use crate::ShapeId;

/// Fluent builder for [`InMemoryModel`], mirroring the teacher's
/// `Dialect::build(id) -> Build` / `Build::finish()` pattern
/// (`grill-core/src/schema/dialect.rs`).
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: InMemoryModel,
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn service(mut self, service: ServiceShape) -> Self {
        self.model.shape_kinds.insert(service.id.clone(), ShapeKind::Service);
        self.model.services.insert(service.id.clone(), service);
        self
    }

    #[must_use]
    pub fn resource(mut self, resource: ResourceShape) -> Self {
        self.model.shape_kinds.insert(resource.id.clone(), ShapeKind::Resource);
        self.model.resources.insert(resource.id.clone(), resource);
        self
    }

    #[must_use]
    pub fn structure(mut self, structure: StructureShape) -> Self {
        self.model.shape_kinds.insert(structure.id.clone(), ShapeKind::Structure);
        for member in structure.members.values() {
            self.model
                .shape_kinds
                .entry(member.id.clone())
                .or_insert(ShapeKind::Member);
            self.model.members.insert(member.id.clone(), member.clone());
        }
        self.model.structures.insert(structure.id.clone(), structure);
        self
    }

    /// Registers `id` as a non-structure, non-recursed-into shape (string,
    /// integer, boolean, list, map, ...).
    #[must_use]
    pub fn simple_shape(mut self, id: ShapeId) -> Self {
        self.model.shape_kinds.insert(id, ShapeKind::Simple);
        self
    }

    #[must_use]
    pub fn operation(mut self, op: ShapeId, input: Option<ShapeId>, output: Option<ShapeId>) -> Self {
        self.model.shape_kinds.insert(op.clone(), ShapeKind::Operation);
        if let Some(input) = input {
            self.model.operation_inputs.insert(op.clone(), input);
        }
        if let Some(output) = output {
            self.model.operation_outputs.insert(op, output);
        }
        self
    }

    #[must_use]
    pub fn identifier_bindings(
        mut self,
        resource: ShapeId,
        op: ShapeId,
        bindings: IndexMap<String, String>,
    ) -> Self {
        self.model.identifier_bindings.insert((resource, op), bindings);
        self
    }

    #[must_use]
    pub fn trait_on(mut self, shape: ShapeId, value: TraitValue) -> Self {
        self.model
            .traits
            .entry(shape)
            .or_default()
            .insert(value.id(), value);
        self
    }

    #[must_use]
    pub fn build(self) -> InMemoryModel {
        self.model
    }
}
