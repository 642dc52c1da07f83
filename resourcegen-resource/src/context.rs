use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};
use resourcegen_model::{Model, ShapeId};

use crate::constraint::Mutability;
use crate::derive::derive;
use crate::property::ResourcePropertyDefinition;
use crate::table::DerivationTable;

/// Owns the per-`(model, resource)` derivation cache for the lifetime of an
/// engine instance (§5: "write-once, read-many... the design expects a
/// single builder thread per engine instance").
///
/// Exposes the public queries of §4.B.8. All queries on a given resource
/// are backed by the same memoized [`DerivationTable`]; repeated calls
/// return equal results (§8 invariant 4, idempotence).
#[derive(Debug)]
pub struct DerivationContext<'m> {
    model: &'m dyn Model,
    cache: RefCell<HashMap<ShapeId, Rc<DerivationTable>>>,
}

impl<'m> DerivationContext<'m> {
    #[must_use]
    pub fn new(model: &'m dyn Model) -> Self {
        Self {
            model,
            cache: RefCell::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn model(&self) -> &'m dyn Model {
        self.model
    }

    /// Returns the memoized [`DerivationTable`] for `resource`, computing
    /// and caching it on first access.
    #[must_use]
    pub fn table(&self, resource: &ShapeId) -> Rc<DerivationTable> {
        if let Some(table) = self.cache.borrow().get(resource) {
            return Rc::clone(table);
        }
        tracing::debug!(%resource, "deriving resource property table");
        let table = Rc::new(derive(self.model, resource));
        self.cache.borrow_mut().insert(resource.clone(), Rc::clone(&table));
        table
    }

    #[must_use]
    pub fn get_properties(&self, resource: &ShapeId) -> IndexMap<String, ResourcePropertyDefinition> {
        self.table(resource).properties()
    }

    #[must_use]
    pub fn get_property(&self, resource: &ShapeId, name: &str) -> Option<ResourcePropertyDefinition> {
        self.get_properties(resource).get(name).cloned()
    }

    fn properties_with_mutability(&self, resource: &ShapeId, mutability: Mutability) -> Vec<String> {
        self.get_properties(resource)
            .into_iter()
            .filter(|(_, def)| def.constraints.collapse() == mutability)
            .map(|(name, _)| name)
            .collect()
    }

    #[must_use]
    pub fn get_create_only_properties(&self, resource: &ShapeId) -> Vec<String> {
        self.properties_with_mutability(resource, Mutability::CreateOnly)
    }

    #[must_use]
    pub fn get_read_only_properties(&self, resource: &ShapeId) -> Vec<String> {
        self.properties_with_mutability(resource, Mutability::ReadOnly)
    }

    #[must_use]
    pub fn get_write_only_properties(&self, resource: &ShapeId) -> Vec<String> {
        self.properties_with_mutability(resource, Mutability::WriteOnly)
    }

    #[must_use]
    pub fn get_excluded_properties(&self, resource: &ShapeId) -> IndexSet<ShapeId> {
        self.table(resource).excluded_property_ids.clone()
    }

    #[must_use]
    pub fn get_primary_identifiers(&self, resource: &ShapeId) -> IndexSet<String> {
        self.table(resource).primary_identifiers.clone()
    }

    #[must_use]
    pub fn get_additional_identifiers(&self, resource: &ShapeId) -> Vec<IndexSet<String>> {
        self.table(resource).additional_identifiers.clone()
    }
}
