use indexmap::IndexMap;

use crate::ShapeId;

/// A single member of a structure: its own id (`ns#Struct$member`), its
/// external name within that structure, and the shape it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: ShapeId,
    pub name: String,
    pub target: ShapeId,
}

impl Member {
    #[must_use]
    pub fn new(id: ShapeId, name: impl Into<String>, target: ShapeId) -> Self {
        Self {
            id,
            name: name.into(),
            target,
        }
    }
}

/// An ordered structure shape: a sequence of named members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureShape {
    pub id: ShapeId,
    pub members: IndexMap<String, Member>,
}

impl StructureShape {
    #[must_use]
    pub fn new(id: ShapeId) -> Self {
        Self {
            id,
            members: IndexMap::new(),
        }
    }
}

/// A resource shape: its identifier map and its lifecycle operation bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceShape {
    pub id: ShapeId,
    /// Logical identifier name -> target shape id, insertion-ordered.
    pub identifiers: IndexMap<String, ShapeId>,
    pub create: Option<ShapeId>,
    pub read: Option<ShapeId>,
    pub update: Option<ShapeId>,
    pub put: Option<ShapeId>,
    pub delete: Option<ShapeId>,
    pub list: Option<ShapeId>,
    /// Sub-resources nested directly under this resource, in declaration
    /// order. Used by the transitive "contained resources" traversal (§4.E.1).
    pub resources: Vec<ShapeId>,
}

impl ResourceShape {
    #[must_use]
    pub fn new(id: ShapeId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Whether this resource defines a `put` lifecycle operation — the
    /// signal §4.B.1 uses to decide default identifier mutability.
    #[must_use]
    pub fn has_put(&self) -> bool {
        self.put.is_some()
    }
}

/// A service shape: namespace root for a transitive-resource walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceShape {
    pub id: ShapeId,
    /// Resources (and sub-resources) directly bound to this service, in
    /// declaration order.
    pub resources: Vec<ShapeId>,
}

impl ServiceShape {
    #[must_use]
    pub fn new(id: ShapeId) -> Self {
        Self {
            id,
            resources: Vec::new(),
        }
    }
}

/// The coarse kind of a resolved shape, used to stop the exclusion-trait
/// recursion of §4.B.6 at non-structure targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Service,
    Resource,
    Structure,
    Member,
    Operation,
    /// Any shape the core does not recurse into further (string, integer,
    /// boolean, list, map, blob, timestamp, enum, union, ...).
    Simple,
}
