use indexmap::IndexMap;

use crate::shape::{Member, ResourceShape, ServiceShape, ShapeKind, StructureShape};
use crate::traits::{TraitId, TraitValue};
use crate::ShapeId;

/// Read-only query surface over a loaded IR model (§6, "Model query
/// interface").
///
/// The IR loader itself — parsing the source description language into
/// this graph — is out of scope (§1); this trait specifies exactly the
/// queries the rest of the engine makes against whatever produced the
/// graph.
pub trait Model {
    /// All resource shapes known to the model, in a deterministic order.
    fn enumerate_resources(&self) -> Vec<ShapeId>;

    fn resource(&self, id: &ShapeId) -> Option<&ResourceShape>;

    fn service(&self, id: &ShapeId) -> Option<&ServiceShape>;

    fn structure(&self, id: &ShapeId) -> Option<&StructureShape>;

    fn member(&self, id: &ShapeId) -> Option<&Member>;

    /// The coarse kind of `id`, used to bound the exclusion-trait recursion
    /// of §4.B.6 at non-structure targets.
    fn shape_kind(&self, id: &ShapeId) -> Option<ShapeKind>;

    /// The trait of kind `trait_id` attached to `shape`, if any.
    fn get_trait(&self, shape: &ShapeId, trait_id: TraitId) -> Option<&TraitValue>;

    fn operation_input(&self, op: &ShapeId) -> Option<ShapeId>;

    fn operation_output(&self, op: &ShapeId) -> Option<ShapeId>;

    /// Identifier name -> member name bound by `op`'s input for `resource`.
    ///
    /// An empty map means the operation does not bind any of the resource's
    /// identifiers (e.g. a `list` operation).
    fn operation_identifier_bindings(
        &self,
        resource: &ShapeId,
        op: &ShapeId,
    ) -> IndexMap<String, String>;

    /// All resources transitively contained by `service`, in a deterministic,
    /// insertion-order-derived sequence (§5: "the order of emitted resources
    /// follows the insertion order of the service's contained-resource
    /// traversal").
    fn transitive_resources(&self, service: &ShapeId) -> Vec<ShapeId>;
}
