use resourcegen_model::ShapeId;

use crate::constraint::ConstraintSet;

/// A single derived property of a resource (§3, `ResourcePropertyDefinition`).
///
/// `has_explicit_constraints` freezes `constraints` against further
/// widening by implicit, lifecycle-driven derivation once an explicit
/// per-member trait (or identifier seeding) has fixed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePropertyDefinition {
    pub shape_id: ShapeId,
    pub constraints: ConstraintSet,
    pub has_explicit_constraints: bool,
}
