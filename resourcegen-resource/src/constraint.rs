bitflags::bitflags! {
    /// A mutability constraint set (§3, `ConstraintType`).
    ///
    /// An empty set is the "fully mutable" marker. By the end of derivation
    /// every property's set holds at most one bit (§4.B.4's tail collapse),
    /// but the set representation is what makes the updaters in this module
    /// naturally composable during derivation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConstraintSet: u8 {
        const READ_ONLY   = 0b001;
        const CREATE_ONLY = 0b010;
        const WRITE_ONLY  = 0b100;
    }
}

/// The collapsed, at-most-one-element view of a [`ConstraintSet`] (§9:
/// "Implementations may choose either representation internally provided
/// the collapse precedence in §4.B.4 is honored").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    ReadOnly,
    CreateOnly,
    WriteOnly,
    Mutable,
}

impl ConstraintSet {
    /// Collapses this set to its single-variant view, preferring the most
    /// restrictive constraint — read-only, then create-only, then
    /// write-only — if more than one bit happens to be set. The derivation
    /// updaters never actually produce such a set; this order only matters
    /// if one is encountered from elsewhere.
    #[must_use]
    pub fn collapse(self) -> Mutability {
        if self.contains(ConstraintSet::READ_ONLY) {
            Mutability::ReadOnly
        } else if self.contains(ConstraintSet::CREATE_ONLY) {
            Mutability::CreateOnly
        } else if self.contains(ConstraintSet::WRITE_ONLY) {
            Mutability::WriteOnly
        } else {
            Mutability::Mutable
        }
    }
}

/// `add_read_only(S) = S ∪ {READ_ONLY}` — always adds, never removes.
#[must_use]
pub fn add_read_only(s: ConstraintSet) -> ConstraintSet {
    s | ConstraintSet::READ_ONLY
}

/// `add_create_only(S) = (S \ {READ_ONLY}) ∪ {CREATE_ONLY}` — create
/// strictly upgrades a previously read-only signal.
#[must_use]
pub fn add_create_only(s: ConstraintSet) -> ConstraintSet {
    (s - ConstraintSet::READ_ONLY) | ConstraintSet::CREATE_ONLY
}

/// If `S` already contains `READ_ONLY` or `CREATE_ONLY`, removes both and
/// yields the empty set (fully mutable: readable and writable collapses to
/// mutable). Otherwise yields `S ∪ {WRITE_ONLY}`.
#[must_use]
pub fn add_write_only(s: ConstraintSet) -> ConstraintSet {
    if s.intersects(ConstraintSet::READ_ONLY | ConstraintSet::CREATE_ONLY) {
        ConstraintSet::empty()
    } else {
        s | ConstraintSet::WRITE_ONLY
    }
}

/// The identity updater used for the additional-schemas pass (§4.B.5):
/// members are added as fully mutable but never upgraded by a later pass.
#[must_use]
pub fn identity(s: ConstraintSet) -> ConstraintSet {
    s
}
