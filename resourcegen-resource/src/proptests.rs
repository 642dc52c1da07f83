//! Property-based checks for the §8 universally-quantified invariants,
//! generated over random lifecycle placements of a handful of members —
//! the set-algebraic updaters of §4.B.4 are exactly the kind of thing
//! proptest is suited to.

use indexmap::IndexMap;
use proptest::prelude::*;
use resourcegen_model::mem::InMemoryModel;
use resourcegen_model::{Member, ResourceShape, ShapeId, StructureShape, TraitValue};

use crate::constraint::{ConstraintSet, Mutability};
use crate::context::DerivationContext;

const NS: &str = "example.prop";
const MEMBER_NAMES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExplicitTrait {
    None,
    ReadOnly,
    CreateOnly,
    WriteOnly,
}

impl ExplicitTrait {
    fn trait_value(self) -> Option<TraitValue> {
        match self {
            Self::None => None,
            Self::ReadOnly => Some(TraitValue::ReadOnlyProperty),
            Self::CreateOnly => Some(TraitValue::CreateOnlyProperty),
            Self::WriteOnly => Some(TraitValue::WriteOnlyProperty),
        }
    }
}

fn explicit_trait_strategy() -> impl Strategy<Value = ExplicitTrait> {
    prop_oneof![
        Just(ExplicitTrait::None),
        Just(ExplicitTrait::ReadOnly),
        Just(ExplicitTrait::CreateOnly),
        Just(ExplicitTrait::WriteOnly),
    ]
}

#[derive(Debug, Clone, Copy)]
struct MemberPlacement {
    in_create: bool,
    create_trait: ExplicitTrait,
    in_read_output: bool,
    read_trait: ExplicitTrait,
    in_update: bool,
    update_trait: ExplicitTrait,
}

fn placement_strategy() -> impl Strategy<Value = MemberPlacement> {
    (
        any::<bool>(),
        explicit_trait_strategy(),
        any::<bool>(),
        explicit_trait_strategy(),
        any::<bool>(),
        explicit_trait_strategy(),
    )
        .prop_map(
            |(in_create, create_trait, in_read_output, read_trait, in_update, update_trait)| MemberPlacement {
                in_create,
                create_trait,
                in_read_output,
                read_trait,
                in_update,
                update_trait,
            },
        )
}

/// Builds a resource whose `create`/`read`/`update` lifecycle structures
/// carry `MEMBER_NAMES` according to `placements`, plus `identifier_count`
/// primary identifiers, and returns `(model, resource_id)`.
fn build_model(placements: &[MemberPlacement], has_put: bool, identifier_count: usize) -> (InMemoryModel, ShapeId) {
    let resource_id = ShapeId::new(NS, "PropResource");
    let string_target = ShapeId::new(NS, "String");

    let create_op = ShapeId::new(NS, "CreateProp");
    let create_input = ShapeId::new(NS, "CreatePropRequest");
    let read_op = ShapeId::new(NS, "GetProp");
    let read_output = ShapeId::new(NS, "GetPropResponse");
    let update_op = ShapeId::new(NS, "UpdateProp");
    let update_input = ShapeId::new(NS, "UpdatePropRequest");

    let mut create_structure = StructureShape::new(create_input.clone());
    let mut read_structure = StructureShape::new(read_output.clone());
    let mut update_structure = StructureShape::new(update_input.clone());

    let mut builder = InMemoryModel::builder().simple_shape(string_target.clone());

    for (name, placement) in MEMBER_NAMES.iter().zip(placements) {
        if placement.in_create {
            let id = create_input.with_member(*name);
            create_structure
                .members
                .insert((*name).to_string(), Member::new(id.clone(), *name, string_target.clone()));
            if let Some(value) = placement.create_trait.trait_value() {
                builder = builder.trait_on(id, value);
            }
        }
        if placement.in_read_output {
            let id = read_output.with_member(*name);
            read_structure
                .members
                .insert((*name).to_string(), Member::new(id.clone(), *name, string_target.clone()));
            if let Some(value) = placement.read_trait.trait_value() {
                builder = builder.trait_on(id, value);
            }
        }
        if placement.in_update {
            let id = update_input.with_member(*name);
            update_structure
                .members
                .insert((*name).to_string(), Member::new(id.clone(), *name, string_target.clone()));
            if let Some(value) = placement.update_trait.trait_value() {
                builder = builder.trait_on(id, value);
            }
        }
    }

    let mut identifiers = IndexMap::new();
    for i in 0..identifier_count {
        let name = format!("id{i}");
        let target = ShapeId::new(NS, format!("Identifier{i}"));
        builder = builder.simple_shape(target.clone());
        identifiers.insert(name, target);
    }

    let resource = ResourceShape {
        id: resource_id.clone(),
        identifiers,
        create: Some(create_op.clone()),
        read: Some(read_op.clone()),
        update: Some(update_op.clone()),
        put: if has_put { Some(ShapeId::new(NS, "PutProp")) } else { None },
        delete: None,
        list: None,
        resources: Vec::new(),
    };

    let model = builder
        .resource(resource)
        .operation(create_op, Some(create_input), None)
        .operation(read_op, None, Some(read_output))
        .operation(update_op, Some(update_input), None)
        .structure(create_structure)
        .structure(read_structure)
        .structure(update_structure)
        .build();

    (model, resource_id)
}

proptest! {
    /// §8 invariants 1, 3, 4 over randomly generated lifecycle placements.
    #[test]
    fn derivation_invariants_hold(
        placements in prop::collection::vec(placement_strategy(), MEMBER_NAMES.len()),
        has_put in any::<bool>(),
        identifier_count in 0usize..=2,
    ) {
        let (model, resource_id) = build_model(&placements, has_put, identifier_count);
        let ctx = DerivationContext::new(&model);

        // Invariant 4 — idempotence: repeated queries agree.
        let first = ctx.get_properties(&resource_id);
        let second = ctx.get_properties(&resource_id);
        prop_assert_eq!(&first, &second);

        // Invariant 3 — identifier subsets.
        let primary = ctx.get_primary_identifiers(&resource_id);
        for name in &primary {
            prop_assert!(first.contains_key(name));
        }
        for set in ctx.get_additional_identifiers(&resource_id) {
            for name in &set {
                prop_assert!(first.contains_key(name));
            }
        }

        // Invariant 1 — each property belongs to exactly one of
        // {read_only, create_only, write_only, fully_mutable}.
        let read_only: std::collections::HashSet<_> = ctx.get_read_only_properties(&resource_id).into_iter().collect();
        let create_only: std::collections::HashSet<_> = ctx.get_create_only_properties(&resource_id).into_iter().collect();
        let write_only: std::collections::HashSet<_> = ctx.get_write_only_properties(&resource_id).into_iter().collect();
        for (name, def) in &first {
            let mutability = def.constraints.collapse();
            prop_assert_eq!(mutability == Mutability::ReadOnly, read_only.contains(name));
            prop_assert_eq!(mutability == Mutability::CreateOnly, create_only.contains(name));
            prop_assert_eq!(mutability == Mutability::WriteOnly, write_only.contains(name));
            prop_assert_eq!(
                mutability == Mutability::Mutable,
                !read_only.contains(name) && !create_only.contains(name) && !write_only.contains(name)
            );
            prop_assert_eq!(mutability == Mutability::Mutable, def.constraints == ConstraintSet::empty());
        }

        // §4.B.4 updater asymmetry: an unannotated member present only in
        // read output and update input collapses to fully mutable.
        for (name, placement) in MEMBER_NAMES.iter().zip(&placements) {
            if !placement.in_create
                && placement.in_read_output
                && placement.read_trait == ExplicitTrait::None
                && placement.in_update
                && placement.update_trait == ExplicitTrait::None
            {
                prop_assert_eq!(first[*name].constraints, ConstraintSet::empty());
            }
        }
    }
}
