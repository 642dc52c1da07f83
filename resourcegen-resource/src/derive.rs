use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use resourcegen_model::{Model, ResourceShape, ShapeId, ShapeKind, TraitId};

use crate::constraint::{add_create_only, add_read_only, add_write_only, identity, ConstraintSet};
use crate::property::ResourcePropertyDefinition;
use crate::table::DerivationTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Read,
    Put,
    Create,
    Update,
}

impl Lifecycle {
    /// Fixed processing order of §4.B.2.
    const ORDER: [Lifecycle; 4] = [Lifecycle::Read, Lifecycle::Put, Lifecycle::Create, Lifecycle::Update];

    fn operation_id(self, resource: &ResourceShape) -> Option<ShapeId> {
        match self {
            Lifecycle::Read => resource.read.clone(),
            Lifecycle::Put => resource.put.clone(),
            Lifecycle::Create => resource.create.clone(),
            Lifecycle::Update => resource.update.clone(),
        }
    }

    /// `read` uses the operation's output; every other lifecycle uses its input.
    fn structure_id(self, model: &dyn Model, op: &ShapeId) -> Option<ShapeId> {
        match self {
            Lifecycle::Read => model.operation_output(op),
            Lifecycle::Put | Lifecycle::Create | Lifecycle::Update => model.operation_input(op),
        }
    }

    fn default_constraints(self) -> ConstraintSet {
        match self {
            Lifecycle::Read => ConstraintSet::READ_ONLY,
            Lifecycle::Put => ConstraintSet::WRITE_ONLY,
            Lifecycle::Create => ConstraintSet::CREATE_ONLY,
            Lifecycle::Update => ConstraintSet::WRITE_ONLY,
        }
    }

    fn updater(self) -> fn(ConstraintSet) -> ConstraintSet {
        match self {
            Lifecycle::Read => add_read_only,
            Lifecycle::Put | Lifecycle::Update => add_write_only,
            Lifecycle::Create => add_create_only,
        }
    }
}

/// §3's `propertyName` trait: a member's external property name is its own
/// name unless overridden by an explicit `propertyName` trait value.
fn resolved_property_name(model: &dyn Model, member_id: &ShapeId, member_name: &str) -> String {
    model
        .get_trait(member_id, TraitId::PropertyName)
        .and_then(resourcegen_model::TraitValue::as_property_name)
        .map_or_else(|| member_name.to_string(), str::to_string)
}

/// §4.B.3: extracts the explicit constraint (if any) a member's own traits
/// carry, by priority: `readOnlyProperty` > `createOnlyProperty` >
/// `writeOnlyProperty` > none.
fn explicit_constraints_from_traits(model: &dyn Model, member_id: &ShapeId) -> ConstraintSet {
    if model.get_trait(member_id, TraitId::ReadOnlyProperty).is_some() {
        ConstraintSet::READ_ONLY
    } else if model.get_trait(member_id, TraitId::CreateOnlyProperty).is_some() {
        ConstraintSet::CREATE_ONLY
    } else if model.get_trait(member_id, TraitId::WriteOnlyProperty).is_some() {
        ConstraintSet::WRITE_ONLY
    } else {
        ConstraintSet::empty()
    }
}

/// §4.B.3: processes every member of `structure_id` against `properties`.
fn process_structure(
    model: &dyn Model,
    structure_id: &ShapeId,
    identifier_bound_member_names: &IndexSet<String>,
    default_constraints: ConstraintSet,
    updater: fn(ConstraintSet) -> ConstraintSet,
    properties: &mut IndexMap<String, ResourcePropertyDefinition>,
) {
    let Some(structure) = model.structure(structure_id) else {
        tracing::debug!(%structure_id, "structure not found in model; skipping");
        return;
    };
    for member in structure.members.values() {
        if identifier_bound_member_names.contains(&member.name) {
            continue;
        }
        let property_name = resolved_property_name(model, &member.id, &member.name);
        let explicit = explicit_constraints_from_traits(model, &member.id);
        let overwrite = match properties.get(&property_name) {
            None => true,
            Some(_) if !explicit.is_empty() => true,
            Some(_) => false,
        };
        if overwrite {
            properties.insert(
                property_name,
                ResourcePropertyDefinition {
                    shape_id: member.id.clone(),
                    constraints: if explicit.is_empty() { default_constraints } else { explicit },
                    has_explicit_constraints: !explicit.is_empty(),
                },
            );
        } else {
            let current = properties.get(&property_name).expect("checked above");
            if !current.has_explicit_constraints {
                let updated = updater(current.constraints);
                properties.get_mut(&property_name).expect("checked above").constraints = updated;
            }
        }
    }
}

/// §4.B.6: depth-first traversal collecting excluded member shape ids,
/// recursing into structure-kind targets and memoizing visited structures.
fn collect_excluded(
    model: &dyn Model,
    structure_id: &ShapeId,
    visited: &mut HashSet<ShapeId>,
    excluded: &mut IndexSet<ShapeId>,
) {
    if !visited.insert(structure_id.clone()) {
        return;
    }
    let Some(structure) = model.structure(structure_id) else {
        return;
    };
    for member in structure.members.values() {
        if model.get_trait(&member.id, TraitId::ExcludeProperty).is_some() {
            excluded.insert(member.id.clone());
        }
        if matches!(model.shape_kind(&member.target), Some(ShapeKind::Structure)) {
            collect_excluded(model, &member.target, visited, excluded);
        }
    }
}

/// §4.B.2's additional-identifier collection: a single-level scan of
/// `read`'s input structure for members carrying `additionalIdentifier`.
fn collect_additional_identifier_members(
    model: &dyn Model,
    structure_id: &ShapeId,
    out: &mut Vec<(String, ShapeId)>,
) {
    let Some(structure) = model.structure(structure_id) else {
        return;
    };
    for member in structure.members.values() {
        if model.get_trait(&member.id, TraitId::AdditionalIdentifier).is_some() {
            let property_name = resolved_property_name(model, &member.id, &member.name);
            out.push((property_name, member.id.clone()));
        }
    }
}

/// Runs the full derivation algorithm of §4.B for `resource` against
/// `model`, producing its [`DerivationTable`].
///
/// If `resource` does not resolve to a [`resourcegen_model::ResourceShape`]
/// in the model, an empty table is returned — validating that a queried
/// resource exists is the caller's responsibility (§1 non-goals).
#[must_use]
pub fn derive(model: &dyn Model, resource_id: &ShapeId) -> DerivationTable {
    let Some(resource) = model.resource(resource_id) else {
        tracing::warn!(%resource_id, "resource not found in model");
        return DerivationTable::default();
    };

    let mut properties: IndexMap<String, ResourcePropertyDefinition> = IndexMap::new();
    let mut primary_identifiers: IndexSet<String> = IndexSet::new();
    let mut excluded: IndexSet<ShapeId> = IndexSet::new();
    let mut visited_structures: HashSet<ShapeId> = HashSet::new();
    let mut additional_identifier_members: Vec<(String, ShapeId)> = Vec::new();

    // 4.B.1 — seed identifiers.
    let default_identifier_constraints = if resource.has_put() {
        ConstraintSet::CREATE_ONLY
    } else {
        ConstraintSet::READ_ONLY
    };
    for (name, target) in &resource.identifiers {
        primary_identifiers.insert(name.clone());
        properties.insert(
            name.clone(),
            ResourcePropertyDefinition {
                shape_id: target.clone(),
                constraints: default_identifier_constraints,
                has_explicit_constraints: true,
            },
        );
    }

    // 4.B.2/4.B.3 — process lifecycle operations in fixed order.
    for lifecycle in Lifecycle::ORDER {
        let Some(op_id) = lifecycle.operation_id(resource) else {
            continue;
        };
        let identifier_bound_member_names: IndexSet<String> = model
            .operation_identifier_bindings(resource_id, &op_id)
            .values()
            .cloned()
            .collect();

        if let Some(structure_id) = lifecycle.structure_id(model, &op_id) {
            process_structure(
                model,
                &structure_id,
                &identifier_bound_member_names,
                lifecycle.default_constraints(),
                lifecycle.updater(),
                &mut properties,
            );
            collect_excluded(model, &structure_id, &mut visited_structures, &mut excluded);
        }

        if lifecycle == Lifecycle::Read {
            if let Some(input_id) = model.operation_input(&op_id) {
                collect_additional_identifier_members(model, &input_id, &mut additional_identifier_members);
            }
        }
    }

    // 4.B.5 — additional schemas.
    if let Some(trait_value) = model.get_trait(resource_id, TraitId::Resource) {
        if let Some((_, additional_schemas)) = trait_value.as_resource() {
            for schema_id in additional_schemas {
                process_structure(
                    model,
                    schema_id,
                    &IndexSet::new(),
                    ConstraintSet::empty(),
                    identity,
                    &mut properties,
                );
                collect_excluded(model, schema_id, &mut visited_structures, &mut excluded);
            }
        }
    }

    // 4.B.7 — register additional identifiers: each must end up `{READ_ONLY}`
    // unless already explicitly constrained by some other lifecycle pass.
    let mut additional_identifiers: Vec<IndexSet<String>> = Vec::new();
    for (name, member_id) in additional_identifier_members {
        additional_identifiers.push(IndexSet::from([name.clone()]));
        match properties.get(&name) {
            Some(current) if current.has_explicit_constraints => {}
            _ => {
                properties.insert(
                    name,
                    ResourcePropertyDefinition {
                        shape_id: member_id,
                        constraints: ConstraintSet::READ_ONLY,
                        has_explicit_constraints: true,
                    },
                );
            }
        }
    }

    DerivationTable {
        properties,
        primary_identifiers,
        additional_identifiers,
        excluded_property_ids: excluded,
    }
}
