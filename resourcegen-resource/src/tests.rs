use indexmap::IndexMap;
use resourcegen_model::mem::InMemoryModel;
use resourcegen_model::{Member, ResourceShape, ShapeId, StructureShape, TraitValue};

use crate::constraint::{ConstraintSet, Mutability};
use crate::context::DerivationContext;

fn string_shape(ns: &str) -> ShapeId {
    ShapeId::new(ns, "String")
}

/// §8 Scenario 1 — Foo (create/read/update, no put).
#[test]
fn scenario_1_foo_create_read_update() {
    let ns = "example.foo";
    let resource_id = ShapeId::new(ns, "FooResource");
    let foo_id_target = ShapeId::new(ns, "FooIdentifier");
    let string_target = string_shape(ns);

    let create_op = ShapeId::new(ns, "CreateFoo");
    let create_input = ShapeId::new(ns, "CreateFooRequest");
    let create_member = create_input.with_member("fooValidCreateProperty");

    let read_op = ShapeId::new(ns, "GetFoo");
    let read_output = ShapeId::new(ns, "GetFooResponse");
    let read_foo_id_member = read_output.with_member("fooId");
    let read_valid_member = read_output.with_member("fooValidReadProperty");
    let read_mutable_member = read_output.with_member("fooValidFullyMutableProperty");

    let update_op = ShapeId::new(ns, "UpdateFoo");
    let update_input = ShapeId::new(ns, "UpdateFooRequest");
    let update_write_member = update_input.with_member("fooValidWriteProperty");
    let update_mutable_member = update_input.with_member("fooValidFullyMutableProperty");

    let mut create_structure = StructureShape::new(create_input.clone());
    create_structure.members.insert(
        "fooValidCreateProperty".into(),
        Member::new(create_member.clone(), "fooValidCreateProperty", string_target.clone()),
    );

    let mut read_structure = StructureShape::new(read_output.clone());
    read_structure.members.insert(
        "fooId".into(),
        Member::new(read_foo_id_member, "fooId", foo_id_target.clone()),
    );
    read_structure.members.insert(
        "fooValidReadProperty".into(),
        Member::new(read_valid_member.clone(), "fooValidReadProperty", string_target.clone()),
    );
    read_structure.members.insert(
        "fooValidFullyMutableProperty".into(),
        Member::new(read_mutable_member, "fooValidFullyMutableProperty", string_target.clone()),
    );

    let mut update_structure = StructureShape::new(update_input.clone());
    update_structure.members.insert(
        "fooValidWriteProperty".into(),
        Member::new(update_write_member.clone(), "fooValidWriteProperty", string_target.clone()),
    );
    update_structure.members.insert(
        "fooValidFullyMutableProperty".into(),
        Member::new(update_mutable_member, "fooValidFullyMutableProperty", string_target.clone()),
    );

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .simple_shape(foo_id_target.clone())
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::from([("fooId".to_string(), foo_id_target)]),
            create: Some(create_op.clone()),
            read: Some(read_op.clone()),
            update: Some(update_op.clone()),
            put: None,
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(create_op, Some(create_input), None)
        .operation(read_op.clone(), None, Some(read_output.clone()))
        .operation(update_op, Some(update_input), None)
        .identifier_bindings(
            resource_id.clone(),
            read_op,
            IndexMap::from([("fooId".to_string(), "fooId".to_string())]),
        )
        .structure(create_structure)
        .structure(read_structure)
        .structure(update_structure)
        .trait_on(create_member, TraitValue::CreateOnlyProperty)
        .trait_on(read_valid_member, TraitValue::ReadOnlyProperty)
        .trait_on(update_write_member, TraitValue::WriteOnlyProperty)
        .build();

    let ctx = DerivationContext::new(&model);
    let properties = ctx.get_properties(&resource_id);

    assert_eq!(ctx.get_primary_identifiers(&resource_id), ["fooId".to_string()].into());
    assert!(ctx.get_additional_identifiers(&resource_id).is_empty());

    assert_eq!(properties["fooId"].constraints.collapse(), Mutability::ReadOnly);
    assert_eq!(
        properties["fooValidCreateProperty"].constraints.collapse(),
        Mutability::CreateOnly
    );
    assert_eq!(
        properties["fooValidReadProperty"].constraints.collapse(),
        Mutability::ReadOnly
    );
    assert_eq!(
        properties["fooValidWriteProperty"].constraints.collapse(),
        Mutability::WriteOnly
    );
    assert_eq!(
        properties["fooValidFullyMutableProperty"].constraints,
        ConstraintSet::empty()
    );
}

/// §8 Scenario 2 — Bar (put + read + additionalSchema + excludeProperty +
/// additionalIdentifier).
#[test]
fn scenario_2_bar_put_read_additional_schema() {
    let ns = "example.bar";
    let resource_id = ShapeId::new(ns, "BarResource");
    let bar_id_target = ShapeId::new(ns, "BarIdentifier");
    let string_target = string_shape(ns);

    let put_op = ShapeId::new(ns, "PutBar");
    let put_input = ShapeId::new(ns, "PutBarRequest");
    let put_implicit_member = put_input.with_member("barImplicitWriteProperty");

    let read_op = ShapeId::new(ns, "GetBar");
    let read_input = ShapeId::new(ns, "GetBarRequest");
    let read_arn_member = read_input.with_member("arn");
    let read_output = ShapeId::new(ns, "GetBarResponse");
    let read_implicit_member = read_output.with_member("barImplicitReadProperty");

    let additional_schema = ShapeId::new(ns, "BarExtra");
    let additional_valid_member = additional_schema.with_member("barValidAdditionalProperty");
    let additional_excluded_member = additional_schema.with_member("barValidExcludedProperty");

    let mut put_structure = StructureShape::new(put_input.clone());
    put_structure.members.insert(
        "barImplicitWriteProperty".into(),
        Member::new(put_implicit_member, "barImplicitWriteProperty", string_target.clone()),
    );

    let mut read_input_structure = StructureShape::new(read_input.clone());
    read_input_structure.members.insert(
        "arn".into(),
        Member::new(read_arn_member.clone(), "arn", string_target.clone()),
    );

    let mut read_output_structure = StructureShape::new(read_output.clone());
    read_output_structure.members.insert(
        "barImplicitReadProperty".into(),
        Member::new(read_implicit_member, "barImplicitReadProperty", string_target.clone()),
    );

    let mut additional_structure = StructureShape::new(additional_schema.clone());
    additional_structure.members.insert(
        "barValidAdditionalProperty".into(),
        Member::new(
            additional_valid_member,
            "barValidAdditionalProperty",
            string_target.clone(),
        ),
    );
    additional_structure.members.insert(
        "barValidExcludedProperty".into(),
        Member::new(
            additional_excluded_member.clone(),
            "barValidExcludedProperty",
            string_target.clone(),
        ),
    );

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .simple_shape(bar_id_target.clone())
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::from([("barId".to_string(), bar_id_target)]),
            create: None,
            read: Some(read_op.clone()),
            update: None,
            put: Some(put_op.clone()),
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(put_op, Some(put_input), None)
        .operation(read_op, Some(read_input), Some(read_output))
        .structure(put_structure)
        .structure(read_input_structure)
        .structure(read_output_structure)
        .structure(additional_structure)
        .trait_on(read_arn_member, TraitValue::AdditionalIdentifier)
        .trait_on(additional_excluded_member, TraitValue::ExcludeProperty)
        .trait_on(
            resource_id.clone(),
            TraitValue::Resource {
                name: None,
                additional_schemas: vec![additional_schema],
            },
        )
        .build();

    let ctx = DerivationContext::new(&model);
    let properties = ctx.get_properties(&resource_id);

    assert_eq!(ctx.get_primary_identifiers(&resource_id), ["barId".to_string()].into());
    assert_eq!(properties["barId"].constraints.collapse(), Mutability::CreateOnly);

    let additional = ctx.get_additional_identifiers(&resource_id);
    assert_eq!(additional.len(), 1);
    assert!(additional[0].contains("arn"));
    assert_eq!(properties["arn"].constraints.collapse(), Mutability::ReadOnly);

    assert_eq!(
        properties["barImplicitReadProperty"].constraints.collapse(),
        Mutability::ReadOnly
    );
    assert_eq!(
        properties["barImplicitWriteProperty"].constraints.collapse(),
        Mutability::WriteOnly
    );
    assert_eq!(
        properties["barValidAdditionalProperty"].constraints,
        ConstraintSet::empty()
    );
    assert!(!properties.contains_key("barValidExcludedProperty"));
}

/// §8 Scenario 3 — Baz (nested, two identifiers, no put).
#[test]
fn scenario_3_baz_two_identifiers_no_put() {
    let ns = "example.baz";
    let resource_id = ShapeId::new(ns, "BazResource");
    let bar_id_target = ShapeId::new(ns, "BarIdentifier");
    let baz_id_target = ShapeId::new(ns, "BazIdentifier");
    let string_target = string_shape(ns);

    let create_op = ShapeId::new(ns, "CreateBaz");
    let create_input = ShapeId::new(ns, "CreateBazRequest");
    let create_member = create_input.with_member("bazImplicitCreateProperty");

    let read_op = ShapeId::new(ns, "GetBaz");
    let read_output = ShapeId::new(ns, "GetBazResponse");
    let read_member = read_output.with_member("bazImplicitReadProperty");

    let update_op = ShapeId::new(ns, "UpdateBaz");
    let update_input = ShapeId::new(ns, "UpdateBazRequest");
    let update_write_member = update_input.with_member("bazImplicitWriteProperty");
    let update_mutable_member = update_input.with_member("bazImplicitFullyMutableProperty");
    let read_mutable_member = read_output.with_member("bazImplicitFullyMutableProperty");

    let mut create_structure = StructureShape::new(create_input.clone());
    create_structure.members.insert(
        "bazImplicitCreateProperty".into(),
        Member::new(create_member, "bazImplicitCreateProperty", string_target.clone()),
    );

    let mut read_structure = StructureShape::new(read_output.clone());
    read_structure.members.insert(
        "bazImplicitReadProperty".into(),
        Member::new(read_member, "bazImplicitReadProperty", string_target.clone()),
    );
    read_structure.members.insert(
        "bazImplicitFullyMutableProperty".into(),
        Member::new(
            read_mutable_member,
            "bazImplicitFullyMutableProperty",
            string_target.clone(),
        ),
    );

    let mut update_structure = StructureShape::new(update_input.clone());
    update_structure.members.insert(
        "bazImplicitWriteProperty".into(),
        Member::new(update_write_member, "bazImplicitWriteProperty", string_target.clone()),
    );
    update_structure.members.insert(
        "bazImplicitFullyMutableProperty".into(),
        Member::new(
            update_mutable_member,
            "bazImplicitFullyMutableProperty",
            string_target.clone(),
        ),
    );

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .simple_shape(bar_id_target.clone())
        .simple_shape(baz_id_target.clone())
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::from([
                ("barId".to_string(), bar_id_target),
                ("bazId".to_string(), baz_id_target),
            ]),
            create: Some(create_op.clone()),
            read: Some(read_op.clone()),
            update: Some(update_op.clone()),
            put: None,
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(create_op, Some(create_input), None)
        .operation(read_op, None, Some(read_output))
        .operation(update_op, Some(update_input), None)
        .structure(create_structure)
        .structure(read_structure)
        .structure(update_structure)
        .build();

    let ctx = DerivationContext::new(&model);
    let properties = ctx.get_properties(&resource_id);
    let primary = ctx.get_primary_identifiers(&resource_id);

    assert_eq!(primary.len(), 2);
    assert!(primary.contains("barId") && primary.contains("bazId"));
    assert_eq!(properties["barId"].constraints.collapse(), Mutability::ReadOnly);
    assert_eq!(properties["bazId"].constraints.collapse(), Mutability::ReadOnly);
    assert_eq!(
        properties["bazImplicitCreateProperty"].constraints.collapse(),
        Mutability::CreateOnly
    );
    assert_eq!(
        properties["bazImplicitReadProperty"].constraints.collapse(),
        Mutability::ReadOnly
    );
    assert_eq!(
        properties["bazImplicitWriteProperty"].constraints.collapse(),
        Mutability::WriteOnly
    );
    assert_eq!(
        properties["bazImplicitFullyMutableProperty"].constraints,
        ConstraintSet::empty()
    );
}

/// §8 Scenario 4 — updater asymmetry: read-then-update collapses to fully
/// mutable because `add_write_only` removes a prior `READ_ONLY` signal.
#[test]
fn scenario_4_updater_asymmetry_read_then_update_is_mutable() {
    let ns = "example.asym";
    let resource_id = ShapeId::new(ns, "AsymResource");
    let string_target = string_shape(ns);

    let read_op = ShapeId::new(ns, "GetAsym");
    let read_output = ShapeId::new(ns, "GetAsymResponse");
    let read_member = read_output.with_member("m");

    let update_op = ShapeId::new(ns, "UpdateAsym");
    let update_input = ShapeId::new(ns, "UpdateAsymRequest");
    let update_member = update_input.with_member("m");

    let mut read_structure = StructureShape::new(read_output.clone());
    read_structure
        .members
        .insert("m".into(), Member::new(read_member, "m", string_target.clone()));

    let mut update_structure = StructureShape::new(update_input.clone());
    update_structure
        .members
        .insert("m".into(), Member::new(update_member, "m", string_target.clone()));

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::new(),
            create: None,
            read: Some(read_op.clone()),
            update: Some(update_op.clone()),
            put: None,
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(read_op, None, Some(read_output))
        .operation(update_op, Some(update_input), None)
        .structure(read_structure)
        .structure(update_structure)
        .build();

    let ctx = DerivationContext::new(&model);
    let properties = ctx.get_properties(&resource_id);
    assert_eq!(properties["m"].constraints, ConstraintSet::empty());
}

/// §8 invariant 4 — idempotence of the cached derivation table.
#[test]
fn derivation_is_idempotent() {
    let ns = "example.idem";
    let resource_id = ShapeId::new(ns, "IdemResource");
    let string_target = string_shape(ns);
    let read_op = ShapeId::new(ns, "GetIdem");
    let read_output = ShapeId::new(ns, "GetIdemResponse");
    let read_member = read_output.with_member("m");

    let mut read_structure = StructureShape::new(read_output.clone());
    read_structure
        .members
        .insert("m".into(), Member::new(read_member, "m", string_target.clone()));

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::new(),
            create: None,
            read: Some(read_op.clone()),
            update: None,
            put: None,
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(read_op, None, Some(read_output))
        .structure(read_structure)
        .build();

    let ctx = DerivationContext::new(&model);
    let first = ctx.get_properties(&resource_id);
    let second = ctx.get_properties(&resource_id);
    assert_eq!(first, second);
}

/// §3's `propertyName` trait overrides a member's external property name.
#[test]
fn property_name_trait_overrides_the_external_name() {
    let ns = "example.rename";
    let resource_id = ShapeId::new(ns, "RenameResource");
    let string_target = string_shape(ns);

    let read_op = ShapeId::new(ns, "GetRename");
    let read_output = ShapeId::new(ns, "GetRenameResponse");
    let renamed_member = read_output.with_member("internalName");

    let mut read_structure = StructureShape::new(read_output.clone());
    read_structure.members.insert(
        "internalName".into(),
        Member::new(renamed_member.clone(), "internalName", string_target.clone()),
    );

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::new(),
            create: None,
            read: Some(read_op.clone()),
            update: None,
            put: None,
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(read_op, None, Some(read_output))
        .structure(read_structure)
        .trait_on(renamed_member, TraitValue::PropertyName("ExternalName".into()))
        .build();

    let ctx = DerivationContext::new(&model);
    let properties = ctx.get_properties(&resource_id);
    assert!(properties.contains_key("ExternalName"));
    assert!(!properties.contains_key("internalName"));
    assert_eq!(properties["ExternalName"].constraints.collapse(), Mutability::ReadOnly);
}

/// §4.B.7 — an additional identifier that shares a name with a member
/// already explicitly constrained by another lifecycle pass keeps that
/// explicit constraint rather than being forced to `{READ_ONLY}`.
#[test]
fn additional_identifier_does_not_override_an_existing_explicit_constraint() {
    let ns = "example.addid";
    let resource_id = ShapeId::new(ns, "AddIdResource");
    let string_target = string_shape(ns);

    let read_op = ShapeId::new(ns, "GetAddId");
    let read_input = ShapeId::new(ns, "GetAddIdRequest");
    let read_arn_member = read_input.with_member("arn");
    let read_output = ShapeId::new(ns, "GetAddIdResponse");

    let create_op = ShapeId::new(ns, "CreateAddId");
    let create_input = ShapeId::new(ns, "CreateAddIdRequest");
    let create_arn_member = create_input.with_member("arn");

    let mut read_input_structure = StructureShape::new(read_input.clone());
    read_input_structure.members.insert(
        "arn".into(),
        Member::new(read_arn_member.clone(), "arn", string_target.clone()),
    );

    let mut create_structure = StructureShape::new(create_input.clone());
    create_structure.members.insert(
        "arn".into(),
        Member::new(create_arn_member.clone(), "arn", string_target.clone()),
    );

    let model = InMemoryModel::builder()
        .simple_shape(string_target)
        .resource(ResourceShape {
            id: resource_id.clone(),
            identifiers: IndexMap::new(),
            create: Some(create_op.clone()),
            read: Some(read_op.clone()),
            update: None,
            put: None,
            delete: None,
            list: None,
            resources: Vec::new(),
        })
        .operation(create_op, Some(create_input), None)
        .operation(read_op, Some(read_input), Some(read_output))
        .structure(read_input_structure)
        .structure(create_structure)
        .trait_on(read_arn_member, TraitValue::AdditionalIdentifier)
        .trait_on(create_arn_member, TraitValue::CreateOnlyProperty)
        .build();

    let ctx = DerivationContext::new(&model);
    let properties = ctx.get_properties(&resource_id);
    assert_eq!(properties["arn"].constraints.collapse(), Mutability::CreateOnly);
}
