use indexmap::IndexMap;
use resourcegen_model::{Member, Model, ResourceShape, ServiceShape, ShapeId, ShapeKind, StructureShape};
use resourcegen_model::{TraitId, TraitValue};

use crate::property::ResourcePropertyDefinition;

/// Synthesizes the pseudo-structure of §4.C: a structure shape aggregating
/// a resource's derived properties, suitable for handing to a
/// shape-to-schema converter.
#[must_use]
pub fn synthesize(
    model: &dyn Model,
    resource: &ShapeId,
    properties: &IndexMap<String, ResourcePropertyDefinition>,
) -> StructureShape {
    let synthetic_id = synthetic_id(resource);
    let mut structure = StructureShape::new(synthetic_id.clone());
    for (name, def) in properties {
        let member_id = synthetic_id.with_member(name);
        let target = model
            .member(&def.shape_id)
            .map(|original| original.target.clone())
            .unwrap_or_else(|| def.shape_id.clone());
        structure
            .members
            .insert(name.clone(), Member::new(member_id, name.clone(), target));
    }
    structure
}

#[must_use]
pub fn synthetic_id(resource: &ShapeId) -> ShapeId {
    ShapeId::new(resource.namespace(), format!("{}__SYNTHETIC__", resource.name()))
}

/// The "updated model" of §4.C: the original model, plus the synthesized
/// structure, plus each synthetic member's traits carried forward from the
/// original member it re-parents (§4.C: "same target, same traits").
pub struct AugmentedModel<'m> {
    base: &'m dyn Model,
    synthetic: StructureShape,
    synthetic_traits: IndexMap<ShapeId, IndexMap<TraitId, TraitValue>>,
}

impl<'m> AugmentedModel<'m> {
    #[must_use]
    pub fn new(
        base: &'m dyn Model,
        resource: &ShapeId,
        properties: &IndexMap<String, ResourcePropertyDefinition>,
    ) -> Self {
        let synthetic = synthesize(base, resource, properties);
        let mut synthetic_traits = IndexMap::new();
        for member in synthetic.members.values() {
            let Some(original_name) = properties.get(&member.name) else {
                continue;
            };
            let mut carried = IndexMap::new();
            for trait_id in known_member_trait_ids() {
                if let Some(value) = base.get_trait(&original_name.shape_id, trait_id) {
                    carried.insert(trait_id, value.clone());
                }
            }
            if !carried.is_empty() {
                synthetic_traits.insert(member.id.clone(), carried);
            }
        }
        Self {
            base,
            synthetic,
            synthetic_traits,
        }
    }

    #[must_use]
    pub fn synthetic_structure_id(&self) -> &ShapeId {
        &self.synthetic.id
    }
}

fn known_member_trait_ids() -> [TraitId; 9] {
    [
        TraitId::AdditionalIdentifier,
        TraitId::ExcludeProperty,
        TraitId::CreateOnlyProperty,
        TraitId::ReadOnlyProperty,
        TraitId::WriteOnlyProperty,
        TraitId::MutableProperty,
        TraitId::PropertyName,
        TraitId::Documentation,
        TraitId::Deprecated,
    ]
}

impl<'m> Model for AugmentedModel<'m> {
    fn enumerate_resources(&self) -> Vec<ShapeId> {
        self.base.enumerate_resources()
    }

    fn resource(&self, id: &ShapeId) -> Option<&ResourceShape> {
        self.base.resource(id)
    }

    fn service(&self, id: &ShapeId) -> Option<&ServiceShape> {
        self.base.service(id)
    }

    fn structure(&self, id: &ShapeId) -> Option<&StructureShape> {
        if *id == self.synthetic.id {
            Some(&self.synthetic)
        } else {
            self.base.structure(id)
        }
    }

    fn member(&self, id: &ShapeId) -> Option<&Member> {
        if id.root() == self.synthetic.id {
            id.member().and_then(|name| self.synthetic.members.get(name))
        } else {
            self.base.member(id)
        }
    }

    fn shape_kind(&self, id: &ShapeId) -> Option<ShapeKind> {
        if *id == self.synthetic.id {
            Some(ShapeKind::Structure)
        } else if id.root() == self.synthetic.id {
            Some(ShapeKind::Member)
        } else {
            self.base.shape_kind(id)
        }
    }

    fn get_trait(&self, shape: &ShapeId, trait_id: TraitId) -> Option<&TraitValue> {
        if let Some(carried) = self.synthetic_traits.get(shape) {
            if let Some(value) = carried.get(&trait_id) {
                return Some(value);
            }
        }
        self.base.get_trait(shape, trait_id)
    }

    fn operation_input(&self, op: &ShapeId) -> Option<ShapeId> {
        self.base.operation_input(op)
    }

    fn operation_output(&self, op: &ShapeId) -> Option<ShapeId> {
        self.base.operation_output(op)
    }

    fn operation_identifier_bindings(
        &self,
        resource: &ShapeId,
        op: &ShapeId,
    ) -> IndexMap<String, String> {
        self.base.operation_identifier_bindings(resource, op)
    }

    fn transitive_resources(&self, service: &ShapeId) -> Vec<ShapeId> {
        self.base.transitive_resources(service)
    }
}
