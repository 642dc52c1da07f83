use indexmap::IndexMap;
use resourcegen_mappers::{sorted, Configuration, Context, Mapper};
use resourcegen_model::error::error::{MissingDescriptionCtx, ShapeNotFoundCtx, ShapeTypeMismatchCtx};
use resourcegen_model::{Model, Result, ShapeId, ShapeKind, TraitId, TraitValue};
use resourcegen_resource::{AugmentedModel, DerivationContext};
use resourcegen_schema::{to_node, Converter, Property, ResourceSchema};
use serde_json::Value;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Human-readable name for a [`ShapeKind`], used only in
/// `ShapeTypeMismatch`'s message (§7).
fn shape_kind_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Service => "service",
        ShapeKind::Resource => "resource",
        ShapeKind::Structure => "structure",
        ShapeKind::Member => "member",
        ShapeKind::Operation => "operation",
        ShapeKind::Simple => "simple shape",
    }
}

/// Runs the full pipeline of §4.E.1 over every resource transitively
/// contained by `configuration.service`, returning the keyed map
/// `type_name -> node` (§4.E.1's emitted output).
///
/// # Errors
/// Returns an error (see `resourcegen_model::error::Error`) if the
/// configured service does not resolve (`ShapeNotFound`), resolves but is
/// not a service (`ShapeTypeMismatch`), a resource is missing its
/// `documentation` trait, or any mapper or the schema builder fails.
pub fn convert_service(
    model: &dyn Model,
    configuration: &Configuration,
    mappers: &[Box<dyn Mapper>],
    converter: &dyn Converter,
) -> Result<IndexMap<String, Value>> {
    let service_shape = match model.service(&configuration.service) {
        Some(shape) => shape,
        None => {
            return Err(match model.shape_kind(&configuration.service) {
                None | Some(ShapeKind::Service) => ShapeNotFoundCtx {
                    id: configuration.service.clone(),
                }
                .build(),
                Some(actual) => ShapeTypeMismatchCtx {
                    id: configuration.service.clone(),
                    expected: "service",
                    actual: shape_kind_name(actual),
                }
                .build(),
            });
        }
    };
    let service_name = configuration
        .service_name
        .clone()
        .unwrap_or_else(|| service_shape.id.name().to_string());

    let derivation = DerivationContext::new(model);
    let sorted_mappers = sorted(mappers);

    let mut output = IndexMap::new();
    for resource_id in model.transitive_resources(&configuration.service) {
        let Some(resource_trait) = model.get_trait(&resource_id, TraitId::Resource) else {
            tracing::warn!(%resource_id, "skipping contained shape without a resource trait");
            continue;
        };
        let (type_name, node) = convert_resource(
            model,
            &derivation,
            &resource_id,
            resource_trait,
            &service_shape.id,
            &service_name,
            configuration,
            &sorted_mappers,
            converter,
        )?;
        output.insert(type_name, node);
    }
    Ok(output)
}

#[allow(clippy::too_many_arguments)]
fn convert_resource<'m>(
    model: &'m dyn Model,
    derivation: &'m DerivationContext<'m>,
    resource_id: &ShapeId,
    resource_trait: &TraitValue,
    service_id: &ShapeId,
    service_name: &str,
    configuration: &Configuration,
    sorted_mappers: &[&dyn Mapper],
    converter: &dyn Converter,
) -> Result<(String, Value)> {
    tracing::debug!(%resource_id, "converting resource");

    let description = model
        .get_trait(resource_id, TraitId::Documentation)
        .and_then(|value| value.as_documentation())
        .map(str::to_string)
        .ok_or_else(|| {
            MissingDescriptionCtx {
                resource: resource_id.clone(),
            }
            .build()
        })?;

    let resource_name = resource_trait
        .as_resource()
        .and_then(|(name, _)| name)
        .map(str::to_string)
        .unwrap_or_else(|| resource_id.name().to_string());
    let type_name = format!(
        "{}::{}::{}",
        configuration.organization_name, service_name, resource_name
    );

    let properties = derivation.get_properties(resource_id);
    let augmented = AugmentedModel::new(model, resource_id, &properties);
    let synthetic_structure = augmented.synthetic_structure_id().clone();

    let context = Context {
        model,
        service: service_id.clone(),
        resource: resource_id.clone(),
        synthetic_structure: synthetic_structure.clone(),
        configuration,
        converter,
        derivation,
    };

    let document = converter.convert(&augmented, &synthetic_structure)?;
    let root_properties: IndexMap<String, Property> = document
        .root_properties()
        .into_iter()
        .map(|(name, schema)| (context.resolved_property_name(&name), Property::new(schema)))
        .collect();
    let definitions = document
        .definitions
        .into_iter()
        .map(|(pointer, schema)| {
            let name = pointer.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(&pointer).to_string();
            (name, schema)
        })
        .collect();

    let mut builder = ResourceSchema::build(resource_id.clone(), type_name.clone(), description, root_properties)
        .definitions(definitions);
    for mapper in sorted_mappers {
        builder = mapper.before(&context, builder)?;
    }
    let mut schema = builder.finish()?;
    for mapper in sorted_mappers {
        schema = mapper.after(&context, schema)?;
    }

    let mut node = to_node(&schema);
    for mapper in sorted_mappers {
        node = mapper.update_node(&context, &schema, node);
    }

    Ok((type_name, node))
}
