use serde_json::{json, Map, Value};

use crate::schema::ResourceSchema;

/// Serializes a [`ResourceSchema`] to its canonical document form (§4.F):
/// every field is emitted only if non-default (empty lists/maps omitted; a
/// property's `insertionOrder` flag omitted when false); `description` and
/// `typeName` are always present; every map preserves insertion order
/// (`serde_json::Value`'s `preserve_order` feature keeps this true all the
/// way down to `serde_json::Map`).
#[must_use]
pub fn to_node(schema: &ResourceSchema) -> Value {
    let mut node = Map::new();
    node.insert("typeName".into(), json!(schema.type_name));
    node.insert("description".into(), json!(schema.description));

    if let Some(url) = &schema.source_url {
        node.insert("sourceUrl".into(), json!(url));
    }
    if let Some(url) = &schema.documentation_url {
        node.insert("documentationUrl".into(), json!(url));
    }
    if !schema.definitions.is_empty() {
        let mut definitions = Map::new();
        for (pointer, definition) in &schema.definitions {
            definitions.insert(pointer.clone(), definition.clone());
        }
        node.insert("definitions".into(), Value::Object(definitions));
    }

    let mut properties = Map::new();
    for (name, property) in &schema.properties {
        let mut property_node = property.schema.clone();
        if property.insertion_order {
            if let Value::Object(map) = &mut property_node {
                map.insert("insertionOrder".into(), json!(true));
            }
        }
        properties.insert(name.clone(), property_node);
    }
    node.insert("properties".into(), Value::Object(properties));

    if !schema.read_only_properties.is_empty() {
        node.insert("readOnlyProperties".into(), json!(schema.read_only_properties));
    }
    if !schema.write_only_properties.is_empty() {
        node.insert("writeOnlyProperties".into(), json!(schema.write_only_properties));
    }
    if !schema.create_only_properties.is_empty() {
        node.insert("createOnlyProperties".into(), json!(schema.create_only_properties));
    }
    if !schema.deprecated_properties.is_empty() {
        node.insert("deprecatedProperties".into(), json!(schema.deprecated_properties));
    }
    if !schema.primary_identifier.is_empty() {
        node.insert("primaryIdentifier".into(), json!(schema.primary_identifier));
    }
    if !schema.additional_identifiers.is_empty() {
        node.insert("additionalIdentifiers".into(), json!(schema.additional_identifiers));
    }
    if !schema.handlers.is_empty() {
        let mut handlers = Map::new();
        for (lifecycle, handler) in &schema.handlers {
            handlers.insert(lifecycle.clone(), json!({ "permissions": handler.permissions }));
        }
        node.insert("handlers".into(), Value::Object(handlers));
    }

    Value::Object(node)
}
