use resourcegen_schema::ResourceSchema;
use serde_json::Value;
use tracing::warn;

use crate::context::Context;
use crate::mapper::Mapper;

/// Applies each configured `(json_pointer, value)` pair to the serialized
/// document tree, last and on the node itself so every other mapper's
/// contribution is already present (§4.E, order 96). Each pointer is
/// resolved with "add" semantics: missing intermediate objects are created
/// along the way and any existing leaf value is overwritten, mirroring the
/// teacher's use of `jsonptr::Pointer` to address into a `Value`
/// (`grill-core/src/criterion.rs`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAddMapper;

impl Mapper for JsonAddMapper {
    fn order(&self) -> i8 {
        96
    }

    fn update_node(&self, context: &Context<'_>, _schema: &ResourceSchema, mut node: Value) -> Value {
        for (pointer, value) in &context.configuration.json_add {
            match jsonptr::Pointer::parse(pointer) {
                Ok(parsed) => add(&mut node, &parsed.to_string(), value.clone()),
                Err(_) => warn!(pointer, "skipping malformed json_add pointer"),
            }
        }
        node
    }
}

/// Walks `pointer` into `root`, creating any missing intermediate objects,
/// and sets the final segment to `value`.
fn add(root: &mut Value, pointer: &str, value: Value) {
    let tokens: Vec<String> = decode_tokens(pointer);
    let Some((last, parents)) = tokens.split_last() else {
        *root = value;
        return;
    };

    let mut current = root;
    for token in parents {
        if !current.is_object() {
            *current = Value::Object(serde_json::Map::new());
        }
        let map = current.as_object_mut().expect("just coerced to an object");
        current = map.entry(token.clone()).or_insert_with(|| Value::Object(serde_json::Map::new()));
    }

    if !current.is_object() {
        *current = Value::Object(serde_json::Map::new());
    }
    current
        .as_object_mut()
        .expect("just coerced to an object")
        .insert(last.clone(), value);
}

/// Splits an RFC 6901 pointer string into its decoded reference tokens.
fn decode_tokens(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect()
}
