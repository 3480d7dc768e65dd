use serde_json::{json, Map, Value};
use transmute_core::KeyPath;

/// Parse dotted key-paths for test setup
#[allow(dead_code)]
pub fn paths(texts: &[&str]) -> Vec<KeyPath> {
    texts
        .iter()
        .map(|text| text.parse().expect("test key-path must parse"))
        .collect()
}

/// A small catalogue record with nested objects and an array of objects
#[allow(dead_code)]
pub fn sample_product() -> Value {
    json!({
        "id": "p-1",
        "name": "Desk lamp",
        "price": {"amount": 3900, "currency": "EUR", "internal_cost": 1200},
        "variants": [
            {"sku": "p-1-black", "stock": 4, "warehouse": "north"},
            {"sku": "p-1-white", "stock": 0, "warehouse": "south"}
        ],
        "audit": {"created_by": "importer", "batch": 17}
    })
}

/// `{"n": {"n": ... {"leaf": leaf} ...}}` nested `depth` times, built iteratively
///
/// Each level moves the previous one into a fresh map without re-serializing it.
#[allow(dead_code)]
pub fn nested_chain(depth: usize, leaf: Value) -> Value {
    let mut value = json!({ "leaf": leaf });
    for _ in 0..depth {
        let mut level = Map::new();
        level.insert("n".to_string(), value);
        value = Value::Object(level);
    }
    value
}

/// Drop a value without recursing through its nesting
#[allow(dead_code)]
pub fn dismantle(value: Value) {
    let mut stack = vec![value];
    while let Some(mut current) = stack.pop() {
        match &mut current {
            Value::Object(map) => stack.extend(std::mem::take(map).into_iter().map(|(_, v)| v)),
            Value::Array(items) => stack.append(items),
            _ => {}
        }
    }
}
