//! Tolerant unwrapping of API response bodies.
//!
//! The backend wraps payloads inconsistently: some endpoints answer
//! `{ success, data: { orders: [...] } }`, some `{ orders: [...] }`, and a
//! few return the bare array. Loaders must try the deepest known nesting
//! first and fall back shallower, ending with an empty collection, so a
//! shape drift never turns into a panic or a rendering error.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract a collection from a response body.
///
/// Priority order: `body.data.<key>` -> `body.<key>` -> `body` as a bare
/// array -> empty. Never fails.
pub fn extract_list(body: &Value, key: &str) -> Vec<Value> {
    if let Some(arr) = body.get("data").and_then(|d| d.get(key)).and_then(Value::as_array) {
        return arr.clone();
    }
    if let Some(arr) = body.get(key).and_then(Value::as_array) {
        return arr.clone();
    }
    if let Some(arr) = body.as_array() {
        return arr.clone();
    }
    Vec::new()
}

/// Extract a collection and deserialize each element, skipping elements
/// that do not match the expected shape.
pub fn extract_list_as<T: DeserializeOwned>(body: &Value, key: &str) -> Vec<T> {
    extract_list(body, key)
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect()
}

/// Extract a single record from a response body.
///
/// Priority order: `body.data.<key>` -> `body.data` -> `body`.
pub fn extract_object(body: &Value, key: &str) -> Value {
    if let Some(obj) = body.get("data").and_then(|d| d.get(key)) {
        return obj.clone();
    }
    if let Some(obj) = body.get("data") {
        return obj.clone();
    }
    body.clone()
}

/// Extract a single record and deserialize it.
pub fn extract_object_as<T: DeserializeOwned>(body: &Value, key: &str) -> Option<T> {
    serde_json::from_value(extract_object(body, key)).ok()
}

/// Pull a human-readable message out of an error body.
///
/// Checks `message` then `error`, falling back to the supplied default.
pub fn error_message(body: &Value, fallback: &str) -> String {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_from_deep_nesting() {
        let body = json!({ "success": true, "data": { "products": [{ "a": 1 }, { "a": 2 }] } });
        assert_eq!(extract_list(&body, "products").len(), 2);
    }

    #[test]
    fn list_from_shallow_nesting() {
        let body = json!({ "products": [{ "a": 1 }] });
        assert_eq!(extract_list(&body, "products").len(), 1);
    }

    #[test]
    fn list_from_bare_array() {
        let body = json!([{ "a": 1 }, { "a": 2 }, { "a": 3 }]);
        assert_eq!(extract_list(&body, "products").len(), 3);
    }

    #[test]
    fn deep_nesting_wins_over_shallow() {
        let body = json!({
            "data": { "orders": [{ "n": 1 }] },
            "orders": [{ "n": 2 }, { "n": 3 }]
        });
        let list = extract_list(&body, "orders");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["n"], 1);
    }

    #[test]
    fn no_matching_key_yields_empty_not_error() {
        let body = json!({ "success": true, "data": { "somethingElse": 42 } });
        assert!(extract_list(&body, "orders").is_empty());
        assert!(extract_list(&json!(null), "orders").is_empty());
        assert!(extract_list(&json!("plain string"), "orders").is_empty());
    }

    #[test]
    fn typed_extraction_skips_malformed_elements() {
        #[derive(serde::Deserialize)]
        struct Row {
            n: i32,
        }
        let body = json!({ "data": { "rows": [{ "n": 1 }, { "bad": true }, { "n": 3 }] } });
        let rows: Vec<Row> = extract_list_as(&body, "rows");
        assert_eq!(rows.iter().map(|r| r.n).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn object_priority_order() {
        let body = json!({ "data": { "complaint": { "id": "c1" } } });
        assert_eq!(extract_object(&body, "complaint")["id"], "c1");

        let body = json!({ "data": { "id": "c2" } });
        assert_eq!(extract_object(&body, "complaint")["id"], "c2");

        let body = json!({ "id": "c3" });
        assert_eq!(extract_object(&body, "complaint")["id"], "c3");
    }

    #[test]
    fn error_message_priority() {
        assert_eq!(
            error_message(&json!({ "message": "boom", "error": "other" }), "fb"),
            "boom"
        );
        assert_eq!(error_message(&json!({ "error": "denied" }), "fb"), "denied");
        assert_eq!(error_message(&json!({}), "fb"), "fb");
    }
}
