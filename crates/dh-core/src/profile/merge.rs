use serde_json::{Map, Value};

/// Applies `patch` to `document` with merge semantics.
///
/// Objects merge key by key, recursively; every other value (arrays, strings,
/// numbers, booleans, null) replaces what was there. Fields the patch does not
/// mention are left alone.
pub fn merge_document(document: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, incoming) in patch {
        match incoming {
            Value::Object(nested) => {
                if let Some(Value::Object(existing)) = document.get_mut(&key) {
                    merge_document(existing, nested);
                } else {
                    document.insert(key, Value::Object(nested));
                }
            }
            other => {
                document.insert(key, other);
            }
        }
    }
}
