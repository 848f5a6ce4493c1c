//! JSON Schema helpers.

use serde_json::Value;

/// Rewrites `\:` to `:` in every `pattern` keyword.
///
/// Published schemas escape colons, which is legal in the JavaScript regex
/// dialect they were written for but rejected by the `regex` crate.
pub fn sanitize_patterns(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                match value {
                    Value::String(pattern) if key == "pattern" => {
                        *pattern = pattern.replace("\\:", ":");
                    }
                    _ => sanitize_patterns(value),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitize_patterns),
        _ => {}
    }
}

/// `$id` of a schema document.
#[must_use]
pub fn schema_id(schema: &Value) -> Option<&str> {
    schema.get("$id").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escaped_colons_are_unescaped_in_patterns_only() {
        let mut schema = json!({
            "$id": "https://s.example/a\\:b",
            "properties": {
                "iri": {"type": "string", "pattern": "^https?\\://"},
                "list": {"items": [{"pattern": "a\\:b"}]}
            }
        });
        sanitize_patterns(&mut schema);
        assert_eq!(schema["properties"]["iri"]["pattern"], "^https?://");
        assert_eq!(schema["properties"]["list"]["items"][0]["pattern"], "a:b");
        assert_eq!(schema_id(&schema), Some("https://s.example/a\\:b"));
    }
}
