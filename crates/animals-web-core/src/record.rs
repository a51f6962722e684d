//! Field extraction for a single animal record.
//!
//! Records are duck-typed JSON objects. Every field is optional and falls back
//! to [`NOT_AVAILABLE`], except `type`, which is dropped from the output
//! entirely when it is missing or empty.

use serde::Serialize;
use serde_json::{Map, Value};

/// Text rendered in place of a missing field.
pub const NOT_AVAILABLE: &str = "N/A";

/// The fields of one record, resolved and ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub name: String,
    pub diet: String,
    pub location: String,
    /// `None` when the record has no usable `type`.
    pub animal_type: Option<String>,
}

impl RecordView {
    /// Resolve the renderable fields of `record`.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let characteristics = record.get("characteristics").and_then(Value::as_object);
        let field = |key: &str| characteristics.and_then(|c| c.get(key));

        let location = record
            .get("locations")
            .and_then(Value::as_array)
            .and_then(|locations| locations.first())
            .and_then(text);

        Self {
            name: or_not_available(record.get("name").and_then(text)),
            diet: or_not_available(field("diet").and_then(text)),
            location: or_not_available(location),
            animal_type: field("type").filter(|v| is_present(v)).and_then(text),
        }
    }
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render a scalar as text. Strings are taken raw, other values as their JSON
/// form. `null` counts as absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Empty strings, lists and objects, `false`, zero and `null` all count as missing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: Value) -> RecordView {
        RecordView::from_record(value.as_object().unwrap())
    }

    #[test]
    fn test_full_record() {
        let v = view(json!({
            "name": "Fox",
            "characteristics": {"diet": "Omnivore", "type": "Mammal"},
            "locations": ["Forest", "Tundra"]
        }));
        assert_eq!(v.name, "Fox");
        assert_eq!(v.diet, "Omnivore");
        assert_eq!(v.location, "Forest");
        assert_eq!(v.animal_type.as_deref(), Some("Mammal"));
    }

    #[test]
    fn test_empty_record_falls_back() {
        let v = view(json!({}));
        assert_eq!(v.name, NOT_AVAILABLE);
        assert_eq!(v.diet, NOT_AVAILABLE);
        assert_eq!(v.location, NOT_AVAILABLE);
        assert!(v.animal_type.is_none());
    }

    #[test]
    fn test_empty_locations() {
        let v = view(json!({"name": "Owl", "locations": []}));
        assert_eq!(v.location, NOT_AVAILABLE);
    }

    #[test]
    fn test_empty_type_is_dropped() {
        let v = view(json!({"characteristics": {"type": ""}}));
        assert!(v.animal_type.is_none());
        let v = view(json!({"characteristics": {"type": null}}));
        assert!(v.animal_type.is_none());
    }

    #[test]
    fn test_falsy_type_values_are_dropped() {
        for empty in [json!(false), json!([]), json!({}), json!(0), json!(0.0)] {
            let v = view(json!({"characteristics": {"type": empty.clone()}}));
            assert!(v.animal_type.is_none(), "type {empty} should be dropped");
        }
    }

    #[test]
    fn test_non_empty_non_string_type_is_kept() {
        let v = view(json!({"characteristics": {"type": 3}}));
        assert_eq!(v.animal_type.as_deref(), Some("3"));
        let v = view(json!({"characteristics": {"type": ["Bird"]}}));
        assert_eq!(v.animal_type.as_deref(), Some("[\"Bird\"]"));
    }

    #[test]
    fn test_non_object_characteristics_treated_as_empty() {
        let v = view(json!({"characteristics": "carnivore"}));
        assert_eq!(v.diet, NOT_AVAILABLE);
        assert!(v.animal_type.is_none());
    }

    #[test]
    fn test_non_string_scalars_render_as_json() {
        let v = view(json!({"name": 42, "locations": [true]}));
        assert_eq!(v.name, "42");
        assert_eq!(v.location, "true");
    }

    #[test]
    fn test_null_name_is_absent() {
        let v = view(json!({"name": null}));
        assert_eq!(v.name, NOT_AVAILABLE);
    }
}
