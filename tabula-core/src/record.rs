//! Record access for the filter engine
//!
//! A record is an opaque field map. The core only ever asks a record for the
//! text of one field, so anything that can answer that question through
//! [`Searchable`] can be filtered: JSON rows, typed structs, string maps.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;

/// One business entity row (bid, vendor, role, employee, invoice line).
pub type Record = Map<String, Value>;

/// Read access to a record's fields as text.
pub trait Searchable {
    /// Stringified value of the field at `key`, or `None` when the field is
    /// absent. Callers treat `None` as the empty string.
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl Searchable for Record {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        lookup_path(self, key).map(stringify)
    }
}

impl Searchable for Value {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self {
            Value::Object(map) => map.field_text(key),
            _ => None,
        }
    }
}

impl Searchable for HashMap<String, String> {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).field_text(key)
    }
}

/// Resolve a field key against a record.
///
/// A literal key wins; otherwise the key is read as a dotted path into
/// nested objects (`vendor.name`). Any missing segment, or a segment that
/// lands on a non-object, resolves to `None`.
pub fn lookup_path<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(path) {
        return Some(value);
    }

    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Render a JSON value the way it is matched against a search term.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::Array(items) => {
            let parts: Vec<Cow<'_, str>> = items.iter().map(stringify).collect();
            Cow::Owned(parts.join(","))
        }
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Convert a JSON value into a record, if it is an object.
pub fn into_record(value: Value) -> Option<Record> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vendor() -> Record {
        into_record(json!({
            "name": "Acme Supplies",
            "rating": 4.5,
            "active": true,
            "notes": null,
            "tags": ["office", "bulk"],
            "contact": { "email": "sales@acme.test", "phone": "555-0100" },
            "contact.legacy": "flat-key"
        }))
        .unwrap()
    }

    #[test]
    fn test_string_field_borrowed() {
        let record = vendor();
        let text = record.field_text("name").unwrap();
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "Acme Supplies");
    }

    #[test]
    fn test_scalar_fields_stringified() {
        let record = vendor();
        assert_eq!(record.field_text("rating").unwrap(), "4.5");
        assert_eq!(record.field_text("active").unwrap(), "true");
        assert_eq!(record.field_text("notes").unwrap(), "");
    }

    #[test]
    fn test_array_field_joined() {
        let record = vendor();
        assert_eq!(record.field_text("tags").unwrap(), "office,bulk");
    }

    #[test]
    fn test_nested_path_lookup() {
        let record = vendor();
        assert_eq!(record.field_text("contact.email").unwrap(), "sales@acme.test");
        assert!(record.field_text("contact.fax").is_none());
        assert!(record.field_text("name.first").is_none());
    }

    #[test]
    fn test_literal_dotted_key_wins() {
        let record = vendor();
        assert_eq!(record.field_text("contact.legacy").unwrap(), "flat-key");
    }

    #[test]
    fn test_object_field_is_json_text() {
        let record = vendor();
        let text = record.field_text("contact").unwrap();
        assert!(text.contains("\"email\":\"sales@acme.test\""));
    }

    #[test]
    fn test_missing_field_is_none() {
        let record = vendor();
        assert!(record.field_text("missing").is_none());
        assert!(record.field_text("").is_none());
    }

    #[test]
    fn test_value_non_object_has_no_fields() {
        assert!(json!("plain").field_text("name").is_none());
        assert_eq!(json!({"name": "x"}).field_text("name").unwrap(), "x");
    }

    #[test]
    fn test_string_map_searchable() {
        let mut row = HashMap::new();
        row.insert("status".to_string(), "Open".to_string());
        assert_eq!(row.field_text("status").unwrap(), "Open");
        assert!(row.field_text("name").is_none());
    }

    #[test]
    fn test_into_record_rejects_non_objects() {
        assert!(into_record(json!([1, 2])).is_none());
        assert!(into_record(json!({})).is_some());
    }
}
