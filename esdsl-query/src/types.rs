//! The two generic containers every builder is made of.

use serde_json::Value;

/// Ordered-key JSON object.
///
/// Backed by `serde_json::Map`, which without the `preserve_order` feature
/// keeps keys sorted. Encoded documents therefore always list keys in
/// ascending order.
pub type Object = serde_json::Map<String, Value>;

/// Ordered JSON sequence.
pub type Array = Vec<Value>;

/// A `{"<field>": {..options}}` body shared by the field-keyed clauses
/// (term, regexp, range, match family, terms_set, sort).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldBody {
    pub(crate) field: String,
    pub(crate) body: Object,
}

impl FieldBody {
    pub(crate) fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            body: Object::new(),
        }
    }

    pub(crate) fn with(field: impl Into<String>, key: &str, value: impl Into<Value>) -> Self {
        Self::new(field).put(key, value)
    }

    pub(crate) fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn remove(mut self, key: &str) -> Self {
        self.body.remove(key);
        self
    }

    /// `{field: body}`
    pub(crate) fn field_json(&self) -> Value {
        let mut outer = Object::new();
        outer.insert(self.field.clone(), Value::Object(self.body.clone()));
        Value::Object(outer)
    }

    /// `{kind: {field: body}}`
    pub(crate) fn to_json(&self, kind: &str) -> Value {
        wrap(kind, self.field_json())
    }
}

/// `{key: value}`
pub(crate) fn wrap(key: &str, value: Value) -> Value {
    let mut outer = Object::new();
    outer.insert(key.to_string(), value);
    Value::Object(outer)
}

pub(crate) fn string_array<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(items.into_iter().map(|s| Value::String(s.into())).collect())
}

pub(crate) fn value_array<I, V>(items: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Value::Array(items.into_iter().map(Into::into).collect())
}

/// Finds the first `null` in an encoded document.
///
/// Builders never write `null` for unset keys, so a `null` here came from a
/// non-finite float (`From<f64> for Value` turns NaN and infinities into
/// `null`) or an explicit null value. Either one is unencodable.
pub(crate) fn find_null(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Array(items) => items.iter().enumerate().find_map(|(index, item)| {
            find_null(item).map(|rest| join_path(&index.to_string(), rest))
        }),
        Value::Object(object) => object
            .iter()
            .find_map(|(key, item)| find_null(item).map(|rest| join_path(key, rest))),
        _ => None,
    }
}

fn join_path(head: &str, rest: String) -> String {
    if rest.is_empty() {
        head.to_string()
    } else {
        format!("{head}.{rest}")
    }
}

/// Error message for a document that holds a `null` at `path`.
pub(crate) fn null_message(path: &str) -> String {
    format!("unsupported value at `{path}`: null or non-finite number")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_keys_are_sorted() {
        let mut object = Object::new();
        object.insert("size".to_string(), json!(10));
        object.insert("_source".to_string(), json!(false));
        object.insert("query".to_string(), json!({}));

        let encoded = serde_json::to_string(&object).unwrap();
        assert_eq!(encoded, r#"{"_source":false,"query":{},"size":10}"#);
    }

    #[test]
    fn test_field_body_put_and_remove() {
        let body = FieldBody::new("age")
            .put("gt", 10)
            .put("lte", 20)
            .remove("gt")
            .put("lte", 30);

        assert_eq!(body.to_json("range"), json!({ "range": { "age": { "lte": 30 } } }));
    }

    #[test]
    fn test_arrays_keep_order_and_duplicates() {
        assert_eq!(string_array(["b", "a", "b"]), json!(["b", "a", "b"]));
        assert_eq!(value_array([3, 1, 3]), json!([3, 1, 3]));
    }

    #[test]
    fn test_find_null_reports_path() {
        let document = json!({
            "query": { "term": { "a": { "value": 1, "boost": f64::NAN } } },
            "sort": [{ "f": {} }]
        });
        assert_eq!(find_null(&document), Some("query.term.a.boost".to_string()));
        assert_eq!(find_null(&json!({ "terms": { "f": [1, f64::INFINITY] } })), Some("terms.f.1".to_string()));
        assert_eq!(find_null(&json!({ "query": { "match_all": {} } })), None);
    }
}
