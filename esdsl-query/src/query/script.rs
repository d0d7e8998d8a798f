//! Scripts and the script query.

use crate::enums::ScriptLanguage;
use crate::types::{wrap, Object};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// An inline or stored script.
///
/// Used by the script query, `terms_set` and script-backed aggregations.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    body: Object,
}

impl Script {
    /// Inline script from source.
    pub fn source(source: impl Into<String>, lang: ScriptLanguage) -> Self {
        Self::with("source", source.into(), lang)
    }

    /// Stored script referenced by id.
    pub fn id(id: impl Into<String>, lang: ScriptLanguage) -> Self {
        Self::with("id", id.into(), lang)
    }

    fn with(key: &str, value: String, lang: ScriptLanguage) -> Self {
        let mut body = Object::new();
        body.insert("lang".to_string(), lang.into());
        body.insert(key.to_string(), Value::String(value));
        Self { body }
    }

    /// Add a script parameter.
    pub fn param(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.nested("params", key.into(), value.into())
    }

    /// Add a compiler option.
    pub fn option(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.nested("options", key.into(), Value::String(value.into()))
    }

    fn nested(mut self, section: &str, key: String, value: Value) -> Self {
        let entry = self
            .body
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Object::new()));
        if let Value::Object(map) = entry {
            map.insert(key, value);
        }
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

impl From<Script> for Value {
    fn from(script: Script) -> Self {
        Value::Object(script.body)
    }
}

/// Filter documents with a script: `{"script": {"script": {...}}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptQuery {
    script: Script,
    options: Object,
}

impl ScriptQuery {
    /// Create a new script query.
    pub fn new(script: Script) -> Self {
        Self {
            script,
            options: Object::new(),
        }
    }

    /// Set boost.
    pub fn boost(mut self, boost: f64) -> Self {
        self.options.insert("boost".to_string(), boost.into());
        self
    }

    /// Name the clause for `matched_queries` in hits.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.insert("_name".to_string(), Value::String(name.into()));
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        let mut body = self.options.clone();
        body.insert("script".to_string(), self.script.to_json());
        wrap("script", Value::Object(body))
    }
}
