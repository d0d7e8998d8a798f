//! Term-level queries: exact values, ids, existence and patterns.

use crate::types::{string_array, value_array, wrap, FieldBody, Object};
use serde_json::Value;

/// Term query for exact matching.
///
/// Renders the short form `{"term": {"<field>": <value>}}` while no option is
/// set. Once `boost`, `case_insensitive` or `name` is set the long form
/// `{"term": {"<field>": {"value": <value>, ...}}}` is used, since options
/// have nowhere else to live.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    field: String,
    value: Value,
    options: Object,
}

impl TermQuery {
    /// Create a new term query.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            options: Object::new(),
        }
    }

    /// Create the query only if `condition` holds.
    pub fn new_if(field: impl Into<String>, value: impl Into<Value>, condition: bool) -> Option<Self> {
        condition.then(|| Self::new(field, value))
    }

    /// Create the query only if `predicate(field, &value)` holds.
    pub fn new_func<V, F>(field: impl Into<String>, value: V, predicate: F) -> Option<Self>
    where
        V: Into<Value>,
        F: FnOnce(&str, &V) -> bool,
    {
        let field = field.into();
        if predicate(&field, &value) {
            Some(Self::new(field, value))
        } else {
            None
        }
    }

    /// Match regardless of ASCII case.
    pub fn case_insensitive(self, case_insensitive: bool) -> Self {
        self.option("case_insensitive", case_insensitive)
    }

    /// Set boost.
    pub fn boost(self, boost: f64) -> Self {
        self.option("boost", boost)
    }

    /// Name the clause for `matched_queries` in hits.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.option("_name", name.into())
    }

    fn option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        let inner = if self.options.is_empty() {
            self.value.clone()
        } else {
            let mut long = self.options.clone();
            long.insert("value".to_string(), self.value.clone());
            Value::Object(long)
        };
        wrap("term", wrap(&self.field, inner))
    }
}

/// Terms query for matching any of several values.
///
/// Values keep their input order; duplicates are kept.
///
/// The field shares one object with `boost` and `_name`, as the wire format
/// requires. A field literally named `boost` or `_name` keeps its values and
/// the clashing option is not written.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsQuery {
    field: String,
    values: Value,
    options: Object,
}

impl TermsQuery {
    /// Create a new terms query.
    pub fn new(field: impl Into<String>, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            field: field.into(),
            values: value_array(values),
            options: Object::new(),
        }
    }

    /// Create from a borrowed slice.
    pub fn from_slice<T>(field: impl Into<String>, values: &[T]) -> Self
    where
        T: Clone + Into<Value>,
    {
        Self::new(field, values.iter().cloned())
    }

    /// Create the query only if `condition` holds.
    pub fn new_if<T: Into<Value>>(field: impl Into<String>, values: Vec<T>, condition: bool) -> Option<Self> {
        condition.then(|| Self::new(field, values))
    }

    /// Create the query only if `predicate(field, &values)` holds.
    ///
    /// The predicate sees the whole candidate list once and decides whether
    /// the clause exists at all; it never filters individual values.
    pub fn new_func<T, F>(field: impl Into<String>, values: Vec<T>, predicate: F) -> Option<Self>
    where
        T: Into<Value>,
        F: FnOnce(&str, &[T]) -> bool,
    {
        let field = field.into();
        if predicate(&field, &values) {
            Some(Self::new(field, values))
        } else {
            None
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
        body.insert(self.field.clone(), self.values.clone());
        wrap("terms", Value::Object(body))
    }
}

/// Terms-set query: match documents containing a minimum number of values.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsSetQuery {
    inner: FieldBody,
}

impl TermsSetQuery {
    /// Create a new terms_set query.
    pub fn new(field: impl Into<String>, terms: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            inner: FieldBody::with(field, "terms", value_array(terms)),
        }
    }

    /// Set boost.
    pub fn boost(self, boost: f64) -> Self {
        Self { inner: self.inner.put("boost", boost) }
    }

    /// Numeric field holding the number of terms that must match.
    pub fn minimum_should_match_field(self, field: impl Into<String>) -> Self {
        Self { inner: self.inner.put("minimum_should_match_field", field.into()) }
    }

    /// Script computing the number of terms that must match.
    pub fn minimum_should_match_script(self, script: crate::query::Script) -> Self {
        Self { inner: self.inner.put("minimum_should_match_script", script) }
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("terms_set")
    }
}

/// Ids query.
#[derive(Debug, Clone, PartialEq)]
pub struct IdsQuery {
    body: Object,
}

impl IdsQuery {
    /// Create a new ids query.
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut body = Object::new();
        body.insert("values".to_string(), string_array(ids));
        Self { body }
    }

    /// Set boost.
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost".to_string(), boost.into());
        self
    }

    /// Name the clause for `matched_queries` in hits.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.body.insert("_name".to_string(), Value::String(name.into()));
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("ids", Value::Object(self.body.clone()))
    }
}

/// Exists query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsQuery {
    body: Object,
}

impl ExistsQuery {
    /// Create a new exists query.
    pub fn new(field: impl Into<String>) -> Self {
        let mut body = Object::new();
        body.insert("field".to_string(), Value::String(field.into()));
        Self { body }
    }

    /// Create the query only if `condition` holds.
    pub fn new_if(field: impl Into<String>, condition: bool) -> Option<Self> {
        condition.then(|| Self::new(field))
    }

    /// Create the query only if `predicate(field)` holds.
    pub fn new_func<F>(field: impl Into<String>, predicate: F) -> Option<Self>
    where
        F: FnOnce(&str) -> bool,
    {
        let field = field.into();
        if predicate(&field) { Some(Self::new(field)) } else { None }
    }

    /// Set boost.
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost".to_string(), boost.into());
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("exists", Value::Object(self.body.clone()))
    }
}

/// Regexp query. Always uses the `{"value": ..}` form.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexpQuery {
    inner: FieldBody,
}

impl RegexpQuery {
    /// Create a new regexp query.
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            inner: FieldBody::with(field, "value", pattern.into()),
        }
    }

    /// Enabled operators, e.g. `"ALL"` or `"COMPLEMENT|INTERVAL"`.
    pub fn flags(self, flags: impl Into<String>) -> Self {
        Self { inner: self.inner.put("flags", flags.into()) }
    }

    /// Match regardless of ASCII case.
    pub fn case_insensitive(self, case_insensitive: bool) -> Self {
        Self { inner: self.inner.put("case_insensitive", case_insensitive) }
    }

    /// Cap on automaton states.
    pub fn max_determinized_states(self, states: u64) -> Self {
        Self { inner: self.inner.put("max_determinized_states", states) }
    }

    /// Rewrite method.
    pub fn rewrite(self, rewrite: impl Into<String>) -> Self {
        Self { inner: self.inner.put("rewrite", rewrite.into()) }
    }

    /// Set boost.
    pub fn boost(self, boost: f64) -> Self {
        Self { inner: self.inner.put("boost", boost) }
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("regexp")
    }
}
