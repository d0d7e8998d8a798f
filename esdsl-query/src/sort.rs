//! Sort entries for the `sort` array.

use crate::condition::IntoClause;
use crate::enums::{SortMode, SortOrder};
use crate::types::{FieldBody, Object};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One sort entry: `{"<field>": {"order": .., "mode": .., "nested": ..}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    inner: FieldBody,
}

impl Sort {
    /// Sort by `field` with engine defaults.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            inner: FieldBody::new(field),
        }
    }

    /// Sort by `field` with an order and a multi-value mode.
    pub fn with_mode(field: impl Into<String>, order: SortOrder, mode: SortMode) -> Self {
        Self::new(field).order(order).mode(mode)
    }

    /// Set the sort direction.
    pub fn order(self, order: SortOrder) -> Self {
        Self { inner: self.inner.put("order", order) }
    }

    /// Set how multi-valued fields reduce to one value.
    pub fn mode(self, mode: SortMode) -> Self {
        Self { inner: self.inner.put("mode", mode) }
    }

    /// Sort by a field inside nested objects.
    pub fn nested(self, nested: NestedSort) -> Self {
        Self { inner: self.inner.put("nested", nested) }
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.field_json()
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<Sort> for Value {
    fn from(sort: Sort) -> Self {
        sort.to_json()
    }
}

/// Nested context of a sort: `{"path": .., "filter": .., "nested": ..}`.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSort {
    body: Object,
}

impl NestedSort {
    /// Nested sort over `path`.
    pub fn new(path: impl Into<String>) -> Self {
        let mut body = Object::new();
        body.insert("path".to_string(), Value::String(path.into()));
        Self { body }
    }

    /// Only consider nested documents matching `filter`. Absent filters are ignored.
    pub fn filter(mut self, filter: impl IntoClause) -> Self {
        if let Some(query) = filter.into_clause() {
            self.body.insert("filter".to_string(), query.to_json());
        }
        self
    }

    /// Maximum children considered per root document.
    pub fn max_children(mut self, max_children: u32) -> Self {
        self.body.insert("max_children".to_string(), max_children.into());
        self
    }

    /// Deeper nested level.
    pub fn nested(mut self, nested: NestedSort) -> Self {
        self.body.insert("nested".to_string(), nested.into());
        self
    }
}

impl From<NestedSort> for Value {
    fn from(nested: NestedSort) -> Self {
        Value::Object(nested.body)
    }
}
