//! Inner hits of a nested query.

use crate::condition::IntoClause;
use crate::sort::Sort;
use crate::source::{collect_fields, SourceFilter};
use crate::types::{string_array, Object};
use serde_json::Value;

/// Options for returning matching nested documents with each hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InnerHits {
    body: Object,
    sort: Vec<Value>,
    source: Option<SourceFilter>,
}

impl InnerHits {
    /// Inner hits with engine defaults.
    pub fn new() -> Self {
        Self::default()
    }

    fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    option_setters! {
        explain => "explain": bool;
        /// Offset of the first inner hit.
        from => "from": u32;
        ignore_unmapped => "ignore_unmapped": bool;
        /// Maximum inner hits per hit.
        size => "size": u32;
        /// Key of these inner hits in the response.
        name => "name": &str;
        seq_no_primary_term => "seq_no_primary_term": bool;
        track_scores => "track_scores": bool;
        version => "version": bool;
    }

    /// Restrict inner hits further. Absent clauses are ignored.
    pub fn query(self, query: impl IntoClause) -> Self {
        match query.into_clause() {
            Some(query) => self.put("query", query),
            None => self,
        }
    }

    /// Append a sort entry.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort.into());
        self
    }

    /// Replace `_source` filtering of inner hits.
    pub fn source(mut self, source: SourceFilter) -> Self {
        self.source = Some(source);
        self
    }

    /// Add `_source` includes. An empty list changes nothing.
    pub fn source_includes(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let fields = collect_fields(fields);
        if fields.is_empty() {
            return self;
        }
        self.source = Some(self.source.take().unwrap_or_default().includes(fields));
        self
    }

    /// Add `_source` excludes. An empty list changes nothing.
    pub fn source_excludes(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let fields = collect_fields(fields);
        if fields.is_empty() {
            return self;
        }
        self.source = Some(self.source.take().unwrap_or_default().excludes(fields));
        self
    }

    /// Don't return `_source` of inner hits.
    pub fn source_false(self) -> Self {
        self.source(SourceFilter::Disabled)
    }

    /// Stored fields to return.
    pub fn stored_fields(self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.put("stored_fields", string_array(fields))
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        let mut body = self.body.clone();
        if !self.sort.is_empty() {
            body.insert("sort".to_string(), Value::Array(self.sort.clone()));
        }
        if let Some(source) = &self.source {
            body.insert("_source".to_string(), source.to_json());
        }
        Value::Object(body)
    }
}

impl From<InnerHits> for Value {
    fn from(inner_hits: InnerHits) -> Self {
        inner_hits.to_json()
    }
}
