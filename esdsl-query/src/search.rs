//! The request envelope and its encoding.

use crate::aggregation::{aggs_json, Aggregation, NamedAggregation};
use crate::condition::IntoClause;
use crate::config::EncoderConfig;
use crate::error::{QueryError, Result};
use crate::query::Query;
use crate::sort::Sort;
use crate::source::{collect_fields, SourceFilter};
use crate::types::{find_null, null_message};
use esdsl_log::{debug, warn};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io;

/// Top-level search request body.
///
/// Unset options are left out of the output, never written as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    query: Option<Query>,
    from: Option<u64>,
    size: Option<u64>,
    sort: Vec<Sort>,
    source: Option<SourceFilter>,
    track_total_hits: Option<bool>,
    aggs: BTreeMap<String, Aggregation>,
}

impl SearchQuery {
    /// Envelope around `clause`. An absent clause yields `{"query": {}}`.
    pub fn new(clause: impl IntoClause) -> Self {
        Self {
            query: Some(clause.into_clause().unwrap_or_else(Query::empty)),
            ..Self::default()
        }
    }

    /// Envelope holding only aggregations.
    pub fn new_aggs(aggs: impl IntoIterator<Item = NamedAggregation>) -> Self {
        Self::default().aggs(aggs)
    }

    /// Set or replace the query. An absent clause leaves the current query in place.
    pub fn query(mut self, clause: impl IntoClause) -> Self {
        if let Some(query) = clause.into_clause() {
            self.query = Some(query);
        }
        self
    }

    /// Set pagination offset.
    pub fn from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Set result size limit.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Append a sort entry.
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Append several sort entries in order.
    pub fn sort_all(mut self, sorts: impl IntoIterator<Item = Sort>) -> Self {
        self.sort.extend(sorts);
        self
    }

    /// Replace `_source` filtering.
    pub fn source(mut self, source: SourceFilter) -> Self {
        self.source = Some(source);
        self
    }

    /// Add `_source` includes, replacing an earlier `source_false`.
    /// An empty list changes nothing.
    pub fn source_includes(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let fields = collect_fields(fields);
        if fields.is_empty() {
            return self;
        }
        self.source = Some(self.source.take().unwrap_or_default().includes(fields));
        self
    }

    /// Add `_source` excludes, replacing an earlier `source_false`.
    /// An empty list changes nothing.
    pub fn source_excludes(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let fields = collect_fields(fields);
        if fields.is_empty() {
            return self;
        }
        self.source = Some(self.source.take().unwrap_or_default().excludes(fields));
        self
    }

    /// Set `"_source": false`, dropping earlier includes and excludes.
    pub fn source_false(self) -> Self {
        self.source(SourceFilter::Disabled)
    }

    /// Count hits accurately beyond the default limit.
    pub fn track_total_hits(mut self, track: bool) -> Self {
        self.track_total_hits = Some(track);
        self
    }

    /// Add top-level aggregations. Repeated calls accumulate.
    pub fn aggs(mut self, aggs: impl IntoIterator<Item = NamedAggregation>) -> Self {
        for named in aggs {
            self.aggs.insert(named.name, named.aggregation);
        }
        self
    }

    /// Build the request body.
    pub fn to_json(&self) -> Value {
        let mut body = serde_json::Map::new();

        if let Some(query) = &self.query {
            body.insert("query".to_string(), query.to_json());
        }

        if let Some(from) = self.from {
            body.insert("from".to_string(), from.into());
        }

        if let Some(size) = self.size {
            body.insert("size".to_string(), size.into());
        }

        if !self.sort.is_empty() {
            body.insert(
                "sort".to_string(),
                Value::Array(self.sort.iter().map(Sort::to_json).collect()),
            );
        }

        if let Some(source) = &self.source {
            body.insert("_source".to_string(), source.to_json());
        }

        if let Some(track) = self.track_total_hits {
            body.insert("track_total_hits".to_string(), Value::Bool(track));
        }

        if !self.aggs.is_empty() {
            body.insert("aggs".to_string(), aggs_json(&self.aggs));
        }

        Value::Object(body)
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        self.encode(&EncoderConfig::new())
    }

    /// Indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.encode(&EncoderConfig::pretty())
    }

    /// Encode to JSON text as `config` describes.
    pub fn encode(&self, config: &EncoderConfig) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, config)?;
        String::from_utf8(buffer)
            .map_err(|e| QueryError::Serialization(serde::ser::Error::custom(e)))
    }

    /// Encode into `writer` as `config` describes.
    ///
    /// Fails with [`QueryError::Serialization`] when the writer fails or when
    /// a value cannot be encoded, such as a NaN or infinite float. Nothing is
    /// written in the latter case.
    pub fn write_to<W: io::Write>(&self, writer: W, config: &EncoderConfig) -> Result<()> {
        let document = self.to_json();
        if let Some(path) = find_null(&document) {
            warn!("Rejected search document with null at `{}`", path);
            return Err(QueryError::Serialization(serde::ser::Error::custom(null_message(&path))));
        }

        if config.pretty {
            let indent = config.indent_bytes();
            let mut serializer =
                serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
            document.serialize(&mut serializer)?;
        } else {
            serde_json::to_writer(writer, &document)?;
        }

        debug!(
            "Encoded search document ({} top-level keys, pretty={})",
            document.as_object().map_or(0, |o| o.len()),
            config.pretty
        );
        Ok(())
    }
}

impl Serialize for SearchQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let document = self.to_json();
        if let Some(path) = find_null(&document) {
            return Err(serde::ser::Error::custom(null_message(&path)));
        }
        document.serialize(serializer)
    }
}

impl From<SearchQuery> for Value {
    fn from(search: SearchQuery) -> Self {
        search.to_json()
    }
}
