//! Aggregation trees.
//!
//! A node holds exactly one kind key (`terms`, `avg`, `nested`, ...) with its
//! parameters, an optional `meta` object and an optional `aggs` map of named
//! children. Children can carry children of their own to any depth.

use crate::enums::{CollectMode, ExecutionHint, SortOrder};
use crate::query::Script;
use crate::types::{string_array, wrap, Object};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// One aggregation node.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    kind: String,
    body: Object,
    meta: Object,
    children: BTreeMap<String, Aggregation>,
}

impl Aggregation {
    fn with_kind(kind: impl Into<String>, body: Object) -> Self {
        Self {
            kind: kind.into(),
            body,
            meta: Object::new(),
            children: BTreeMap::new(),
        }
    }

    fn on_field(kind: &str, key: &str, value: String) -> Self {
        let mut body = Object::new();
        body.insert(key.to_string(), Value::String(value));
        Self::with_kind(kind, body)
    }

    /// Bucket by unique values of `field`.
    pub fn terms(field: impl Into<String>) -> Self {
        Self::on_field("terms", "field", field.into())
    }

    /// Bucket by unique combinations of several fields.
    pub fn multi_terms(terms: impl IntoIterator<Item = TermAgg>) -> Self {
        let mut body = Object::new();
        body.insert(
            "terms".to_string(),
            Value::Array(terms.into_iter().map(Value::from).collect()),
        );
        Self::with_kind("multi_terms", body)
    }

    /// Aggregate over nested documents under `path`.
    pub fn nested(path: impl Into<String>) -> Self {
        Self::on_field("nested", "path", path.into())
    }

    /// Mean of `field`.
    pub fn avg(field: impl Into<String>) -> Self {
        Self::on_field("avg", "field", field.into())
    }

    /// Minimum of `field`.
    pub fn min(field: impl Into<String>) -> Self {
        Self::on_field("min", "field", field.into())
    }

    /// Maximum of `field`.
    pub fn max(field: impl Into<String>) -> Self {
        Self::on_field("max", "field", field.into())
    }

    /// Sum of `field`.
    pub fn sum(field: impl Into<String>) -> Self {
        Self::on_field("sum", "field", field.into())
    }

    /// Count, min, max, avg and sum of `field`.
    pub fn stats(field: impl Into<String>) -> Self {
        Self::on_field("stats", "field", field.into())
    }

    /// `stats` plus variance and standard deviation.
    pub fn extended_stats(field: impl Into<String>) -> Self {
        Self::on_field("extended_stats", "field", field.into())
    }

    /// Approximate distinct count of `field`.
    pub fn cardinality(field: impl Into<String>) -> Self {
        Self::on_field("cardinality", "field", field.into())
    }

    /// Any other aggregation kind, with a hand-built body.
    pub fn custom(kind: impl Into<String>, body: Object) -> Self {
        Self::with_kind(kind, body)
    }

    /// Name of the kind key.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    option_setters! {
        /// Number of buckets to return.
        size => "size": u32;
        shard_size => "shard_size": u32;
        /// Minimum document count of a returned bucket.
        min_doc_count => "min_doc_count": u64;
        /// Value used for documents without the field.
        missing => "missing": impl Into<Value>;
        execution_hint => "execution_hint": ExecutionHint;
        collect_mode => "collect_mode": CollectMode;
        show_term_doc_count_error => "show_term_doc_count_error": bool;
        ignore_unmapped => "ignore_unmapped": bool;
        /// Output format of metric values.
        format => "format": &str;
        precision_threshold => "precision_threshold": u64;
        /// Compute values with a script instead of a field.
        script => "script": Script;
    }

    /// Only bucket these values.
    pub fn include(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.put("include", string_array(values))
    }

    /// Never bucket these values.
    pub fn exclude(self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.put("exclude", string_array(values))
    }

    /// Bucket order, highest priority first.
    pub fn order(self, orders: impl IntoIterator<Item = AggOrder>) -> Self {
        let orders: Vec<Value> = orders.into_iter().map(Value::from).collect();
        self.put("order", orders)
    }

    /// Attach a `meta` entry, returned verbatim in the response.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Attach named children. Repeated calls accumulate; a repeated name replaces the earlier child.
    pub fn aggs(mut self, children: impl IntoIterator<Item = NamedAggregation>) -> Self {
        for child in children {
            self.children.insert(child.name, child.aggregation);
        }
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        let mut node = Object::new();
        node.insert(self.kind.clone(), Value::Object(self.body.clone()));
        if !self.meta.is_empty() {
            node.insert("meta".to_string(), Value::Object(self.meta.clone()));
        }
        if !self.children.is_empty() {
            node.insert("aggs".to_string(), aggs_json(&self.children));
        }
        Value::Object(node)
    }
}

/// `{name: node, ...}`
pub(crate) fn aggs_json(children: &BTreeMap<String, Aggregation>) -> Value {
    Value::Object(
        children
            .iter()
            .map(|(name, aggregation)| (name.clone(), aggregation.to_json()))
            .collect(),
    )
}

impl Serialize for Aggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<Aggregation> for Value {
    fn from(aggregation: Aggregation) -> Self {
        aggregation.to_json()
    }
}

/// An aggregation paired with the name it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedAggregation {
    pub(crate) name: String,
    pub(crate) aggregation: Aggregation,
}

impl NamedAggregation {
    /// Pair `aggregation` with `name`.
    pub fn new(name: impl Into<String>, aggregation: Aggregation) -> Self {
        Self {
            name: name.into(),
            aggregation,
        }
    }

    /// Name of the aggregation.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Bucket ordering rule: `{"<key>": "asc" | "desc"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggOrder {
    key: String,
    order: SortOrder,
}

impl AggOrder {
    /// Order buckets by `key`, e.g. `"_count"`, `"_key"` or a child metric name.
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }
}

impl From<AggOrder> for Value {
    fn from(order: AggOrder) -> Self {
        wrap(&order.key, order.order.into())
    }
}

/// One field of a `multi_terms` aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct TermAgg {
    body: Object,
}

impl TermAgg {
    /// Term source on `field`.
    pub fn new(field: impl Into<String>) -> Self {
        let mut body = Object::new();
        body.insert("field".to_string(), Value::String(field.into()));
        Self { body }
    }

    /// Value used for documents without the field.
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.body.insert("missing".to_string(), missing.into());
        self
    }
}

impl From<TermAgg> for Value {
    fn from(term: TermAgg) -> Self {
        Value::Object(term.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ScriptLanguage;
    use serde_json::json;

    #[test]
    fn test_terms_with_child() {
        let node = Aggregation::terms("x").aggs([NamedAggregation::new("B", Aggregation::avg("y"))]);
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"aggs":{"B":{"avg":{"field":"y"}}},"terms":{"field":"x"}}"#
        );
    }

    #[test]
    fn test_aggs_accumulate_and_overwrite() {
        let node = Aggregation::terms("category")
            .aggs([NamedAggregation::new("low", Aggregation::min("price"))])
            .aggs([
                NamedAggregation::new("high", Aggregation::max("price")),
                NamedAggregation::new("low", Aggregation::sum("price")),
            ]);
        assert_eq!(
            node.to_json(),
            json!({
                "terms": { "field": "category" },
                "aggs": {
                    "high": { "max": { "field": "price" } },
                    "low": { "sum": { "field": "price" } }
                }
            })
        );
    }

    #[test]
    fn test_deep_nesting() {
        let mut node = Aggregation::avg("leaf");
        for depth in (0..20).rev() {
            node = Aggregation::terms(format!("f{depth}"))
                .aggs([NamedAggregation::new(format!("level{}", depth + 1), node)]);
        }

        let mut json = node.to_json();
        for depth in 0..20 {
            assert_eq!(json["terms"]["field"], json!(format!("f{depth}")));
            json = json["aggs"][format!("level{}", depth + 1)].clone();
        }
        assert_eq!(json, json!({ "avg": { "field": "leaf" } }));
    }

    #[test]
    fn test_terms_options() {
        let node = Aggregation::terms("brand")
            .size(10)
            .shard_size(50)
            .min_doc_count(2)
            .missing("N/A")
            .include(["a.*"])
            .exclude(["b.*"])
            .execution_hint(ExecutionHint::Map)
            .collect_mode(CollectMode::BreadthFirst)
            .show_term_doc_count_error(true)
            .order([
                AggOrder::new("_count", SortOrder::Desc),
                AggOrder::new("_key", SortOrder::Asc),
            ]);
        assert_eq!(
            node.to_json(),
            json!({
                "terms": {
                    "field": "brand",
                    "size": 10,
                    "shard_size": 50,
                    "min_doc_count": 2,
                    "missing": "N/A",
                    "include": ["a.*"],
                    "exclude": ["b.*"],
                    "execution_hint": "map",
                    "collect_mode": "breadth_first",
                    "show_term_doc_count_error": true,
                    "order": [{ "_count": "desc" }, { "_key": "asc" }]
                }
            })
        );
    }

    #[test]
    fn test_multi_terms() {
        let node = Aggregation::multi_terms([TermAgg::new("genre"), TermAgg::new("product").missing("none")])
            .size(3)
            .ignore_unmapped(true);
        assert_eq!(
            node.to_json(),
            json!({
                "multi_terms": {
                    "terms": [{ "field": "genre" }, { "field": "product", "missing": "none" }],
                    "size": 3,
                    "ignore_unmapped": true
                }
            })
        );
    }

    #[test]
    fn test_metric_kinds() {
        assert_eq!(Aggregation::nested("offers").to_json(), json!({ "nested": { "path": "offers" } }));
        assert_eq!(Aggregation::stats("p").to_json(), json!({ "stats": { "field": "p" } }));
        assert_eq!(
            Aggregation::extended_stats("p").to_json(),
            json!({ "extended_stats": { "field": "p" } })
        );
        assert_eq!(
            Aggregation::cardinality("user").precision_threshold(100).to_json(),
            json!({ "cardinality": { "field": "user", "precision_threshold": 100 } })
        );
    }

    #[test]
    fn test_meta_and_script() {
        let node = Aggregation::avg("grade")
            .format("0.0")
            .meta("source", "report")
            .meta("version", 2)
            .script(Script::source("_value * 2", ScriptLanguage::Painless));
        assert_eq!(
            node.to_json(),
            json!({
                "avg": {
                    "field": "grade",
                    "format": "0.0",
                    "script": { "lang": "painless", "source": "_value * 2" }
                },
                "meta": { "source": "report", "version": 2 }
            })
        );
    }

    #[test]
    fn test_custom_kind() {
        let mut body = Object::new();
        body.insert("field".to_string(), json!("timestamp"));
        body.insert("calendar_interval".to_string(), json!("day"));
        let node = Aggregation::custom("date_histogram", body);
        assert_eq!(node.kind(), "date_histogram");
        assert_eq!(
            node.to_json(),
            json!({ "date_histogram": { "field": "timestamp", "calendar_interval": "day" } })
        );
    }
}
