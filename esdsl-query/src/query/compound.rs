//! Compound queries: bool, nested and constant_score.

use super::{InnerHits, Query};
use crate::condition::IntoClause;
use crate::enums::ScoreMode;
use crate::types::{wrap, Object};
use serde_json::Value;

/// Bool query for combining multiple queries.
///
/// Every clause setter appends; calling `must` twice accumulates. Absent
/// clauses are dropped before they reach a list, and a list that ends up
/// empty is left out of the output entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    must: Vec<Query>,
    should: Vec<Query>,
    must_not: Vec<Query>,
    filter: Vec<Query>,
    options: Object,
}

fn append(list: &mut Vec<Query>, slot: &str, clause: impl IntoClause) {
    match clause.into_clause() {
        Some(query) => list.push(query),
        None => esdsl_log::trace!("dropping absent clause from bool.{}", slot),
    }
}

fn append_all<I>(list: &mut Vec<Query>, slot: &str, clauses: I)
where
    I: IntoIterator,
    I::Item: IntoClause,
{
    for clause in clauses {
        append(list, slot, clause);
    }
}

impl BoolQuery {
    /// Create a new bool query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a must clause (AND, scoring).
    pub fn must(mut self, clause: impl IntoClause) -> Self {
        append(&mut self.must, "must", clause);
        self
    }

    /// Add a should clause (OR).
    pub fn should(mut self, clause: impl IntoClause) -> Self {
        append(&mut self.should, "should", clause);
        self
    }

    /// Add a must_not clause (NOT).
    pub fn must_not(mut self, clause: impl IntoClause) -> Self {
        append(&mut self.must_not, "must_not", clause);
        self
    }

    /// Add a filter clause (AND, non-scoring).
    pub fn filter(mut self, clause: impl IntoClause) -> Self {
        append(&mut self.filter, "filter", clause);
        self
    }

    /// Add several must clauses in order.
    pub fn must_all<I>(mut self, clauses: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoClause,
    {
        append_all(&mut self.must, "must", clauses);
        self
    }

    /// Add several should clauses in order.
    pub fn should_all<I>(mut self, clauses: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoClause,
    {
        append_all(&mut self.should, "should", clauses);
        self
    }

    /// Add several must_not clauses in order.
    pub fn must_not_all<I>(mut self, clauses: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoClause,
    {
        append_all(&mut self.must_not, "must_not", clauses);
        self
    }

    /// Add several filter clauses in order.
    pub fn filter_all<I>(mut self, clauses: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoClause,
    {
        append_all(&mut self.filter, "filter", clauses);
        self
    }

    /// Set minimum should match, e.g. `1` or `"75%"`.
    pub fn minimum_should_match(self, minimum: impl Into<Value>) -> Self {
        self.option("minimum_should_match", minimum)
    }

    /// Set boost.
    pub fn boost(self, boost: f64) -> Self {
        self.option("boost", boost)
    }

    /// Whether a query of only must_not clauses also matches everything else.
    pub fn adjust_pure_negative(self, adjust: bool) -> Self {
        self.option("adjust_pure_negative", adjust)
    }

    /// Name the clause for `matched_queries` in hits.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.option("_name", name.into())
    }

    fn option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Whether no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty() && self.filter.is_empty()
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        let mut body = self.options.clone();

        for (key, list) in [
            ("must", &self.must),
            ("should", &self.should),
            ("must_not", &self.must_not),
            ("filter", &self.filter),
        ] {
            if !list.is_empty() {
                body.insert(
                    key.to_string(),
                    Value::Array(list.iter().map(Query::to_json).collect()),
                );
            }
        }

        wrap("bool", Value::Object(body))
    }
}

/// Query on nested objects: `{"nested": {"path": .., "query": {..}}}`.
///
/// An absent inner clause renders as `"query": {}`.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedQuery {
    path: String,
    query: Box<Query>,
    options: Object,
}

impl NestedQuery {
    /// Create a nested query over `path`.
    pub fn new(path: impl Into<String>, query: impl IntoClause) -> Self {
        Self {
            path: path.into(),
            query: Box::new(query.into_clause().unwrap_or_else(Query::empty)),
            options: Object::new(),
        }
    }

    /// How child scores combine into the parent score.
    pub fn score_mode(self, mode: ScoreMode) -> Self {
        self.option("score_mode", mode)
    }

    /// Match nothing instead of failing when `path` is unmapped.
    pub fn ignore_unmapped(self, ignore: bool) -> Self {
        self.option("ignore_unmapped", ignore)
    }

    /// Return the matching nested documents with each hit.
    pub fn inner_hits(self, inner_hits: InnerHits) -> Self {
        self.option("inner_hits", inner_hits)
    }

    /// Set boost.
    pub fn boost(self, boost: f64) -> Self {
        self.option("boost", boost)
    }

    fn option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        let mut body = self.options.clone();
        body.insert("path".to_string(), Value::String(self.path.clone()));
        body.insert("query".to_string(), self.query.to_json());
        wrap("nested", Value::Object(body))
    }
}

/// Wrap a filter so every match gets the same score.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantScoreQuery {
    filter: Option<Box<Query>>,
    options: Object,
}

impl ConstantScoreQuery {
    /// Create a constant_score query around `filter`.
    pub fn new(filter: impl IntoClause) -> Self {
        Self {
            filter: filter.into_clause().map(Box::new),
            options: Object::new(),
        }
    }

    /// Whether a filter is present.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Set the score given to every match.
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
        if let Some(filter) = &self.filter {
            body.insert("filter".to_string(), filter.to_json());
        }
        wrap("constant_score", Value::Object(body))
    }
}
