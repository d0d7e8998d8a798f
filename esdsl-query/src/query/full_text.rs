//! Full-text queries.

use crate::enums::{Operator, TextQueryType, ZeroTermsQuery};
use crate::types::{string_array, wrap, FieldBody, Object};
use serde_json::Value;

/// Match query for full-text search: `{"match": {"<field>": {"query": ..}}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    inner: FieldBody,
}

impl MatchQuery {
    /// Create a new match query.
    pub fn new(field: impl Into<String>, query: impl Into<Value>) -> Self {
        Self {
            inner: FieldBody::with(field, "query", query),
        }
    }

    fn put(self, key: &str, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put(key, value) }
    }

    option_setters! {
        /// Set the operator joining analyzed terms.
        operator => "operator": Operator;
        /// Set boost.
        boost => "boost": f64;
        cutoff_frequency => "cutoff_frequency": f64;
        /// Edit distance, e.g. `"AUTO"` or `2`.
        fuzziness => "fuzziness": impl Into<Value>;
        fuzzy_rewrite => "fuzzy_rewrite": &str;
        fuzzy_transpositions => "fuzzy_transpositions": bool;
        /// Ignore format-based failures.
        lenient => "lenient": bool;
        max_expansions => "max_expansions": u32;
        prefix_length => "prefix_length": u32;
        /// Analyzer for the query text.
        analyzer => "analyzer": &str;
        /// Minimum matching terms, e.g. `2` or `"75%"`.
        minimum_should_match => "minimum_should_match": impl Into<Value>;
        auto_generate_synonyms_phrase_query => "auto_generate_synonyms_phrase_query": bool;
        zero_terms_query => "zero_terms_query": ZeroTermsQuery;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("match")
    }
}

/// Phrase query: `{"match_phrase": {"<field>": {"query": ..}}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPhraseQuery {
    inner: FieldBody,
}

impl MatchPhraseQuery {
    /// Create a new match_phrase query.
    pub fn new(field: impl Into<String>, query: impl Into<Value>) -> Self {
        Self {
            inner: FieldBody::with(field, "query", query),
        }
    }

    fn put(self, key: &str, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put(key, value) }
    }

    option_setters! {
        analyzer => "analyzer": &str;
        boost => "boost": f64;
        /// Allowed distance between phrase terms.
        slop => "slop": u32;
        zero_terms_query => "zero_terms_query": ZeroTermsQuery;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("match_phrase")
    }
}

/// Phrase query whose last term is a prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPhrasePrefixQuery {
    inner: FieldBody,
}

impl MatchPhrasePrefixQuery {
    /// Create a new match_phrase_prefix query.
    pub fn new(field: impl Into<String>, query: impl Into<Value>) -> Self {
        Self {
            inner: FieldBody::with(field, "query", query),
        }
    }

    fn put(self, key: &str, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put(key, value) }
    }

    option_setters! {
        analyzer => "analyzer": &str;
        boost => "boost": f64;
        /// Number of prefix expansions.
        max_expansions => "max_expansions": u32;
        slop => "slop": u32;
        zero_terms_query => "zero_terms_query": ZeroTermsQuery;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("match_phrase_prefix")
    }
}

/// Terms query whose last term is a prefix, combined as a bool query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBoolPrefixQuery {
    inner: FieldBody,
}

impl MatchBoolPrefixQuery {
    /// Create a new match_bool_prefix query.
    pub fn new(field: impl Into<String>, query: impl Into<Value>) -> Self {
        Self {
            inner: FieldBody::with(field, "query", query),
        }
    }

    fn put(self, key: &str, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put(key, value) }
    }

    option_setters! {
        analyzer => "analyzer": &str;
        minimum_should_match => "minimum_should_match": impl Into<Value>;
        operator => "operator": Operator;
        boost => "boost": f64;
        fuzziness => "fuzziness": impl Into<Value>;
        fuzzy_rewrite => "fuzzy_rewrite": &str;
        fuzzy_transpositions => "fuzzy_transpositions": bool;
        max_expansions => "max_expansions": u32;
        prefix_length => "prefix_length": u32;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("match_bool_prefix")
    }
}

/// Match query over several fields: `{"multi_match": {"query": ..}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatchQuery {
    body: Object,
}

impl MultiMatchQuery {
    /// Create a new multi_match query.
    pub fn new(query: impl Into<Value>) -> Self {
        let mut body = Object::new();
        body.insert("query".to_string(), query.into());
        Self { body }
    }

    fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    /// Fields to search, optionally boosted as `"title^3"`.
    pub fn fields(self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.put("fields", string_array(fields))
    }

    option_setters! {
        analyzer => "analyzer": &str;
        auto_generate_synonyms_phrase_query => "auto_generate_synonyms_phrase_query": bool;
        boost => "boost": f64;
        cutoff_frequency => "cutoff_frequency": f64;
        fuzziness => "fuzziness": impl Into<Value>;
        fuzzy_rewrite => "fuzzy_rewrite": &str;
        fuzzy_transpositions => "fuzzy_transpositions": bool;
        lenient => "lenient": bool;
        max_expansions => "max_expansions": u32;
        minimum_should_match => "minimum_should_match": impl Into<Value>;
        operator => "operator": Operator;
        prefix_length => "prefix_length": u32;
        slop => "slop": u32;
        /// Weight of non-best fields in `best_fields` scoring.
        tie_breaker => "tie_breaker": f64;
        /// Execution strategy.
        r#type => "type": TextQueryType;
        zero_terms_query => "zero_terms_query": ZeroTermsQuery;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("multi_match", Value::Object(self.body.clone()))
    }
}

/// Query in Lucene query string syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStringQuery {
    body: Object,
}

impl QueryStringQuery {
    /// Create a new query_string query.
    pub fn new(query: impl Into<Value>) -> Self {
        let mut body = Object::new();
        body.insert("query".to_string(), query.into());
        Self { body }
    }

    fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    /// Fields to search.
    pub fn fields(self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.put("fields", string_array(fields))
    }

    option_setters! {
        /// Field searched when the query names none.
        default_field => "default_field": &str;
        allow_leading_wildcard => "allow_leading_wildcard": bool;
        analyze_wildcard => "analyze_wildcard": bool;
        analyzer => "analyzer": &str;
        auto_generate_synonyms_phrase_query => "auto_generate_synonyms_phrase_query": bool;
        boost => "boost": f64;
        default_operator => "default_operator": Operator;
        enable_position_increments => "enable_position_increments": bool;
        fuzziness => "fuzziness": &str;
        fuzzy_max_expansions => "fuzzy_max_expansions": i64;
        fuzzy_prefix_length => "fuzzy_prefix_length": i64;
        fuzzy_transpositions => "fuzzy_transpositions": bool;
        fuzzy_rewrite => "fuzzy_rewrite": &str;
        lenient => "lenient": bool;
        max_determinized_states => "max_determinized_states": i64;
        minimum_should_match => "minimum_should_match": &str;
        quote_analyzer => "quote_analyzer": &str;
        phrase_slop => "phrase_slop": i64;
        quote_field_suffix => "quote_field_suffix": &str;
        rewrite => "rewrite": &str;
        time_zone => "time_zone": &str;
        escape => "escape": bool;
        tie_breaker => "tie_breaker": f64;
        r#type => "type": TextQueryType;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("query_string", Value::Object(self.body.clone()))
    }
}

/// Query in the lenient simple query string syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleQueryStringQuery {
    body: Object,
}

impl SimpleQueryStringQuery {
    /// Create a new simple_query_string query.
    pub fn new(query: impl Into<Value>) -> Self {
        let mut body = Object::new();
        body.insert("query".to_string(), query.into());
        Self { body }
    }

    fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.insert(key.to_string(), value.into());
        self
    }

    /// Fields to search.
    pub fn fields(self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.put("fields", string_array(fields))
    }

    option_setters! {
        analyzer => "analyzer": &str;
        default_operator => "default_operator": Operator;
        minimum_should_match => "minimum_should_match": &str;
        fuzzy_max_expansions => "fuzzy_max_expansions": i64;
        fuzzy_prefix_length => "fuzzy_prefix_length": i64;
        fuzzy_transpositions => "fuzzy_transpositions": bool;
        analyze_wildcard => "analyze_wildcard": bool;
        auto_generate_synonyms_phrase_query => "auto_generate_synonyms_phrase_query": bool;
        /// Enabled operators, e.g. `"AND|OR|PREFIX"`.
        flags => "flags": &str;
        lenient => "lenient": bool;
        quote_field_suffix => "quote_field_suffix": &str;
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("simple_query_string", Value::Object(self.body.clone()))
    }
}
