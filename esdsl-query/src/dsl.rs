//! Short free constructors for composing documents inline.
//!
//! ```rust
//! use esdsl_query::dsl::*;
//!
//! let search = new_query(bool_query().filter(term("id", 123456))).size(1);
//! assert_eq!(
//!     search.to_json_string().unwrap(),
//!     r#"{"query":{"bool":{"filter":[{"term":{"id":123456}}]}},"size":1}"#
//! );
//! ```

use crate::aggregation::{AggOrder, Aggregation, NamedAggregation, TermAgg};
use crate::condition::IntoClause;
use crate::enums::{ScriptLanguage, SortMode, SortOrder};
use crate::query::{
    BoolQuery, ConstantScoreQuery, ExistsQuery, IdsQuery, InnerHits, MatchAllQuery,
    MatchBoolPrefixQuery, MatchNoneQuery, MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery,
    MultiMatchQuery, NestedQuery, QueryStringQuery, RangeQuery, RegexpQuery, Script, ScriptQuery,
    SimpleQueryStringQuery, TermQuery, TermsQuery, TermsSetQuery,
};
use crate::search::SearchQuery;
use crate::sort::{NestedSort, Sort};
use crate::source::SourceFilter;
use serde_json::Value;

pub use crate::condition::{when, when_with};

/// Envelope around `clause`.
pub fn new_query(clause: impl IntoClause) -> SearchQuery {
    SearchQuery::new(clause)
}

/// Envelope holding only aggregations.
pub fn new_aggs(aggs: impl IntoIterator<Item = NamedAggregation>) -> SearchQuery {
    SearchQuery::new_aggs(aggs)
}

/// `{"match_all": {}}`
pub fn match_all() -> MatchAllQuery {
    MatchAllQuery::new()
}

/// `{"match_none": {}}`
pub fn match_none() -> MatchNoneQuery {
    MatchNoneQuery::new()
}

/// Exact value match.
pub fn term(field: impl Into<String>, value: impl Into<Value>) -> TermQuery {
    TermQuery::new(field, value)
}

/// Exact value match, only if `condition` holds.
pub fn term_if(field: impl Into<String>, value: impl Into<Value>, condition: bool) -> Option<TermQuery> {
    TermQuery::new_if(field, value, condition)
}

/// Exact value match, only if `predicate(field, &value)` holds.
pub fn term_func<V, F>(field: impl Into<String>, value: V, predicate: F) -> Option<TermQuery>
where
    V: Into<Value>,
    F: FnOnce(&str, &V) -> bool,
{
    TermQuery::new_func(field, value, predicate)
}

/// Match any of `values`.
pub fn terms(field: impl Into<String>, values: impl IntoIterator<Item = impl Into<Value>>) -> TermsQuery {
    TermsQuery::new(field, values)
}

/// Match any value of a borrowed slice.
pub fn terms_array<T: Clone + Into<Value>>(field: impl Into<String>, values: &[T]) -> TermsQuery {
    TermsQuery::from_slice(field, values)
}

/// Match any of `values`, only if `condition` holds.
pub fn terms_if<T: Into<Value>>(field: impl Into<String>, values: Vec<T>, condition: bool) -> Option<TermsQuery> {
    TermsQuery::new_if(field, values, condition)
}

/// Match any of `values`, only if `predicate(field, &values)` holds for the whole list.
pub fn terms_func<T, F>(field: impl Into<String>, values: Vec<T>, predicate: F) -> Option<TermsQuery>
where
    T: Into<Value>,
    F: FnOnce(&str, &[T]) -> bool,
{
    TermsQuery::new_func(field, values, predicate)
}

/// Slice form of [`terms_func`].
pub fn terms_array_func<T, F>(field: impl Into<String>, values: &[T], predicate: F) -> Option<TermsQuery>
where
    T: Clone + Into<Value>,
    F: FnOnce(&str, &[T]) -> bool,
{
    let field = field.into();
    predicate(&field, values).then(|| TermsQuery::from_slice(field, values))
}

/// Match at least a number of `terms`.
pub fn terms_set(field: impl Into<String>, terms: impl IntoIterator<Item = impl Into<Value>>) -> TermsSetQuery {
    TermsSetQuery::new(field, terms)
}

/// Field has a value.
pub fn exists(field: impl Into<String>) -> ExistsQuery {
    ExistsQuery::new(field)
}

/// Field has a value, only if `condition` holds.
pub fn exists_if(field: impl Into<String>, condition: bool) -> Option<ExistsQuery> {
    ExistsQuery::new_if(field, condition)
}

/// Field has a value, only if `predicate(field)` holds.
pub fn exists_func<F: FnOnce(&str) -> bool>(field: impl Into<String>, predicate: F) -> Option<ExistsQuery> {
    ExistsQuery::new_func(field, predicate)
}

/// Documents by id.
pub fn ids(ids: impl IntoIterator<Item = impl Into<String>>) -> IdsQuery {
    IdsQuery::new(ids)
}

/// Regular expression match.
pub fn regexp(field: impl Into<String>, pattern: impl Into<String>) -> RegexpQuery {
    RegexpQuery::new(field, pattern)
}

/// Value range on `field`.
pub fn range(field: impl Into<String>) -> RangeQuery {
    RangeQuery::new(field)
}

/// Full-text match.
pub fn match_query(field: impl Into<String>, query: impl Into<Value>) -> MatchQuery {
    MatchQuery::new(field, query)
}

/// Phrase match.
pub fn match_phrase(field: impl Into<String>, query: impl Into<Value>) -> MatchPhraseQuery {
    MatchPhraseQuery::new(field, query)
}

/// Phrase match with a trailing prefix.
pub fn match_phrase_prefix(field: impl Into<String>, query: impl Into<Value>) -> MatchPhrasePrefixQuery {
    MatchPhrasePrefixQuery::new(field, query)
}

/// Terms match with the last one as prefix.
pub fn match_bool_prefix(field: impl Into<String>, query: impl Into<Value>) -> MatchBoolPrefixQuery {
    MatchBoolPrefixQuery::new(field, query)
}

/// Full-text match over several fields.
pub fn multi_match(query: impl Into<Value>) -> MultiMatchQuery {
    MultiMatchQuery::new(query)
}

/// Lucene query syntax.
pub fn query_string(query: impl Into<Value>) -> QueryStringQuery {
    QueryStringQuery::new(query)
}

/// Lenient query syntax.
pub fn simple_query_string(query: impl Into<Value>) -> SimpleQueryStringQuery {
    SimpleQueryStringQuery::new(query)
}

/// Inline script.
pub fn script_source(source: impl Into<String>, lang: ScriptLanguage) -> Script {
    Script::source(source, lang)
}

/// Stored script.
pub fn script_id(id: impl Into<String>, lang: ScriptLanguage) -> Script {
    Script::id(id, lang)
}

/// Script filter.
pub fn script_query(script: Script) -> ScriptQuery {
    ScriptQuery::new(script)
}

/// Empty bool query.
pub fn bool_query() -> BoolQuery {
    BoolQuery::new()
}

/// Query on nested objects under `path`.
pub fn nested(path: impl Into<String>, query: impl IntoClause) -> NestedQuery {
    NestedQuery::new(path, query)
}

/// Inner hits with engine defaults.
pub fn inner_hits() -> InnerHits {
    InnerHits::new()
}

/// Filter with a fixed score.
pub fn constant_score(filter: impl IntoClause) -> ConstantScoreQuery {
    ConstantScoreQuery::new(filter)
}

/// Sort entry on `field`.
pub fn sort(field: impl Into<String>) -> Sort {
    Sort::new(field)
}

/// Sort entry with order and mode.
pub fn sort_with_mode(field: impl Into<String>, order: SortOrder, mode: SortMode) -> Sort {
    Sort::with_mode(field, order, mode)
}

/// Nested sort context over `path`.
pub fn nested_sort(path: impl Into<String>) -> NestedSort {
    NestedSort::new(path)
}

/// Empty `_source` filter.
pub fn source() -> SourceFilter {
    SourceFilter::new()
}

/// Named aggregation.
pub fn agg(name: impl Into<String>, aggregation: Aggregation) -> NamedAggregation {
    NamedAggregation::new(name, aggregation)
}

/// Bucket order entry.
pub fn agg_order(key: impl Into<String>, order: SortOrder) -> AggOrder {
    AggOrder::new(key, order)
}

/// Terms bucket aggregation.
pub fn terms_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::terms(field)
}

/// Multi-field terms bucket aggregation.
pub fn multi_terms_agg(terms: impl IntoIterator<Item = TermAgg>) -> Aggregation {
    Aggregation::multi_terms(terms)
}

/// One field of a multi_terms aggregation.
pub fn term_agg(field: impl Into<String>) -> TermAgg {
    TermAgg::new(field)
}

/// Nested documents aggregation.
pub fn nested_agg(path: impl Into<String>) -> Aggregation {
    Aggregation::nested(path)
}

/// Mean.
pub fn avg_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::avg(field)
}

/// Minimum.
pub fn min_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::min(field)
}

/// Maximum.
pub fn max_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::max(field)
}

/// Sum.
pub fn sum_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::sum(field)
}

/// Basic statistics.
pub fn stats_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::stats(field)
}

/// Extended statistics.
pub fn extended_stats_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::extended_stats(field)
}

/// Approximate distinct count.
pub fn cardinality_agg(field: impl Into<String>) -> Aggregation {
    Aggregation::cardinality(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_func_gates_whole_clause() {
        let values = vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        let clause = terms_func("id", values.clone(), |_, v| !v.contains(&21));
        assert!(clause.is_none());

        let clause = terms_func("id", values, |_, v| v.len() == 10);
        assert_eq!(
            clause.map(|c| c.to_json()),
            Some(json!({ "terms": { "id": [1, 1, 2, 3, 5, 8, 13, 21, 34, 55] } }))
        );
    }

    #[test]
    fn test_terms_array_func() {
        let values = ["a", "b"];
        assert!(terms_array_func("tag", &values, |_, v| v.is_empty()).is_none());
        assert_eq!(
            terms_array_func("tag", &values, |f, _| f == "tag").map(|c| c.to_json()),
            Some(json!({ "terms": { "tag": ["a", "b"] } }))
        );
    }

    #[test]
    fn test_conditional_helpers() {
        assert!(term_if("a", 1, false).is_none());
        assert!(term_func("a", 1, |_, v| *v > 0).is_some());
        assert!(terms_if("a", vec![1], true).is_some());
        assert!(exists_if("a", false).is_none());
        assert!(exists_func("a", |f| f.starts_with('a')).is_some());
    }

    #[test]
    fn test_aggs_tree() {
        let search = new_aggs([agg("A", terms_agg("x").aggs([agg("B", avg_agg("y"))]))]);
        let json = search.to_json();
        assert_eq!(json["aggs"]["A"]["terms"]["field"], json!("x"));
        assert_eq!(json["aggs"]["A"]["aggs"]["B"]["avg"]["field"], json!("y"));
    }
}
