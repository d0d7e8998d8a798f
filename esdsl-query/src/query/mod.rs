//! Query clause builders.
//!
//! Every builder renders to the `{"<kind>": {...}}` shape of the query DSL.
//! Builders take `self` by value and return it, so a clause attached to a
//! parent can no longer change underneath it.

mod compound;
mod full_text;
mod inner_hits;
mod range;
mod script;
mod term_level;

pub use compound::{BoolQuery, ConstantScoreQuery, NestedQuery};
pub use full_text::{
    MatchBoolPrefixQuery, MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery, MultiMatchQuery,
    QueryStringQuery, SimpleQueryStringQuery,
};
pub use inner_hits::InnerHits;
pub use range::RangeQuery;
pub use script::{Script, ScriptQuery};
pub use term_level::{ExistsQuery, IdsQuery, RegexpQuery, TermQuery, TermsQuery, TermsSetQuery};

use crate::condition::IntoClause;
use crate::types::{find_null, null_message, wrap, Object};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single query clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Match all documents.
    MatchAll(MatchAllQuery),
    /// Match no documents.
    MatchNone(MatchNoneQuery),
    /// Exact value match.
    Term(TermQuery),
    /// Any of several exact values.
    Terms(TermsQuery),
    /// Minimum number of exact values.
    TermsSet(TermsSetQuery),
    /// Document ids.
    Ids(IdsQuery),
    /// Field has a value.
    Exists(ExistsQuery),
    /// Regular expression match.
    Regexp(RegexpQuery),
    /// Value range.
    Range(RangeQuery),
    /// Full-text match.
    Match(MatchQuery),
    /// Phrase match.
    MatchPhrase(MatchPhraseQuery),
    /// Phrase match with a trailing prefix.
    MatchPhrasePrefix(MatchPhrasePrefixQuery),
    /// Terms match with the last one as prefix.
    MatchBoolPrefix(MatchBoolPrefixQuery),
    /// Full-text match over several fields.
    MultiMatch(MultiMatchQuery),
    /// Lucene query syntax.
    QueryString(QueryStringQuery),
    /// Lenient query syntax.
    SimpleQueryString(SimpleQueryStringQuery),
    /// Script filter.
    Script(ScriptQuery),
    /// Boolean combination.
    Bool(BoolQuery),
    /// Query on nested objects.
    Nested(NestedQuery),
    /// Filter with a fixed score.
    ConstantScore(ConstantScoreQuery),
    /// Hand-built clause, emitted as is.
    Raw(Value),
}

impl Query {
    /// Convert query to JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Query::MatchAll(q) => q.to_json(),
            Query::MatchNone(q) => q.to_json(),
            Query::Term(q) => q.to_json(),
            Query::Terms(q) => q.to_json(),
            Query::TermsSet(q) => q.to_json(),
            Query::Ids(q) => q.to_json(),
            Query::Exists(q) => q.to_json(),
            Query::Regexp(q) => q.to_json(),
            Query::Range(q) => q.to_json(),
            Query::Match(q) => q.to_json(),
            Query::MatchPhrase(q) => q.to_json(),
            Query::MatchPhrasePrefix(q) => q.to_json(),
            Query::MatchBoolPrefix(q) => q.to_json(),
            Query::MultiMatch(q) => q.to_json(),
            Query::QueryString(q) => q.to_json(),
            Query::SimpleQueryString(q) => q.to_json(),
            Query::Script(q) => q.to_json(),
            Query::Bool(q) => q.to_json(),
            Query::Nested(q) => q.to_json(),
            Query::ConstantScore(q) => q.to_json(),
            Query::Raw(v) => v.clone(),
        }
    }

    /// A raw clause. Objects are emitted verbatim.
    pub fn raw(value: impl Into<Value>) -> Self {
        Query::Raw(value.into())
    }

    /// `{}`, used where a clause slot must exist but nothing was supplied.
    pub(crate) fn empty() -> Self {
        Query::Raw(Value::Object(Object::new()))
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let clause = self.to_json();
        if let Some(path) = find_null(&clause) {
            return Err(serde::ser::Error::custom(null_message(&path)));
        }
        clause.serialize(serializer)
    }
}

impl From<Query> for Value {
    fn from(query: Query) -> Self {
        query.to_json()
    }
}

macro_rules! clause_kinds {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Query {
                fn from(query: $ty) -> Self {
                    Query::$variant(query)
                }
            }

            impl IntoClause for $ty {
                fn into_clause(self) -> Option<Query> {
                    Some(Query::$variant(self))
                }
            }
        )+
    };
}

clause_kinds! {
    MatchAll(MatchAllQuery),
    MatchNone(MatchNoneQuery),
    Term(TermQuery),
    Terms(TermsQuery),
    TermsSet(TermsSetQuery),
    Ids(IdsQuery),
    Exists(ExistsQuery),
    Regexp(RegexpQuery),
    Range(RangeQuery),
    Match(MatchQuery),
    MatchPhrase(MatchPhraseQuery),
    MatchPhrasePrefix(MatchPhrasePrefixQuery),
    MatchBoolPrefix(MatchBoolPrefixQuery),
    MultiMatch(MultiMatchQuery),
    QueryString(QueryStringQuery),
    SimpleQueryString(SimpleQueryStringQuery),
    Script(ScriptQuery),
    Bool(BoolQuery),
    Nested(NestedQuery),
}

// A constant_score without a filter is absent as a whole.
impl From<ConstantScoreQuery> for Query {
    fn from(query: ConstantScoreQuery) -> Self {
        Query::ConstantScore(query)
    }
}

impl IntoClause for ConstantScoreQuery {
    fn into_clause(self) -> Option<Query> {
        self.has_filter().then_some(Query::ConstantScore(self))
    }
}

/// `{"match_all": {}}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchAllQuery {
    body: Object,
}

impl MatchAllQuery {
    /// Create a match_all query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score given to every document.
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost".to_string(), boost.into());
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("match_all", Value::Object(self.body.clone()))
    }
}

/// `{"match_none": {}}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchNoneQuery {
    body: Object,
}

impl MatchNoneQuery {
    /// Create a match_none query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the clause for `matched_queries` in hits.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.body.insert("_name".to_string(), Value::String(name.into()));
        self
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        wrap("match_none", Value::Object(self.body.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_rejects_non_finite_values() {
        let clause = Query::from(RangeQuery::new("p").gt(f64::NEG_INFINITY));
        let err = serde_json::to_string(&clause).unwrap_err();
        assert!(err.to_string().contains("range.p.gt"));
        assert!(serde_json::to_string(&Query::from(TermQuery::new("a", 1))).is_ok());
    }

    #[test]
    fn test_match_all() {
        assert_eq!(MatchAllQuery::new().to_json(), json!({ "match_all": {} }));
        assert_eq!(
            MatchAllQuery::new().boost(2.5).to_json(),
            json!({ "match_all": { "boost": 2.5 } })
        );
    }

    #[test]
    fn test_match_none() {
        assert_eq!(MatchNoneQuery::new().to_json(), json!({ "match_none": {} }));
        assert_eq!(
            MatchNoneQuery::new().name("nothing").to_json(),
            json!({ "match_none": { "_name": "nothing" } })
        );
    }

    #[test]
    fn test_query_enum_delegates() {
        let query: Query = TermQuery::new("status", "active").into();
        assert_eq!(query.to_json(), json!({ "term": { "status": "active" } }));
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"term":{"status":"active"}}"#
        );
    }

    #[test]
    fn test_raw_query_is_verbatim() {
        let raw = Query::raw(json!({ "wildcard": { "name": "jo*" } }));
        assert_eq!(raw.to_json(), json!({ "wildcard": { "name": "jo*" } }));
        assert_eq!(Query::empty().to_json(), json!({}));
    }

    #[test]
    fn test_constant_score_without_filter_is_absent() {
        let missing = ConstantScoreQuery::new(None::<TermQuery>);
        assert!(missing.into_clause().is_none());

        let present = ConstantScoreQuery::new(TermQuery::new("a", 1));
        assert!(present.into_clause().is_some());
    }
}
