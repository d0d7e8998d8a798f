//! Fluent builder for Elasticsearch/OpenSearch query DSL documents.
//!
//! This crate provides:
//! - Leaf clauses (term, terms, range, exists, ids, regexp, match family, ...)
//! - Compound clauses (bool, nested, constant_score)
//! - Conditional inclusion of clauses with absent markers
//! - Recursive aggregation trees
//! - The request envelope with sort, `_source`, paging and encoding
//!
//! Every builder takes `self` and returns it, so chains read left to right
//! and a clause handed to a parent is owned by that parent. Output keys are
//! always in ascending order and unset options are never written.
//!
//! # Example
//!
//! ```rust
//! use esdsl_query::{
//!     condition::when, Aggregation, BoolQuery, NamedAggregation, RangeQuery, SearchQuery, Sort,
//!     SortOrder, TermQuery,
//! };
//!
//! let only_published = true;
//! let search = SearchQuery::new(
//!     BoolQuery::new()
//!         .filter(TermQuery::new("type", "article"))
//!         .filter(when(TermQuery::new("published", true), only_published))
//!         .must(RangeQuery::new("views").greater_than(100)),
//! )
//! .size(20)
//! .sort(Sort::new("views").order(SortOrder::Desc))
//! .source_includes(["title", "views"])
//! .aggs([NamedAggregation::new("by_author", Aggregation::terms("author"))]);
//!
//! let body = search.to_json_string()?;
//! assert!(body.starts_with(r#"{"_source":{"includes":["title","views"]}"#));
//! # Ok::<(), esdsl_query::QueryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Generates chainable setters that write one option key through `self.put`.
macro_rules! option_setters {
    ($($(#[$doc:meta])* $name:ident => $key:literal : $ty:ty;)+) => {
        $(
            $(#[$doc])*
            #[doc = concat!("\n\nWrites the `", $key, "` key.")]
            pub fn $name(self, value: $ty) -> Self {
                self.put($key, value)
            }
        )+
    };
}

mod aggregation;
pub mod condition;
mod config;
pub mod dsl;
mod enums;
mod error;
mod query;
mod search;
mod sort;
mod source;
mod types;

pub use aggregation::{AggOrder, Aggregation, NamedAggregation, TermAgg};
pub use condition::IntoClause;
pub use config::EncoderConfig;
pub use enums::{
    CollectMode, ExecutionHint, Operator, RangeRelation, ScoreMode, ScriptLanguage, SortMode,
    SortOrder, TextQueryType, ZeroTermsQuery,
};
pub use error::{QueryError, Result};
pub use query::{
    BoolQuery, ConstantScoreQuery, ExistsQuery, IdsQuery, InnerHits, MatchAllQuery,
    MatchBoolPrefixQuery, MatchNoneQuery, MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery,
    MultiMatchQuery, NestedQuery, Query, QueryStringQuery, RangeQuery, RegexpQuery, Script,
    ScriptQuery, SimpleQueryStringQuery, TermQuery, TermsQuery, TermsSetQuery,
};
pub use search::SearchQuery;
pub use sort::{NestedSort, Sort};
pub use source::SourceFilter;
pub use types::{Array, Object};

/// Prelude for common imports.
///
/// ```rust
/// use esdsl_query::prelude::*;
///
/// let query = BoolQuery::new().filter(TermQuery::new("id", 1));
/// assert!(!query.is_empty());
/// ```
pub mod prelude {
    pub use crate::clauses;
    pub use crate::condition::{when, when_with, IntoClause};
    pub use crate::{
        Aggregation, BoolQuery, ConstantScoreQuery, EncoderConfig, ExistsQuery, IdsQuery,
        MatchQuery, NamedAggregation, NestedQuery, Query, QueryError, RangeQuery, SearchQuery,
        Sort, SortOrder, SourceFilter, TermQuery, TermsQuery,
    };
}
