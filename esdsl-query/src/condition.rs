//! Conditional inclusion of clauses.
//!
//! An excluded clause is represented as `None`. Every place that attaches a
//! child clause to a parent accepts [`IntoClause`] and silently drops `None`,
//! so an excluded clause never shows up as `null` or `{}` in the output.

use crate::query::Query;

/// Conversion into an optional clause.
///
/// Implemented for every clause builder, for [`Query`] itself and for
/// `Option<T>` of any of those. `None` is the absent marker.
pub trait IntoClause {
    /// Convert, yielding `None` when the clause is absent.
    fn into_clause(self) -> Option<Query>;
}

impl IntoClause for Query {
    fn into_clause(self) -> Option<Query> {
        Some(self)
    }
}

impl<T: IntoClause> IntoClause for Option<T> {
    fn into_clause(self) -> Option<Query> {
        self.and_then(IntoClause::into_clause)
    }
}

/// Keep `item` only if `condition` holds.
///
/// ```rust
/// use esdsl_query::{condition::when, TermQuery};
///
/// let include_archived = false;
/// assert!(when(TermQuery::new("archived", true), include_archived).is_none());
/// ```
pub fn when<T>(item: T, condition: bool) -> Option<T> {
    condition.then_some(item)
}

/// Keep `item` only if `predicate(&item)` holds.
pub fn when_with<T, F>(item: T, predicate: F) -> Option<T>
where
    F: FnOnce(&T) -> bool,
{
    if predicate(&item) { Some(item) } else { None }
}

/// Build a clause list from heterogeneous clause builders.
///
/// Each element may be any [`IntoClause`] value, including absent markers.
/// The result feeds the `*_all` setters of [`BoolQuery`](crate::BoolQuery).
///
/// ```rust
/// use esdsl_query::{clauses, condition::when, BoolQuery, ExistsQuery, TermQuery};
/// use serde_json::json;
///
/// let query = BoolQuery::new().filter_all(clauses![
///     TermQuery::new("type", "File"),
///     when(ExistsQuery::new("deleted_at"), false),
/// ]);
/// assert_eq!(
///     query.to_json(),
///     json!({ "bool": { "filter": [{ "term": { "type": "File" } }] } })
/// );
/// ```
#[macro_export]
macro_rules! clauses {
    ($($clause:expr),* $(,)?) => {
        ::std::vec![$($crate::IntoClause::into_clause($clause)),*]
    };
}
