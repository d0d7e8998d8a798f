//! Range query.

use crate::enums::RangeRelation;
use crate::types::FieldBody;
use serde_json::Value;

/// Range query for numeric, date and string bounds.
///
/// `gt`/`gte` exclude each other, as do `lt`/`lte`: setting one removes the
/// other. Upper and lower bounds combine freely and are not checked against
/// each other.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    inner: FieldBody,
}

impl RangeQuery {
    /// Create a new range query with no bounds.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            inner: FieldBody::new(field),
        }
    }

    /// Set greater than.
    pub fn greater_than(self, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put("gt", value).remove("gte") }
    }

    /// Set greater than or equal.
    pub fn greater_than_or_equal(self, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put("gte", value).remove("gt") }
    }

    /// Set less than.
    pub fn less_than(self, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put("lt", value).remove("lte") }
    }

    /// Set less than or equal.
    pub fn less_than_or_equal(self, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put("lte", value).remove("lt") }
    }

    /// Alias of [`less_than`](Self::less_than).
    pub fn lesser_than(self, value: impl Into<Value>) -> Self {
        self.less_than(value)
    }

    /// Alias of [`less_than_or_equal`](Self::less_than_or_equal).
    pub fn lesser_than_or_equal(self, value: impl Into<Value>) -> Self {
        self.less_than_or_equal(value)
    }

    /// Shorthand for [`greater_than`](Self::greater_than).
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.greater_than(value)
    }

    /// Shorthand for [`greater_than_or_equal`](Self::greater_than_or_equal).
    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.greater_than_or_equal(value)
    }

    /// Shorthand for [`less_than`](Self::less_than).
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.less_than(value)
    }

    /// Shorthand for [`less_than_or_equal`](Self::less_than_or_equal).
    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.less_than_or_equal(value)
    }

    /// Date format for date fields.
    pub fn format(self, format: impl Into<String>) -> Self {
        Self { inner: self.inner.put("format", format.into()) }
    }

    /// Time zone for date bounds, e.g. `"+01:00"`.
    pub fn time_zone(self, time_zone: impl Into<String>) -> Self {
        Self { inner: self.inner.put("time_zone", time_zone.into()) }
    }

    /// Set boost.
    pub fn boost(self, boost: f64) -> Self {
        Self { inner: self.inner.put("boost", boost) }
    }

    /// Legacy lower bound.
    pub fn from(self, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put("from", value) }
    }

    /// Legacy upper bound.
    pub fn to(self, value: impl Into<Value>) -> Self {
        Self { inner: self.inner.put("to", value) }
    }

    /// Matching rule for range-typed fields.
    pub fn relation(self, relation: RangeRelation) -> Self {
        Self { inner: self.inner.put("relation", relation) }
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        self.inner.to_json("range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_half_open_interval() {
        let range = RangeQuery::new("f").greater_than(25).lesser_than_or_equal(30);
        assert_eq!(
            serde_json::to_string(&range.to_json()).unwrap(),
            r#"{"range":{"f":{"gt":25,"lte":30}}}"#
        );
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(RangeQuery::new("age").to_json(), json!({ "range": { "age": {} } }));
    }

    #[test]
    fn test_exclusive_bounds_replace_each_other() {
        let range = RangeQuery::new("age").gt(10).gte(11).lte(20).lt(21);
        assert_eq!(range.to_json(), json!({ "range": { "age": { "gte": 11, "lt": 21 } } }));
    }

    #[test]
    fn test_no_order_validation() {
        let inverted = RangeQuery::new("age").gt(50).lt(10);
        assert_eq!(inverted.to_json(), json!({ "range": { "age": { "gt": 50, "lt": 10 } } }));
    }

    #[test]
    fn test_date_options() {
        let range = RangeQuery::new("indexedAt")
            .greater_than("2021-01-01")
            .less_than_or_equal("now")
            .format("yyyy-MM-dd")
            .time_zone("+03:00")
            .relation(RangeRelation::Within)
            .boost(2.0);
        assert_eq!(
            range.to_json(),
            json!({
                "range": {
                    "indexedAt": {
                        "gt": "2021-01-01",
                        "lte": "now",
                        "format": "yyyy-MM-dd",
                        "time_zone": "+03:00",
                        "relation": "within",
                        "boost": 2.0
                    }
                }
            })
        );
    }

    #[test]
    fn test_legacy_from_to() {
        let range = RangeQuery::new("price").from(10).to(20);
        assert_eq!(range.to_json(), json!({ "range": { "price": { "from": 10, "to": 20 } } }));
    }
}
