//! `_source` filtering.

use crate::types::{string_array, Object};
use serde_json::Value;

/// Which parts of `_source` to return.
///
/// `includes` and `excludes` accumulate. `Disabled` renders as `false`.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceFilter {
    /// `"_source": false`
    Disabled,
    /// `"_source": {"includes": [..], "excludes": [..]}`
    Fields {
        /// Fields to return.
        includes: Vec<String>,
        /// Fields to leave out.
        excludes: Vec<String>,
    },
}

impl Default for SourceFilter {
    fn default() -> Self {
        SourceFilter::Fields {
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }
}

impl SourceFilter {
    /// An empty filter, rendered as `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Don't return `_source` at all.
    pub fn disabled() -> Self {
        SourceFilter::Disabled
    }

    /// Add fields to return. Turns a disabled filter back into a field filter.
    /// An empty list leaves the filter unchanged.
    pub fn includes(self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let fields = collect_fields(fields);
        if fields.is_empty() {
            return self;
        }
        let (mut includes, excludes) = self.into_fields();
        includes.extend(fields);
        SourceFilter::Fields { includes, excludes }
    }

    /// Add fields to leave out. Turns a disabled filter back into a field filter.
    /// An empty list leaves the filter unchanged.
    pub fn excludes(self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let fields = collect_fields(fields);
        if fields.is_empty() {
            return self;
        }
        let (includes, mut excludes) = self.into_fields();
        excludes.extend(fields);
        SourceFilter::Fields { includes, excludes }
    }

    fn into_fields(self) -> (Vec<String>, Vec<String>) {
        match self {
            SourceFilter::Disabled => (Vec::new(), Vec::new()),
            SourceFilter::Fields { includes, excludes } => (includes, excludes),
        }
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Value {
        match self {
            SourceFilter::Disabled => Value::Bool(false),
            SourceFilter::Fields { includes, excludes } => {
                let mut body = Object::new();
                if !includes.is_empty() {
                    body.insert("includes".to_string(), string_array(includes.iter().cloned()));
                }
                if !excludes.is_empty() {
                    body.insert("excludes".to_string(), string_array(excludes.iter().cloned()));
                }
                Value::Object(body)
            }
        }
    }
}

pub(crate) fn collect_fields(fields: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    fields.into_iter().map(Into::into).collect()
}

impl From<SourceFilter> for Value {
    fn from(source: SourceFilter) -> Self {
        source.to_json()
    }
}
