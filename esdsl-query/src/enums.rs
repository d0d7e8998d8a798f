//! Typed values for the string-valued options of the query DSL.

use serde::{Serialize, Serializer};
use serde_json::Value;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Wire name of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::String(value.as_str().to_string())
            }
        }
    };
}

wire_enum! {
    /// Boolean operator joining the terms of a full-text query.
    Operator {
        /// Any term may match.
        Or => "or",
        /// All terms must match.
        And => "and",
    }
}

wire_enum! {
    /// What a full-text query matches when the analyzer removes every token.
    ZeroTermsQuery {
        /// Match all documents.
        All => "all",
        /// Match no documents.
        None => "none",
    }
}

wire_enum! {
    /// Execution strategy of `multi_match` and `query_string`.
    TextQueryType {
        /// Score by the best matching field.
        BestFields => "best_fields",
        /// Combine scores of all matching fields.
        MostFields => "most_fields",
        /// Treat fields as one big field.
        CrossFields => "cross_fields",
        /// Phrase match on each field.
        Phrase => "phrase",
        /// Phrase-prefix match on each field.
        PhrasePrefix => "phrase_prefix",
        /// Bool-prefix match on each field.
        BoolPrefix => "bool_prefix",
    }
}

wire_enum! {
    /// How matching child documents affect the score of a nested query.
    ScoreMode {
        /// Mean child score.
        Avg => "avg",
        /// Highest child score.
        Max => "max",
        /// Lowest child score.
        Min => "min",
        /// Ignore child scores.
        None => "none",
        /// Sum of child scores.
        Sum => "sum",
    }
}

wire_enum! {
    /// Sort direction.
    SortOrder {
        /// Ascending.
        Asc => "asc",
        /// Descending.
        Desc => "desc",
        /// Engine default.
        Default => "_default",
    }
}

wire_enum! {
    /// How a multi-valued field is reduced to one sort value.
    SortMode {
        /// Lowest value.
        Min => "min",
        /// Highest value.
        Max => "max",
        /// Sum of values.
        Sum => "sum",
        /// Mean value.
        Avg => "avg",
        /// Median value.
        Median => "median",
        /// Engine default.
        Default => "_default",
    }
}

wire_enum! {
    /// How a range query treats range-typed fields.
    RangeRelation {
        /// Field range lies entirely within the query range.
        Within => "within",
        /// Field range contains the query range.
        Contains => "contains",
        /// Ranges overlap.
        Intersects => "intersects",
    }
}

wire_enum! {
    /// Scripting language.
    ScriptLanguage {
        /// Painless.
        Painless => "painless",
        /// Lucene expressions.
        Expression => "expression",
        /// Mustache templates.
        Mustache => "mustache",
        /// Java.
        Java => "java",
    }
}

wire_enum! {
    /// Tree expansion strategy of bucket aggregations.
    CollectMode {
        /// Build one level at a time.
        BreadthFirst => "breadth_first",
        /// Build the whole tree before pruning.
        DepthFirst => "depth_first",
    }
}

wire_enum! {
    /// Execution mechanism of a terms aggregation.
    ExecutionHint {
        /// Use field values directly.
        Map => "map",
        /// Use global ordinals.
        GlobalOrdinals => "global_ordinals",
        /// Use fielddata.
        FieldData => "fielddata",
    }
}
