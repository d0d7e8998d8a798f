// esdsl - A fluent builder for Elasticsearch/OpenSearch query DSL documents
//
// This library composes query clauses, sorts, source filters and aggregation
// trees and encodes them to the JSON shape the search engine expects.

// Re-export the query builder
pub use esdsl_query::*;

// Re-export logging
pub use esdsl_log as log;
