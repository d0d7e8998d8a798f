//! Integration tests for common query-building workflows.
//!
//! Each test builds a document through the fluent API and compares it with a
//! hand-written reference, either as exact JSON text or structurally.

use esdsl::dsl::*;
use esdsl::{clauses, EncoderConfig, QueryError, ScoreMode, SortMode, SortOrder, TermAgg};
use serde_json::{json, Value};

fn without_21(_: &str, values: &[i32]) -> bool {
    !values.contains(&21)
}

fn conditional_query(items: Vec<i32>) -> esdsl::SearchQuery {
    new_query(
        bool_query()
            .filter_all(clauses![
                range("indexedAt").greater_than("2021-01-01").lesser_than_or_equal("now"),
                term("type", "File"),
                terms("sector", [1, 2, 3]),
                terms_func("id", items, without_21),
            ])
            .must_not(exists("blocks.reason.id")),
    )
    .size(100)
    .sort(sort("modifiedDate").order(SortOrder::Desc))
    .source_includes(["id", "type", "indexedAt", "chapters"])
    .source_excludes(["private.key"])
}

// =============================================================================
// Reference Documents
// =============================================================================

#[test]
fn test_single_filter_document() {
    let search = new_query(bool_query().filter(term("id", 123456)));
    assert_eq!(
        search.to_json_string().unwrap(),
        r#"{"query":{"bool":{"filter":[{"term":{"id":123456}}]}}}"#
    );
}

#[test]
fn test_conditional_document_drops_gated_terms() {
    let search = conditional_query(vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    assert_eq!(
        search.to_json_string().unwrap(),
        concat!(
            r#"{"_source":{"excludes":["private.key"],"includes":["id","type","indexedAt","chapters"]},"#,
            r#""query":{"bool":{"filter":[{"range":{"indexedAt":{"gt":"2021-01-01","lte":"now"}}},"#,
            r#"{"term":{"type":"File"}},{"terms":{"sector":[1,2,3]}}],"#,
            r#""must_not":[{"exists":{"field":"blocks.reason.id"}}]}},"#,
            r#""size":100,"sort":[{"modifiedDate":{"order":"desc"}}]}"#
        )
    );
}

#[test]
fn test_conditional_document_keeps_terms_when_predicate_holds() {
    let search = conditional_query(vec![1, 2, 3]);
    let filter = &search.to_json()["query"]["bool"]["filter"];
    assert_eq!(filter.as_array().map(Vec::len), Some(4));
    assert_eq!(filter[3], json!({ "terms": { "id": [1, 2, 3] } }));
}

#[test]
fn test_nested_document() {
    let search = new_query(nested(
        "driver",
        nested(
            "driver.vehicle",
            bool_query().must_all([
                term("driver.vehicle.make", "Powell Motors"),
                term("driver.vehicle.model", "Canyonero"),
            ]),
        ),
    ));
    assert_eq!(
        search.to_json_string().unwrap(),
        concat!(
            r#"{"query":{"nested":{"path":"driver","query":{"nested":{"path":"driver.vehicle","#,
            r#""query":{"bool":{"must":[{"term":{"driver.vehicle.make":"Powell Motors"}},"#,
            r#"{"term":{"driver.vehicle.model":"Canyonero"}}]}}}}}}}"#
        )
    );
}

#[test]
fn test_complex_document() {
    let id = 76;
    let search = new_query(
        bool_query()
            .must(bool_query().should_all([
                term("doc.id", id),
                term("file.fileId", id),
                term("page.number", id),
            ]))
            .filter_all(clauses![term("type", "File"), terms("sector", [1, 2, 3])])
            .must_not(exists("blocks.reason.id"))
            .minimum_should_match(1)
            .boost(2.5),
    )
    .track_total_hits(true)
    .size(100)
    .from(5000)
    .sort_all([
        sort("modifiedDate").order(SortOrder::Desc),
        sort_with_mode("name", SortOrder::Asc, SortMode::Median),
        sort("indexedAt").order(SortOrder::Asc),
    ])
    .source_includes(["id", "type", "indexedAt", "chapters"])
    .source_excludes(["private.key", "cipher"]);

    let expected = json!({
        "_source": {
            "includes": ["id", "type", "indexedAt", "chapters"],
            "excludes": ["private.key", "cipher"]
        },
        "size": 100,
        "from": 5000,
        "track_total_hits": true,
        "sort": [
            { "modifiedDate": { "order": "desc" } },
            { "name": { "order": "asc", "mode": "median" } },
            { "indexedAt": { "order": "asc" } }
        ],
        "query": {
            "bool": {
                "minimum_should_match": 1,
                "boost": 2.5,
                "must": [{
                    "bool": {
                        "should": [
                            { "term": { "doc.id": 76 } },
                            { "term": { "file.fileId": 76 } },
                            { "term": { "page.number": 76 } }
                        ]
                    }
                }],
                "filter": [
                    { "term": { "type": "File" } },
                    { "terms": { "sector": [1, 2, 3] } }
                ],
                "must_not": [{ "exists": { "field": "blocks.reason.id" } }]
            }
        }
    });

    assert_eq!(search.to_json(), expected);
    assert_eq!(
        search.to_json_string().unwrap(),
        serde_json::to_string(&expected).unwrap()
    );
}

#[test]
fn test_aggs_document() {
    let search = new_query(
        bool_query()
            .must(term("type", "File"))
            .must_not(exists("file.name")),
    )
    .size(5000)
    .sort_all([
        sort("modifiedDate").order(SortOrder::Desc),
        sort("indexedAt").order(SortOrder::Desc),
    ])
    .aggs([agg(
        "DocumentIds",
        terms_agg("document.id").size(250).aggs([agg(
            "OrderCounts",
            multi_terms_agg([
                TermAgg::new("document.orders.count"),
                TermAgg::new("files.order.count").missing("book.meta.author"),
            ]),
        )]),
    )]);

    assert_eq!(
        search.to_json_string().unwrap(),
        concat!(
            r#"{"aggs":{"DocumentIds":{"aggs":{"OrderCounts":{"multi_terms":{"terms":["#,
            r#"{"field":"document.orders.count"},"#,
            r#"{"field":"files.order.count","missing":"book.meta.author"}]}}},"#,
            r#""terms":{"field":"document.id","size":250}}},"#,
            r#""query":{"bool":{"must":[{"term":{"type":"File"}}],"must_not":[{"exists":{"field":"file.name"}}]}},"#,
            r#""size":5000,"sort":[{"modifiedDate":{"order":"desc"}},{"indexedAt":{"order":"desc"}}]}"#
        )
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_false_condition_never_leaves_null_or_empty() {
    let search = new_query(
        bool_query()
            .filter(when(term("a", 1), false))
            .filter(term("b", 2))
            .should(term_if("c", 3, false))
            .must(exists_if("d", false)),
    );
    let text = search.to_json_string().unwrap();
    assert!(!text.contains("null"));
    assert!(!text.contains("{}"));
    assert!(!text.contains("should"));
    assert!(!text.contains("must"));
    assert_eq!(text, r#"{"query":{"bool":{"filter":[{"term":{"b":2}}]}}}"#);
}

#[test]
fn test_must_accumulation_matches_single_call() {
    let split = bool_query().must_all([term("a", 1), term("b", 2)]).must(term("c", 3));
    let joined = bool_query().must_all([term("a", 1), term("b", 2), term("c", 3)]);
    assert_eq!(split.to_json(), joined.to_json());
}

#[test]
fn test_sort_keeps_call_order() {
    let json = new_query(match_all())
        .sort_all([sort("f1"), sort("f2")])
        .to_json();
    assert_eq!(json["sort"][0], json!({ "f1": {} }));
    assert_eq!(json["sort"][1], json!({ "f2": {} }));
}

#[test]
fn test_half_open_range() {
    let search = new_query(range("f").greater_than(25).lesser_than_or_equal(30));
    assert_eq!(
        search.to_json_string().unwrap(),
        r#"{"query":{"range":{"f":{"gt":25,"lte":30}}}}"#
    );
}

#[test]
fn test_deep_aggs_tree() {
    let search = new_aggs([agg(
        "A",
        terms_agg("x").aggs([agg(
            "B",
            avg_agg("y").aggs([agg("C", nested_agg("n").aggs([agg("D", max_agg("z"))]))]),
        )]),
    )]);
    let json = search.to_json();
    assert_eq!(json["aggs"]["A"]["terms"]["field"], json!("x"));
    assert_eq!(json["aggs"]["A"]["aggs"]["B"]["avg"]["field"], json!("y"));
    assert_eq!(
        json["aggs"]["A"]["aggs"]["B"]["aggs"]["C"]["aggs"]["D"],
        json!({ "max": { "field": "z" } })
    );
}

#[test]
fn test_source_includes_vs_false() {
    let with_fields = new_query(match_all())
        .source_includes(["a", "b"])
        .source_excludes(["c"]);
    assert_eq!(
        with_fields.to_json()["_source"],
        json!({ "includes": ["a", "b"], "excludes": ["c"] })
    );

    let disabled = new_query(match_all()).source_false();
    assert_eq!(disabled.to_json()["_source"], json!(false));

    let last_wins = with_fields.source_false();
    assert_eq!(last_wins.to_json()["_source"], json!(false));
}

#[test]
fn test_round_trip_per_clause_kind() {
    let cases: Vec<(esdsl::SearchQuery, Value)> = vec![
        (new_query(term("k", "v")), json!({ "query": { "term": { "k": "v" } } })),
        (new_query(terms("k", [1, 2])), json!({ "query": { "terms": { "k": [1, 2] } } })),
        (
            new_query(range("k").gte(1).lt(2)),
            json!({ "query": { "range": { "k": { "gte": 1, "lt": 2 } } } }),
        ),
        (
            new_query(bool_query().must(exists("k"))),
            json!({ "query": { "bool": { "must": [{ "exists": { "field": "k" } }] } } }),
        ),
        (
            new_query(nested("p", term("p.k", 1)).score_mode(ScoreMode::Avg)),
            json!({ "query": { "nested": { "path": "p", "query": { "term": { "p.k": 1 } }, "score_mode": "avg" } } }),
        ),
        (new_query(exists("k")), json!({ "query": { "exists": { "field": "k" } } })),
        (
            new_aggs([agg("n", terms_agg("k"))]),
            json!({ "aggs": { "n": { "terms": { "field": "k" } } } }),
        ),
    ];

    for (search, reference) in cases {
        let encoded = search.to_json_string().unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, reference, "mismatch for {encoded}");
    }
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn test_pretty_encoding_from_config() {
    let search = new_query(term("a", 1));
    let config = EncoderConfig::new().with_pretty(true).with_indent(4);
    assert_eq!(
        search.encode(&config).unwrap(),
        "{\n    \"query\": {\n        \"term\": {\n            \"a\": 1\n        }\n    }\n}"
    );
}

#[test]
fn test_write_to_buffer() {
    let mut buffer = Vec::new();
    new_query(match_none())
        .write_to(&mut buffer, &EncoderConfig::default())
        .unwrap();
    assert_eq!(buffer, br#"{"query":{"match_none":{}}}"#.to_vec());
}

#[test]
fn test_encoder_error_is_a_query_error() {
    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let result = new_query(term("a", 1)).write_to(Closed, &EncoderConfig::new());
    assert!(matches!(result, Err(QueryError::Serialization(_))));
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    let boosted = new_query(term("a", 1).boost(f64::NAN)).size(1);
    assert!(matches!(boosted.to_json_string(), Err(QueryError::Serialization(_))));

    let unbounded = new_query(range("p").gt(f64::INFINITY));
    assert!(matches!(unbounded.to_json_pretty(), Err(QueryError::Serialization(_))));
}

#[test]
fn test_empty_source_lists_leave_source_alone() {
    let fresh = new_query(match_all()).source_includes(Vec::<String>::new());
    assert_eq!(fresh.to_json_string().unwrap(), r#"{"query":{"match_all":{}}}"#);

    let disabled = new_query(match_all()).source_false().source_includes(Vec::<String>::new());
    assert_eq!(
        disabled.to_json_string().unwrap(),
        r#"{"_source":false,"query":{"match_all":{}}}"#
    );
}

#[test]
fn test_log_crate_is_reexported() {
    esdsl::log::set_level(esdsl::log::Level::Off);
    assert!(!esdsl::log::is_level_enabled(esdsl::log::Level::Error));
}
