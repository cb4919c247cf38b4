//! Printing a parsed document and parsing the output again must produce an
//! equal tree (ignoring source spans).

use crate::tests::utils::debug_without_spans;
use crate::tests::utils::parse_executable;
use crate::tests::utils::parse_mixed;
use crate::tests::utils::parse_schema;
use proptest::prelude::*;

fn assert_executable_round_trips(source: &str) {
    let original = parse_executable(source);
    let printed = original.to_graphql_string();
    let reparsed = parse_executable(&printed);
    assert_eq!(
        debug_without_spans(&original),
        debug_without_spans(&reparsed),
        "printed form:\n{printed}",
    );
}

fn assert_schema_round_trips(source: &str) {
    let original = parse_schema(source);
    let printed = original.to_graphql_string();
    let reparsed = parse_schema(&printed);
    assert_eq!(
        debug_without_spans(&original),
        debug_without_spans(&reparsed),
        "printed form:\n{printed}",
    );
}

#[test]
fn prints_canonical_query() {
    let doc = parse_executable("query Q($id:ID!){hero(id:$id){name,...F @skip(if:false)}}");
    assert_eq!(
        doc.to_graphql_string(),
        "query Q($id: ID!) {\n  hero(id: $id) {\n    name\n    ...F @skip(if: false)\n  }\n}\n",
    );
}

#[test]
fn anonymous_query_prints_as_shorthand() {
    let doc = parse_executable("query { a }");
    assert_eq!(doc.to_graphql_string(), "{\n  a\n}\n");
}

#[test]
fn floats_keep_a_fractional_part() {
    let doc = parse_executable("{ f(a: 1.0, b: 2.5e3) }");
    assert_eq!(doc.to_graphql_string(), "{\n  f(a: 1.0, b: 2500.0)\n}\n");
}

#[test]
fn executable_documents_round_trip() {
    assert_executable_round_trips(
        r#"
        query HeroForEpisode($ep: Episode = JEDI, $withFriends: Boolean!) @live {
          hero(episode: $ep) {
            name
            ... on Droid { primaryFunction }
            friends @include(if: $withFriends) { ...Names }
            meta(filter: { tags: ["a", "b\"c"], limit: -3, ratio: 0.5, on: null })
          }
        }
        mutation { createReview(review: { stars: 5 }) { stars } }
        subscription OnReview { reviewAdded { stars } }
        fragment Names on Character { name alias: id }
        "#,
    );
}

#[test]
fn block_strings_round_trip() {
    assert_executable_round_trips(
        "{ f(a: \"\"\"\n  line one\n    line two\n\"\"\", b: \"\"\"  lead\"\"\") }",
    );
}

#[test]
fn schema_documents_round_trip() {
    assert_schema_round_trips(
        r#"
        """
        The root.
        Multi-line.
        """
        schema { query: Query mutation: Mutation }

        "single line"
        type Query implements Node @key(fields: "id") {
          "field doc"
          hero(episode: Episode = NEWHOPE, "arg doc" first: Int): Character @deprecated
          list: [[Int!]]!
        }
        interface Node { id: ID! }
        union Result = Human | Droid
        enum Episode { NEWHOPE EMPIRE @deprecated(reason: "old") JEDI }
        input ReviewInput { stars: Int! = 3 commentary: String }
        scalar DateTime
        directive @key(fields: String!) repeatable on OBJECT | INTERFACE
        extend type Query { extra: String }
        extend schema @dir
        "#,
    );
}

#[test]
fn mixed_document_round_trips() {
    let original = parse_mixed("type Query { a: Int }\n{ a }");
    let reparsed = parse_mixed(&original.to_graphql_string());
    assert_eq!(debug_without_spans(&original), debug_without_spans(&reparsed));
}

// =============================================================================
// Property: random queries round trip through the printer
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,6}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(|i| i.to_string()),
        (-1000i32..1000, 1u32..100).prop_map(|(i, f)| format!("{i}.{f}")),
        "[a-z \\\\\"]{0,8}".prop_map(|s| {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }),
        Just("true".to_string()),
        Just("null".to_string()),
        "[A-Z][A-Z_]{0,5}",
        name_strategy().prop_map(|n| format!("${n}")),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::vec((name_strategy(), inner), 0..3).prop_map(|fields| {
                let body: Vec<String> =
                    fields.into_iter().map(|(n, v)| format!("{n}: {v}")).collect();
                format!("{{{}}}", body.join(", "))
            }),
        ]
    })
}

fn field_strategy() -> impl Strategy<Value = String> {
    let leaf = (
        prop::option::of(name_strategy()),
        name_strategy(),
        prop::collection::vec((name_strategy(), value_strategy()), 0..3),
    )
        .prop_map(|(alias, name, args)| {
            let mut out = String::new();
            if let Some(alias) = alias {
                out.push_str(&format!("{alias}: "));
            }
            out.push_str(&name);
            if !args.is_empty() {
                let args: Vec<String> =
                    args.into_iter().map(|(n, v)| format!("{n}: {v}")).collect();
                out.push_str(&format!("({})", args.join(", ")));
            }
            out
        });
    leaf.prop_recursive(3, 24, 4, |inner| {
        (name_strategy(), prop::collection::vec(inner, 1..4)).prop_map(
            |(name, children)| format!("{name} {{ {} }}", children.join(" ")),
        )
    })
}

proptest! {
    #[test]
    fn random_queries_round_trip(fields in prop::collection::vec(field_strategy(), 1..5)) {
        let source = format!("{{ {} }}", fields.join(" "));
        let original = parse_executable(&source);
        let reparsed = parse_executable(&original.to_graphql_string());
        prop_assert_eq!(debug_without_spans(&original), debug_without_spans(&reparsed));
    }
}
