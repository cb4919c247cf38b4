use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use criterion::Throughput;
use gqlengine_parser::token_source::StrGraphQLTokenSource;
use gqlengine_parser::GraphQLParser;

const STARWARS_SCHEMA: &str = r#"
schema { query: Query mutation: Mutation subscription: Subscription }

"The episodes in the Star Wars trilogy"
enum Episode { NEWHOPE EMPIRE JEDI }

interface Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
}

type Human implements Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
}

type Droid implements Character {
  id: ID!
  name: String!
  friends: [Character]
  appearsIn: [Episode]!
  primaryFunction: String
}

enum LengthUnit { METER FOOT }

union SearchResult = Human | Droid

input ReviewInput { stars: Int! commentary: String }

type Review { episode: Episode stars: Int! commentary: String }

type Query {
  hero(episode: Episode): Character
  human(id: ID!): Human
  droid(id: ID!): Droid
  search(text: String!): [SearchResult!]!
}

type Mutation { createReview(episode: Episode, review: ReviewInput!): Review }

type Subscription { reviewAdded(episode: Episode): Review }
"#;

const COMPLEX_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $withHeight: Boolean!) {
  leftComparison: hero(episode: EMPIRE) { ...comparisonFields }
  rightComparison: hero(episode: JEDI) { ...comparisonFields }
  search(text: "an") {
    __typename
    ... on Human { name height(unit: FOOT) @include(if: $withHeight) }
    ... on Droid { name primaryFunction }
  }
}

fragment comparisonFields on Character {
  name
  appearsIn
  friends { name ... on Droid { primaryFunction } }
}
"#;

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");
    group.throughput(Throughput::Bytes(STARWARS_SCHEMA.len() as u64));
    group.bench_function("starwars", |b| {
        b.iter(|| {
            black_box(GraphQLParser::new(STARWARS_SCHEMA).parse_schema_document())
        })
    });
    group.finish();
}

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");
    group.throughput(Throughput::Bytes(COMPLEX_QUERY.len() as u64));
    group.bench_function("complex_query", |b| {
        b.iter(|| {
            black_box(GraphQLParser::new(COMPLEX_QUERY).parse_executable_document())
        })
    });
    group.finish();
}

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.bench_function("starwars_schema", |b| {
        b.iter(|| black_box(StrGraphQLTokenSource::new(STARWARS_SCHEMA).count()))
    });
    group.finish();
}

fn print(c: &mut Criterion) {
    let doc = GraphQLParser::new(COMPLEX_QUERY)
        .parse_executable_document()
        .expect("fixture parses");
    c.bench_function("print_complex_query", |b| {
        b.iter(|| black_box(doc.to_graphql_string()))
    });
}

criterion_group!(benches, schema_parse, executable_parse, lexer, print);
criterion_main!(benches);
