use pretty_assertions::assert_eq;
use quarry_core::ast::{DataSource, Decorator, Expr, JoinDef, JoinScope, RecordSet, Value};
use quarry_core::Result;
use quarry_sql::{Params, Placeholder, Serializer};

struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &Value) -> Placeholder {
        Placeholder(0)
    }
}

fn render(source: &DataSource) -> String {
    Serializer::debug()
        .serialize_data_source(source, &mut NoParams)
        .unwrap()
}

fn on_true(_: &JoinScope<'_>) -> Result<Expr> {
    Ok(Expr::raw("TRUE"))
}

#[test]
fn single_record_set() {
    let source = DataSource::single(RecordSet::raw("foo"));

    assert_eq!(render(&source), "FROM [foo]");
}

#[test]
fn aliased_record_set() {
    let set = RecordSet::raw("foo").with_alias("f").unwrap();

    assert_eq!(render(&DataSource::single(set)), "FROM [foo] AS [f]");
}

#[test]
fn left_join_with_decorators() {
    let source = DataSource::multi(
        RecordSet::raw("foo"),
        vec![JoinDef::left(RecordSet::raw("bar"), on_true)],
    )
    .unwrap()
    .decorate(Decorator::and(Expr::raw("a > 10")))
    .decorate(Decorator::or(Expr::raw("b > 15")));

    assert_eq!(
        render(&source),
        "FROM [foo]\n\
         LEFT JOIN [bar] ON\n    (TRUE)\n\
         AND WHERE\n    (a > 10)\n\
         OR WHERE\n    (b > 15)"
    );
}

#[test]
fn every_join_kind_keyword() {
    let source = DataSource::multi(
        RecordSet::raw("a"),
        vec![
            JoinDef::inner(RecordSet::raw("b"), on_true),
            JoinDef::right(RecordSet::raw("c"), on_true),
            JoinDef::full(RecordSet::raw("d"), on_true),
            JoinDef::cross(RecordSet::raw("e")),
        ],
    )
    .unwrap();

    assert_eq!(
        render(&source),
        "FROM [a]\n\
         INNER JOIN [b] ON\n    (TRUE)\n\
         RIGHT JOIN [c] ON\n    (TRUE)\n\
         FULL JOIN [d] ON\n    (TRUE)\n\
         CROSS JOIN [e]"
    );
}

#[test]
fn internal_wrapper_renders_parenthesized() {
    let inner = DataSource::multi(
        RecordSet::raw("a"),
        vec![JoinDef::cross(RecordSet::raw("b"))],
    )
    .unwrap();
    let source = DataSource::single(RecordSet::internal(inner));

    assert_eq!(render(&source), "FROM ([a]\nCROSS JOIN [b])");
}

#[test]
fn query_backed_record_set_renders_as_subquery() {
    let set = RecordSet::raw_query("sub", quarry_core::ast::Query::raw("SELECT 1"));

    assert_eq!(
        render(&DataSource::single(set)),
        "FROM (SELECT 1) AS [sub]"
    );
}

#[test]
fn dummy_source_renders_nothing() {
    assert_eq!(render(&DataSource::dummy()), "");
}

#[test]
fn custom_delimiters() {
    let source = DataSource::single(RecordSet::raw("foo"));
    let rendered = Serializer::new('"', '"')
        .serialize_data_source(&source, &mut NoParams)
        .unwrap();

    assert_eq!(rendered, "FROM \"foo\"");
}
