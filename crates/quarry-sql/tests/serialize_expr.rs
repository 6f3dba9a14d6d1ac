use pretty_assertions::assert_eq;
use quarry_core::ast::{
    BaseType, BinaryOp, Expr, ExprFunc, ExprType, QueryTrait, RecordSet, Value,
};
use quarry_core::schema::{Column, Table};
use quarry_sql::{Params, Placeholder, Serializer};

struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _: &Value) -> Placeholder {
        Placeholder(0)
    }
}

fn debug(expr: &Expr) -> String {
    Serializer::debug().serialize_expr(expr, &mut NoParams).unwrap()
}

fn users() -> RecordSet {
    RecordSet::table(Table::new(
        "users",
        vec![Column::new("id", BaseType::I64, false)],
    ))
}

// ---------------------------------------------------------------------------
// Debug mode: typed inline literals
// ---------------------------------------------------------------------------

#[test]
fn debug_literal_carries_its_type() {
    assert_eq!(debug(&Expr::value(10i32)), "(\"10\" : I32)");
    assert_eq!(debug(&Expr::value("hi")), "(\"hi\" : String)");
    assert_eq!(debug(&Expr::value(true)), "(\"true\" : Bool)");
}

#[test]
fn null_renders_bare_in_both_modes() {
    assert_eq!(debug(&Expr::Value(Value::Null)), "NULL");

    let mut params: Vec<Value> = vec![];
    let rendered = Serializer::new('[', ']')
        .serialize_expr(&Expr::Value(Value::Null), &mut params)
        .unwrap();
    assert_eq!(rendered, "NULL");
    assert!(params.is_empty());
}

// ---------------------------------------------------------------------------
// Production mode: placeholders
// ---------------------------------------------------------------------------

#[test]
fn production_literals_become_placeholders() {
    let set = users();
    let expr = Expr::eq(set.field("id").unwrap(), Expr::value(10i64));

    let mut params: Vec<Value> = vec![];
    let rendered = Serializer::new('"', '"')
        .serialize_expr(&expr, &mut params)
        .unwrap();

    assert_eq!(rendered, "\"users\".\"id\" = ?1");
    assert_eq!(params, [Value::I64(10)]);
}

#[test]
fn placeholders_number_in_encounter_order() {
    let expr = Expr::and(
        Expr::eq(Expr::raw("a"), Expr::value(1i64)),
        Expr::eq(Expr::raw("b"), Expr::value(2i64)),
    );

    let mut params: Vec<Value> = vec![];
    let rendered = Serializer::new('[', ']')
        .serialize_expr(&expr, &mut params)
        .unwrap();

    assert_eq!(rendered, "a = ?1 AND b = ?2");
    assert_eq!(params, [Value::I64(1), Value::I64(2)]);
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

#[test]
fn nested_boolean_operands_keep_their_grouping() {
    let expr = Expr::or(
        Expr::and(Expr::raw("a"), Expr::raw("b")),
        Expr::raw("c"),
    );

    assert_eq!(debug(&expr), "(a AND b) OR c");
}

#[test]
fn comparison_operands_group_composites() {
    let expr = Expr::binary_op(
        Expr::and(Expr::raw("a"), Expr::raw("b")),
        BinaryOp::Eq,
        Expr::raw("c"),
    );

    assert_eq!(debug(&expr), "(a AND b) = c");
}

#[test]
fn not_and_is_null() {
    assert_eq!(debug(&Expr::not(Expr::raw("a"))), "NOT a");
    assert_eq!(
        debug(&Expr::not(Expr::and(Expr::raw("a"), Expr::raw("b")))),
        "NOT (a AND b)"
    );
    assert_eq!(debug(&Expr::is_null(Expr::raw("a"))), "a IS NULL");
}

#[test]
fn binary_operators_render_sql_spellings() {
    let cases = [
        (BinaryOp::Eq, "="),
        (BinaryOp::Ne, "<>"),
        (BinaryOp::Ge, ">="),
        (BinaryOp::Gt, ">"),
        (BinaryOp::Le, "<="),
        (BinaryOp::Lt, "<"),
    ];

    for (op, spelling) in cases {
        let expr = Expr::binary_op(Expr::raw("a"), op, Expr::raw("b"));
        assert_eq!(debug(&expr), format!("a {spelling} b"));
    }
}

// ---------------------------------------------------------------------------
// Function calls
// ---------------------------------------------------------------------------

#[test]
fn plain_count() {
    assert_eq!(debug(&Expr::count(Expr::raw("x"))), "COUNT(x)");
}

#[test]
fn aggregate_call_traits_render_distinct_and_filter() {
    let func = ExprFunc::new(
        "COUNT",
        vec![Expr::raw("x")],
        ExprType::typed(BaseType::I64, false),
    )
    .with_trait(QueryTrait::Distinct)
    .with_trait(QueryTrait::filter(Expr::raw("y > 1"), true));

    assert_eq!(
        debug(&Expr::Func(func)),
        "COUNT(DISTINCT x) FILTER (WHERE y > 1)"
    );
}

#[test]
fn multi_argument_call() {
    let func = ExprFunc::new(
        "COALESCE",
        vec![Expr::raw("a"), Expr::raw("b")],
        ExprType::Unknown,
    );

    assert_eq!(debug(&func.into()), "COALESCE(a, b)");
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[test]
fn field_on_internal_wrapper_renders_unqualified() {
    let source = quarry_core::ast::DataSource::single(users());
    let wrapper = RecordSet::internal(source);
    let field = wrapper.unsafe_field("id");

    assert_eq!(debug(&field.into()), "[id]");
}
