use quarry_core::ast::{
    BaseType, CompoundStep, ExprType, Query, RecordSet, Selection, SetOp,
};
use quarry_core::schema::{Column, Table};

fn table(name: &str, columns: Vec<Column>) -> Query {
    let set = RecordSet::table(Table::new(name, columns));
    Query::new(set).select(vec![Selection::wildcard()])
}

fn union(first: Query, second: Query) -> Query {
    Query::compound(first, vec![CompoundStep::new(SetOp::Union, second)])
}

// ---------------------------------------------------------------------------
// Agreement: typed positions survive the merge
// ---------------------------------------------------------------------------

#[test]
fn matching_branches_merge_typed() {
    let first = table(
        "a",
        vec![
            Column::new("id", BaseType::I64, false),
            Column::new("name", BaseType::String, false),
        ],
    );
    let second = table(
        "b",
        vec![
            Column::new("id", BaseType::I64, false),
            Column::new("name", BaseType::String, false),
        ],
    );

    let items = union(first, second).selection().unwrap().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("id"));
    assert_eq!(items[0].ty, ExprType::typed(BaseType::I64, false));
    assert_eq!(items[1].ty, ExprType::typed(BaseType::String, false));
}

#[test]
fn nullability_widens_across_branches() {
    let first = table("a", vec![Column::new("id", BaseType::I64, false)]);
    let second = table("b", vec![Column::new("id", BaseType::I64, true)]);

    let items = union(first, second).selection().unwrap().unwrap();
    assert_eq!(items[0].ty, ExprType::typed(BaseType::I64, true));
}

// ---------------------------------------------------------------------------
// Degrades: any untyped branch poisons the position
// ---------------------------------------------------------------------------

#[test]
fn name_disagreement_degrades_but_keeps_first_name() {
    let first = table("a", vec![Column::new("id", BaseType::I64, false)]);
    let second = table("b", vec![Column::new("key", BaseType::I64, false)]);

    let items = union(first, second).selection().unwrap().unwrap();
    assert_eq!(items[0].name.as_deref(), Some("id"));
    assert_eq!(items[0].ty, ExprType::Unknown);
}

#[test]
fn base_type_mismatch_degrades() {
    let first = table("a", vec![Column::new("id", BaseType::I64, false)]);
    let second = table("b", vec![Column::new("id", BaseType::String, false)]);

    let items = union(first, second).selection().unwrap().unwrap();
    assert_eq!(items[0].ty, ExprType::Unknown);
}

#[test]
fn raw_branch_degrades_every_position() {
    let first = table(
        "a",
        vec![
            Column::new("id", BaseType::I64, false),
            Column::new("name", BaseType::String, false),
        ],
    );

    let items = union(first, Query::raw("SELECT 1, 2"))
        .selection()
        .unwrap()
        .unwrap();

    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.ty, ExprType::Unknown);
    }
    // Names still come from the enumerable branch.
    assert_eq!(items[0].name.as_deref(), Some("id"));
}

#[test]
fn short_branch_degrades_the_tail() {
    let first = table(
        "a",
        vec![
            Column::new("id", BaseType::I64, false),
            Column::new("extra", BaseType::Bool, false),
        ],
    );
    let second = table("b", vec![Column::new("id", BaseType::I64, false)]);

    let items = union(first, second).selection().unwrap().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].ty, ExprType::typed(BaseType::I64, false));
    assert_eq!(items[1].name.as_deref(), Some("extra"));
    assert_eq!(items[1].ty, ExprType::Unknown);
}

#[test]
fn degrade_is_sticky_across_later_branches() {
    let typed = || table("a", vec![Column::new("id", BaseType::I64, false)]);
    let disagreeing = table("b", vec![Column::new("key", BaseType::I64, false)]);

    // typed UNION disagreeing UNION typed: the middle branch degrades
    // the position and the trailing typed branch cannot restore it.
    let compound = Query::compound(
        typed(),
        vec![
            CompoundStep::new(SetOp::Union, disagreeing),
            CompoundStep::new(SetOp::Union, typed()),
        ],
    );

    let items = compound.selection().unwrap().unwrap();
    assert_eq!(items[0].ty, ExprType::Unknown);
}

#[test]
fn all_raw_branches_enumerate_nothing() {
    let compound = union(Query::raw("SELECT 1"), Query::raw("SELECT 2"));

    assert_eq!(compound.selection().unwrap(), None);
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn compound_exposes_branches_in_order() {
    let first = table("a", vec![Column::new("id", BaseType::I64, false)]);
    let second = table("b", vec![Column::new("id", BaseType::I64, false)]);
    let compound = Query::compound(
        first,
        vec![CompoundStep::new(SetOp::Except, second)],
    );

    let branches = compound.as_compound().unwrap();
    assert_eq!(branches.queries().count(), 2);
    assert_eq!(branches.steps[0].op, SetOp::Except);
}

#[test]
#[should_panic(expected = "at least one step")]
fn compound_without_steps_panics() {
    let first = table("a", vec![Column::new("id", BaseType::I64, false)]);
    Query::compound(first, vec![]);
}
