use quarry_core::ast::{
    DataSource, DataSourceKind, Decorator, Expr, JoinDef, JoinKind, JoinScope, RecordSet,
};
use quarry_core::Result;

fn raw(name: &str) -> RecordSet {
    RecordSet::raw(name)
}

fn on_true(_: &JoinScope<'_>) -> Result<Expr> {
    Ok(Expr::raw("TRUE"))
}

// ---------------------------------------------------------------------------
// Progressive optionality across the join chain
// ---------------------------------------------------------------------------

#[test]
fn outer_joins_promote_the_expected_sides() {
    let source = DataSource::multi(
        raw("a"),
        vec![
            JoinDef::inner(raw("b"), on_true),
            JoinDef::left(raw("c"), on_true),
            JoinDef::inner(raw("d"), on_true),
            JoinDef::right(raw("e"), on_true),
            JoinDef::inner(raw("f"), on_true),
            JoinDef::full(raw("g"), on_true),
            JoinDef::cross(raw("h")),
        ],
    )
    .unwrap();

    let optional: Vec<bool> = source
        .record_sets()
        .iter()
        .map(|set| set.is_optional())
        .collect();

    // RIGHT promoted a..d, FULL promoted a..f and marked g; the cross
    // joined h stays required.
    assert_eq!(
        optional,
        [true, true, true, true, true, true, true, false]
    );
}

#[test]
fn left_join_marks_only_the_incoming_set() {
    let source = DataSource::multi(
        raw("a"),
        vec![JoinDef::left(raw("b"), on_true)],
    )
    .unwrap();

    let sets = source.record_sets();
    assert!(!sets[0].is_optional());
    assert!(sets[1].is_optional());
}

#[test]
fn condition_builder_sees_promotions_in_effect() {
    let source = DataSource::multi(
        raw("a"),
        vec![
            JoinDef::left(raw("b"), on_true),
            JoinDef::right(raw("c"), |scope| {
                // RIGHT promotes the accumulated sets before the
                // condition runs; the incoming set is not yet marked.
                assert!(scope.outer("a")?.is_optional());
                assert!(scope.outer("b")?.is_optional());
                assert!(!scope.inner().is_optional());
                Ok(Expr::raw("TRUE"))
            }),
        ],
    )
    .unwrap();

    assert_eq!(source.record_sets().len(), 3);
}

#[test]
fn inner_join_promotes_nothing() {
    let source = DataSource::multi(
        raw("a"),
        vec![JoinDef::inner(raw("b"), |scope| {
            assert!(!scope.outer("a")?.is_optional());
            assert!(!scope.inner().is_optional());
            Ok(Expr::raw("TRUE"))
        })],
    )
    .unwrap();

    assert!(source.record_sets().iter().all(|set| !set.is_optional()));
}

#[test]
fn cross_join_carries_no_condition() {
    let source = DataSource::multi(raw("a"), vec![JoinDef::cross(raw("b"))]).unwrap();

    let DataSourceKind::Multi { joins, .. } = source.kind() else {
        panic!("expected a multi-set source");
    };
    assert_eq!(joins[0].kind, JoinKind::Cross);
    assert!(joins[0].on.is_none());
}

// ---------------------------------------------------------------------------
// Identifier uniqueness
// ---------------------------------------------------------------------------

#[test]
fn duplicate_identifiers_fail_before_conditions_run() {
    let err = DataSource::multi(
        raw("a"),
        vec![JoinDef::inner(raw("a"), |_| {
            panic!("condition must not run");
        })],
    )
    .unwrap_err();

    assert!(err.is_duplicate_record_set());
}

#[test]
fn aliasing_resolves_an_identifier_clash() {
    let source = DataSource::multi(
        raw("a"),
        vec![JoinDef::inner(raw("a").with_alias("a2").unwrap(), on_true)],
    )
    .unwrap();

    assert!(source.record_set("a").is_ok());
    assert!(source.record_set("a2").is_ok());
}

// ---------------------------------------------------------------------------
// Lookup and enumeration
// ---------------------------------------------------------------------------

#[test]
fn record_sets_preserve_declaration_order() {
    let source = DataSource::multi(
        raw("a"),
        vec![
            JoinDef::inner(raw("b"), on_true),
            JoinDef::cross(raw("c")),
        ],
    )
    .unwrap();

    let names: Vec<&str> = source
        .record_sets()
        .iter()
        .filter_map(|set| set.identifier())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(source.from().unwrap().identifier(), Some("a"));
}

#[test]
fn unknown_identifier_fails_lookup() {
    let source = DataSource::single(raw("a"));

    assert!(source.record_set("a").is_ok());
    let err = source.record_set("z").unwrap_err();
    assert!(err.is_record_set_not_found());
}

#[test]
fn dummy_source_has_no_record_sets() {
    let source = DataSource::dummy();

    assert!(source.is_dummy());
    assert!(source.record_sets().is_empty());
    assert!(source.from().unwrap_err().is_no_record_set_available());
    assert!(source.record_set("a").unwrap_err().is_no_record_set_available());
}

// ---------------------------------------------------------------------------
// Decorators
// ---------------------------------------------------------------------------

#[test]
fn decorate_appends_in_order_without_dedup() {
    let source = DataSource::single(raw("a"));
    let filter = Decorator::and(Expr::raw("x > 1"));

    let once = source.decorate(filter.clone());
    let twice = once.decorate(filter.clone()).decorate(Decorator::or(Expr::raw("y")));

    assert!(!source.is_same(&once));
    assert!(!once.is_same(&twice));
    assert!(source.decorators().is_empty());

    let conjunctions: Vec<bool> = twice
        .decorators()
        .iter()
        .map(|decorator| decorator.conjunction)
        .collect();
    assert_eq!(conjunctions, [true, true, false]);
}
