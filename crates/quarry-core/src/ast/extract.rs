//! Trait extraction: three pure, single-pass reads of an applied
//! trait chain, one per consumer.
//!
//! Shared rules: the last Limit, Offset, or Distinct occurrence wins;
//! Sort, Aggregation, and CommonTableExpression occurrences accumulate
//! in encounter order without deduplication; traits a profile does not
//! recognize are collected, in order, into its `custom` list.

use super::{Cte, Expr, Ordering, QueryTrait};

/// Structured traits for a plain data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTraits {
    pub distinct: bool,
    pub filter: Option<Expr>,
    pub aggregations: Vec<Expr>,
    pub aggregation_filter: Option<Expr>,
    pub orderings: Vec<Ordering>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
    pub ctes: Vec<Cte>,
    pub custom: Vec<QueryTrait>,
}

/// Structured traits for a top-level query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopTraits {
    pub ctes: Vec<Cte>,
    pub orderings: Vec<Ordering>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
    pub custom: Vec<QueryTrait>,
}

/// Structured traits for an aggregate-function call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallTraits {
    pub distinct: bool,
    pub filter: Option<Expr>,
    pub custom: Vec<QueryTrait>,
}

pub fn source_traits(chain: &[QueryTrait]) -> SourceTraits {
    let mut out = SourceTraits::default();

    for query_trait in chain {
        match query_trait {
            QueryTrait::Distinct => out.distinct = true,
            QueryTrait::Filter(filter) => {
                fold_filter(&mut out.filter, &filter.condition, filter.conjunction)
            }
            QueryTrait::Aggregation(expr) => out.aggregations.push(expr.clone()),
            QueryTrait::AggregationFilter(filter) => fold_filter(
                &mut out.aggregation_filter,
                &filter.condition,
                filter.conjunction,
            ),
            QueryTrait::Sort(ordering) => out.orderings.push(ordering.clone()),
            QueryTrait::Limit(expr) => out.limit = Some(expr.clone()),
            QueryTrait::Offset(expr) => out.offset = Some(expr.clone()),
            QueryTrait::Cte(cte) => out.ctes.push(cte.clone()),
            other @ QueryTrait::Custom(_) => out.custom.push(other.clone()),
        }
    }

    out
}

pub fn top_traits(chain: &[QueryTrait]) -> TopTraits {
    let mut out = TopTraits::default();

    for query_trait in chain {
        match query_trait {
            QueryTrait::Cte(cte) => out.ctes.push(cte.clone()),
            QueryTrait::Sort(ordering) => out.orderings.push(ordering.clone()),
            QueryTrait::Limit(expr) => out.limit = Some(expr.clone()),
            QueryTrait::Offset(expr) => out.offset = Some(expr.clone()),
            other => out.custom.push(other.clone()),
        }
    }

    out
}

pub fn call_traits(chain: &[QueryTrait]) -> CallTraits {
    let mut out = CallTraits::default();

    for query_trait in chain {
        match query_trait {
            QueryTrait::Distinct => out.distinct = true,
            QueryTrait::Filter(filter) => {
                fold_filter(&mut out.filter, &filter.condition, filter.conjunction)
            }
            other => out.custom.push(other.clone()),
        }
    }

    out
}

/// Left fold shared by every profile: `acc AND term` when the trait is
/// a conjunction, `acc OR term` otherwise, seeding with the bare term.
/// The left-associated grouping is load-bearing: AND binds tighter
/// than the running OR chain only through this fold.
fn fold_filter(acc: &mut Option<Expr>, condition: &Expr, conjunction: bool) {
    *acc = Some(match acc.take() {
        None => condition.clone(),
        Some(folded) if conjunction => Expr::and(folded, condition.clone()),
        Some(folded) => Expr::or(folded, condition.clone()),
    });
}
