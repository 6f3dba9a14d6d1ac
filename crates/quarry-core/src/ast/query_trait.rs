use super::{Cte, Expr, Node, NodeType, Ordering};

/// A structural modifier applied to a data source, query, or function
/// call.
///
/// Traits live in an append-only chain owned by their consumer, in
/// application order. The chain is never reordered or deduplicated;
/// extraction (see [`source_traits`], [`top_traits`], [`call_traits`])
/// is a pure read of the chain.
///
/// [`source_traits`]: super::source_traits
/// [`top_traits`]: super::top_traits
/// [`call_traits`]: super::call_traits
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTrait {
    /// Deduplicate result rows
    Distinct,

    /// A row filter
    Filter(FilterTrait),

    /// A grouping expression
    Aggregation(Expr),

    /// A group filter
    AggregationFilter(FilterTrait),

    /// A single ordering entry
    Sort(Ordering),

    /// Row-count cap
    Limit(Expr),

    /// Leading rows to skip
    Offset(Expr),

    /// A common table expression
    Cte(Cte),

    /// An opaque domain-specific trait, passed through untouched
    Custom(CustomTrait),
}

impl QueryTrait {
    pub fn filter(condition: impl Into<Expr>, conjunction: bool) -> Self {
        Self::Filter(FilterTrait {
            condition: condition.into(),
            conjunction,
        })
    }

    pub fn aggregation_filter(condition: impl Into<Expr>, conjunction: bool) -> Self {
        Self::AggregationFilter(FilterTrait {
            condition: condition.into(),
            conjunction,
        })
    }

    pub fn limit(expr: impl Into<Expr>) -> Self {
        Self::Limit(expr.into())
    }

    pub fn offset(expr: impl Into<Expr>) -> Self {
        Self::Offset(expr.into())
    }
}

/// The payload shared by `Filter` and `AggregationFilter`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTrait {
    /// The filter condition
    pub condition: Expr,

    /// True when the condition joins the running filter with AND,
    /// false for OR
    pub conjunction: bool,
}

/// An opaque trait the extraction profiles pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomTrait {
    pub name: String,
    pub payload: Option<Expr>,
}

impl CustomTrait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
        }
    }
}

impl Node for QueryTrait {
    fn node_type(&self) -> NodeType {
        NodeType::QueryTrait
    }
}

impl From<CustomTrait> for QueryTrait {
    fn from(value: CustomTrait) -> Self {
        Self::Custom(value)
    }
}

impl From<Ordering> for QueryTrait {
    fn from(value: Ordering) -> Self {
        Self::Sort(value)
    }
}

impl From<Cte> for QueryTrait {
    fn from(value: Cte) -> Self {
        Self::Cte(value)
    }
}
