use super::{Expr, ExprType, Field, Node, NodeType};

/// An entry of a query's selection list.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// An explicit expression, optionally aliased
    Expr { expr: Expr, alias: Option<String> },

    /// All fields of one named record set, or of every record set in
    /// the data source when no name is given. Expanded lazily at
    /// selection-materialization time.
    Wildcard { record_set: Option<String> },
}

impl Selection {
    pub fn expr(expr: impl Into<Expr>) -> Self {
        Self::Expr {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn aliased(expr: impl Into<Expr>, alias: impl Into<String>) -> Self {
        Self::Expr {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }

    /// All fields of every record set, in declaration order.
    pub fn wildcard() -> Self {
        Self::Wildcard { record_set: None }
    }

    /// All fields of the named record set.
    pub fn wildcard_of(record_set: impl Into<String>) -> Self {
        Self::Wildcard {
            record_set: Some(record_set.into()),
        }
    }
}

impl Node for Selection {
    fn node_type(&self) -> NodeType {
        NodeType::Selection
    }
}

impl From<Expr> for Selection {
    fn from(value: Expr) -> Self {
        Self::expr(value)
    }
}

impl From<Field> for Selection {
    fn from(value: Field) -> Self {
        Self::expr(Expr::Field(value))
    }
}

/// A materialized selection entry: wildcards expanded, names and types
/// resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionItem {
    /// The resolved name, when one exists
    pub name: Option<String>,

    /// The resolved expression type; unknown when the entry crossed a
    /// raw boundary or a compound merge degraded it
    pub ty: ExprType,

    /// The underlying expression
    pub expr: Expr,
}
