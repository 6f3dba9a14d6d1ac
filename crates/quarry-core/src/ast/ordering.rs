use super::{Direction, Expr, Node, NodeType};

/// A single ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    /// The expression to order by
    pub expr: Expr,

    /// Ascending or descending
    pub direction: Direction,
}

impl Ordering {
    pub fn asc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            direction: Direction::Desc,
        }
    }
}

impl Node for Ordering {
    fn node_type(&self) -> NodeType {
        NodeType::Ordering
    }
}
