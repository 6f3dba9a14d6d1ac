use super::{Node, NodeType, Query};

/// A named common table expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Cte {
    /// The name the CTE is addressable by
    pub name: String,

    /// The underlying query
    pub query: Query,
}

impl Cte {
    pub fn new(name: impl Into<String>, query: Query) -> Self {
        Self {
            name: name.into(),
            query,
        }
    }
}

impl Node for Cte {
    fn node_type(&self) -> NodeType {
        NodeType::Cte
    }
}
