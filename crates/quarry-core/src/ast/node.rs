use std::fmt;

/// Discriminant shared by every node in the tree.
///
/// The node set is closed: consumers match exhaustively over the
/// variants so the compiler flags missing cases when a variant is
/// added.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeType {
    Value,
    Field,
    BinaryOp,
    And,
    Or,
    Not,
    IsNull,
    Func,
    RawSql,
    RecordSet,
    DataSource,
    Query,
    Selection,
    QueryTrait,
    Cte,
    Ordering,
}

/// Implemented by every node in the tree.
///
/// Nodes are immutable value objects: two nodes are interchangeable
/// when their discriminant and payload compare equal, while handle
/// types additionally preserve reference identity as a fast path.
pub trait Node: fmt::Debug {
    fn node_type(&self) -> NodeType;
}
