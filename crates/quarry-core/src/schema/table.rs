use crate::ast::BaseType;

/// A database table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// Table columns, in declaration order
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// A table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Name of the column
    pub name: String,

    /// The declared base type
    pub base: BaseType,

    /// True when the column accepts nulls
    pub nullable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, base: BaseType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            base,
            nullable,
        }
    }
}
