use super::{ExprType, Node, NodeType, RecordSet};

/// A field reference bound to a record set.
///
/// The binding is a shared handle: the field never owns the record
/// set's lifetime beyond the shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The record set the field resolves against
    pub record_set: RecordSet,

    /// The field name
    pub name: String,

    /// The inferred expression type
    pub ty: ExprType,
}

impl Field {
    pub fn new(record_set: RecordSet, name: impl Into<String>, ty: ExprType) -> Self {
        Self {
            record_set,
            name: name.into(),
            ty,
        }
    }

    /// Rebinds the field to a different record set, preserving name and
    /// type. Used when a composite wrapper re-exposes a member's fields
    /// under its own identity.
    pub fn replace_record_set(&self, record_set: RecordSet) -> Self {
        Self {
            record_set,
            name: self.name.clone(),
            ty: self.ty,
        }
    }
}

impl Node for Field {
    fn node_type(&self) -> NodeType {
        NodeType::Field
    }
}
