use crate::ast::Query;

/// A database view. Its fields are defined by the underlying query's
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Name of the view
    pub name: String,

    /// Schema the view lives in, if any
    pub schema_name: Option<String>,

    /// The underlying query
    pub query: Query,
}

impl View {
    pub fn new(name: impl Into<String>, query: Query) -> Self {
        Self {
            name: name.into(),
            schema_name: None,
            query,
        }
    }
}

/// A view under construction. The underlying query may not exist yet,
/// in which case the builder exposes no known fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBuilder {
    /// Name of the view being built
    pub name: String,

    /// Schema the view will live in, if any
    pub schema_name: Option<String>,

    /// The underlying query, once defined
    pub query: Option<Query>,
}

impl ViewBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: None,
            query: None,
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    pub fn build(self) -> Option<View> {
        Some(View {
            name: self.name,
            schema_name: self.schema_name,
            query: self.query?,
        })
    }
}
