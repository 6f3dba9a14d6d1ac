use super::{BaseType, Expr, ExprType, QueryTrait};

/// A function call, optionally decorated with traits.
///
/// Aggregate calls carry their own trait chain so `DISTINCT` and
/// `FILTER (WHERE ...)` can be applied per call; the chain is read
/// through the aggregate-function extraction profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    /// The function name
    pub name: String,

    /// Call arguments, in order
    pub args: Vec<Expr>,

    /// The declared result type
    pub ty: ExprType,

    /// Traits applied to the call, in application order
    pub traits: Vec<QueryTrait>,
}

impl ExprFunc {
    pub fn new(name: impl Into<String>, args: Vec<Expr>, ty: ExprType) -> Self {
        Self {
            name: name.into(),
            args,
            ty,
            traits: vec![],
        }
    }

    /// Appends a trait, preserving application order.
    pub fn with_trait(mut self, query_trait: QueryTrait) -> Self {
        self.traits.push(query_trait);
        self
    }
}

impl Expr {
    pub fn count(arg: impl Into<Expr>) -> Self {
        ExprFunc::new(
            "COUNT",
            vec![arg.into()],
            ExprType::typed(BaseType::I64, false),
        )
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
