use super::{
    BaseType, BinaryOp, ExprAnd, ExprBinaryOp, ExprFunc, ExprOr, ExprType, Field, Node, NodeType,
    Value,
};

/// A scalar or boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A field reference
    Field(Field),

    /// A literal value
    Value(Value),

    /// A binary comparison
    BinaryOp(ExprBinaryOp),

    /// A logical conjunction
    And(ExprAnd),

    /// A logical disjunction
    Or(ExprOr),

    /// A logical negation
    Not(Box<Expr>),

    /// A null test
    IsNull(Box<Expr>),

    /// A function call
    Func(ExprFunc),

    /// An opaque raw SQL fragment. Never parsed or validated.
    Raw(String),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn gt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn not(expr: impl Into<Self>) -> Self {
        Self::Not(Box::new(expr.into()))
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        Self::IsNull(Box::new(expr.into()))
    }

    /// The name the expression contributes to a selection when no
    /// explicit alias is given.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(field) => Some(&field.name),
            _ => None,
        }
    }

    /// The inferred expression type.
    pub fn ty(&self) -> ExprType {
        match self {
            Self::Field(field) => field.ty,
            Self::Value(value) => match value.base_type() {
                Some(base) => ExprType::typed(base, false),
                None => ExprType::Unknown,
            },
            Self::BinaryOp(expr) => {
                let nullable = is_nullable(&expr.lhs) || is_nullable(&expr.rhs);
                ExprType::typed(BaseType::Bool, nullable)
            }
            Self::And(_) | Self::Or(_) | Self::Not(_) => ExprType::typed(BaseType::Bool, false),
            Self::IsNull(_) => ExprType::typed(BaseType::Bool, false),
            Self::Func(func) => func.ty,
            Self::Raw(_) => ExprType::Unknown,
        }
    }
}

fn is_nullable(expr: &Expr) -> bool {
    match expr.ty() {
        ExprType::Typed { nullable, .. } => nullable,
        ExprType::Unknown => false,
    }
}

impl Node for Expr {
    fn node_type(&self) -> NodeType {
        match self {
            Self::Field(_) => NodeType::Field,
            Self::Value(_) => NodeType::Value,
            Self::BinaryOp(_) => NodeType::BinaryOp,
            Self::And(_) => NodeType::And,
            Self::Or(_) => NodeType::Or,
            Self::Not(_) => NodeType::Not,
            Self::IsNull(_) => NodeType::IsNull,
            Self::Func(_) => NodeType::Func,
            Self::Raw(_) => NodeType::RawSql,
        }
    }
}

impl From<Field> for Expr {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(Value::I32(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(Value::I64(value))
    }
}
