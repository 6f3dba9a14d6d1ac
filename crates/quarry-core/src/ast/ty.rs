use std::fmt;

/// A scalar base type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BaseType {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// Byte array
    Bytes,
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An expression type: a (base type, nullability) pair, or unknown.
///
/// `Unknown` stands for "?": the type could not be determined,
/// typically because the value crossed a raw-text boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExprType {
    Typed { base: BaseType, nullable: bool },
    Unknown,
}

impl ExprType {
    pub fn typed(base: BaseType, nullable: bool) -> Self {
        Self::Typed { base, nullable }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Typed { .. })
    }

    /// Widens the type to nullable. Unknown stays unknown.
    pub fn nullable(self) -> Self {
        match self {
            Self::Typed { base, .. } => Self::Typed {
                base,
                nullable: true,
            },
            Self::Unknown => Self::Unknown,
        }
    }

    /// Merges two types describing the same logical column.
    ///
    /// Both typed with matching base types merges to typed, nullable
    /// when either side is nullable. Mismatched base types or an
    /// unknown side merge to unknown.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (
                Self::Typed {
                    base: lhs,
                    nullable: lhs_nullable,
                },
                Self::Typed {
                    base: rhs,
                    nullable: rhs_nullable,
                },
            ) if lhs == rhs => Self::Typed {
                base: lhs,
                nullable: lhs_nullable || rhs_nullable,
            },
            _ => Self::Unknown,
        }
    }
}
