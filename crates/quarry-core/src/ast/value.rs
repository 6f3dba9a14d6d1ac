use super::BaseType;

/// A literal scalar value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// String value
    String(String),

    /// Byte array
    Bytes(Vec<u8>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The declared base type of the literal. `None` for null.
    pub fn base_type(&self) -> Option<BaseType> {
        Some(match self {
            Self::Bool(_) => BaseType::Bool,
            Self::I8(_) => BaseType::I8,
            Self::I16(_) => BaseType::I16,
            Self::I32(_) => BaseType::I32,
            Self::I64(_) => BaseType::I64,
            Self::U8(_) => BaseType::U8,
            Self::U16(_) => BaseType::U16,
            Self::U32(_) => BaseType::U32,
            Self::U64(_) => BaseType::U64,
            Self::F32(_) => BaseType::F32,
            Self::F64(_) => BaseType::F64,
            Self::String(_) => BaseType::String,
            Self::Bytes(_) => BaseType::Bytes,
            Self::Null => return None,
        })
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
