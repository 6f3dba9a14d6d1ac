use std::sync::Arc;

/// An error that can occur while building or interpreting a tree.
///
/// All failures are local construction-time or lookup-time failures;
/// there is no I/O anywhere in this crate, so there is nothing to
/// retry. The error carries the offending name so callers can decide
/// whether to build an alternative tree.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// A field lookup by name failed against a known-field enumeration.
    FieldNotFound { name: String },

    /// A record-set lookup by name failed against a data source.
    RecordSetNotFound { name: String },

    /// A record set's known-field computation produced two fields
    /// sharing a name.
    DuplicateField { name: String },

    /// Two record sets within one data source share an identifier.
    DuplicateRecordSet { identifier: String },

    /// The record-set variant cannot be renamed.
    UnsupportedAlias { identifier: String },

    /// The data source has no FROM clause.
    NoRecordSetAvailable,

    /// Bridge for errors raised outside the structured taxonomy.
    Anyhow(anyhow::Error),
}

impl Error {
    fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(ErrorInner { kind }),
        }
    }

    pub fn field_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::FieldNotFound { name: name.into() })
    }

    pub fn record_set_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::RecordSetNotFound { name: name.into() })
    }

    pub fn duplicate_field(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateField { name: name.into() })
    }

    pub fn duplicate_record_set(identifier: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateRecordSet {
            identifier: identifier.into(),
        })
    }

    pub fn unsupported_alias(identifier: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedAlias {
            identifier: identifier.into(),
        })
    }

    pub fn no_record_set_available() -> Self {
        Self::new(ErrorKind::NoRecordSetAvailable)
    }

    pub fn is_field_not_found(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::FieldNotFound { .. })
    }

    pub fn is_record_set_not_found(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::RecordSetNotFound { .. })
    }

    pub fn is_duplicate_field(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::DuplicateField { .. })
    }

    pub fn is_duplicate_record_set(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::DuplicateRecordSet { .. })
    }

    pub fn is_unsupported_alias(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::UnsupportedAlias { .. })
    }

    pub fn is_no_record_set_available(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::NoRecordSetAvailable)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match &self.inner.kind {
            FieldNotFound { name } => write!(f, "unknown field `{name}`"),
            RecordSetNotFound { name } => write!(f, "unknown record set `{name}`"),
            DuplicateField { name } => write!(f, "duplicate field `{name}`"),
            DuplicateRecordSet { identifier } => {
                write!(f, "duplicate record set `{identifier}`")
            }
            UnsupportedAlias { identifier } => {
                write!(f, "record set `{identifier}` cannot be aliased")
            }
            NoRecordSetAvailable => f.write_str("data source has no record set"),
            Anyhow(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .finish()
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::new(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn display_carries_offending_name() {
        assert_eq!(
            Error::field_not_found("age").to_string(),
            "unknown field `age`"
        );
        assert_eq!(
            Error::duplicate_record_set("users").to_string(),
            "duplicate record set `users`"
        );
        assert_eq!(
            Error::no_record_set_available().to_string(),
            "data source has no record set"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
    }
}
