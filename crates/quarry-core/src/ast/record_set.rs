use super::{DataSource, ExprType, Field, Node, NodeType, Query};
use crate::{
    schema::{Table, View, ViewBuilder},
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::Arc;

use super::cte::Cte;

/// The identifier composite wrappers answer to. Internal wrappers
/// cannot be renamed, only unwrapped and rewrapped.
const INTERNAL_IDENTIFIER: &str = "<internal>";

/// A nameable, field-bearing source of columns.
///
/// The handle is `Arc`-backed: cloning is cheap and every rebuild
/// operation (`with_alias`, `as_self`, `mark_optional`) returns the
/// original handle when the value would be unchanged. Use
/// [`is_same`](Self::is_same) to observe that fast path.
#[derive(Debug, Clone)]
pub struct RecordSet {
    inner: Arc<RecordSetInner>,
}

#[derive(Debug, PartialEq)]
struct RecordSetInner {
    kind: RecordSetKind,

    /// Optional name override
    alias: Option<String>,

    /// Once true, every field obtained from this record set reports a
    /// nullable type. Set by participating on the "may be absent" side
    /// of an outer join.
    optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordSetKind {
    /// A database table
    Table(Table),

    /// A database view; fields come from its underlying query
    View(View),

    /// A view under construction
    ViewBuilder(ViewBuilder),

    /// A name-only record set with no known columns
    Raw { name: String },

    /// Wraps an opaque raw query; no known columns
    RawQuery { name: String, query: Query },

    /// Wraps a typed query; known columns are its selection
    Query { name: String, query: Query },

    /// Wraps a named common table expression
    Cte(Cte),

    /// Wraps a composite data source so a multi-set join can appear as
    /// one joinable unit
    Internal(DataSource),

    /// No columns, no name: stands for "no FROM clause"
    Dummy,
}

impl RecordSet {
    fn new(kind: RecordSetKind) -> Self {
        Self {
            inner: Arc::new(RecordSetInner {
                kind,
                alias: None,
                optional: false,
            }),
        }
    }

    pub fn table(table: Table) -> Self {
        Self::new(RecordSetKind::Table(table))
    }

    pub fn view(view: View) -> Self {
        Self::new(RecordSetKind::View(view))
    }

    pub fn view_builder(builder: ViewBuilder) -> Self {
        Self::new(RecordSetKind::ViewBuilder(builder))
    }

    pub fn raw(name: impl Into<String>) -> Self {
        Self::new(RecordSetKind::Raw { name: name.into() })
    }

    pub fn raw_query(name: impl Into<String>, query: Query) -> Self {
        Self::new(RecordSetKind::RawQuery {
            name: name.into(),
            query,
        })
    }

    pub fn query(name: impl Into<String>, query: Query) -> Self {
        Self::new(RecordSetKind::Query {
            name: name.into(),
            query,
        })
    }

    pub fn cte(cte: Cte) -> Self {
        Self::new(RecordSetKind::Cte(cte))
    }

    pub fn internal(source: DataSource) -> Self {
        Self::new(RecordSetKind::Internal(source))
    }

    pub fn dummy() -> Self {
        Self::new(RecordSetKind::Dummy)
    }

    pub fn kind(&self) -> &RecordSetKind {
        &self.inner.kind
    }

    /// True when both handles point at the same instance.
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.inner.kind, RecordSetKind::Internal(_))
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self.inner.kind, RecordSetKind::Dummy)
    }

    pub fn alias(&self) -> Option<&str> {
        self.inner.alias.as_deref()
    }

    pub fn is_aliased(&self) -> bool {
        self.inner.alias.is_some()
    }

    pub fn is_optional(&self) -> bool {
        self.inner.optional
    }

    /// The base name of the variant, before any alias.
    pub fn base_name(&self) -> Option<&str> {
        match &self.inner.kind {
            RecordSetKind::Table(table) => Some(&table.name),
            RecordSetKind::View(view) => Some(&view.name),
            RecordSetKind::ViewBuilder(builder) => Some(&builder.name),
            RecordSetKind::Raw { name }
            | RecordSetKind::RawQuery { name, .. }
            | RecordSetKind::Query { name, .. } => Some(name),
            RecordSetKind::Cte(cte) => Some(&cte.name),
            RecordSetKind::Internal(_) => Some(INTERNAL_IDENTIFIER),
            RecordSetKind::Dummy => None,
        }
    }

    /// The alias when present, else the base name.
    pub fn identifier(&self) -> Option<&str> {
        self.alias().or_else(|| self.base_name())
    }

    /// Returns a record set carrying the given alias.
    ///
    /// Returns the same instance when the alias is unchanged. Internal
    /// wrappers cannot be renamed and fail with an unsupported-alias
    /// error.
    pub fn with_alias(&self, alias: impl Into<String>) -> Result<Self> {
        let alias = alias.into();

        if matches!(self.inner.kind, RecordSetKind::Internal(_)) {
            return Err(Error::unsupported_alias(INTERNAL_IDENTIFIER));
        }

        if self.inner.alias.as_deref() == Some(alias.as_str()) {
            return Ok(self.clone());
        }

        Ok(Self {
            inner: Arc::new(RecordSetInner {
                kind: self.inner.kind.clone(),
                alias: Some(alias),
                optional: self.inner.optional,
            }),
        })
    }

    /// Drops the alias, or returns the same instance when already
    /// unaliased.
    pub fn as_self(&self) -> Self {
        if self.inner.alias.is_none() {
            return self.clone();
        }

        Self {
            inner: Arc::new(RecordSetInner {
                kind: self.inner.kind.clone(),
                alias: None,
                optional: self.inner.optional,
            }),
        }
    }

    /// Returns a record set with the given optionality.
    ///
    /// Returns the same instance when optionality is unchanged. For
    /// internal wrappers the flag is propagated into every record set
    /// of the wrapped data source.
    pub fn mark_optional(&self, optional: bool) -> Self {
        if self.inner.optional == optional {
            return self.clone();
        }

        let kind = match &self.inner.kind {
            RecordSetKind::Internal(source) => {
                RecordSetKind::Internal(source.mark_optional(optional))
            }
            _ => self.inner.kind.clone(),
        };

        Self {
            inner: Arc::new(RecordSetInner {
                kind,
                alias: self.inner.alias.clone(),
                optional,
            }),
        }
    }

    /// The ordered fields the record set can statically enumerate.
    ///
    /// Empty for raw and dummy variants. Query-backed variants fail
    /// with a duplicate-field error when two selections resolve to the
    /// same name.
    pub fn known_fields(&self) -> Result<Vec<Field>> {
        match &self.inner.kind {
            RecordSetKind::Table(table) => Ok(table
                .columns
                .iter()
                .map(|column| {
                    let ty = ExprType::typed(column.base, column.nullable || self.is_optional());
                    Field::new(self.clone(), &column.name, ty)
                })
                .collect()),
            RecordSetKind::View(view) => self.query_fields(&view.query),
            RecordSetKind::ViewBuilder(builder) => match &builder.query {
                Some(query) => self.query_fields(query),
                None => Ok(vec![]),
            },
            RecordSetKind::Query { query, .. } => self.query_fields(query),
            RecordSetKind::Cte(cte) => self.query_fields(&cte.query),
            RecordSetKind::Internal(source) => {
                let mut fields = vec![];
                for record_set in source.record_sets() {
                    for field in record_set.known_fields()? {
                        let field = field.replace_record_set(self.clone());
                        fields.push(if self.is_optional() {
                            Field::new(self.clone(), &field.name, field.ty.nullable())
                        } else {
                            field
                        });
                    }
                }
                Ok(fields)
            }
            RecordSetKind::Raw { .. }
            | RecordSetKind::RawQuery { .. }
            | RecordSetKind::Dummy => Ok(vec![]),
        }
    }

    /// Looks up a known field by name.
    ///
    /// Fails with a field-not-found error when absent and with a
    /// duplicate-field error when the known-field computation yields
    /// two fields sharing the name. Duplicates are a structural
    /// invariant violation detected lazily here, not at construction.
    pub fn field(&self, name: &str) -> Result<Field> {
        let mut matches = self
            .known_fields()?
            .into_iter()
            .filter(|field| field.name == name);

        let Some(field) = matches.next() else {
            return Err(Error::field_not_found(name));
        };

        if matches.next().is_some() {
            return Err(Error::duplicate_field(name));
        }

        Ok(field)
    }

    /// Looks up a known field by name, falling back to a best-effort
    /// untyped reference. Never fails.
    pub fn unsafe_field(&self, name: &str) -> Field {
        if let Ok(fields) = self.known_fields() {
            if let Some(field) = fields.into_iter().find(|field| field.name == name) {
                return field;
            }
        }

        Field::new(self.clone(), name, ExprType::Unknown)
    }

    /// Constructs an explicitly-typed, unchecked field reference,
    /// regardless of known fields. Optionality still widens the type.
    pub fn raw_field(&self, name: &str, ty: ExprType) -> Field {
        let ty = if self.is_optional() { ty.nullable() } else { ty };
        Field::new(self.clone(), name, ty)
    }

    /// Derives fields from a wrapped query's selection. Named, typed
    /// selections become fields bound to this wrapper; untyped or
    /// unnamed selections contribute nothing (they remain reachable
    /// through `unsafe_field`).
    fn query_fields(&self, query: &Query) -> Result<Vec<Field>> {
        let Some(items) = query.selection()? else {
            return Ok(vec![]);
        };

        let mut fields: IndexMap<String, Field> = IndexMap::new();

        for item in items {
            let Some(name) = item.name else { continue };
            if item.ty.is_unknown() {
                continue;
            }

            let ty = if self.is_optional() {
                item.ty.nullable()
            } else {
                item.ty
            };

            let field = Field::new(self.clone(), &name, ty);
            if fields.insert(name.clone(), field).is_some() {
                return Err(Error::duplicate_field(name));
            }
        }

        Ok(fields.into_values().collect())
    }
}

impl PartialEq for RecordSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || *self.inner == *other.inner
    }
}

impl Node for RecordSet {
    fn node_type(&self) -> NodeType {
        NodeType::RecordSet
    }
}

impl From<Table> for RecordSet {
    fn from(value: Table) -> Self {
        Self::table(value)
    }
}

impl From<View> for RecordSet {
    fn from(value: View) -> Self {
        Self::view(value)
    }
}

impl From<Cte> for RecordSet {
    fn from(value: Cte) -> Self {
        Self::cte(value)
    }
}
