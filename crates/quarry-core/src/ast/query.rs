use super::{
    CompoundQuery, CompoundStep, DataSource, Node, NodeType, QueryTrait, SelectQuery, Selection,
    SelectionItem,
};
use crate::Result;

use std::sync::Arc;

/// A query node: data-source-backed, compound, or an opaque raw
/// fragment.
///
/// `Arc`-backed like the other handles; `select` with empty input and
/// other no-op rebuilds return the original handle.
#[derive(Debug, Clone)]
pub struct Query {
    inner: Arc<QueryKind>,
}

#[derive(Debug, PartialEq)]
pub enum QueryKind {
    /// A data source plus selection list and trait chain
    Select(SelectQuery),

    /// Two or more queries chained by set operators
    Compound(CompoundQuery),

    /// Opaque raw SQL text. Never parsed; enumerates no selection.
    Raw(RawSql),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawSql {
    pub sql: String,
}

impl Query {
    pub fn new(source: impl Into<DataSource>) -> Self {
        Self::from_kind(QueryKind::Select(SelectQuery::new(source)))
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::from_kind(QueryKind::Raw(RawSql { sql: sql.into() }))
    }

    /// Chains a first query with one or more set-operation steps.
    ///
    /// # Panics
    ///
    /// If `steps` is empty; a compound query requires at least two
    /// participants.
    pub fn compound(first: Query, steps: Vec<CompoundStep>) -> Self {
        assert!(!steps.is_empty(), "compound query requires at least one step");

        Self::from_kind(QueryKind::Compound(CompoundQuery {
            first,
            steps,
            traits: vec![],
        }))
    }

    fn from_kind(kind: QueryKind) -> Self {
        Self {
            inner: Arc::new(kind),
        }
    }

    pub fn kind(&self) -> &QueryKind {
        &self.inner
    }

    /// True when both handles point at the same instance.
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_raw(&self) -> bool {
        matches!(*self.inner, QueryKind::Raw(_))
    }

    pub fn as_select(&self) -> Option<&SelectQuery> {
        match &*self.inner {
            QueryKind::Select(query) => Some(query),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_select_unwrap(&self) -> &SelectQuery {
        self.as_select()
            .unwrap_or_else(|| panic!("expected `Select`; actual={self:#?}"))
    }

    pub fn as_compound(&self) -> Option<&CompoundQuery> {
        match &*self.inner {
            QueryKind::Compound(query) => Some(query),
            _ => None,
        }
    }

    /// Appends to the selection list.
    ///
    /// Returns the same instance when `selections` is empty.
    ///
    /// # Panics
    ///
    /// If the query is not data-source-backed.
    #[track_caller]
    pub fn select(&self, selections: Vec<Selection>) -> Self {
        if selections.is_empty() {
            return self.clone();
        }

        let query = self.as_select_unwrap();
        let mut query = query.clone();
        query.selections.extend(selections);
        Self::from_kind(QueryKind::Select(query))
    }

    /// Appends a trait to the chain, preserving application order.
    /// Traits are never deduplicated or reordered.
    ///
    /// # Panics
    ///
    /// If the query is raw; a raw fragment carries no trait chain.
    #[track_caller]
    pub fn add_trait(&self, query_trait: QueryTrait) -> Self {
        match &*self.inner {
            QueryKind::Select(query) => {
                let mut query = query.clone();
                query.traits.push(query_trait);
                Self::from_kind(QueryKind::Select(query))
            }
            QueryKind::Compound(query) => {
                let mut query = query.clone();
                query.traits.push(query_trait);
                Self::from_kind(QueryKind::Compound(query))
            }
            QueryKind::Raw(_) => panic!("cannot apply a trait to a raw query; actual={self:#?}"),
        }
    }

    /// Sugar for appending a filter-shaped trait.
    #[track_caller]
    pub fn decorate(&self, condition: impl Into<super::Expr>, conjunction: bool) -> Self {
        self.add_trait(QueryTrait::filter(condition, conjunction))
    }

    /// The applied trait chain. Empty for raw queries.
    pub fn traits(&self) -> &[QueryTrait] {
        match &*self.inner {
            QueryKind::Select(query) => &query.traits,
            QueryKind::Compound(query) => &query.traits,
            QueryKind::Raw(_) => &[],
        }
    }

    /// The materialized selection list, or `None` when the query
    /// cannot enumerate one (raw queries, and compounds whose every
    /// branch is raw).
    pub fn selection(&self) -> Result<Option<Vec<SelectionItem>>> {
        match &*self.inner {
            QueryKind::Select(query) => query.selection_items().map(Some),
            QueryKind::Compound(query) => query.merged_selection(),
            QueryKind::Raw(_) => Ok(None),
        }
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || *self.inner == *other.inner
    }
}

impl Node for Query {
    fn node_type(&self) -> NodeType {
        NodeType::Query
    }
}

impl From<SelectQuery> for Query {
    fn from(value: SelectQuery) -> Self {
        Self::from_kind(QueryKind::Select(value))
    }
}

impl From<CompoundQuery> for Query {
    fn from(value: CompoundQuery) -> Self {
        Self::from_kind(QueryKind::Compound(value))
    }
}
