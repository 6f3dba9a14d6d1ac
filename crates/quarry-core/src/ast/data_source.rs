use super::{Expr, Join, JoinDef, JoinScope, Node, NodeType, RecordSet};
use crate::{Error, Result};

use indexmap::IndexSet;
use std::sync::Arc;

/// A FROM clause: zero, one, or many joined record sets, plus an
/// ordered chain of filter decorators.
///
/// Like [`RecordSet`], the handle is `Arc`-backed and every operation
/// that would produce an unchanged value returns the original handle.
#[derive(Debug, Clone)]
pub struct DataSource {
    inner: Arc<DataSourceInner>,
}

#[derive(Debug, PartialEq)]
struct DataSourceInner {
    kind: DataSourceKind,

    /// Filter decorators, in application order. Never deduplicated.
    decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataSourceKind {
    /// No FROM clause
    Dummy,

    /// One record set, no joins
    Single(RecordSet),

    /// A from set plus an ordered join chain
    Multi { from: RecordSet, joins: Vec<Join> },
}

/// A filter applied directly to a data source. Each decorator renders
/// as its own `AND WHERE` / `OR WHERE` block, in application order.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    /// The filter condition
    pub condition: Expr,

    /// True for `AND WHERE`, false for `OR WHERE`
    pub conjunction: bool,
}

impl Decorator {
    pub fn and(condition: impl Into<Expr>) -> Self {
        Self {
            condition: condition.into(),
            conjunction: true,
        }
    }

    pub fn or(condition: impl Into<Expr>) -> Self {
        Self {
            condition: condition.into(),
            conjunction: false,
        }
    }
}

impl DataSource {
    fn new(kind: DataSourceKind, decorators: Vec<Decorator>) -> Self {
        Self {
            inner: Arc::new(DataSourceInner { kind, decorators }),
        }
    }

    pub fn dummy() -> Self {
        Self::new(DataSourceKind::Dummy, vec![])
    }

    pub fn single(record_set: RecordSet) -> Self {
        Self::new(DataSourceKind::Single(record_set), vec![])
    }

    /// Builds a multi-set data source by applying the join chain in
    /// order.
    ///
    /// Identifiers of all participants must be pairwise distinct;
    /// violations fail with a duplicate-record-set error before any
    /// join condition runs. Optionality is computed progressively:
    /// RIGHT and FULL joins promote every previously accumulated set
    /// before their condition builder runs, LEFT and FULL joins mark
    /// the incoming set after it runs.
    pub fn multi(from: RecordSet, joins: Vec<JoinDef>) -> Result<Self> {
        let mut identifiers: IndexSet<String> = IndexSet::new();

        for record_set in std::iter::once(&from).chain(joins.iter().map(|def| &def.record_set)) {
            let Some(identifier) = record_set.identifier() else {
                continue;
            };
            if !identifiers.insert(identifier.to_string()) {
                return Err(Error::duplicate_record_set(identifier));
            }
        }

        let mut outer = vec![from];
        let mut built = vec![];

        for def in joins {
            let JoinDef {
                kind,
                record_set,
                on,
            } = def;

            if kind.promotes_outer() {
                for accumulated in &mut outer {
                    *accumulated = accumulated.mark_optional(true);
                }
            }

            let on = {
                let scope = JoinScope {
                    outer: &outer,
                    inner: &record_set,
                };
                match on {
                    Some(build) => Some(build(&scope)?),
                    None => None,
                }
            };

            let record_set = if kind.promotes_inner() {
                record_set.mark_optional(true)
            } else {
                record_set
            };

            outer.push(record_set);
            built.push((kind, on));
        }

        let mut participants = outer.into_iter();
        let from = participants.next().expect("from set is always present");
        let joins = participants
            .zip(built)
            .map(|(record_set, (kind, on))| Join {
                kind,
                record_set,
                on,
            })
            .collect();

        Ok(Self::new(DataSourceKind::Multi { from, joins }, vec![]))
    }

    pub fn kind(&self) -> &DataSourceKind {
        &self.inner.kind
    }

    /// The decorator chain, in application order.
    pub fn decorators(&self) -> &[Decorator] {
        &self.inner.decorators
    }

    /// True when both handles point at the same instance.
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self.inner.kind, DataSourceKind::Dummy)
    }

    /// The FROM record set. Fails for a dummy source, which by
    /// definition has none.
    pub fn from(&self) -> Result<&RecordSet> {
        match &self.inner.kind {
            DataSourceKind::Dummy => Err(Error::no_record_set_available()),
            DataSourceKind::Single(record_set) => Ok(record_set),
            DataSourceKind::Multi { from, .. } => Ok(from),
        }
    }

    /// Looks up a participating record set by identifier.
    pub fn record_set(&self, name: &str) -> Result<&RecordSet> {
        if matches!(self.inner.kind, DataSourceKind::Dummy) {
            return Err(Error::no_record_set_available());
        }

        self.record_sets()
            .into_iter()
            .find(|record_set| record_set.identifier() == Some(name))
            .ok_or_else(|| Error::record_set_not_found(name))
    }

    /// All participating record sets, in declaration order: the from
    /// set first, then joined sets in application order.
    pub fn record_sets(&self) -> Vec<&RecordSet> {
        match &self.inner.kind {
            DataSourceKind::Dummy => vec![],
            DataSourceKind::Single(record_set) => vec![record_set],
            DataSourceKind::Multi { from, joins } => std::iter::once(from)
                .chain(joins.iter().map(|join| &join.record_set))
                .collect(),
        }
    }

    /// Appends a filter decorator, returning a new data source. The
    /// chain preserves application order and is never deduplicated.
    pub fn decorate(&self, decorator: Decorator) -> Self {
        let mut decorators = self.inner.decorators.clone();
        decorators.push(decorator);
        Self::new(self.inner.kind.clone(), decorators)
    }

    /// Propagates optionality into every participating record set.
    /// Used when an internal wrapper around this source is marked
    /// optional.
    pub(crate) fn mark_optional(&self, optional: bool) -> Self {
        let kind = match &self.inner.kind {
            DataSourceKind::Dummy => return self.clone(),
            DataSourceKind::Single(record_set) => {
                let marked = record_set.mark_optional(optional);
                if marked.is_same(record_set) {
                    return self.clone();
                }
                DataSourceKind::Single(marked)
            }
            DataSourceKind::Multi { from, joins } => {
                let marked_from = from.mark_optional(optional);
                let marked_joins: Vec<Join> = joins
                    .iter()
                    .map(|join| Join {
                        kind: join.kind,
                        record_set: join.record_set.mark_optional(optional),
                        on: join.on.clone(),
                    })
                    .collect();

                let unchanged = marked_from.is_same(from)
                    && marked_joins
                        .iter()
                        .zip(joins)
                        .all(|(marked, join)| marked.record_set.is_same(&join.record_set));
                if unchanged {
                    return self.clone();
                }

                DataSourceKind::Multi {
                    from: marked_from,
                    joins: marked_joins,
                }
            }
        };

        Self::new(kind, self.inner.decorators.clone())
    }
}

impl PartialEq for DataSource {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || *self.inner == *other.inner
    }
}

impl Node for DataSource {
    fn node_type(&self) -> NodeType {
        NodeType::DataSource
    }
}

impl From<RecordSet> for DataSource {
    fn from(value: RecordSet) -> Self {
        Self::single(value)
    }
}
