use super::{Expr, RecordSet};
use crate::{Error, Result};

use std::fmt;

/// A materialized join step inside a multi-set data source.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The join kind
    pub kind: JoinKind,

    /// The joined record set, already carrying the optionality the
    /// join kind implies
    pub record_set: RecordSet,

    /// The join condition. `None` for cross joins.
    pub on: Option<Expr>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinKind {
    /// RIGHT and FULL joins mark every previously accumulated set
    /// optional.
    pub(crate) fn promotes_outer(self) -> bool {
        matches!(self, Self::Right | Self::Full)
    }

    /// LEFT and FULL joins mark the newly joined set optional.
    pub(crate) fn promotes_inner(self) -> bool {
        matches!(self, Self::Left | Self::Full)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Cross => "CROSS",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

type OnBuilder = Box<dyn FnOnce(&JoinScope<'_>) -> Result<Expr>>;

/// A join waiting to be applied to a data source.
///
/// The condition builder runs during data-source construction and
/// receives a [`JoinScope`]: the already-promoted outer sets and the
/// not-yet-promoted inner set, so condition field references carry the
/// nullability in effect at that point of the chain.
pub struct JoinDef {
    pub(crate) kind: JoinKind,
    pub(crate) record_set: RecordSet,
    pub(crate) on: Option<OnBuilder>,
}

impl JoinDef {
    pub fn new(
        kind: JoinKind,
        record_set: RecordSet,
        on: impl FnOnce(&JoinScope<'_>) -> Result<Expr> + 'static,
    ) -> Self {
        Self {
            kind,
            record_set,
            on: Some(Box::new(on)),
        }
    }

    pub fn inner(
        record_set: RecordSet,
        on: impl FnOnce(&JoinScope<'_>) -> Result<Expr> + 'static,
    ) -> Self {
        Self::new(JoinKind::Inner, record_set, on)
    }

    pub fn left(
        record_set: RecordSet,
        on: impl FnOnce(&JoinScope<'_>) -> Result<Expr> + 'static,
    ) -> Self {
        Self::new(JoinKind::Left, record_set, on)
    }

    pub fn right(
        record_set: RecordSet,
        on: impl FnOnce(&JoinScope<'_>) -> Result<Expr> + 'static,
    ) -> Self {
        Self::new(JoinKind::Right, record_set, on)
    }

    pub fn full(
        record_set: RecordSet,
        on: impl FnOnce(&JoinScope<'_>) -> Result<Expr> + 'static,
    ) -> Self {
        Self::new(JoinKind::Full, record_set, on)
    }

    pub fn cross(record_set: RecordSet) -> Self {
        Self {
            kind: JoinKind::Cross,
            record_set,
            on: None,
        }
    }
}

impl fmt::Debug for JoinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinDef")
            .field("kind", &self.kind)
            .field("record_set", &self.record_set)
            .finish_non_exhaustive()
    }
}

/// The immutable state a join-condition builder sees: every record set
/// accumulated so far (with optionality promotions already applied)
/// plus the set being joined (not yet promoted).
pub struct JoinScope<'a> {
    pub(crate) outer: &'a [RecordSet],
    pub(crate) inner: &'a RecordSet,
}

impl JoinScope<'_> {
    /// The already-accumulated sets, in declaration order.
    pub fn outer_sets(&self) -> &[RecordSet] {
        self.outer
    }

    /// Looks up an accumulated set by identifier.
    pub fn outer(&self, name: &str) -> Result<&RecordSet> {
        self.outer
            .iter()
            .find(|record_set| record_set.identifier() == Some(name))
            .ok_or_else(|| Error::record_set_not_found(name))
    }

    /// The record set being joined.
    pub fn inner(&self) -> &RecordSet {
        self.inner
    }
}
