use super::{ExprType, Query, QueryTrait, SelectionItem, SetOp};
use crate::Result;

/// A set-operation query: a first query plus one or more
/// `(operator, query)` steps, exposing one merged selection list.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundQuery {
    /// The first participating query
    pub first: Query,

    /// The remaining steps, in application order
    pub steps: Vec<CompoundStep>,

    /// Applied traits, in application order
    pub traits: Vec<QueryTrait>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStep {
    /// The set operator joining this step to the running compound
    pub op: SetOp,

    /// The following query
    pub query: Query,
}

impl CompoundStep {
    pub fn new(op: SetOp, query: Query) -> Self {
        Self { op, query }
    }
}

impl CompoundQuery {
    /// Every participating query, in order.
    pub fn queries(&self) -> impl Iterator<Item = &Query> {
        std::iter::once(&self.first).chain(self.steps.iter().map(|step| &step.query))
    }

    /// Merges the participating selections positionally.
    ///
    /// A position is typed and named only when every branch reports an
    /// explicit name the branches agree on and the types merge. Any
    /// untyped branch at a position (raw query, incompatible type, or
    /// a branch shorter than the position) degrades the result to an
    /// untyped selection carrying the first available name. The
    /// degrade is sticky: no later branch can restore the type.
    pub(crate) fn merged_selection(&self) -> Result<Option<Vec<SelectionItem>>> {
        let mut branches = vec![];
        let mut has_raw = false;

        for query in self.queries() {
            match query.selection()? {
                Some(items) => branches.push(items),
                None => has_raw = true,
            }
        }

        if branches.is_empty() {
            return Ok(None);
        }

        let len = branches.iter().map(Vec::len).max().unwrap_or(0);
        let mut merged = Vec::with_capacity(len);

        for position in 0..len {
            let present: Vec<&SelectionItem> = branches
                .iter()
                .filter_map(|branch| branch.get(position))
                .collect();
            let first = present
                .first()
                .expect("position bounded by the longest branch");
            let first_name = present.iter().find_map(|item| item.name.clone());

            let mut degraded = has_raw || present.len() < branches.len();
            let mut name: Option<String> = None;
            let mut ty = ExprType::Unknown;

            if !degraded {
                for item in &present {
                    let Some(item_name) = &item.name else {
                        degraded = true;
                        break;
                    };
                    if item.ty.is_unknown() {
                        degraded = true;
                        break;
                    }

                    match &name {
                        None => {
                            name = Some(item_name.clone());
                            ty = item.ty;
                        }
                        Some(agreed) if agreed == item_name => {
                            ty = ty.merge(item.ty);
                            if ty.is_unknown() {
                                degraded = true;
                                break;
                            }
                        }
                        Some(_) => {
                            degraded = true;
                            break;
                        }
                    }
                }
            }

            merged.push(if degraded {
                SelectionItem {
                    name: first_name,
                    ty: ExprType::Unknown,
                    expr: first.expr.clone(),
                }
            } else {
                SelectionItem {
                    name,
                    ty,
                    expr: first.expr.clone(),
                }
            });
        }

        Ok(Some(merged))
    }
}
