use super::{DataSource, Field, QueryTrait, Selection, SelectionItem};
use crate::Result;

/// A data-source-backed query: a FROM composition plus an ordered
/// selection list and a trait chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    /// The data source being queried
    pub source: DataSource,

    /// The selection list, in declaration order
    pub selections: Vec<Selection>,

    /// Applied traits, in application order
    pub traits: Vec<QueryTrait>,
}

impl SelectQuery {
    pub fn new(source: impl Into<DataSource>) -> Self {
        Self {
            source: source.into(),
            selections: vec![],
            traits: vec![],
        }
    }

    /// Materializes the selection list, expanding wildcards against
    /// the data source's known fields at call time.
    ///
    /// Record sets that cannot enumerate fields (raw and dummy
    /// variants) contribute nothing to a wildcard expansion.
    pub(crate) fn selection_items(&self) -> Result<Vec<SelectionItem>> {
        let mut items = vec![];

        for selection in &self.selections {
            match selection {
                Selection::Expr { expr, alias } => {
                    let name = alias
                        .clone()
                        .or_else(|| expr.name().map(str::to_string));
                    items.push(SelectionItem {
                        name,
                        ty: expr.ty(),
                        expr: expr.clone(),
                    });
                }
                Selection::Wildcard {
                    record_set: Some(name),
                } => {
                    let record_set = self.source.record_set(name)?;
                    for field in record_set.known_fields()? {
                        items.push(field_item(field));
                    }
                }
                Selection::Wildcard { record_set: None } => {
                    for record_set in self.source.record_sets() {
                        for field in record_set.known_fields()? {
                            items.push(field_item(field));
                        }
                    }
                }
            }
        }

        Ok(items)
    }
}

fn field_item(field: Field) -> SelectionItem {
    SelectionItem {
        name: Some(field.name.clone()),
        ty: field.ty,
        expr: field.into(),
    }
}
