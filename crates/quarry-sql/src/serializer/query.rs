use super::{Comma, Formatter, Ident, Params, ToSql};

use quarry_core::{
    ast::{source_traits, top_traits, Cte, Expr, Ordering, Query, QueryKind, SelectionItem, SetOp},
    Result,
};

impl ToSql for &Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.kind() {
            QueryKind::Raw(raw) => fmt!(f, raw.sql.as_str()),
            QueryKind::Select(select) => {
                let traits = source_traits(&select.traits);

                ctes(f, &traits.ctes)?;

                fmt!(f, "SELECT ");
                if traits.distinct {
                    fmt!(f, "DISTINCT ");
                }

                let items = self.selection()?.unwrap_or_default();
                if items.is_empty() {
                    fmt!(f, "*");
                } else {
                    fmt!(f, Comma(items.iter().map(SelectionEntry)));
                }

                let source = &select.source;
                if !source.is_dummy() || !source.decorators().is_empty() {
                    fmt!(f, "\n" source);
                }

                if let Some(filter) = &traits.filter {
                    fmt!(f, "\nWHERE\n    (" filter ")");
                }
                if !traits.aggregations.is_empty() {
                    fmt!(f, "\nGROUP BY " Comma(&traits.aggregations));
                }
                if let Some(having) = &traits.aggregation_filter {
                    fmt!(f, "\nHAVING\n    (" having ")");
                }

                trailing(f, &traits.orderings, &traits.limit, &traits.offset)?;
            }
            QueryKind::Compound(compound) => {
                let traits = top_traits(&compound.traits);

                ctes(f, &traits.ctes)?;

                let first = &compound.first;
                fmt!(f, "(\n" first "\n)");
                for step in &compound.steps {
                    let query = &step.query;
                    fmt!(f, "\n" step.op "\n(\n" query "\n)");
                }

                trailing(f, &traits.orderings, &traits.limit, &traits.offset)?;
            }
        }

        Ok(())
    }
}

fn ctes<P: Params>(f: &mut Formatter<'_, P>, ctes: &[Cte]) -> Result<()> {
    if !ctes.is_empty() {
        fmt!(f, "WITH " Comma(ctes) "\n");
    }

    Ok(())
}

fn trailing<P: Params>(
    f: &mut Formatter<'_, P>,
    orderings: &[Ordering],
    limit: &Option<Expr>,
    offset: &Option<Expr>,
) -> Result<()> {
    if !orderings.is_empty() {
        fmt!(f, "\nORDER BY " Comma(orderings));
    }
    if let Some(limit) = limit {
        fmt!(f, "\nLIMIT (" limit ")");
    }
    if let Some(offset) = offset {
        fmt!(f, "\nOFFSET (" offset ")");
    }

    Ok(())
}

impl ToSql for &Cte {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let query = &self.query;
        fmt!(f, Ident(&self.name) " AS (\n" query "\n)");
        Ok(())
    }
}

impl ToSql for SetOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}

/// One materialized selection item; aliased when the resolved name is
/// not already the expression's own.
struct SelectionEntry<'a>(&'a SelectionItem);

impl ToSql for SelectionEntry<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, &self.0.expr);

        if let Some(name) = &self.0.name {
            if self.0.expr.name() != Some(name.as_str()) {
                fmt!(f, " AS " Ident(name));
            }
        }

        Ok(())
    }
}
