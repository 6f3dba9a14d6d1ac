use super::{Formatter, Ident, Params, ToSql};

use quarry_core::{
    ast::{DataSource, DataSourceKind, Join, JoinKind, RecordSet, RecordSetKind},
    Result,
};

impl ToSql for &DataSource {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if !self.is_dummy() {
            fmt!(f, "FROM " JoinChain(self));
        }

        for decorator in self.decorators() {
            let keyword = if decorator.conjunction { "AND" } else { "OR" };
            let condition = &decorator.condition;
            fmt!(f, "\n" keyword " WHERE\n    (" condition ")");
        }

        Ok(())
    }
}

/// The record sets of a data source, without the `FROM` keyword or the
/// decorator chain. Also used to inline internal wrappers.
pub(super) struct JoinChain<'a>(pub(super) &'a DataSource);

impl ToSql for JoinChain<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0.kind() {
            DataSourceKind::Dummy => {}
            DataSourceKind::Single(record_set) => fmt!(f, FromItem(record_set)),
            DataSourceKind::Multi { from, joins } => {
                fmt!(f, FromItem(from));
                for join in joins {
                    fmt!(f, join);
                }
            }
        }

        Ok(())
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let set = FromItem(&self.record_set);

        match (self.kind, &self.on) {
            (JoinKind::Cross, _) => fmt!(f, "\nCROSS JOIN " set),
            (kind, Some(on)) => {
                f.dst.push('\n');
                f.dst.push_str(kind.keyword());
                fmt!(f, " JOIN " set " ON\n    (" on ")");
            }
            (kind, None) => {
                f.dst.push('\n');
                f.dst.push_str(kind.keyword());
                fmt!(f, " JOIN " set);
            }
        }

        Ok(())
    }
}

/// A record set in FROM position.
struct FromItem<'a>(&'a RecordSet);

impl ToSql for FromItem<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let record_set = self.0;

        match record_set.kind() {
            RecordSetKind::Table(table) => {
                fmt!(f, Ident(&table.name));
                self.alias(f)?;
            }
            RecordSetKind::View(view) => {
                if let Some(schema) = &view.schema_name {
                    fmt!(f, Ident(schema) ".");
                }
                fmt!(f, Ident(&view.name));
                self.alias(f)?;
            }
            RecordSetKind::ViewBuilder(builder) => {
                if let Some(schema) = &builder.schema_name {
                    fmt!(f, Ident(schema) ".");
                }
                fmt!(f, Ident(&builder.name));
                self.alias(f)?;
            }
            RecordSetKind::Raw { name } => {
                fmt!(f, Ident(name));
                self.alias(f)?;
            }
            RecordSetKind::Cte(cte) => {
                fmt!(f, Ident(&cte.name));
                self.alias(f)?;
            }
            RecordSetKind::RawQuery { query, .. } | RecordSetKind::Query { query, .. } => {
                let identifier = record_set
                    .identifier()
                    .expect("query-backed record sets always carry a name");
                fmt!(f, "(" query ") AS " Ident(identifier));
            }
            RecordSetKind::Internal(source) => {
                fmt!(f, "(" JoinChain(source) ")");
            }
            RecordSetKind::Dummy => {}
        }

        Ok(())
    }
}

impl FromItem<'_> {
    fn alias<P: Params>(&self, f: &mut Formatter<'_, P>) -> Result<()> {
        if let Some(alias) = self.0.alias() {
            fmt!(f, " AS " Ident(alias));
        }

        Ok(())
    }
}
