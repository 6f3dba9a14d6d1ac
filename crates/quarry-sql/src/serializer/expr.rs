use super::{Comma, Delimited, Formatter, Ident, Mode, Params, ToSql};

use quarry_core::{
    ast::{call_traits, BinaryOp, Expr, Field, Ordering, Value},
    Result,
};

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        use Expr::*;

        match self {
            Field(field) => fmt!(f, field),
            Value(value) => fmt!(f, value),
            BinaryOp(expr) => {
                fmt!(f, Grouped(&expr.lhs) " " expr.op " " Grouped(&expr.rhs));
            }
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Grouped), " AND "));
            }
            Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Grouped), " OR "));
            }
            Not(expr) => {
                fmt!(f, "NOT " Grouped(expr));
            }
            IsNull(expr) => {
                fmt!(f, Grouped(expr) " IS NULL");
            }
            Func(func) => {
                let traits = call_traits(&func.traits);

                fmt!(f, func.name.as_str() "(");
                if traits.distinct {
                    fmt!(f, "DISTINCT ");
                }
                fmt!(f, Comma(&func.args) ")");

                if let Some(filter) = &traits.filter {
                    fmt!(f, " FILTER (WHERE " filter ")");
                }
            }
            Raw(sql) => fmt!(f, sql.as_str()),
        }

        Ok(())
    }
}

/// Wraps composite boolean operands in parentheses so the printed text
/// keeps the tree's grouping rather than relying on operator
/// precedence.
struct Grouped<'a>(&'a Expr);

impl ToSql for Grouped<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            Expr::And(_) | Expr::Or(_) => fmt!(f, "(" self.0 ")"),
            _ => fmt!(f, self.0),
        }

        Ok(())
    }
}

impl ToSql for &Field {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.record_set.identifier() {
            Some(identifier) if !self.record_set.is_internal() => {
                fmt!(f, Ident(identifier) "." Ident(&self.name));
            }
            _ => fmt!(f, Ident(&self.name)),
        }

        Ok(())
    }
}

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.is_null() {
            return "NULL".to_sql(f);
        }

        match f.serializer.mode {
            Mode::Debug => {
                let base = self
                    .base_type()
                    .expect("non-null values carry a base type");
                let text = literal_text(self);
                fmt!(f, "(\"" text.as_str() "\" : ");
                f.dst.push_str(&base.to_string());
                fmt!(f, ")");
            }
            Mode::Production => {
                let placeholder = f.params.push(self);
                fmt!(f, placeholder);
            }
        }

        Ok(())
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::Bool(v) => v.to_string(),
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Bytes(v) => v.iter().map(|byte| format!("{byte:02x}")).collect(),
        Value::Null => "NULL".to_string(),
    }
}

impl ToSql for BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.push_str(&self.to_string());
        Ok(())
    }
}

impl ToSql for &Ordering {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, &self.expr);
        if !self.direction.is_asc() {
            fmt!(f, " DESC");
        }

        Ok(())
    }
}
