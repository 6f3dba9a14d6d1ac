use super::{Formatter, ToSql};

use quarry_core::{ast::Value, Result};

/// Collects literal values bound during serialization.
pub trait Params {
    fn push(&mut self, value: &Value) -> Placeholder;
}

pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        use std::fmt::Write;

        write!(&mut f.dst, "?{}", self.0).unwrap();
        Ok(())
    }
}
