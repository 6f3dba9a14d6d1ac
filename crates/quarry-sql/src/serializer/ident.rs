use super::{Formatter, Params, ToSql};

use quarry_core::Result;

/// An identifier wrapped in the serializer's name delimiters.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) -> Result<()> {
        f.dst.push(f.serializer.begin_delim);
        f.dst.push_str(self.0.as_ref());
        f.dst.push(f.serializer.end_delim);
        Ok(())
    }
}
