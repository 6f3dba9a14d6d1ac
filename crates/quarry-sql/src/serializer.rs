#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod query;
mod source;

use quarry_core::{
    ast::{DataSource, Expr, Query},
    Result,
};

/// Controls how literal values render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Render literals inline, annotated with their declared type,
    /// e.g. `("10" : I32)`. Meant for logs and test fixtures.
    Debug,

    /// Push literals through [`Params`] and render a placeholder.
    Production,
}

/// Serializes any node of the tree to formatted SQL text.
///
/// Identifier quoting is configurable through the name delimiters;
/// everything else about dialect flavoring lives downstream.
#[derive(Debug)]
pub struct Serializer {
    /// Opening identifier quote
    begin_delim: char,

    /// Closing identifier quote
    end_delim: char,

    /// Literal rendering behavior
    mode: Mode,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(begin_delim: char, end_delim: char) -> Self {
        Self {
            begin_delim,
            end_delim,
            mode: Mode::Production,
        }
    }

    /// A serializer with bracket delimiters that renders typed
    /// literals inline.
    pub fn debug() -> Self {
        Self {
            begin_delim: '[',
            end_delim: ']',
            mode: Mode::Debug,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn serialize_query(&self, query: &Query, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        query.to_sql(&mut fmt)?;
        Ok(ret)
    }

    pub fn serialize_data_source(
        &self,
        source: &DataSource,
        params: &mut impl Params,
    ) -> Result<String> {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        source.to_sql(&mut fmt)?;
        Ok(ret)
    }

    pub fn serialize_expr(&self, expr: &Expr, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        expr.to_sql(&mut fmt)?;
        Ok(ret)
    }
}
