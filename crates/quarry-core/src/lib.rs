mod error;
pub use error::Error;

pub mod ast;

pub mod schema;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
