//! The schema objects the record-set layer wraps.
//!
//! These are deliberately thin: the tree core only needs a name, the
//! declared column types with nullability, and an order-stable column
//! enumeration. Catalog management lives elsewhere.

mod table;
pub use table::{Column, Table};

mod view;
pub use view::{View, ViewBuilder};
