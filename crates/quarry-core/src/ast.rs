mod compound_query;
pub use compound_query::{CompoundQuery, CompoundStep};

mod cte;
pub use cte::Cte;

mod data_source;
pub use data_source::{DataSource, DataSourceKind, Decorator};

mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_or;
pub use expr_or::ExprOr;

mod extract;
pub use extract::{call_traits, source_traits, top_traits, CallTraits, SourceTraits, TopTraits};

mod field;
pub use field::Field;

mod join;
pub use join::{Join, JoinDef, JoinKind, JoinScope};

mod node;
pub use node::{Node, NodeType};

mod op_binary;
pub use op_binary::BinaryOp;

mod op_set;
pub use op_set::SetOp;

mod ordering;
pub use ordering::Ordering;

mod query;
pub use query::{Query, QueryKind, RawSql};

mod query_trait;
pub use query_trait::{CustomTrait, FilterTrait, QueryTrait};

mod record_set;
pub use record_set::{RecordSet, RecordSetKind};

mod select_query;
pub use select_query::SelectQuery;

mod selection;
pub use selection::{Selection, SelectionItem};

mod ty;
pub use ty::{BaseType, ExprType};

mod value;
pub use value::Value;
