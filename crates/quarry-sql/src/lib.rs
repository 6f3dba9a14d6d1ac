pub mod serializer;
pub use serializer::{Mode, Params, Placeholder, Serializer};
