//! Visible fields of entity detail windows.

pub mod cache;
pub mod model;

pub use cache::FieldsCache;
pub use model::FieldsMetadata;
