//! Connection configuration and the identity derived from it.

pub mod model;
pub mod source;

pub use model::{ConnectionConfig, ConnectionIdentity};
pub use source::{ConnectionSource, SharedConnection};
