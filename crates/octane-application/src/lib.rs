//! Composition root of the Octane workspace session.

pub mod workspace_session;

pub use workspace_session::{RestorePlan, WorkspaceSessionContext};
