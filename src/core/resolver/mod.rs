//! Environment configuration resolution
//!
//! The resolver is a pure, stateless transform: given an environment name
//! and a loaded [`crate::config::DefinitionsFile`], it overlays the matching
//! definition on the defaults, validates the merged record and returns the
//! immutable [`crate::domain::EnvironmentConfig`]. It performs no I/O and
//! holds no state, so concurrent callers need no coordination.

pub mod merge;
pub mod resolve;

// Re-export the two operations
pub use merge::merge;
pub use resolve::resolve;
