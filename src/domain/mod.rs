//! Domain models and types for Bedrock.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed names** ([`ClusterName`], [`Region`], [`KubernetesVersion`])
//! - **The closed environment set** ([`Environment`])
//! - **The validated value object** ([`EnvironmentConfig`])
//! - **Error types** ([`BedrockError`], [`ValidationReport`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Bedrock uses the newtype pattern for platform-facing names so a region can
//! never be passed where a cluster name is expected:
//!
//! ```rust
//! use bedrock::domain::{ClusterName, Region};
//!
//! # fn example() -> std::result::Result<(), String> {
//! let cluster = ClusterName::new("my-app-staging-eks")?;
//! let region = Region::new("us-east-1")?;
//!
//! // This won't compile - type safety prevents mixing names
//! // let wrong: ClusterName = region;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod environment;
pub mod errors;
pub mod names;
pub mod result;

// Re-export commonly used types
pub use environment::{
    Environment, EnvironmentConfig, NodeGroupSize, ENVIRONMENT_TAG, REQUIRED_TAGS,
};
pub use errors::{BedrockError, ValidationIssue, ValidationReport};
pub use names::{ClusterName, KubernetesVersion, Region};
pub use result::Result;
