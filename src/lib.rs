// Bedrock - Environment Configuration Resolver
// Copyright (c) 2025 Bedrock Contributors
// Licensed under the MIT License

//! # Bedrock - Environment Configuration Resolver
//!
//! Bedrock validates and resolves named-environment deployment parameter
//! sets (cluster name, region, Kubernetes version, node-group sizing, tags)
//! for consumption by external provisioning tooling.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** environment definitions from a TOML file into an immutable
//!   snapshot
//! - **Merging** each environment's definition over a shared defaults base
//! - **Validating** every required field and invariant, with all problems
//!   aggregated into a single report
//! - **Deriving** the chart release name and label set for an environment
//!
//! ## Architecture
//!
//! Bedrock follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (resolver, validation, release naming)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Definitions file management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bedrock::config::load_definitions;
//! use bedrock::core::resolver::resolve;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load definitions once into an immutable snapshot
//!     let definitions = load_definitions("bedrock.toml")?;
//!
//!     // Resolve one environment
//!     let config = resolve("staging", &definitions)?;
//!
//!     println!("cluster {} in {}", config.cluster_name, config.region);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Bedrock uses the [`domain::BedrockError`] type for all errors. Resolution
//! fails in exactly two ways: the environment is unknown (the error lists the
//! known names), or the merged definition is invalid (the error carries a
//! [`domain::ValidationReport`] naming every offending field at once).
//! Resolution is deterministic and pure, so retrying without changing the
//! inputs always yields the same outcome.
//!
//! ```rust,no_run
//! use bedrock::domain::BedrockError;
//!
//! fn example() -> Result<(), BedrockError> {
//!     // Errors are automatically converted using the ? operator
//!     let definitions = bedrock::config::load_definitions("bedrock.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Bedrock uses structured logging with the `tracing` crate. Logging happens
//! only in the CLI shell; the resolver core is silent.
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Resolving environment");
//! warn!(environment = "staging", "Definition overrides defaults region");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
