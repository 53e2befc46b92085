//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! The resolver core never logs; all logging happens in the CLI shell around
//! it.
//!
//! # Example
//!
//! ```no_run
//! use bedrock::logging::init_logging;
//! use bedrock::config::LoggingConfig;
//!
//! let config = LoggingConfig::console_only();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a resolution request
#[macro_export]
macro_rules! log_resolve_start {
    ($environment:expr) => {
        tracing::info!(
            environment = %$environment,
            "Resolving environment"
        );
    };
}

/// Log a completed resolution with the resulting cluster
#[macro_export]
macro_rules! log_resolve_complete {
    ($environment:expr, $cluster:expr) => {
        tracing::info!(
            environment = %$environment,
            cluster = %$cluster,
            "Environment resolved"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_compile() {
        // These tests just verify that the macros compile correctly
        // Actual logging output is not tested in unit tests
    }
}
