// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the pacer workspace.
//!
//! The debounce and throttle wrappers never fail on their own: a wrapped callback runs
//! or it doesn't. Errors only appear at the edges, when a scheduler is requested
//! outside of its host runtime or when configuration text can't be parsed.
//!
//! # Examples
//!
//! ```
//! use pacer_error::{PacerError, Result};
//!
//! fn parse_policy(value: &str) -> Result<bool> {
//!     match value {
//!         "leading" => Ok(true),
//!         "trailing" => Ok(false),
//!         other => Err(PacerError::invalid_edge(other)),
//!     }
//! }
//!
//! assert!(parse_policy("sideways").is_err());
//! ```

/// Root error type for all pacer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacerError {
    /// A scheduler was requested outside of its host runtime
    ///
    /// For tokio this means no runtime is entered on the current thread.
    #[error("No runtime available: {context}")]
    NoRuntime {
        /// Why the runtime lookup failed
        context: String,
    },

    /// An edge policy string could not be parsed
    #[error("Invalid edge policy '{value}': expected 'leading' or 'trailing'")]
    InvalidEdge {
        /// The rejected input
        value: String,
    },
}

impl PacerError {
    /// Create a missing-runtime error with the given context
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }

    /// Create an invalid edge policy error for the given input
    pub fn invalid_edge(value: impl Into<String>) -> Self {
        Self::InvalidEdge {
            value: value.into(),
        }
    }
}

/// Specialized Result type for pacer operations
pub type Result<T> = core::result::Result<T, PacerError>;
