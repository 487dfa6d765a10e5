//! Unified Error Type System
//!
//! Centralized error types for configuration resolution.
//!
//! ## Design Principles
//!
//! - Single error type (ConfigError) covering every way resolution can fail
//! - Structured variants that name the offending file or key
//! - All failures are terminal for the resolution attempt; the caller decides
//!   whether to abort startup

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Resolution Errors
    // -------------------------------------------------------------------------
    /// The structural configuration file for a known environment is absent.
    /// Secrets files are optional; structural files are not.
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    /// A configuration file exists but is not valid TOML / dotenv data.
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A required key is unset after all layers merged, or a value could not
    /// be coerced to the declared type. Always names the offending key.
    #[error("Invalid configuration for key '{key}': {message}")]
    Validation { key: String, message: String },

    /// The environment discriminator matched no known environment.
    /// Raised before any file is read.
    #[error("Unknown environment '{name}'. Valid values: dev, staging, prod")]
    UnknownEnvironment { name: String },
}

impl ConfigError {
    /// Create a validation error for a dotted key path
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// The dotted key path this error names, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Validation { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// =============================================================================
// Tests
// =============================================================================
