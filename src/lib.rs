//! confstack - Layered, Environment-Aware Application Settings
//!
//! Resolves application settings from four ordered layers into one
//! immutable, validated value:
//!
//! 1. Compiled-in defaults
//! 2. Structural file: `config.<environment>.toml`
//! 3. Secrets file: `.env.<environment>`
//! 4. Process environment: `APP_*` variables
//!
//! ## Core Features
//!
//! - **Deterministic precedence**: later layers win per key; the merge is a
//!   pure function over the captured inputs
//! - **Typed errors**: missing files, parse failures and invalid values are
//!   distinct kinds, each naming the file or dotted key involved
//! - **Secret hygiene**: secret values live in `SecretString` and serialize
//!   as a fixed redaction marker
//! - **Settings-driven logging**: colorized console or line-delimited JSON,
//!   both masking sensitive field names
//!
//! ## Quick Start
//!
//! ```ignore
//! use confstack::{Resolver, logging};
//!
//! let settings = Resolver::new("config").resolve("prod")?;
//! logging::init(&settings)?;
//! tracing::info!(port = settings.server.port, "starting");
//! ```
//!
//! ## Modules
//!
//! - [`config`]: layer merge, validation, the resolved settings model
//! - [`logging`]: subscriber bootstrap and sensitive-field masking
//! - [`cli`]: the `confstack` command-line tool

pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Environment, LogFormat, Resolver, Settings};

// Error Types
pub use types::{ConfigError, Result};

// Logging
pub use logging::{LoggingError, REDACTION_MARKER};

// Secret values carried inside Settings
pub use secrecy::{ExposeSecret, SecretString};
