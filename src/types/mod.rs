//! Shared Types
//!
//! Error types used across the crate.

pub mod error;

pub use error::{ConfigError, Result};
