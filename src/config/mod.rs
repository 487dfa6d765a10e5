//! Configuration resolution
//!
//! Settings come from four ordered layers, later layers winning per key:
//! 1. Compiled-in defaults
//! 2. Structural file: `config.<environment>.toml` (required)
//! 3. Secrets file: `.env.<environment>` (optional, never committed)
//! 4. Process environment: `APP_*` variables
//!
//! [`Resolver::resolve`] merges the layers and validates the result into an
//! immutable [`Settings`] value.

mod environment;
mod loader;
mod overlay;
mod types;

pub use environment::Environment;
pub use loader::{Resolver, ScaffoldOutcome, merge_layers};
pub use overlay::KvOverlay;
pub use types::{
    AppSettings, AuthSettings, DatabaseSettings, LogFormat, LogSettings, RawAuthSettings,
    RawDatabaseSettings, RawSettings, ServerSettings, Settings,
};
