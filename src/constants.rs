//! Global Constants
//!
//! Centralized constants for the configuration layering scheme.
//! File name patterns and variable names should be defined here, not inline.

/// Process-environment dialect constants
pub mod env {
    /// Variable selecting the active environment (e.g. `APP_ENV=prod`)
    pub const DISCRIMINATOR: &str = "APP_ENV";

    /// Prefix marking a variable as a settings override
    pub const PREFIX: &str = "APP_";

    /// Separator between nested key segments (`APP_SERVER__PORT` -> `server.port`)
    pub const SEPARATOR: &str = "__";
}

/// Configuration file name constants
pub mod files {
    /// Structural file name prefix; the environment name follows
    pub const STRUCTURAL_PREFIX: &str = "config.";

    /// Structural file extension
    pub const STRUCTURAL_EXT: &str = "toml";

    /// Secrets file name prefix; the environment name follows
    pub const SECRETS_PREFIX: &str = ".env.";

    /// Template secrets file written by `confstack init`
    pub const ENV_EXAMPLE: &str = ".env.example";
}
