//! Environment Discriminator
//!
//! The known deployment environments. Each environment selects one
//! structural/secrets file pair; an unrecognized name is rejected before
//! any file is read.

use serde::{Deserialize, Serialize};

use crate::constants::files;
use crate::types::ConfigError;

/// Deployment environment selecting which configuration files to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Dev,
    /// Pre-production verification
    Staging,
    /// Production
    Prod,
}

impl Environment {
    /// Every known environment, in scaffold order
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Staging, Environment::Prod];

    /// Structural file name for this environment (e.g. `config.dev.toml`)
    pub fn config_file(&self) -> String {
        format!("{}{}.{}", files::STRUCTURAL_PREFIX, self, files::STRUCTURAL_EXT)
    }

    /// Secrets file name for this environment (e.g. `.env.dev`)
    pub fn secrets_file(&self) -> String {
        format!("{}{}", files::SECRETS_PREFIX, self)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Staging => write!(f, "staging"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "prod" => Ok(Environment::Prod),
            _ => Err(ConfigError::UnknownEnvironment {
                name: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Environment::Dev.to_string(), "dev");
        assert_eq!(Environment::Staging.to_string(), "staging");
        assert_eq!(Environment::Prod.to_string(), "prod");
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Dev);
        assert_eq!(
            "staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Prod);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Prod);
        assert_eq!(
            "Staging".parse::<Environment>().unwrap(),
            Environment::Staging
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownEnvironment { ref name } if name == "qa"
        ));
    }

    #[test]
    fn test_default_is_dev() {
        assert_eq!(Environment::default(), Environment::Dev);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Environment::Dev.config_file(), "config.dev.toml");
        assert_eq!(Environment::Prod.config_file(), "config.prod.toml");
        assert_eq!(Environment::Staging.secrets_file(), ".env.staging");
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Environment::ALL.len(), 3);
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }
}
