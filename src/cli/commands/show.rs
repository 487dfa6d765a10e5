//! Show Command
//!
//! Print the fully resolved settings for an environment. Secret values are
//! masked in both formats, so the output is safe to paste into an issue.
//!
//! Usage:
//!   confstack show
//!   confstack -e prod show -f json

use anyhow::Result;

use crate::config::{Environment, Resolver};

pub fn run(resolver: &Resolver, environment: Environment, format: &str) -> Result<()> {
    let settings = resolver.resolve_env(environment)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        print!("{}", toml::to_string_pretty(&settings)?);
    }

    Ok(())
}
