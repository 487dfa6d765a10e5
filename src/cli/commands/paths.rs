//! Paths Command
//!
//! Show the configuration sources for an environment in merge order,
//! without reading any of them.

use anyhow::Result;
use console::{StyledObject, style};

use crate::config::{Environment, Resolver};
use crate::constants;

pub fn run(resolver: &Resolver, environment: Environment) -> Result<()> {
    println!("Configuration sources for '{}', later layers win:", environment);
    println!("  1.   built-in defaults");

    let structural = resolver.structural_path(environment);
    println!(
        "  2. {} {} (structural, required)",
        marker(structural.exists(), true),
        structural.display()
    );

    let secrets = resolver.secrets_path(environment);
    println!(
        "  3. {} {} (secrets, optional)",
        marker(secrets.exists(), false),
        secrets.display()
    );

    println!(
        "  4.   {}* variables from the process environment",
        constants::env::PREFIX
    );

    Ok(())
}

fn marker(exists: bool, required: bool) -> StyledObject<&'static str> {
    if exists {
        style("✓").green()
    } else if required {
        style("✗").red()
    } else {
        style("-").yellow()
    }
}
