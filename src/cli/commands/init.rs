//! Init Command
//!
//! Write starter configuration files into the configuration directory:
//! one structural file per environment plus a secrets template.

use anyhow::Result;

use crate::cli::Output;
use crate::config::Resolver;

pub fn run(resolver: &Resolver, force: bool) -> Result<()> {
    let output = Output::new();
    let outcomes = resolver.init_environment_files(force)?;

    for outcome in &outcomes {
        if outcome.created {
            output.success(&format!("created {}", outcome.path.display()));
        } else {
            output.warning(&format!("kept existing {}", outcome.path.display()));
        }
    }

    if outcomes.iter().any(|o| !o.created) {
        output.info("use --force to overwrite existing files");
    }

    println!();
    println!("Next steps:");
    println!("  1. Copy .env.example to .env.<environment> and fill in real secrets");
    println!("  2. Run 'confstack check' to verify the configuration resolves");

    Ok(())
}
