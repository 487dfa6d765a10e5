//! Check Command
//!
//! Resolve settings for an environment and report the outcome. The global
//! subscriber is installed from the resolved settings themselves, so this
//! command also shows what the configured logging looks like: colorized
//! console in dev, line-delimited JSON in prod.

use anyhow::Result;

use crate::cli::Output;
use crate::config::{Environment, Resolver};
use crate::logging;

pub fn run(
    resolver: &Resolver,
    environment: Environment,
    level_override: Option<&str>,
) -> Result<()> {
    let settings = resolver.resolve_env(environment)?;

    match level_override {
        Some(level) => logging::init_with(level, settings.log.format, settings.environment)?,
        None => logging::init(&settings)?,
    }

    // database.url stays out of the fields on purpose
    tracing::info!(
        environment = %settings.environment,
        host = %settings.server.host,
        port = settings.server.port,
        workers = settings.server.workers,
        "configuration resolved"
    );

    let output = Output::new();
    output.success(&format!(
        "Configuration for '{}' is valid",
        settings.environment
    ));

    output.section("Resolved settings");
    output.item("app", &settings.app.name);
    output.item(
        "server",
        &format!("{}:{}", settings.server.host, settings.server.port),
    );
    output.item("workers", &settings.server.workers.to_string());
    output.item("db pool", &settings.database.pool_size.to_string());
    output.item(
        "auth key",
        if settings.auth.secret_key.is_some() {
            "set"
        } else {
            "not set"
        },
    );
    output.item(
        "log",
        &format!("{} ({})", settings.log.level, settings.log.format),
    );

    Ok(())
}
