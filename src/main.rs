use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use confstack::config::{Environment, LogFormat, Resolver};
use confstack::constants;

/// Parse environment name from string
fn parse_environment(s: &str) -> Result<Environment, String> {
    s.parse()
        .map_err(|e: confstack::ConfigError| e.to_string())
}

#[derive(Parser)]
#[command(name = "confstack")]
#[command(
    version,
    about = "Layered, environment-aware application settings with masked logging"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        long,
        short,
        env = constants::env::DISCRIMINATOR,
        default_value = "dev",
        value_parser = parse_environment,
        help = "Target environment: dev, staging, prod"
    )]
    env: Environment,

    #[arg(
        long,
        default_value = ".",
        help = "Directory holding config.<env>.toml and .env.<env>"
    )]
    config_dir: PathBuf,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print resolved settings with secrets masked
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },

    /// Resolve and validate settings, logging through the resolved subscriber
    Check,

    /// Show the configuration sources for the chosen environment
    Paths,

    /// Write starter configuration files for every environment
    Init {
        #[arg(long, short, help = "Overwrite existing files")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mconfstack encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        eprintln!("\n\x1b[33mPlease report this issue at:\x1b[0m");
        eprintln!("  https://github.com/confstack/confstack/issues");
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    let resolver = Resolver::new(&cli.config_dir);

    match cli.command {
        Commands::Show { format } => {
            confstack::logging::init_with(level, LogFormat::Pretty, cli.env)?;
            confstack::cli::commands::show::run(&resolver, cli.env, &format)?;
        }
        Commands::Check => {
            // check installs the subscriber from the resolved settings;
            // an explicit --verbose/--quiet still overrides the level
            let level_override = (cli.verbose || cli.quiet).then_some(level);
            confstack::cli::commands::check::run(&resolver, cli.env, level_override)?;
        }
        Commands::Paths => {
            confstack::cli::commands::paths::run(&resolver, cli.env)?;
        }
        Commands::Init { force } => {
            confstack::logging::init_with(level, LogFormat::Pretty, cli.env)?;
            confstack::cli::commands::init::run(&resolver, force)?;
        }
    }

    Ok(())
}
