//! # satchel-cli
//!
//! Command-line front end for satchel.
//!
//! Handles argument parsing, sets up logging and error reporting, loads the
//! layered settings, and dispatches to the command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use satchel_core::{SatchelError, SatchelResult};
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Dot-notation lookups, string helpers and timezone-aware dates
#[derive(Parser)]
#[command(name = "satchel", version, about = "Small data, string and date helpers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Unrecognised command name (used for suggestions)
    #[arg(value_name = "COMMAND", hide = true)]
    pub unknown: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a dot-notation path from a JSON or TOML document
    Get {
        file: Utf8PathBuf,
        /// Path such as `server.ports.0`; omit to print the whole document
        path: Option<String>,
        /// Printed when the path is absent (parsed as JSON when possible)
        #[arg(long)]
        default: Option<String>,
    },
    /// Check whether a dot-notation path exists in a document
    Exists { file: Utf8PathBuf, path: String },
    /// Convert the case of a string
    Case {
        #[arg(value_enum)]
        style: CaseStyle,
        value: String,
        /// Delimiter for snake case
        #[arg(long)]
        delimiter: Option<String>,
    },
    /// Generate a secure random string
    Random {
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(short, long, value_enum, default_value_t = RandomKind::Alphanumeric)]
        kind: RandomKind,
        /// Characters to draw from (implies `--kind custom`)
        #[arg(long)]
        charset: Option<String>,
    },
    /// Show the current time or convert a Unix timestamp
    Now {
        #[arg(long)]
        timezone: Option<String>,
        #[arg(long)]
        timestamp: Option<i64>,
        /// strftime-style format, e.g. `%Y-%m-%d %H:%M`
        #[arg(long)]
        format: Option<String>,
    },
    /// Strip namespace or module qualifiers from a type name
    Basename { name: String },
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    Camel,
    Studly,
    Snake,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RandomKind {
    Base64,
    Ascii,
    Numeric,
    Alphanumeric,
    Special,
    Custom,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting satchel v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run_cli(cli) {
        eprint!("{}", ErrorFormatter::new().format_error(&err));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> SatchelResult<()> {
    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| SatchelError::io("Failed to create async runtime".to_string(), e))?;

    rt.block_on(async {
        let overrides = cli
            .command
            .as_ref()
            .map(commands::settings_overrides)
            .unwrap_or_default();
        let ctx = CommandContext::new(&overrides).await?;

        match (cli.command, cli.unknown) {
            (Some(command), _) => commands::dispatch_command(command, &ctx).await,
            (None, Some(unknown)) => commands::unknown_command(&unknown, &ctx),
            (None, None) => commands::show_help(&ctx),
        }
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "satchel_cli={level},satchel_core={level},satchel_arr={level},satchel_str={level},satchel_time={level},satchel_config={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("satchel encountered an unexpected error: {}", panic_info);
        eprintln!("satchel crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/satchel-rs/satchel/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
