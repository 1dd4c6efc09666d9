//! Command implementations and dispatch logic.
//!
//! Each command renders its result to a `String` so it can be tested
//! without a terminal; the dispatcher prints what the command returns.

use camino::Utf8PathBuf;
use satchel_config::{Settings, SettingsLoader};
use satchel_core::{SatchelError, SatchelResult};
use std::collections::HashMap;
use tracing::info;

pub mod basename;
pub mod case;
pub mod lookup;
pub mod random;
pub mod time;


use crate::{output::OutputHandler, Commands};

/// Top-level command names, used for typo suggestions
const COMMAND_NAMES: [&str; 8] = [
    "get", "exists", "case", "random", "now", "basename", "version", "help",
];

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
    pub settings: Settings,
}

impl CommandContext {
    /// Create a new command context, resolving layered settings
    pub async fn new(overrides: &HashMap<String, String>) -> SatchelResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| SatchelError::io("Failed to get current directory".to_string(), e))?;
        let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| SatchelError::ConfigValidation {
            field: "cwd".to_string(),
            reason: format!("Current directory is not valid UTF-8: {}", e),
        })?;

        let settings = SettingsLoader::new(cwd.clone()).load_layered(overrides).await?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
            settings,
        })
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve(&self, path: &Utf8PathBuf) -> Utf8PathBuf {
        if path.is_absolute() {
            path.clone()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Settings overrides carried by a command's flags
pub fn settings_overrides(command: &Commands) -> HashMap<String, String> {
    let mut overrides = HashMap::new();
    match command {
        Commands::Case {
            delimiter: Some(delimiter),
            ..
        } => {
            overrides.insert("delimiter".to_string(), delimiter.clone());
        },
        Commands::Random {
            length, charset, ..
        } => {
            if let Some(length) = length {
                overrides.insert("length".to_string(), length.to_string());
            }
            if let Some(charset) = charset {
                overrides.insert("charset".to_string(), charset.clone());
            }
        },
        Commands::Now {
            timezone: Some(timezone),
            ..
        } => {
            overrides.insert("timezone".to_string(), timezone.clone());
        },
        _ => {},
    }
    overrides
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> SatchelResult<()> {
    let rendered = match command {
        Commands::Get {
            file,
            path,
            default,
        } => {
            info!("Reading {:?} from {}", path, file);
            lookup::get(&ctx.resolve(&file), path.as_deref(), default.as_deref()).await?
        },
        Commands::Exists { file, path } => {
            info!("Checking {} in {}", path, file);
            lookup::exists(&ctx.resolve(&file), &path).await?
        },
        Commands::Case { style, value, .. } => case::execute(style, &value, &ctx.settings),
        Commands::Random { kind, charset, .. } => {
            random::execute(kind, charset.is_some(), &ctx.settings)?
        },
        Commands::Now {
            timestamp, format, ..
        } => time::execute(timestamp, format.as_deref(), &ctx.settings)?,
        Commands::Basename { name } => basename::execute(&name),
        Commands::Version => {
            show_version(ctx);
            return Ok(());
        },
    };

    ctx.output.value(&rendered);
    Ok(())
}

/// Reject an unrecognised command, suggesting the closest match.
///
/// The returned error is reported once by `main`.
pub fn unknown_command(input: &str, ctx: &CommandContext) -> SatchelResult<()> {
    if let Some(suggestion) = suggest_similar_command(input) {
        ctx.output.info(&format!("Did you mean '{}'?", suggestion));
    }

    Err(SatchelError::UnknownCommand {
        name: input.to_string(),
    })
}

/// Show help information
pub fn show_help(ctx: &CommandContext) -> SatchelResult<()> {
    ctx.output.info("satchel - data, string and date helpers");
    ctx.output.info("");
    ctx.output.info("Usage: satchel [COMMAND] [OPTIONS]");
    ctx.output.info("");
    ctx.output.info("Documents:");
    ctx.output.info("  get <file> [path]       Read a dot-notation path");
    ctx.output.info("  exists <file> <path>    Check that a path exists");
    ctx.output.info("");
    ctx.output.info("Strings:");
    ctx.output.info("  case <style> <value>    Convert to camel, studly, snake or lower case");
    ctx.output.info("  random                  Generate a secure random string");
    ctx.output.info("  basename <name>         Strip qualifiers from a type name");
    ctx.output.info("");
    ctx.output.info("Dates:");
    ctx.output.info("  now                     Show the current time");
    ctx.output.info("");
    ctx.output.info("Meta:");
    ctx.output.info("  version                 Show version information");
    ctx.output.info("");
    ctx.output.info("Run 'satchel <command> --help' for more information on a command.");
    Ok(())
}

fn show_version(ctx: &CommandContext) {
    ctx.output.info(&format!("satchel v{}", env!("CARGO_PKG_VERSION")));
    ctx.output.info(&format!("Built: {}", env!("SATCHEL_BUILD_DATE")));
    ctx.output.info(&format!("Target: {}", env!("SATCHEL_TARGET")));
    ctx.output.info(&format!("Rust: {}", env!("SATCHEL_RUSTC_VERSION")));
}

/// Suggest similar commands based on edit distance
pub fn suggest_similar_command(input: &str) -> Option<String> {
    COMMAND_NAMES
        .iter()
        .map(|&command| (edit_distance(input, command), command))
        .filter(|&(distance, _)| distance <= 2)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, command)| command.to_string())
}

/// Calculate edit distance between two strings
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Single rolling row of the Levenshtein matrix
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[b_chars.len()]
}
