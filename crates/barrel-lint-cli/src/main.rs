//! barrel-lint CLI tool.
//!
//! Usage:
//! ```bash
//! barrel-lint check [--imports FILE] [--format text|json|compact]
//! barrel-lint classify --file FILE --import LITERAL
//! barrel-lint list-rules
//! barrel-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Barrel-file import linter for monorepos
#[derive(Parser)]
#[command(name = "barrel-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks over extracted imports
    Check {
        /// JSON file with the imports of each source file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        imports: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Use a preset instead of the configured rule options
        #[arg(long)]
        preset: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Classify a single import and show the verdict
    Classify {
        /// Importing file, relative to the workspace root
        #[arg(long)]
        file: String,

        /// Import literal as written in the source
        #[arg(long)]
        import: String,

        /// Target project, if already known
        #[arg(long)]
        target_project: Option<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());

    match cli.command {
        Commands::Check {
            imports,
            format,
            preset,
            exclude,
        } => commands::check::run(&imports, format, preset.as_deref(), exclude, &source),
        Commands::Classify {
            file,
            import,
            target_project,
        } => commands::classify::run(&file, &import, target_project, &source),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
