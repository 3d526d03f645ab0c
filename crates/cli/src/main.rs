//! Allocator comparison CLI
//!
//! Scores the statistics written by the allocator benchmark and reports the
//! best performing strategy.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use alloc_compare_cli::commands::{chart, export, export::ExportKind, rank, report, CommandContext};
use alloc_compare_cli::output::{colors, OutputFormat};
use alloc_compare_common::{init_tracing, AppConfig};

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "alloc-compare")]
#[command(author, version, about = "Compare memory allocation strategies")]
#[command(long_about = "Reads the statistics written by the allocator benchmark, scores every \
    strategy on fragmentation and allocation success rate, and reports the best performer.")]
#[command(propagate_version = true)]
struct Cli {
    /// Statistics file (overrides config)
    #[arg(short, long, global = true, env = "ALLOC_COMPARE_INPUT")]
    input: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// Configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the comparison table and the best performer (default)
    Report,

    /// List strategies ordered by score
    #[command(alias = "r")]
    Rank,

    /// Write the report to a file
    Export {
        /// Artifact to write
        #[arg(value_enum, default_value = "json")]
        kind: ExportKind,

        /// Output path (defaults to the configured output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render the comparison dashboard as PNG or SVG
    Chart {
        /// Output path; `.svg` selects SVG
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "alloc-compare", &mut std::io::stdout());
}

fn run(cli: Cli) -> Result<()> {
    // Handle completions command early (doesn't need config)
    if let Some(Commands::Completions { shell }) = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if cli.no_color || !config.output.colored || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.telemetry.log_level.as_str()
    };
    init_tracing(log_level, config.telemetry.json_logging)?;

    let ctx = CommandContext::new(config, cli.input, cli.format.map(Into::into))?;

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => report::show(&ctx),
        Commands::Rank => rank::show(&ctx),
        Commands::Export { kind, output } => export::export(&ctx, kind, output),
        Commands::Chart { output } => chart::render(&ctx, output),
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => {
                print!("{}", ctx.config.to_toml()?);
                Ok(())
            }
        },
        Commands::Completions { .. } => {
            // Already handled above
            Ok(())
        }
    }
}

/// One-line rendering of an error with every cause in its chain
fn error_message(error: &anyhow::Error) -> String {
    format!("{error:#}")
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        eprintln!("{} {}", colors::error("Error:").bold(), error_message(&e));
        if verbose {
            eprintln!("\n{}", colors::dim("Caused by:"));
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }
}
