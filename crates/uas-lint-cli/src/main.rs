//! uas-lint CLI tool.
//!
//! Usage:
//! ```bash
//! uas-lint check [OPTIONS] [PATH]
//! uas-lint list-rules
//! uas-lint init
//! uas-lint resolve ElInput el-select --library element-plus
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Component attribute linter and enhancement resolver for Vue UI libraries
#[derive(Parser)]
#[command(name = "uas-lint")]
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
    /// Check templates for missing component attributes
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules and presets
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Show how components would be enhanced
    Resolve {
        /// Component names, in any casing (`ElInput`, `el-input`)
        #[arg(required = true)]
        components: Vec<String>,

        /// UI library (vant, element-plus, naive-ui, varlet, ant-design-vue)
        #[arg(short, long)]
        library: String,

        /// Project root holding `uas.config.*`
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Ignore the library's built-in preset
        #[arg(long)]
        no_preset: bool,

        /// Re-resolve whenever the override file changes
        #[arg(short, long)]
        watch: bool,
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
    /// Source excerpts with labels.
    Pretty,
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

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::check::run(&path, format, exclude, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
        Commands::Resolve {
            components,
            library,
            root,
            no_preset,
            watch,
        } => commands::resolve::run(&commands::resolve::Args {
            components,
            library,
            root,
            use_preset: !no_preset,
            watch,
        }),
    }
}
