//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{chain_cmd, generate, render_cmd, validate};
use crate::domain::Language;

#[derive(Parser)]
#[command(name = "poet")]
#[command(author, version, about = "Generates synthetic multi-module projects for build tool benchmarks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project: sources, blueprint and dependency matrix
    Generate(generate::GenerateArgs),

    /// Render the dependency matrix of a stored blueprint
    Render {
        /// Path to blueprint.json
        blueprint: PathBuf,

        /// Image path (defaults to dependencies.png beside the blueprint)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check a stored blueprint for invalid dependencies and cycles
    Validate {
        /// Path to blueprint.json
        blueprint: PathBuf,
    },

    /// Print one generated class
    Chain {
        /// Methods in the chain
        #[arg(long, short, default_value = "3")]
        methods: usize,

        /// Method the chain root calls, as `Class.method` (repeatable)
        #[arg(long = "call")]
        calls: Vec<String>,

        /// Ordinal number of the class
        #[arg(long, default_value = "0")]
        class: usize,

        /// Package of the class
        #[arg(long, default_value = "com.poet")]
        package: String,

        /// Module root used for file paths
        #[arg(long, default_value = "module0")]
        module: String,

        /// Target language (kotlin or java)
        #[arg(long, short, default_value = "kotlin")]
        language: Language,
    },
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the level
fn init_logging(verbose: bool) {
    let default = if verbose { "poet_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let output = Output::new(cli.format);

    tracing::debug!("Poet CLI starting");

    match cli.command {
        Commands::Generate(args) => generate::run(args, &output)?,

        Commands::Render { blueprint, output: image } => {
            tracing::debug!(blueprint = %blueprint.display(), "rendering blueprint");
            render_cmd::run(&output, &blueprint, image)?
        }

        Commands::Validate { blueprint } => {
            tracing::debug!(blueprint = %blueprint.display(), "validating blueprint");
            validate::run(&output, &blueprint)?
        }

        Commands::Chain {
            methods,
            calls,
            class,
            package,
            module,
            language,
        } => chain_cmd::run(
            &output,
            chain_cmd::ChainRequest {
                methods,
                calls,
                class,
                package,
                module,
                language,
            },
        )?,
    }

    Ok(())
}
