//! CLI Adapter.

mod generate;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{AppError, FileMode, TemplateKind};

#[derive(Parser)]
#[command(name = "sbgen")]
#[command(version)]
#[command(
    about = "Generate start/stop/use scripts for local database sandboxes and the DBScale proxy",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render and install every script described by sbgen.toml
    #[clap(visible_alias = "g")]
    Generate {
        /// Path to the deployment config (defaults to ./sbgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Permission bits for generated scripts (overrides the config file)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Print one rendered template to stdout
    #[clap(visible_alias = "r")]
    Render {
        /// Template name (see `sbgen templates`)
        template: String,
        /// Path to the deployment config (defaults to ./sbgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Sandbox to render per-sandbox templates for
        #[arg(short, long)]
        sandbox: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Install only the startall/stopall wrappers into a directory
    #[clap(visible_alias = "a")]
    Aggregate {
        /// Existing installation directory
        install_path: PathBuf,
        /// Permission bits for the wrappers
        #[arg(short, long, value_enum, default_value_t = ModeArg::OwnerOnly)]
        mode: ModeArg,
    },
    /// List available templates
    #[clap(visible_alias = "ls")]
    Templates,
}

/// Script permission choices exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// rwx------
    OwnerOnly,
    /// rwxr--r--
    Legacy,
}

impl From<ModeArg> for FileMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::OwnerOnly => FileMode::OwnerOnly,
            ModeArg::Legacy => FileMode::Legacy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { config, mode } => generate::run_generate(config, mode),
        Commands::Render { template, config, sandbox, format } => {
            render::run_render(&template, config, sandbox, format)
        }
        Commands::Aggregate { install_path, mode } => {
            generate::run_aggregate(&install_path, mode)
        }
        Commands::Templates => run_templates(),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_templates() -> Result<(), AppError> {
    println!("Available templates:");
    for kind in TemplateKind::ALL {
        println!("  {:<16} -> {}", kind.name(), kind.file_name());
    }
    Ok(())
}
