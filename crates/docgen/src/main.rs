//! docgen CLI - builds themed HTML pages and an index from a markup tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docgen_render::RendererKind;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "docgen")]
#[command(about = "Build HTML documentation pages and an index from markup files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to docgen.toml config file
    #[arg(short, long, default_value = "docgen.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default docgen.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert every markup file and write the index
    Build {
        /// Source tree root (defaults to config or ".")
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output directory relative to the root (defaults to config or "html")
        #[arg(short, long)]
        output: Option<String>,

        /// Renderer to use (defaults to config or "docutils")
        #[arg(long, value_enum)]
        renderer: Option<RendererKind>,

        /// Markup file extension (defaults to the renderer's)
        #[arg(long)]
        extension: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build {
            root,
            output,
            renderer,
            extension,
        } => {
            let overrides = commands::build::Overrides {
                root,
                output,
                renderer,
                extension,
            };
            commands::build::run(&cli.config, overrides)?;
        }
    }

    Ok(())
}
