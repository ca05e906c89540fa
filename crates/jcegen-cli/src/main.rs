//! jcegen CLI - JCE struct code generator
//!
//! Commands:
//! - `jcegen generate` - Generate `JceStruct` sources from schema files
//! - `jcegen check` - Validate schema files without writing anything

use clap::{Parser, Subcommand};

mod check;
mod config;
mod discover;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "jcegen")]
#[command(author, version, about = "Code generator for JCE structs", long_about = None)]
struct Cli {
    /// Path to jcegen.toml (default: ./jcegen.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust sources from schema files
    Generate {
        /// Schema files or directories containing *.toml / *.json schemas
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<String>,

        /// Output directory for generated code
        #[arg(short, long)]
        output: Option<String>,

        /// Parse every generated file back as Rust before writing it
        #[arg(short, long)]
        verify: bool,
    },

    /// Validate schema files
    Check {
        /// Schema files or directories containing *.toml / *.json schemas
        #[arg(short, long = "input", required = true, num_args = 1..)]
        inputs: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::Config::load(cli.config.as_deref())?;
    logging::init(&config.log_level);

    match cli.command {
        Commands::Generate {
            inputs,
            output,
            verify,
        } => {
            generate::run(&config, &inputs, output, verify)?;
        }
        Commands::Check { inputs } => {
            check::run(&inputs)?;
        }
    }

    Ok(())
}
