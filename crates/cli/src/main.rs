mod commands;
mod logging;

use clap::{Args, Parser, Subcommand};
use commands::*;
use console::style;
use enumgen_core::{EnumGenConfig, EnumGenError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "enumgen")]
#[command(version)]
#[command(about = "Generate Java enums with an int code and a description from a `code: Name` list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./enumgen.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an enum from command line arguments
    Generate {
        /// Enum name (e.g., TaskStatus)
        #[arg(long)]
        name: String,

        /// Enum codes in format code: Name, separated by commas (e.g., "1: Waiting, 2: Processing, 3: Done")
        #[arg(long)]
        entries: String,

        /// Print the generated source instead of writing a file
        #[arg(long)]
        stdout: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Prompt for the enum name and codes, then generate
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse an entry list and show the members it would produce
    Check {
        /// Enum codes in format code: Name, separated by commas
        #[arg(long)]
        entries: String,
    },
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Directory the enum file is written to [default: gen_code]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Java package declared at the top of the file
    #[arg(long)]
    package: Option<String>,

    /// Reject duplicate codes and duplicate member names
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EnumGenError> {
    match cli.command {
        Commands::Generate {
            name,
            entries,
            stdout,
            output,
        } => {
            let config = load_config(cli.config.as_deref(), &output)?;
            generate::run(config, &name, &entries, stdout)?;
        }
        Commands::Interactive { output } => {
            let config = load_config(cli.config.as_deref(), &output)?;
            interactive::run(config)?;
        }
        Commands::Check { entries } => {
            check::run(&entries)?;
        }
    }

    Ok(())
}

/// Layer command line flags over file and environment configuration
fn load_config(path: Option<&Path>, output: &OutputArgs) -> Result<EnumGenConfig, EnumGenError> {
    let mut config = EnumGenConfig::load(path)?;

    if let Some(dir) = &output.out_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(package) = &output.package {
        config = config.with_package(package);
    }
    if output.strict {
        config = config.with_strict(true);
    }

    config.validate()?;

    for (field, source) in config.config_sources() {
        tracing::debug!(field, source = %source, "configuration value");
    }

    Ok(config)
}
