//! Refmt CLI - convert byte streams between structured-data formats.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use refmt::Registry;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "refmt")]
#[command(about = "Pluggable format transcoding", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available formats
    List,

    /// Convert data between formats
    Convert {
        /// Input format name
        #[arg(long)]
        from: String,
        /// Argument for the input format (repeatable, e.g. a regex pattern)
        #[arg(long = "from-arg", value_name = "ARG")]
        from_args: Vec<String>,
        /// Output format name
        #[arg(long)]
        to: String,
        /// Argument for the output format (repeatable)
        #[arg(long = "to-arg", value_name = "ARG")]
        to_args: Vec<String>,
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create registry with the built-in formats
    let mut registry = Registry::new();
    refmt_formats::register_all(&mut registry);

    match cli.command {
        Commands::List => cmd_list(&registry),
        Commands::Convert {
            from,
            from_args,
            to,
            to_args,
            input,
            output,
        } => cmd_convert(&registry, &from, &from_args, &to, &to_args, input, output),
    }
}

fn cmd_list(registry: &Registry) -> Result<()> {
    println!("Input formats:");
    for name in registry.input_names() {
        println!("  {}", name);
    }
    println!();
    println!("Output formats:");
    for name in registry.output_names() {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_convert(
    registry: &Registry,
    from: &str,
    from_args: &[String],
    to: &str,
    to_args: &[String],
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let reader: Box<dyn Read> = match &input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin().lock()),
    };
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    refmt::convert(registry, from, from_args, to, to_args, reader, writer)
        .with_context(|| format!("Conversion {} -> {} failed", from, to))?;

    Ok(())
}
