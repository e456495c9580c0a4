//! SDLDIFF command-line interface.
//!
//! This is the main entry point for the sdldiff CLI tool. It uses clap for
//! argument parsing and wires together the parser, differ and formatter.
//! All messages, including errors, are written to stdout; diagnostics from
//! `--verbose` go to stderr.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use sdldiff::{
    compute_diff, format_diff, logging, parse_file_with, DiffConfig, Document, OutputFormat,
    OutputOptions, ParseConfig,
};
use std::path::{Path, PathBuf};
use std::process;

/// SDLDIFF - Structural diff tool for SDL files
///
/// Matches the blocks of two SDL files by name and reports kind, name and
/// item differences between them.
#[derive(Parser)]
#[command(name = "sdldiff")]
#[command(version)]
#[command(about = "Structural diff tool for SDL files", long_about = None)]
#[command(author = "SDLDIFF Contributors")]
struct Cli {
    /// Source file (values marked with >>)
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Destination file (values marked with <<)
    #[arg(value_name = "DESTINATION")]
    destination: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Hide objects without differences
    #[arg(short, long)]
    compact: bool,

    /// Append a summary line with difference counts
    #[arg(long)]
    summary: bool,

    /// Treat a block left open at end of file as an error
    #[arg(long)]
    strict: bool,

    /// Also report objects that exist only in the destination
    #[arg(long)]
    both_ways: bool,

    /// Do not print lines skipped outside of blocks
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                print!("{}", err);
                process::exit(1);
            }
        },
    };

    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        println!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let parse_config = ParseConfig { strict: cli.strict };

    let src = load(&cli.source, &parse_config, cli.quiet).context("src")?;
    let dst = load(&cli.destination, &parse_config, cli.quiet).context("dst")?;

    let diff_config = DiffConfig {
        include_destination_only: cli.both_ways,
    };
    let diff = compute_diff(&src, &dst, &diff_config);

    let output_options = OutputOptions {
        compact: cli.compact,
        summary: cli.summary,
    };
    let output_format: OutputFormat = cli.format.into();
    print!("{}", format_diff(&diff, &output_format, &output_options));

    Ok(())
}

fn load(path: &Path, config: &ParseConfig, quiet: bool) -> Result<Document> {
    tracing::debug!(path = %path.display(), "parsing");
    let doc = parse_file_with(path, config)?;

    if !quiet {
        for skipped in doc.skipped() {
            println!("skip: {}", skipped.text);
        }
    }

    Ok(doc)
}
