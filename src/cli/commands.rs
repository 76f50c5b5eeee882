//! CLI definition for zhconvert.
//!
//! A single command: convert every input file with one converter and write
//! the results into an existing output directory.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::api::{Converter, DEFAULT_ENDPOINT};
use crate::error::ConvertError;
use crate::pipeline::{ConversionRunner, RunConfig, RunSummary, DEFAULT_ENCODING};

/// Translate between traditional and simplified Chinese, and localization.
#[derive(Parser, Debug)]
#[command(name = "zhconvert")]
#[command(about = "Translate between traditional and simplified Chinese, and localization.")]
#[command(version, disable_version_flag = true)]
#[command(
    long_about = "Translate between traditional and simplified Chinese, and localization.\n\nConversion is done by the zhconvert web API. Each input file is written to the\noutput directory under its own name, encoded as UTF-8.\n\nExample usage:\n  zhconvert -c Simplified -o ./out notes.txt chapter1.txt"
)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// The converter to use.
    #[arg(
        short = 'c',
        long,
        value_name = "CONVERTER",
        value_enum,
        default_value_t = Converter::Traditional
    )]
    pub converter: Converter,

    /// Input file encoding.
    #[arg(short = 'e', long, value_name = "ENCODING", default_value = DEFAULT_ENCODING)]
    pub encoding: String,

    /// Force overwrite output file.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Output directory.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", required = true)]
    pub output_dir: PathBuf,

    /// Base URL of the conversion API.
    #[arg(long, value_name = "URL", env = "ZHCONVERT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// At least one input file.
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Builds the run configuration described by the parsed flags.
    pub fn to_config(&self) -> RunConfig {
        RunConfig::new(&self.output_dir)
            .with_converter(self.converter)
            .with_encoding(&self.encoding)
            .with_overwrite(self.force)
            .with_endpoint(&self.endpoint)
            .with_files(&self.files)
    }
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse CLI arguments and run the conversion.
///
/// For control over logging initialization, use `parse_cli()` and
/// `run_with_cli()`.
pub async fn run() -> Result<RunSummary, ConvertError> {
    run_with_cli(parse_cli()).await
}

/// Run the conversion with already parsed arguments.
pub async fn run_with_cli(cli: Cli) -> Result<RunSummary, ConvertError> {
    ConversionRunner::new(cli.to_config())?.run().await
}
