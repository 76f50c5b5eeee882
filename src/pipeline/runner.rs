//! Sequential conversion driver.
//!
//! The runner handles the files one at a time in command-line order. Each
//! file is checked just before it is converted, so earlier files are
//! already written when a later one fails its checks. The first error of
//! either kind ends the run.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::api::ZhConvertClient;
use crate::error::{ConvertError, PreflightError};
use crate::pipeline::config::RunConfig;
use crate::pipeline::job::FileJob;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Destination files, in the order they were written.
    pub written: Vec<PathBuf>,
}

/// Drives a conversion run against a [`ZhConvertClient`].
pub struct ConversionRunner {
    config: RunConfig,
    client: ZhConvertClient,
}

impl ConversionRunner {
    /// Creates a runner with a client for the configured endpoint.
    pub fn new(config: RunConfig) -> Result<Self, ConvertError> {
        let client = ZhConvertClient::with_base_url(&config.endpoint).map_err(ConvertError::Client)?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a runner around an existing client.
    pub fn with_client(config: RunConfig, client: ZhConvertClient) -> Self {
        Self { config, client }
    }

    /// Runs the conversion and prints per-file progress to stdout.
    pub async fn run(&self) -> Result<RunSummary, ConvertError> {
        let config = &self.config;
        if !config.output_dir.is_dir() {
            return Err(PreflightError::OutputDirInvalid(config.output_dir.clone()).into());
        }

        let start = Instant::now();
        info!(
            files = config.files.len(),
            converter = %config.converter,
            endpoint = %self.client.base_url(),
            "Starting conversion"
        );

        let mut summary = RunSummary::default();
        for source in &config.files {
            let job = self.prepare(source)?;

            print!("Processing {}... ", job.source.display());
            if let Err(e) = std::io::stdout().flush() {
                debug!(error = %e, "Failed to flush progress line");
            }

            self.process(&job).await?;

            println!("Done");
            println!("Written to {}", job.destination.display());
            summary.written.push(job.destination);
        }

        info!(
            files = summary.written.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Conversion finished"
        );
        println!(
            "Converted {} file(s) into {}",
            summary.written.len(),
            config.output_dir.display()
        );
        Ok(summary)
    }

    /// Checks one input and its destination, without touching file
    /// contents or the network.
    fn prepare(&self, source: &Path) -> Result<FileJob, PreflightError> {
        let config = &self.config;
        let job = FileJob::preflight(source, &config.output_dir, &config.encoding, config.overwrite);
        if let Err(err) = &job {
            debug!(path = %err.path().display(), error = %err, "Preflight check failed");
        }
        job
    }

    async fn process(&self, job: &FileJob) -> Result<(), ConvertError> {
        let fail = |e| ConvertError::processing(&job.source, e);

        if self.config.overwrite && job.destination.exists() {
            warn!(destination = %job.destination.display(), "Overwriting existing file");
        }

        let text = job.read_text().map_err(fail)?;
        debug!(source = %job.source.display(), bytes = text.len(), "Read input");

        let converted = self
            .client
            .convert(self.config.converter, &text)
            .await
            .map_err(fail)?;

        job.write_text(&converted).map_err(fail)?;
        debug!(
            destination = %job.destination.display(),
            bytes = converted.len(),
            "Wrote output"
        );
        Ok(())
    }
}
