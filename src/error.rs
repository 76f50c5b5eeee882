//! Error types for zhconvert operations.
//!
//! Errors are split by the phase in which they occur:
//! - Preflight checks on the output directory, sources and destinations
//! - Processing of a single file (decode, HTTP round trip, write)
//!
//! Each phase maps to its own process exit status.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a failed preflight check.
pub const EXIT_VALIDATION: u8 = 2;

/// Exit status for a failure while reading, converting or writing a file.
pub const EXIT_PROCESSING: u8 = 4;

/// Errors detected before any file is read or any request is sent.
#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("output directory does not exist or not a directory: {}", .0.display())]
    OutputDirInvalid(PathBuf),

    #[error("{}: No such file", .0.display())]
    NotFound(PathBuf),

    #[error("{}: Not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("cannot overwrite {}: not a file", .0.display())]
    DestinationNotAFile(PathBuf),

    #[error("cannot output to {}: already exists", .0.display())]
    DestinationExists(PathBuf),
}

impl PreflightError {
    /// Path the check failed on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::OutputDirInvalid(p)
            | Self::NotFound(p)
            | Self::NotAFile(p)
            | Self::DestinationNotAFile(p)
            | Self::DestinationExists(p) => p,
        }
    }
}

/// Errors raised while processing a single file.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("input is not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({code}): {body}")]
    Status { code: u16, body: String },

    #[error("failed to parse API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("API response has no converted text{}", service_message(.message))]
    MissingText { message: Option<String> },

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

fn service_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Top-level error for a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Preflight(#[from] PreflightError),

    #[error("error when processing '{}': {source}", .path.display())]
    Processing {
        path: PathBuf,
        #[source]
        source: ProcessingError,
    },

    #[error("failed to initialize HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ConvertError {
    /// Wraps a processing failure with the source file it happened on.
    pub fn processing(path: impl Into<PathBuf>, source: ProcessingError) -> Self {
        Self::Processing {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Preflight(_) => EXIT_VALIDATION,
            Self::Processing { .. } | Self::Client(_) => EXIT_PROCESSING,
        }
    }
}
