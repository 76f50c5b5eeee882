//! Configuration for a conversion run.

use std::path::PathBuf;

use crate::api::{Converter, DEFAULT_ENDPOINT};

/// Default label of the input text encoding.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Everything a conversion run needs to know.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Converter sent to the service for every file.
    pub converter: Converter,
    /// Encoding label used to decode the input files.
    pub encoding: String,
    /// Whether existing destination files may be replaced.
    pub overwrite: bool,
    /// Directory the converted files are written to.
    pub output_dir: PathBuf,
    /// Input files, processed in order.
    pub files: Vec<PathBuf>,
    /// Base URL of the conversion API.
    pub endpoint: String,
}

impl RunConfig {
    /// Creates a run configuration with defaults for everything but the
    /// output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            converter: Converter::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            overwrite: false,
            output_dir: output_dir.into(),
            files: Vec::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Sets the converter.
    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    /// Sets the input encoding label.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Allows replacing existing destination files.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Adds an input file.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Replaces the input file list.
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the API base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
