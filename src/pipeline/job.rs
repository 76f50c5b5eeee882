//! Per-file conversion jobs.
//!
//! A [`FileJob`] pairs an input file with its destination inside the output
//! directory. Destinations always keep the source's base name; directory
//! structure is never mirrored.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;

use crate::error::{PreflightError, ProcessingError};

/// One input file and where its converted text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub encoding: String,
}

impl FileJob {
    /// Validates `source` and its destination under `output_dir` and builds
    /// the job.
    ///
    /// Checks run in order: the source exists, the source is a regular file,
    /// then the destination is checked against the overwrite policy. With
    /// `overwrite` set, an existing destination must itself be a regular
    /// file; a destination that does not exist yet is always accepted.
    pub fn preflight(
        source: &Path,
        output_dir: &Path,
        encoding: &str,
        overwrite: bool,
    ) -> Result<Self, PreflightError> {
        let meta =
            fs::metadata(source).map_err(|_| PreflightError::NotFound(source.to_path_buf()))?;
        if !meta.is_file() {
            return Err(PreflightError::NotAFile(source.to_path_buf()));
        }

        let name = source
            .file_name()
            .ok_or_else(|| PreflightError::NotAFile(source.to_path_buf()))?;
        let destination = output_dir.join(name);

        if let Ok(dest_meta) = fs::metadata(&destination) {
            if !overwrite {
                return Err(PreflightError::DestinationExists(destination));
            }
            if !dest_meta.is_file() {
                return Err(PreflightError::DestinationNotAFile(destination));
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            destination,
            encoding: encoding.to_string(),
        })
    }

    /// Reads the whole source file and decodes it with the job's encoding.
    ///
    /// Malformed byte sequences are an error rather than being replaced.
    /// A byte order mark is kept as part of the text.
    pub fn read_text(&self) -> Result<String, ProcessingError> {
        let encoding = Encoding::for_label(self.encoding.trim().as_bytes())
            .ok_or_else(|| ProcessingError::UnknownEncoding(self.encoding.clone()))?;
        let bytes = fs::read(&self.source).map_err(ProcessingError::Read)?;

        encoding
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .map(|text| text.into_owned())
            .ok_or(ProcessingError::Decode {
                encoding: encoding.name(),
            })
    }

    /// Writes converted text to the destination as UTF-8.
    pub fn write_text(&self, text: &str) -> Result<(), ProcessingError> {
        fs::write(&self.destination, text).map_err(ProcessingError::Write)
    }
}
