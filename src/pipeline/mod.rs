//! File conversion pipeline.
//!
//! # Pipeline Flow
//!
//! 1. **Preflight**: the output directory is validated once, then each input
//!    and its destination are checked at their turn, before that file is
//!    read or sent
//! 2. **Read**: each source is decoded with the configured encoding
//! 3. **Convert**: the text is posted to the conversion API
//! 4. **Write**: the converted text is written as UTF-8 next to its siblings
//!    in the output directory
//!
//! Files are handled strictly one after another. The first failure stops
//! the run.
//!
//! # Example
//!
//! ```rust,ignore
//! use zhconvert::api::Converter;
//! use zhconvert::pipeline::{ConversionRunner, RunConfig};
//!
//! let config = RunConfig::new("./out")
//!     .with_converter(Converter::Simplified)
//!     .with_file("notes.txt");
//!
//! let summary = ConversionRunner::new(config)?.run().await?;
//! println!("{} file(s) written", summary.written.len());
//! ```

pub mod config;
pub mod job;
pub mod runner;

pub use config::{RunConfig, DEFAULT_ENCODING};
pub use job::FileJob;
pub use runner::{ConversionRunner, RunSummary};
