//! zhconvert: convert text files between Chinese script variants.
//!
//! Conversion itself is done by the zhconvert web API; this library handles
//! argument parsing, the overwrite policy for output files and the HTTP
//! round trip.

pub mod api;
pub mod cli;
pub mod error;
pub mod pipeline;

pub use error::{ConvertError, PreflightError, ProcessingError};
