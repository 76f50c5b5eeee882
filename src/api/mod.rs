//! zhconvert web API integration.
//!
//! The remote service performs the actual script conversion. This module
//! defines the closed set of converters it accepts, the JSON wire types of
//! the `/convert` endpoint and the HTTP client that talks to it.

pub mod client;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProcessingError;

pub use client::{ZhConvertClient, DEFAULT_ENDPOINT};

/// Script or locale transformation requested from the service.
///
/// Names are sent verbatim, so `Converter::WikiSimplified` goes over the
/// wire as `"WikiSimplified"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[value(rename_all = "verbatim")]
pub enum Converter {
    Simplified,
    #[default]
    Traditional,
    China,
    Hongkong,
    Taiwan,
    Pinyin,
    Bopomofo,
    Mars,
    WikiSimplified,
    WikiTraditional,
}

impl Converter {
    /// Every converter, in the order the service documents them.
    pub const ALL: [Converter; 10] = [
        Converter::Simplified,
        Converter::Traditional,
        Converter::China,
        Converter::Hongkong,
        Converter::Taiwan,
        Converter::Pinyin,
        Converter::Bopomofo,
        Converter::Mars,
        Converter::WikiSimplified,
        Converter::WikiTraditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Converter::Simplified => "Simplified",
            Converter::Traditional => "Traditional",
            Converter::China => "China",
            Converter::Hongkong => "Hongkong",
            Converter::Taiwan => "Taiwan",
            Converter::Pinyin => "Pinyin",
            Converter::Bopomofo => "Bopomofo",
            Converter::Mars => "Mars",
            Converter::WikiSimplified => "WikiSimplified",
            Converter::WikiTraditional => "WikiTraditional",
        }
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known converter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown converter '{0}'")]
pub struct UnknownConverter(pub String);

impl FromStr for Converter {
    type Err = UnknownConverter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Converter::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownConverter(s.to_string()))
    }
}

/// Body of a `POST /convert` request.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRequest<'a> {
    pub converter: Converter,
    pub text: &'a str,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(converter: Converter, text: &'a str) -> Self {
        Self { converter, text }
    }
}

/// Response of `POST /convert`.
///
/// Only `data.text` is consumed. `msg` is kept so a response without
/// converted text can say why.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionResponse {
    #[serde(default)]
    pub data: Option<ConversionData>,
    #[serde(default)]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionData {
    #[serde(default)]
    pub text: Option<String>,
}

impl ConversionResponse {
    /// Extracts the converted text.
    pub fn into_text(self) -> Result<String, ProcessingError> {
        match self.data.and_then(|d| d.text) {
            Some(text) => Ok(text),
            None => Err(ProcessingError::MissingText {
                message: self.msg.filter(|m| !m.is_empty()),
            }),
        }
    }
}
