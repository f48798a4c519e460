//! Language variants stored alongside every administrative name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two stored names to read or search.
///
/// Parsing is strict: unknown values are rejected rather than falling back
/// to a default.
///
/// # Examples
///
/// ```
/// use geodata_core::Language;
///
/// let language: Language = "English".parse().expect("known language");
/// assert_eq!(language, Language::English);
/// assert!("englsh".parse::<Language>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Thai script.
    #[default]
    Thai,
    /// English transliteration.
    English,
}

impl Language {
    /// Every supported language, Thai first.
    pub const ALL: [Self; 2] = [Self::Thai, Self::English];

    /// Canonical lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thai => "thai",
            Self::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a supported [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language {input:?}; expected `thai` or `english`")]
pub struct LanguageParseError {
    input: String,
}

impl LanguageParseError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thai" | "th" => Ok(Self::Thai),
            "english" | "en" => Ok(Self::English),
            _ => Err(LanguageParseError {
                input: s.to_owned(),
            }),
        }
    }
}
