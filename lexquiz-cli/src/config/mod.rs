//! External language configuration
//!
//! A language config is a TOML file carrying the five pattern fields, so a
//! material author can supply rules for a language without a built-in preset:
//!
//! ```toml
//! [metadata]
//! code = "grc"
//! name = "Ancient Greek"
//!
//! [patterns]
//! sentence_separator = '(?:[;·.]\s?)+(?:\s|$)'
//! word = '''[\w']+'''
//! ```
//!
//! Omitted pattern fields keep the preset defaults for the resolved language.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use lexquiz_core::PresetOverrides;

use crate::error::CliError;

/// Parsed language configuration file
#[derive(Debug, Deserialize)]
pub struct LanguageConfig {
    /// Descriptive metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Pattern overrides
    #[serde(default)]
    pub patterns: Patterns,
}

/// Language identification block
#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    /// Language tag the config applies to
    pub code: Option<String>,
    /// Human-readable language name
    pub name: Option<String>,
}

/// The five overridable pattern fields
#[derive(Debug, Default, Deserialize)]
pub struct Patterns {
    /// Sentence separator pattern
    pub sentence_separator: Option<String>,
    /// Clause pattern
    pub clause: Option<String>,
    /// Word pattern
    pub word: Option<String>,
    /// Word-boundary pattern
    pub word_boundary: Option<String>,
    /// Abbreviation marker pattern
    pub abbreviation_marker: Option<String>,
}

impl LanguageConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language config: {}", path.display()))?;
        toml::from_str(&content).map_err(|err| {
            CliError::ConfigError(format!("{}: {err}", path.display())).into()
        })
    }

    /// Language tag declared by the config, if any.
    pub fn language_code(&self) -> Option<&str> {
        self.metadata.code.as_deref()
    }

    /// Convert the pattern block into engine overrides.
    pub fn into_overrides(self) -> PresetOverrides {
        PresetOverrides {
            sentence_separator: self.patterns.sentence_separator,
            clause: self.patterns.clause,
            word: self.patterns.word,
            word_boundary: self.patterns.word_boundary,
            abbreviation: self.patterns.abbreviation_marker,
        }
    }
}
