//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use lexquiz_core::{known_languages, PresetOverrides};

use crate::config::LanguageConfig;
use crate::output;

pub mod coverage;
pub mod generate;
pub mod make;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a quiz from a material and sources
    Generate(generate::GenerateArgs),

    /// Measure how much of a material the sources can exemplify
    Coverage(coverage::CoverageArgs),

    /// Derive preprocessed and lemmatized views of source files
    Make(make::MakeArgs),

    /// Validate a language config, material, and source alignment
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in language presets
    Languages,

    /// List available output formats
    Formats,
}

/// Execute a `list` subcommand.
pub fn list(subcommand: ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            println!("Built-in language presets:");
            for lang in known_languages() {
                println!("  {lang}");
            }
            println!("\nUnknown tags fall back to `en`.");
        }
        ListCommands::Formats => {
            println!("Available output formats:");
            for format in output::FORMAT_NAMES {
                println!("  {format}");
            }
        }
    }
    Ok(())
}

/// Pattern selection shared by the matching commands
#[derive(Debug, Args)]
pub struct PatternArgs {
    /// Language tag selecting the pattern preset
    #[arg(short = 'l', long, default_value = "en", value_name = "TAG")]
    pub language: String,

    /// External language configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Override the sentence-separator pattern
    #[arg(long, value_name = "REGEX")]
    pub sentence_separator: Option<String>,

    /// Override the clause pattern
    #[arg(long, value_name = "REGEX")]
    pub clause_pattern: Option<String>,

    /// Override the word pattern
    #[arg(long, value_name = "REGEX")]
    pub word_pattern: Option<String>,

    /// Override the word-boundary pattern
    #[arg(long, value_name = "REGEX")]
    pub word_boundary: Option<String>,

    /// Override the abbreviation-marker pattern
    #[arg(long, value_name = "REGEX")]
    pub abbreviation_marker: Option<String>,
}

impl PatternArgs {
    /// Resolve the language tag and the merged overrides: the language
    /// config file first, then individual flags on top.
    pub fn resolve(&self) -> Result<(String, PresetOverrides)> {
        let mut language = self.language.clone();
        let mut overrides = PresetOverrides::default();

        if let Some(path) = &self.language_config {
            let config = LanguageConfig::load(path)?;
            if let Some(code) = config.language_code() {
                language = code.to_string();
            }
            overrides = config.into_overrides();
        }

        let flags = [
            (&self.sentence_separator, &mut overrides.sentence_separator),
            (&self.clause_pattern, &mut overrides.clause),
            (&self.word_pattern, &mut overrides.word),
            (&self.word_boundary, &mut overrides.word_boundary),
            (&self.abbreviation_marker, &mut overrides.abbreviation),
        ];
        for (flag, slot) in flags {
            if flag.is_some() {
                slot.clone_from(flag);
            }
        }

        Ok((language, overrides))
    }
}

/// Initialize logging from the shared verbosity flags.
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
