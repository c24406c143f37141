//! Make command implementation
//!
//! Derives the `.preprocessed` and `.lemmatized` sibling files the matcher
//! works from. Preprocessing uses the built-in per-language transforms;
//! lemmatizing pipes the preprocessed text through an external tagger
//! command. One broken source never aborts the batch.

use anyhow::Result;
use clap::Args;

use lexquiz_core::{SourceBody, TextSource};

use crate::commands::init_logging;
use crate::input::resolve_sources;
use crate::pipeline::{preprocessor_for, ExternalLemmatizer};
use crate::progress::ProgressReporter;

/// Arguments for the make command
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Comma-separated source files, directories, or glob patterns
    #[arg(short = 's', long, value_name = "PATHS", required = true)]
    pub src: String,

    /// Language tag selecting the built-in preprocessor
    #[arg(short = 'l', long, default_value = "en", value_name = "TAG")]
    pub language: String,

    /// External lemmatizer command reading stdin and writing stdout
    #[arg(long, value_name = "CMD")]
    pub lemmatizer_cmd: Option<String>,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MakeArgs {
    /// Execute the make command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let preprocessor = preprocessor_for(&self.language);
        if preprocessor.is_none() {
            log::warn!(
                "No built-in preprocessor for `{}`; originals are used as-is",
                self.language
            );
        }
        let lemmatizer = self
            .lemmatizer_cmd
            .as_deref()
            .map(ExternalLemmatizer::new)
            .transpose()?;

        let files = resolve_sources(&self.src)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(files.len() as u64, "sources");

        let mut failed = 0usize;
        for path in &files {
            if let Err(err) = derive_views(path, preprocessor, lemmatizer.as_ref()) {
                log::error!("{}: {err:#}", path.display());
                failed += 1;
            }
            progress.item_completed(&path.display().to_string());
        }
        progress.finish();

        if failed > 0 {
            log::warn!("{failed} of {} sources failed", files.len());
        }
        Ok(())
    }
}

fn derive_views(
    path: &std::path::Path,
    preprocessor: Option<fn(&str) -> String>,
    lemmatizer: Option<&ExternalLemmatizer>,
) -> Result<()> {
    let source = TextSource::open(path)?;
    let original = source.original()?;

    if let Some(preprocess) = preprocessor {
        log::info!("Preprocessing {}", path.display());
        source.write_preprocessed(&SourceBody {
            reference: original.reference.clone(),
            text: preprocess(&original.text),
        })?;
    }

    if let Some(lemmatizer) = lemmatizer {
        log::info!(
            "Lemmatizing {} with `{}`",
            path.display(),
            lemmatizer.describe()
        );
        // The lemmatizer consumes the freshly derived display text, so the
        // two views stay sentence-aligned.
        let input = TextSource::open(path)?;
        let preprocessed = input.preprocessed()?;
        source.write_lemmatized(&SourceBody {
            reference: preprocessed.reference.clone(),
            text: lemmatizer.lemmatize(&preprocessed.text)?,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn preprocessing_writes_the_sibling_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "A Book\nit’s split\nacross lines").unwrap();

        derive_views(&path, preprocessor_for("en"), None).unwrap();

        let derived = fs::read_to_string(dir.path().join("book.txt.preprocessed")).unwrap();
        assert_eq!(derived, "A Book\nit's split across lines");
    }

    #[cfg(unix)]
    #[test]
    fn lemmatizing_pipes_the_preprocessed_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "A Book\nIt’s fine").unwrap();

        let lemmatizer = ExternalLemmatizer::new("cat").unwrap();
        derive_views(&path, preprocessor_for("en"), Some(&lemmatizer)).unwrap();

        let derived = fs::read_to_string(dir.path().join("book.txt.lemmatized")).unwrap();
        // `cat` is an identity lemmatizer: the lemmatized view mirrors the
        // preprocessed one.
        assert_eq!(derived, "A Book\nIt's fine");
    }

    #[test]
    fn missing_source_is_an_error() {
        let err = derive_views(
            std::path::Path::new("/nonexistent/book.txt"),
            preprocessor_for("en"),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/book.txt"));
    }
}
