//! Validate command implementation
//!
//! Checks the inputs of a quiz run before it happens: the pattern set
//! compiles, the material parses, and every source's derived views are
//! sentence-aligned with their original. Misaligned views would not fail at
//! generation time; they would silently mis-index, so they are surfaced
//! here.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use lexquiz_core::{CompiledPreset, TextSource};

use crate::commands::{init_logging, PatternArgs};
use crate::input::{load_material, resolve_sources};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Material file to check
    #[arg(short = 'm', long, value_name = "FILE")]
    pub material: Option<PathBuf>,

    /// Comma-separated source files, directories, or glob patterns to check
    #[arg(short = 's', long, value_name = "PATHS")]
    pub sources: Option<String>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let mut failures = 0usize;

        let preset = match self.resolve_preset() {
            Ok(preset) => {
                println!("✓ Pattern set compiles");
                Some(preset)
            }
            Err(err) => {
                println!("✗ Pattern set is invalid: {err:#}");
                failures += 1;
                None
            }
        };

        if let Some(material) = &self.material {
            match load_material(material) {
                Ok(phrases) => {
                    println!("✓ Material parses: {} phrases", phrases.len());
                }
                Err(err) => {
                    println!("✗ Material is invalid: {err:#}");
                    failures += 1;
                }
            }
        }

        if let (Some(sources), Some(preset)) = (&self.sources, &preset) {
            for path in resolve_sources(sources)? {
                match check_source(&path, preset) {
                    Ok(()) => println!("✓ {} views are aligned", path.display()),
                    Err(err) => {
                        println!("✗ {err:#}");
                        failures += 1;
                    }
                }
            }
        }

        if failures > 0 {
            bail!("Validation failed with {failures} problem(s)");
        }
        Ok(())
    }

    fn resolve_preset(&self) -> Result<CompiledPreset> {
        let (language, overrides) = self.patterns.resolve()?;
        Ok(CompiledPreset::with_overrides(&language, &overrides)?)
    }
}

fn check_source(path: &std::path::Path, preset: &CompiledPreset) -> Result<()> {
    let source = TextSource::open(path)?;
    source.validate_alignment(preset)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(material: Option<PathBuf>, sources: Option<String>) -> ValidateArgs {
        ValidateArgs {
            material,
            sources,
            patterns: PatternArgs {
                language: "en".to_string(),
                language_config: None,
                sentence_separator: None,
                clause_pattern: None,
                word_pattern: None,
                word_boundary: None,
                abbreviation_marker: None,
            },
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn aligned_inputs_validate() {
        let dir = TempDir::new().unwrap();
        let material = dir.path().join("material.csv");
        fs::write(&material, "1,besides,on one side\n").unwrap();
        let source = dir.path().join("book.txt");
        fs::write(&source, "Ref\nOne. Two.").unwrap();
        fs::write(
            dir.path().join("book.txt.lemmatized"),
            "Ref\none . two .",
        )
        .unwrap();

        args(
            Some(material),
            Some(source.to_string_lossy().into_owned()),
        )
        .execute()
        .unwrap();
    }

    #[test]
    fn misaligned_views_fail_validation() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("book.txt");
        fs::write(&source, "Ref\nOne. Two.").unwrap();
        fs::write(
            dir.path().join("book.txt.lemmatized"),
            "Ref\none two .",
        )
        .unwrap();

        let err = args(None, Some(source.to_string_lossy().into_owned()))
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn broken_override_fails_validation() {
        let mut args = args(None, None);
        args.patterns.word_pattern = Some("(".to_string());
        assert!(args.execute().is_err());
    }
}
