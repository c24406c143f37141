//! Material file loading
//!
//! A material is a CSV file with one phrase per row: section number, phrase
//! expression, answer, then any number of metadata columns the engine
//! ignores. Rows with an empty expression are skipped, so material authors
//! can keep placeholder rows around.

use std::path::Path;

use anyhow::{Context, Result};

use lexquiz_core::Phrase;

use crate::error::CliError;

/// Load and parse a material file.
pub fn load_material(path: &Path) -> Result<Vec<Phrase>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open material: {}", path.display()))?;

    let mut phrases = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Malformed material row {}", row + 1))?;

        let expression = record.get(1).unwrap_or("").to_string();
        if expression.is_empty() {
            continue;
        }

        let section = record
            .get(0)
            .unwrap_or("")
            .trim()
            .parse::<u32>()
            .map_err(|_| {
                CliError::MaterialError(format!(
                    "row {} has an invalid section number: {:?}",
                    row + 1,
                    record.get(0).unwrap_or("")
                ))
            })?;
        let answer = record.get(2).unwrap_or("").to_string();
        let notes = record.iter().skip(3).map(String::from).collect();

        phrases.push(Phrase {
            section,
            expression,
            answer,
            notes,
        });
    }

    Ok(phrases)
}
