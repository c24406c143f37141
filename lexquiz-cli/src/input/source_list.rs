//! Source file resolution
//!
//! Sources are given as a comma-separated list of entries. An entry may be a
//! file, a directory (expanded recursively), or a glob pattern. Only `.txt`
//! files are kept, which also filters out the `.preprocessed` and
//! `.lemmatized` sibling files living next to their originals.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use glob::glob;

use crate::error::CliError;

/// Resolve a comma-separated source list to `.txt` file paths.
pub fn resolve_sources(paths: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in paths.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        collect(entry, &mut files)?;
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        bail!("No source files found under: {paths}");
    }
    Ok(files)
}

fn collect(entry: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    if entry.contains(['*', '?', '[']) {
        let paths =
            glob(entry).map_err(|_| CliError::InvalidPattern(entry.to_string()))?;
        for path in paths {
            let path = path.with_context(|| format!("Error resolving pattern: {entry}"))?;
            if path.is_file() && is_source_file(&path) {
                files.push(path);
            }
        }
        return Ok(());
    }

    let path = Path::new(entry);
    if path.is_dir() {
        collect_dir(path, files)
    } else if path.is_file() {
        if is_source_file(path) {
            files.push(path.to_path_buf());
        }
        Ok(())
    } else {
        Err(CliError::FileNotFound(entry.to_string()).into())
    }
}

fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_dir(&path, files)?;
        } else if is_source_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "Ref\nBody.").unwrap();
    }

    #[test]
    fn directories_expand_recursively() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(dir.path(), "a.txt");
        touch(&nested, "b.txt");

        let files = resolve_sources(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn derived_siblings_are_filtered_out() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "a.txt.preprocessed");
        touch(dir.path(), "a.txt.lemmatized");
        touch(dir.path(), "notes.md");

        let files = resolve_sources(&dir.path().to_string_lossy()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn comma_separated_entries_are_merged_and_deduped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "b.txt");
        let a = dir.path().join("a.txt");
        let list = format!(
            "{},{},{}",
            a.display(),
            a.display(),
            dir.path().join("b.txt").display()
        );

        let files = resolve_sources(&list).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn glob_patterns_are_supported() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.txt");
        touch(dir.path(), "b.txt");

        let pattern = dir.path().join("*.txt");
        let files = resolve_sources(&pattern.to_string_lossy()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn missing_entry_is_an_error() {
        assert!(resolve_sources("/nonexistent/path").is_err());
    }

    #[test]
    fn empty_result_is_an_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.md");
        assert!(resolve_sources(&dir.path().to_string_lossy()).is_err());
    }
}
