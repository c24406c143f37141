//! Text sources
//!
//! A source is a text file whose first line is a reference (title, citation)
//! and whose remainder is the body. Next to the original file may live two
//! derived siblings: `<path>.preprocessed` (cleaned, human-readable, used for
//! display) and `<path>.lemmatized` (morphologically normalized, used for
//! matching). A missing sibling falls back to the original. Each view is read
//! and parsed at most once per process.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::error::{CoreError, Result};
use crate::presets::{count_matches, CompiledPreset};

const PREPROCESSED_SUFFIX: &str = ".preprocessed";
const LEMMATIZED_SUFFIX: &str = ".lemmatized";

/// Reference line plus body text of one source view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBody {
    /// First line of the file.
    pub reference: String,
    /// Everything after the first line break.
    pub text: String,
}

impl SourceBody {
    /// Split raw file content into reference line and body.
    fn parse(content: &str) -> Self {
        let mut lines = content.lines();
        let reference = lines.next().unwrap_or_default().to_string();
        let text = lines.collect::<Vec<_>>().join("\n");
        Self { reference, text }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoreError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    fn write(&self, path: &Path) -> Result<()> {
        let content = format!("{}\n{}", self.reference, self.text);
        fs::write(path, content).map_err(|source| CoreError::SourceWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A named source with lazily cached original, preprocessed, and lemmatized
/// views.
#[derive(Debug)]
pub struct TextSource {
    path: PathBuf,
    original: OnceCell<SourceBody>,
    preprocessed: OnceCell<Option<SourceBody>>,
    lemmatized: OnceCell<Option<SourceBody>>,
}

impl TextSource {
    /// Open a source file. Fails if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::metadata(&path).map_err(|source| CoreError::SourceRead {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            original: OnceCell::new(),
            preprocessed: OnceCell::new(),
            lemmatized: OnceCell::new(),
        })
    }

    /// Path of the original file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the preprocessed sibling.
    pub fn preprocessed_path(&self) -> PathBuf {
        sibling(&self.path, PREPROCESSED_SUFFIX)
    }

    /// Path of the lemmatized sibling.
    pub fn lemmatized_path(&self) -> PathBuf {
        sibling(&self.path, LEMMATIZED_SUFFIX)
    }

    /// The original view.
    pub fn original(&self) -> Result<&SourceBody> {
        self.original.get_or_try_init(|| SourceBody::read(&self.path))
    }

    /// The preprocessed view, falling back to the original when the sibling
    /// file does not exist.
    pub fn preprocessed(&self) -> Result<&SourceBody> {
        match self.preprocessed_raw()? {
            Some(body) => Ok(body),
            None => self.original(),
        }
    }

    /// The lemmatized view, falling back to the original when the sibling
    /// file does not exist.
    pub fn lemmatized(&self) -> Result<&SourceBody> {
        match self.lemmatized_raw()? {
            Some(body) => Ok(body),
            None => self.original(),
        }
    }

    fn preprocessed_raw(&self) -> Result<Option<&SourceBody>> {
        let cached = self
            .preprocessed
            .get_or_try_init(|| read_optional(&self.preprocessed_path()))?;
        Ok(cached.as_ref())
    }

    fn lemmatized_raw(&self) -> Result<Option<&SourceBody>> {
        let cached = self
            .lemmatized
            .get_or_try_init(|| read_optional(&self.lemmatized_path()))?;
        Ok(cached.as_ref())
    }

    /// Write the preprocessed sibling file.
    ///
    /// The cached view, if already populated, is left untouched; callers run
    /// the derivation pipeline before any matching happens.
    pub fn write_preprocessed(&self, body: &SourceBody) -> Result<()> {
        body.write(&self.preprocessed_path())
    }

    /// Write the lemmatized sibling file.
    pub fn write_lemmatized(&self, body: &SourceBody) -> Result<()> {
        body.write(&self.lemmatized_path())
    }

    /// Check that the derived views agree with the original on sentence
    /// count under the active separator pattern.
    ///
    /// A lemmatizer that merges or splits sentences silently corrupts the
    /// index mapping between views; this surfaces the mismatch instead.
    pub fn validate_alignment(&self, preset: &CompiledPreset) -> Result<()> {
        let separator = preset.sentence_separator();
        let original = count_matches(separator, &self.original()?.text)?;

        for (view, body) in [
            ("preprocessed", self.preprocessed_raw()?),
            ("lemmatized", self.lemmatized_raw()?),
        ] {
            if let Some(body) = body {
                let derived = count_matches(separator, &body.text)?;
                if derived != original {
                    return Err(CoreError::ViewMismatch {
                        path: self.path.clone(),
                        view,
                        original,
                        derived,
                    });
                }
            }
        }
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn read_optional(path: &Path) -> Result<Option<SourceBody>> {
    if path.is_file() {
        SourceBody::read(path).map(Some)
    } else {
        Ok(None)
    }
}
