//! Material records
//!
//! A phrase is one row of a material file: a numeric section, the phrase
//! expression a material author wrote, the expected answer, and any trailing
//! metadata columns the engine ignores but keeps for diagnostics.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// One vocabulary entry of a material file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// Numeric grouping, e.g. a textbook chapter.
    pub section: u32,
    /// Raw phrase expression: may contain `|`-separated alternative surface
    /// forms and at most one abbreviation marker.
    pub expression: String,
    /// The gloss shown in the answer key.
    pub answer: String,
    /// Trailing metadata columns, ignored by the engine.
    pub notes: Vec<String>,
}

impl Phrase {
    /// Convenience constructor for a bare record without metadata.
    pub fn new(section: u32, expression: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            section,
            expression: expression.into(),
            answer: answer.into(),
            notes: Vec::new(),
        }
    }
}

/// Inclusive section filter parsed from a range string.
///
/// Accepted forms are `"min-max"`, `"min-"` (no upper bound), and `"n"`
/// (a single section). A missing minimum defaults to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    min: u32,
    max: Option<u32>,
}

impl SectionRange {
    /// Range covering every section.
    pub fn all() -> Self {
        Self { min: 0, max: None }
    }

    /// True when `section` falls inside the range.
    pub fn contains(&self, section: u32) -> bool {
        section >= self.min && self.max.map_or(true, |max| section <= max)
    }
}

impl Default for SectionRange {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for SectionRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::SectionRange(s.to_string());
        let parse = |part: &str, default| -> Result<u32, CoreError> {
            let part = part.trim();
            if part.is_empty() {
                Ok(default)
            } else {
                part.parse().map_err(|_| invalid())
            }
        };

        match s.split_once('-') {
            Some((min, max)) => {
                let min = parse(min, 0)?;
                let max = if max.trim().is_empty() {
                    None
                } else {
                    Some(parse(max, 0)?)
                };
                if max.is_some_and(|max| max < min) {
                    return Err(invalid());
                }
                Ok(Self { min, max })
            }
            None => {
                if s.trim().is_empty() {
                    return Err(invalid());
                }
                let n = parse(s, 0)?;
                Ok(Self {
                    min: n,
                    max: Some(n),
                })
            }
        }
    }
}
