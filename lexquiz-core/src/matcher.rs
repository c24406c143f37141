//! Phrase matching
//!
//! A phrase expression is compiled into one search pattern: every occurrence
//! of the abbreviation marker becomes an optional clause-length gap, and the
//! whole expression is wrapped in the word-boundary pattern with a single
//! capture group, so `|`-alternation inside the expression works natively.
//! The compiled pattern is scanned case-insensitively across the entire text;
//! matches may span line breaks.

use fancy_regex::{Captures, Regex};

use crate::error::{CoreError, Result};
use crate::presets::{count_matches, CompiledPreset};

/// One located instance of a phrase inside a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The full matched span, including boundary characters.
    pub matched: String,
    /// The first captured group: the phrase occurrence with the gap, if any,
    /// resolved to whatever text filled it.
    pub block: String,
    /// Byte offset of the match start in the scanned text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
}

/// A phrase expression compiled against a preset.
///
/// Compilation is a pure function of `(expression, preset)`; instances are
/// reused for every source a phrase is tried against.
#[derive(Debug)]
pub struct PhraseMatcher {
    pattern: Regex,
    words: Vec<String>,
    words_pattern: Regex,
}

impl PhraseMatcher {
    /// Compile a phrase expression.
    pub fn compile(expression: &str, preset: &CompiledPreset) -> Result<Self> {
        // The marker's preceding space becomes optional and the gap itself is
        // an optional clause span, so "talk ... into" matches however much
        // of one clause sits between the two words.
        let gap = format!("?(?:{})?", preset.clause_source());
        let rewritten = preset
            .abbreviation()
            .replace_all(expression, |_: &Captures| gap.clone());

        let boundary = preset.word_boundary_source();
        let source = format!("(?i){boundary}({rewritten}){boundary}");
        let pattern = Regex::new(&source).map_err(|err| CoreError::InvalidPattern {
            field: "phrase",
            pattern: source.clone(),
            source: Box::new(err),
        })?;

        let words = constituent_words(expression, preset)?;
        let escaped: Vec<String> = words
            .iter()
            .map(|word| fancy_regex::escape(word).into_owned())
            .collect();
        let words_source = format!("(?i)(?:{})", escaped.join("|"));
        let words_pattern = Regex::new(&words_source).map_err(|err| CoreError::InvalidPattern {
            field: "phrase",
            pattern: words_source.clone(),
            source: Box::new(err),
        })?;

        Ok(Self {
            pattern,
            words,
            words_pattern,
        })
    }

    /// Every place the phrase occurs in `text`.
    ///
    /// An empty result means the phrase is absent from this text; it is not
    /// an error.
    pub fn locate(&self, text: &str) -> Result<Vec<Occurrence>> {
        let mut occurrences = Vec::new();
        for captures in self.pattern.captures_iter(text) {
            let captures = captures?;
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let block = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
            occurrences.push(Occurrence {
                matched: whole.as_str().to_string(),
                block: block.to_string(),
                start: whole.start(),
                end: whole.end(),
            });
        }
        Ok(occurrences)
    }

    /// The literal constituent words of the expression, across all
    /// alternatives, with the abbreviation marker stripped.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn words_pattern(&self) -> &Regex {
        &self.words_pattern
    }
}

fn constituent_words(expression: &str, preset: &CompiledPreset) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for alternative in expression.split('|') {
        let stripped = preset.abbreviation().replace_all(alternative, "");
        for found in preset.word().find_iter(&stripped) {
            words.push(found?.as_str().to_string());
        }
    }
    Ok(words)
}

/// Count the word-pattern matches strictly left of `offset` in `text`.
pub(crate) fn words_left_of(preset: &CompiledPreset, text: &str, offset: usize) -> Result<usize> {
    count_matches(preset.word(), &text[..offset])
}
