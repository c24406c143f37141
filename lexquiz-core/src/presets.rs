//! Per-language pattern presets
//!
//! A preset bundles the five patterns the engine needs to carve a text into
//! sentences and words: the sentence separator, the clause pattern (used to
//! bound abbreviation gaps), the word pattern, the word-boundary pattern, and
//! the abbreviation marker. Every field can be overridden individually; unset
//! fields fall back to the preset selected by language tag, and an unknown
//! tag falls back to English.

use fancy_regex::Regex;

use crate::error::{CoreError, Result};

/// Raw pattern sources for one language.
#[derive(Debug, Clone, Copy)]
pub struct PresetDef {
    /// Marks the end of a sentence.
    pub sentence_separator: &'static str,
    /// Matches one clause inside a sentence.
    pub clause: &'static str,
    /// Matches one word token.
    pub word: &'static str,
    /// Marks where a phrase may start or stop.
    pub word_boundary: &'static str,
    /// Literal marker standing for an optional clause-length gap
    /// inside a phrase expression.
    pub abbreviation: &'static str,
}

/// English. Also the fallback for unknown language tags.
const EN: PresetDef = PresetDef {
    sentence_separator: r#"(?:[?!.]\s?)+"?(?:\s|$)(?!,)"#,
    clause: r#"[^,:"?!.]+"#,
    word: r"[\w'\-\.]+",
    word_boundary: r"\b",
    abbreviation: r"\.\.\.",
};

/// Classical Japanese. Assumes wakachigaki texts: words separated by
/// half-width spaces, sentences ending with 。 or a bracket.
const OJP: PresetDef = PresetDef {
    sentence_separator: r"(?:。|[\n\r]+|「|」|『|』)(?:\s+)?",
    clause: r"[^、。「」『』]+",
    word: r"\S+",
    word_boundary: r"\s",
    abbreviation: r"〜",
};

/// Look up the built-in preset for a language tag.
///
/// Unknown tags resolve to the English preset.
pub fn builtin(lang: &str) -> &'static PresetDef {
    match lang {
        "ojp" => &OJP,
        _ => &EN,
    }
}

/// Language tags with a dedicated built-in preset.
pub fn known_languages() -> &'static [&'static str] {
    &["en", "ojp"]
}

/// Per-field pattern overrides supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct PresetOverrides {
    /// Replacement sentence-separator pattern.
    pub sentence_separator: Option<String>,
    /// Replacement clause pattern.
    pub clause: Option<String>,
    /// Replacement word pattern.
    pub word: Option<String>,
    /// Replacement word-boundary pattern.
    pub word_boundary: Option<String>,
    /// Replacement abbreviation marker pattern.
    pub abbreviation: Option<String>,
}

impl PresetOverrides {
    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.sentence_separator.is_none()
            && self.clause.is_none()
            && self.word.is_none()
            && self.word_boundary.is_none()
            && self.abbreviation.is_none()
    }
}

/// A fully resolved, compiled preset.
///
/// The sentence separator, word, and abbreviation patterns are compiled
/// eagerly; the clause and word-boundary patterns are kept as sources because
/// they are only ever spliced into a phrase pattern, but they are validated
/// at construction so a broken override fails here and not mid-scan.
#[derive(Debug)]
pub struct CompiledPreset {
    sentence_separator: Regex,
    word: Regex,
    abbreviation: Regex,
    word_source: String,
    clause_source: String,
    word_boundary_source: String,
}

impl CompiledPreset {
    /// Resolve and compile the preset for a language tag.
    pub fn for_language(lang: &str) -> Result<Self> {
        Self::with_overrides(lang, &PresetOverrides::default())
    }

    /// Resolve the preset for a language tag, applying per-field overrides.
    pub fn with_overrides(lang: &str, overrides: &PresetOverrides) -> Result<Self> {
        let def = builtin(lang);
        let sentence_separator = overrides
            .sentence_separator
            .as_deref()
            .unwrap_or(def.sentence_separator);
        let clause = overrides.clause.as_deref().unwrap_or(def.clause);
        let word = overrides.word.as_deref().unwrap_or(def.word);
        let word_boundary = overrides
            .word_boundary
            .as_deref()
            .unwrap_or(def.word_boundary);
        let abbreviation = overrides.abbreviation.as_deref().unwrap_or(def.abbreviation);

        // Spliced fields are validated standalone, wrapped the way the
        // matcher will embed them.
        compile_field("clause", &format!("(?:{clause})"))?;
        compile_field("word boundary", &format!("(?:{word_boundary})"))?;

        Ok(Self {
            sentence_separator: compile_field("sentence separator", sentence_separator)?,
            word: compile_field("word", word)?,
            abbreviation: compile_field("abbreviation marker", abbreviation)?,
            word_source: word.to_string(),
            clause_source: clause.to_string(),
            word_boundary_source: word_boundary.to_string(),
        })
    }

    /// The compiled sentence-separator pattern.
    pub fn sentence_separator(&self) -> &Regex {
        &self.sentence_separator
    }

    /// The compiled word pattern.
    pub fn word(&self) -> &Regex {
        &self.word
    }

    /// Source of the word pattern, for callers that splice it into their own
    /// patterns (e.g. a renderer tokenizing the display sentence).
    pub fn word_source(&self) -> &str {
        &self.word_source
    }

    /// The compiled abbreviation-marker pattern.
    pub fn abbreviation(&self) -> &Regex {
        &self.abbreviation
    }

    /// Source of the clause pattern, for splicing into phrase patterns.
    pub fn clause_source(&self) -> &str {
        &self.clause_source
    }

    /// Source of the word-boundary pattern, for splicing into phrase patterns.
    pub fn word_boundary_source(&self) -> &str {
        &self.word_boundary_source
    }
}

fn compile_field(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
        field,
        pattern: pattern.to_string(),
        source: Box::new(source),
    })
}

/// Count the matches of `pattern` in `text`.
pub(crate) fn count_matches(pattern: &Regex, text: &str) -> Result<usize> {
    let mut count = 0;
    for found in pattern.find_iter(text) {
        found?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_english() {
        let def = builtin("tlh");
        assert_eq!(def.word_boundary, builtin("en").word_boundary);
    }

    #[test]
    fn ojp_has_its_own_preset() {
        assert_eq!(builtin("ojp").abbreviation, "〜");
    }

    #[test]
    fn default_presets_compile() {
        for lang in known_languages() {
            CompiledPreset::for_language(lang).unwrap();
        }
    }

    #[test]
    fn override_replaces_single_field() {
        let overrides = PresetOverrides {
            word: Some(r"\S+".to_string()),
            ..Default::default()
        };
        let preset = CompiledPreset::with_overrides("en", &overrides).unwrap();
        assert_eq!(preset.word_source(), r"\S+");
        // The other fields keep their English defaults.
        assert_eq!(preset.clause_source(), builtin("en").clause);
    }

    #[test]
    fn broken_override_is_a_construction_error() {
        let overrides = PresetOverrides {
            sentence_separator: Some("(".to_string()),
            ..Default::default()
        };
        let err = CompiledPreset::with_overrides("en", &overrides).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidPattern {
                field: "sentence separator",
                ..
            }
        ));
    }

    #[test]
    fn broken_spliced_field_is_caught_at_construction() {
        let overrides = PresetOverrides {
            clause: Some("[".to_string()),
            ..Default::default()
        };
        assert!(CompiledPreset::with_overrides("en", &overrides).is_err());
    }

    #[test]
    fn english_separator_matches_end_of_sentence() {
        let preset = CompiledPreset::for_language("en").unwrap();
        let text = "He left. She stayed.";
        assert_eq!(count_matches(preset.sentence_separator(), text).unwrap(), 2);
    }

    #[test]
    fn english_separator_skips_quote_comma() {
        // A terminator followed by a comma continues the sentence.
        let preset = CompiledPreset::for_language("en").unwrap();
        let text = r#"He said "Stop!", then left."#;
        assert_eq!(count_matches(preset.sentence_separator(), text).unwrap(), 1);
    }
}
