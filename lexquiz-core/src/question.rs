//! The rendered question record

use serde::Serialize;

/// One fill-in-the-blank question.
///
/// `sentence` is always taken from the human-readable (preprocessed) view of
/// a source, never the lemmatized one. `word_indexes` are 0-based ordinal
/// positions of the phrase's constituent words when the sentence is tokenized
/// by the active word pattern, in left-to-right order; duplicates appear when
/// the sentence contains the phrase more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The phrase expression being tested.
    pub phrase: String,
    /// The expected answer.
    pub answer: String,
    /// The example sentence, in display form.
    pub sentence: String,
    /// Word positions to mark when rendering.
    pub word_indexes: Vec<usize>,
    /// Reference line of the source the sentence came from.
    pub reference: String,
}
