//! Sentence location and reconstruction
//!
//! Sentences are delimited by the preset's separator pattern. An occurrence's
//! sentence is reconstructed from its immediate neighborhood instead of
//! re-splitting the whole text: the text left of the match back to the
//! nearest separator, the match itself, and the text right of the match up to
//! the next separator. Fetching a sentence by ordinal index splits on the
//! separator, which consumes the terminal punctuation; a short lookahead
//! window recovers it so the displayed sentence keeps its closing mark.

use fancy_regex::Regex;

use crate::error::Result;
use crate::matcher::Occurrence;
use crate::presets::{count_matches, CompiledPreset};

/// Number of ordinal sentences strictly left of `offset`.
pub fn sentence_index_at(preset: &CompiledPreset, text: &str, offset: usize) -> Result<usize> {
    count_matches(preset.sentence_separator(), &text[..offset])
}

/// Rebuild the full sentence containing `occurrence`.
pub fn reconstruct(preset: &CompiledPreset, text: &str, occurrence: &Occurrence) -> Result<String> {
    let separator = preset.sentence_separator();

    let left = &text[..occurrence.start];
    let left_context = match last_match_end(separator, left)? {
        Some(end) => &left[end..],
        None => left,
    };

    let right = &text[occurrence.end..];
    let right_context = match first_match_start(separator, right)? {
        Some(start) => &right[..start],
        None => right,
    };

    Ok(format!(
        "{left_context}{}{right_context}",
        occurrence.matched
    ))
}

/// The `index`-th separator-delimited sentence of `text`, or `None` when the
/// text has no such sentence.
///
/// Splitting consumes the separator, so the segment loses its terminal
/// punctuation; it is recovered by re-matching the separator against a window
/// of at most five characters after the segment and appending the trimmed
/// mark. An empty segment (source exhausted, or consecutive separators)
/// yields `None`.
pub fn sentence_at(preset: &CompiledPreset, text: &str, index: usize) -> Result<Option<String>> {
    let separator = preset.sentence_separator();

    let mut segment_start = 0;
    let mut segment_index = 0;
    let mut segment: Option<(usize, usize)> = None;
    for found in separator.find_iter(text) {
        let found = found?;
        if segment_index == index {
            segment = Some((segment_start, found.start()));
            break;
        }
        segment_start = found.end();
        segment_index += 1;
    }
    // The trailing segment after the last separator.
    let (start, end) = match segment {
        Some(span) => span,
        None if segment_index == index => (segment_start, text.len()),
        None => return Ok(None),
    };

    let body = &text[start..end];
    if body.is_empty() {
        return Ok(None);
    }

    let window: String = text[end..].chars().take(5).collect();
    let window = window.trim();
    if window.is_empty() {
        return Ok(Some(body.to_string()));
    }
    match separator.find(window)? {
        Some(mark) => Ok(Some(format!("{body}{}", mark.as_str().trim()))),
        None => Ok(Some(body.to_string())),
    }
}

fn last_match_end(pattern: &Regex, text: &str) -> Result<Option<usize>> {
    let mut last = None;
    for found in pattern.find_iter(text) {
        last = Some(found?.end());
    }
    Ok(last)
}

fn first_match_start(pattern: &Regex, text: &str) -> Result<Option<usize>> {
    Ok(pattern.find(text)?.map(|m| m.start()))
}
