//! Word-index mapping
//!
//! Maps a phrase occurrence to the ordinal positions of its constituent
//! words inside the enclosing sentence, under the active word pattern. Two
//! passes: the phrase pattern is re-run over the sentence to anchor each
//! occurrence (the count of word matches to its left), then each captured
//! block is scanned for the literal constituent words and every hit
//! contributes the anchor plus its block-local word ordinal. Every occurrence
//! of the phrase in the sentence contributes indexes, bounded per occurrence
//! by the constituent-word count, so a twice-occurring phrase yields
//! duplicate word positions in left-to-right order.

use crate::error::Result;
use crate::matcher::{words_left_of, PhraseMatcher};
use crate::presets::CompiledPreset;

/// Ordinal word positions of the phrase's constituent words in `sentence`.
pub fn word_indexes(
    matcher: &PhraseMatcher,
    preset: &CompiledPreset,
    sentence: &str,
) -> Result<Vec<usize>> {
    let expected = matcher.words().len();
    let mut indexes = Vec::new();
    if expected == 0 {
        return Ok(indexes);
    }

    for captures in matcher.pattern().captures_iter(sentence) {
        let captures = captures?;
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(block) = captures.get(1) else {
            continue;
        };

        let anchor = words_left_of(preset, sentence, whole.start())?;

        let mut remaining = expected;
        for found in matcher.words_pattern().find_iter(block.as_str()) {
            let found = found?;
            if remaining == 0 {
                break;
            }
            let local = words_left_of(preset, block.as_str(), found.start())?;
            indexes.push(anchor + local);
            remaining -= 1;
        }
    }

    Ok(indexes)
}
