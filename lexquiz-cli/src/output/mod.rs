//! Output formatting module

use std::collections::VecDeque;

use anyhow::Result;
use fancy_regex::Regex;

use lexquiz_core::Question;

/// Trait for quiz formatters
pub trait QuizFormatter {
    /// Format and write a complete quiz.
    fn write_quiz(&mut self, questions: &[Question], options: &RenderOptions) -> Result<()>;
}

/// Rendering parameters shared by the formatters
#[derive(Debug)]
pub struct RenderOptions {
    /// Instruction line shown above the questions.
    pub instruction: String,
    /// Source of the active word pattern, used to tokenize sentences.
    pub word_source: String,
    /// Divider re-inserted between words: a space, or nothing for
    /// divider-less scripts.
    pub divider: &'static str,
}

/// Names accepted by `--format`, in display order
pub const FORMAT_NAMES: &[&str] = &["text", "json", "markdown"];

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Numbered sentences with the target words underlined, then answer keys
    Text,
    /// JSON object with the instruction and the question records
    Json,
    /// Markdown document with the target words emphasized
    Markdown,
}

/// Rebuild `sentence` word by word, passing the tokens at `word_indexes`
/// through `mark`.
///
/// The sentence is tokenized by the word pattern; inter-word whitespace is
/// replaced by the configured divider while punctuation between tokens is
/// preserved verbatim. When two marked indexes are adjacent the divider
/// between them is marked too, so a multi-word phrase reads as one marked
/// span.
pub(crate) fn mark_sentence(
    sentence: &str,
    word_indexes: &[usize],
    options: &RenderOptions,
    mark: &dyn Fn(&str) -> String,
) -> Result<String> {
    let block = Regex::new(&format!(r"({})(\s+)?", options.word_source))?;

    let mut queue: VecDeque<usize> = word_indexes.iter().copied().collect();
    let mut parts = String::new();
    let mut current = 0usize;
    let mut prev_end = 0usize;

    for captures in block.captures_iter(sentence) {
        let captures = captures?;
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(word) = captures.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let divider = if captures.get(2).is_some() {
            options.divider
        } else {
            ""
        };
        let punctuation = &sentence[prev_end..whole.start()];

        if queue.front() == Some(&current) {
            queue.pop_front();
            // An adjacent follow-up index extends the marked span across
            // the divider.
            let successive = queue.front() == Some(&(current + 1));
            if successive {
                parts.push_str(punctuation);
                parts.push_str(&mark(&format!("{word}{divider}")));
            } else {
                parts.push_str(punctuation);
                parts.push_str(&mark(word));
                parts.push_str(divider);
            }
        } else {
            parts.push_str(punctuation);
            parts.push_str(word);
            parts.push_str(divider);
        }

        current += 1;
        prev_end = whole.end();
    }

    parts.push_str(&sentence[prev_end..]);
    Ok(parts)
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RenderOptions {
        RenderOptions {
            instruction: "Translate.".to_string(),
            word_source: r"[\w'\-\.]+".to_string(),
            divider: " ",
        }
    }

    fn bracket(word: &str) -> String {
        format!("[{word}]")
    }

    #[test]
    fn single_word_is_marked() {
        let rendered =
            mark_sentence("Besides, I think so.", &[0], &options(), &bracket).unwrap();
        assert_eq!(rendered, "[Besides], I think so.");
    }

    #[test]
    fn adjacent_words_share_one_mark() {
        let rendered =
            mark_sentence("They go regardless of rain.", &[2, 3], &options(), &bracket).unwrap();
        assert_eq!(rendered, "They go [regardless ][of] rain.");
    }

    #[test]
    fn split_phrase_marks_each_part() {
        let rendered =
            mark_sentence("She talked him into it.", &[1, 3], &options(), &bracket).unwrap();
        assert_eq!(rendered, "She [talked] him [into] it.");
    }

    #[test]
    fn skip_spaces_drops_dividers() {
        let opts = RenderOptions {
            instruction: String::new(),
            word_source: r"\S+".to_string(),
            divider: "",
        };
        let rendered = mark_sentence("いと をかし", &[1], &opts, &bracket).unwrap();
        assert_eq!(rendered, "いと[をかし]");
    }
}
