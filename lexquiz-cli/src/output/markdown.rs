//! Markdown quiz formatter

use std::io::{self, Write};

use anyhow::Result;

use lexquiz_core::Question;

use super::{mark_sentence, QuizFormatter, RenderOptions};

/// Markdown formatter: an ordered question list with the target words in
/// bold, a rule, then the answer keys.
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl MarkdownFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> QuizFormatter for MarkdownFormatter<W> {
    fn write_quiz(&mut self, questions: &[Question], options: &RenderOptions) -> Result<()> {
        writeln!(self.writer, "# {}\n", options.instruction)?;

        for (number, question) in questions.iter().enumerate() {
            let bold = |word: &str| format!("**{word}**");
            let sentence =
                mark_sentence(&question.sentence, &question.word_indexes, options, &bold)?;
            writeln!(
                self.writer,
                "{}. {} *({})*",
                number + 1,
                sentence,
                question.reference
            )?;
        }

        writeln!(self.writer, "\n---\n\n## Answer Keys\n")?;
        for (number, question) in questions.iter().enumerate() {
            writeln!(self.writer, "{}. {}", number + 1, question.answer)?;
        }
        writeln!(self.writer, "\n*Total questions: {}*", questions.len())?;

        self.writer.flush()?;
        Ok(())
    }
}
