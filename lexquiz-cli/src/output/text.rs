//! Plain text quiz formatter

use std::io::{self, Write};

use anyhow::Result;
use console::style;

use lexquiz_core::Question;

use super::{mark_sentence, QuizFormatter, RenderOptions};

/// Terminal formatter: numbered sentences with the target words underlined,
/// followed by the answer keys.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> QuizFormatter for TextFormatter<W> {
    fn write_quiz(&mut self, questions: &[Question], options: &RenderOptions) -> Result<()> {
        writeln!(self.writer, "{}", style(&options.instruction).bold())?;

        for (number, question) in questions.iter().enumerate() {
            let underline = |word: &str| style(word).underlined().to_string();
            let sentence =
                mark_sentence(&question.sentence, &question.word_indexes, options, &underline)?;
            writeln!(
                self.writer,
                "({})\t{}\t({})",
                number + 1,
                sentence,
                question.reference
            )?;
        }

        writeln!(self.writer, "\n{}", style("Answer Keys").bold())?;
        for (number, question) in questions.iter().enumerate() {
            writeln!(self.writer, "({})\t{}", number + 1, question.answer)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            phrase: "besides".to_string(),
            answer: "on one side".to_string(),
            sentence: "Besides, I think so.".to_string(),
            word_indexes: vec![0],
            reference: "Test Book".to_string(),
        }
    }

    fn options() -> RenderOptions {
        RenderOptions {
            instruction: "Write down the meaning of underlined words/phrases.".to_string(),
            word_source: r"[\w'\-\.]+".to_string(),
            divider: " ",
        }
    }

    #[test]
    fn quiz_layout_has_questions_and_answer_keys() {
        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer)
            .write_quiz(&[question()], &options())
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Write down the meaning"));
        assert!(output.contains("(1)"));
        assert!(output.contains("I think so."));
        assert!(output.contains("(Test Book)"));
        assert!(output.contains("Answer Keys"));
        assert!(output.contains("on one side"));
    }
}
