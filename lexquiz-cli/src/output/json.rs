//! JSON quiz formatter

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use lexquiz_core::Question;

use super::{QuizFormatter, RenderOptions};

#[derive(Serialize)]
struct QuizDocument<'a> {
    instruction: &'a str,
    questions: &'a [Question],
}

/// JSON formatter: one object with the instruction and the raw question
/// records, word indexes included, for downstream renderers.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> QuizFormatter for JsonFormatter<W> {
    fn write_quiz(&mut self, questions: &[Question], options: &RenderOptions) -> Result<()> {
        let document = QuizDocument {
            instruction: &options.instruction,
            questions,
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
