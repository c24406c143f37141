//! External lemmatizer invocation
//!
//! Morphological normalization is delegated to a user-supplied tagger
//! command (MeCab, a CoreNLP wrapper script, or anything else that reads
//! text on stdin and writes the normalized text to stdout). The command is
//! run once per source file.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// A lemmatizer backed by an external filter command.
#[derive(Debug, Clone)]
pub struct ExternalLemmatizer {
    program: String,
    args: Vec<String>,
}

impl ExternalLemmatizer {
    /// Parse a command line into program and arguments.
    pub fn new(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace();
        let Some(program) = parts.next() else {
            bail!("Empty lemmatizer command");
        };
        Ok(Self {
            program: program.to_string(),
            args: parts.map(String::from).collect(),
        })
    }

    /// The configured command, for log messages.
    pub fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Pipe `text` through the command and return its stdout.
    pub fn lemmatize(&self, text: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to run lemmatizer: {}", self.describe()))?;

        // Feed stdin from a separate thread so a tagger that streams its
        // output cannot deadlock against a full pipe.
        let feeder = child.stdin.take().map(|mut stdin| {
            let text = text.to_string();
            std::thread::spawn(move || stdin.write_all(text.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .with_context(|| format!("Lemmatizer did not finish: {}", self.describe()))?;

        if let Some(feeder) = feeder {
            match feeder.join() {
                Ok(result) => result.context("Failed to feed the lemmatizer")?,
                Err(_) => bail!("Lemmatizer feeder thread panicked"),
            }
        }

        if !output.status.success() {
            bail!(
                "Lemmatizer {} failed with {}: {}",
                self.describe(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        String::from_utf8(output.stdout).context("Lemmatizer produced non-UTF-8 output")
    }
}
