//! Generate command implementation

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use lexquiz_core::{QuizGenerator, SectionRange, TextSource};

use crate::commands::{init_logging, PatternArgs};
use crate::input::{load_material, resolve_sources};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, QuizFormatter, RenderOptions, TextFormatter,
};

const DEFAULT_INSTRUCTION: &str = "Write down the meaning of underlined words/phrases.";

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Material file (CSV: section, phrase, answer, notes...)
    #[arg(short = 'm', long, value_name = "FILE", required = true)]
    pub material: PathBuf,

    /// Comma-separated source files, directories, or glob patterns
    #[arg(short = 's', long, value_name = "PATHS", required = true)]
    pub sources: String,

    /// Section range to draw from, e.g. '1-10', '5', '3-'
    #[arg(short = 'e', long, value_name = "RANGE", default_value = "0-")]
    pub sections: String,

    /// Number of questions to generate
    #[arg(short = 'i', long, value_name = "NUM", required = true)]
    pub size: usize,

    /// Instruction line placed at the top of the quiz
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_INSTRUCTION)]
    pub instruction: String,

    /// Render without word dividers (Japanese, Chinese, ...)
    #[arg(long)]
    pub skip_spaces: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Seed for the random draws, for reproducible quizzes
    #[arg(long, value_name = "NUM")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("Generating a quiz from {}", self.material.display());

        let range: SectionRange = self
            .sections
            .parse()
            .with_context(|| format!("Invalid --sections value: {}", self.sections))?;

        let mut generator = self.build_generator()?;

        let quiz = generator.quiz(&range, self.size)?;
        if quiz.len() < self.size {
            log::info!(
                "Material exhausted: built {} of {} requested questions",
                quiz.len(),
                self.size
            );
        }

        let options = RenderOptions {
            instruction: self.instruction.clone(),
            word_source: generator.preset().word_source().to_string(),
            divider: if self.skip_spaces { "" } else { " " },
        };

        let mut formatter = self.formatter()?;
        formatter.write_quiz(&quiz, &options)
    }

    fn build_generator(&self) -> Result<QuizGenerator> {
        let (language, overrides) = self.patterns.resolve()?;
        let phrases = load_material(&self.material)?;
        let sources = open_sources(&self.sources)?;

        let mut builder = QuizGenerator::builder()
            .language(language)
            .overrides(overrides)
            .phrases(phrases)
            .sources(sources);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        Ok(builder.build()?)
    }

    fn formatter(&self) -> Result<Box<dyn QuizFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

/// Resolve and open the sources, skipping the unreadable ones.
pub(crate) fn open_sources(paths: &str) -> Result<Vec<TextSource>> {
    let mut sources = Vec::new();
    for path in resolve_sources(paths)? {
        match TextSource::open(&path) {
            Ok(source) => sources.push(source),
            Err(err) => log::warn!("Skipping unreadable source: {err}"),
        }
    }
    Ok(sources)
}
