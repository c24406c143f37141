//! Coverage command implementation
//!
//! Runs every phrase of a material through the question builder and reports
//! the share that at least one source can exemplify. Phrases are independent,
//! so the sweep fans out across threads; each attempt draws from its own
//! thread-local random source.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use rayon::prelude::*;

use lexquiz_core::{Phrase, QuizGenerator};

use crate::commands::generate::open_sources;
use crate::commands::{init_logging, PatternArgs};
use crate::input::load_material;
use crate::progress::ProgressReporter;

/// Arguments for the coverage command
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Material file (CSV: section, phrase, answer, notes...)
    #[arg(short = 'm', long, value_name = "FILE", required = true)]
    pub material: PathBuf,

    /// Comma-separated source files, directories, or glob patterns
    #[arg(short = 's', long, value_name = "PATHS", required = true)]
    pub sources: String,

    /// Show the phrases no source can exemplify
    #[arg(short = 'u', long)]
    pub show_uncovered: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short = 't', long, value_name = "NUM")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CoverageArgs {
    /// Execute the coverage command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to configure the thread pool")?;
        }
        log::info!(
            "Coverage sweep across {} threads",
            self.threads.unwrap_or_else(num_cpus::get)
        );

        let (language, overrides) = self.patterns.resolve()?;
        let phrases = load_material(&self.material)?;
        let sources = open_sources(&self.sources)?;
        let total = phrases.len();

        let generator = QuizGenerator::builder()
            .language(language)
            .overrides(overrides)
            .sources(sources)
            .build()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init(total as u64, "phrases");

        let uncovered: Vec<&Phrase> = phrases
            .par_iter()
            .filter(|phrase| {
                let covered = generator
                    .question_with(phrase, &mut rand::thread_rng())
                    .ok()
                    .flatten()
                    .is_some();
                progress.item_completed(&phrase.expression);
                !covered
            })
            .collect();
        progress.finish();

        let covered = total - uncovered.len();
        let percent = if total == 0 {
            100.0
        } else {
            covered as f64 * 100.0 / total as f64
        };
        println!("{}", style(format!("Coverage: {percent:.2}%")).bold());
        println!("({covered}/{total} phrases have at least one example sentence)");

        if self.show_uncovered && !uncovered.is_empty() {
            println!("\n{}", style("Uncovered Phrases").bold());
            for phrase in &uncovered {
                println!(
                    "  [{}]\t{}\t{}",
                    phrase.section, phrase.expression, phrase.answer
                );
            }
        }

        Ok(())
    }
}
