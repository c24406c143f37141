//! Quiz generation
//!
//! The generator owns the parsed material, the opened sources, and the
//! resolved preset. One question is built per phrase by trying sources in
//! random order: match the phrase against a source's lemmatized view, pick
//! one occurrence uniformly at random, resolve the enclosing sentence, map
//! the word indexes, and fetch the same-index sentence from the preprocessed
//! view for display. A phrase no source can exemplify is skipped, never an
//! error; an unreadable source is logged and treated as "no match" for that
//! source only.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::mapper;
use crate::matcher::PhraseMatcher;
use crate::phrase::{Phrase, SectionRange};
use crate::presets::{CompiledPreset, PresetOverrides};
use crate::question::Question;
use crate::sentence;
use crate::source::TextSource;

/// Builder for [`QuizGenerator`].
#[derive(Debug, Default)]
pub struct QuizGeneratorBuilder {
    language: String,
    overrides: PresetOverrides,
    phrases: Vec<Phrase>,
    sources: Vec<TextSource>,
    seed: Option<u64>,
}

impl QuizGeneratorBuilder {
    /// Start building with an empty material and source set.
    pub fn new() -> Self {
        Self {
            language: "en".to_string(),
            ..Default::default()
        }
    }

    /// Language tag selecting the pattern preset.
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    /// Per-field pattern overrides.
    pub fn overrides(mut self, overrides: PresetOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// The material: phrases to draw questions from.
    pub fn phrases(mut self, phrases: Vec<Phrase>) -> Self {
        self.phrases = phrases;
        self
    }

    /// The sources to search for example sentences.
    pub fn sources(mut self, sources: Vec<TextSource>) -> Self {
        self.sources = sources;
        self
    }

    /// Seed for the random draws, for reproducible quizzes.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve the preset and build the generator.
    ///
    /// Fails when a pattern override does not compile.
    pub fn build(self) -> Result<QuizGenerator> {
        let preset = CompiledPreset::with_overrides(&self.language, &self.overrides)?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(QuizGenerator {
            preset,
            phrases: self.phrases,
            sources: self.sources,
            rng,
        })
    }
}

/// Generates fill-in-the-blank questions from phrases and sources.
pub struct QuizGenerator {
    preset: CompiledPreset,
    phrases: Vec<Phrase>,
    sources: Vec<TextSource>,
    rng: StdRng,
}

impl QuizGenerator {
    /// Start a builder.
    pub fn builder() -> QuizGeneratorBuilder {
        QuizGeneratorBuilder::new()
    }

    /// The parsed material.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// The opened sources.
    pub fn sources(&self) -> &[TextSource] {
        &self.sources
    }

    /// The resolved preset.
    pub fn preset(&self) -> &CompiledPreset {
        &self.preset
    }

    /// Build a quiz of at most `size` questions from the phrases whose
    /// section falls inside `range`.
    ///
    /// Phrases are drawn in shuffled order; a phrase that matches no source
    /// contributes nothing. The result is shorter than `size` when the
    /// filtered pool runs out.
    pub fn quiz(&mut self, range: &SectionRange, size: usize) -> Result<Vec<Question>> {
        let mut rng = self.rng.clone();
        let mut pool: Vec<&Phrase> = self
            .phrases
            .iter()
            .filter(|phrase| range.contains(phrase.section))
            .collect();
        pool.shuffle(&mut rng);

        let mut quiz = Vec::new();
        while quiz.len() < size {
            let Some(phrase) = pool.pop() else {
                break;
            };
            match self.question_with(phrase, &mut rng) {
                Ok(Some(question)) => quiz.push(question),
                Ok(None) => {}
                Err(err) => {
                    log::warn!("skipping phrase `{}`: {err}", phrase.expression);
                }
            }
        }

        self.rng = rng;
        Ok(quiz)
    }

    /// Build one question for `phrase`, trying sources in random order.
    pub fn question(&mut self, phrase: &Phrase) -> Result<Option<Question>> {
        let mut rng = self.rng.clone();
        let result = self.question_with(phrase, &mut rng);
        self.rng = rng;
        result
    }

    /// Like [`question`](Self::question) with a caller-supplied random
    /// source, so independent phrases can be probed concurrently.
    pub fn question_with<R: Rng + ?Sized>(
        &self,
        phrase: &Phrase,
        rng: &mut R,
    ) -> Result<Option<Question>> {
        let matcher = PhraseMatcher::compile(&phrase.expression, &self.preset)?;

        let mut order: Vec<usize> = (0..self.sources.len()).collect();
        order.shuffle(rng);

        for index in order {
            let source = &self.sources[index];
            match self.question_from_source(phrase, &matcher, source, rng) {
                Ok(Some(question)) => return Ok(Some(question)),
                Ok(None) => {}
                Err(err) => {
                    // One source failing to read is not a batch failure.
                    log::warn!(
                        "skipping source {} for `{}`: {err}",
                        source.path().display(),
                        phrase.expression
                    );
                }
            }
        }
        Ok(None)
    }

    fn question_from_source<R: Rng + ?Sized>(
        &self,
        phrase: &Phrase,
        matcher: &PhraseMatcher,
        source: &TextSource,
        rng: &mut R,
    ) -> Result<Option<Question>> {
        let lemmatized = source.lemmatized()?;
        let occurrences = matcher.locate(&lemmatized.text)?;
        let Some(occurrence) = occurrences.choose(rng) else {
            return Ok(None);
        };

        let index = sentence::sentence_index_at(&self.preset, &lemmatized.text, occurrence.start)?;
        let matched_sentence = sentence::reconstruct(&self.preset, &lemmatized.text, occurrence)?;
        let word_indexes = mapper::word_indexes(matcher, &self.preset, &matched_sentence)?;

        let display = source.preprocessed()?;
        let Some(display_sentence) = sentence::sentence_at(&self.preset, &display.text, index)?
        else {
            // The display view has no sentence at this index; the views
            // disagree, so this source cannot exemplify the phrase.
            return Ok(None);
        };

        Ok(Some(Question {
            phrase: phrase.expression.clone(),
            answer: phrase.answer.clone(),
            sentence: display_sentence,
            word_indexes,
            reference: display.reference.clone(),
        }))
    }
}
