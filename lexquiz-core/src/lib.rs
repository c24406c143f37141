//! Phrase-location and sentence-extraction engine for fill-in-the-blank
//! vocabulary quizzes
//!
//! Given a material (phrases with glosses) and a set of sources (texts kept
//! in original, preprocessed, and lemmatized views), the engine locates each
//! phrase in a source's lemmatized view, resolves the occurrence to a
//! sentence, and computes the word positions of the phrase inside that
//! sentence, producing renderable [`Question`]s. Matching honors
//! per-language pattern presets so divider-less scripts work the same way as
//! space-delimited ones.

#![warn(missing_docs)]

pub mod error;
pub mod generator;
pub mod mapper;
pub mod matcher;
pub mod phrase;
pub mod presets;
pub mod question;
pub mod sentence;
pub mod source;

pub use error::{CoreError, Result};
pub use generator::{QuizGenerator, QuizGeneratorBuilder};
pub use matcher::{Occurrence, PhraseMatcher};
pub use phrase::{Phrase, SectionRange};
pub use presets::{builtin, known_languages, CompiledPreset, PresetDef, PresetOverrides};
pub use question::Question;
pub use source::{SourceBody, TextSource};
