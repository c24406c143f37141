//! Source derivation pipeline
//!
//! Turns original source files into their `.preprocessed` (cleaned,
//! human-readable) and `.lemmatized` (morphologically normalized) siblings.
//! Preprocessors are built in per language; lemmatization is delegated to an
//! external tagger command, since morphological analysis is outside the
//! engine's scope.

pub mod lemmatize;
pub mod preprocess;

pub use lemmatize::ExternalLemmatizer;
pub use preprocess::preprocessor_for;
