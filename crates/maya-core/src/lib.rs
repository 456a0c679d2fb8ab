//! Shared data layer for the Maya dialogue engine.
//!
//! Holds configuration, the error type, the vocabulary and keyword tables,
//! the training corpus and the injectable random source.

mod builtin;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod random;
pub mod types;

pub use config::MayaConfig;
pub use corpus::{CorpusCategory, TrainingCorpus};
pub use error::{MayaError, Result};
pub use lexicon::{KeywordTables, Lexicon, TopicTable, VocabularyCategory};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use types::*;
