//! Rule-based dialogue engine for practising colloquial Malay.
//!
//! Classifies each input, extracts sentiment and topics, and picks a reply by
//! fixed rule precedence while tracking a bounded conversational context.
//! Also provides vocabulary quizzes, role-play scenarios and grammar tips.

pub mod classifier;
pub mod context;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod grammar;
pub mod input;
pub mod matcher;
pub mod quiz;
pub mod responses;
pub mod roleplay;
pub mod selector;
pub mod snapshot;
pub mod voice;

pub use classifier::{Intent, IntentCategory, IntentClassifier};
pub use context::ContextTracker;
pub use engine::{ChatEngine, ChatReply, ConversationState, EngineStats, Knowledge};
pub use error::{ChatError, QuizError};
pub use extractor::{Analysis, Sentiment, SentimentExtractor};
pub use grammar::{Correction, GrammarChecker, GrammarFeedback};
pub use input::sanitize;
pub use matcher::PhraseMatcher;
pub use quiz::{check, check_input, QuizGenerator, WordOfTheDay};
pub use responses::{CannedPool, ResponseBook};
pub use roleplay::{RoleplaySession, RoleplayTurn, Scenario};
pub use selector::{ResponseSelector, Selection, SelectionInput, SelectionRule};
pub use snapshot::ContextSnapshot;
pub use voice::{LogSink, SilentSink, SpeechSink};
