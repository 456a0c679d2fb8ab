//! Error types for the dialogue engine.

use maya_core::error::MayaError;

/// Errors from the chat engine.
///
/// `respond` never returns these; they surface from the quiz-answer,
/// role-play and snapshot operations, and internally from the selector before
/// being turned into the last-resort reply. Quiz generation has its own
/// `QuizError`.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("response pool is empty: {0}")]
    EmptyPool(String),
    #[error("unknown role-play scenario: {0}")]
    UnknownScenario(String),
    #[error("no role-play scenario is active")]
    NoActiveScenario,
    #[error("no quiz is active")]
    NoActiveQuiz,
    #[error("snapshot error: {0}")]
    Snapshot(String),
    #[error("core error: {0}")]
    Core(String),
}

impl From<MayaError> for ChatError {
    fn from(err: MayaError) -> Self {
        match err {
            MayaError::Snapshot(msg) => ChatError::Snapshot(msg),
            other => ChatError::Core(other.to_string()),
        }
    }
}

/// Why a quiz could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quizzes are not available yet: {0}")]
    NotAvailable(String),
    #[error("unknown quiz category: {0}")]
    UnknownCategory(String),
}
