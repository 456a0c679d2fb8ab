use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Responses
// =============================================================================

/// A bot utterance in the practice dialect together with its English gloss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePair {
    /// Text in the practice dialect.
    pub native: String,
    /// English translation of `native`.
    pub translation: String,
    /// Optional syllable-by-syllable pronunciation hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl ResponsePair {
    pub fn new(native: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            native: native.into(),
            translation: translation.into(),
            pronunciation: None,
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = Some(pronunciation.into());
        self
    }

    /// True when either side of the pair is blank.
    pub fn is_blank(&self) -> bool {
        self.native.trim().is_empty() || self.translation.trim().is_empty()
    }
}

// =============================================================================
// Lexicon and corpus records
// =============================================================================

/// One word or phrase of the vocabulary dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Term in the practice dialect, unique within its category.
    pub term: String,
    /// English meaning.
    pub meaning: String,
    /// Category the term is grouped under (e.g. "keluarga").
    pub category: String,
}

impl VocabularyEntry {
    pub fn new(
        term: impl Into<String>,
        meaning: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
            category: category.into(),
        }
    }
}

/// A trigger phrase and the canned reply it unlocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    pub trigger: String,
    pub response: String,
    pub translation: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl TrainingPair {
    /// The reply half of the pair.
    pub fn reply(&self) -> ResponsePair {
        ResponsePair {
            native: self.response.clone(),
            translation: self.translation.clone(),
            pronunciation: self.pronunciation.clone(),
        }
    }
}

// =============================================================================
// Conversation records
// =============================================================================

/// One completed exchange. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub user_text: String,
    pub bot_text: String,
    pub timestamp: DateTime<Utc>,
    pub turn_index: u64,
}

// =============================================================================
// Quiz
// =============================================================================

/// A multiple-choice question.
///
/// `options[correct_index] == correct_meaning` and every option is distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Vocabulary category or cultural theme the question was drawn from.
    pub category: String,
    /// Word being asked about (or the question itself for themed quizzes).
    pub prompt_word: String,
    /// Rendered question text.
    pub question: String,
    pub correct_meaning: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    /// Shown after answering a themed question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Outcome of checking a quiz answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum QuizCheck {
    /// The selection pointed at one of the options.
    Answered {
        correct: bool,
        correct_answer: String,
    },
    /// Out-of-range or non-numeric selection. The caller should re-prompt.
    InvalidSelection,
}

impl QuizCheck {
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizCheck::Answered { correct: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_pair_builder() {
        let pair = ResponsePair::new("Apa khabar?", "How are you?").with_pronunciation("ah-pah");
        assert_eq!(pair.native, "Apa khabar?");
        assert_eq!(pair.translation, "How are you?");
        assert_eq!(pair.pronunciation.as_deref(), Some("ah-pah"));
        assert!(!pair.is_blank());
    }

    #[test]
    fn test_response_pair_blank() {
        assert!(ResponsePair::new("", "x").is_blank());
        assert!(ResponsePair::new("x", "  ").is_blank());
    }

    #[test]
    fn test_response_pair_serde_skips_missing_pronunciation() {
        let json = serde_json::to_string(&ResponsePair::new("Hai", "Hi")).unwrap();
        assert!(!json.contains("pronunciation"));
        let back: ResponsePair = serde_json::from_str(&json).unwrap();
        assert!(back.pronunciation.is_none());
    }

    #[test]
    fn test_training_pair_reply() {
        let pair = TrainingPair {
            trigger: "lapar".to_string(),
            response: "Jom makan!".to_string(),
            translation: "Let's eat!".to_string(),
            category: "food".to_string(),
            pronunciation: None,
        };
        let reply = pair.reply();
        assert_eq!(reply.native, "Jom makan!");
        assert_eq!(reply.translation, "Let's eat!");
    }

    #[test]
    fn test_quiz_check_serializes_with_status_tag() {
        let check = QuizCheck::Answered {
            correct: false,
            correct_answer: "mother".to_string(),
        };
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["status"], "answered");
        assert_eq!(json["correct_answer"], "mother");

        let invalid = serde_json::to_value(QuizCheck::InvalidSelection).unwrap();
        assert_eq!(invalid["status"], "invalid_selection");
    }

    #[test]
    fn test_quiz_check_is_correct() {
        let yes = QuizCheck::Answered {
            correct: true,
            correct_answer: "red".to_string(),
        };
        assert!(yes.is_correct());
        assert!(!QuizCheck::InvalidSelection.is_correct());
    }

    #[test]
    fn test_context_entry_roundtrip() {
        let entry = ContextEntry {
            user_text: "Saya lapar".to_string(),
            bot_text: "Jom makan!".to_string(),
            timestamp: Utc::now(),
            turn_index: 3,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ContextEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
