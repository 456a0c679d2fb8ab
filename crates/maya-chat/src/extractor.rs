//! Sentiment and topic extraction.

use std::fmt;

use maya_core::Lexicon;
use serde::{Deserialize, Serialize};

use crate::matcher::PhraseMatcher;

/// Coarse sentiment label. Checked positive, then negative, then question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Questioning,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Questioning => "questioning",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// Result of analysing one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub sentiment: Sentiment,
    /// Matched topic tags in table order. The first one becomes the current topic.
    pub topics: Vec<String>,
    /// A `?` or a question word is present, whatever the sentiment label.
    pub contains_question: bool,
}

impl Analysis {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }
}

/// Pure keyword extractor over the lexicon's tables.
#[derive(Debug, Clone)]
pub struct SentimentExtractor {
    positive: PhraseMatcher,
    negative: PhraseMatcher,
    question: PhraseMatcher,
    topics: Vec<(String, PhraseMatcher)>,
}

impl SentimentExtractor {
    pub fn new(lexicon: &Lexicon) -> Self {
        let keywords = lexicon.keywords();
        Self {
            positive: PhraseMatcher::new(&keywords.positive),
            negative: PhraseMatcher::new(&keywords.negative),
            question: PhraseMatcher::new(&keywords.question),
            topics: keywords
                .topics
                .iter()
                .map(|t| (t.topic.clone(), PhraseMatcher::new(&t.phrases)))
                .collect(),
        }
    }

    pub fn analyze(&self, input: &str) -> Analysis {
        let text = input.to_lowercase();
        let has_question_word = self.question.is_match(&text);
        let contains_question = text.contains('?') || has_question_word;

        let sentiment = if self.positive.is_match(&text) {
            Sentiment::Positive
        } else if self.negative.is_match(&text) {
            Sentiment::Negative
        } else if contains_question {
            Sentiment::Questioning
        } else {
            Sentiment::Neutral
        };

        let topics = self
            .topics
            .iter()
            .filter(|(_, matcher)| matcher.is_match(&text))
            .map(|(topic, _)| topic.clone())
            .collect();

        Analysis {
            sentiment,
            topics,
            contains_question,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SentimentExtractor {
        SentimentExtractor::new(&Lexicon::builtin())
    }

    // ---- Sentiment ----

    #[test]
    fn test_positive() {
        let a = extractor().analyze("Hari ini sangat shiok!");
        assert_eq!(a.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_negative() {
        let a = extractor().analyze("Saya sedih hari ini");
        assert_eq!(a.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_tak_suka_is_negative() {
        let a = extractor().analyze("Saya tak suka hujan");
        assert_eq!(a.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_positive_checked_before_negative() {
        let a = extractor().analyze("bagus tapi penat");
        assert_eq!(a.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_question_word() {
        let a = extractor().analyze("Apa khabar");
        assert_eq!(a.sentiment, Sentiment::Questioning);
        assert!(a.contains_question);
    }

    #[test]
    fn test_question_mark_only() {
        let a = extractor().analyze("Betul ke?");
        assert_eq!(a.sentiment, Sentiment::Questioning);
        assert!(a.contains_question);
    }

    #[test]
    fn test_positive_question_keeps_question_flag() {
        let a = extractor().analyze("Best kan, apa pendapat awak?");
        assert_eq!(a.sentiment, Sentiment::Positive);
        assert!(a.contains_question);
    }

    #[test]
    fn test_neutral() {
        let a = extractor().analyze("Saya di sini");
        assert_eq!(a.sentiment, Sentiment::Neutral);
        assert!(!a.contains_question);
        assert!(a.topics.is_empty());
    }

    #[test]
    fn test_question_word_inside_other_word_ignored() {
        // "apa" inside "lapar".
        let a = extractor().analyze("saya lapar");
        assert!(!a.contains_question);
        assert_eq!(a.sentiment, Sentiment::Neutral);
    }

    // ---- Topics ----

    #[test]
    fn test_single_topic() {
        let a = extractor().analyze("Saya lapar");
        assert_eq!(a.topics, vec!["food".to_string()]);
        assert!(a.has_topic("food"));
    }

    #[test]
    fn test_multiple_topics_in_table_order() {
        let a = extractor().analyze("Ibu masak nasi lemak di rumah");
        assert_eq!(
            a.topics,
            vec![
                "food".to_string(),
                "location".to_string(),
                "family".to_string()
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let a = extractor().analyze("");
        assert_eq!(a.sentiment, Sentiment::Neutral);
        assert!(a.topics.is_empty());
        assert!(!a.contains_question);
    }

    #[test]
    fn test_idempotent() {
        let e = extractor();
        let text = "Di mana hawker centre yang sedap?";
        assert_eq!(e.analyze(text), e.analyze(text));
    }

    #[test]
    fn test_sentiment_display() {
        assert_eq!(Sentiment::Questioning.to_string(), "questioning");
        assert_eq!(Sentiment::Neutral.to_string(), "neutral");
    }
}
