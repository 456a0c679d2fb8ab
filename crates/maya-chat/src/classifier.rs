//! Intent classification.
//!
//! Scores each topic table by the share of input words it matched, then lets
//! the greeting and farewell keyword sets override the scored result.

use std::fmt;

use maya_core::{Lexicon, TrainingCorpus};
use tracing::debug;

use crate::matcher::PhraseMatcher;

/// Confidence reported when a greeting or farewell keyword forces the category.
pub const OVERRIDE_CONFIDENCE: f32 = 0.8;

/// Classified category of one user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntentCategory {
    Greeting,
    Goodbye,
    /// A topic or training-corpus category, by name.
    Topic(String),
    /// Nothing matched.
    Default,
    /// Blank input. The engine answers with a prompt and records nothing.
    Empty,
}

impl IntentCategory {
    /// Map a table name to its category. "greeting", "goodbye" and "default"
    /// get their own variants. `Empty` never comes from a table name, only
    /// from blank input.
    pub fn from_name(name: &str) -> Self {
        match name {
            "greeting" => IntentCategory::Greeting,
            "goodbye" => IntentCategory::Goodbye,
            "default" => IntentCategory::Default,
            other => IntentCategory::Topic(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            IntentCategory::Greeting => "greeting",
            IntentCategory::Goodbye => "goodbye",
            IntentCategory::Topic(name) => name,
            IntentCategory::Default => "default",
            IntentCategory::Empty => "empty",
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category plus confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    pub category: IntentCategory,
    pub confidence: f32,
}

impl Intent {
    fn new(category: IntentCategory, confidence: f32) -> Self {
        Self {
            category,
            confidence,
        }
    }
}

#[derive(Debug, Clone)]
struct CategoryTable {
    name: String,
    matcher: PhraseMatcher,
}

/// Keyword and trigger-pattern classifier. Immutable after construction.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    tables: Vec<CategoryTable>,
    greeting: PhraseMatcher,
    farewell: PhraseMatcher,
}

impl IntentClassifier {
    /// Topic tables come first, in lexicon order, followed by corpus
    /// categories. A corpus category sharing a topic's name adds its triggers
    /// to that topic instead of forming a second table.
    pub fn new(lexicon: &Lexicon, corpus: &TrainingCorpus) -> Self {
        let keywords = lexicon.keywords();
        let mut named: Vec<(String, Vec<String>)> = keywords
            .topics
            .iter()
            .map(|t| (t.topic.clone(), t.phrases.clone()))
            .collect();

        for category in corpus.categories() {
            let triggers = category.pairs.iter().map(|p| p.trigger.clone());
            match named.iter_mut().find(|(name, _)| *name == category.name) {
                Some((_, phrases)) => phrases.extend(triggers),
                None => named.push((category.name.clone(), triggers.collect())),
            }
        }

        let tables = named
            .into_iter()
            .map(|(name, phrases)| CategoryTable {
                matcher: PhraseMatcher::new(&phrases),
                name,
            })
            .filter(|t| !t.matcher.is_empty())
            .collect();

        Self {
            tables,
            greeting: PhraseMatcher::new(&keywords.greeting),
            farewell: PhraseMatcher::new(&keywords.farewell),
        }
    }

    pub fn classify(&self, input: &str) -> Intent {
        let text = input.trim().to_lowercase();
        let word_count = text.split_whitespace().count();
        if word_count == 0 {
            return Intent::new(IntentCategory::Empty, 0.0);
        }

        let mut best: Option<(&str, f32)> = None;
        for table in &self.tables {
            let hits = table.matcher.count_matches(&text);
            if hits == 0 {
                continue;
            }
            let score = (hits as f32 / word_count as f32).min(1.0);
            // Strictly greater: ties keep the earlier table.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((table.name.as_str(), score));
            }
        }

        if self.greeting.is_match(&text) {
            debug!(scored = ?best, "Greeting override");
            return Intent::new(IntentCategory::Greeting, OVERRIDE_CONFIDENCE);
        }
        if self.farewell.is_match(&text) {
            debug!(scored = ?best, "Farewell override");
            return Intent::new(IntentCategory::Goodbye, OVERRIDE_CONFIDENCE);
        }

        match best {
            Some((name, score)) => Intent::new(IntentCategory::from_name(name), score),
            None => Intent::new(IntentCategory::Default, 0.0),
        }
    }

    /// Names of the scored tables, in evaluation order.
    pub fn categories(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}
