//! Lexicon Store: keyword tables for classification and sentiment, plus the
//! vocabulary dictionary shared by the quiz and word-of-the-day features.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::builtin;
use crate::error::{MayaError, Result};
use crate::random::{self, RandomSource};
use crate::types::VocabularyEntry;

/// Keyword phrases for one topic tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTable {
    pub topic: String,
    pub phrases: Vec<String>,
}

/// Keyword tables consulted by the classifier and the extractor.
///
/// Topic tables are ordered; earlier tables win score ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTables {
    pub topics: Vec<TopicTable>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub question: Vec<String>,
    pub greeting: Vec<String>,
    pub farewell: Vec<String>,
    /// Dish names remembered as the user's favourite food.
    pub dishes: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl KeywordTables {
    pub fn builtin() -> Self {
        Self {
            topics: builtin::TOPICS
                .iter()
                .map(|(topic, phrases)| TopicTable {
                    topic: (*topic).to_string(),
                    phrases: owned(phrases),
                })
                .collect(),
            positive: owned(builtin::POSITIVE),
            negative: owned(builtin::NEGATIVE),
            question: owned(builtin::QUESTION),
            greeting: owned(builtin::GREETING),
            farewell: owned(builtin::FAREWELL),
            dishes: owned(builtin::DISHES),
        }
    }

    pub fn topic(&self, name: &str) -> Option<&TopicTable> {
        self.topics.iter().find(|t| t.topic == name)
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A named group of vocabulary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyCategory {
    pub name: String,
    pub entries: Vec<VocabularyEntry>,
}

impl VocabularyCategory {
    /// Number of distinct meanings, which bounds how many quiz options fit.
    pub fn distinct_meanings(&self) -> usize {
        let mut meanings: Vec<&str> = self.entries.iter().map(|e| e.meaning.as_str()).collect();
        meanings.sort_unstable();
        meanings.dedup();
        meanings.len()
    }
}

/// Read-only vocabulary and keyword data. Safe to share across sessions.
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<VocabularyCategory>,
    keywords: KeywordTables,
}

impl Lexicon {
    pub fn new(categories: Vec<VocabularyCategory>, keywords: KeywordTables) -> Self {
        Self {
            categories,
            keywords,
        }
    }

    /// The built-in vocabulary and keyword tables.
    pub fn builtin() -> Self {
        let categories = builtin::VOCABULARY
            .iter()
            .map(|(name, words)| VocabularyCategory {
                name: (*name).to_string(),
                entries: words
                    .iter()
                    .map(|(term, meaning)| VocabularyEntry::new(*term, *meaning, *name))
                    .collect(),
            })
            .collect();
        Self::new(categories, KeywordTables::builtin())
    }

    /// Parse a `{category: {term: meaning}}` document. The older
    /// `{category: {"words": {term: meaning}}}` layout is accepted too.
    ///
    /// Any category that is not a string-to-string mapping rejects the whole
    /// document. Keyword tables stay built-in.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)?;
        let Value::Object(map) = root else {
            return Err(MayaError::Resource(
                "lexicon root must be an object".to_string(),
            ));
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, value) in map {
            let words = match &value {
                Value::Object(inner) => match inner.get("words") {
                    Some(Value::Object(words)) if inner.len() == 1 => words,
                    _ => inner,
                },
                _ => {
                    return Err(MayaError::Resource(format!(
                        "category '{}' is not a mapping",
                        name
                    )))
                }
            };

            let mut entries = Vec::with_capacity(words.len());
            for (term, meaning) in words {
                let Value::String(meaning) = meaning else {
                    return Err(MayaError::Resource(format!(
                        "category '{}': meaning of '{}' is not a string",
                        name, term
                    )));
                };
                if term.trim().is_empty() || meaning.trim().is_empty() {
                    return Err(MayaError::Resource(format!(
                        "category '{}' has a blank term or meaning",
                        name
                    )));
                }
                entries.push(VocabularyEntry::new(term.trim(), meaning.trim(), name.as_str()));
            }
            categories.push(VocabularyCategory { name, entries });
        }

        if categories.iter().all(|c| c.entries.is_empty()) {
            return Err(MayaError::Resource("lexicon has no entries".to_string()));
        }

        Ok(Self::new(categories, KeywordTables::builtin()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            categories = lexicon.categories.len(),
            entries = lexicon.len(),
            "Lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Load from `path`, falling back to the built-in tables when the path is
    /// absent or the resource is invalid. Never fails.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!(
                    "Failed to load lexicon from {}: {}. Using built-in vocabulary.",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// Meaning of `term` (case-insensitive), searching categories in order.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.lookup_entry(term).map(|e| e.meaning.as_str())
    }

    pub fn lookup_entry(&self, term: &str) -> Option<&VocabularyEntry> {
        let needle = term.trim().to_lowercase();
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter())
            .find(|e| e.term.to_lowercase() == needle)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&VocabularyCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn vocabulary(&self) -> &[VocabularyCategory] {
        &self.categories
    }

    /// Uniform pick from one category, or from the whole dictionary when
    /// `category` is `None`. `None` if the pool is empty or unknown.
    pub fn random_entry<R: RandomSource + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
    ) -> Option<&VocabularyEntry> {
        match category {
            Some(name) => random::choose(rng, &self.category(name)?.entries),
            None => {
                let total = self.len();
                if total == 0 {
                    return None;
                }
                let index = rng.next_index(total);
                self.categories
                    .iter()
                    .flat_map(|c| c.entries.iter())
                    .nth(index)
            }
        }
    }

    pub fn keywords(&self) -> &KeywordTables {
        &self.keywords
    }

    pub fn with_keywords(mut self, keywords: KeywordTables) -> Self {
        self.keywords = keywords;
        self
    }

    /// Total vocabulary entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
