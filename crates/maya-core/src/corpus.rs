//! Training Corpus: category name to trigger/response pairs.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::builtin;
use crate::error::{MayaError, Result};
use crate::types::TrainingPair;

/// Training pairs of one category, in resource order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusCategory {
    pub name: String,
    pub pairs: Vec<TrainingPair>,
}

#[derive(Debug, Clone, Default)]
pub struct TrainingCorpus {
    categories: Vec<CorpusCategory>,
}

/// Categories keep document order; classifier ties depend on it.
#[derive(Deserialize)]
struct RawCorpus {
    categories: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawCategory {
    #[serde(default)]
    pairs: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RawPair {
    #[serde(alias = "user_input")]
    trigger: String,
    #[serde(alias = "bot_response")]
    response: String,
    #[serde(alias = "english_translation")]
    translation: String,
    #[serde(default)]
    pronunciation: Option<String>,
}

impl TrainingCorpus {
    pub fn new(categories: Vec<CorpusCategory>) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        let categories = builtin::CORPUS
            .iter()
            .map(|(name, pairs)| CorpusCategory {
                name: (*name).to_string(),
                pairs: pairs
                    .iter()
                    .map(|(trigger, response, translation, pronunciation)| TrainingPair {
                        trigger: (*trigger).to_string(),
                        response: (*response).to_string(),
                        translation: (*translation).to_string(),
                        category: (*name).to_string(),
                        pronunciation: Some((*pronunciation).to_string()),
                    })
                    .collect(),
            })
            .collect();
        Self::new(categories)
    }

    /// Parse a `{"categories": {name: {"pairs": [...]}}}` document.
    ///
    /// A category containing a malformed pair is skipped as a whole. The
    /// document is rejected only when nothing usable remains.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCorpus = serde_json::from_str(json)?;

        let mut categories = Vec::with_capacity(raw.categories.len());
        'category: for (name, category) in raw.categories {
            let category: RawCategory = serde_json::from_value(category)?;
            let mut pairs = Vec::with_capacity(category.pairs.len());
            for value in category.pairs {
                let pair: RawPair = match serde_json::from_value(value) {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!(category = %name, error = %e, "Skipping malformed corpus category");
                        continue 'category;
                    }
                };
                if pair.trigger.trim().is_empty() || pair.response.trim().is_empty() {
                    warn!(category = %name, "Skipping corpus category with a blank pair");
                    continue 'category;
                }
                pairs.push(TrainingPair {
                    trigger: pair.trigger.trim().to_lowercase(),
                    response: pair.response,
                    translation: pair.translation,
                    category: name.clone(),
                    pronunciation: pair.pronunciation.filter(|p| !p.trim().is_empty()),
                });
            }
            if pairs.is_empty() {
                debug!(category = %name, "Corpus category has no pairs");
                continue;
            }
            categories.push(CorpusCategory { name, pairs });
        }

        let corpus = Self::new(categories);
        if corpus.is_empty() {
            return Err(MayaError::Resource(
                "training corpus has no usable pairs".to_string(),
            ));
        }
        Ok(corpus)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let corpus = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            categories = corpus.categories.len(),
            pairs = corpus.len(),
            "Training corpus loaded"
        );
        Ok(corpus)
    }

    /// Load from `path`, falling back to the built-in pairs. Never fails.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(
                    "Failed to load training corpus from {}: {}. Using built-in pairs.",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// Pairs of `category`, empty when unknown.
    pub fn pairs(&self, category: &str) -> &[TrainingPair] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.pairs.as_slice())
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> &[CorpusCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.pairs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "categories": {
            "food": {
                "pairs": [
                    {"trigger": "Lapar", "response": "Jom makan!", "translation": "Let's eat!"},
                    {"user_input": "kopi", "bot_response": "Kopi O satu!", "english_translation": "One black coffee!", "pronunciation": "ko-pee oh"}
                ]
            },
            "broken": {
                "pairs": [
                    {"trigger": "x", "response": "y", "translation": "z"},
                    {"trigger": "missing response"}
                ]
            },
            "empty": {"pairs": []}
        }
    }"#;

    #[test]
    fn test_builtin_corpus_has_food_pairs() {
        let corpus = TrainingCorpus::builtin();
        let food = corpus.pairs("food");
        assert!(!food.is_empty());
        assert!(food.iter().all(|p| p.category == "food"));
        assert!(food.iter().all(|p| p.pronunciation.is_some()));
    }

    #[test]
    fn test_pairs_unknown_category_is_empty() {
        assert!(TrainingCorpus::builtin().pairs("astronomy").is_empty());
    }

    #[test]
    fn test_from_json_accepts_aliases_and_preserves_order() {
        let corpus = TrainingCorpus::from_json_str(SAMPLE).unwrap();
        let food = corpus.pairs("food");
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].trigger, "lapar");
        assert_eq!(food[1].trigger, "kopi");
        assert_eq!(food[1].translation, "One black coffee!");
        assert_eq!(food[1].pronunciation.as_deref(), Some("ko-pee oh"));
    }

    #[test]
    fn test_from_json_keeps_document_category_order() {
        let json = r#"{
            "categories": {
                "weather": {"pairs": [{"trigger": "hujan", "response": "Bawa payung!", "translation": "Bring an umbrella!"}]},
                "cultural": {"pairs": [{"trigger": "raya", "response": "Selamat hari raya!", "translation": "Happy Hari Raya!"}]},
                "food": {"pairs": [{"trigger": "lapar", "response": "Jom makan!", "translation": "Let's eat!"}]}
            }
        }"#;
        let corpus = TrainingCorpus::from_json_str(json).unwrap();
        let names: Vec<&str> = corpus.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["weather", "cultural", "food"]);
    }

    #[test]
    fn test_from_json_skips_malformed_category() {
        let corpus = TrainingCorpus::from_json_str(SAMPLE).unwrap();
        assert!(corpus.pairs("broken").is_empty());
        assert!(corpus.pairs("empty").is_empty());
        assert_eq!(corpus.categories().len(), 1);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_empty_corpus() {
        let result = TrainingCorpus::from_json_str(r#"{"categories": {}}"#);
        assert!(matches!(result, Err(MayaError::Resource(_))));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(TrainingCorpus::from_json_str(r#"{"food": []}"#).is_err());
        assert!(TrainingCorpus::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_or_builtin_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"categories\": 5}").unwrap();
        let corpus = TrainingCorpus::load_or_builtin(Some(file.path()));
        assert_eq!(corpus.len(), TrainingCorpus::builtin().len());

        let missing = TrainingCorpus::load_or_builtin(Some(Path::new("/nonexistent.json")));
        assert!(!missing.is_empty());
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let corpus = TrainingCorpus::load(file.path()).unwrap();
        assert_eq!(corpus.pairs("food").len(), 2);
    }
}
