//! Whole-word phrase matching.
//!
//! Keyword phrases are compiled once into case-insensitive regexes anchored on
//! word boundaries, so "hi" does not fire inside "chicken" and "apa" does not
//! fire inside "lapar".

use regex::Regex;
use tracing::warn;

#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    regex: Regex,
}

/// A compiled, ordered set of keyword phrases.
#[derive(Debug, Clone, Default)]
pub struct PhraseMatcher {
    phrases: Vec<Phrase>,
}

/// Build the pattern for one phrase. Word boundaries are only asserted next
/// to word characters, so phrases such as "?" or "sama-sama" still work.
fn phrase_pattern(phrase: &str) -> Option<String> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }
    let body = words.join(r"\s+");

    let starts_word = phrase
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    let ends_word = phrase
        .trim_end()
        .chars()
        .last()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');

    Some(format!(
        "(?i){}{}{}",
        if starts_word { r"\b" } else { "" },
        body,
        if ends_word { r"\b" } else { "" },
    ))
}

impl PhraseMatcher {
    /// Compile `phrases`, skipping blanks, duplicates and anything that fails
    /// to compile.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut compiled: Vec<Phrase> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let text = phrase.as_ref().trim().to_lowercase();
            if compiled.iter().any(|p| p.text == text) {
                continue;
            }
            let Some(pattern) = phrase_pattern(&text) else {
                warn!("Skipping blank keyword phrase");
                continue;
            };
            match Regex::new(&pattern) {
                Ok(regex) => compiled.push(Phrase { text, regex }),
                Err(e) => warn!(phrase = %text, error = %e, "Skipping malformed keyword phrase"),
            }
        }
        Self { phrases: compiled }
    }

    /// True if any phrase occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.phrases.iter().any(|p| p.regex.is_match(text))
    }

    /// The phrase occurring earliest in `text`. Phrases starting at the same
    /// offset resolve to the earlier table entry.
    pub fn first_match<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.phrases
            .iter()
            .filter_map(|p| p.regex.find(text).map(|m| (m.start(), p.text.as_str())))
            .min_by_key(|(start, _)| *start)
            .map(|(_, text)| text)
    }

    /// Distinct phrases found in `text`, in table order.
    pub fn matches<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.phrases
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| p.text.as_str())
            .collect()
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.phrases.iter().filter(|p| p.regex.is_match(text)).count()
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Word boundaries ----

    #[test]
    fn test_whole_word_only() {
        let m = PhraseMatcher::new(&["hi", "apa"]);
        assert!(!m.is_match("I love chicken rice"));
        assert!(!m.is_match("saya lapar"));
        assert!(m.is_match("hi there"));
        assert!(m.is_match("Apa khabar?"));
    }

    #[test]
    fn test_case_insensitive() {
        let m = PhraseMatcher::new(&["Hello"]);
        assert!(m.is_match("HELLO Maya"));
        assert!(m.is_match("oh hello"));
    }

    #[test]
    fn test_multi_word_phrase_tolerates_extra_spaces() {
        let m = PhraseMatcher::new(&["chicken rice"]);
        assert!(m.is_match("I want chicken   rice please"));
        assert!(!m.is_match("chickenrice"));
    }

    #[test]
    fn test_punctuation_adjacent() {
        let m = PhraseMatcher::new(&["lapar"]);
        assert!(m.is_match("Lapar!"));
        assert!(m.is_match("(lapar)"));
    }

    #[test]
    fn test_non_word_phrase_edges() {
        let m = PhraseMatcher::new(&["?", "sama-sama"]);
        assert!(m.is_match("really?"));
        assert!(m.is_match("Sama-sama, kawan"));
    }

    #[test]
    fn test_regex_metacharacters_escaped() {
        let m = PhraseMatcher::new(&["a.b"]);
        assert!(m.is_match("a.b"));
        assert!(!m.is_match("axb"));
    }

    // ---- Table handling ----

    #[test]
    fn test_blank_and_duplicate_phrases_skipped() {
        let m = PhraseMatcher::new(&["", "   ", "makan", "MAKAN"]);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_matches_distinct_in_order() {
        let m = PhraseMatcher::new(&["makan", "lapar", "sedap"]);
        assert_eq!(m.matches("sedap! lapar, makan makan"), vec!["makan", "lapar", "sedap"]);
        assert_eq!(m.count_matches("makan makan makan"), 1);
    }

    #[test]
    fn test_first_match_by_position() {
        let m = PhraseMatcher::new(&["nasi lemak", "laksa", "nasi"]);
        assert_eq!(m.first_match("Saya suka laksa dan nasi lemak"), Some("laksa"));
        // Same start offset: table order decides.
        assert_eq!(m.first_match("nasi lemak sedap"), Some("nasi lemak"));
        assert_eq!(m.first_match("roti prata"), None);
    }

    #[test]
    fn test_empty_matcher() {
        let m = PhraseMatcher::new::<&str>(&[]);
        assert!(m.is_empty());
        assert!(!m.is_match("anything"));
        assert!(m.matches("anything").is_empty());
        assert_eq!(m.first_match("anything"), None);
    }

    #[test]
    fn test_unicode_input_does_not_panic() {
        let m = PhraseMatcher::new(&["kopi"]);
        assert!(m.is_match("☕ kopi ☕"));
        assert!(!m.is_match("日本語"));
    }
}
