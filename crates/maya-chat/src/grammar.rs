//! Common-mistake corrections and pronunciation tips for learner input.

use serde::{Deserialize, Serialize};

use crate::matcher::PhraseMatcher;

const CORRECTIONS: &[(&str, &str)] = &[
    ("saya adalah", "saya"),
    ("anda adalah", "anda"),
    ("dia adalah", "dia"),
    ("kami adalah", "kami"),
    ("mereka adalah", "mereka"),
    ("saya akan pergi kemarin", "saya pergi kemarin"),
    ("saya sudah akan", "saya akan"),
    ("dimana", "di mana"),
    ("kenapa", "mengapa"),
    ("gimana", "bagaimana"),
];

// Checked in order; the first digraph found wins.
const PRONUNCIATION_TIPS: &[(&str, &str)] = &[
    ("ng", "Sebut \"ng\" seperti dalam \"sing\" - bunyi sengau"),
    ("ny", "Sebut \"ny\" seperti dalam \"canyon\" - bunyi lembut"),
    ("kh", "Sebut \"kh\" dari kerongkong, bukan \"k\" biasa"),
    ("gh", "Sebut \"gh\" lembut dari kerongkong"),
    ("sy", "Sebut \"sy\" seperti \"sh\" dalam bahasa Inggeris"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub mistake: String,
    pub correction: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarFeedback {
    pub corrections: Vec<Correction>,
    pub pronunciation_tip: Option<String>,
}

impl GrammarFeedback {
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty() && self.pronunciation_tip.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct GrammarChecker {
    rules: Vec<(PhraseMatcher, Correction)>,
}

impl GrammarChecker {
    pub fn new() -> Self {
        let rules = CORRECTIONS
            .iter()
            .map(|(mistake, correction)| {
                (
                    PhraseMatcher::new(&[*mistake]),
                    Correction {
                        mistake: (*mistake).to_string(),
                        correction: (*correction).to_string(),
                        explanation: format!("Guna \"{}\" bukan \"{}\"", correction, mistake),
                    },
                )
            })
            .collect();
        Self { rules }
    }

    /// Corrections for every known mistake phrase present as whole words.
    pub fn check(&self, text: &str) -> Vec<Correction> {
        self.rules
            .iter()
            .filter(|(matcher, _)| matcher.is_match(text))
            .map(|(_, c)| c.clone())
            .collect()
    }

    /// Tip for the first difficult digraph in `text`, if any.
    pub fn pronunciation_tip(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();
        PRONUNCIATION_TIPS
            .iter()
            .find(|(sound, _)| lower.contains(sound))
            .map(|(_, tip)| *tip)
    }

    pub fn feedback(&self, text: &str) -> GrammarFeedback {
        GrammarFeedback {
            corrections: self.check(text),
            pronunciation_tip: self.pronunciation_tip(text).map(str::to_string),
        }
    }
}

impl Default for GrammarChecker {
    fn default() -> Self {
        Self::new()
    }
}
