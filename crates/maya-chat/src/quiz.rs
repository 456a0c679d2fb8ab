//! Vocabulary and themed multiple-choice quizzes.

use maya_core::config::QuizConfig;
use maya_core::random::{self, RandomSource};
use maya_core::{Lexicon, Quiz, QuizCheck, VocabularyCategory, VocabularyEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QuizError;

// =============================================================================
// Themed question bank
// =============================================================================

struct ThemedQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
}

struct Theme {
    key: &'static str,
    title: &'static str,
    questions: &'static [ThemedQuestion],
}

const THEMES: &[Theme] = &[
    Theme {
        key: "hari_raya",
        title: "Hari Raya",
        questions: &[
            ThemedQuestion {
                question: "Apa yang Hana pakai semasa Hari Raya?",
                options: ["Baju T-shirt", "Baju kurung baru", "Seluar pendek", "Baju sekolah"],
                correct: 1,
                explanation: "Baju kurung adalah pakaian tradisional yang dipakai semasa Hari Raya.",
            },
            ThemedQuestion {
                question: "Siapa datang melawat rumah Hana?",
                options: ["Guru sekolah", "Pak cik dan mak cik", "Polis", "Jiran sebelah"],
                correct: 1,
                explanation: "Pak cik dan mak cik datang melawat untuk beraya bersama-sama.",
            },
            ThemedQuestion {
                question: "Apa yang Hana dan keluarga makan?",
                options: ["Pizza", "Ketupat dan rendang", "Mi goreng", "Nasi lemak"],
                correct: 1,
                explanation: "Ketupat dan rendang adalah makanan tradisional Hari Raya.",
            },
        ],
    },
    Theme {
        key: "tahun_baru_cina",
        title: "Tahun Baru Cina",
        questions: &[
            ThemedQuestion {
                question: "Apakah warna pakaian Wei Ming pada Tahun Baru Cina?",
                options: ["Biru", "Merah", "Putih", "Hitam"],
                correct: 1,
                explanation: "Warna merah melambangkan tuah dalam budaya Cina.",
            },
            ThemedQuestion {
                question: "Apakah makanan yang dimakan oleh Wei Ming dan keluarganya?",
                options: ["Burger", "Satay", "Makan besar", "Kek coklat"],
                correct: 2,
                explanation: "Makan besar bersama keluarga adalah tradisi penting Tahun Baru Cina.",
            },
            ThemedQuestion {
                question: "Apa yang Wei Ming dapat daripada orang tua?",
                options: ["Angpao", "Buku", "Kasut", "Bola"],
                correct: 0,
                explanation: "Angpao diberi kepada kanak-kanak sebagai tanda tuah.",
            },
        ],
    },
    Theme {
        key: "medan_selera",
        title: "Lawatan ke Medan Selera",
        questions: &[
            ThemedQuestion {
                question: "Apa yang Imran mahu makan?",
                options: ["Nasi ayam", "Mi goreng", "Roti prata", "Laksa"],
                correct: 0,
                explanation: "Imran mahu makan nasi ayam di medan selera.",
            },
            ThemedQuestion {
                question: "Di mana mereka duduk?",
                options: ["Di tangga", "Di meja", "Dalam kereta", "Atas lantai"],
                correct: 1,
                explanation: "Mereka duduk di meja untuk makan dengan selesa.",
            },
            ThemedQuestion {
                question: "Apa minuman yang Rina mahu?",
                options: ["Air sirap", "Air tembikai", "Teh tarik", "Air limau"],
                correct: 1,
                explanation: "Rina mahu minum air tembikai yang segar.",
            },
        ],
    },
    Theme {
        key: "hari_sukan",
        title: "Hari Sukan",
        questions: &[
            ThemedQuestion {
                question: "Acara apa yang Siti sertai?",
                options: ["Lompat jauh", "Larian 100 meter", "Bola sepak", "Tarik tali"],
                correct: 1,
                explanation: "Siti sertai acara larian 100 meter pada Hari Sukan.",
            },
            ThemedQuestion {
                question: "Apa nasihat Ahmad kepada Siti?",
                options: ["Minum air banyak", "Tidur awal", "Bawa makanan", "Ambil gambar"],
                correct: 0,
                explanation: "Minum air banyak penting untuk elak dehidrasi semasa bersukan.",
            },
            ThemedQuestion {
                question: "Apa cuaca semasa Hari Sukan?",
                options: ["Hujan", "Panas", "Sejuk", "Berangin"],
                correct: 1,
                explanation: "Cuaca panas memerlukan lebih banyak minum air.",
            },
        ],
    },
];

// =============================================================================
// Checking
// =============================================================================

/// Check a 0-based selection. Pure: depends only on `quiz`.
pub fn check(quiz: &Quiz, selected_index: usize) -> QuizCheck {
    if selected_index >= quiz.options.len() {
        return QuizCheck::InvalidSelection;
    }
    QuizCheck::Answered {
        correct: selected_index == quiz.correct_index,
        correct_answer: quiz.correct_meaning.clone(),
    }
}

/// Check a typed 1-based answer such as `"2"`. Anything that is not a number
/// in range is an invalid selection.
pub fn check_input(quiz: &Quiz, input: &str) -> QuizCheck {
    match input.trim().parse::<usize>() {
        Ok(n) if n >= 1 => check(quiz, n - 1),
        _ => QuizCheck::InvalidSelection,
    }
}

// =============================================================================
// Word of the day
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    pub entry: VocabularyEntry,
    pub example: String,
}

pub fn word_of_the_day(lexicon: &Lexicon, rng: &mut dyn RandomSource) -> Option<WordOfTheDay> {
    let entry = lexicon.random_entry(None, rng)?.clone();
    let example = format!(
        "Contoh: Saya suka {}. (Example: I like {}.)",
        entry.term, entry.meaning
    );
    Some(WordOfTheDay { entry, example })
}

// =============================================================================
// QuizGenerator
// =============================================================================

#[derive(Debug, Clone)]
pub struct QuizGenerator {
    option_count: usize,
    min_entries: usize,
}

impl QuizGenerator {
    /// `option_count` is raised to at least 2 and `min_entries` to at least 2.
    pub fn new(option_count: usize, min_entries: usize) -> Self {
        Self {
            option_count: option_count.max(2),
            min_entries: min_entries.max(2),
        }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.option_count, config.min_entries)
    }

    /// Build a vocabulary question from `category`, or from a random
    /// category large enough to fill every option.
    ///
    /// When no category can fill every option, a category with at least
    /// `min_entries` distinct meanings is used and the quiz has fewer options.
    pub fn generate(
        &self,
        lexicon: &Lexicon,
        category: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Result<Quiz, QuizError> {
        if lexicon.len() < 2 {
            return Err(QuizError::NotAvailable(format!(
                "lexicon has {} entries",
                lexicon.len()
            )));
        }

        let chosen = match category {
            Some(name) => {
                let found = lexicon
                    .category(name)
                    .ok_or_else(|| QuizError::UnknownCategory(name.to_string()))?;
                if found.distinct_meanings() < self.min_entries {
                    return Err(QuizError::NotAvailable(format!(
                        "category '{}' has too few words",
                        name
                    )));
                }
                found
            }
            None => self.pick_category(lexicon, rng)?,
        };

        let entry = random::choose(rng, &chosen.entries).ok_or_else(|| {
            QuizError::NotAvailable(format!("category '{}' is empty", chosen.name))
        })?;

        let mut wrong: Vec<&str> = Vec::new();
        for candidate in &chosen.entries {
            let meaning = candidate.meaning.as_str();
            if meaning != entry.meaning && !wrong.contains(&meaning) {
                wrong.push(meaning);
            }
        }

        let mut options: Vec<String> = vec![entry.meaning.clone()];
        for i in random::sample_distinct(rng, wrong.len(), self.option_count - 1) {
            options.push(wrong[i].to_string());
        }
        random::shuffle(rng, &mut options);
        let correct_index = options
            .iter()
            .position(|o| *o == entry.meaning)
            .unwrap_or_default();

        debug!(
            category = %chosen.name,
            word = %entry.term,
            options = options.len(),
            "Quiz generated"
        );

        Ok(Quiz {
            category: chosen.name.clone(),
            prompt_word: entry.term.clone(),
            question: format!(
                "Apakah maksud '{}'? (What does '{}' mean?)",
                entry.term, entry.term
            ),
            correct_meaning: entry.meaning.clone(),
            options,
            correct_index,
            explanation: None,
        })
    }

    fn pick_category<'a>(
        &self,
        lexicon: &'a Lexicon,
        rng: &mut dyn RandomSource,
    ) -> Result<&'a VocabularyCategory, QuizError> {
        let full: Vec<&VocabularyCategory> = lexicon
            .vocabulary()
            .iter()
            .filter(|c| c.distinct_meanings() >= self.option_count)
            .collect();
        let pool = if full.is_empty() {
            lexicon
                .vocabulary()
                .iter()
                .filter(|c| c.distinct_meanings() >= self.min_entries)
                .collect()
        } else {
            full
        };
        random::choose(rng, &pool).copied().ok_or_else(|| {
            QuizError::NotAvailable("no category has enough distinct words".to_string())
        })
    }

    /// Keys of the themed quizzes.
    pub fn themes(&self) -> Vec<&'static str> {
        THEMES.iter().map(|t| t.key).collect()
    }

    /// A question from `theme`, or from a random theme.
    pub fn generate_themed(
        &self,
        theme: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Result<Quiz, QuizError> {
        let theme = match theme {
            Some(key) => THEMES
                .iter()
                .find(|t| t.key == key)
                .ok_or_else(|| QuizError::UnknownCategory(key.to_string()))?,
            None => random::choose(rng, THEMES)
                .ok_or_else(|| QuizError::NotAvailable("no themes".to_string()))?,
        };
        let q = random::choose(rng, theme.questions)
            .ok_or_else(|| QuizError::NotAvailable(format!("theme '{}' is empty", theme.key)))?;

        Ok(Quiz {
            category: theme.key.to_string(),
            prompt_word: q.question.to_string(),
            question: format!("{}: {}", theme.title, q.question),
            correct_meaning: q.options[q.correct].to_string(),
            options: q.options.iter().map(|o| (*o).to_string()).collect(),
            correct_index: q.correct,
            explanation: Some(q.explanation.to_string()),
        })
    }
}

impl Default for QuizGenerator {
    fn default() -> Self {
        Self::new(4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maya_core::{KeywordTables, ScriptedRandom, SeededRandom};

    fn family_lexicon(n: usize) -> Lexicon {
        let words = [
            ("ibu", "mother"),
            ("bapa", "father"),
            ("anak", "child"),
            ("adik", "younger sibling"),
            ("abang", "older brother"),
            ("kakak", "older sister"),
        ];
        let entries = words[..n]
            .iter()
            .map(|(t, m)| VocabularyEntry::new(*t, *m, "keluarga"))
            .collect();
        Lexicon::new(
            vec![VocabularyCategory {
                name: "keluarga".to_string(),
                entries,
            }],
            KeywordTables::builtin(),
        )
    }

    fn assert_well_formed(quiz: &Quiz) {
        assert_eq!(quiz.options[quiz.correct_index], quiz.correct_meaning);
        let mut sorted = quiz.options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), quiz.options.len(), "options not distinct");
        assert_eq!(
            quiz.options.iter().filter(|o| **o == quiz.correct_meaning).count(),
            1
        );
    }

    // ---- Generation ----

    #[test]
    fn test_six_family_words_always_four_options() {
        let lexicon = family_lexicon(6);
        let generator = QuizGenerator::default();
        let mut rng = SeededRandom::new(7);
        for _ in 0..200 {
            let quiz = generator
                .generate(&lexicon, Some("keluarga"), &mut rng)
                .unwrap();
            assert_eq!(quiz.options.len(), 4);
            assert_eq!(quiz.category, "keluarga");
            assert_well_formed(&quiz);
        }
    }

    #[test]
    fn test_random_category_from_builtin() {
        let lexicon = Lexicon::builtin();
        let generator = QuizGenerator::default();
        let mut rng = SeededRandom::new(11);
        for _ in 0..50 {
            let quiz = generator.generate(&lexicon, None, &mut rng).unwrap();
            assert_eq!(quiz.options.len(), 4);
            assert_well_formed(&quiz);
        }
    }

    #[test]
    fn test_degenerate_category_fewer_options() {
        let lexicon = family_lexicon(3);
        let generator = QuizGenerator::default();
        let mut rng = SeededRandom::new(5);
        let quiz = generator.generate(&lexicon, None, &mut rng).unwrap();
        assert_eq!(quiz.options.len(), 3);
        assert_well_formed(&quiz);
    }

    #[test]
    fn test_two_entries_is_minimum() {
        let generator = QuizGenerator::default();
        let mut rng = ScriptedRandom::first();
        let quiz = generator.generate(&family_lexicon(2), None, &mut rng).unwrap();
        assert_eq!(quiz.options.len(), 2);
        assert_well_formed(&quiz);
    }

    #[test]
    fn test_not_available_with_one_entry() {
        let generator = QuizGenerator::default();
        let mut rng = ScriptedRandom::first();
        let result = generator.generate(&family_lexicon(1), None, &mut rng);
        assert!(matches!(result, Err(QuizError::NotAvailable(_))));
    }

    #[test]
    fn test_unknown_category() {
        let generator = QuizGenerator::default();
        let mut rng = ScriptedRandom::first();
        let result = generator.generate(&Lexicon::builtin(), Some("sukan"), &mut rng);
        assert_eq!(result, Err(QuizError::UnknownCategory("sukan".to_string())));
    }

    #[test]
    fn test_duplicate_meanings_not_repeated_in_options() {
        let entries = vec![
            VocabularyEntry::new("kawan", "friend", "x"),
            VocabularyEntry::new("rakan", "friend", "x"),
            VocabularyEntry::new("air", "water", "x"),
            VocabularyEntry::new("api", "fire", "x"),
        ];
        let lexicon = Lexicon::new(
            vec![VocabularyCategory {
                name: "x".to_string(),
                entries,
            }],
            KeywordTables::builtin(),
        );
        let generator = QuizGenerator::default();
        let mut rng = SeededRandom::new(1);
        for _ in 0..50 {
            let quiz = generator.generate(&lexicon, Some("x"), &mut rng).unwrap();
            assert_eq!(quiz.options.len(), 3);
            assert_well_formed(&quiz);
        }
    }

    #[test]
    fn test_scripted_generation_is_deterministic() {
        let lexicon = family_lexicon(6);
        let generator = QuizGenerator::default();
        let a = generator
            .generate(&lexicon, Some("keluarga"), &mut ScriptedRandom::new([2, 0, 1, 3, 1, 0, 2]))
            .unwrap();
        let b = generator
            .generate(&lexicon, Some("keluarga"), &mut ScriptedRandom::new([2, 0, 1, 3, 1, 0, 2]))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.prompt_word, "anak");
        assert_eq!(a.correct_meaning, "child");
    }

    // ---- Checking ----

    #[test]
    fn test_check_correct_and_wrong() {
        let lexicon = family_lexicon(6);
        let mut rng = SeededRandom::new(3);
        let quiz = QuizGenerator::default()
            .generate(&lexicon, Some("keluarga"), &mut rng)
            .unwrap();

        assert!(check(&quiz, quiz.correct_index).is_correct());
        for i in (0..quiz.options.len()).filter(|i| *i != quiz.correct_index) {
            assert_eq!(
                check(&quiz, i),
                QuizCheck::Answered {
                    correct: false,
                    correct_answer: quiz.correct_meaning.clone(),
                }
            );
        }
    }

    #[test]
    fn test_check_out_of_range() {
        let lexicon = family_lexicon(6);
        let mut rng = SeededRandom::new(3);
        let quiz = QuizGenerator::default()
            .generate(&lexicon, Some("keluarga"), &mut rng)
            .unwrap();
        assert_eq!(check(&quiz, 4), QuizCheck::InvalidSelection);
        assert_eq!(check(&quiz, usize::MAX), QuizCheck::InvalidSelection);
    }

    #[test]
    fn test_check_input_one_based() {
        let lexicon = family_lexicon(6);
        let mut rng = SeededRandom::new(3);
        let quiz = QuizGenerator::default()
            .generate(&lexicon, Some("keluarga"), &mut rng)
            .unwrap();
        let typed = (quiz.correct_index + 1).to_string();
        assert!(check_input(&quiz, &typed).is_correct());
        assert!(check_input(&quiz, " 1 ").is_correct() == (quiz.correct_index == 0));
        assert_eq!(check_input(&quiz, "0"), QuizCheck::InvalidSelection);
        assert_eq!(check_input(&quiz, "5"), QuizCheck::InvalidSelection);
        assert_eq!(check_input(&quiz, "dua"), QuizCheck::InvalidSelection);
        assert_eq!(check_input(&quiz, "-1"), QuizCheck::InvalidSelection);
    }

    // ---- Themed quizzes ----

    #[test]
    fn test_themes_listed() {
        let themes = QuizGenerator::default().themes();
        assert_eq!(
            themes,
            vec!["hari_raya", "tahun_baru_cina", "medan_selera", "hari_sukan"]
        );
    }

    #[test]
    fn test_themed_quiz_by_key() {
        let mut rng = ScriptedRandom::first();
        let quiz = QuizGenerator::default()
            .generate_themed(Some("hari_raya"), &mut rng)
            .unwrap();
        assert_eq!(quiz.category, "hari_raya");
        assert_eq!(quiz.correct_meaning, "Baju kurung baru");
        assert!(quiz.explanation.is_some());
        assert!(check(&quiz, 1).is_correct());
        assert_well_formed(&quiz);
    }

    #[test]
    fn test_all_themed_questions_well_formed() {
        let generator = QuizGenerator::default();
        for theme in generator.themes() {
            for i in 0..3 {
                let mut rng = ScriptedRandom::new([i]);
                let quiz = generator.generate_themed(Some(theme), &mut rng).unwrap();
                assert_well_formed(&quiz);
            }
        }
    }

    #[test]
    fn test_unknown_theme() {
        let mut rng = ScriptedRandom::first();
        let result = QuizGenerator::default().generate_themed(Some("zoo"), &mut rng);
        assert!(matches!(result, Err(QuizError::UnknownCategory(_))));
    }

    // ---- Word of the day ----

    #[test]
    fn test_word_of_the_day_example() {
        let lexicon = family_lexicon(6);
        let mut rng = ScriptedRandom::new([0]);
        let word = word_of_the_day(&lexicon, &mut rng).unwrap();
        assert_eq!(word.entry.term, "ibu");
        assert_eq!(word.example, "Contoh: Saya suka ibu. (Example: I like mother.)");
    }

    #[test]
    fn test_word_of_the_day_empty_lexicon() {
        let lexicon = Lexicon::new(vec![], KeywordTables::builtin());
        let mut rng = ScriptedRandom::first();
        assert!(word_of_the_day(&lexicon, &mut rng).is_none());
    }
}
