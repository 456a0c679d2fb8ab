//! The per-session dialogue engine.
//!
//! [`Knowledge`] holds everything read-only: lexicon, corpus and the compiled
//! classifiers and response tables. It is built once and shared across
//! sessions behind an `Arc`. Each [`ChatEngine`] owns one
//! [`ConversationState`] and processes its exchanges strictly in order.

use std::path::Path;
use std::sync::Arc;

use maya_core::config::MayaConfig;
use maya_core::random::{RandomSource, SeededRandom};
use maya_core::{ContextEntry, Lexicon, Quiz, QuizCheck, ResponsePair, TrainingCorpus};
use serde::Serialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::classifier::{Intent, IntentCategory, IntentClassifier};
use crate::context::ContextTracker;
use crate::error::{ChatError, QuizError};
use crate::extractor::{Analysis, SentimentExtractor};
use crate::grammar::{GrammarChecker, GrammarFeedback};
use crate::matcher::PhraseMatcher;
use crate::quiz::{self, QuizGenerator, WordOfTheDay};
use crate::responses::{CannedPool, ResponseBook};
use crate::roleplay::{RoleplaySession, RoleplayTurn, Scenario};
use crate::selector::{ResponseSelector, SelectionInput, SelectionRule};
use crate::snapshot::ContextSnapshot;
use crate::voice::{SilentSink, SpeechSink};

/// Number of recent user turns looked at by [`ChatEngine::context_summary`].
const SUMMARY_TURNS: usize = 3;

// =============================================================================
// Knowledge
// =============================================================================

/// Immutable tables shared by every session.
#[derive(Debug)]
pub struct Knowledge {
    lexicon: Lexicon,
    corpus: TrainingCorpus,
    classifier: IntentClassifier,
    extractor: SentimentExtractor,
    selector: ResponseSelector,
    quiz: QuizGenerator,
    grammar: GrammarChecker,
    dishes: PhraseMatcher,
}

impl Knowledge {
    pub fn new(
        lexicon: Lexicon,
        corpus: TrainingCorpus,
        book: ResponseBook,
        quiz: QuizGenerator,
    ) -> Self {
        let classifier = IntentClassifier::new(&lexicon, &corpus);
        let extractor = SentimentExtractor::new(&lexicon);
        let dishes = PhraseMatcher::new(&lexicon.keywords().dishes);
        Self {
            lexicon,
            corpus,
            classifier,
            extractor,
            selector: ResponseSelector::new(book),
            quiz,
            grammar: GrammarChecker::new(),
            dishes,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            Lexicon::builtin(),
            TrainingCorpus::builtin(),
            ResponseBook::builtin(),
            QuizGenerator::default(),
        )
    }

    /// Load the configured resources. Missing or invalid files fall back to
    /// the built-in tables, so this never fails.
    pub fn from_config(config: &MayaConfig) -> Self {
        let lexicon = Lexicon::load_or_builtin(config.engine.lexicon_path.as_deref().map(Path::new));
        let corpus =
            TrainingCorpus::load_or_builtin(config.engine.corpus_path.as_deref().map(Path::new));
        info!(
            vocabulary = lexicon.len(),
            training_pairs = corpus.len(),
            "Knowledge loaded"
        );
        Self::new(
            lexicon,
            corpus,
            ResponseBook::builtin(),
            QuizGenerator::from_config(&config.quiz),
        )
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn corpus(&self) -> &TrainingCorpus {
        &self.corpus
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &SentimentExtractor {
        &self.extractor
    }

    pub fn selector(&self) -> &ResponseSelector {
        &self.selector
    }

    pub fn quiz(&self) -> &QuizGenerator {
        &self.quiz
    }

    pub fn grammar(&self) -> &GrammarChecker {
        &self.grammar
    }
}

// =============================================================================
// ConversationState
// =============================================================================

/// Mutable state of one session.
#[derive(Debug, Clone)]
pub struct ConversationState {
    session_id: Uuid,
    turn: u64,
    current_topic: Option<String>,
    tracker: ContextTracker,
    quiz: Option<Quiz>,
    roleplay: Option<RoleplaySession>,
    favorite_food: Option<String>,
}

impl ConversationState {
    pub fn new(context_capacity: usize) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            turn: 0,
            current_topic: None,
            tracker: ContextTracker::new(context_capacity),
            quiz: None,
            roleplay: None,
            favorite_food: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Number of completed exchanges.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.current_topic.as_deref()
    }

    pub fn tracker(&self) -> &ContextTracker {
        &self.tracker
    }

    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn favorite_food(&self) -> Option<&str> {
        self.favorite_food.as_deref()
    }

    fn next_turn(&mut self) -> u64 {
        self.turn += 1;
        self.turn
    }
}

// =============================================================================
// Replies and statistics
// =============================================================================

/// A reply together with how it was chosen.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: ResponsePair,
    pub rule: SelectionRule,
    pub intent: Intent,
    pub analysis: Analysis,
    /// Turn number of this exchange. Unchanged for blank input.
    pub turn: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub total_turns: u64,
    pub context_entries: usize,
    pub vocabulary_size: usize,
    pub current_topic: Option<String>,
    pub quiz_active: bool,
    pub roleplay: Option<String>,
    pub favorite_food: Option<String>,
}

// =============================================================================
// ChatEngine
// =============================================================================

pub struct ChatEngine {
    knowledge: Arc<Knowledge>,
    state: ConversationState,
    rng: Box<dyn RandomSource>,
    sink: Box<dyn SpeechSink>,
    voice: bool,
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("state", &self.state)
            .field("voice", &self.voice)
            .finish_non_exhaustive()
    }
}

impl ChatEngine {
    pub fn new(
        knowledge: Arc<Knowledge>,
        context_capacity: usize,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            knowledge,
            state: ConversationState::new(context_capacity),
            rng,
            sink: Box::new(SilentSink),
            voice: false,
        }
    }

    /// Engine seeded from `engine.seed` when set, otherwise from entropy.
    pub fn from_config(knowledge: Arc<Knowledge>, config: &MayaConfig) -> Self {
        let rng = match config.engine.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::new(knowledge, config.engine.context_capacity, Box::new(rng))
    }

    pub fn with_sink(mut self, sink: Box<dyn SpeechSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn knowledge(&self) -> &Arc<Knowledge> {
        &self.knowledge
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn turn(&self) -> u64 {
        self.state.turn
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.state.current_topic()
    }

    pub fn favorite_food(&self) -> Option<&str> {
        self.state.favorite_food()
    }

    pub fn set_voice(&mut self, enabled: bool) {
        self.voice = enabled;
        info!(enabled, "Voice output toggled");
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice
    }

    // ---- Exchange ----

    /// Answer one line of user input. Never fails and never returns a blank
    /// pair.
    pub fn respond(&mut self, text: &str) -> ResponsePair {
        self.respond_with_trace(text).response
    }

    pub fn respond_with_trace(&mut self, text: &str) -> ChatReply {
        let knowledge = Arc::clone(&self.knowledge);
        let intent = knowledge.classifier.classify(text);
        let analysis = knowledge.extractor.analyze(text);

        if intent.category == IntentCategory::Empty {
            let response = knowledge
                .selector
                .canned(CannedPool::EmptyPrompt, self.rng.as_mut())
                .unwrap_or_else(|_| knowledge.selector.last_resort());
            self.speak(&response);
            return ChatReply {
                response,
                rule: SelectionRule::EmptyInput,
                intent,
                analysis,
                turn: self.state.turn,
            };
        }

        let turn = self.state.next_turn();
        if turn > 1 {
            if let Some(topic) = analysis.topics.first() {
                self.state.current_topic = Some(topic.clone());
            }
        }
        if let Some(dish) = knowledge.dishes.first_match(text) {
            self.state.favorite_food = Some(dish.to_string());
        }

        let input = SelectionInput {
            text,
            turn,
            intent: &intent,
            analysis: &analysis,
            current_topic: self.state.current_topic.as_deref(),
            last_bot_text: self.state.tracker.last_bot_text(),
        };
        let (response, rule) =
            match knowledge
                .selector
                .select(&input, &knowledge.corpus, self.rng.as_mut())
            {
                Ok(selection) if !selection.reply.is_blank() => (selection.reply, selection.rule),
                Ok(selection) => {
                    error!(turn, rule = %selection.rule, "Blank reply selected, using last resort");
                    (knowledge.selector.last_resort(), SelectionRule::LastResort)
                }
                Err(e) => {
                    error!(turn, error = %e, "Response selection failed, using last resort");
                    (knowledge.selector.last_resort(), SelectionRule::LastResort)
                }
            };

        self.state.tracker.record(text, &response.native, turn);
        debug!(
            turn,
            intent = %intent.category,
            confidence = intent.confidence,
            sentiment = %analysis.sentiment,
            topic = ?self.state.current_topic,
            rule = %rule,
            "Exchange complete"
        );
        self.speak(&response);

        ChatReply {
            response,
            rule,
            intent,
            analysis,
            turn,
        }
    }

    fn speak(&self, response: &ResponsePair) {
        if self.voice {
            self.sink.speak(&response.native);
        }
    }

    // ---- Quiz ----

    /// Start a vocabulary quiz. Replaces any quiz already in progress.
    pub fn start_quiz(&mut self, category: Option<&str>) -> Result<Quiz, QuizError> {
        let quiz = self
            .knowledge
            .quiz
            .generate(&self.knowledge.lexicon, category, self.rng.as_mut())?;
        self.state.quiz = Some(quiz.clone());
        Ok(quiz)
    }

    pub fn start_themed_quiz(&mut self, theme: Option<&str>) -> Result<Quiz, QuizError> {
        let quiz = self.knowledge.quiz.generate_themed(theme, self.rng.as_mut())?;
        self.state.quiz = Some(quiz.clone());
        Ok(quiz)
    }

    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.state.active_quiz()
    }

    /// Answer the active quiz with a typed 1-based choice. The quiz stays
    /// active after an invalid selection so the caller can prompt again.
    pub fn answer_quiz(&mut self, input: &str) -> Result<QuizCheck, ChatError> {
        let quiz = self.state.quiz.as_ref().ok_or(ChatError::NoActiveQuiz)?;
        let result = quiz::check_input(quiz, input);
        if result != QuizCheck::InvalidSelection {
            debug!(correct = result.is_correct(), "Quiz answered");
            self.state.quiz = None;
        }
        Ok(result)
    }

    pub fn cancel_quiz(&mut self) -> Option<Quiz> {
        self.state.quiz.take()
    }

    // ---- Context ----

    /// Context log, oldest first.
    pub fn export_context(&self) -> Vec<ContextEntry> {
        self.state.tracker.export()
    }

    /// Replace the context log. The turn counter never moves backwards.
    pub fn import_context(&mut self, entries: Vec<ContextEntry>) {
        self.state.tracker.import(entries);
        if let Some(last) = self.state.tracker.last_turn_index() {
            self.state.turn = self.state.turn.max(last);
        }
        info!(
            entries = self.state.tracker.len(),
            turn = self.state.turn,
            "Context imported"
        );
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<(), ChatError> {
        ContextSnapshot::new(self.state.session_id, self.export_context()).save(path)?;
        Ok(())
    }

    /// Import the snapshot at `path` if there is a usable one. Returns the
    /// number of entries restored.
    pub fn restore_snapshot(&mut self, path: &Path) -> usize {
        let entries = ContextSnapshot::load_entries_or_empty(path);
        if entries.is_empty() {
            return 0;
        }
        self.import_context(entries);
        self.state.tracker.len()
    }

    /// Distinct categories of the last few user turns.
    pub fn context_summary(&self) -> String {
        if self.state.tracker.is_empty() {
            return "No context available".to_string();
        }
        let mut topics: Vec<String> = Vec::new();
        for entry in self.state.tracker.recent(SUMMARY_TURNS) {
            let category = self.knowledge.classifier.classify(&entry.user_text).category;
            if matches!(category, IntentCategory::Default | IntentCategory::Empty) {
                continue;
            }
            let name = category.as_str().to_string();
            if !topics.contains(&name) {
                topics.push(name);
            }
        }
        if topics.is_empty() {
            "General conversation".to_string()
        } else {
            format!("Recent topics: {}", topics.join(", "))
        }
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            total_turns: self.state.turn,
            context_entries: self.state.tracker.len(),
            vocabulary_size: self.knowledge.lexicon.len(),
            current_topic: self.state.current_topic.clone(),
            quiz_active: self.state.quiz.is_some(),
            roleplay: self
                .state
                .roleplay
                .as_ref()
                .map(|r| r.scenario().key.to_string()),
            favorite_food: self.state.favorite_food.clone(),
        }
    }

    pub fn word_of_the_day(&mut self) -> Option<WordOfTheDay> {
        quiz::word_of_the_day(&self.knowledge.lexicon, self.rng.as_mut())
    }

    pub fn grammar_feedback(&self, text: &str) -> GrammarFeedback {
        self.knowledge.grammar.feedback(text)
    }

    // ---- Role-play ----

    /// Start `key` and return its opening line.
    pub fn start_roleplay(&mut self, key: &str) -> Result<ResponsePair, ChatError> {
        let session = RoleplaySession::start(key)?;
        let opening = session.opening();
        info!(scenario = key, "Role-play started");
        self.state.roleplay = Some(session);
        self.speak(&opening);
        Ok(opening)
    }

    pub fn active_roleplay(&self) -> Option<&'static Scenario> {
        self.state.roleplay.as_ref().map(|r| r.scenario())
    }

    /// Reply inside the active scenario. The exchange is logged like any other.
    pub fn roleplay_reply(&mut self, text: &str) -> Result<ResponsePair, ChatError> {
        let session = self
            .state
            .roleplay
            .as_ref()
            .ok_or(ChatError::NoActiveScenario)?;
        let reply = match session.reply(text, self.rng.as_mut())? {
            RoleplayTurn::Reply(reply) => reply,
            RoleplayTurn::Ended(reply) => {
                self.state.roleplay = None;
                info!("Role-play ended");
                reply
            }
        };
        let turn = self.state.next_turn();
        self.state.tracker.record(text, &reply.native, turn);
        self.speak(&reply);
        Ok(reply)
    }

    pub fn end_roleplay(&mut self) -> Result<ResponsePair, ChatError> {
        self.state
            .roleplay
            .take()
            .ok_or(ChatError::NoActiveScenario)?;
        info!("Role-play ended");
        Ok(crate::roleplay::end_reply())
    }
}

// =============================================================================
// Tests
// =============================================================================
