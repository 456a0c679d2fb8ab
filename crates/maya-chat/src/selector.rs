//! Response selection.
//!
//! Rules are evaluated top to bottom and the first applicable one wins:
//! first turn, follow-up continuity, question handling, sentiment, topic
//! continuation, then the classifier's corpus category.

use std::fmt;

use maya_core::random::{self, RandomSource};
use maya_core::{ResponsePair, TrainingCorpus};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::Intent;
use crate::error::ChatError;
use crate::extractor::{Analysis, Sentiment};
use crate::matcher::PhraseMatcher;
use crate::responses::{CannedPool, ResponseBook};

/// The rule that produced a reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRule {
    FirstTurn,
    FollowUp,
    TargetedAnswer,
    WellBeing,
    InterestingQuestion,
    Enthusiastic,
    Supportive,
    TopicContinuation,
    CorpusCategory,
    Generic,
    EmptyInput,
    LastResort,
}

impl fmt::Display for SelectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionRule::FirstTurn => "first_turn",
            SelectionRule::FollowUp => "follow_up",
            SelectionRule::TargetedAnswer => "targeted_answer",
            SelectionRule::WellBeing => "well_being",
            SelectionRule::InterestingQuestion => "interesting_question",
            SelectionRule::Enthusiastic => "enthusiastic",
            SelectionRule::Supportive => "supportive",
            SelectionRule::TopicContinuation => "topic_continuation",
            SelectionRule::CorpusCategory => "corpus_category",
            SelectionRule::Generic => "generic",
            SelectionRule::EmptyInput => "empty_input",
            SelectionRule::LastResort => "last_resort",
        };
        f.write_str(s)
    }
}

/// Everything the selector looks at for one turn.
#[derive(Debug, Clone, Copy)]
pub struct SelectionInput<'a> {
    pub text: &'a str,
    /// 1-based turn number of this exchange.
    pub turn: u64,
    pub intent: &'a Intent,
    pub analysis: &'a Analysis,
    /// Current topic after this turn's update.
    pub current_topic: Option<&'a str>,
    pub last_bot_text: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub reply: ResponsePair,
    pub rule: SelectionRule,
}

#[derive(Debug, Clone)]
struct CompiledFollowUp {
    cues: PhraseMatcher,
    topic: String,
    replies: Vec<ResponsePair>,
}

#[derive(Debug, Clone)]
struct CompiledTarget {
    question: PhraseMatcher,
    topic: Option<String>,
    subjects: PhraseMatcher,
    reply: ResponsePair,
}

/// The decision core. Holds the response tables with their cue phrases
/// pre-compiled.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    book: ResponseBook,
    follow_ups: Vec<CompiledFollowUp>,
    targets: Vec<CompiledTarget>,
    well_being: PhraseMatcher,
}

impl ResponseSelector {
    pub fn new(book: ResponseBook) -> Self {
        let follow_ups = book
            .follow_ups
            .iter()
            .map(|f| CompiledFollowUp {
                cues: PhraseMatcher::new(&f.cues),
                topic: f.topic.clone(),
                replies: f.replies.clone(),
            })
            .collect();
        let targets = book
            .targeted
            .iter()
            .map(|t| CompiledTarget {
                question: PhraseMatcher::new(&t.question_words),
                topic: t.topic.clone(),
                subjects: PhraseMatcher::new(&t.subjects),
                reply: t.reply.clone(),
            })
            .collect();
        let well_being = PhraseMatcher::new(&book.well_being_cues);

        Self {
            book,
            follow_ups,
            targets,
            well_being,
        }
    }

    pub fn book(&self) -> &ResponseBook {
        &self.book
    }

    /// Pick a reply for one turn.
    ///
    /// Errors only when a pool the chosen rule needs is empty. Callers turn
    /// that into [`ResponseSelector::last_resort`].
    pub fn select(
        &self,
        input: &SelectionInput<'_>,
        corpus: &TrainingCorpus,
        rng: &mut dyn RandomSource,
    ) -> Result<Selection, ChatError> {
        // 1. First turn
        if input.turn == 1 {
            return self.from_pool(CannedPool::Greeting, SelectionRule::FirstTurn, rng);
        }

        // 2. Follow-up continuity
        if let Some(last) = input.last_bot_text {
            for follow_up in &self.follow_ups {
                if follow_up.cues.is_match(last) && input.analysis.has_topic(&follow_up.topic) {
                    let reply = random::choose(rng, &follow_up.replies)
                        .ok_or_else(|| ChatError::EmptyPool(format!("follow-up {}", follow_up.topic)))?;
                    return Ok(self.selected(reply.clone(), SelectionRule::FollowUp));
                }
            }
        }

        // 3. Questions
        if input.analysis.contains_question {
            let text = input.text.to_lowercase();
            for target in &self.targets {
                let subject = target
                    .topic
                    .as_deref()
                    .is_some_and(|t| input.analysis.has_topic(t))
                    || target.subjects.is_match(&text);
                if subject && target.question.is_match(&text) {
                    return Ok(self.selected(target.reply.clone(), SelectionRule::TargetedAnswer));
                }
            }
            if self.well_being.is_match(&text) {
                return self.from_pool(CannedPool::WellBeing, SelectionRule::WellBeing, rng);
            }
            return self.from_pool(
                CannedPool::InterestingQuestion,
                SelectionRule::InterestingQuestion,
                rng,
            );
        }

        // 4. Sentiment
        match input.analysis.sentiment {
            Sentiment::Positive => {
                return self.from_pool(CannedPool::Enthusiastic, SelectionRule::Enthusiastic, rng)
            }
            Sentiment::Negative => {
                return self.from_pool(CannedPool::Supportive, SelectionRule::Supportive, rng)
            }
            Sentiment::Questioning | Sentiment::Neutral => {}
        }

        // 5. Topic continuation
        if let Some(topic) = input.current_topic {
            let replies = self.book.continuation(topic);
            let reply = random::choose(rng, replies)
                .ok_or_else(|| ChatError::EmptyPool(format!("continuation {}", topic)))?;
            return Ok(self.selected(reply.clone(), SelectionRule::TopicContinuation));
        }

        // 6. Corpus category, then generic
        let pairs = corpus.pairs(input.intent.category.as_str());
        if let Some(pair) = random::choose(rng, pairs) {
            return Ok(self.selected(pair.reply(), SelectionRule::CorpusCategory));
        }
        self.from_pool(CannedPool::Generic, SelectionRule::Generic, rng)
    }

    /// Random reply from one of the canned pools.
    pub fn canned(
        &self,
        pool: CannedPool,
        rng: &mut dyn RandomSource,
    ) -> Result<ResponsePair, ChatError> {
        random::choose(rng, self.book.pool(pool))
            .cloned()
            .ok_or_else(|| ChatError::EmptyPool(format!("{:?}", pool)))
    }

    pub fn last_resort(&self) -> ResponsePair {
        self.book.last_resort()
    }

    fn from_pool(
        &self,
        pool: CannedPool,
        rule: SelectionRule,
        rng: &mut dyn RandomSource,
    ) -> Result<Selection, ChatError> {
        let reply = self.canned(pool, rng)?;
        Ok(self.selected(reply, rule))
    }

    fn selected(&self, reply: ResponsePair, rule: SelectionRule) -> Selection {
        debug!(rule = %rule, "Response selected");
        Selection { reply, rule }
    }
}
