//! Maya application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Install the tracing subscriber
//! 3. Load the lexicon and training corpus (built-in fallback)
//! 4. Run an interactive stdin loop against one chat engine

mod cli;
mod repl;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use maya_chat::{
    sanitize, roleplay, ChatEngine, ChatReply, GrammarFeedback, Knowledge, LogSink, QuizError,
};
use maya_core::config::MayaConfig;
use maya_core::{Quiz, QuizCheck, ResponsePair};

use cli::CliArgs;
use repl::{Command, HELP};

fn print_reply(name: &str, reply: &ResponsePair) {
    println!("{}: {}", name, reply.native);
    println!("      ({})", reply.translation);
    if let Some(ref hint) = reply.pronunciation {
        println!("      [{}]", hint);
    }
}

fn print_quiz(quiz: &Quiz) {
    println!("\nQUIZ - {}", quiz.category.to_uppercase());
    println!("{}", quiz.question);
    for (i, option) in quiz.options.iter().enumerate() {
        println!("   {}. {}", i + 1, option);
    }
    println!("   (Type the number of your answer)");
}

fn print_feedback(feedback: &GrammarFeedback) {
    if !feedback.corrections.is_empty() {
        println!("\nGrammar Feedback:");
        for c in &feedback.corrections {
            println!("   - {}", c.explanation);
            println!("     {} -> {}", c.mistake, c.correction);
        }
    }
    if let Some(ref tip) = feedback.pronunciation_tip {
        println!("\nPronunciation Tip: {}", tip);
    }
}

fn print_quiz_error(err: &QuizError) {
    match err {
        QuizError::NotAvailable(_) => println!("Quiz belum tersedia. (Quizzes are not available yet.)"),
        QuizError::UnknownCategory(name) => {
            println!("Kategori '{}' tidak wujud. (Unknown category.)", name)
        }
    }
}

struct Session {
    engine: ChatEngine,
    name: String,
    snapshot_path: PathBuf,
    explanation: Option<String>,
}

impl Session {
    /// Handle one line. Returns `false` when the user asked to leave.
    fn handle(&mut self, line: &str, max_chars: usize) -> bool {
        let command = Command::parse(line);
        if command == Command::Quit {
            return false;
        }

        if self.engine.active_quiz().is_some() {
            if command == Command::Skip {
                if let Some(quiz) = self.engine.cancel_quiz() {
                    println!("Quiz skipped. The answer was: {}", quiz.correct_meaning);
                }
                self.explanation = None;
            } else {
                self.answer(line);
            }
            return true;
        }

        match command {
            Command::Help => println!("{}", HELP),
            Command::Quiz(category) => match self.engine.start_quiz(category.as_deref()) {
                Ok(quiz) => {
                    self.explanation = None;
                    print_quiz(&quiz);
                }
                Err(e) => print_quiz_error(&e),
            },
            Command::ThemedQuiz(theme) => match self.engine.start_themed_quiz(theme.as_deref()) {
                Ok(quiz) => {
                    self.explanation = quiz.explanation.clone();
                    print_quiz(&quiz);
                }
                Err(e) => print_quiz_error(&e),
            },
            Command::Themes => {
                for theme in self.engine.knowledge().quiz().themes() {
                    println!("   {}", theme);
                }
            }
            Command::Skip => println!("Tiada kuiz. (No quiz is active.)"),
            Command::Word => match self.engine.word_of_the_day() {
                Some(word) => {
                    println!("\nWord of the day: {} - {}", word.entry.term, word.entry.meaning);
                    println!("   {}", word.example);
                }
                None => println!("Tiada perkataan. (No vocabulary loaded.)"),
            },
            Command::Context => println!("{}", self.engine.context_summary()),
            Command::Stats => match serde_json::to_string_pretty(&self.engine.stats()) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::warn!(error = %e, "Failed to render stats"),
            },
            Command::Roleplay(None) => {
                for s in roleplay::scenarios() {
                    println!("   {:<10} {}", s.key, s.title);
                }
            }
            Command::Roleplay(Some(key)) => match self.engine.start_roleplay(&key) {
                Ok(opening) => {
                    if let Some(s) = self.engine.active_roleplay() {
                        println!("\nROLE-PLAY: {}", s.title);
                        println!("Anda adalah: {}", s.user_role);
                        println!("Saya adalah: {}", s.bot_role);
                        println!("Vocabulary: {}", s.vocabulary.join(", "));
                    }
                    println!("{}: {}", self.name, opening.native);
                    println!("      (Type 'end roleplay' to stop)");
                }
                Err(e) => println!("{}", e),
            },
            Command::EndRoleplay => match self.engine.end_roleplay() {
                Ok(reply) => print_reply(&self.name, &reply),
                Err(e) => println!("{}", e),
            },
            Command::Voice(on) => {
                self.engine.set_voice(on);
                println!("Voice output {}", if on { "on" } else { "off" });
            }
            Command::Save => match self.engine.save_snapshot(&self.snapshot_path) {
                Ok(()) => println!("Saved to {}", self.snapshot_path.display()),
                Err(e) => println!("{}", e),
            },
            Command::Chat(text) => self.chat(&sanitize(&text, max_chars)),
            Command::Quit => return false,
        }
        true
    }

    fn chat(&mut self, text: &str) {
        print_feedback(&self.engine.grammar_feedback(text));

        if self.engine.active_roleplay().is_some() {
            match self.engine.roleplay_reply(text) {
                Ok(reply) => print_reply(&self.name, &reply),
                Err(e) => tracing::error!(error = %e, "Role-play reply failed"),
            }
            return;
        }

        let ChatReply { response, rule, .. } = self.engine.respond_with_trace(text);
        tracing::debug!(rule = %rule, "Reply");
        print_reply(&self.name, &response);
    }

    fn answer(&mut self, line: &str) {
        match self.engine.answer_quiz(line) {
            Ok(QuizCheck::Answered {
                correct,
                correct_answer,
            }) => {
                if correct {
                    println!("Betul! Correct!");
                } else {
                    println!("Salah. The answer is: {}", correct_answer);
                }
                if let Some(explanation) = self.explanation.take() {
                    println!("   {}", explanation);
                }
            }
            Ok(QuizCheck::InvalidSelection) => {
                println!("Sila taip nombor pilihan. (Please type the option number.)")
            }
            Err(e) => tracing::warn!(error = %e, "Quiz answer ignored"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = MayaConfig::load_or_default(&config_file);
    config.engine.seed = args.resolve_seed(config.engine.seed);
    config.engine.corpus_path = args.resolve_corpus(config.engine.corpus_path.take());
    config.engine.lexicon_path = args.resolve_lexicon(config.engine.lexicon_path.take());

    // Tracing. RUST_LOG overrides the configured level.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting Maya v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let knowledge = Arc::new(Knowledge::from_config(&config));
    let mut engine = ChatEngine::from_config(knowledge, &config).with_sink(Box::new(LogSink));
    engine.set_voice(args.voice);

    let snapshot_path = PathBuf::from(&config.snapshot.path);
    if config.snapshot.enabled {
        let restored = engine.restore_snapshot(&snapshot_path);
        tracing::info!(entries = restored, "Context restored");
    }

    let mut session = Session {
        engine,
        name: config.general.bot_name.clone(),
        snapshot_path,
        explanation: None,
    };

    println!(
        "Selamat datang! Saya {}. Type 'help' for commands, 'quit' to leave.",
        session.name
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nAnda: ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if !session.handle(&line?, config.engine.max_input_chars) {
            break;
        }
    }

    if config.snapshot.enabled {
        if let Err(e) = session.engine.save_snapshot(&session.snapshot_path) {
            tracing::warn!(error = %e, "Failed to save context snapshot");
        }
    }
    println!("Selamat tinggal! Jumpa lagi!");
    Ok(())
}
