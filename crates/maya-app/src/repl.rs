//! Line commands understood by the interactive loop.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quiz(Option<String>),
    ThemedQuiz(Option<String>),
    /// Lists the cultural quiz themes.
    Themes,
    /// Gives up on the active quiz.
    Skip,
    Word,
    Context,
    Stats,
    /// `None` lists the scenarios.
    Roleplay(Option<String>),
    EndRoleplay,
    Voice(bool),
    Save,
    Quit,
    /// Anything else goes to the engine.
    Chat(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();
        let mut words = lower.split_whitespace();
        let head = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        match (head, rest.as_slice()) {
            ("help", []) => Command::Help,
            ("quit", []) | ("exit", []) => Command::Quit,
            ("word", []) => Command::Word,
            ("context", []) => Command::Context,
            ("stats", []) => Command::Stats,
            ("save", []) => Command::Save,
            ("skip", []) => Command::Skip,
            ("voice", ["on"]) => Command::Voice(true),
            ("voice", ["off"]) => Command::Voice(false),
            ("end", ["roleplay"]) => Command::EndRoleplay,
            ("quiz", []) => Command::Quiz(None),
            ("quiz", ["themes"]) => Command::Themes,
            ("quiz", ["theme"]) => Command::ThemedQuiz(None),
            ("quiz", ["theme", name]) => Command::ThemedQuiz(Some((*name).to_string())),
            ("quiz", [category]) => Command::Quiz(Some((*category).to_string())),
            ("roleplay", []) => Command::Roleplay(None),
            ("roleplay", [key]) => Command::Roleplay(Some((*key).to_string())),
            _ => Command::Chat(trimmed.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  help                  show this list
  quiz [category]       vocabulary quiz
  quiz theme [name]     cultural quiz
  quiz themes           list the cultural quiz themes
  skip                  give up on the current quiz
  word                  word of the day
  context               recent conversation topics
  stats                 session statistics
  roleplay [scenario]   start a role-play (kopitiam, shopping, mrt, void_deck)
  end roleplay          stop the role-play
  voice on|off          toggle spoken replies
  save                  save the conversation context
  quit / exit           leave";
