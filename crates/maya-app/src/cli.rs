//! CLI argument definitions for the Maya application.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Maya - a Malay conversation partner with a Singapore flavour.
#[derive(Parser, Debug)]
#[command(name = "maya", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Seed for reproducible replies.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Training corpus JSON file.
    #[arg(long = "corpus")]
    pub corpus: Option<PathBuf>,

    /// Lexicon JSON file.
    #[arg(long = "lexicon")]
    pub lexicon: Option<PathBuf>,

    /// Speak replies through the log sink.
    #[arg(long = "voice")]
    pub voice: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > MAYA_CONFIG env var > ~/.maya/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("MAYA_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Priority: --seed flag > MAYA_SEED env var > config file value.
    pub fn resolve_seed(&self, config_seed: Option<u64>) -> Option<u64> {
        if let Some(seed) = self.seed {
            return Some(seed);
        }
        if let Ok(val) = std::env::var("MAYA_SEED") {
            if let Ok(seed) = val.parse::<u64>() {
                return Some(seed);
            }
        }
        config_seed
    }

    pub fn resolve_corpus(&self, config_path: Option<String>) -> Option<String> {
        self.corpus
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .or(config_path)
    }

    pub fn resolve_lexicon(&self, config_path: Option<String>) -> Option<String> {
        self.lexicon
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .or(config_path)
    }
}

fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".maya").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".maya").join("config.toml");
    }
    PathBuf::from("config.toml")
}
