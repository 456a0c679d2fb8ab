use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{MayaError, Result};

/// Top-level configuration for the Maya dialogue engine.
///
/// Loaded from `~/.maya/config.toml` by default. Every section is optional;
/// missing keys take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MayaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

impl MayaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: MayaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MayaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Display name of the bot.
    pub bot_name: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bot_name: "Maya".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Dialogue engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of recent exchanges kept by the context tracker.
    pub context_capacity: usize,
    /// Optional JSON training corpus. Built-in pairs are used when absent or invalid.
    pub corpus_path: Option<String>,
    /// Optional JSON lexicon. Built-in vocabulary is used when absent or invalid.
    pub lexicon_path: Option<String>,
    /// Fixed seed for the random source. Entropy-seeded when unset.
    pub seed: Option<u64>,
    /// Input longer than this (in characters) is truncated by the sanitizer.
    pub max_input_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            context_capacity: 5,
            corpus_path: None,
            lexicon_path: None,
            seed: None,
            max_input_chars: 500,
        }
    }
}

/// Vocabulary quiz settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Options per question, including the correct one.
    pub option_count: usize,
    /// Smallest category a degenerate quiz may still be drawn from.
    pub min_entries: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            option_count: 4,
            min_entries: 2,
        }
    }
}

/// Context snapshot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Restore the context log on start and save it on exit.
    pub enabled: bool,
    /// Snapshot file location.
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "maya_context.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = MayaConfig::default();
        assert_eq!(config.general.bot_name, "Maya");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.engine.context_capacity, 5);
        assert!(config.engine.corpus_path.is_none());
        assert!(config.engine.lexicon_path.is_none());
        assert!(config.engine.seed.is_none());
        assert_eq!(config.engine.max_input_chars, 500);
        assert_eq!(config.quiz.option_count, 4);
        assert_eq!(config.quiz.min_entries, 2);
        assert!(!config.snapshot.enabled);
        assert_eq!(config.snapshot.path, "maya_context.json");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
bot_name = "Siti"
log_level = "debug"

[engine]
context_capacity = 8
corpus_path = "data/malay_training_data.json"
seed = 42

[quiz]
option_count = 3
"#;
        let file = create_temp_config(content);
        let config = MayaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.bot_name, "Siti");
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.engine.context_capacity, 8);
        assert_eq!(
            config.engine.corpus_path.as_deref(),
            Some("data/malay_training_data.json")
        );
        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.quiz.option_count, 3);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = MayaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.bot_name, "Maya");
        assert_eq!(config.engine.context_capacity, 5);
        assert_eq!(config.quiz.option_count, 4);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = MayaConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.engine.context_capacity, 5);
        assert_eq!(config.general.bot_name, "Maya");
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let file = create_temp_config("this is {{ not valid TOML");
        let config = MayaConfig::load_or_default(file.path());
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = create_temp_config("[engine]\ncontext_capacity = \"five\"");
        let result = MayaConfig::load(file.path());
        assert!(matches!(result, Err(MayaError::Config(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = MayaConfig::default();
        config.engine.seed = Some(7);
        config.snapshot.enabled = true;
        config.save(&path).unwrap();

        let reloaded = MayaConfig::load(&path).unwrap();
        assert_eq!(reloaded.engine.seed, Some(7));
        assert!(reloaded.snapshot.enabled);
        assert_eq!(reloaded.engine.context_capacity, 5);
    }

    #[test]
    fn test_config_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        MayaConfig::default().save(&path).unwrap();

        assert!(path.exists());
        let reloaded = MayaConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.log_level, "info");
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = MayaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.bot_name, "Maya");
        assert_eq!(config.engine.max_input_chars, 500);
        assert!(!config.snapshot.enabled);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = MayaConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let deserialized: MayaConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.general.log_level, config.general.log_level);
        assert_eq!(
            deserialized.engine.context_capacity,
            config.engine.context_capacity
        );
        assert_eq!(deserialized.snapshot.path, config.snapshot.path);
    }
}
