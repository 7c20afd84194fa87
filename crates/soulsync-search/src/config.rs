use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::recommend::DEFAULT_LIMIT;
use crate::stopwords::{StopWordList, StopWords};

/// Configuration for soulsync.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SOULSYNC_* prefix)
/// 3. Config file (~/.config/soulsync/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the song dataset (CSV).
    ///
    /// Can be set via:
    /// - CLI: --data /path/to/songs.csv
    /// - ENV: SOULSYNC_DATASET_PATH
    /// - Config: dataset_path = "/path/to/songs.csv"
    /// - Default: spotify_songs.csv in the working directory
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Number of songs returned per query.
    ///
    /// ENV: SOULSYNC_LIMIT
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    pub limit: usize,

    /// Stop-word list matching the catalog's language.
    #[serde(default)]
    pub stop_words: StopWordList,

    /// Additional words to ignore when comparing songs.
    ///
    /// ENV: SOULSYNC_EXTRA_STOP_WORDS, comma-separated
    #[serde(default, deserialize_with = "deserialize_word_list")]
    pub extra_stop_words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            limit: default_limit(),
            stop_words: StopWordList::default(),
            extra_stop_words: Vec::new(),
        }
    }
}

/// Prefix of the environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "soulsync";

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/soulsync/config.toml
    /// Reads environment variables with SOULSYNC_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path(), ENV_PREFIX)
    }

    /// Load configuration from `config_path` (skipped when absent), then
    /// environment variables named `<ENV_PREFIX>_<KEY>`.
    pub fn load_from(config_path: &Path, env_prefix: &str) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level(env_prefix);
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        log::debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Load configuration, overriding the dataset path when the --data CLI
    /// flag is provided.
    pub fn load_with_dataset(dataset_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self::load()?.with_dataset(dataset_path))
    }

    /// Apply the --data CLI override, if any.
    #[must_use]
    pub fn with_dataset(mut self, dataset_path: Option<PathBuf>) -> Self {
        if let Some(path) = dataset_path {
            self.dataset_path = path;
        }
        self
    }

    /// The stop-word set described by this configuration.
    #[must_use]
    pub fn stop_words(&self) -> StopWords {
        StopWords::from_list(self.stop_words).with_extra(&self.extra_stop_words)
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("spotify_songs.csv")
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

// The environment layer hands every value over as a TOML string, so typed
// keys accept both forms.
#[derive(Deserialize)]
#[serde(untagged)]
enum LimitValue {
    Number(usize),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordListValue {
    List(Vec<String>),
    Text(String),
}

/// A blank string leaves the limit at its default.
fn deserialize_limit<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match LimitValue::deserialize(deserializer)? {
        LimitValue::Number(limit) => Ok(limit),
        LimitValue::Text(text) if text.trim().is_empty() => Ok(default_limit()),
        LimitValue::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid limit {:?}: expected a non-negative integer",
                text
            ))
        }),
    }
}

fn deserialize_word_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let words = match WordListValue::deserialize(deserializer)? {
        WordListValue::List(words) => words,
        WordListValue::Text(text) => text.split(',').map(str::to_string).collect(),
    };
    Ok(words
        .into_iter()
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect())
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/soulsync/config.toml
/// - macOS: ~/Library/Application Support/soulsync/config.toml
/// - Windows: %APPDATA%\soulsync\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("soulsync")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# SoulSync Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SOULSYNC_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Song dataset (CSV) with the columns
# Song-Name, Singer/Artists, Genre, Album/Movie, Language, User-Rating
#
# Can also be set via:
# - CLI: soulsync --data /custom/songs.csv recommend "Perfect"
# - Environment: SOULSYNC_DATASET_PATH=/custom/songs.csv
dataset_path = "spotify_songs.csv"

# Number of recommendations per query
limit = 6

# Stop-word list: "english" or "none"
stop_words = "english"

# Extra words to ignore when comparing songs
extra_stop_words = []
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset_path, PathBuf::from("spotify_songs.csv"));
        assert_eq!(config.limit, 6);
        assert_eq!(config.stop_words, StopWordList::English);
        assert!(config.extra_stop_words.is_empty());
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("stop_words = \"none\"\nlimit = 3\n").unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.stop_words, StopWordList::None);
        assert_eq!(config.dataset_path, PathBuf::from("spotify_songs.csv"));
    }

    #[test]
    fn test_stop_words_from_config() {
        let config = Config {
            stop_words: StopWordList::None,
            extra_stop_words: vec!["feat".to_string()],
            ..Config::default()
        };
        let words = config.stop_words();
        assert_eq!(words.len(), 1);
        assert!(words.is_stop_word("FEAT"));
    }

    #[test]
    fn test_limit_and_word_list_accept_strings() {
        let config: Config =
            toml::from_str("limit = '3'\nextra_stop_words = 'feat, remix ,,live'\n").unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.extra_stop_words, vec!["feat", "remix", "live"]);
    }

    #[test]
    fn test_blank_limit_string_means_default() {
        let config: Config = toml::from_str("limit = ' '\nextra_stop_words = ''\n").unwrap();
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert!(config.extra_stop_words.is_empty());
    }

    #[test]
    fn test_invalid_limit_string_rejected() {
        let err = toml::from_str::<Config>("limit = 'six'\n").unwrap_err();
        assert!(err.to_string().contains("invalid limit"));
    }

    // Each test below uses its own env prefix so parallel tests never see
    // each other's variables.

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::load_from(&dir.path().join("config.toml"), "soulsync_test_defaults").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_reads_typed_env_vars() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("SOULSYNC_TEST_ENV_LIMIT", "3");
        std::env::set_var("SOULSYNC_TEST_ENV_EXTRA_STOP_WORDS", "feat,remix");
        std::env::set_var("SOULSYNC_TEST_ENV_STOP_WORDS", "none");

        let config =
            Config::load_from(&dir.path().join("config.toml"), "soulsync_test_env").unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.extra_stop_words, vec!["feat", "remix"]);
        assert_eq!(config.stop_words, StopWordList::None);
        assert!(config.stop_words().is_stop_word("remix"));
    }

    #[test]
    fn test_layer_priority() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "dataset_path = \"file.csv\"\nlimit = 4\nextra_stop_words = [\"feat\"]\n",
        )
        .unwrap();

        // File over defaults.
        let config = Config::load_from(&path, "soulsync_test_layers_file").unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("file.csv"));
        assert_eq!(config.limit, 4);
        assert_eq!(config.extra_stop_words, vec!["feat"]);
        assert_eq!(config.stop_words, StopWordList::English);

        // Env over file.
        std::env::set_var("SOULSYNC_TEST_LAYERS_ENV_DATASET_PATH", "env.csv");
        std::env::set_var("SOULSYNC_TEST_LAYERS_ENV_LIMIT", "2");
        std::env::set_var("SOULSYNC_TEST_LAYERS_ENV_EXTRA_STOP_WORDS", "remix");
        let config = Config::load_from(&path, "soulsync_test_layers_env").unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("env.csv"));
        assert_eq!(config.limit, 2);
        assert_eq!(config.extra_stop_words, vec!["remix"]);

        // CLI over env.
        let config = config.with_dataset(Some(PathBuf::from("cli.csv")));
        assert_eq!(config.dataset_path, PathBuf::from("cli.csv"));
        assert_eq!(config.limit, 2);

        let config = config.with_dataset(None);
        assert_eq!(config.dataset_path, PathBuf::from("cli.csv"));
    }

    #[test]
    fn test_invalid_env_limit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("SOULSYNC_TEST_BAD_LIMIT", "lots");
        let result = Config::load_from(&dir.path().join("config.toml"), "soulsync_test_bad");
        assert!(result.is_err());
    }
}
