use crate::error::{PuzzleError, Result};
use crate::heuristics::Heuristic;
use serde::Deserialize;
use std::path::Path;

/// Search configuration, optionally loaded from TOML.
///
/// ```toml
/// max_nodes = 50000
/// heuristic = "h2"
/// beam_width = 8
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of nodes to examine before giving up.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: u64,

    /// Heuristic used when a command does not name one.
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Beam width used when a command does not give one.
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,

    /// Seed for scrambling. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_nodes() -> u64 {
    1_000_000
}
fn default_beam_width() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_nodes: default_max_nodes(),
            heuristic: Heuristic::default(),
            beam_width: default_beam_width(),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Parses and validates a config from TOML text. Missing keys take their
    /// defaults; unknown keys are rejected.
    ///
    /// ```
    /// use eight_puzzle::config::SearchConfig;
    /// use eight_puzzle::heuristics::Heuristic;
    ///
    /// let cfg = SearchConfig::from_toml_str("heuristic = \"h2\"\nbeam_width = 4").unwrap();
    /// assert_eq!(cfg.heuristic, Heuristic::ManhattanDistance);
    /// assert_eq!(cfg.beam_width, 4);
    /// assert_eq!(cfg.max_nodes, 1_000_000);
    /// assert!(SearchConfig::from_toml_str("beam_width = 0").is_err());
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SearchConfig =
            toml::from_str(s).map_err(|e| PuzzleError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded search config");
        Ok(config)
    }

    /// Rejects a zero node limit or beam width with [`PuzzleError::Config`].
    /// A beam width of 1 is allowed but logged as a warning.
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == 0 {
            return Err(PuzzleError::Config("max_nodes must be at least 1".into()));
        }
        if self.beam_width == 0 {
            return Err(PuzzleError::Config("beam_width must be at least 1".into()));
        }
        if self.beam_width == 1 {
            tracing::warn!("beam_width = 1 makes beam search a greedy walk");
        }
        Ok(())
    }
}
