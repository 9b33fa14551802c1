//! Game configuration, loadable from TOML
//!
//! ```toml
//! difficulty = "hard"
//! strategy = "favor_center"
//! roster = ["frog", "snake", "donkey", "antelope", "lion"]
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{PieceKind, DEFAULT_ROSTER, DEFAULT_WIN_LENGTH, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::engine::AiConfig;
use crate::error::ConfigError;
use crate::eval::{CenterBonus, Strategy};

/// Default config file looked up by the binaries
pub const CONFIG_FILE: &str = "fourth.toml";

/// Deepest search a config may ask for
pub const MAX_DEPTH: u32 = 8;

/// Difficulty preset: search depth and board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium | Difficulty::Hard => 3,
        }
    }

    pub fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy | Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{s}' (expected easy, medium or hard)")),
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length; the difficulty preset decides when unset
    pub grid_size: Option<usize>,
    pub win_length: usize,
    /// Pieces each side starts with, in roster order
    pub roster: Vec<PieceKind>,
    pub difficulty: Difficulty,
    /// Overrides the difficulty's search depth
    pub depth: Option<u32>,
    pub strategy: Strategy,
    pub center_bonus: CenterBonus,
    /// When set, AI placements are drawn at random from this seed
    pub random_placement_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: None,
            win_length: DEFAULT_WIN_LENGTH,
            roster: DEFAULT_ROSTER.to_vec(),
            difficulty: Difficulty::default(),
            depth: None,
            strategy: Strategy::default(),
            center_bonus: CenterBonus::default(),
            random_placement_seed: None,
        }
    }
}

impl GameConfig {
    /// Default config for a difficulty preset
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        GameConfig {
            difficulty,
            ..GameConfig::default()
        }
    }

    /// Effective board size
    pub fn grid_size(&self) -> usize {
        self.grid_size.unwrap_or_else(|| self.difficulty.grid_size())
    }

    /// Effective search depth
    pub fn search_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    /// Engine settings for an AI playing with this config's strategy
    pub fn ai_config(&self) -> AiConfig {
        self.ai_config_with(self.strategy)
    }

    /// Engine settings with a different strategy (per-side AI in AI vs AI)
    pub fn ai_config_with(&self, strategy: Strategy) -> AiConfig {
        AiConfig {
            depth: self.search_depth(),
            win_length: self.win_length,
            strategy,
            center_bonus: self.center_bonus,
            random_placement: self.random_placement_seed,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.grid_size();
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "grid_size must be in [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}], got {size}"
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation("win_length must be >= 2".into()));
        }
        if self.win_length > size {
            return Err(ConfigError::Validation(
                "win_length must not exceed grid_size".into(),
            ));
        }
        if self.roster.len() < self.win_length {
            return Err(ConfigError::Validation(
                "roster must have at least win_length pieces".into(),
            ));
        }
        if 2 * self.roster.len() > size * size {
            return Err(ConfigError::Validation(
                "both rosters must fit on the board".into(),
            ));
        }
        if let Some(depth) = self.depth {
            if depth == 0 || depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "depth must be in [1, {MAX_DEPTH}]"
                )));
            }
        }
        Ok(())
    }
}
