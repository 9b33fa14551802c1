//! Evaluation weights and the AI strategies that produce them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Positional bonus added per piece on top of the line score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    None,
    /// `w × (N−1 − Manhattan distance to the centre)`, never negative
    Center(i32),
    /// Flat `w` for every piece on the outer ring
    Edges(i32),
}

/// Legacy centre term: `N % (row+1) + N % (col+1)` per piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterBonus {
    #[default]
    None,
    Modulo,
}

/// Weights for the line heuristic.
///
/// Each run of length `r` through a piece contributes `r² × weight`, where the
/// weight is `own_line` for the evaluating side and `opponent_line` for the
/// other. Diagonal runs add `diagonal_bonus` to either weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub own_line: i32,
    pub opponent_line: i32,
    pub diagonal_bonus: i32,
    pub position: Position,
    pub center_bonus: CenterBonus,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Strategy::Balanced.weights()
    }
}

impl EvalWeights {
    pub fn with_center_bonus(mut self, center_bonus: CenterBonus) -> Self {
        self.center_bonus = center_bonus;
        self
    }
}

/// AI playing style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Balanced,
    FavorCenter,
    FavorEdges,
    FavorDiagonal,
    Aggressive,
    Defensive,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Balanced,
        Strategy::FavorCenter,
        Strategy::FavorEdges,
        Strategy::FavorDiagonal,
        Strategy::Aggressive,
        Strategy::Defensive,
    ];

    pub fn weights(self) -> EvalWeights {
        let base = EvalWeights {
            own_line: 10,
            opponent_line: 10,
            diagonal_bonus: 0,
            position: Position::None,
            center_bonus: CenterBonus::None,
        };
        match self {
            Strategy::Balanced => base,
            Strategy::FavorCenter => EvalWeights {
                position: Position::Center(4),
                ..base
            },
            Strategy::FavorEdges => EvalWeights {
                position: Position::Edges(6),
                ..base
            },
            Strategy::FavorDiagonal => EvalWeights {
                diagonal_bonus: 5,
                ..base
            },
            Strategy::Aggressive => EvalWeights {
                own_line: 15,
                ..base
            },
            Strategy::Defensive => EvalWeights {
                opponent_line: 15,
                ..base
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Balanced => "Balanced",
            Strategy::FavorCenter => "Favor center",
            Strategy::FavorEdges => "Favor edges",
            Strategy::FavorDiagonal => "Favor diagonal",
            Strategy::Aggressive => "Aggressive",
            Strategy::Defensive => "Defensive",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::FavorCenter => "favor_center",
            Strategy::FavorEdges => "favor_edges",
            Strategy::FavorDiagonal => "favor_diagonal",
            Strategy::Aggressive => "aggressive",
            Strategy::Defensive => "defensive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Accepts the config key, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Strategy::ALL
            .into_iter()
            .find(|st| st.key() == wanted)
            .ok_or_else(|| format!("unknown strategy '{s}'"))
    }
}
