//! Position evaluation
//!
//! - Line heuristic (squared same-side runs)
//! - Strategy weights and positional terms

pub mod heuristic;
pub mod weights;

pub use heuristic::{count_in_line, evaluate};
pub use weights::{CenterBonus, EvalWeights, Position, Strategy};
