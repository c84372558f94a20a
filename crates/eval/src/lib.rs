//! srsbot eval crate - weighted heuristics for scoring a landed board.
//!
//! Lower is better: the heuristic brain picks the minimum of [`evaluate`].

pub mod heuristics;

use serde::{Deserialize, Serialize};
use srsbot_core::Grid;

pub use heuristics::{
    baseline_score, cheese_score, height_score, hole_count, hole_score, row_score, texture_score,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub height: f32,
    pub cheese: f32,
    /// Negative, so clearing rows lowers the score.
    pub rows: f32,
    pub texture: f32,
    pub holes: f32,
    /// Target roughness for the texture feature. A flat surface is not ideal.
    pub ideal_texture: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            height: 5.0,
            cheese: 35.0,
            rows: -46.0,
            texture: 5.0,
            holes: 1.0,
            ideal_texture: 4.0,
        }
    }
}

/// Raw feature values of one board, before weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub height: f32,
    pub cheese: f32,
    pub rows: f32,
    pub texture: f32,
    pub holes: f32,
}

impl ScoreBreakdown {
    pub fn of(grid: &Grid, lines: usize, weights: &EvalWeights) -> Self {
        Self {
            height: height_score(grid),
            cheese: cheese_score(grid),
            rows: row_score(lines),
            texture: texture_score(grid, weights.ideal_texture),
            holes: hole_score(grid),
        }
    }

    /// Each feature multiplied by its weight.
    pub fn weighted(&self, weights: &EvalWeights) -> Self {
        Self {
            height: self.height * weights.height,
            cheese: self.cheese * weights.cheese,
            rows: self.rows * weights.rows,
            texture: self.texture * weights.texture,
            holes: self.holes * weights.holes,
        }
    }

    pub fn total(&self, weights: &EvalWeights) -> f32 {
        let w = self.weighted(weights);
        w.height + w.cheese + w.rows + w.texture + w.holes
    }
}

/// Weighted score of `grid`, reached by a move that cleared `lines` rows.
pub fn evaluate(grid: &Grid, lines: usize, weights: &EvalWeights) -> f32 {
    ScoreBreakdown::of(grid, lines, weights).total(weights)
}
