//! Player records consumed by the simulation.

use serde::Serialize;

use super::outcome::{Outcome, OutcomeLayout};
use crate::error::{LineupError, Result};

/// Running speed score. Larger is faster; zero and negative values are
/// ordinary (slow) runners, never "no runner".
pub type Speed = i32;

/// Non-negative weights over the categories of one [`OutcomeLayout`].
///
/// Construction rejects anything the sampler could not normalize, so a value
/// of this type always has a finite, strictly positive total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeProbabilities {
    layout: OutcomeLayout,
    weights: Vec<f64>,
    total: f64,
}

impl OutcomeProbabilities {
    /// Validate raw weights. The error string is the reason only; callers add
    /// the player name.
    pub fn new(layout: OutcomeLayout, weights: Vec<f64>) -> std::result::Result<Self, String> {
        let expected = layout.categories().len();
        if weights.len() != expected {
            return Err(format!(
                "expected {} weights for {:?} layout, got {}",
                expected,
                layout,
                weights.len()
            ));
        }
        for (outcome, &w) in layout.categories().iter().zip(&weights) {
            if !w.is_finite() {
                return Err(format!("{} is not finite ({w})", outcome.ratio_column()));
            }
            if w < 0.0 {
                return Err(format!("{} is negative ({w})", outcome.ratio_column()));
            }
        }
        let total: f64 = weights.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(format!("weights sum to {total}, must be strictly positive"));
        }
        Ok(Self { layout, weights, total })
    }

    pub fn layout(&self) -> OutcomeLayout {
        self.layout
    }

    /// Weights divided by their sum, in layout order.
    pub fn normalized(&self) -> Vec<f64> {
        self.weights.iter().map(|w| w / self.total).collect()
    }

    /// Normalized probability of one outcome; zero when the layout lacks it.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        self.layout
            .categories()
            .iter()
            .position(|&o| o == outcome)
            .map_or(0.0, |i| self.weights[i] / self.total)
    }

    /// Normalized probability that the batter is retired.
    pub fn out_probability(&self) -> f64 {
        self.layout
            .categories()
            .iter()
            .zip(&self.weights)
            .filter(|(o, _)| o.records_out())
            .map(|(_, w)| w / self.total)
            .sum()
    }
}

/// One batter: name, outcome distribution and speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub probabilities: OutcomeProbabilities,
    pub speed: Speed,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        layout: OutcomeLayout,
        weights: Vec<f64>,
        speed: Speed,
    ) -> Result<Self> {
        let name = name.into();
        let probabilities = OutcomeProbabilities::new(layout, weights)
            .map_err(|reason| LineupError::InvalidDistribution { player: name.clone(), reason })?;
        Ok(Self { name, probabilities, speed })
    }

    /// Reduced layout: 1B, 2B, 3B, HR, BB+HBP, Out.
    pub fn reduced(name: impl Into<String>, weights: [f64; 6], speed: Speed) -> Result<Self> {
        Self::new(name, OutcomeLayout::Reduced, weights.to_vec(), speed)
    }

    /// Full layout: 1B, 2B, 3B, HR, BB+HBP, SO, GO, FO, SAC.
    pub fn full(name: impl Into<String>, weights: [f64; 9], speed: Speed) -> Result<Self> {
        Self::new(name, OutcomeLayout::Full, weights.to_vec(), speed)
    }
}
