//! Season of games with one fixed batting order, reduced from per-game results.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::game::{simulate_game, GameResult};
use crate::models::{BoxScore, Lineup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResult {
    pub games: u32,
    pub total_runs: u64,
    pub avg_runs: f64,
    pub box_score: BoxScore,
}

#[derive(Debug, Clone, Default)]
struct SeasonTotals {
    games: u32,
    runs: u64,
    box_score: BoxScore,
}

impl SeasonTotals {
    fn absorb(mut self, game: GameResult) -> Self {
        self.games += 1;
        self.runs += u64::from(game.total_runs);
        self.box_score += &game.box_score;
        self
    }

    fn finish(self) -> SeasonResult {
        let avg_runs = if self.games == 0 { 0.0 } else { self.runs as f64 / f64::from(self.games) };
        SeasonResult {
            games: self.games,
            total_runs: self.runs,
            avg_runs,
            box_score: self.box_score,
        }
    }
}

/// Simulate `cfg.games_per_season` games without inning logs.
pub fn simulate_season<R: Rng + ?Sized>(
    lineup: &Lineup<'_>,
    cfg: &SimConfig,
    rng: &mut R,
) -> SeasonResult {
    (0..cfg.games_per_season)
        .map(|_| simulate_game(lineup, cfg, rng, false))
        .fold(SeasonTotals::default(), SeasonTotals::absorb)
        .finish()
}
