//! Nine-inning game for one lineup.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::inning::simulate_inning;
use crate::models::{BoxScore, Lineup};
use crate::{INNINGS, LINEUP_SIZE};

/// Event strings indexed `[position][inning]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InningLog {
    pub cells: [[String; INNINGS]; LINEUP_SIZE],
}

impl InningLog {
    pub fn cell(&self, position: usize, inning: usize) -> &str {
        &self.cells[position][inning]
    }
}

/// Immutable outcome of one simulated game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub total_runs: u32,
    pub inning_runs: [u32; INNINGS],
    pub plate_appearances: u32,
    pub box_score: BoxScore,
    pub inning_log: Option<InningLog>,
}

/// Play all nine innings; the batting order carries over between innings.
/// There is no early finish.
pub fn simulate_game<R: Rng + ?Sized>(
    lineup: &Lineup<'_>,
    cfg: &SimConfig,
    rng: &mut R,
    record_log: bool,
) -> GameResult {
    let mut box_score = BoxScore::default();
    let mut inning_runs = [0u32; INNINGS];
    let mut inning_log = record_log.then(InningLog::default);
    let mut batter_index = 0usize;

    for inning in 0..INNINGS {
        let result = simulate_inning(lineup, batter_index, &mut box_score, cfg, rng, record_log);
        inning_runs[inning] = result.runs;
        batter_index = result.next_batter;

        if let (Some(log), Some(events)) = (inning_log.as_mut(), result.events) {
            for (position, event) in events.into_iter().enumerate() {
                log.cells[position][inning] = event;
            }
        }
    }

    let total_runs = inning_runs.iter().sum();
    tracing::trace!(total_runs, plate_appearances = batter_index, "game simulated");

    GameResult {
        total_runs,
        inning_runs,
        plate_appearances: batter_index as u32,
        box_score,
        inning_log,
    }
}
