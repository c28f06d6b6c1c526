//! Season Monte-Carlo search over random batting orders.
//!
//! Each trial shuffles the roster, plays a full season with that order and
//! scores it by average runs per game. The running best and worst orders are
//! kept with strict comparisons, so the earliest trial wins a tie.
//!
//! Trial `i` draws from its own ChaCha stream derived from the search seed,
//! which makes sequential and parallel runs produce identical results.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

use super::progress::{CancelToken, ProgressSink};
use crate::engine::config::SimConfig;
use crate::engine::season::{simulate_season, SeasonResult};
use crate::error::{LineupError, Result};
use crate::models::{BoxScore, Lineup, Roster};
use crate::LINEUP_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Sequential,
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub trials: usize,
    pub seed: u64,
    #[serde(default)]
    pub mode: ExecutionMode,
}

impl SearchOptions {
    pub fn new(trials: usize, seed: u64) -> Self {
        Self { trials, seed, mode: ExecutionMode::default() }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A batting order together with its season totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Player names in batting order.
    pub order: Vec<String>,
    /// Roster indices in batting order.
    pub roster_indices: [usize; LINEUP_SIZE],
    pub avg_runs: f64,
    pub total_runs: u64,
    /// Season box score, indexed by batting position.
    pub stats: BoxScore,
    /// Trial that produced this order.
    pub trial: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best: OrderRecord,
    pub worst: OrderRecord,
    pub trials: usize,
}

#[derive(Debug, Clone)]
struct Trial {
    index: usize,
    order: [usize; LINEUP_SIZE],
    season: SeasonResult,
}

/// Keep `current` unless `candidate` is strictly more extreme in direction
/// `want`, or equally extreme from an earlier trial.
fn prefer(current: Trial, candidate: Trial, want: CmpOrdering) -> Trial {
    match candidate.season.avg_runs.partial_cmp(&current.season.avg_runs) {
        Some(ord) if ord == want => candidate,
        Some(CmpOrdering::Equal) if candidate.index < current.index => candidate,
        _ => current,
    }
}

#[derive(Debug, Clone)]
struct Extremes {
    best: Trial,
    worst: Trial,
}

impl Extremes {
    fn first(trial: Trial) -> Self {
        Self { best: trial.clone(), worst: trial }
    }

    fn consider(self, trial: Trial) -> Self {
        let best = prefer(self.best, trial.clone(), CmpOrdering::Greater);
        let worst = prefer(self.worst, trial, CmpOrdering::Less);
        Self { best, worst }
    }

    fn merge(self, other: Extremes) -> Self {
        Self {
            best: prefer(self.best, other.best, CmpOrdering::Greater),
            worst: prefer(self.worst, other.worst, CmpOrdering::Less),
        }
    }

    fn fold_in(acc: Option<Extremes>, trial: Trial) -> Option<Extremes> {
        Some(match acc {
            None => Extremes::first(trial),
            Some(e) => e.consider(trial),
        })
    }
}

fn trial_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Searches random batting orders of one roster.
pub struct BattingOrderSearch<'a> {
    roster: &'a Roster,
    config: &'a SimConfig,
}

impl<'a> BattingOrderSearch<'a> {
    pub fn new(roster: &'a Roster, config: &'a SimConfig) -> Self {
        Self { roster, config }
    }

    /// One trial: shuffle, then play a season with the shuffled order.
    fn run_trial(&self, seed: u64, index: usize) -> Trial {
        let mut rng = trial_rng(seed, index);
        let lineup = Lineup::shuffled(self.roster, &mut rng);
        let season = simulate_season(&lineup, self.config, &mut rng);
        Trial { index, order: lineup.order(), season }
    }

    fn record(&self, trial: Trial) -> OrderRecord {
        OrderRecord {
            order: trial.order.iter().map(|&i| self.roster.player(i).name.clone()).collect(),
            roster_indices: trial.order,
            avg_runs: trial.season.avg_runs,
            total_runs: trial.season.total_runs,
            stats: trial.season.box_score,
            trial: trial.index,
        }
    }

    pub fn run(
        &self,
        options: SearchOptions,
        progress: &dyn ProgressSink,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome> {
        if options.trials == 0 {
            return Err(LineupError::InvalidRequest("trials must be >= 1".to_string()));
        }
        self.config.validate().map_err(LineupError::InvalidConfig)?;

        info!(
            trials = options.trials,
            seed = options.seed,
            mode = ?options.mode,
            games = self.config.games_per_season,
            "batting order search started"
        );

        let completed = AtomicUsize::new(0);
        // Highest count handed to the sink; a worker that lost the race skips its report.
        let reported = Mutex::new(0usize);
        let step = |index: usize| -> Option<Trial> {
            if cancel.is_cancelled() {
                return None;
            }
            let trial = self.run_trial(options.seed, index);
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            debug!(trial = index, avg_runs = trial.season.avg_runs, "trial finished");
            let mut high = reported.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if done > *high {
                *high = done;
                progress.report(done as f64 / options.trials as f64);
            }
            Some(trial)
        };

        let extremes = match options.mode {
            ExecutionMode::Sequential => (0..options.trials)
                .map_while(step)
                .fold(None, Extremes::fold_in),
            ExecutionMode::Parallel => (0..options.trials)
                .into_par_iter()
                .filter_map(step)
                .fold(|| None, Extremes::fold_in)
                .reduce(
                    || None,
                    |a, b| match (a, b) {
                        (Some(a), Some(b)) => Some(a.merge(b)),
                        (a, None) => a,
                        (None, b) => b,
                    },
                ),
        };

        let completed = completed.load(Ordering::SeqCst);
        let extremes = match extremes {
            Some(e) if completed == options.trials => e,
            _ => {
                info!(completed, requested = options.trials, "batting order search cancelled");
                return Err(LineupError::Cancelled { completed, requested: options.trials });
            }
        };

        let outcome = SearchOutcome {
            best: self.record(extremes.best),
            worst: self.record(extremes.worst),
            trials: options.trials,
        };
        info!(
            best_avg = outcome.best.avg_runs,
            best_trial = outcome.best.trial,
            worst_avg = outcome.worst.avg_runs,
            worst_trial = outcome.worst.trial,
            "batting order search finished"
        );
        Ok(outcome)
    }
}

/// Run a search that cannot be cancelled.
pub fn estimate_best_batting_order(
    roster: &Roster,
    config: &SimConfig,
    options: SearchOptions,
    progress: &dyn ProgressSink,
) -> Result<SearchOutcome> {
    BattingOrderSearch::new(roster, config).run(options, progress, &CancelToken::new())
}
