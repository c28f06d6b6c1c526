//! # lineup_core - Batting Order Simulation Engine
//!
//! Monte-Carlo estimation of how many runs a baseball batting order scores.
//!
//! ## Features
//! - Per-player outcome sampling from empirical ratios
//! - Base advancement with speed-dependent extra bases
//! - Nine-inning games and full seasons per batting order
//! - Random search over batting orders, sequential or parallel (rayon)
//! - Deterministic: the same seed gives the same result in either mode
//! - JSON API for game simulation and order search

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Loop style over fixed-size grids
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod search;

/// Batters in a lineup.
pub const LINEUP_SIZE: usize = 9;
/// Innings per game; there are no extra innings.
pub const INNINGS: usize = 9;
pub const OUTS_PER_INNING: u8 = 3;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main API functions
pub use api::{search_batting_order_json, simulate_game_json, SCHEMA_VERSION};
pub use error::{LineupError, Result};

pub use data::{roster_from_rows, select_rows, RosterRow};
pub use engine::{simulate_game, simulate_season, GameResult, SeasonResult, SimConfig};
pub use models::{BattingLine, BattingMetrics, BoxScore, Lineup, Outcome, Player, Roster};
pub use search::{
    estimate_best_batting_order, BattingOrderSearch, CancelToken, ExecutionMode, NoProgress,
    OrderRecord, ProgressSink, SearchOptions, SearchOutcome,
};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::RosterRow;
    use crate::models::{Player, Roster};

    /// Nine identical league-average hitters named `{prefix}0..{prefix}8`,
    /// speed equal to their index.
    pub fn nine(prefix: &str) -> Vec<Player> {
        (0..9)
            .map(|i| {
                Player::reduced(format!("{prefix}{i}"), [0.15, 0.05, 0.01, 0.03, 0.08, 0.68], i)
                    .unwrap()
            })
            .collect()
    }

    /// A varied lineup: contact, power, speed and one slow catcher.
    pub fn sample_rows() -> Vec<RosterRow> {
        vec![
            RosterRow::reduced("Kim", [0.21, 0.04, 0.012, 0.008, 0.11, 0.62], 18),
            RosterRow::reduced("Park", [0.17, 0.05, 0.004, 0.02, 0.12, 0.636], 7),
            RosterRow::reduced("Lee", [0.15, 0.06, 0.001, 0.05, 0.13, 0.609], 2),
            RosterRow::reduced("Choi", [0.14, 0.06, 0.0001, 0.06, 0.12, 0.6199], -1),
            RosterRow::reduced("Jung", [0.16, 0.05, 0.003, 0.03, 0.09, 0.667], 4),
            RosterRow::reduced("Kang", [0.18, 0.04, 0.008, 0.01, 0.07, 0.692], 12),
            RosterRow::reduced("Cho", [0.15, 0.04, 0.0001, 0.015, 0.08, 0.7149], 0),
            RosterRow::reduced("Yoon", [0.16, 0.03, 0.005, 0.005, 0.06, 0.74], 9),
            RosterRow::reduced("Jang", [0.14, 0.03, 0.0001, 0.01, 0.07, 0.7499], 1),
        ]
    }

    pub fn sample_roster() -> Roster {
        crate::data::roster_from_rows(&sample_rows()).unwrap()
    }

    pub fn all_outs_roster() -> Roster {
        let players = (0..9)
            .map(|i| Player::reduced(format!("O{i}"), [0.0, 0.0, 0.0, 0.0, 0.0, 1.0], 3).unwrap())
            .collect();
        Roster::new(players).unwrap()
    }
}
