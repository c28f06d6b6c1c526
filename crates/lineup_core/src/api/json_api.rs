use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config_env::resolve_sim_config;
use crate::data::{roster_from_rows, RosterRow};
use crate::engine::{simulate_game, SimConfig};
use crate::error::LineupError;
use crate::models::{BattingLine, BattingMetrics, BoxScore, Lineup, Roster};
use crate::search::{
    estimate_best_batting_order, ExecutionMode, NoProgress, OrderRecord, SearchOptions,
};
use crate::INNINGS;

pub const SCHEMA_VERSION: u8 = 1;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn lineup_err(e: LineupError) -> String {
    err_code(e.code(), e)
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Nine rows in batting order.
    pub roster: Vec<RosterRow>,
    #[serde(default = "default_true")]
    pub enable_inning_log: bool,
    #[serde(default)]
    pub config: Option<SimConfig>,
}

/// One batting position's counting stats and rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionLine {
    /// 1-based batting position.
    pub position: usize,
    pub player: String,
    #[serde(flatten)]
    pub line: BattingLine,
    pub metrics: BattingMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub total_runs: u32,
    pub inning_runs: [u32; INNINGS],
    pub plate_appearances: u32,
    pub game_log: Vec<PositionLine>,
    /// `[position][inning]`, empty string when the position did not bat.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inning_log: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub roster: Vec<RosterRow>,
    pub trials: usize,
    #[serde(default = "default_true")]
    pub parallel: bool,
    #[serde(default)]
    pub config: Option<SimConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order: Vec<String>,
    pub avg_runs: f64,
    pub total_runs: u64,
    pub trial: usize,
    pub stats: Vec<PositionLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub best: OrderSummary,
    pub worst: OrderSummary,
    pub trials: usize,
}

/// Per-position lines for `names` in batting order.
pub fn position_lines(names: &[String], box_score: &BoxScore) -> Vec<PositionLine> {
    names
        .iter()
        .zip(box_score.lines.iter())
        .enumerate()
        .map(|(i, (name, line))| PositionLine {
            position: i + 1,
            player: name.clone(),
            line: *line,
            metrics: line.metrics(),
        })
        .collect()
}

impl From<OrderRecord> for OrderSummary {
    fn from(record: OrderRecord) -> Self {
        let stats = position_lines(&record.order, &record.stats);
        Self {
            order: record.order,
            avg_runs: record.avg_runs,
            total_runs: record.total_runs,
            trial: record.trial,
            stats,
        }
    }
}

fn check_schema(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        return Err(err_code("E_SCHEMA", format!("Unsupported schema version: {version}")));
    }
    Ok(())
}

fn build_roster(rows: &[RosterRow]) -> Result<Roster, String> {
    roster_from_rows(rows).map_err(lineup_err)
}

fn config_for(request_config: Option<SimConfig>) -> Result<SimConfig, String> {
    resolve_sim_config(request_config).map_err(|e| err_code("E_CONFIG", e))
}

/// Simulate one game with the roster rows in the given order.
pub fn simulate_game_json(request_json: &str) -> Result<String, String> {
    let request: GameRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code("E_JSON", format!("Invalid JSON request: {e}")))?;
    check_schema(request.schema_version)?;

    let roster = build_roster(&request.roster)?;
    let config = config_for(request.config)?;
    let lineup = Lineup::in_roster_order(&roster);
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let game = simulate_game(&lineup, &config, &mut rng, request.enable_inning_log);

    let response = GameResponse {
        total_runs: game.total_runs,
        inning_runs: game.inning_runs,
        plate_appearances: game.plate_appearances,
        game_log: position_lines(&roster.names(), &game.box_score),
        inning_log: game.inning_log.map(|log| log.cells.iter().map(|row| row.to_vec()).collect()),
    };

    serde_json::to_string(&response).map_err(|e| err_code("E_JSON", e))
}

/// Monte-Carlo search for the best and worst batting orders of a roster.
pub fn search_batting_order_json(request_json: &str) -> Result<String, String> {
    let request: SearchRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code("E_JSON", format!("Invalid JSON request: {e}")))?;
    check_schema(request.schema_version)?;

    let roster = build_roster(&request.roster)?;
    let config = config_for(request.config)?;
    let mode = if request.parallel { ExecutionMode::Parallel } else { ExecutionMode::Sequential };
    let options = SearchOptions::new(request.trials, request.seed).with_mode(mode);

    let outcome =
        estimate_best_batting_order(&roster, &config, options, &NoProgress).map_err(lineup_err)?;

    let response = SearchResponse {
        best: outcome.best.into(),
        worst: outcome.worst.into(),
        trials: outcome.trials,
    };
    serde_json::to_string(&response).map_err(|e| err_code("E_JSON", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_rows;
    use serde_json::json;

    fn game_request(seed: u64) -> String {
        json!({
            "schema_version": 1,
            "seed": seed,
            "roster": sample_rows(),
        })
        .to_string()
    }

    #[test]
    fn test_simulate_game_json_basic() {
        let out = simulate_game_json(&game_request(42)).unwrap();
        let response: GameResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(response.total_runs, response.inning_runs.iter().sum::<u32>());
        assert_eq!(response.game_log.len(), 9);
        assert_eq!(response.game_log[0].position, 1);
        assert_eq!(response.game_log[0].player, sample_rows()[0].player);

        let log = response.inning_log.unwrap();
        assert_eq!(log.len(), 9);
        assert!(log.iter().all(|row| row.len() == 9));
        // The leadoff hitter always bats in the first inning.
        assert!(!log[0][0].is_empty());
    }

    #[test]
    fn test_simulate_game_json_deterministic() {
        assert_eq!(simulate_game_json(&game_request(7)).unwrap(), simulate_game_json(&game_request(7)).unwrap());
    }

    #[test]
    fn test_inning_log_can_be_disabled() {
        let request = json!({
            "schema_version": 1,
            "seed": 3,
            "roster": sample_rows(),
            "enable_inning_log": false,
        });
        let out = simulate_game_json(&request.to_string()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("inning_log").is_none());
    }

    #[test]
    fn test_rejects_bad_schema_and_roster() {
        let request = json!({ "schema_version": 2, "seed": 1, "roster": sample_rows() });
        let err = simulate_game_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_SCHEMA"));

        let mut rows = sample_rows();
        rows.pop();
        let request = json!({ "schema_version": 1, "seed": 1, "roster": rows });
        let err = simulate_game_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_ROSTER_SIZE"), "{err}");

        let err = simulate_game_json("{not json").unwrap_err();
        assert!(err.starts_with("E_JSON"));
    }

    #[test]
    fn test_search_json_sequential_matches_parallel() {
        let request = |parallel: bool| {
            json!({
                "schema_version": 1,
                "seed": 11,
                "roster": sample_rows(),
                "trials": 8,
                "parallel": parallel,
                "config": { "games_per_season": 5 },
            })
            .to_string()
        };
        let seq = search_batting_order_json(&request(false)).unwrap();
        let par = search_batting_order_json(&request(true)).unwrap();
        assert_eq!(seq, par);

        let response: SearchResponse = serde_json::from_str(&seq).unwrap();
        assert_eq!(response.trials, 8);
        assert!(response.best.avg_runs >= response.worst.avg_runs);
        assert_eq!(response.best.stats.len(), 9);
        assert_eq!(response.best.stats[2].player, response.best.order[2]);
    }

    #[test]
    fn test_search_json_rejects_invalid_config() {
        let request = json!({
            "schema_version": 1,
            "seed": 1,
            "roster": sample_rows(),
            "trials": 2,
            "config": { "sacrifice": { "success_rate": 2.0 } },
        });
        let err = search_batting_order_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_CONFIG"), "{err}");

        let request = json!({ "schema_version": 1, "seed": 1, "roster": sample_rows(), "trials": 0 });
        let err = search_batting_order_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("E_REQUEST"), "{err}");
    }
}
