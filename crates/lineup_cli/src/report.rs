//! Plain-text tables for game and search results.

use lineup_core::api::{GameResponse, OrderSummary, PositionLine};
use std::fmt::Write;

const STAT_HEADER: &str =
    " #  Player            PA    AB    H   2B  3B  HR  RBI    AVG    OBP    SLG    OPS";

fn stat_row(out: &mut String, line: &PositionLine) {
    let m = &line.metrics;
    let _ = writeln!(
        out,
        "{:>2}  {:<14} {:>5} {:>5} {:>4} {:>4} {:>3} {:>3} {:>4}  {:.3}  {:.3}  {:.3}  {:.3}",
        line.position,
        line.player,
        m.pa,
        m.ab,
        m.h,
        line.line.doubles,
        line.line.triples,
        line.line.home_runs,
        line.line.rbi,
        m.avg,
        m.obp,
        m.slg,
        m.ops,
    );
}

/// Per-position batting table.
pub fn format_stat_table(lines: &[PositionLine]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{STAT_HEADER}");
    for line in lines {
        stat_row(&mut out, line);
    }
    out
}

/// Grid of event tags, one row per batting position, one column per inning.
pub fn format_inning_grid(names: &[String], grid: &[Vec<String>]) -> String {
    let width = grid
        .iter()
        .flatten()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(3);

    let mut out = String::new();
    let _ = write!(out, "{:<14}", "");
    for inning in 1..=grid.first().map_or(0, Vec::len) {
        let _ = write!(out, " | {:<width$}", inning);
    }
    out.push('\n');

    for (name, row) in names.iter().zip(grid) {
        let _ = write!(out, "{:<14}", name);
        for cell in row {
            let _ = write!(out, " | {:<width$}", cell);
        }
        out.push('\n');
    }
    out
}

pub fn format_game(response: &GameResponse) -> String {
    let mut out = String::new();
    let innings: Vec<String> = response.inning_runs.iter().map(u32::to_string).collect();
    let _ = writeln!(out, "Runs by inning: {}", innings.join(" "));
    let _ = writeln!(
        out,
        "Total runs: {}  (plate appearances: {})\n",
        response.total_runs, response.plate_appearances
    );
    out.push_str(&format_stat_table(&response.game_log));

    if let Some(grid) = &response.inning_log {
        let names: Vec<String> = response.game_log.iter().map(|l| l.player.clone()).collect();
        out.push('\n');
        out.push_str(&format_inning_grid(&names, grid));
    }
    out
}

pub fn format_order(title: &str, summary: &OrderSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{title}: {:.3} runs/game ({} runs, trial {})",
        summary.avg_runs, summary.total_runs, summary.trial
    );
    out.push_str(&format_stat_table(&summary.stats));
    out
}
