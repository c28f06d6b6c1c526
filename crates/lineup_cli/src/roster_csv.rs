//! Roster table files (`Player,1B_ratio,...,Speed`).

use anyhow::{bail, Context, Result};
use lineup_core::models::OutcomeLayout;
use lineup_core::{select_rows, RosterRow, LINEUP_SIZE};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reduced-layout record as written to disk.
#[derive(Debug, Serialize)]
struct ReducedRecord<'a> {
    #[serde(rename = "Player")]
    player: &'a str,
    #[serde(rename = "1B_ratio")]
    single: f64,
    #[serde(rename = "2B_ratio")]
    double: f64,
    #[serde(rename = "3B_ratio")]
    triple: f64,
    #[serde(rename = "HR_ratio")]
    home_run: f64,
    #[serde(rename = "BB+HBP_ratio")]
    walk: f64,
    #[serde(rename = "Out_ratio")]
    out: f64,
    #[serde(rename = "Speed")]
    speed: i64,
}

pub fn read_roster_table(csv_path: &Path) -> Result<Vec<RosterRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("Bad roster row {} in {}", i + 1, csv_path.display())))
        .collect()
}

/// Write reduced-layout rows; full-layout rows are refused.
pub fn write_roster_table(csv_path: &Path, rows: &[RosterRow]) -> Result<()> {
    if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(csv_path)
        .with_context(|| format!("Failed to create CSV file: {}", csv_path.display()))?;

    for row in rows {
        if row.layout() != OutcomeLayout::Reduced {
            bail!("{} uses the full outcome layout; only reduced rows can be written", row.player);
        }
        writer.serialize(ReducedRecord {
            player: &row.player,
            single: row.single,
            double: row.double,
            triple: row.triple,
            home_run: row.home_run,
            walk: row.walk,
            out: row.out.unwrap_or(0.0),
            speed: row.speed.unwrap_or(0.0).round() as i64,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Nine rows for a game or search: the named players in the given order, or
/// the first nine rows of the table.
pub fn pick_lineup(table: &[RosterRow], players: Option<&[String]>) -> Result<Vec<RosterRow>> {
    match players {
        Some(names) => Ok(select_rows(table, names)?),
        None => {
            if table.len() < LINEUP_SIZE {
                bail!("roster table has {} rows, need at least {LINEUP_SIZE}", table.len());
            }
            Ok(table[..LINEUP_SIZE].to_vec())
        }
    }
}
