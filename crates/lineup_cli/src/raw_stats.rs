//! Raw season batting table → roster table.
//!
//! Input columns: Player, PA, H, 2B, 3B, HR, BB, HBP and optionally SB, CS.
//! Anything else in the file is ignored.

use anyhow::{Context, Result};
use lineup_core::models::Speed;
use lineup_core::RosterRow;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Players with fewer plate appearances are dropped.
pub const MIN_PLATE_APPEARANCES: u32 = 50;

/// Given to HR, 3B and 2B when a player has none, and taken from 1B.
pub const RATIO_FLOOR: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBattingRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "PA")]
    pub pa: u32,
    #[serde(rename = "H")]
    pub hits: u32,
    #[serde(rename = "2B")]
    pub doubles: u32,
    #[serde(rename = "3B")]
    pub triples: u32,
    #[serde(rename = "HR")]
    pub home_runs: u32,
    #[serde(rename = "BB")]
    pub walks: u32,
    #[serde(rename = "HBP")]
    pub hit_by_pitch: u32,
    #[serde(rename = "SB", default)]
    pub stolen_bases: Option<u32>,
    #[serde(rename = "CS", default)]
    pub caught_stealing: Option<u32>,
}

impl RawBattingRow {
    pub fn singles(&self) -> i64 {
        i64::from(self.hits)
            - i64::from(self.doubles)
            - i64::from(self.triples)
            - i64::from(self.home_runs)
    }

    /// 3·3B + SB − 2·CS; missing steal columns count as zero.
    pub fn speed_score(&self) -> Speed {
        let triples = self.triples as Speed;
        let sb = self.stolen_bases.unwrap_or(0) as Speed;
        let cs = self.caught_stealing.unwrap_or(0) as Speed;
        3 * triples + sb - 2 * cs
    }

    /// Outcome ratios in the reduced layout plus speed.
    pub fn to_roster_row(&self) -> RosterRow {
        let pa = f64::from(self.pa.max(1));
        let mut single = self.singles() as f64 / pa;
        let mut double = f64::from(self.doubles) / pa;
        let mut triple = f64::from(self.triples) / pa;
        let mut home_run = f64::from(self.home_runs) / pa;
        let walk = f64::from(self.walks + self.hit_by_pitch) / pa;

        for ratio in [&mut home_run, &mut triple, &mut double] {
            if *ratio == 0.0 {
                *ratio = RATIO_FLOOR;
                single -= RATIO_FLOOR;
            }
        }

        if single < 0.0 {
            warn!(player = %self.player, single, "negative 1B ratio clamped to 0");
            single = 0.0;
        }

        let mut out = 1.0 - single - double - triple - home_run - walk;
        if out < 0.0 {
            warn!(player = %self.player, out, "negative Out ratio clamped to 0");
            out = 0.0;
        }

        RosterRow::reduced(
            self.player.clone(),
            [single, double, triple, home_run, walk, out],
            self.speed_score(),
        )
    }
}

/// Drop low-volume players, sort by PA descending and convert.
pub fn process_rows(mut rows: Vec<RawBattingRow>) -> Vec<RosterRow> {
    rows.retain(|r| r.pa >= MIN_PLATE_APPEARANCES);
    rows.sort_by(|a, b| b.pa.cmp(&a.pa));
    rows.iter().map(RawBattingRow::to_roster_row).collect()
}

pub fn read_raw_table(csv_path: &Path) -> Result<Vec<RawBattingRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("Bad raw batting row {} in {}", i + 1, csv_path.display())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn raw(player: &str, pa: u32, h: u32, d: u32, t: u32, hr: u32) -> RawBattingRow {
        RawBattingRow {
            player: player.to_string(),
            pa,
            hits: h,
            doubles: d,
            triples: t,
            home_runs: hr,
            walks: 30,
            hit_by_pitch: 5,
            stolen_bases: Some(10),
            caught_stealing: Some(4),
        }
    }

    #[test]
    fn test_ratios_sum_to_one() {
        let row = raw("A", 500, 140, 25, 3, 20).to_roster_row();
        assert!((row.single - 92.0 / 500.0).abs() < 1e-12);
        assert!((row.walk - 35.0 / 500.0).abs() < 1e-12);
        let total = row.single + row.double + row.triple + row.home_run + row.walk + row.out.unwrap();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(row.speed, Some(11.0));
    }

    #[test]
    fn test_zero_extra_base_hits_get_floor() {
        let row = raw("B", 100, 20, 0, 0, 0).to_roster_row();
        assert_eq!(row.home_run, RATIO_FLOOR);
        assert_eq!(row.triple, RATIO_FLOOR);
        assert_eq!(row.double, RATIO_FLOOR);
        assert!((row.single - (0.2 - 3.0 * RATIO_FLOOR)).abs() < 1e-12);
        assert!(row.to_player().is_ok());
    }

    #[test]
    fn test_speed_without_steal_columns() {
        let mut r = raw("C", 100, 20, 5, 2, 1);
        r.stolen_bases = None;
        r.caught_stealing = None;
        assert_eq!(r.speed_score(), 6);
        r.caught_stealing = Some(5);
        assert_eq!(r.speed_score(), -4);
    }

    #[test]
    fn test_filter_and_sort_by_plate_appearances() {
        let rows = vec![
            raw("Low", 49, 10, 1, 1, 1),
            raw("Mid", 200, 50, 10, 1, 5),
            raw("High", 600, 160, 30, 2, 25),
            raw("Edge", 50, 12, 2, 0, 1),
        ];
        let names: Vec<_> = process_rows(rows).into_iter().map(|r| r.player).collect();
        assert_eq!(names, vec!["High", "Mid", "Edge"]);
    }

    #[test]
    fn test_read_raw_table_ignores_extra_columns() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Player,G,PA,AB,H,2B,3B,HR,SB,CS,BB,IBB,HBP,SO")?;
        writeln!(file, "Kim, 120, 510, 450, 130, 22, 4, 12, 15, 3, 50, 2, 6, 80")?;
        writeln!(file, "Lee,30,40,36,8,1,0,0,,,3,0,1,9")?;
        let rows = read_raw_table(file.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pa, 510);
        assert_eq!(rows[0].speed_score(), 3 * 4 + 15 - 6);
        assert_eq!(rows[1].stolen_bases, None);
        assert_eq!(process_rows(rows).len(), 1);
        Ok(())
    }
}
