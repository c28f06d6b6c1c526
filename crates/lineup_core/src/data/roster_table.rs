//! Roster table rows as produced by the data-preparation tooling.
//!
//! Column names follow the processed CSV files: `Player`, one `*_ratio`
//! column per outcome category and `Speed`. The same shape is accepted in
//! JSON requests.

use serde::{Deserialize, Serialize};

use crate::error::{LineupError, Result};
use crate::models::{OutcomeLayout, Player, Roster, Speed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "1B_ratio")]
    pub single: f64,
    #[serde(rename = "2B_ratio")]
    pub double: f64,
    #[serde(rename = "3B_ratio")]
    pub triple: f64,
    #[serde(rename = "HR_ratio")]
    pub home_run: f64,
    #[serde(rename = "BB+HBP_ratio")]
    pub walk: f64,
    #[serde(rename = "Out_ratio", default)]
    pub out: Option<f64>,
    #[serde(rename = "SO_ratio", default)]
    pub strikeout: Option<f64>,
    #[serde(rename = "GO_ratio", default)]
    pub ground_out: Option<f64>,
    #[serde(rename = "FO_ratio", default)]
    pub fly_out: Option<f64>,
    #[serde(rename = "SAC_ratio", default)]
    pub sacrifice: Option<f64>,
    /// Missing speed is treated as 0.
    #[serde(rename = "Speed", default)]
    pub speed: Option<f64>,
}

impl RosterRow {
    /// Row in the reduced (6-category) layout.
    pub fn reduced(player: impl Into<String>, ratios: [f64; 6], speed: Speed) -> Self {
        let [single, double, triple, home_run, walk, out] = ratios;
        Self {
            player: player.into(),
            single,
            double,
            triple,
            home_run,
            walk,
            out: Some(out),
            strikeout: None,
            ground_out: None,
            fly_out: None,
            sacrifice: None,
            speed: Some(f64::from(speed)),
        }
    }

    fn has_full_columns(&self) -> bool {
        self.strikeout.is_some()
            || self.ground_out.is_some()
            || self.fly_out.is_some()
            || self.sacrifice.is_some()
    }

    pub fn layout(&self) -> OutcomeLayout {
        if self.has_full_columns() {
            OutcomeLayout::Full
        } else {
            OutcomeLayout::Reduced
        }
    }

    fn speed(&self) -> Result<Speed> {
        let value = self.speed.unwrap_or(0.0);
        if !value.is_finite()
            || value.fract() != 0.0
            || value < f64::from(Speed::MIN)
            || value > f64::from(Speed::MAX)
        {
            return Err(LineupError::InvalidSpeed { player: self.player.clone(), value });
        }
        Ok(value as Speed)
    }

    fn invalid(&self, reason: &str) -> LineupError {
        LineupError::InvalidDistribution { player: self.player.clone(), reason: reason.to_string() }
    }

    /// Validate the row and build a [`Player`].
    pub fn to_player(&self) -> Result<Player> {
        let speed = self.speed()?;
        let hits = vec![self.single, self.double, self.triple, self.home_run, self.walk];
        let (layout, weights) = match self.layout() {
            OutcomeLayout::Reduced => {
                let out = self.out.ok_or_else(|| self.invalid("missing Out_ratio"))?;
                let mut w = hits;
                w.push(out);
                (OutcomeLayout::Reduced, w)
            }
            OutcomeLayout::Full => {
                if self.out.is_some() {
                    return Err(self.invalid("Out_ratio cannot be combined with SO/GO/FO/SAC columns"));
                }
                let mut w = hits;
                for (column, value) in [
                    ("SO_ratio", self.strikeout),
                    ("GO_ratio", self.ground_out),
                    ("FO_ratio", self.fly_out),
                    ("SAC_ratio", self.sacrifice),
                ] {
                    w.push(value.ok_or_else(|| self.invalid(&format!("missing {column}")))?);
                }
                (OutcomeLayout::Full, w)
            }
        };
        Player::new(self.player.clone(), layout, weights, speed)
    }
}

/// Build a validated nine-player roster from table rows, in row order.
pub fn roster_from_rows(rows: &[RosterRow]) -> Result<Roster> {
    let players = rows.iter().map(RosterRow::to_player).collect::<Result<Vec<_>>>()?;
    Roster::new(players)
}

/// Pick `names` out of a whole team table, in the order given.
pub fn select_rows(table: &[RosterRow], names: &[String]) -> Result<Vec<RosterRow>> {
    names
        .iter()
        .map(|name| {
            table
                .iter()
                .find(|row| &row.player == name)
                .cloned()
                .ok_or_else(|| LineupError::InvalidRequest(format!("unknown player: {name}")))
        })
        .collect()
}
