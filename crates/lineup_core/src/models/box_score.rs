//! Per-position box score and derived batting rates.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use super::outcome::Outcome;
use crate::LINEUP_SIZE;

/// Counts of each outcome category plus RBI for one batting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattingLine {
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub outs: u32,
    pub strikeouts: u32,
    pub ground_outs: u32,
    pub fly_outs: u32,
    pub sacrifices: u32,
    pub rbi: u32,
}

impl BattingLine {
    pub fn record(&mut self, outcome: Outcome) {
        *self.counter_mut(outcome) += 1;
    }

    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Single => self.singles,
            Outcome::Double => self.doubles,
            Outcome::Triple => self.triples,
            Outcome::HomeRun => self.home_runs,
            Outcome::WalkOrHbp => self.walks,
            Outcome::Out => self.outs,
            Outcome::Strikeout => self.strikeouts,
            Outcome::GroundOut => self.ground_outs,
            Outcome::FlyOut => self.fly_outs,
            Outcome::SacrificeAttempt => self.sacrifices,
        }
    }

    fn counter_mut(&mut self, outcome: Outcome) -> &mut u32 {
        match outcome {
            Outcome::Single => &mut self.singles,
            Outcome::Double => &mut self.doubles,
            Outcome::Triple => &mut self.triples,
            Outcome::HomeRun => &mut self.home_runs,
            Outcome::WalkOrHbp => &mut self.walks,
            Outcome::Out => &mut self.outs,
            Outcome::Strikeout => &mut self.strikeouts,
            Outcome::GroundOut => &mut self.ground_outs,
            Outcome::FlyOut => &mut self.fly_outs,
            Outcome::SacrificeAttempt => &mut self.sacrifices,
        }
    }

    pub fn plate_appearances(&self) -> u32 {
        Outcome::ALL.iter().map(|&o| self.count(o)).sum()
    }

    pub fn at_bats(&self) -> u32 {
        self.plate_appearances() - self.walks - self.sacrifices
    }

    pub fn hits(&self) -> u32 {
        Outcome::ALL.iter().filter(|o| o.is_hit()).map(|&o| self.count(o)).sum()
    }

    pub fn total_bases(&self) -> u32 {
        Outcome::ALL.iter().map(|&o| o.total_bases() * self.count(o)).sum()
    }

    pub fn outs_made(&self) -> u32 {
        Outcome::ALL.iter().filter(|o| o.records_out()).map(|&o| self.count(o)).sum()
    }

    pub fn metrics(&self) -> BattingMetrics {
        let pa = self.plate_appearances();
        let ab = self.at_bats();
        let h = self.hits();
        let tb = self.total_bases();
        let avg = ratio(h, ab);
        let obp = ratio(h + self.walks, pa);
        let slg = ratio(tb, ab);
        BattingMetrics { pa, ab, h, tb, avg, obp, slg, ops: obp + slg }
    }
}

/// Zero instead of NaN on an empty denominator.
fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl AddAssign<&BattingLine> for BattingLine {
    fn add_assign(&mut self, other: &BattingLine) {
        for outcome in Outcome::ALL {
            *self.counter_mut(outcome) += other.count(outcome);
        }
        self.rbi += other.rbi;
    }
}

/// Rate stats derived from a [`BattingLine`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BattingMetrics {
    pub pa: u32,
    pub ab: u32,
    pub h: u32,
    pub tb: u32,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub ops: f64,
}

/// Lines for batting positions 0..8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoxScore {
    pub lines: [BattingLine; LINEUP_SIZE],
}

impl BoxScore {
    pub fn line(&self, position: usize) -> &BattingLine {
        &self.lines[position]
    }

    pub fn record(&mut self, position: usize, outcome: Outcome, rbi: u32) {
        let line = &mut self.lines[position];
        line.record(outcome);
        line.rbi += rbi;
    }

    /// Sum over all positions.
    pub fn team_line(&self) -> BattingLine {
        let mut total = BattingLine::default();
        for line in &self.lines {
            total += line;
        }
        total
    }

    pub fn plate_appearances(&self) -> u32 {
        self.lines.iter().map(BattingLine::plate_appearances).sum()
    }
}

impl AddAssign<&BoxScore> for BoxScore {
    fn add_assign(&mut self, other: &BoxScore) {
        for (mine, theirs) in self.lines.iter_mut().zip(&other.lines) {
            *mine += theirs;
        }
    }
}
