//! Plate appearance outcome categories.

use serde::{Deserialize, Serialize};

/// Result of a single plate appearance.
///
/// The reduced table layout only knows the generic [`Outcome::Out`]; the full
/// layout splits outs into strikeout / ground-out / fly-out and adds the
/// sacrifice attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Single,
    Double,
    Triple,
    HomeRun,
    WalkOrHbp,
    Out,
    Strikeout,
    GroundOut,
    FlyOut,
    SacrificeAttempt,
}

impl Outcome {
    pub const ALL: [Outcome; 10] = [
        Outcome::Single,
        Outcome::Double,
        Outcome::Triple,
        Outcome::HomeRun,
        Outcome::WalkOrHbp,
        Outcome::Out,
        Outcome::Strikeout,
        Outcome::GroundOut,
        Outcome::FlyOut,
        Outcome::SacrificeAttempt,
    ];

    /// Short box-score label, also used in inning event tags.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Single => "1B",
            Outcome::Double => "2B",
            Outcome::Triple => "3B",
            Outcome::HomeRun => "HR",
            Outcome::WalkOrHbp => "BB+HBP",
            Outcome::Out => "Out",
            Outcome::Strikeout => "SO",
            Outcome::GroundOut => "GO",
            Outcome::FlyOut => "FO",
            Outcome::SacrificeAttempt => "SAC",
        }
    }

    /// Probability column name in the roster table.
    pub fn ratio_column(self) -> &'static str {
        match self {
            Outcome::Single => "1B_ratio",
            Outcome::Double => "2B_ratio",
            Outcome::Triple => "3B_ratio",
            Outcome::HomeRun => "HR_ratio",
            Outcome::WalkOrHbp => "BB+HBP_ratio",
            Outcome::Out => "Out_ratio",
            Outcome::Strikeout => "SO_ratio",
            Outcome::GroundOut => "GO_ratio",
            Outcome::FlyOut => "FO_ratio",
            Outcome::SacrificeAttempt => "SAC_ratio",
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Single | Outcome::Double | Outcome::Triple | Outcome::HomeRun)
    }

    /// Outs that never move runners.
    pub fn is_plain_out(self) -> bool {
        matches!(self, Outcome::Out | Outcome::Strikeout | Outcome::GroundOut | Outcome::FlyOut)
    }

    /// Whether the batter is retired on this outcome.
    pub fn records_out(self) -> bool {
        self.is_plain_out() || self == Outcome::SacrificeAttempt
    }

    pub fn total_bases(self) -> u32 {
        match self {
            Outcome::Single => 1,
            Outcome::Double => 2,
            Outcome::Triple => 3,
            Outcome::HomeRun => 4,
            _ => 0,
        }
    }
}

/// Ordered set of categories a probability vector is expressed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLayout {
    /// 1B, 2B, 3B, HR, BB+HBP, Out
    Reduced,
    /// 1B, 2B, 3B, HR, BB+HBP, SO, GO, FO, SAC
    Full,
}

const REDUCED_CATEGORIES: [Outcome; 6] = [
    Outcome::Single,
    Outcome::Double,
    Outcome::Triple,
    Outcome::HomeRun,
    Outcome::WalkOrHbp,
    Outcome::Out,
];

const FULL_CATEGORIES: [Outcome; 9] = [
    Outcome::Single,
    Outcome::Double,
    Outcome::Triple,
    Outcome::HomeRun,
    Outcome::WalkOrHbp,
    Outcome::Strikeout,
    Outcome::GroundOut,
    Outcome::FlyOut,
    Outcome::SacrificeAttempt,
];

impl OutcomeLayout {
    pub fn categories(self) -> &'static [Outcome] {
        match self {
            OutcomeLayout::Reduced => &REDUCED_CATEGORIES,
            OutcomeLayout::Full => &FULL_CATEGORIES,
        }
    }

    pub fn contains(self, outcome: Outcome) -> bool {
        self.categories().contains(&outcome)
    }
}
