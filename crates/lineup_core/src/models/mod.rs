pub mod box_score;
pub mod outcome;
pub mod player;
pub mod roster;

pub use box_score::{BattingLine, BattingMetrics, BoxScore};
pub use outcome::{Outcome, OutcomeLayout};
pub use player::{OutcomeProbabilities, Player, Speed};
pub use roster::{Lineup, Roster, RosterEntry};
