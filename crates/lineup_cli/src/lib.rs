//! lineup_cli library
//!
//! Raw batting table → roster table preparation, roster CSV I/O and
//! plain-text reports for the `lineup` binary.

pub mod raw_stats;
pub mod report;
pub mod roster_csv;

pub use raw_stats::{process_rows, read_raw_table, RawBattingRow};
pub use roster_csv::{pick_lineup, read_roster_table, write_roster_table};
