pub mod roster_table;

pub use roster_table::{roster_from_rows, select_rows, RosterRow};
