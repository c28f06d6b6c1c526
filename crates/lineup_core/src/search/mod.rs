pub mod monte_carlo;
pub mod progress;

pub use monte_carlo::{
    estimate_best_batting_order, BattingOrderSearch, ExecutionMode, OrderRecord, SearchOptions,
    SearchOutcome,
};
pub use progress::{CancelToken, NoProgress, ProgressSink};
