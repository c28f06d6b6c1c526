//! Simulation engine.
//!
//! Data flows strictly upward:
//!
//! ```text
//! sampler ─► advancement ─► inning ─► game ─► season ─► search
//! ```
//!
//! Everything here is a pure function of its inputs plus the RNG handed in.

pub mod advancement;
pub mod bases;
pub mod config;
pub mod game;
pub mod inning;
pub mod sampler;
pub mod season;

pub use advancement::{advance, extra_base_chance, PlayResult};
pub use bases::{BaseState, Runner};
pub use config::{ExtraBaseConfig, SacrificeConfig, SimConfig};
pub use game::{simulate_game, GameResult, InningLog};
pub use inning::{event_tag, simulate_inning, InningEvents, InningResult};
pub use sampler::OutcomeSampler;
pub use season::{simulate_season, SeasonResult};
