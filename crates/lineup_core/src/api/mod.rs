pub mod json_api;

mod config_env;

pub use config_env::{resolve_sim_config, SIM_CONFIG_PATH_ENV};
pub use json_api::{
    position_lines, search_batting_order_json, simulate_game_json, GameRequest, GameResponse,
    OrderSummary, PositionLine, SearchRequest, SearchResponse, SCHEMA_VERSION,
};
