use crate::engine::SimConfig;
use std::{env, fs};

pub const SIM_CONFIG_PATH_ENV: &str = "LINEUP_SIM_CONFIG_PATH";

fn load_config_file(path: &str) -> Result<SimConfig, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read sim config file from {SIM_CONFIG_PATH_ENV}='{path}': {e}"))?;

    let config = SimConfig::from_json(&content)
        .map_err(|e| format!("Failed to parse sim config JSON from {SIM_CONFIG_PATH_ENV}='{path}': {e}"))?;

    config
        .validate()
        .map_err(|e| format!("Invalid sim config from {SIM_CONFIG_PATH_ENV}='{path}': {e}"))?;

    Ok(config)
}

/// Config from the file named by `path_var`; default when unset or blank.
fn config_from_path_var(path_var: Option<String>) -> Result<SimConfig, String> {
    let Some(path) = path_var else {
        return Ok(SimConfig::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(SimConfig::default());
    }

    let config = load_config_file(path)?;
    tracing::info!(path, "sim config loaded from environment");
    Ok(config)
}

/// Effective config for one request: a request-level config wins over the
/// environment file, which wins over the defaults.
pub fn resolve_sim_config(request_config: Option<SimConfig>) -> Result<SimConfig, String> {
    let config = match request_config {
        Some(config) => config,
        None => config_from_path_var(env::var(SIM_CONFIG_PATH_ENV).ok())?,
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unset_or_blank_path_gives_default() {
        assert_eq!(config_from_path_var(None).unwrap(), SimConfig::default());
        assert_eq!(config_from_path_var(Some("  ".to_string())).unwrap(), SimConfig::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"games_per_season": 10, "sacrifice": {{"success_rate": 1.0}}}}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = config_from_path_var(Some(path)).unwrap();
        assert_eq!(config.games_per_season, 10);
        assert_eq!(config.sacrifice.success_rate, 1.0);
        assert_eq!(config.extra_base, SimConfig::default().extra_base);
    }

    #[test]
    fn test_bad_config_file_reports_env_var() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"games_per_season": 0}}"#).unwrap();
        let err = config_from_path_var(Some(file.path().to_string_lossy().into_owned())).unwrap_err();
        assert!(err.contains(SIM_CONFIG_PATH_ENV));

        let err = config_from_path_var(Some("/nonexistent/lineup.json".to_string())).unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn test_request_config_is_validated() {
        let mut config = SimConfig::aggressive();
        assert_eq!(resolve_sim_config(Some(config.clone())).unwrap(), config);
        config.extra_base.base_chance = 1.5;
        assert!(resolve_sim_config(Some(config)).is_err());
    }
}
