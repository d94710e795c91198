//! Configuration loading and inspection commands

use std::fs;
use std::path::Path;

use anyhow::Result;
use bitplayer_board::BoardConfig;

use crate::commands::ConfigCommands;
use crate::error::CliError;
use crate::output;

/// Execute config command
pub fn execute(cmd: &ConfigCommands, config_path: Option<&Path>, json: bool) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            output::print_config(&config, json)
        }
        ConfigCommands::Validate { file } => {
            let config = load_config(Some(file.as_path()))?;
            output::print_config_valid(file, &config, json);
            Ok(())
        }
    }
}

/// Loads and validates a board config; the stock BitPlayer config when no
/// path is given. YAML is chosen by `.yaml`/`.yml` extension, JSON otherwise.
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig, CliError> {
    let Some(path) = path else {
        return Ok(BoardConfig::default());
    };

    let text = fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let config: BoardConfig = if is_yaml {
        serde_yaml::from_str(&text)?
    } else {
        serde_json::from_str(&text)?
    };

    config
        .validate()
        .map_err(|e| CliError::InvalidConfiguration(e.to_string()))?;

    tracing::debug!(path = %path.display(), yaml = is_yaml, "loaded board config");
    Ok(config)
}
