use std::path::PathBuf;

use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::TicTacToeSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the file next to the executable.
pub fn get_config_manager(path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub tictactoe: TicTacToeSettings,
    #[serde(default)]
    pub verbose_log: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}
