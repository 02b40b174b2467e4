mod config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{ClientConfigManager, Config, get_config_manager};
