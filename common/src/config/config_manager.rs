use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it and caches it; writes go through the
/// same validation before they reach the content provider.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    fn cached(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.cached()?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };
        if config_data.trim().is_empty() {
            return Ok(TConfig::default());
        }

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.cached()? = Some(config.clone());
        Ok(())
    }

    pub fn update_config(&self, update: impl FnOnce(&mut TConfig)) -> Result<TConfig, String> {
        let mut config = self.get_config()?;
        update(&mut config);
        self.set_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct SampleConfig {
        level: u32,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.level > 10 {
                return Err("level must be at most 10".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager() -> ConfigManager<MemoryProvider, SampleConfig> {
        ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_yields_default() {
        assert_eq!(manager().get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_blank_content_yields_default() {
        let manager = manager();
        manager
            .config_content_provider
            .set_config_content("  \n")
            .unwrap();
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_set_then_get_returns_stored_config() {
        let manager = manager();
        manager.set_config(&SampleConfig { level: 3 }).unwrap();
        assert_eq!(manager.get_config().unwrap().level, 3);
        assert!(manager.config_content_provider.content.borrow().is_some());
    }

    #[test]
    fn test_invalid_config_is_rejected_on_write() {
        let manager = manager();
        let result = manager.set_config(&SampleConfig { level: 11 });
        assert!(result.is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());
    }

    #[test]
    fn test_invalid_stored_content_is_rejected_on_read() {
        let manager = manager();
        manager
            .config_content_provider
            .set_config_content("level: 42\n")
            .unwrap();
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_update_config_persists_change() {
        let manager = manager();
        let updated = manager.update_config(|c| c.level = 7).unwrap();
        assert_eq!(updated.level, 7);
        let stored = manager.config_content_provider.content.borrow().clone().unwrap();
        assert!(stored.contains("level: 7"));
    }
}
