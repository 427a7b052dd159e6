use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing config is not an error;
/// the `Default` impl of the config type takes over.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            provider: FileContentConfigProvider::new(file_path),
            serializer: YamlConfigSerializer,
            cached: Mutex::new(None),
        }
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.provider.get_config_content()? {
            Some(content) => {
                let config = self.serializer.deserialize(&content)?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                config
            }
            None => TConfig::default(),
        };

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::content_provider::StaticContentConfigProvider;
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        retries: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.retries > 10 {
                return Err("retries must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_falls_back_to_default() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(StaticContentConfigProvider::new(None), YamlConfigSerializer);

        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_stored_content_is_parsed_and_cached() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(
            StaticContentConfigProvider::new(Some("retries: 3\n")),
            YamlConfigSerializer,
        );

        assert_eq!(manager.get_config().unwrap(), TestConfig { retries: 3 });
        assert_eq!(manager.get_config().unwrap(), TestConfig { retries: 3 });
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(
            StaticContentConfigProvider::new(Some("retries: 99\n")),
            YamlConfigSerializer,
        );

        let err = manager.get_config().unwrap_err();
        assert!(err.contains("validation"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let manager: ConfigManager<_, TestConfig> = ConfigManager::new(
            StaticContentConfigProvider::new(Some("retries: [not a number")),
            YamlConfigSerializer,
        );

        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_validates_first() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(StaticContentConfigProvider::new(None), YamlConfigSerializer);

        assert!(manager.set_config(&TestConfig { retries: 99 }).is_err());
        assert!(manager.set_config(&TestConfig { retries: 2 }).is_ok());
        assert_eq!(manager.get_config().unwrap(), TestConfig { retries: 2 });
    }
}
