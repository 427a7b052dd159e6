use std::path::PathBuf;

use engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use engine::games::tictactoe::{Difficulty, Mark};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "classroom_games.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub human_mark: Mark,
    pub difficulty: Difficulty,
    pub deck_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            difficulty: Difficulty::Easy,
            deck_path: None,
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        if let Some(path) = &self.deck_path
            && path.as_os_str().is_empty()
        {
            return Err("deck_path must not be empty when set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_mark_is_rejected() {
        let config = ClientConfig {
            human_mark: Mark::Empty,
            ..ClientConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = ClientConfig {
            human_mark: Mark::O,
            difficulty: Difficulty::Hard,
            deck_path: Some(PathBuf::from("decks/classroom.yaml")),
        };

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed, config);
    }
}
