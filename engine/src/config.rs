use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

use crate::tictactoe::{FirstPlayerMode, Player};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml_ng::Error),
    Validation(String),
    Poisoned,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config IO error: {}", e),
            ConfigError::Yaml(e) => write!(f, "Config YAML error: {}", e),
            ConfigError::Validation(e) => write!(f, "Config validation error: {}", e),
            ConfigError::Poisoned => write!(f, "Config lock poisoned"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bot: Player,
    pub first_player: FirstPlayerMode,
    pub log_prefix: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot: Player::O,
            first_player: FirstPlayerMode::Human,
            log_prefix: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(config)?)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(self.file_path.as_str(), content)?;
        Ok(())
    }
}

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer,
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    /// Loads the config once and caches it. A missing source yields the default.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().map_err(|_| ConfigError::Poisoned)?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized_config)?;

        let mut current = self.config.lock().map_err(|_| ConfigError::Poisoned)?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryConfigProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryConfigProvider {
        fn with(content: &str) -> Self {
            Self {
                content: RefCell::new(Some(content.to_string())),
            }
        }
    }

    impl ConfigContentProvider for MemoryConfigProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    type Manager = ConfigManager<MemoryConfigProvider, GameConfig>;

    #[test]
    fn test_missing_config_yields_default() {
        let manager = Manager::new(MemoryConfigProvider::default(), YamlConfigSerializer);
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_reads_yaml() {
        let yaml = "bot: X\nfirst_player: random\nlog_prefix: game\n";
        let manager = Manager::new(MemoryConfigProvider::with(yaml), YamlConfigSerializer);
        let config = manager.get_config().unwrap();
        assert_eq!(config.bot, Player::X);
        assert_eq!(config.first_player, FirstPlayerMode::Random);
        assert_eq!(config.log_prefix.as_deref(), Some("game"));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let manager = Manager::new(MemoryConfigProvider::with("first_player: bot\n"), YamlConfigSerializer);
        let config = manager.get_config().unwrap();
        assert_eq!(config.bot, Player::O);
        assert_eq!(config.first_player, FirstPlayerMode::Bot);
    }

    #[test]
    fn test_blank_prefix_is_rejected() {
        let manager = Manager::new(MemoryConfigProvider::with("log_prefix: '  '\n"), YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let manager = Manager::new(MemoryConfigProvider::with("bot: Z\n"), YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_set_config_round_trips() {
        let manager = Manager::new(MemoryConfigProvider::default(), YamlConfigSerializer);
        let config = GameConfig {
            bot: Player::X,
            first_player: FirstPlayerMode::Bot,
            log_prefix: None,
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reread = Manager::new(
            MemoryConfigProvider::with(
                manager.config_content_provider.content.borrow().as_deref().unwrap(),
            ),
            YamlConfigSerializer,
        );
        assert_eq!(reread.get_config().unwrap(), config);
    }
}
