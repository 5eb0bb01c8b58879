pub mod config;
pub mod logger;
pub mod tictactoe;

pub use config::{ConfigError, ConfigManager, FileContentConfigProvider, GameConfig};
