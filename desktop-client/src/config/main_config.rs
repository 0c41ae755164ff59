use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::{GameVariant, SnakeSessionSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{ClassicConfig, GoogleConfig};

const CONFIG_FILE_NAME: &str = "snake_desktop_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub variant: GameVariant,
    pub cell_size: f32,
    #[serde(default = "default_show_fps")]
    pub show_fps: bool,
    pub classic: ClassicConfig,
    pub google: GoogleConfig,
}

fn default_show_fps() -> bool {
    true
}

impl Config {
    pub fn session_settings(&self, variant: GameVariant) -> SnakeSessionSettings {
        match variant {
            GameVariant::Classic => self.classic.to_settings(),
            GameVariant::Google => self.google.to_settings(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if !(10.0..=60.0).contains(&self.cell_size) {
            return Err(format!("cell_size must be between 10 and 60, got {}", self.cell_size));
        }
        self.classic.validate()?;
        self.google.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: GameVariant::Google,
            cell_size: 30.0,
            show_fps: true,
            classic: ClassicConfig::default(),
            google: GoogleConfig::default(),
        }
    }
}
