use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Deserialize, Serialize, Default, Clone)]
pub struct Config {
    pub server: Option<ServerConfig>,
    pub ui: Option<UiConfig>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub default_lang: Option<String>,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct UiConfig {
    pub auto_play: Option<bool>,
}

impl Config {
    pub fn base_url(&self) -> String {
        self.server
            .as_ref()
            .and_then(|server| server.base_url.clone())
            .unwrap_or_else(|| "http://127.0.0.1:5000".to_string())
    }

    pub fn default_lang(&self) -> String {
        self.server
            .as_ref()
            .and_then(|server| server.default_lang.clone())
            .unwrap_or_else(|| "en".to_string())
    }

    pub fn auto_play(&self) -> bool {
        self.ui.as_ref().and_then(|ui| ui.auto_play).unwrap_or(false)
    }
}

pub fn load_config() -> Config {
    let config_path = dirs::home_dir()
        .map(|home| home.join(".config").join("audiogen").join("config.toml"))
        .unwrap_or_default();

    if let Ok(content) = fs::read_to_string(&config_path) {
        toml::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = dirs::home_dir()
        .map(|home| home.join(".config").join("audiogen"))
        .ok_or("Could not find home directory")?;

    // Create config directory if it doesn't exist
    fs::create_dir_all(&config_dir)?;

    let config_path = config_dir.join("config.toml");
    let toml_string = toml::to_string_pretty(config)?;
    fs::write(&config_path, toml_string)?;

    Ok(())
}
