use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXECUTABLE_NAME: &str = "Slipstream.exe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub executable_name: String,
    /// Overrides `<root>/<executable_name>` as the template copied into new accounts.
    pub master_executable: Option<String>,
    pub window_title: String,
    pub background_image: String,
    pub custom_launch_options: Option<String>,
    pub close_on_launch: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            executable_name: DEFAULT_EXECUTABLE_NAME.to_string(),
            master_executable: None,
            window_title: "Rocket League Launcher".to_string(),
            background_image: "background.png".to_string(),
            custom_launch_options: None,
            close_on_launch: true,
        }
    }
}

/// Directory holding the launcher binary; all launcher state lives next to it.
pub fn launcher_root() -> Result<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .ok_or_else(|| anyhow::anyhow!("failed to resolve launcher directory"))
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new() -> Result<Self> {
        let root = launcher_root()?;
        Self::at(&root)
    }

    pub fn at(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { path: dir.join("settings.toml") })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AppSettings> {
        if !self.path.exists() {
            return Ok(AppSettings::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let settings: AppSettings = toml::from_str(&text)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        let text = toml::to_string_pretty(settings)?;
        fs::write(&self.path, text).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
