use crate::domain::models::UserPreferences;
use anyhow::Context;
use std::path::PathBuf;

/// Where session preferences come from and go to.
pub trait PreferencesStore {
    fn load(&self) -> anyhow::Result<UserPreferences>;
    fn save(&self, prefs: &UserPreferences) -> anyhow::Result<()>;
    /// False when `save` discards its input.
    fn persists(&self) -> bool {
        true
    }
}

/// Always loads the defaults and never writes anything.
#[derive(Debug, Default)]
pub struct NoopStore;

impl PreferencesStore for NoopStore {
    fn load(&self) -> anyhow::Result<UserPreferences> {
        Ok(UserPreferences::default())
    }

    fn save(&self, _prefs: &UserPreferences) -> anyhow::Result<()> {
        Ok(())
    }

    fn persists(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.config/said/preferences.json`
    pub fn default_location() -> anyhow::Result<Self> {
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(Self::new(
            PathBuf::from(home).join(".config/said/preferences.json"),
        ))
    }
}

impl PreferencesStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<UserPreferences> {
        if !self.path.exists() {
            return Ok(UserPreferences::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&self, prefs: &UserPreferences) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(prefs)?)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
