use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::DEFAULT_SCIENTIFIC_THRESHOLD;
use crate::{clog_debug, Error, Result};

const DEFAULT_NOTIFICATION_MS: u64 = 2000;
const DEFAULT_TICK_MS: u64 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show decorative effects (sparkles, celebration, bounce).
    pub effects: bool,
    /// Ring the terminal bell on every keystroke.
    pub sound: bool,
    /// How long a notification stays on screen.
    pub notification_ms: u64,
    /// Numeric display text at least this long switches to exponential form.
    pub scientific_threshold: usize,
    /// Interval of the ticker that expires notifications and effects.
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            effects: true,
            sound: false,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            scientific_threshold: DEFAULT_SCIENTIFIC_THRESHOLD,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Config {
    pub fn app_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".batcalc"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("batcalc.toml"))
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        // tokio::time::interval panics on a zero period
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        clog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            clog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        clog_debug!(
            "Config loaded: effects={}, sound={}, notification_ms={}, scientific_threshold={}",
            config.effects,
            config.sound,
            config.notification_ms,
            config.scientific_threshold
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                clog_debug!("Creating config directory: {}", parent.display());
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        clog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}
