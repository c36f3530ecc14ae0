//! TOML-based application configuration.
//!
//! Stores:
//! - Form defaults (wake-up time, sleep amount, coffee)
//! - Display preferences (12h / 24h clock)
//! - Which sleep model to use and an optional deadline for it
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::data_dir;
use crate::bedtime::{Bedtime, CoffeeCount, SleepAmount, WakeUpTime};
use crate::error::{ConfigError, EstimationFailure};
use crate::estimator::{LinearModel, SleepEstimator, TimeBoxed};

const CONFIG_FILE: &str = "config.toml";

/// Keys that may be cleared back to unset with an empty value.
const OPTIONAL_KEYS: &[&str] = &["model.path", "model.timeout_ms"];

/// Values the form starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub wake_up: WakeUpTime,
    #[serde(default = "default_sleep_amount")]
    pub sleep_amount: f64,
    #[serde(default = "default_coffee")]
    pub coffee: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn render(&self, bedtime: &Bedtime) -> String {
        match self {
            TimeFormat::TwelveHour => bedtime.format_12h(),
            TimeFormat::TwentyFourHour => bedtime.format_24h(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub time_format: TimeFormat,
}

/// Sleep model selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// JSON coefficient artifact; the bundled model is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Give up on the model after this many milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ModelConfig {
    /// Load the configured model, or the bundled one.
    ///
    /// # Errors
    ///
    /// Returns [`EstimationFailure::ModelUnavailable`] if a configured artifact
    /// cannot be loaded.
    pub fn load_model(&self) -> Result<LinearModel, EstimationFailure> {
        match &self.path {
            Some(path) => LinearModel::load(path),
            None => Ok(LinearModel::default()),
        }
    }

    /// Build the estimator the bedtime calculation should use.
    ///
    /// # Errors
    ///
    /// Same as [`ModelConfig::load_model`].
    pub fn build_estimator(&self) -> Result<Box<dyn SleepEstimator>, EstimationFailure> {
        let model = self.load_model()?;
        Ok(match self.timeout_ms {
            Some(ms) => Box::new(TimeBoxed::new(model, Duration::from_millis(ms))),
            None => Box::new(model),
        })
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

fn default_sleep_amount() -> f64 {
    8.0
}
fn default_coffee() -> u32 {
    1
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            wake_up: WakeUpTime::default(),
            sleep_amount: default_sleep_amount(),
            coffee: default_coffee(),
        }
    }
}

impl DefaultsConfig {
    pub fn sleep_amount(&self) -> SleepAmount {
        SleepAmount::new(self.sleep_amount)
    }

    pub fn coffee(&self) -> CoffeeCount {
        CoffeeCount::new(self.coffee)
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    _ if value.is_empty() && OPTIONAL_KEYS.contains(&key) => {
                        serde_json::Value::Null
                    }
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => parse_number(value)
                        .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?,
                    // Unset optionals take whatever the text looks like.
                    serde_json::Value::Null => {
                        parse_number(value).unwrap_or_else(|| serde_json::Value::String(value.into()))
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    serde_json::Value::String(_) => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Path of the config file inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load from the data directory or return (and write) the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&data_dir()?)
    }

    /// Like [`Config::load`], for an explicit directory.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, writing defaults");
                let cfg = Self::default();
                cfg.save_to(dir)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&data_dir()?)
    }

    /// Persist into `dir`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::save`].
    pub fn save_to(&self, dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path_in(dir);
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.clone(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key, in memory only.
    ///
    /// Pass an empty value to clear an optional setting.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// setting's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

fn parse_number(value: &str) -> Option<serde_json::Value> {
    if let Ok(n) = value.parse::<u64>() {
        return Some(serde_json::Value::Number(n.into()));
    }
    value
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
}
