//! TOML-based engine configuration.
//!
//! Holds the tunable constants behind the dashboard numbers:
//! - Reality-check cost model (interest surcharge, health cost per day)
//! - Purchasable-item visibility threshold
//! - Wellness look-back window
//! - How many upcoming milestones and goals the dashboard lists
//!
//! Configuration is stored at `~/.config/recovery/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::savings::CostModel;
use crate::wellness::DEFAULT_LOOKBACK_DAYS;

/// Savings-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsConfig {
    #[serde(default = "default_interest_surcharge")]
    pub interest_surcharge: f64,
    #[serde(default = "default_health_cost_per_day")]
    pub health_cost_per_day: f64,
    /// Fraction of an item's minimum cost saved before it shows in the carousel.
    #[serde(default = "default_carousel_visibility")]
    pub carousel_visibility: f64,
}

/// Wellness configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessConfig {
    #[serde(default = "default_lookback_days")]
    pub missed_lookback_days: u32,
}

/// Dashboard list sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_3")]
    pub upcoming_milestones: usize,
    #[serde(default = "default_3")]
    pub coming_soon: usize,
}

/// Engine configuration.
///
/// Serialized to/from TOML at `~/.config/recovery/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub savings: SavingsConfig,
    #[serde(default)]
    pub wellness: WellnessConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_interest_surcharge() -> f64 {
    CostModel::default().interest_surcharge
}
fn default_health_cost_per_day() -> f64 {
    CostModel::default().health_cost_per_day
}
fn default_carousel_visibility() -> f64 {
    0.1
}
fn default_lookback_days() -> u32 {
    DEFAULT_LOOKBACK_DAYS
}
fn default_3() -> usize {
    3
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            interest_surcharge: default_interest_surcharge(),
            health_cost_per_day: default_health_cost_per_day(),
            carousel_visibility: default_carousel_visibility(),
        }
    }
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            missed_lookback_days: default_lookback_days(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_milestones: 3,
            coming_soon: 3,
        }
    }
}

impl SavingsConfig {
    pub fn cost_model(&self) -> CostModel {
        CostModel {
            interest_surcharge: self.interest_surcharge,
            health_cost_per_day: self.health_cost_per_day,
        }
    }
}

/// Returns `~/.config/recovery[-dev]/` based on RECOVERY_ENV.
///
/// Set RECOVERY_ENV=dev to use the development directory.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RECOVERY_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("recovery-dev")
    } else {
        base_dir.join("recovery")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

impl EngineConfig {
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

        let (parent, leaf) = match key.rsplit_once('.') {
            Some((parent, leaf)) => (Some(parent), leaf),
            None => (None, key),
        };
        let mut current = root;
        for part in parent.into_iter().flat_map(|p| p.split('.')) {
            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        let obj = current.as_object_mut().ok_or_else(unknown)?;
        let existing = obj.get(leaf).ok_or_else(unknown)?;
        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => {
                if let Ok(n) = value.parse::<u64>() {
                    serde_json::Value::Number(n.into())
                } else if let Ok(n) = value.parse::<f64>() {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                } else {
                    return Err(invalid(format!("cannot parse '{value}' as number")));
                }
            }
            serde_json::Value::Object(_) => return Err(unknown()),
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }

    /// Default on-disk location.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed or fails
    /// validation, or if the defaults cannot be written.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: EngineConfig = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                tracing::debug!(path = %path.display(), "loaded engine config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::debug!(path = %path.display(), "wrote default engine config");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("using default engine config: {e}");
            Self::default()
        })
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Set a value in memory by dot-separated key. Unknown keys and values
    /// that fail validation are rejected and leave `self` untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let to_invalid = |e: serde_json::Error| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        };
        let mut json = serde_json::to_value(&*self).map_err(to_invalid)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: EngineConfig = serde_json::from_value(json).map_err(to_invalid)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Check value ranges the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = |key: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("must be a non-negative number, got {v}"),
                })
            }
        };
        non_negative("savings.interest_surcharge", self.savings.interest_surcharge)?;
        non_negative("savings.health_cost_per_day", self.savings.health_cost_per_day)?;
        non_negative("savings.carousel_visibility", self.savings.carousel_visibility)?;
        if self.wellness.missed_lookback_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "wellness.missed_lookback_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
