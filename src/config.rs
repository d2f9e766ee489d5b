use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

fn default_show_weekdays() -> bool {
    true
}

/// Global configuration at ~/.config/monthcal/config.toml
///
/// Every field has a default and a missing file is equivalent to an empty
/// one, so the CLI works without any setup.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default)]
    pub first_day_monday: bool,

    #[serde(default)]
    pub hide_offset_days: bool,

    #[serde(default = "default_show_weekdays")]
    pub show_weekdays: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            first_day_monday: false,
            hide_offset_days: false,
            show_weekdays: true,
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("monthcal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert!(!config.first_day_monday);
        assert!(!config.hide_offset_days);
        assert!(config.show_weekdays);
    }

    #[test]
    fn test_partial_config_overrides_only_named_fields() {
        let config: GlobalConfig = toml::from_str("first_day_monday = true").unwrap();
        assert!(config.first_day_monday);
        assert!(config.show_weekdays);
    }
}
