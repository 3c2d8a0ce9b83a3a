use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_MODULE_NAME;

/// The host environment the bridge is loaded into.
///  Only changes the remediation steps reported
///  when the curve engine is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostPlatform {
    Ios,
    Android,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// name the curve engine is registered under
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// host platform, used for linking diagnostics
    #[serde(default)]
    pub platform: HostPlatform,
    /// reject wrongly sized inputs before they reach
    ///  the engine
    #[serde(default = "default_validate_lengths")]
    pub validate_lengths: bool,
}

fn default_module_name() -> String {
    DEFAULT_MODULE_NAME.to_string()
}

fn default_validate_lengths() -> bool {
    true
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            platform: HostPlatform::default(),
            validate_lengths: default_validate_lengths(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl BridgeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BridgeConfig::from_toml_str("").unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.module_name, DEFAULT_MODULE_NAME);
        assert!(config.validate_lengths);
        assert_eq!(config.platform, HostPlatform::Other);
    }

    #[test]
    fn test_partial_config() {
        let config = BridgeConfig::from_toml_str(
            r#"
            platform = "ios"
            validate_lengths = false
            "#,
        )
        .unwrap();
        assert_eq!(config.platform, HostPlatform::Ios);
        assert!(!config.validate_lengths);
        assert_eq!(config.module_name, DEFAULT_MODULE_NAME);
    }

    #[test]
    fn test_rejects_unknown_platform() {
        assert!(matches!(
            BridgeConfig::from_toml_str("platform = \"windows-phone\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BridgeConfig {
            module_name: "CustomCurve".to_string(),
            platform: HostPlatform::Android,
            validate_lengths: false,
        };
        let toml = config.to_toml_string().unwrap();
        assert_eq!(BridgeConfig::from_toml_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bridge.toml");
        fs::write(&path, "module_name = \"FromDisk\"\n").unwrap();

        let config = BridgeConfig::load(&path).unwrap();
        assert_eq!(config.module_name, "FromDisk");

        assert!(matches!(
            BridgeConfig::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
