use crate::{Error, Result};
use quicktip_types::{NumericInputMode, SEGMENT_COUNT, Theme};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub tip: TipConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `tip.defaultSegment` is not a selector index.
    pub fn validate(&self) -> Result<()> {
        if self.tip.default_segment >= SEGMENT_COUNT {
            return Err(Error::Config(format!(
                "tip.defaultSegment must be below {SEGMENT_COUNT}, got {}",
                self.tip.default_segment
            )));
        }
        Ok(())
    }
}

/// Numeric field behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    #[serde(default)]
    pub numeric_mode: NumericInputMode,
}

/// Tip selector defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipConfig {
    #[serde(default = "default_segment")]
    pub default_segment: usize,
}

fn default_segment() -> usize {
    1
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            default_segment: default_segment(),
        }
    }
}

/// Accent color configuration
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceConfig {
    pub theme: Theme,
}

/// Custom deserializer that migrates the numeric `colorTheme` preference to `theme`
impl<'de> Deserialize<'de> for AppearanceConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct AppearanceConfigRaw {
            #[serde(default)]
            pub theme: Option<Theme>,

            #[serde(default)]
            pub color_theme: Option<Value>,
        }

        let raw = AppearanceConfigRaw::deserialize(deserializer)?;

        if let Some(theme) = raw.theme {
            return Ok(Self { theme });
        }

        let theme = match raw.color_theme {
            None | Some(Value::Null) => Theme::default(),
            Some(Value::Number(n)) => n.as_i64().map_or_else(Theme::default, Theme::from_index),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(Theme::from_index)
                .map_err(|e| D::Error::custom(format!("Failed to parse colorTheme {s:?}: {e}")))?,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "colorTheme must be a number, got {other}"
                )));
            }
        };

        Ok(Self { theme })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.input.numeric_mode, NumericInputMode::Decimal);
        assert_eq!(config.tip.default_segment, 1);
        assert_eq!(config.appearance.theme, Theme::Yellow);
    }

    #[test]
    fn test_config_load_nonexistent_returns_default() {
        let path = std::path::Path::new("/nonexistent/path/config.json");
        let config = Config::load(path).unwrap();
        assert_eq!(config.tip.default_segment, 1);
    }

    #[test]
    fn test_config_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"input": {{"numericMode": "integer"}}, "tip": {{"defaultSegment": 2}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.input.numeric_mode, NumericInputMode::Integer);
        assert_eq!(config.tip.default_segment, 2);
    }

    #[test]
    fn test_config_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{invalid json}}").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_config_load_rejects_bad_segment() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"tip": {{"defaultSegment": 9}}}}"#).unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let mut config = Config::default();
        config.tip.default_segment = 3;
        config.appearance.theme = Theme::Blue;

        let file = NamedTempFile::new().unwrap();
        config.save(file.path()).unwrap();

        let loaded = Config::load(file.path()).unwrap();
        assert_eq!(loaded.tip.default_segment, 3);
        assert_eq!(loaded.appearance.theme, Theme::Blue);
    }

    #[test]
    fn test_config_empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.tip.default_segment, 1);
        assert_eq!(config.appearance.theme, Theme::Yellow);
    }

    #[test]
    fn test_appearance_theme_name() {
        let json = r#"{"appearance": {"theme": "red"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.appearance.theme, Theme::Red);
    }

    #[test]
    fn test_appearance_color_theme_number() {
        let json = r#"{"appearance": {"colorTheme": 2}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.appearance.theme, Theme::Blue);
    }

    #[test]
    fn test_appearance_color_theme_string() {
        // Older config files store the index as a string
        let json = r#"{"appearance": {"colorTheme": "0"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.appearance.theme, Theme::Red);
    }

    #[test]
    fn test_appearance_theme_wins_over_color_theme() {
        let json = r#"{"appearance": {"theme": "yellow", "colorTheme": 0}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.appearance.theme, Theme::Yellow);
    }

    #[test]
    fn test_appearance_color_theme_garbage() {
        let json = r#"{"appearance": {"colorTheme": "purple"}}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());

        let json = r#"{"appearance": {"colorTheme": [1]}}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_saved_config_uses_theme_name() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["appearance"]["theme"], "yellow");
        assert_eq!(json["input"]["numericMode"], "decimal");
        assert_eq!(json["tip"]["defaultSegment"], 1);
    }
}
