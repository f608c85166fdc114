use std::fmt;

use serde::Deserialize;

pub const DEFAULT_MOBILE_MAX_WIDTH: f64 = 768.0;
pub const DEFAULT_CHART_THRESHOLD: f64 = 0.5;
pub const DEFAULT_PRINT_RESET_MS: u32 = 1000;
pub const DEFAULT_READY_DELAY_MS: u32 = 500;
pub const DEFAULT_FACADE_NAME: &str = "PosterApp";

/// Prefix of the `<body>` dataset keys that override config values at runtime.
pub const OVERRIDE_ATTR_PREFIX: &str = "data-poster-";

/// Structural markers used to find the poster's elements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub section: String,
    pub section_title: String,
    pub image: String,
    pub chart: String,
    pub content: String,
    pub column: String,
    pub header: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            section: ".poster-section".to_string(),
            section_title: ".section-title, .subsection-title".to_string(),
            image: ".section-image".to_string(),
            chart: ".data-chart".to_string(),
            content: ".poster-content".to_string(),
            column: ".column".to_string(),
            header: ".poster-header".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    pub selectors: Selectors,
    /// Widths at or below this value switch to the mobile layout.
    pub mobile_max_width: f64,
    /// Visible ratio of the chart that triggers its animation.
    pub chart_threshold: f64,
    pub print_reset_ms: u32,
    pub ready_delay_ms: u32,
    pub print_button: bool,
    pub facade_name: String,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            mobile_max_width: DEFAULT_MOBILE_MAX_WIDTH,
            chart_threshold: DEFAULT_CHART_THRESHOLD,
            print_reset_ms: DEFAULT_PRINT_RESET_MS,
            ready_delay_ms: DEFAULT_READY_DELAY_MS,
            print_button: false,
            facade_name: DEFAULT_FACADE_NAME.to_string(),
        }
    }
}

impl PosterConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: PosterConfig =
            toml::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies one runtime override. `key` is the attribute name without the
    /// `data-poster-` prefix, e.g. `mobile-max-width`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "mobile-max-width" => {
                let width = value.parse::<f64>().map_err(|_| invalid())?;
                if !width.is_finite() || width < 0.0 {
                    return Err(invalid());
                }
                self.mobile_max_width = width;
            }
            "chart-threshold" => {
                let threshold = value.parse::<f64>().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(invalid());
                }
                self.chart_threshold = threshold;
            }
            "print-reset-ms" => {
                self.print_reset_ms = value.parse::<u32>().map_err(|_| invalid())?;
            }
            "ready-delay-ms" => {
                self.ready_delay_ms = value.parse::<u32>().map_err(|_| invalid())?;
            }
            "print-button" => {
                self.print_button = parse_flag(value).ok_or_else(invalid)?;
            }
            "facade-name" => {
                if !is_valid_facade_name(value) {
                    return Err(invalid());
                }
                self.facade_name = value.to_string();
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mobile_max_width.is_finite() || self.mobile_max_width < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "mobile_max_width".to_string(),
                value: self.mobile_max_width.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.chart_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "chart_threshold".to_string(),
                value: self.chart_threshold.to_string(),
            });
        }
        if !is_valid_facade_name(&self.facade_name) {
            return Err(ConfigError::InvalidValue {
                key: "facade_name".to_string(),
                value: self.facade_name.clone(),
            });
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn is_valid_facade_name(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    UnknownKey(String),
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid poster config: {message}"),
            ConfigError::UnknownKey(key) => write!(f, "unknown config key '{key}'"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value '{value}' for '{key}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
