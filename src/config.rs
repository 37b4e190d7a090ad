//! Configuration management for shopfront-auth
//!
//! Validation minimums, profile defaults and console settings. Every value has
//! a built-in default; `shopfront.toml` and `SHOPFRONT_*` environment variables
//! override them.

use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;

/// Config file looked up when no explicit path is given (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "shopfront";

/// Avatar assigned to profiles created without one
pub const DEFAULT_AVATAR_URL: &str =
    "https://p.kindpng.com/picc/s/451-4517876_default-profile-hd-png-download.png";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub rules: ValidationRules,
    pub profile: ProfileDefaults,
    pub console: ConsoleConfig,
}

/// Minimum lengths enforced by the field validators
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationRules {
    pub name_min_len: usize,
    pub password_min_len: usize,
    pub address_min_len: usize,
    pub city_min_len: usize,
    pub country_min_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_min_len: 3,
            password_min_len: 6,
            address_min_len: 5,
            city_min_len: 2,
            country_min_len: 2,
        }
    }
}

/// Values filled into new profiles
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileDefaults {
    pub default_avatar_url: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

/// Console driver settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "shopfront> ".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file with environment overrides.
    ///
    /// An explicit `path` must exist; the default `shopfront.toml` is optional.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        Self::build(Config::builder().add_source(file).add_source(
            Environment::with_prefix("SHOPFRONT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        ))
    }

    /// Load configuration from TOML text only.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let minimums = [
            ("name_min_len", self.rules.name_min_len),
            ("password_min_len", self.rules.password_min_len),
            ("address_min_len", self.rules.address_min_len),
            ("city_min_len", self.rules.city_min_len),
            ("country_min_len", self.rules.country_min_len),
        ];

        for (key, value) in minimums {
            if value == 0 {
                return Err(config::ConfigError::Message(format!(
                    "rules.{key} must be greater than 0"
                )));
            }
        }

        if self.profile.default_avatar_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "profile.default_avatar_url cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
