//! Configuration module
//!
//! Loads the state directory (local key-value store), the export output
//! directory, and the default generation settings from the environment.
//! Command-line flags override anything configured here.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_KEYWORD_COUNT, DEFAULT_TITLE_LENGTH};
use crate::models::{GenerationSettings, ImageType, Platform};
use crate::validation::validate_settings;

const DEFAULT_STATE_DIR: &str = ".csvnest";
const DEFAULT_OUTPUT_DIR: &str = ".";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the local key-value store
    pub state_dir: PathBuf,
    /// Directory export archives are written to
    pub output_dir: PathBuf,
    /// Settings used when no flag overrides them
    pub defaults: GenerationSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. `from_env` passes `std::env::var`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform = match lookup("CSVNEST_PLATFORM") {
            Some(raw) => raw.parse::<Platform>()?,
            None => Platform::General,
        };

        let image_type = match lookup("CSVNEST_IMAGE_TYPE") {
            Some(raw) => raw.parse::<ImageType>()?,
            None => ImageType::None,
        };

        let defaults = GenerationSettings {
            title_length: lookup("CSVNEST_TITLE_LENGTH")
                .unwrap_or_else(|| DEFAULT_TITLE_LENGTH.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("CSVNEST_TITLE_LENGTH must be a valid number"))?,
            keyword_count: lookup("CSVNEST_KEYWORD_COUNT")
                .unwrap_or_else(|| DEFAULT_KEYWORD_COUNT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("CSVNEST_KEYWORD_COUNT must be a valid number"))?,
            remove_duplicates: lookup("CSVNEST_REMOVE_DUPLICATES")
                .unwrap_or_else(|| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
            image_type,
            platform,
            ..Default::default()
        };

        let config = Config {
            state_dir: lookup("CSVNEST_STATE_DIR")
                .unwrap_or_else(|| DEFAULT_STATE_DIR.to_string())
                .into(),
            output_dir: lookup("CSVNEST_OUTPUT_DIR")
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
                .into(),
            defaults,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        validate_settings(&self.defaults)?;

        if self.state_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("CSVNEST_STATE_DIR cannot be empty"));
        }

        Ok(())
    }

    pub fn store_path(&self) -> PathBuf {
        self.state_dir.join(crate::constants::STORE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.state_dir, PathBuf::from(".csvnest"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.defaults, GenerationSettings::default());
        assert_eq!(config.store_path(), PathBuf::from(".csvnest/storage.json"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CSVNEST_TITLE_LENGTH", "40"),
            ("CSVNEST_KEYWORD_COUNT", "10"),
            ("CSVNEST_REMOVE_DUPLICATES", "FALSE"),
            ("CSVNEST_PLATFORM", "adobe stock"),
            ("CSVNEST_IMAGE_TYPE", "vector"),
            ("CSVNEST_OUTPUT_DIR", "/tmp/out"),
        ])
        .unwrap();
        assert_eq!(config.defaults.title_length, 40);
        assert_eq!(config.defaults.keyword_count, 10);
        assert!(!config.defaults.remove_duplicates);
        assert_eq!(config.defaults.platform, Platform::AdobeStock);
        assert_eq!(config.defaults.image_type, ImageType::Vector);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_rejects_out_of_range_title_length() {
        assert!(config_from(&[("CSVNEST_TITLE_LENGTH", "500")]).is_err());
        assert!(config_from(&[("CSVNEST_TITLE_LENGTH", "abc")]).is_err());
    }

    #[test]
    fn test_rejects_unknown_platform() {
        assert!(config_from(&[("CSVNEST_PLATFORM", "getty")]).is_err());
    }
}
