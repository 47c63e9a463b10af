//! Rune line breaking configuration
//!
//! Loads paragraph and glue settings from `linebreak.toml`, with
//! environment variables as overrides, and turns them into
//! [`rune_linebreak::Options`].

use std::path::{Path, PathBuf};

use log::{debug, warn};
use rune_linebreak::{Algorithm, Direction, Options, OptionsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "linebreak.toml";

/// Errors raised while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid line breaking options: {0}")]
    Options(#[from] OptionsError),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineBreakConfig {
    /// Paragraph-wide settings
    pub paragraph: ParagraphConfig,
    /// Inter-word glue settings
    pub glue: GlueConfig,
}

/// Paragraph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphConfig {
    /// Target line width, in the same units as box widths
    pub text_width: f32,
    /// Dominant writing direction (`ltr` or `rtl`)
    pub direction: Direction,
    /// Line breaker (`greedy` or `knuth-plass`)
    pub algorithm: Algorithm,
}

/// Glue configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlueConfig {
    /// Nominal space between two boxes
    pub width: f32,
    /// How far the space may shrink
    pub shrink: f32,
    /// How far the space may expand
    pub expand: f32,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            text_width: 40.0,
            direction: Direction::LeftToRight,
            algorithm: Algorithm::KnuthPlass,
        }
    }
}

impl Default for GlueConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            shrink: 0.0,
            expand: 1.0,
        }
    }
}

impl LineBreakConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `linebreak.toml` in the current directory, or
    /// return the default configuration if the file is missing or invalid
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(err) => {
                warn!("ignoring {DEFAULT_CONFIG_FILE}: {err}");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup (same keys as the
    /// environment variables)
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Paragraph settings
        if let Some(width) = parsed(&lookup, "RUNE_TEXT_WIDTH") {
            self.paragraph.text_width = width;
        }
        if let Some(direction) = parsed(&lookup, "RUNE_TEXT_DIRECTION") {
            self.paragraph.direction = direction;
        }
        if let Some(algorithm) = parsed(&lookup, "RUNE_LINE_BREAKER") {
            self.paragraph.algorithm = algorithm;
        }

        // Glue settings
        if let Some(width) = parsed(&lookup, "RUNE_GLUE_WIDTH") {
            self.glue.width = width;
        }
        if let Some(shrink) = parsed(&lookup, "RUNE_GLUE_SHRINK") {
            self.glue.shrink = shrink;
        }
        if let Some(expand) = parsed(&lookup, "RUNE_GLUE_EXPAND") {
            self.glue.expand = expand;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from linebreak.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Options for the line breakers, validated
    pub fn to_options(&self) -> Result<Options, ConfigError> {
        let options = Options {
            text_width: self.paragraph.text_width,
            text_direction: self.paragraph.direction,
            glue_width: self.glue.width,
            glue_shrink: self.glue.shrink,
            glue_expand: self.glue.expand,
        };
        options.validate()?;
        Ok(options)
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("ignoring {key}={raw:?}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = LineBreakConfig::default();
        assert_eq!(config.paragraph.text_width, 40.0);
        assert_eq!(config.paragraph.direction, Direction::LeftToRight);
        assert_eq!(config.paragraph.algorithm, Algorithm::KnuthPlass);
        assert_eq!(config.to_options().unwrap(), Options::default());
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = LineBreakConfig::default();
        config.paragraph.direction = Direction::RightToLeft;
        config.paragraph.algorithm = Algorithm::Greedy;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("direction = \"rtl\""));
        assert!(toml_str.contains("algorithm = \"greedy\""));
        let parsed: LineBreakConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LineBreakConfig::from_toml(
            "[paragraph]\ntext_width = 700\n\n[glue]\nwidth = 15\nshrink = 3\n",
        )
        .unwrap();
        assert_eq!(config.paragraph.text_width, 700.0);
        assert_eq!(config.paragraph.algorithm, Algorithm::KnuthPlass);
        assert_eq!(config.glue.width, 15.0);
        assert_eq!(config.glue.shrink, 3.0);
        assert_eq!(config.glue.expand, 1.0);
    }

    #[test]
    fn test_unknown_algorithm_is_a_parse_error() {
        let err = LineBreakConfig::from_toml("[paragraph]\nalgorithm = \"first-fit\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[paragraph]\ndirection = \"rtl\"\n").unwrap();

        let config = LineBreakConfig::load_from_file(&path).unwrap();
        assert_eq!(config.paragraph.direction, Direction::RightToLeft);

        let missing = LineBreakConfig::load_from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if linebreak.toml doesn't exist
        let config = LineBreakConfig::load_or_default();
        assert!(config.to_options().is_ok());
    }

    #[test]
    fn test_merge_with_lookup() {
        let vars: HashMap<&str, &str> = [
            ("RUNE_TEXT_WIDTH", "72.5"),
            ("RUNE_LINE_BREAKER", "greedy"),
            ("RUNE_GLUE_EXPAND", "lots"),
            ("RUNE_TEXT_DIRECTION", "rtl"),
        ]
        .into_iter()
        .collect();

        let mut config = LineBreakConfig::default();
        config.merge_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.paragraph.text_width, 72.5);
        assert_eq!(config.paragraph.algorithm, Algorithm::Greedy);
        assert_eq!(config.paragraph.direction, Direction::RightToLeft);
        // Unparsable values leave the setting alone.
        assert_eq!(config.glue.expand, 1.0);
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("RUNE_GLUE_SHRINK", "0.25");
        }

        let mut config = LineBreakConfig::default();
        config.merge_with_env();
        assert_eq!(config.glue.shrink, 0.25);

        unsafe {
            std::env::remove_var("RUNE_GLUE_SHRINK");
        }
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let mut config = LineBreakConfig::default();
        config.glue.shrink = 2.0;
        assert!(matches!(
            config.to_options(),
            Err(ConfigError::Options(OptionsError::ShrinkExceedsGlue { .. }))
        ));
    }
}
