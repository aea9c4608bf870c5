use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::icon::PatternDef;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# xdg-icon configuration file
# Location: ~/.config/xdg-icon/config.toml

[classifier]
# Map names containing ".tar." (e.g. foo.tar.gz) to application-x-tar
# when no suffix pattern matches
# Default: true
tar_fallback = true

# Extra suffix patterns, checked in order before the builtin table.
# Suffixes are compared against the lowercased file name.
# Example:
# [[patterns]]
# suffix = ".rs"
# icon = "text-x-rust"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// User patterns, matched before the builtin table
    #[serde(default)]
    pub patterns: Vec<PatternDef>,
}

/// Classifier-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Fall back to application-x-tar for names containing ".tar."
    #[serde(default = "default_tar_fallback")]
    pub tar_fallback: bool,
}

fn default_tar_fallback() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tar_fallback: default_tar_fallback(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&content).map_err(|e| IconError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        config.normalize();
        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            patterns = config.patterns.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "classifier.tar_fallback" => Some(self.classifier.tar_fallback.to_string()),
            "patterns" => Some(format_patterns(&self.patterns)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    ///
    /// `patterns` is managed with `add_pattern` / `remove_pattern` instead.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "classifier.tar_fallback" => {
                self.classifier.tar_fallback = parse_bool(key, value)?;
                Ok(())
            }
            _ => Err(IconError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            (
                "classifier.tar_fallback".to_string(),
                self.classifier.tar_fallback.to_string(),
            ),
            ("patterns".to_string(), format_patterns(&self.patterns)),
        ]
    }

    /// Add a pattern, or replace the icon of an existing one with the same suffix
    pub fn add_pattern(&mut self, suffix: &str, icon: &str) -> Result<()> {
        let pattern = normalize_pattern(suffix, icon);
        validate_pattern(&pattern)?;

        match self.patterns.iter_mut().find(|p| p.suffix == pattern.suffix) {
            Some(existing) => existing.icon = pattern.icon,
            None => self.patterns.push(pattern),
        }
        Ok(())
    }

    /// Remove a pattern by suffix. Returns whether anything was removed.
    pub fn remove_pattern(&mut self, suffix: &str) -> bool {
        let suffix = suffix.to_lowercase();
        let before = self.patterns.len();
        self.patterns.retain(|p| p.suffix != suffix);
        self.patterns.len() != before
    }

    fn normalize(&mut self) {
        for pattern in &mut self.patterns {
            *pattern = normalize_pattern(&pattern.suffix, &pattern.icon);
        }
    }

    fn validate(&self) -> Result<()> {
        self.patterns.iter().try_for_each(validate_pattern)
    }
}

/// Same spelling rules for patterns from config.toml and from `add_pattern`
fn normalize_pattern(suffix: &str, icon: &str) -> PatternDef {
    PatternDef {
        suffix: suffix.to_lowercase(),
        icon: icon.trim().to_string(),
    }
}

fn validate_pattern(pattern: &PatternDef) -> Result<()> {
    if pattern.suffix.trim().is_empty() || pattern.icon.trim().is_empty() {
        return Err(IconError::InvalidPattern {
            suffix: pattern.suffix.clone(),
            icon: pattern.icon.clone(),
        });
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(IconError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn format_patterns(patterns: &[PatternDef]) -> String {
    let items: Vec<String> = patterns
        .iter()
        .map(|p| format!("{:?} => {:?}", p.suffix, p.icon))
        .collect();
    format!("[{}]", items.join(", "))
}
