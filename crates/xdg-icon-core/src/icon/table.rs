//! Icon Table
//!
//! Ordered runtime table of suffix patterns.
//! Builtin patterns, optionally preceded by user patterns from config.

use crate::config::Config;

use super::builtin::{PatternDef, BUILTIN_PATTERNS, ICON_TAR};

/// Substring that marks compound tar archives (`.tar.gz`, `.tar.bz2`, ...)
pub const TAR_INFIX: &str = ".tar.";

/// Ordered suffix table
///
/// Iteration order is the tie-break: the first matching suffix wins.
#[derive(Debug, Clone)]
pub struct IconTable {
    patterns: Vec<PatternDef>,
    tar_fallback: bool,
}

impl IconTable {
    /// Builtin patterns only
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.iter().map(PatternDef::from).collect(),
            tar_fallback: true,
        }
    }

    /// Apply user configuration
    ///
    /// - Config patterns are placed ahead of the current ones, in config order
    /// - Config suffixes are lowercased, since they are matched against lowercased names
    /// - `classifier.tar_fallback` replaces the current setting
    pub fn with_config(mut self, config: &Config) -> Self {
        let mut patterns: Vec<PatternDef> = config
            .patterns
            .iter()
            .map(|p| PatternDef {
                suffix: p.suffix.to_lowercase(),
                icon: p.icon.clone(),
            })
            .collect();
        patterns.append(&mut self.patterns);

        self.patterns = patterns;
        self.tar_fallback = config.classifier.tar_fallback;
        self
    }

    /// Basic rule: first matching suffix, then the `.tar.` fallback
    ///
    /// `lowercased_name` must already be lowercased.
    pub fn lookup(&self, lowercased_name: &str) -> Option<&str> {
        if let Some(p) = self.patterns.iter().find(|p| p.matches(lowercased_name)) {
            return Some(p.icon.as_str());
        }
        if self.tar_fallback && lowercased_name.contains(TAR_INFIX) {
            return Some(ICON_TAR);
        }
        None
    }

    /// All patterns, in match order
    pub fn patterns(&self) -> &[PatternDef] {
        &self.patterns
    }

    pub fn tar_fallback(&self) -> bool {
        self.tar_fallback
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self::builtin()
    }
}
