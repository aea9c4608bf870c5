//! Builtin Icon Patterns
//!
//! The suffix table consulted by the basic rule. Order is significant:
//! the first suffix a lowercased basename ends with wins.
//!
//! Several keys are deliberately partial words (`akefile`, `onfigure`,
//! `tamp-h1`) so one suffix covers `Makefile`/`makefile`,
//! `configure`/`Configure` and `stamp-h1`. Mixed-case keys are kept as-is
//! even though only their lowercase spellings can ever match.

use serde::{Deserialize, Serialize};

pub const ICON_FOLDER: &str = "folder";
pub const ICON_USER_DESKTOP: &str = "user-desktop";
pub const ICON_EXECUTABLE: &str = "application-x-executable";
pub const ICON_SCRIPT: &str = "text-x-script";
pub const ICON_TAR: &str = "application-x-tar";

const GENERIC: &str = "text-x-generic";
const PACKAGE: &str = "package-x-generic";
const FONT: &str = "font-x-generic";

/// Builtin suffix table, in match order
pub const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern::new(".mp3", "audio-x-mpeg"),
    BuiltinPattern::new(".aac", "audio-x-generic"),
    BuiltinPattern::new(".wav", "audio-x-wav"),
    BuiltinPattern::new(".m3u", "audio-x-mp3-playlist"),
    BuiltinPattern::new(".patch", GENERIC),
    BuiltinPattern::new(".diff", GENERIC),
    BuiltinPattern::new(".rpm", PACKAGE),
    BuiltinPattern::new(".srpm", PACKAGE),
    BuiltinPattern::new(".deb", PACKAGE),
    BuiltinPattern::new(".pkg.tar.xz", PACKAGE),
    BuiltinPattern::new(".tar", ICON_TAR),
    BuiltinPattern::new(".tgz", ICON_TAR),
    BuiltinPattern::new(".tbz", ICON_TAR),
    BuiltinPattern::new(".zip", "application-x-zip"),
    BuiltinPattern::new(".rar", GENERIC),
    BuiltinPattern::new(".cpio", GENERIC),
    BuiltinPattern::new(".iso", "application-x-cd-image"),
    BuiltinPattern::new(".img", GENERIC),
    BuiltinPattern::new(".ttf", FONT),
    BuiltinPattern::new(".bdf", FONT),
    BuiltinPattern::new(".pcf", FONT),
    BuiltinPattern::new("~", GENERIC),
    BuiltinPattern::new("tamp-h1", GENERIC),
    BuiltinPattern::new("akefile", GENERIC),
    BuiltinPattern::new("akefile.in", GENERIC),
    BuiltinPattern::new(".am", GENERIC),
    BuiltinPattern::new(".spec", GENERIC),
    BuiltinPattern::new(".m4", "application-x-m4"),
    BuiltinPattern::new(".sh", GENERIC),
    BuiltinPattern::new(".bin", GENERIC),
    BuiltinPattern::new(".run", GENERIC),
    BuiltinPattern::new("onfigure", GENERIC),
    BuiltinPattern::new("onfigure.in", GENERIC),
    BuiltinPattern::new("onfigure.ac", GENERIC),
    BuiltinPattern::new(".in", GENERIC),
    BuiltinPattern::new(".c", "text-x-c"),
    BuiltinPattern::new(".x", "text-x-c"),
    BuiltinPattern::new(".h", "text-x-chdr"),
    BuiltinPattern::new(".edc", GENERIC),
    BuiltinPattern::new(".edj", GENERIC),
    BuiltinPattern::new(".cc", "text-x-c++"),
    BuiltinPattern::new(".hh", "text-x-c++hdr"),
    BuiltinPattern::new(".php", "application-x-php"),
    BuiltinPattern::new(".desktop", "application-x-desktop"),
    BuiltinPattern::new(".directory", "application-x-desktop"),
    BuiltinPattern::new(".o", GENERIC),
    BuiltinPattern::new(".lo", GENERIC),
    BuiltinPattern::new(".la", GENERIC),
    BuiltinPattern::new(".log", GENERIC),
    BuiltinPattern::new(".txt", GENERIC),
    BuiltinPattern::new(".xml", "text-xml"),
    BuiltinPattern::new("README", GENERIC),
    BuiltinPattern::new("Readme", GENERIC),
    BuiltinPattern::new("readme", GENERIC),
    BuiltinPattern::new("INSTALL", GENERIC),
    BuiltinPattern::new("COPYING", GENERIC),
    BuiltinPattern::new("NEWS", GENERIC),
    BuiltinPattern::new("ChangeLog", "text-x-changelog"),
    BuiltinPattern::new("AUTHORS", GENERIC),
    BuiltinPattern::new("TODO", GENERIC),
    BuiltinPattern::new(".doc", "x-office-document"),
    BuiltinPattern::new(".docx", "x-office-document"),
    BuiltinPattern::new(".html", "text-x-html"),
    BuiltinPattern::new(".htm", "text-x-html"),
    BuiltinPattern::new(".css", "text-x-css"),
];

/// Static builtin pattern
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPattern {
    /// Literal suffix compared against the lowercased basename
    pub suffix: &'static str,
    /// XDG icon name returned on match
    pub icon: &'static str,
}

impl BuiltinPattern {
    const fn new(suffix: &'static str, icon: &'static str) -> Self {
        Self { suffix, icon }
    }
}

/// Runtime pattern entry
///
/// Built from the builtin table or from a `[[patterns]]` entry in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    pub suffix: String,
    pub icon: String,
}

impl PatternDef {
    /// Whether an already-lowercased basename ends with this suffix
    pub fn matches(&self, lowercased_name: &str) -> bool {
        lowercased_name.ends_with(&self.suffix)
    }
}

impl From<&BuiltinPattern> for PatternDef {
    fn from(builtin: &BuiltinPattern) -> Self {
        Self {
            suffix: builtin.suffix.to_string(),
            icon: builtin.icon.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        assert_eq!(BUILTIN_PATTERNS.len(), 65);
        assert_eq!(BUILTIN_PATTERNS[0].suffix, ".mp3");
        assert_eq!(BUILTIN_PATTERNS[64].suffix, ".css");
        assert!(BUILTIN_PATTERNS
            .iter()
            .all(|p| !p.suffix.is_empty() && !p.icon.is_empty()));
    }

    #[test]
    fn test_builtin_suffixes_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in BUILTIN_PATTERNS {
            assert!(seen.insert(p.suffix), "duplicate suffix {}", p.suffix);
        }
    }

    #[test]
    fn test_partial_word_keys_present() {
        for key in ["akefile", "onfigure", "tamp-h1"] {
            assert!(BUILTIN_PATTERNS.iter().any(|p| p.suffix == key));
        }
    }

    #[test]
    fn test_pattern_def_from_builtin() {
        let def = PatternDef::from(&BUILTIN_PATTERNS[0]);
        assert_eq!(def.suffix, ".mp3");
        assert_eq!(def.icon, "audio-x-mpeg");
        assert!(def.matches("song.mp3"));
        assert!(!def.matches("song.mp3.bak"));
    }
}
