//! Icon Classifier
//!
//! Maps a filesystem path to an XDG icon name.

use std::env;
use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::platform::{probe, PathKind};

use super::builtin::{ICON_EXECUTABLE, ICON_FOLDER, ICON_SCRIPT, ICON_USER_DESKTOP};
use super::table::IconTable;

static BUILTIN: Lazy<IconClassifier> = Lazy::new(IconClassifier::builtin);

/// Look up the icon for `path` with the builtin table.
///
/// Returns `None` when no icon is known. Never fails.
pub fn icon(path: impl AsRef<Path>) -> Option<&'static str> {
    BUILTIN.classify(path)
}

/// Directory rule
pub fn icon_for_dir(name: &str) -> &'static str {
    if name == "Desktop" || name.starts_with("Desktop-") {
        ICON_USER_DESKTOP
    } else {
        ICON_FOLDER
    }
}

/// Executable rule
pub fn icon_for_executable(name: &str) -> &'static str {
    if name.to_lowercase().ends_with(".sh") {
        ICON_SCRIPT
    } else {
        ICON_EXECUTABLE
    }
}

/// Basic rule against the builtin table
pub fn icon_for_basic(name: &str) -> Option<&'static str> {
    BUILTIN.table.lookup(&name.to_lowercase())
}

/// Icon classifier
#[derive(Debug, Clone, Default)]
pub struct IconClassifier {
    table: IconTable,
}

impl IconClassifier {
    pub fn new(table: IconTable) -> Self {
        Self { table }
    }

    /// Builtin table only
    pub fn builtin() -> Self {
        Self::new(IconTable::builtin())
    }

    /// Builtin table with user patterns from config
    pub fn from_config(config: &Config) -> Self {
        Self::new(IconTable::builtin().with_config(config))
    }

    pub fn table(&self) -> &IconTable {
        &self.table
    }

    /// Classify a path
    pub fn classify(&self, path: impl AsRef<Path>) -> Option<&str> {
        let absolute = absolutize(path.as_ref());
        let name = basename(&absolute);
        let kind = probe(&absolute);

        let icon = match kind {
            PathKind::Directory => Some(icon_for_dir(&name)),
            PathKind::Executable => Some(icon_for_executable(&name)),
            PathKind::Other => self.table.lookup(&name.to_lowercase()),
        };

        tracing::trace!(
            path = %absolute.display(),
            kind = kind.id(),
            icon = icon.unwrap_or("-"),
            "classified"
        );
        icon
    }
}

/// Resolve `path` against the current directory without touching the filesystem.
///
/// `.` components are dropped and `..` pops the previous component, so
/// `a/../b` becomes `<cwd>/b` even if `a` is a symlink or does not exist.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                tracing::debug!(error = %e, "current directory unavailable, using path as given");
                path.to_path_buf()
            }
        }
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pops past the root or a prefix
                if matches!(
                    resolved.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    resolved.pop();
                } else if !resolved.has_root() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Final component, lossily decoded. Empty for the root.
fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_icon_for_dir() {
        assert_eq!(icon_for_dir("Desktop"), "user-desktop");
        assert_eq!(icon_for_dir("Desktop-2"), "user-desktop");
        assert_eq!(icon_for_dir("Desktop-"), "user-desktop");
        assert_eq!(icon_for_dir("desktop"), "folder");
        assert_eq!(icon_for_dir("DesktopStuff"), "folder");
        assert_eq!(icon_for_dir(""), "folder");
    }

    #[test]
    fn test_icon_for_executable() {
        assert_eq!(icon_for_executable("build.sh"), "text-x-script");
        assert_eq!(icon_for_executable("BUILD.SH"), "text-x-script");
        assert_eq!(icon_for_executable("ls"), "application-x-executable");
        assert_eq!(icon_for_executable("run.bash"), "application-x-executable");
    }

    #[test]
    fn test_icon_for_basic() {
        assert_eq!(icon_for_basic("Makefile"), Some("text-x-generic"));
        assert_eq!(icon_for_basic("NOTES.TXT"), Some("text-x-generic"));
        assert_eq!(icon_for_basic("unknown.xyz"), None);
    }

    #[test]
    fn test_classify_directories() {
        let temp = TempDir::new().unwrap();
        let desktop = temp.path().join("Desktop");
        let desktop_alt = temp.path().join("Desktop-old");
        let plain = temp.path().join("projects");
        for dir in [&desktop, &desktop_alt, &plain] {
            fs::create_dir(dir).unwrap();
        }

        assert_eq!(icon(&desktop), Some("user-desktop"));
        assert_eq!(icon(&desktop_alt), Some("user-desktop"));
        assert_eq!(icon(&plain), Some("folder"));
    }

    #[test]
    fn test_classify_directory_ignores_extension_table() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("backup.tar.gz");
        fs::create_dir(&dir).unwrap();
        assert_eq!(icon(&dir), Some("folder"));
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_executables() {
        let temp = TempDir::new().unwrap();
        let script = touch(temp.path(), "deploy.SH");
        let binary = touch(temp.path(), "server");
        let text = touch(temp.path(), "notes.txt");
        for path in [&script, &binary, &text] {
            make_executable(path);
        }

        assert_eq!(icon(&script), Some("text-x-script"));
        assert_eq!(icon(&binary), Some("application-x-executable"));
        // Executable bit beats the extension table
        assert_eq!(icon(&text), Some("application-x-executable"));
    }

    #[test]
    fn test_classify_plain_files() {
        let temp = TempDir::new().unwrap();
        let notes = touch(temp.path(), "notes.txt");
        let archive = touch(temp.path(), "archive.tar.gz");
        let unknown = touch(temp.path(), "unknown.xyz");
        let makefile = touch(temp.path(), "Makefile");
        let script = touch(temp.path(), "setup.sh");

        assert_eq!(icon(&notes), Some("text-x-generic"));
        assert_eq!(icon(&archive), Some("application-x-tar"));
        assert_eq!(icon(&unknown), None);
        assert_eq!(icon(&makefile), Some("text-x-generic"));
        // Not executable, so the table entry applies
        assert_eq!(icon(&script), Some("text-x-generic"));
    }

    #[test]
    fn test_classify_missing_paths_use_basic_rule() {
        let temp = TempDir::new().unwrap();
        assert_eq!(icon(temp.path().join("ghost.mp3")), Some("audio-x-mpeg"));
        assert_eq!(icon(temp.path().join("Desktop")), None);
        assert_eq!(icon(temp.path().join("nope/deeper/x.iso")), Some("application-x-cd-image"));
    }

    #[test]
    fn test_classify_stat_error_uses_basic_rule() {
        let temp = TempDir::new().unwrap();
        let file = touch(temp.path(), "notes.txt");

        // A regular file used as a directory fails with ENOTDIR, not ENOENT
        let through_file = file.join("child.mp3");
        assert!(fs::metadata(&through_file).is_err());
        assert_eq!(icon(&through_file), Some("audio-x-mpeg"));
        assert_eq!(icon(file.join("child.xyz")), None);
    }

    #[test]
    fn test_classify_is_total() {
        let inputs = ["", ".", "..", "/", "\u{0}", "weird name\twith\nstuff", "ünïcødé.TXT", "a/../b.c"];
        for input in inputs {
            let _ = icon(input);
        }
        assert_eq!(icon("ünïcødé.TXT"), Some("text-x-generic"));
    }

    #[test]
    fn test_classify_root_and_cwd_are_folders() {
        assert_eq!(icon("/"), Some("folder"));
        assert_eq!(icon(""), icon("."));
    }

    #[test]
    fn test_classify_idempotent() {
        let temp = TempDir::new().unwrap();
        let file = touch(temp.path(), "page.html");
        assert_eq!(icon(&file), icon(&file));
        assert_eq!(icon(temp.path()), icon(temp.path()));
    }

    #[test]
    fn test_classify_with_config_patterns() {
        let temp = TempDir::new().unwrap();
        let source = touch(temp.path(), "lib.rs");

        let mut config = Config::default();
        config.add_pattern(".rs", "text-x-rust").unwrap();
        let classifier = IconClassifier::from_config(&config);

        assert_eq!(classifier.classify(&source), Some("text-x-rust"));
        assert_eq!(IconClassifier::builtin().classify(&source), None);
    }

    #[test]
    fn test_absolutize_lexical() {
        let base = if cfg!(windows) { r"C:\base" } else { "/base" };
        let base = Path::new(base);

        assert_eq!(absolutize(&base.join("a/../b")), base.join("b"));
        assert_eq!(absolutize(&base.join("./a/./b")), base.join("a").join("b"));
        assert_eq!(absolutize(&base.join("../../..")), absolutize(&base.join("..")));
    }

    #[test]
    fn test_absolutize_relative_uses_cwd() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new("x.txt")), cwd.join("x.txt"));
        assert_eq!(absolutize(Path::new("")), cwd);
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename(Path::new("/a/b/Makefile")), "Makefile");
        assert_eq!(basename(Path::new("/")), "");
    }
}
