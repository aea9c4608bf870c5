//! Platform abstraction for filesystem probing
//!
//! Decides what kind of object a path names, including whether a regular
//! file counts as executable on the current platform:
//! - Unix: any of the user/group/other execute bits
//! - Others: a well-known executable extension

use std::fs::{self, Metadata};
use std::path::Path;

/// Extensions treated as executable where there are no execute bits
pub const WINDOWS_EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "com", "bat", "cmd", "ps1"];

/// What a path turned out to be on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Existing directory (symlinks followed)
    Directory,
    /// Regular file with execute permission
    Executable,
    /// Missing, unreadable, non-executable, or some other file type
    Other,
}

impl PathKind {
    /// Get short identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Executable => "executable",
            Self::Other => "other",
        }
    }
}

/// Stat `path` and classify it. Never fails: any error is `Other`.
pub fn probe(path: &Path) -> PathKind {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "stat failed, treating as missing");
            return PathKind::Other;
        }
    };

    if metadata.is_dir() {
        PathKind::Directory
    } else if metadata.is_file() && is_executable(&metadata, path) {
        PathKind::Executable
    } else {
        PathKind::Other
    }
}

/// Whether a regular file's metadata marks it executable
#[cfg(unix)]
pub fn is_executable(metadata: &Metadata, _path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

/// Whether a regular file's metadata marks it executable
#[cfg(not(unix))]
pub fn is_executable(_metadata: &Metadata, path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            WINDOWS_EXECUTABLE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
