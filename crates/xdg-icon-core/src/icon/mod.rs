//! # Icon Module
//!
//! Maps filesystem paths to freedesktop (XDG) icon names.
//!
//! ## Rules
//!
//! The path is resolved lexically against the current directory, its basename
//! is taken, and the first applicable rule decides:
//!
//! - **Directory**: `user-desktop` for `Desktop` / `Desktop-*`, otherwise `folder`
//! - **Executable** regular file: `text-x-script` for `*.sh`, otherwise
//!   `application-x-executable`
//! - **Basic**: first suffix in the table that the lowercased basename ends with,
//!   then `application-x-tar` for names containing `.tar.`, otherwise no icon
//!
//! Classification never fails. Paths that cannot be inspected fall through to
//! the basic rule.
//!
//! ## Modules
//!
//! - `builtin`: builtin suffix table and icon name constants
//! - `table`: ordered runtime table
//! - `classifier`: the classifier and the three rules
//!
//! ## Example
//!
//! ```rust
//! use xdg_icon_core::icon::{icon, icon_for_basic, icon_for_dir};
//!
//! assert_eq!(icon_for_dir("Desktop"), "user-desktop");
//! assert_eq!(icon_for_basic("Makefile"), Some("text-x-generic"));
//! assert_eq!(icon_for_basic("archive.tar.gz"), Some("application-x-tar"));
//! assert_eq!(icon("/surely/not/here/unknown.xyz"), None);
//! ```

mod builtin;
mod classifier;
mod table;

// Re-exports
pub use builtin::{
    BuiltinPattern, PatternDef, BUILTIN_PATTERNS, ICON_EXECUTABLE, ICON_FOLDER, ICON_SCRIPT,
    ICON_TAR, ICON_USER_DESKTOP,
};
pub use classifier::{
    absolutize, icon, icon_for_basic, icon_for_dir, icon_for_executable, IconClassifier,
};
pub use table::{IconTable, TAR_INFIX};
