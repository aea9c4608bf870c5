pub mod config;
pub mod error;
pub mod icon;
pub mod platform;

pub use config::{ClassifierConfig, Config};
pub use error::{IconError, Result};
pub use platform::{probe, PathKind};

// Icon lookup
pub use icon::{
    icon, icon_for_basic, icon_for_dir, icon_for_executable, IconClassifier, IconTable,
    PatternDef, BUILTIN_PATTERNS,
};
