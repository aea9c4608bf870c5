use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid icon pattern: suffix '{suffix}' -> icon '{icon}' - neither may be empty")]
    InvalidPattern { suffix: String, icon: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;

impl IconError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotADirectory { .. } => 3,
            Self::ConfigParse { .. } => 4,
            Self::ConfigKeyNotFound { .. } | Self::InvalidValue { .. } => 5,
            Self::InvalidPattern { .. } => 6,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_never_collide_with_lookup_miss() {
        // 1 is reserved for "no icon found" in the CLI
        let errors = [
            IconError::NotADirectory {
                path: PathBuf::from("x"),
            },
            IconError::ConfigKeyNotFound {
                key: "nope".to_string(),
            },
            IconError::Io(std::io::Error::other("boom")),
        ];
        for e in &errors {
            assert_ne!(e.exit_code(), 0);
            assert_ne!(e.exit_code(), 1);
        }
    }

    #[test]
    fn test_json_error_is_not_io() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = IconError::from(json_err);
        assert!(matches!(e, IconError::Json(_)));
        assert!(e.to_string().starts_with("JSON"));
    }

    #[test]
    fn test_invalid_pattern_message() {
        let e = IconError::InvalidPattern {
            suffix: String::new(),
            icon: "folder".to_string(),
        };
        assert!(e.to_string().contains("folder"));
    }
}
