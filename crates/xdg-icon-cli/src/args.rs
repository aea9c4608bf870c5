use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "xdg-icon")]
#[command(about = "Look up freedesktop icon names for files")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Base directory (default: ~/.config/xdg-icon)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Ignore config.toml and use the builtin table only
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the icon name for each path (exit 1 if any path has none)
    Lookup {
        /// Paths to classify (need not exist)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a directory with an icon name per entry
    List {
        /// Directory to list (default: current directory)
        dir: Option<PathBuf>,

        /// Maximum depth to descend
        #[arg(short, long, default_value = "1")]
        depth: usize,

        /// Include hidden entries
        #[arg(short, long)]
        all: bool,
    },

    /// Show the effective suffix table in match order
    Table,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., classifier.tar_fallback)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., classifier.tar_fallback)
        key: String,

        /// Value to set (e.g., "false")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,

    /// Add a suffix pattern (checked before the builtin table)
    AddPattern {
        /// Suffix matched against the lowercased file name (e.g., ".rs")
        suffix: String,

        /// Icon name (e.g., text-x-rust)
        icon: String,
    },

    /// Remove a suffix pattern
    RemovePattern {
        /// Suffix to remove
        suffix: String,
    },
}
