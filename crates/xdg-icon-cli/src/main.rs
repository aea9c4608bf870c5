use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use xdg_icon_core::config::Config;
use xdg_icon_core::{IconClassifier, IconError, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

/// Printed in place of an icon name when none is known
const NO_ICON: &str = "-";

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Lookup { paths, json }) => {
            load_classifier(&base_dir, cli.no_config).and_then(|classifier| {
                let all_found = handle_lookup(&classifier, &paths, json)?;
                Ok(if all_found {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            })
        }
        Some(Commands::List { dir, depth, all }) => load_classifier(&base_dir, cli.no_config)
            .and_then(|classifier| {
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                handle_list(&classifier, &dir, depth, all)
            })
            .map(|()| ExitCode::SUCCESS),
        Some(Commands::Table) => load_classifier(&base_dir, cli.no_config)
            .map(|classifier| handle_table(&classifier))
            .map(|()| ExitCode::SUCCESS),
        Some(Commands::Config { action }) => {
            handle_config(action, &base_dir).map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            Cli::command().print_help().ok();
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "xdg-icon", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("XDG_ICON_BASE") {
        return PathBuf::from(base);
    }

    dirs::config_dir()
        .map(|c| c.join("xdg-icon"))
        .unwrap_or_else(|| PathBuf::from(".xdg-icon"))
}

fn load_classifier(base_dir: &Path, no_config: bool) -> Result<IconClassifier> {
    if no_config {
        return Ok(IconClassifier::builtin());
    }
    let config = Config::load(base_dir)?;
    Ok(IconClassifier::from_config(&config))
}

#[derive(Debug, Serialize)]
struct LookupEntry<'a> {
    path: String,
    icon: Option<&'a str>,
}

fn lookup_entries<'a>(classifier: &'a IconClassifier, paths: &[PathBuf]) -> Vec<LookupEntry<'a>> {
    paths
        .iter()
        .map(|p| LookupEntry {
            path: p.display().to_string(),
            icon: classifier.classify(p),
        })
        .collect()
}

/// Returns whether every path had an icon
fn handle_lookup(classifier: &IconClassifier, paths: &[PathBuf], json: bool) -> Result<bool> {
    let entries = lookup_entries(classifier, paths);
    let all_found = entries.iter().all(|e| e.icon.is_some());

    if json {
        let out = serde_json::to_string_pretty(&entries)?;
        println!("{}", out);
        return Ok(all_found);
    }

    if let [single] = entries.as_slice() {
        println!("{}", single.icon.unwrap_or(NO_ICON));
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.path, entry.icon.unwrap_or(NO_ICON));
        }
    }

    Ok(all_found)
}

/// Entries under `dir` paired with their icons, sorted by name
fn list_entries(
    classifier: &IconClassifier,
    dir: &Path,
    depth: usize,
    all: bool,
) -> Result<Vec<(PathBuf, Option<String>)>> {
    if !dir.is_dir() {
        return Err(IconError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(depth.max(1))
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| all || !is_hidden(e.file_name()));

    let mut entries = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let relative = entry
            .path()
            .strip_prefix(dir)
            .unwrap_or(entry.path())
            .to_path_buf();
        let icon = classifier.classify(entry.path()).map(str::to_string);
        entries.push((relative, icon));
    }

    Ok(entries)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn handle_list(classifier: &IconClassifier, dir: &Path, depth: usize, all: bool) -> Result<()> {
    for (path, icon) in list_entries(classifier, dir, depth, all)? {
        println!("{}\t{}", icon.as_deref().unwrap_or(NO_ICON), path.display());
    }
    Ok(())
}

/// Numbered `suffix  icon` rows, suffixes padded to the widest one in characters
fn table_lines(classifier: &IconClassifier) -> Vec<String> {
    let patterns = classifier.table().patterns();
    let width = patterns
        .iter()
        .map(|p| p.suffix.chars().count())
        .max()
        .unwrap_or(0);

    patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| {
            let padding = " ".repeat(width - pattern.suffix.chars().count());
            format!(
                "{:>3}  {}{}  {}",
                i + 1,
                pattern.suffix.cyan(),
                padding,
                pattern.icon
            )
        })
        .collect()
}

fn handle_table(classifier: &IconClassifier) {
    let table = classifier.table();

    println!();
    for line in table_lines(classifier) {
        println!("{}", line);
    }
    println!();
    println!(
        "Fallback: names containing {} -> {} ({})",
        xdg_icon_core::icon::TAR_INFIX.cyan(),
        xdg_icon_core::icon::ICON_TAR,
        if table.tar_fallback() {
            "enabled".green()
        } else {
            "disabled".yellow()
        }
    );
    println!();
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(IconError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
        ConfigAction::AddPattern { suffix, icon } => {
            let mut config = Config::load(base_dir)?;
            config.add_pattern(&suffix, &icon)?;
            config.save(base_dir)?;
            println!("{} {} -> {}", "Added:".green(), suffix.to_lowercase(), icon);
        }
        ConfigAction::RemovePattern { suffix } => {
            let mut config = Config::load(base_dir)?;
            if config.remove_pattern(&suffix) {
                config.save(base_dir)?;
                println!("{} {}", "Removed:".green(), suffix);
            } else {
                println!("{} no pattern for {}", "Unchanged:".yellow(), suffix);
            }
        }
    }

    Ok(())
}
