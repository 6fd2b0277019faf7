//! Filter configuration management.
//!
//! This module provides configuration loading, global verbose flag management,
//! and the on-disk configuration type.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

use crate::models::FilterSettings;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Environment variable that points at a config file.
pub const CONFIG_ENV_VAR: &str = "CROSSFILM_CONFIG";

/// Candidate config file names searched on disk.
const CONFIG_FILENAMES: &[&str] = &["crossfilm.yml", "crossfilm.yaml"];

/// A path to try when looking for a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCandidate {
    pub path: PathBuf,
    /// Named by the user (`--config` or the environment) rather than found
    /// on the search path. A missing explicit file is reported.
    pub explicit: bool,
}

impl ConfigCandidate {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn searched(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: false,
        }
    }
}

/// Loaded configuration together with where it came from and any warnings.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    pub config: CrossfilmConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrossfilmConfig {
    pub defaults: FilterSettings,
}

impl CrossfilmConfig {
    /// Parse a YAML document and sanitize its values.
    ///
    /// Returns the config and a warning for every value that had to be fixed.
    pub fn from_yaml_str(contents: &str) -> Result<(Self, Vec<String>), serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(contents)?;
        let warnings = config.defaults.sanitize();
        Ok((config, warnings))
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Candidates are tried in order; unreadable or unparsable files, and
/// explicitly named files that do not exist, are skipped with a warning.
/// When nothing loads, built-in defaults are used and `source` is `None`.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    load_config_from(get_config_candidates(custom_path))
}

fn load_config_from(candidates: Vec<ConfigCandidate>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for ConfigCandidate { path: candidate, explicit } in candidates {
        if !candidate.is_file() {
            if explicit {
                warnings.push(format!("Config file not found: {}", candidate.display()));
            }
            continue;
        }

        let contents = match fs::read_to_string(&candidate) {
            Ok(contents) => contents,
            Err(err) => {
                warnings.push(format!(
                    "Failed to read config {}: {}",
                    candidate.display(),
                    err
                ));
                continue;
            }
        };

        match CrossfilmConfig::from_yaml_str(&contents) {
            Ok((config, sanitize_warnings)) => {
                warnings.extend(sanitize_warnings);
                let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                return ConfigHandle {
                    config,
                    source: Some(source),
                    warnings,
                };
            }
            Err(err) => warnings.push(format!(
                "Failed to parse config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    ConfigHandle {
        config: CrossfilmConfig::default(),
        source: None,
        warnings,
    }
}

/// Get list of config file candidates to try
fn get_config_candidates(custom_path: Option<&Path>) -> Vec<ConfigCandidate> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(ConfigCandidate::explicit(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(ConfigCandidate::explicit(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(ConfigCandidate::searched(cwd.join("config").join(name)));
            candidates.push(ConfigCandidate::searched(cwd.join(name)));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(ConfigCandidate::searched(home_dir.join("crossfilm").join(name)));
        }
    }

    candidates
}

static CONFIG_HANDLE: OnceLock<ConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global configuration, loading it on first use.
///
/// `custom_path` only has an effect on the first call in a process.
pub fn config_handle(custom_path: Option<&Path>) -> &'static ConfigHandle {
    CONFIG_HANDLE.get_or_init(|| load_config(custom_path))
}

/// Report the config the first time it is requested.
///
/// Warnings are always printed; the config source only in verbose mode.
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        let handle = config_handle(None);
        for warning in &handle.warnings {
            eprintln!("[crossfilm] Config warning: {}", warning);
        }

        if !is_verbose() {
            return;
        }
        if let Some(source) = &handle.source {
            eprintln!("[crossfilm] Loaded config from {}", source.display());
        } else {
            eprintln!("[crossfilm] Using built-in defaults");
        }
    });
}
