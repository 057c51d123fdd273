//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navstack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading and resolution happen before the file logger exists (its path
//! comes from the config), so they record `ConfigNotice`s instead of
//! logging. `main` replays them once the logger is installed.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavstackConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// What happened while locating and reading the file.
    #[serde(skip)]
    pub notices: Vec<ConfigNotice>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_link_row: Option<bool>,
    pub true_color: Option<bool>,
    pub mouse: Option<bool>,
}

/// Values taken from CLI flags. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// A log line produced before logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigNotice {
    pub level: Level,
    pub message: String,
}

impl ConfigNotice {
    fn info(message: String) -> Self {
        Self { level: Level::Info, message }
    }

    fn warn(message: String) -> Self {
        Self { level: Level::Warn, message }
    }

    pub fn emit(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "navstack.log";
pub const LOG_LEVEL_ENV: &str = "NAVSTACK_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub show_link_row: bool,
    pub true_color: bool,
    pub mouse: bool,
    /// Notices from loading plus any from resolution, in order.
    pub notices: Vec<ConfigNotice>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.navstack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navstack").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise `~/.navstack/config.toml`.
///
/// A missing default file is generated (commented out) and treated as
/// empty. A missing explicit file is an I/O error. A malformed file is
/// `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<NavstackConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            return Ok(NavstackConfig {
                notices: vec![ConfigNotice::warn(
                    "Could not determine home directory, using default config".to_string(),
                )],
                ..Default::default()
            });
        }
    };

    if !path.exists() {
        let mut notices = vec![ConfigNotice::info(format!(
            "No config file found, generating default at {}",
            path.display()
        ))];
        notices.extend(generate_default_config(&path));
        return Ok(NavstackConfig {
            notices,
            ..Default::default()
        });
    }

    load_from(&path)
}

fn load_from(path: &Path) -> Result<NavstackConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: NavstackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    config
        .notices
        .push(ConfigNotice::info(format!("Loaded config from {}", path.display())));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
/// Returns a warning if it could not be written.
fn generate_default_config(path: &Path) -> Option<ConfigNotice> {
    let default_content = r#"# navstack configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
#                                    # Or set NAVSTACK_LOG_LEVEL env var
# log_file = "navstack.log"

# [ui]
# show_link_row = true               # Show the "I am a NavigationLink." row
# true_color = true                  # false = 16-color ANSI tints
# mouse = true                       # Click rows and breadcrumbs
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            return Some(ConfigNotice::warn(format!(
                "Failed to create config directory: {e}"
            )));
        }
    }
    fs::write(path, default_content)
        .err()
        .map(|e| ConfigNotice::warn(format!("Failed to write default config: {e}")))
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &NavstackConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    resolve_with_env(config, cli, env_level.as_deref())
}

fn resolve_with_env(
    config: &NavstackConfig,
    cli: &CliOverrides,
    env_level: Option<&str>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let level_text = cli
        .log_level
        .as_deref()
        .or(env_level)
        .or(config.general.log_level.as_deref());
    let mut notices = config.notices.clone();
    let log_level = match level_text.map(parse_level) {
        Some(Ok(level)) => level,
        Some(Err(notice)) => {
            notices.push(notice);
            DEFAULT_LOG_LEVEL
        }
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        log_level,
        log_file,
        show_link_row: config.ui.show_link_row.unwrap_or(true),
        true_color: config.ui.true_color.unwrap_or(true),
        mouse: config.ui.mouse.unwrap_or(true),
        notices,
    }
}

fn parse_level(text: &str) -> Result<LevelFilter, ConfigNotice> {
    text.trim().parse().map_err(|_| {
        ConfigNotice::warn(format!(
            "Unknown log level {text:?}, using {DEFAULT_LOG_LEVEL}"
        ))
    })
}
