//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sana/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::exercise::{Exercise, ExerciseCategory, builtin_catalog};
use crate::core::state::Tab;
use crate::responder::types::DEFAULT_GREETING;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SanaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub thinking_delay_ms: Option<u64>,
    pub default_tab: Option<String>,
    pub greeting: Option<String>,
}

/// A user-defined exercise appended to the built-in catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExerciseEntry {
    pub title: String,
    pub description: Option<String>,
    pub duration_secs: u32,
    pub category: Option<ExerciseCategory>,
    pub instructions: Vec<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_THINKING_DELAY_MS: u64 = 1500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub thinking_delay_ms: u64,
    pub default_tab: Tab,
    pub greeting: String,
    pub catalog: Vec<Exercise>,
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

/// Returns the path to `~/.sana/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sana").join("config.toml"))
}

/// Load config from `~/.sana/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SanaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SanaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SanaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SanaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SanaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Sana Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# thinking_delay_ms = 1500     # Pause before a chat reply appears
# default_tab = "chat"         # "chat", "checkin", "exercises", "insights", "resources"
# greeting = "Hello! I'm your wellness companion."

# Additional exercises are appended to the built-in catalog:
# [[exercises]]
# title = "Three Breaths"
# description = "A one-minute reset"
# duration_secs = 60
# category = "breathing"       # "breathing", "meditation", "body"
# instructions = [
#     "Sit still and soften your gaze",
#     "Take three slow breaths, counting each exhale",
# ]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_tab` is from the `--tab` flag (None = not specified).
pub fn resolve(config: &SanaConfig, cli_tab: Option<Tab>) -> ResolvedConfig {
    // Thinking delay: env → config → default
    let thinking_delay_ms = std::env::var("SANA_THINKING_DELAY_MS")
        .ok()
        .and_then(|v| match v.parse() {
            Ok(ms) => Some(ms),
            Err(_) => {
                warn!("Ignoring unparseable SANA_THINKING_DELAY_MS={v}");
                None
            }
        })
        .or(config.general.thinking_delay_ms)
        .unwrap_or(DEFAULT_THINKING_DELAY_MS);

    // Starting tab: CLI → env → config → default
    let default_tab = cli_tab
        .or_else(|| {
            std::env::var("SANA_DEFAULT_TAB")
                .ok()
                .and_then(|v| Tab::from_name(&v))
        })
        .or_else(|| {
            config
                .general
                .default_tab
                .as_deref()
                .and_then(Tab::from_name)
        })
        .unwrap_or_default();

    let greeting = config
        .general
        .greeting
        .clone()
        .unwrap_or_else(|| DEFAULT_GREETING.to_string());

    ResolvedConfig {
        thinking_delay_ms,
        default_tab,
        greeting,
        catalog: build_catalog(&config.exercises),
    }
}

/// Built-in catalog plus validated user entries. Entries with no duration
/// or no instructions are skipped rather than erroring.
fn build_catalog(entries: &[ExerciseEntry]) -> Vec<Exercise> {
    let mut catalog = builtin_catalog();
    for entry in entries {
        if entry.duration_secs == 0 || entry.instructions.is_empty() {
            warn!("Skipping invalid exercise entry '{}'", entry.title);
            continue;
        }
        catalog.push(Exercise {
            id: slugify(&entry.title),
            title: entry.title.clone(),
            description: entry.description.clone().unwrap_or_default(),
            duration_secs: entry.duration_secs,
            category: entry.category.unwrap_or(ExerciseCategory::Meditation),
            instructions: entry.instructions.clone(),
        });
    }
    catalog
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}
