//! # Campus Assistant Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! This module loads, merges and validates the Campus Assistant configuration.
//! Settings are layered so that a project or an explicitly named file can
//! override a few values without restating the rest.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Explicit file passed with `--config` or the `CAMPUS_CONFIG` variable
//! 2. Project-specific `.campus.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! Every file is parsed into a partial `FileConfig` where each value is
//! optional; each layer only overwrites the values it actually sets.
//! Relative `static_dir` paths resolve against the directory of the file that
//! declared them, after `~` expansion.
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Smart Campus Assistant"
//! typing_delay_ms = 1000
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! enable_cors = true
//! static_dir = "~/campus-widget"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let delay = cfg.assistant.typing_delay();
//! ```
//!
use crate::core::error::{CampusError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Name of the project-level configuration file searched for upwards from the current directory.
pub const PROJECT_CONFIG_FILENAME: &str = ".campus.toml";
pub const DEFAULT_ASSISTANT_NAME: &str = "Smart Campus Assistant";
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1000;
pub const DEFAULT_PORT: u16 = 8000;
/// Upper bound for the simulated typing delay.
pub const MAX_TYPING_DELAY_MS: u64 = 10_000;

/// Effective configuration after all sources have been merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub server: ServerSettings,
}

/// Settings for the conversational shell (`campus chat`, `campus ask`).
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    /// Display name used in the banner and on assistant lines.
    pub name: String,
    /// Artificial pause before each reply in interactive sessions.
    pub typing_delay_ms: u64,
}

/// Settings for the local HTTP API (`campus srv`).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Optional directory with a browser front end, served under `/`.
    pub static_dir: Option<PathBuf>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ASSISTANT_NAME.to_string(),
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
        }
    }
}

impl AssistantConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            enable_cors: true,
            static_dir: None,
        }
    }
}

// --- On-disk representation ---

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
struct FileConfig {
    #[serde(default)]
    assistant: FileAssistantConfig,
    #[serde(default)]
    server: FileServerConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileAssistantConfig {
    name: Option<String>,
    typing_delay_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileServerConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
    enable_cors: Option<bool>,
    static_dir: Option<String>,
}

impl Config {
    /// Overlays the values present in `file` onto `self`.
    /// `origin` is the file the values came from, used to anchor relative paths.
    fn apply(&mut self, file: FileConfig, origin: &Path) {
        if let Some(name) = file.assistant.name {
            self.assistant.name = name;
        }
        if let Some(delay) = file.assistant.typing_delay_ms {
            self.assistant.typing_delay_ms = delay;
        }
        if let Some(host) = file.server.host {
            self.server.host = host;
        }
        if let Some(port) = file.server.port {
            self.server.port = port;
        }
        if let Some(enable_cors) = file.server.enable_cors {
            self.server.enable_cors = enable_cors;
        }
        if let Some(raw) = file.server.static_dir {
            let resolved = resolve_config_path(&raw, origin);
            debug!("Resolved static_dir '{}' to {}", raw, resolved.display());
            self.server.static_dir = Some(resolved);
        }
    }
}

/// # Load Configuration (`load_config`)
///
/// Builds the effective configuration from defaults, the user file, the
/// nearest project file and an optional explicit file, then validates it.
///
/// ## Errors
///
/// Fails if a file exists but cannot be read or parsed, if the explicit file
/// does not exist, or if the merged configuration is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = user_config_path() {
        if path.is_file() {
            info!("Loading user configuration from: {}", path.display());
            config.apply(load_config_from_path(&path)?, &path);
        } else {
            debug!("User configuration file not found at {}", path.display());
        }
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_path(&current_dir) {
        info!("Loading project configuration from: {}", path.display());
        config.apply(load_config_from_path(&path)?, &path);
    }

    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(anyhow!(CampusError::Config(format!(
                "Configuration file '{}' does not exist.",
                path.display()
            ))));
        }
        info!("Loading configuration from: {}", path.display());
        config.apply(load_config_from_path(path)?, path);
    }

    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "ChristiMahu", "campus-assistant") {
        Some(dirs) => Some(dirs.config_dir().join("config.toml")),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.campus.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let candidate = path.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn resolve_config_path(raw: &str, origin: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        return expanded;
    }
    match origin.parent() {
        Some(parent) => parent.join(expanded),
        None => expanded,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(CampusError::Config(
            "assistant.name must not be empty.".to_string()
        )));
    }
    if config.assistant.typing_delay_ms > MAX_TYPING_DELAY_MS {
        return Err(anyhow!(CampusError::Config(format!(
            "assistant.typing_delay_ms is {} but must be at most {}.",
            config.assistant.typing_delay_ms, MAX_TYPING_DELAY_MS
        ))));
    }
    if config.server.port == 0 {
        return Err(anyhow!(CampusError::Config(
            "server.port must not be 0.".to_string()
        )));
    }
    if let Some(dir) = &config.server.static_dir {
        if !dir.is_dir() {
            return Err(anyhow!(CampusError::Config(format!(
                "server.static_dir '{}' is not a directory.",
                dir.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.assistant.name, "Smart Campus Assistant");
        assert_eq!(config.assistant.typing_delay(), Duration::from_secs(1));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(config.server.enable_cors);
        assert!(config.server.static_dir.is_none());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let toml_content = r#"
            [assistant]
            typing_delay_ms = 250

            [server]
            host = "0.0.0.0"
        "#;
        let file: FileConfig = toml::from_str(toml_content).expect("Failed to parse TOML");

        let mut config = Config::default();
        config.apply(file, Path::new("/etc/campus/config.toml"));

        assert_eq!(config.assistant.name, DEFAULT_ASSISTANT_NAME); // Untouched
        assert_eq!(config.assistant.typing_delay_ms, 250);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert_eq!(config.server.port, DEFAULT_PORT); // Untouched
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str(
            r#"
            [assistant]
            personality = "cheerful"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_later_layers_override_earlier_ones() {
        let mut config = Config::default();
        let user: FileConfig = toml::from_str(
            r#"
            [assistant]
            name = "Campus Bot"
            typing_delay_ms = 500
        "#,
        )
        .unwrap();
        let project: FileConfig = toml::from_str(
            r#"
            [assistant]
            typing_delay_ms = 0
        "#,
        )
        .unwrap();

        config.apply(user, Path::new("/home/me/.config/campus/config.toml"));
        config.apply(project, Path::new("/work/.campus.toml"));

        assert_eq!(config.assistant.name, "Campus Bot");
        assert_eq!(config.assistant.typing_delay_ms, 0);
    }

    #[test]
    fn test_static_dir_resolution() {
        let origin = Path::new("/srv/site/.campus.toml");
        assert_eq!(
            resolve_config_path("public", origin),
            PathBuf::from("/srv/site/public")
        );
        assert_eq!(
            resolve_config_path("/var/www", origin),
            PathBuf::from("/var/www")
        );

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(resolve_config_path("~/widget", origin), home_dir.join("widget"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_project_search_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_validate_config_rejects_long_delay() {
        let mut config = Config::default();
        config.assistant.typing_delay_ms = MAX_TYPING_DELAY_MS + 1;
        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("typing_delay_ms"));
    }

    #[test]
    fn test_validate_config_rejects_blank_name() {
        let mut config = Config::default();
        config.assistant.name = "   ".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_static_dir_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let mut config = Config::default();
        config.server.static_dir = Some(file_path);
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let err = load_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
