//! YAML configuration surface
//!
//! Parses a binding configuration (matching policy plus the initial
//! ordered binding lists) into typed values and installs it into a
//! [`Registry`]. File discovery and watching belong to the host
//! application; this module only parses what it is handed.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::{info, warn};

use crate::dispatch::MatchingPolicy;
use crate::registry::Registry;

/// Root structure of a bindings YAML document
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// `"keycode"` or `"keysym"`; keycode when omitted
    #[serde(default)]
    pub policy: Option<String>,
    /// Ordered default key bindings
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
    /// Default mouse bindings
    #[serde(default)]
    pub mouse: Vec<MouseEntry>,
}

/// A single key binding entry
#[derive(Debug, Deserialize)]
pub struct KeyEntry {
    /// Binding specification, e.g. `"Ctrl-t"`
    pub key: String,
    /// Named procedure in the scripting runtime
    pub action: String,
}

/// A single mouse binding entry
#[derive(Debug, Deserialize)]
pub struct MouseEntry {
    /// Event name, e.g. `"DoubleClick"`
    pub event: String,
    pub action: String,
}

impl Config {
    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Resolve the configured matching policy.
    ///
    /// An unrecognized policy string is the one fatal misconfiguration:
    /// it is rejected here, before a registry exists, so dispatch never
    /// sees it.
    pub fn matching_policy(&self) -> Result<MatchingPolicy, ConfigError> {
        match self.policy {
            None => Ok(MatchingPolicy::default()),
            Some(ref s) => s.parse(),
        }
    }

    /// Install every configured binding into the registry.
    ///
    /// Actions unknown to the scripting runtime are logged and skipped;
    /// bad specifications are handled (logged, no mutation) by the
    /// bind methods themselves.
    pub fn install(&self, registry: &mut Registry) {
        for entry in &self.keys {
            match registry.register_callback(&entry.action) {
                Some(handle) => registry.bind_key(&entry.key, handle),
                None => warn!("unknown action [{}] for [{}]", entry.action, entry.key),
            }
        }
        for entry in &self.mouse {
            match registry.register_callback(&entry.action) {
                Some(handle) => registry.bind_mouse(&entry.event, handle),
                None => warn!("unknown action [{}] for [{}]", entry.action, entry.event),
            }
        }
        info!(
            "registry now holds {} key and {} mouse bindings",
            registry.key_bindings().len(),
            registry.mouse_bindings().len()
        );
    }
}

/// Load a configuration from a YAML file
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
    Config::from_yaml(&content)
}

/// The user's bindings configuration path
///
/// Returns `~/.config/termkey/bindings.yaml` on Unix
/// Returns `%APPDATA%\termkey\bindings.yaml` on Windows
pub fn default_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join("termkey").join("bindings.yaml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        dirs::config_dir().map(|config| config.join("termkey").join("bindings.yaml"))
    }
}

/// Errors from loading or interpreting a configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    /// Unrecognized matching policy value; fatal misconfiguration
    InvalidPolicy(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidPolicy(p) => write!(f, "unknown kb_policy: {}", p),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FromStr for MatchingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keycode" => Ok(MatchingPolicy::UseKeycode),
            "keysym" => Ok(MatchingPolicy::UseKeysym),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}
