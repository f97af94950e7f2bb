// Chipset configuration: load/save settings persisted by the host emulator,
// following the same serde + TOML pattern as the rest of this crate's
// ambient configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const CONFIG_FILE: &str = "vip_config.toml";

/// Chipset-level configuration: scheduling and diagnostic options a host
/// emulator may want to tweak without touching core code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipsetConfig {
    /// Default FRMCYC value applied on reset (game-frame divisor).
    pub default_frmcyc: u16,

    /// Log a warning whenever SPT underflows instead of silently skipping.
    pub log_spt_underflow: bool,

    /// Log unknown register accesses (spec.md §7 "unknown register
    /// access: log and return 0xFFFF").
    pub log_unknown_register_access: bool,
}

impl Default for ChipsetConfig {
    fn default() -> Self {
        ChipsetConfig {
            default_frmcyc: 0,
            log_spt_underflow: true,
            log_unknown_register_access: true,
        }
    }
}

/// Error type for configuration load/save (spec.md ambient error handling:
/// manual `Display` + `std::error::Error`, matching the rest of this crate).
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Serialize(e) => write!(f, "failed to serialize config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl ChipsetConfig {
    pub fn load(path: &PathBuf) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn load_or_default() -> Self {
        let path = PathBuf::from(CONFIG_FILE);
        Self::load(&path).unwrap_or_default()
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
