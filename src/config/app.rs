//! Application configuration loading from config.toml
//!
//! The config file names the default company scope, where and under which keys session
//! markers are kept, and the seed stores, employees and attendance records the
//! in-memory directory starts from.

use crate::{
    core::{
        directory::RecordDirectory,
        session::{ADMIN_KEY, WORKER_KEY},
    },
    entities::{AttendanceRecord, Employee, Store},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_VAR: &str = "ROSTER_CONFIG";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Company code of the default account scope
    pub company_code: String,
    /// Session marker storage
    #[serde(default)]
    pub session: SessionConfig,
    /// Stores to seed
    #[serde(default)]
    pub stores: Vec<Store>,
    /// Employees to seed
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance records to seed
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

/// Where session markers live
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// TOML file holding the markers
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
    /// Key of the admin account marker
    #[serde(default = "default_admin_key")]
    pub admin_key: String,
    /// Key of the worker session marker
    #[serde(default = "default_worker_key")]
    pub worker_key: String,
    /// Employee the "act as worker" switch targets
    #[serde(default)]
    pub worker_target: Option<i64>,
}

fn default_session_path() -> PathBuf {
    PathBuf::from("data/session.toml")
}

fn default_admin_key() -> String {
    ADMIN_KEY.to_string()
}

fn default_worker_key() -> String {
    WORKER_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
            admin_key: default_admin_key(),
            worker_key: default_worker_key(),
            worker_target: None,
        }
    }
}

impl AppConfig {
    /// Builds the in-memory directory from the seed data.
    #[must_use]
    pub fn seed_directory(&self) -> RecordDirectory {
        RecordDirectory::new(
            self.employees.clone(),
            self.attendance.clone(),
            self.stores.clone(),
        )
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })?;
    info!(
        company_code = %config.company_code,
        stores = config.stores.len(),
        employees = config.employees.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Config file location: `ROSTER_CONFIG` if set, otherwise `./config.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR).map_or_else(|_| PathBuf::from("config.toml"), PathBuf::from)
}

/// Loads configuration from the default location
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_default_config() -> Result<AppConfig> {
    load_config(config_path())
}
