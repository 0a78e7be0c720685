//! Application Configuration
//!
//! Manages the user settings that steer toolchain discovery:
//! - Explicit Android SDK / JDK roots
//! - Extra SDK install locations
//! - JDK versions probed in the OS registry
//! - Directory scan limits

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use tracing::{info, debug};

use crate::error::{Result, ScoutError};

/// Android SDK configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AndroidConfig {
    /// Explicit Android SDK root, consulted after ANDROID_HOME / ANDROID_SDK_ROOT
    pub sdk_path: Option<PathBuf>,
    /// Additional install locations checked after the conventional ones
    pub extra_sdk_locations: Vec<PathBuf>,
}

/// JDK configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JavaConfig {
    /// Explicit JDK root, consulted after JAVA_HOME
    pub jdk_path: Option<PathBuf>,
    /// JDK versions looked up in the registry, newest first
    pub registry_versions: Vec<String>,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            jdk_path: None,
            registry_versions: ["1.9", "1.8", "1.7", "1.6"]
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

/// Directory scan configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// How many directory levels below a search root are descended
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { max_depth: 12 }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoutConfig {
    /// Configuration version for migrations
    pub version: u32,
    /// Android SDK settings
    pub android: AndroidConfig,
    /// JDK settings
    pub java: JavaConfig,
    /// Scan settings
    pub scan: ScanConfig,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            version: 1,
            android: AndroidConfig::default(),
            java: JavaConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl ScoutConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "droidscout", "DroidScout")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from the default location, falling back to defaults
    pub async fn load() -> Result<Self> {
        let config_file = Self::config_file()
            .ok_or_else(|| ScoutError::Config("Cannot determine config path".into()))?;

        Self::load_from(&config_file).await
    }

    /// Load configuration from a specific file
    pub async fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Loading config from {:?}", path);
            let contents = tokio::fs::read_to_string(path).await?;
            let config: ScoutConfig = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(ScoutConfig::default())
        }
    }

    /// Save configuration to the default location
    pub async fn save(&self) -> Result<PathBuf> {
        let config_file = Self::config_file()
            .ok_or_else(|| ScoutError::Config("Cannot determine config path".into()))?;

        self.save_to(&config_file).await?;
        Ok(config_file)
    }

    /// Save configuration to a specific file
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }

    /// Reject settings the locators cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_depth == 0 {
            return Err(ScoutError::Config("scan.max_depth must be at least 1".into()));
        }
        Ok(())
    }
}
