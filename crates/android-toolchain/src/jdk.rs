//! JDK locator
//!
//! Finds the JDK root and resolves java, keytool and jarsigner. A tool on
//! the search path always beats one inside the JDK root.

use std::path::{Path, PathBuf};
use droidscout_core::JavaConfig;
use tracing::debug;

use crate::dependency::{DependencyKey, DependencySet};
use crate::error::ToolchainError;
use crate::host::HostEnvironment;
use crate::os_registry::{RegistryHive, RegistryReader};
use crate::probe::PathProbe;
use crate::vendor_config::{self, JAVA_SDK_ELEMENT, PATH_ATTRIBUTE};

/// Registry key prefix the JDK installers register under
pub const JDK_REGISTRY_KEY: &str = r"SOFTWARE\JavaSoft\Java Development Kit";

/// Determine the JDK root, first strategy that answers wins.
///
/// Order: JAVA_HOME, the configured `jdk_path`, the vendor config file,
/// the registry (one key per configured version, newest first).
pub fn detect_jdk_root(
    host: &HostEnvironment,
    config: &JavaConfig,
    registry: &dyn RegistryReader,
) -> Option<PathBuf> {
    if let Some(ref path) = host.java_home {
        debug!("Setting Java SDK location to $JAVA_HOME");
        return Some(path.clone());
    }

    if let Some(ref path) = config.jdk_path {
        debug!("Setting Java SDK location from configuration");
        return Some(path.clone());
    }

    if let Some(file) = host.vendor_config_file() {
        if let Some(path) = vendor_config::read_attribute(&file, JAVA_SDK_ELEMENT, PATH_ATTRIBUTE) {
            debug!("Setting Java SDK location from {:?}", file);
            return Some(PathBuf::from(path));
        }
    }

    for version in &config.registry_versions {
        let key = format!(r"{}\{}", JDK_REGISTRY_KEY, version);
        if let Some(path) = registry
            .read_string(RegistryHive::LocalMachine, &key, "JavaHome")
            .map(PathBuf::from)
        {
            if path.exists() {
                debug!("Setting Java SDK location from {} {}", RegistryHive::LocalMachine, key);
                return Some(path);
            }
        }
    }

    None
}

/// Resolves the Java tools from the search path or a JDK root
#[derive(Debug, Clone, Copy, Default)]
pub struct JdkLocator {
    probe: PathProbe,
}

impl JdkLocator {
    pub fn new(probe: PathProbe) -> Self {
        Self { probe }
    }

    /// Resolve java, keytool and jarsigner.
    ///
    /// A tool that is neither on the search path nor scannable because
    /// `jdk_root` is absent fails at once with `InvalidJdkHome`. Tools missing
    /// from a given root are reported after all three were tried.
    pub fn locate(
        &self,
        host: &HostEnvironment,
        jdk_root: Option<&Path>,
    ) -> Result<DependencySet, ToolchainError> {
        let jdk_root = jdk_root.filter(|root| !root.as_os_str().is_empty());
        let keys = [DependencyKey::Java, DependencyKey::Keytool, DependencyKey::Jarsigner];

        let mut resolved = Vec::with_capacity(keys.len());
        for key in keys {
            let path = self.find(host, jdk_root, key)?;
            debug!("Set {} path to {:?}", key.file_name(), path);
            resolved.push((key, path));
        }

        resolved
            .into_iter()
            .map(|(key, path)| {
                path.map(|p| (key, p)).ok_or_else(|| ToolchainError::InvalidEnvironment {
                    tool: key.file_name().to_string(),
                    searched: jdk_root.map(Path::to_path_buf).unwrap_or_default(),
                })
            })
            .collect()
    }

    fn find(
        &self,
        host: &HostEnvironment,
        jdk_root: Option<&Path>,
        key: DependencyKey,
    ) -> Result<Option<PathBuf>, ToolchainError> {
        if let Some(path) = host.find_on_search_path(key.file_name()) {
            debug!("Found {} on PATH", key.file_name());
            return Ok(Some(path));
        }

        let root = jdk_root.ok_or_else(|| ToolchainError::InvalidJdkHome {
            tool: key.file_name().to_string(),
        })?;

        Ok(self.probe.scan_for_path(root, key.file_name(), &["bin"]))
    }
}
