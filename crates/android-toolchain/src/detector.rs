//! Toolchain Detection
//!
//! Runs the whole discovery pass: find the SDK and JDK roots, resolve
//! every tool, and publish a [`ToolchainRegistry`] only if all of it
//! succeeded.

use std::path::PathBuf;
use droidscout_core::ScoutConfig;
use tracing::{debug, error, info};

use crate::error::{ToolchainError, INSTALLATION_DOCS};
use crate::host::HostEnvironment;
use crate::jdk::{detect_jdk_root, JdkLocator};
use crate::os_registry::{default_registry, RegistryReader};
use crate::platform::{detect_sdk_root, PlatformLocator};
use crate::probe::PathProbe;
use crate::registry::ToolchainRegistry;

/// Toolchain detector
pub struct ToolchainDetector {
    host: HostEnvironment,
    config: ScoutConfig,
    registry: Box<dyn RegistryReader>,
}

impl ToolchainDetector {
    /// Create a detector using this platform's registry reader
    pub fn new(host: HostEnvironment, config: ScoutConfig) -> Self {
        Self::with_registry(host, config, default_registry())
    }

    /// Create a detector for the current process environment
    pub fn from_process(config: ScoutConfig) -> Self {
        Self::new(HostEnvironment::from_process(), config)
    }

    /// Create a detector with an explicit registry reader
    pub fn with_registry(
        host: HostEnvironment,
        config: ScoutConfig,
        registry: Box<dyn RegistryReader>,
    ) -> Self {
        Self {
            host,
            config,
            registry,
        }
    }

    /// The environment snapshot this detector reads
    pub fn host(&self) -> &HostEnvironment {
        &self.host
    }

    fn probe(&self) -> PathProbe {
        PathProbe::new(self.config.scan.max_depth)
    }

    /// Detect the Android SDK root
    pub fn detect_sdk_root(&self) -> Option<PathBuf> {
        detect_sdk_root(&self.host, &self.config.android, self.registry.as_ref())
    }

    /// Detect the JDK root
    pub fn detect_jdk_root(&self) -> Option<PathBuf> {
        detect_jdk_root(&self.host, &self.config.java, self.registry.as_ref())
    }

    /// Resolve the complete toolchain.
    ///
    /// Nothing is returned unless all seven dependencies were found.
    pub fn setup(&self) -> Result<ToolchainRegistry, ToolchainError> {
        info!("Detecting Android SDK...");

        let sdk_root = match self.detect_sdk_root() {
            Some(root) => root,
            None => {
                error!("Could not find an Android SDK, please make sure it is installed.");
                error!("You can read about how the Android SDK is located here: {}", INSTALLATION_DOCS);
                return Err(ToolchainError::SdkNotFound);
            }
        };
        debug!("Android SDK location set to {:?}", sdk_root);

        let android = PlatformLocator::new(self.probe())
            .locate(&sdk_root)
            .map_err(|e| {
                error!("Could not locate Android dependency: {}", e);
                e
            })?;

        info!("Detecting JDK...");

        let jdk_root = self.detect_jdk_root();
        debug!("Java SDK location set to {:?}", jdk_root);

        let java = JdkLocator::new(self.probe())
            .locate(&self.host, jdk_root.as_deref())
            .map_err(|e| {
                match e {
                    ToolchainError::InvalidJdkHome { .. } => {
                        error!("Could not find a Java Development Kit, please make sure it is installed.")
                    }
                    _ => error!("Could not find Java dependency: {}", e),
                }
                e
            })?;

        info!("Toolchain ready: SDK at {:?}, JDK at {:?}", sdk_root, jdk_root);

        Ok(ToolchainRegistry::new(sdk_root, jdk_root, android, java))
    }
}
