//! Android Toolchain Discovery
//!
//! Locates, on a host in an unknown configuration:
//! - the Android SDK (adb, aapt, zipalign, android.jar)
//! - the JDK (java, keytool, jarsigner)
//!
//! and publishes the resolved paths as a [`ToolchainRegistry`].

pub mod dependency;
pub mod detector;
pub mod env;
pub mod error;
pub mod host;
pub mod jdk;
pub mod os_registry;
pub mod platform;
pub mod probe;
pub mod registry;
pub mod vendor_config;
pub mod versions;

pub use dependency::{DependencyGroup, DependencyKey, DependencySet};
pub use detector::ToolchainDetector;
pub use env::EnvManager;
pub use error::{ToolchainError, INSTALLATION_DOCS};
pub use host::HostEnvironment;
pub use jdk::JdkLocator;
pub use os_registry::{default_registry, NoRegistry, RegistryHive, RegistryReader};
pub use platform::PlatformLocator;
pub use probe::PathProbe;
pub use registry::ToolchainRegistry;
pub use versions::{select_build_tools_dirs, select_platform_dir, VersionToken};
