//! Android platform locator
//!
//! Finds the Android SDK root and resolves adb, aapt, zipalign and
//! android.jar inside it.

use std::path::{Path, PathBuf};
use droidscout_core::AndroidConfig;
use tracing::debug;

use crate::dependency::{DependencyKey, DependencySet};
use crate::error::ToolchainError;
use crate::host::HostEnvironment;
use crate::os_registry::{RegistryHive, RegistryReader};
use crate::probe::{PathProbe, NO_PRIORITY};
use crate::vendor_config::{self, ANDROID_SDK_ELEMENT, PATH_ATTRIBUTE};
use crate::versions::{select_build_tools_dirs, select_platform_dir};

/// Install locations used by Xamarin and older standalone SDK installers
pub const CONVENTIONAL_SDK_LOCATIONS: &[&str] = &[
    "~/Library/Developer/Xamarin/android-sdk-mac_x86",
    r"C:\Android\android-sdk",
];

/// Registry values that may hold the SDK root, checked in order
pub const SDK_REGISTRY_VALUES: &[(RegistryHive, &str, &str)] = &[
    (RegistryHive::CurrentUser, r"Software\Novell\Mono for Android", "AndroidSdkDirectory"),
    (RegistryHive::LocalMachine, r"Software\Android SDK Tools", "Path"),
];

/// Determine the Android SDK root, first strategy that answers wins.
///
/// Order: ANDROID_HOME, ANDROID_SDK_ROOT, the configured `sdk_path`, the
/// vendor config file, the conventional install locations, the registry.
pub fn detect_sdk_root(
    host: &HostEnvironment,
    config: &AndroidConfig,
    registry: &dyn RegistryReader,
) -> Option<PathBuf> {
    if let Some(ref path) = host.android_home {
        debug!("Setting Android SDK location to $ANDROID_HOME");
        return Some(path.clone());
    }

    if let Some(ref path) = host.android_sdk_root {
        debug!("Setting Android SDK location to $ANDROID_SDK_ROOT");
        return Some(path.clone());
    }

    if let Some(ref path) = config.sdk_path {
        debug!("Setting Android SDK location from configuration");
        return Some(path.clone());
    }

    if let Some(file) = host.vendor_config_file() {
        if let Some(path) = vendor_config::read_attribute(&file, ANDROID_SDK_ELEMENT, PATH_ATTRIBUTE) {
            debug!("Setting Android SDK location from {:?}", file);
            return Some(PathBuf::from(path));
        }
    }

    let conventional = CONVENTIONAL_SDK_LOCATIONS
        .iter()
        .map(PathBuf::from)
        .chain(config.extra_sdk_locations.iter().cloned())
        .map(|path| host.expand_home(&path));
    for path in conventional {
        if path.exists() {
            debug!("Setting Android SDK location to existing {:?}", path);
            return Some(path);
        }
    }

    for (hive, key, value) in SDK_REGISTRY_VALUES {
        if let Some(path) = registry.read_string(*hive, key, value).map(PathBuf::from) {
            if path.exists() {
                debug!("Setting Android SDK location from {} {}", hive, key);
                return Some(path);
            }
        }
    }

    None
}

/// Resolves the Android tools inside an SDK root
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformLocator {
    probe: PathProbe,
}

impl PlatformLocator {
    pub fn new(probe: PathProbe) -> Self {
        Self { probe }
    }

    /// Resolve adb, aapt, zipalign and android.jar, or fail on the first one missing
    pub fn locate(&self, sdk_root: &Path) -> Result<DependencySet, ToolchainError> {
        let tool_dirs = select_build_tools_dirs(sdk_root);

        let adb = self.find(sdk_root, DependencyKey::Adb, &[PathBuf::from("platform-tools")]);
        let aapt = self.find(sdk_root, DependencyKey::Aapt, &tool_dirs);
        let zipalign = self.find(sdk_root, DependencyKey::Zipalign, &tool_dirs);

        let adb = required(adb, DependencyKey::Adb, sdk_root)?;
        let aapt = required(aapt, DependencyKey::Aapt, sdk_root)?;
        let zipalign = required(zipalign, DependencyKey::Zipalign, sdk_root)?;

        debug!("Set aapt path to {:?}", aapt);
        debug!("Set zipalign path to {:?}", zipalign);
        debug!("Set adb path to {:?}", adb);

        let platforms = sdk_root.join("platforms");
        // android.jar must come from the selected platform only
        let android_jar = select_platform_dir(sdk_root).and_then(|dir| {
            self.probe
                .scan_for_path(&sdk_root.join(dir), DependencyKey::AndroidJar.file_name(), NO_PRIORITY)
        });
        let android_jar = required(android_jar, DependencyKey::AndroidJar, &platforms)?;

        debug!("Set android jar path to {:?}", android_jar);

        Ok([
            (DependencyKey::Adb, adb),
            (DependencyKey::Aapt, aapt),
            (DependencyKey::Zipalign, zipalign),
            (DependencyKey::AndroidJar, android_jar),
        ]
        .into_iter()
        .collect())
    }

    fn find(&self, sdk_root: &Path, key: DependencyKey, prioritized: &[PathBuf]) -> Option<PathBuf> {
        self.probe.scan_for_path(sdk_root, key.file_name(), prioritized)
    }
}

fn required(found: Option<PathBuf>, key: DependencyKey, searched: &Path) -> Result<PathBuf, ToolchainError> {
    found.ok_or_else(|| ToolchainError::InvalidEnvironment {
        tool: key.file_name().to_string(),
        searched: searched.to_path_buf(),
    })
}
