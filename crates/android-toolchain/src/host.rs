//! Host environment snapshot
//!
//! Captures the environment variables discovery depends on, once, so the
//! locators never read the process environment themselves.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The parts of the host environment used to find the toolchain
#[derive(Debug, Clone, Default)]
pub struct HostEnvironment {
    /// ANDROID_HOME
    pub android_home: Option<PathBuf>,
    /// ANDROID_SDK_ROOT
    pub android_sdk_root: Option<PathBuf>,
    /// JAVA_HOME
    pub java_home: Option<PathBuf>,
    /// PATH, unsplit
    pub search_path: Option<OsString>,
    /// User home directory
    pub home_dir: Option<PathBuf>,
}

impl HostEnvironment {
    /// Snapshot the current process environment
    pub fn from_process() -> Self {
        Self {
            android_home: non_empty_var("ANDROID_HOME").map(PathBuf::from),
            android_sdk_root: non_empty_var("ANDROID_SDK_ROOT").map(PathBuf::from),
            java_home: non_empty_var("JAVA_HOME").map(PathBuf::from),
            search_path: non_empty_var("PATH"),
            home_dir: dirs::home_dir(),
        }
    }

    /// Location of the Xamarin/Mono vendor config file
    pub fn vendor_config_file(&self) -> Option<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(".config").join("xbuild").join("monodroid-config.xml"))
    }

    /// Find `file_name` in the search path, first entry wins.
    ///
    /// Only executable files count: a `java` without the executable bit is
    /// skipped here and the JDK root is searched instead.
    pub fn find_on_search_path(&self, file_name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref().filter(|p| !p.is_empty())?;
        let cwd = self.home_dir.clone().unwrap_or_else(|| PathBuf::from("."));

        match which::which_in(file_name, Some(search_path), &cwd) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("'{}' not on search path: {}", file_name, e);
                None
            }
        }
    }

    /// Expand a leading `~` against the home directory
    pub fn expand_home(&self, path: &Path) -> PathBuf {
        match (path.strip_prefix("~"), self.home_dir.as_ref()) {
            (Ok(rest), Some(home)) => home.join(rest),
            _ => path.to_path_buf(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<OsString> {
    std::env::var_os(key).filter(|value| !value.is_empty())
}
