//! Environment Manager
//!
//! Turns a resolved toolchain into the environment variables a child
//! process (build script, test runner) needs to find the same tools.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::dependency::DependencyKey;
use crate::registry::ToolchainRegistry;

/// Environment exporter for a resolved toolchain
pub struct EnvManager {
    android_home: PathBuf,
    java_home: Option<PathBuf>,
    path_additions: Vec<PathBuf>,
    original_path: Option<OsString>,
}

impl EnvManager {
    /// Build from a toolchain and the PATH the child would otherwise inherit
    pub fn new(toolchain: &ToolchainRegistry, original_path: Option<OsString>) -> Self {
        let mut path_additions: Vec<PathBuf> = Vec::new();
        for (key, path) in toolchain.iter() {
            if key == DependencyKey::AndroidJar {
                continue;
            }
            if let Some(dir) = path.parent() {
                let dir = dir.to_path_buf();
                if !path_additions.contains(&dir) {
                    path_additions.push(dir);
                }
            }
        }

        Self {
            android_home: toolchain.sdk_root().to_path_buf(),
            java_home: toolchain.jdk_root().map(|p| p.to_path_buf()),
            path_additions,
            original_path,
        }
    }

    /// Executable directories prepended to PATH, in resolution order
    pub fn path_additions(&self) -> &[PathBuf] {
        &self.path_additions
    }

    /// Environment variables to set, PATH excluded
    pub fn get_env_vars(&self) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();

        let sdk = self.android_home.to_string_lossy().to_string();
        vars.insert("ANDROID_HOME".to_string(), sdk.clone());
        vars.insert("ANDROID_SDK_ROOT".to_string(), sdk);

        if let Some(ref path) = self.java_home {
            vars.insert("JAVA_HOME".to_string(), path.to_string_lossy().to_string());
        }

        vars
    }

    /// PATH value with the tool directories in front.
    ///
    /// Tool directories that cannot be a PATH entry are left out; the
    /// inherited entries are always kept.
    pub fn get_path(&self) -> OsString {
        let additions = self.path_additions.iter().filter(|dir| {
            let joinable = std::env::join_paths(std::iter::once(dir)).is_ok();
            if !joinable {
                warn!("Leaving {:?} out of PATH, it contains the path separator", dir);
            }
            joinable
        });
        let original = self
            .original_path
            .iter()
            .flat_map(std::env::split_paths);
        let entries: Vec<PathBuf> = additions.cloned().chain(original).collect();

        std::env::join_paths(&entries)
            .unwrap_or_else(|_| self.original_path.clone().unwrap_or_default())
    }

    /// Variables plus PATH, ready for `Command::envs`
    pub fn command_env(&self) -> BTreeMap<String, String> {
        let mut env = self.get_env_vars();
        env.insert(path_key().to_string(), self.get_path().to_string_lossy().to_string());
        env
    }

    /// Shell export commands (for terminal display)
    pub fn shell_exports(&self) -> String {
        let mut exports = String::new();

        for (key, value) in self.command_env() {
            if cfg!(windows) {
                exports.push_str(&format!("set {}={}\n", key, value));
            } else {
                exports.push_str(&format!("export {}={}\n", key, shell_quote(&value)));
            }
        }

        info!("Rendered {} environment variables", exports.lines().count());
        exports
    }
}

/// Single-quote for POSIX shells; an embedded `'` becomes `'\''`
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

fn path_key() -> &'static str {
    if cfg!(windows) { "Path" } else { "PATH" }
}
