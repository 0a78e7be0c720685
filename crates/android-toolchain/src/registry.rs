//! Toolchain registry
//!
//! The resolved toolchain, built once by [`crate::ToolchainDetector::setup`]
//! and passed to whatever needs a tool path.

use std::path::{Path, PathBuf};

use crate::dependency::{DependencyGroup, DependencyKey, DependencySet};
use crate::error::ToolchainError;

/// Resolved Android and Java dependencies
#[derive(Debug, Clone)]
pub struct ToolchainRegistry {
    sdk_root: PathBuf,
    jdk_root: Option<PathBuf>,
    android: DependencySet,
    java: DependencySet,
}

impl ToolchainRegistry {
    /// Assemble a registry from two complete dependency sets
    pub fn new(
        sdk_root: PathBuf,
        jdk_root: Option<PathBuf>,
        android: DependencySet,
        java: DependencySet,
    ) -> Self {
        Self {
            sdk_root,
            jdk_root,
            android,
            java,
        }
    }

    /// Android SDK root the Android dependencies were resolved from
    pub fn sdk_root(&self) -> &Path {
        &self.sdk_root
    }

    /// JDK root, if one was determined
    pub fn jdk_root(&self) -> Option<&Path> {
        self.jdk_root.as_deref()
    }

    /// Look up a dependency, checking that it is still on disk
    pub fn dependency(&self, key: DependencyKey) -> Result<&Path, ToolchainError> {
        match key.group() {
            DependencyGroup::Android => self.android.get(key),
            DependencyGroup::Java => self.java.get(key),
        }
    }

    /// Look up a dependency by its string key, e.g. `"adb_path"`
    pub fn dependency_by_name(&self, name: &str) -> Result<&Path, ToolchainError> {
        let key = DependencyKey::from_name(name)
            .ok_or_else(|| ToolchainError::UnregisteredDependency(name.to_string()))?;
        self.dependency(key)
    }

    /// All registered entries, Android first, without checking the disk
    pub fn iter(&self) -> impl Iterator<Item = (DependencyKey, &Path)> {
        self.android.iter().chain(self.java.iter())
    }

    pub fn adb_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::Adb)
    }

    pub fn aapt_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::Aapt)
    }

    pub fn zipalign_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::Zipalign)
    }

    pub fn android_jar_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::AndroidJar)
    }

    pub fn java_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::Java)
    }

    pub fn keytool_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::Keytool)
    }

    pub fn jarsigner_path(&self) -> Result<&Path, ToolchainError> {
        self.dependency(DependencyKey::Jarsigner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn registry_in(dir: &Path) -> ToolchainRegistry {
        let adb = dir.join("adb");
        let java = dir.join("java");
        fs::write(&adb, b"").unwrap();
        fs::write(&java, b"").unwrap();

        ToolchainRegistry::new(
            dir.to_path_buf(),
            Some(dir.to_path_buf()),
            [(DependencyKey::Adb, adb)].into_iter().collect(),
            [(DependencyKey::Java, java)].into_iter().collect(),
        )
    }

    #[test]
    fn test_accessors_route_by_group() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_in(dir.path());

        assert_eq!(registry.adb_path().unwrap(), dir.path().join("adb"));
        assert_eq!(registry.java_path().unwrap(), dir.path().join("java"));
        assert_eq!(registry.dependency_by_name("java_path").unwrap(), dir.path().join("java"));
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_unregistered_dependency() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_in(dir.path());

        assert!(matches!(
            registry.aapt_path(),
            Err(ToolchainError::UnregisteredDependency(key)) if key == "aapt_path"
        ));
        assert!(matches!(
            registry.dependency_by_name("ant_path"),
            Err(ToolchainError::UnregisteredDependency(key)) if key == "ant_path"
        ));
    }

    #[test]
    fn test_deleted_file_is_missing_not_unregistered() {
        let dir = tempfile::tempdir().unwrap();
        let registry = registry_in(dir.path());
        fs::remove_file(dir.path().join("adb")).unwrap();

        match registry.adb_path() {
            Err(ToolchainError::MissingFile { key, path }) => {
                assert_eq!(key, "adb_path");
                assert_eq!(path, dir.path().join("adb"));
            }
            other => panic!("expected MissingFile, got {:?}", other),
        }
        assert!(registry.java_path().is_ok());
    }
}
