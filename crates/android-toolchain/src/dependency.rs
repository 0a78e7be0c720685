//! Toolchain dependencies
//!
//! A dependency is a key such as `adb_path` mapped to an absolute path.
//! Locators build a [`DependencySet`] in one pass and hand it over whole;
//! sets are never edited afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use serde::Serialize;

use crate::error::ToolchainError;

/// Which locator owns a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyGroup {
    Android,
    Java,
}

/// The tools and artifacts a build/test pipeline needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DependencyKey {
    #[serde(rename = "adb_path")]
    Adb,
    #[serde(rename = "aapt_path")]
    Aapt,
    #[serde(rename = "zipalign_path")]
    Zipalign,
    #[serde(rename = "android_jar_path")]
    AndroidJar,
    #[serde(rename = "java_path")]
    Java,
    #[serde(rename = "keytool_path")]
    Keytool,
    #[serde(rename = "jarsigner_path")]
    Jarsigner,
}

impl DependencyKey {
    /// Every key, Android first, in resolution order
    pub const ALL: [DependencyKey; 7] = [
        DependencyKey::Adb,
        DependencyKey::Aapt,
        DependencyKey::Zipalign,
        DependencyKey::AndroidJar,
        DependencyKey::Java,
        DependencyKey::Keytool,
        DependencyKey::Jarsigner,
    ];

    /// The string key consumers use, e.g. `adb_path`
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKey::Adb => "adb_path",
            DependencyKey::Aapt => "aapt_path",
            DependencyKey::Zipalign => "zipalign_path",
            DependencyKey::AndroidJar => "android_jar_path",
            DependencyKey::Java => "java_path",
            DependencyKey::Keytool => "keytool_path",
            DependencyKey::Jarsigner => "jarsigner_path",
        }
    }

    /// Parse a string key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// File name searched for on this host
    pub fn file_name(&self) -> &'static str {
        if cfg!(windows) {
            match self {
                DependencyKey::Adb => "adb.exe",
                DependencyKey::Aapt => "aapt.exe",
                DependencyKey::Zipalign => "zipalign.exe",
                DependencyKey::AndroidJar => "android.jar",
                DependencyKey::Java => "java.exe",
                DependencyKey::Keytool => "keytool.exe",
                DependencyKey::Jarsigner => "jarsigner.exe",
            }
        } else {
            match self {
                DependencyKey::Adb => "adb",
                DependencyKey::Aapt => "aapt",
                DependencyKey::Zipalign => "zipalign",
                DependencyKey::AndroidJar => "android.jar",
                DependencyKey::Java => "java",
                DependencyKey::Keytool => "keytool",
                DependencyKey::Jarsigner => "jarsigner",
            }
        }
    }

    pub fn group(&self) -> DependencyGroup {
        match self {
            DependencyKey::Adb
            | DependencyKey::Aapt
            | DependencyKey::Zipalign
            | DependencyKey::AndroidJar => DependencyGroup::Android,
            DependencyKey::Java | DependencyKey::Keytool | DependencyKey::Jarsigner => {
                DependencyGroup::Java
            }
        }
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from dependency key to resolved path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencySet {
    paths: BTreeMap<DependencyKey, PathBuf>,
}

impl DependencySet {
    /// Look up a key, checking that the file is still on disk
    pub fn get(&self, key: DependencyKey) -> Result<&Path, ToolchainError> {
        let path = self
            .paths
            .get(&key)
            .ok_or_else(|| ToolchainError::UnregisteredDependency(key.as_str().to_string()))?;

        if !path.exists() {
            return Err(ToolchainError::MissingFile {
                key: key.as_str().to_string(),
                path: path.clone(),
            });
        }

        Ok(path)
    }

    /// Registered entries in key order, without checking the disk
    pub fn iter(&self) -> impl Iterator<Item = (DependencyKey, &Path)> {
        self.paths.iter().map(|(key, path)| (*key, path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<(DependencyKey, PathBuf)> for DependencySet {
    fn from_iter<I: IntoIterator<Item = (DependencyKey, PathBuf)>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in DependencyKey::ALL {
            assert_eq!(DependencyKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(DependencyKey::from_name("ant_path"), None);
    }

    #[test]
    fn test_groups() {
        assert_eq!(DependencyKey::AndroidJar.group(), DependencyGroup::Android);
        assert_eq!(DependencyKey::Keytool.group(), DependencyGroup::Java);
        assert_eq!(DependencyKey::AndroidJar.file_name(), "android.jar");
    }

    #[cfg(unix)]
    #[test]
    fn test_every_key_has_its_own_file_name() {
        let names: Vec<&str> = DependencyKey::ALL.iter().map(|key| key.file_name()).collect();
        assert_eq!(
            names,
            ["adb", "aapt", "zipalign", "android.jar", "java", "keytool", "jarsigner"]
        );
    }

    #[test]
    fn test_get_checks_registration_then_disk() {
        let dir = tempfile::tempdir().unwrap();
        let adb = dir.path().join(DependencyKey::Adb.file_name());
        std::fs::write(&adb, b"").unwrap();

        let set: DependencySet = [
            (DependencyKey::Adb, adb.clone()),
            (DependencyKey::Aapt, dir.path().join("gone")),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.get(DependencyKey::Adb).unwrap(), adb.as_path());
        assert!(matches!(
            set.get(DependencyKey::Aapt),
            Err(ToolchainError::MissingFile { .. })
        ));
        assert!(matches!(
            set.get(DependencyKey::Zipalign),
            Err(ToolchainError::UnregisteredDependency(key)) if key == "zipalign_path"
        ));
    }

    #[test]
    fn test_serializes_with_string_keys() {
        let set: DependencySet = [(DependencyKey::Java, PathBuf::from("/jdk/bin/java"))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"java_path":"/jdk/bin/java"}"#);
    }
}
