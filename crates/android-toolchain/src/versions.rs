//! Versioned directory selection
//!
//! Picks the newest `build-tools/<version>` and `platforms/android-<n>`
//! directories of an SDK.

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::probe::list_reverse_sorted;

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?(?:[-_ ]([0-9A-Za-z][0-9A-Za-z.]*))?$")
        .expect("version pattern is valid")
});

/// A directory name parsed as `major.minor[.patch][-pre]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionToken {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

/// Returned when a name is not a version
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a version")]
pub struct VersionParseError(pub String);

impl FromStr for VersionToken {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_RE
            .captures(s.trim())
            .ok_or_else(|| VersionParseError(s.to_string()))?;

        let number = |i: usize| -> Result<u64, VersionParseError> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().map_err(|_| VersionParseError(s.to_string())),
                None => Ok(0),
            }
        };

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre: caps.get(4).map(|m| m.as_str().to_string()),
        })
    }
}

impl Ord for VersionToken {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                // A release outranks its own pre-releases
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for VersionToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

/// Subdirectory names of `dir`, reverse-lexically sorted
fn subdirectory_names(dir: &Path) -> Vec<String> {
    list_reverse_sorted(dir)
        .into_iter()
        .filter(|(_, path)| path.is_dir())
        .map(|(name, _)| name.to_string_lossy().into_owned())
        .collect()
}

/// Candidate tool directories relative to `sdk_root`, most likely first.
///
/// Parsable `build-tools/<version>` entries come newest first. When none
/// parses, the reverse-lexically first entry stands in for them.
/// `platform-tools` and `tools` always close the list.
pub fn select_build_tools_dirs(sdk_root: &Path) -> Vec<PathBuf> {
    let names = subdirectory_names(&sdk_root.join("build-tools"));

    let mut versioned: Vec<(VersionToken, &String)> = names
        .iter()
        .filter_map(|name| name.parse::<VersionToken>().ok().map(|v| (v, name)))
        .collect();
    versioned.sort_by(|a, b| b.0.cmp(&a.0));

    let mut candidates: Vec<PathBuf> = versioned
        .into_iter()
        .map(|(_, name)| Path::new("build-tools").join(name))
        .collect();

    if candidates.is_empty() {
        if let Some(first) = names.first() {
            candidates.push(Path::new("build-tools").join(first));
        }
    }

    candidates.push(PathBuf::from("platform-tools"));
    candidates.push(PathBuf::from("tools"));
    candidates
}

/// API level of a `android-<n>` name; anything non-numeric counts as 0
pub fn platform_level(name: &str) -> u32 {
    name.rsplit('-').next().and_then(|n| n.parse().ok()).unwrap_or(0)
}

/// The highest `platforms/android-<n>` directory, relative to `sdk_root`
pub fn select_platform_dir(sdk_root: &Path) -> Option<PathBuf> {
    let mut names = subdirectory_names(&sdk_root.join("platforms"));

    // Stable sort keeps reverse-lexical order among equal levels
    names.sort_by(|a, b| platform_level(b).cmp(&platform_level(a)));

    names
        .into_iter()
        .next()
        .map(|name| Path::new("platforms").join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sdk_with(dir: &str, names: &[&str]) -> tempfile::TempDir {
        let sdk = tempfile::tempdir().unwrap();
        for name in names {
            fs::create_dir_all(sdk.path().join(dir).join(name)).unwrap();
        }
        sdk
    }

    #[test]
    fn test_version_parsing() {
        let v: VersionToken = "19.1.0".parse().unwrap();
        assert_eq!((v.major, v.minor, v.patch), (19, 1, 0));
        assert_eq!(v.pre, None);

        let rc: VersionToken = "34.0.0-rc3".parse().unwrap();
        assert_eq!(rc.pre.as_deref(), Some("rc3"));
        assert_eq!("21.1".parse::<VersionToken>().unwrap().patch, 0);

        assert!("garbage".parse::<VersionToken>().is_err());
        assert!("android-4.4W".parse::<VersionToken>().is_err());
        assert!("20".parse::<VersionToken>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        let parse = |s: &str| s.parse::<VersionToken>().unwrap();
        assert!(parse("20.0.0") > parse("19.1.0"));
        assert!(parse("19.1.0") > parse("18.0.1"));
        assert!(parse("10.0.0") > parse("9.9.9"));
        assert!(parse("34.0.0") > parse("34.0.0-rc3"));
        assert_eq!(parse("34.0.0-rc3").to_string(), "34.0.0-rc3");
    }

    #[test]
    fn test_build_tools_newest_first() {
        let sdk = sdk_with("build-tools", &["19.1.0", "20.0.0", "18.0.1", "garbage"]);

        let dirs = select_build_tools_dirs(sdk.path());
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("build-tools/20.0.0"),
                PathBuf::from("build-tools/19.1.0"),
                PathBuf::from("build-tools/18.0.1"),
                PathBuf::from("platform-tools"),
                PathBuf::from("tools"),
            ]
        );
    }

    #[test]
    fn test_build_tools_unparsable_fallback() {
        let sdk = sdk_with("build-tools", &["android-4.2.2", "android-4.4W", "preview"]);

        let dirs = select_build_tools_dirs(sdk.path());
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("build-tools/preview"),
                PathBuf::from("platform-tools"),
                PathBuf::from("tools"),
            ]
        );
    }

    #[test]
    fn test_build_tools_missing() {
        let sdk = tempfile::tempdir().unwrap();
        assert_eq!(
            select_build_tools_dirs(sdk.path()),
            vec![PathBuf::from("platform-tools"), PathBuf::from("tools")]
        );
    }

    #[test]
    fn test_build_tools_ignores_files() {
        let sdk = sdk_with("build-tools", &["19.1.0"]);
        fs::write(sdk.path().join("build-tools").join("99.0.0"), b"").unwrap();

        assert_eq!(select_build_tools_dirs(sdk.path())[0], PathBuf::from("build-tools/19.1.0"));
    }

    #[test]
    fn test_platform_numeric_not_lexical() {
        let sdk = sdk_with("platforms", &["android-16", "android-23", "android-9"]);
        assert_eq!(select_platform_dir(sdk.path()), Some(PathBuf::from("platforms/android-23")));
    }

    #[test]
    fn test_platform_codename_counts_as_zero() {
        assert_eq!(platform_level("android-O"), 0);
        assert_eq!(platform_level("android-34"), 34);

        let sdk = sdk_with("platforms", &["android-P", "android-O"]);
        assert_eq!(select_platform_dir(sdk.path()), Some(PathBuf::from("platforms/android-P")));

        let sdk = sdk_with("platforms", &["android-P", "android-9"]);
        assert_eq!(select_platform_dir(sdk.path()), Some(PathBuf::from("platforms/android-9")));
    }

    #[test]
    fn test_platform_missing() {
        let sdk = tempfile::tempdir().unwrap();
        assert_eq!(select_platform_dir(sdk.path()), None);
    }
}
