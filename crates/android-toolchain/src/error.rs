//! Toolchain errors

use std::path::PathBuf;

/// Where users can read how the SDK and JDK are searched for
pub const INSTALLATION_DOCS: &str = "https://developer.android.com/tools/variables";

/// Toolchain discovery and lookup errors
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// No strategy produced an Android SDK root
    #[error("Could not find an Android SDK. Set ANDROID_HOME or see {}", INSTALLATION_DOCS)]
    SdkNotFound,

    /// A required executable or artifact is missing after a full search
    #[error("Could not find '{tool}' in '{}'. See {}", .searched.display(), INSTALLATION_DOCS)]
    InvalidEnvironment { tool: String, searched: PathBuf },

    /// A Java tool is not on the search path and there is no JDK root to scan
    #[error("Could not locate '{tool}' on path, and the Java SDK home is invalid. See {}", INSTALLATION_DOCS)]
    InvalidJdkHome { tool: String },

    /// Lookup of a dependency that was never registered
    #[error("No such dependency '{0}'")]
    UnregisteredDependency(String),

    /// A registered path disappeared after setup
    #[error("No such file '{}' for dependency '{key}'", .path.display())]
    MissingFile { key: String, path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_environment_message() {
        let err = ToolchainError::InvalidEnvironment {
            tool: "aapt".into(),
            searched: PathBuf::from("/opt/sdk"),
        };
        let message = err.to_string();
        assert!(message.starts_with("Could not find 'aapt' in '/opt/sdk'"));
        assert!(message.contains(INSTALLATION_DOCS));
    }
}
