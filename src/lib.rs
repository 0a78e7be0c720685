//! DroidScout - Android SDK and JDK toolchain discovery
//!
//! Finds the Android SDK and JDK on a machine in an unknown configuration
//! and resolves the paths a build/test pipeline needs: `adb`, `aapt`,
//! `zipalign`, `android.jar`, `java`, `keytool` and `jarsigner`.
//!
//! ## Architecture
//!
//! - `droidscout-core`: configuration file and its error type
//! - `droidscout-toolchain`: SDK/JDK root detection, tool resolution and
//!   the resolved [`toolchain::ToolchainRegistry`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;

// Re-export main components for library usage
pub use droidscout_core as core;
pub use droidscout_toolchain as toolchain;

/// Prelude module for convenient imports
pub mod prelude {
    pub use droidscout_core::ScoutConfig;
    pub use droidscout_toolchain::{
        DependencyKey, EnvManager, HostEnvironment, ToolchainDetector, ToolchainError,
        ToolchainRegistry,
    };
}
