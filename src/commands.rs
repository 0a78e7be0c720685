//! CLI commands for DroidScout
//!
//! Each command runs toolchain setup and prints part of the result.

use std::collections::BTreeMap;
use std::path::PathBuf;
use anyhow::Result;
use tracing::info;

use droidscout_core::ScoutConfig;
use droidscout_toolchain::{EnvManager, ToolchainDetector, ToolchainRegistry};

/// Run setup for the current process environment
fn setup(config: ScoutConfig) -> Result<(ToolchainDetector, ToolchainRegistry)> {
    let detector = ToolchainDetector::from_process(config);
    let registry = detector.setup()?;
    Ok((detector, registry))
}

/// Locate command options
pub struct LocateCommand {
    /// Print JSON instead of a table
    pub json: bool,
}

impl LocateCommand {
    /// Print all seven resolved paths
    pub fn execute(&self, config: ScoutConfig) -> Result<()> {
        let (_, registry) = setup(config)?;
        print!("{}", self.render(&registry)?);
        Ok(())
    }

    /// Format the resolved paths, checking each one is still on disk
    pub fn render(&self, registry: &ToolchainRegistry) -> Result<String> {
        let mut paths = BTreeMap::new();
        for (key, _) in registry.iter() {
            paths.insert(key.as_str(), registry.dependency(key)?.to_path_buf());
        }

        if self.json {
            let mut out = serde_json::to_string_pretty(&paths)?;
            out.push('\n');
            return Ok(out);
        }

        let mut out = String::new();
        out.push_str(&format!("Android SDK: {}\n", registry.sdk_root().display()));
        match registry.jdk_root() {
            Some(jdk) => out.push_str(&format!("JDK:         {}\n", jdk.display())),
            None => out.push_str("JDK:         (tools found on PATH)\n"),
        }
        out.push('\n');
        for (key, _) in registry.iter() {
            out.push_str(&format!("{:<18} {}\n", key.as_str(), paths[key.as_str()].display()));
        }
        Ok(out)
    }
}

/// Get command options
pub struct GetCommand {
    /// String key such as `adb_path`
    pub key: String,
}

impl GetCommand {
    /// Print one dependency by its string key
    pub fn execute(&self, config: ScoutConfig) -> Result<()> {
        let (_, registry) = setup(config)?;
        println!("{}", self.resolve(&registry)?.display());
        Ok(())
    }

    /// Look the key up in a resolved toolchain
    pub fn resolve(&self, registry: &ToolchainRegistry) -> Result<PathBuf> {
        Ok(registry.dependency_by_name(&self.key)?.to_path_buf())
    }
}

/// Env command
pub struct EnvCommand;

impl EnvCommand {
    /// Print shell exports for the resolved toolchain
    pub fn execute(&self, config: ScoutConfig) -> Result<()> {
        let (detector, registry) = setup(config)?;
        let env = EnvManager::new(&registry, detector.host().search_path.clone());
        print!("{}", env.shell_exports());
        Ok(())
    }
}

/// Init-config command options
pub struct InitConfigCommand {
    /// Target file, the default config location when absent
    pub path: Option<PathBuf>,
    /// Overwrite an existing file
    pub force: bool,
}

impl InitConfigCommand {
    /// Write the default configuration file
    pub async fn execute(&self) -> Result<PathBuf> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => ScoutConfig::config_file()
                .ok_or_else(|| anyhow::anyhow!("Cannot determine config path"))?,
        };

        if path.exists() && !self.force {
            return Err(anyhow::anyhow!(
                "Config file {:?} already exists, pass --force to overwrite",
                path
            ));
        }

        ScoutConfig::default().save_to(&path).await?;
        info!("Wrote default configuration to {:?}", path);
        Ok(path)
    }
}
