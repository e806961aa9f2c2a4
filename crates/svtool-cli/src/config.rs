use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use svtool_semver::MatchOptions;

/// Name of the configuration file looked up from the working directory
pub const CONFIG_FILE: &str = "semver.toml";

/// The configuration file structure (semver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemverConfig {
    /// Print diagnostics without passing --verbose
    pub verbose: bool,

    /// Constraint evaluation settings
    pub constraints: ConstraintsConfig,
}

/// Constraint evaluation configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConstraintsConfig {
    /// Let prerelease versions satisfy clauses on other versions
    pub allow_prerelease: bool,
}

impl SemverConfig {
    /// Load configuration from semver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        Self::load(&cwd)
    }

    /// Load an explicit configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SemverConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Effective settings after merging the config file with command-line flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub verbose: bool,
    pub options: MatchOptions,
}

impl Settings {
    /// Flags can only switch settings on, so the file provides the defaults
    pub fn resolve(config: Option<&SemverConfig>, verbose: bool, allow_prerelease: bool) -> Self {
        let (file_verbose, file_allow_prerelease) = config
            .map(|c| (c.verbose, c.constraints.allow_prerelease))
            .unwrap_or_default();

        Settings {
            verbose: verbose || file_verbose,
            options: MatchOptions {
                allow_prerelease_across_core: allow_prerelease || file_allow_prerelease,
            },
        }
    }
}
