//! Construction options and the CLI configuration file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "sufx";
const CONFIG_FILE: &str = "config.json";

/// Options for building a suffix tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig<S> {
    /// Symbol appended once to the text so that every suffix ends at its
    /// own leaf. Must not occur in the input. `None` builds the implicit
    /// tree over exactly the given symbols.
    pub terminator: Option<S>,
}

impl<S> BuildConfig<S> {
    /// Build over exactly the given symbols
    pub fn new() -> Self {
        Self { terminator: None }
    }

    /// Append `terminator` before construction
    pub fn with_terminator(terminator: S) -> Self {
        Self {
            terminator: Some(terminator),
        }
    }
}

impl<S> Default for BuildConfig<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI configuration stored in the user's config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Terminator byte appended to inputs (null disables it)
    #[serde(default = "default_terminator")]
    pub terminator: Option<u8>,

    /// Run the full property check after every build
    #[serde(default)]
    pub verify: bool,

    /// Colorize tree output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Stop rendering a tree after this many nodes
    #[serde(default = "default_max_print_nodes")]
    pub max_print_nodes: usize,
}

fn default_terminator() -> Option<u8> {
    Some(0x00)
}

fn default_color() -> bool {
    true
}

fn default_max_print_nodes() -> usize {
    200
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            terminator: default_terminator(),
            verify: false,
            color: default_color(),
            max_print_nodes: default_max_print_nodes(),
        }
    }
}

impl CliConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: CliConfig =
                serde_json::from_str(&content).context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Build options for byte input
    pub fn build_config(&self) -> BuildConfig<u8> {
        BuildConfig {
            terminator: self.terminator,
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
