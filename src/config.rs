//! Discovery configuration
//!
//! Rules are read from a TOML file, by default
//! `~/.config/isis-adjacency/config.toml`:
//!
//! ```toml
//! [[discovery_rules]]
//! subnets = ["10.0.0.0/8", "2001:db8::/32"]
//! negate = false
//! labels = { site = "core" }
//! ```
//!
//! Rules are validated when the file is loaded; an invalid subnet never
//! reaches discovery.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{Label, SubnetRule};
use crate::paths;

/// On-disk form of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Discovery rules, evaluated in order
    #[serde(default)]
    pub discovery_rules: Vec<RuleEntry>,
}

/// One `[[discovery_rules]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    /// Subnets in CIDR notation
    pub subnets: Vec<String>,
    /// Select neighbors outside the subnets instead
    #[serde(default)]
    pub negate: bool,
    /// Labels for discovered services
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl RuleEntry {
    /// Validate the entry into a rule
    pub fn to_rule(&self) -> anyhow::Result<SubnetRule> {
        let labels = self.labels.iter().map(|(k, v)| Label::new(k, v)).collect();
        Ok(SubnetRule::parse(&self.subnets, self.negate, labels)?)
    }
}

/// Validated configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    rules: Vec<SubnetRule>,
}

impl Config {
    /// Load the config
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used and a missing file means no rules.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_file(path);
        }

        let default = paths::default_config();
        if default.exists() {
            Self::load_file(&default)
        } else {
            log::debug!("no config at {}, discovering all neighbors", default.display());
            Ok(Self::default())
        }
    }

    /// Load and validate a config file
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded {} discovery rule(s) from {}", config.rules.len(), path.display());
        Ok(config)
    }

    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let rules = file
            .discovery_rules
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_rule().with_context(|| format!("discovery rule #{}", i + 1)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Discovery rules in configured order
    #[must_use]
    pub fn rules(&self) -> &[SubnetRule] {
        &self.rules
    }
}
