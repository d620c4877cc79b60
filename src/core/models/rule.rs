//! Discovery rules
//!
//! A rule says: "discover IS-IS neighbors inside (or, negated, outside) these
//! subnets, and attach these labels to the resulting services".
//!
//! # Examples
//!
//! ```
//! use isis_adjacency::core::models::SubnetRule;
//!
//! let rule = SubnetRule::parse(&["10.0.0.0/8"], false, Vec::new()).unwrap();
//! assert!(rule.matches("10.1.2.3".parse().unwrap()));
//! assert!(!rule.matches("192.168.0.1".parse().unwrap()));
//! ```

use std::net::IpAddr;

use ipnetwork::IpNetwork;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when building a rule
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule has no subnets
    #[error("rule must list at least one subnet")]
    NoSubnets,

    /// A subnet string is not a network in CIDR notation
    #[error("invalid subnet {subnet:?}: {reason}")]
    InvalidSubnet {
        /// The offending value
        subnet: String,
        /// Why it was rejected
        reason: String,
    },

    /// A subnet has bits set to the right of its prefix
    #[error("invalid subnet {0:?}: host bits set")]
    HostBitsSet(String),
}

/// A service label attached on discovery
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Label {
    /// Label name
    pub key: String,
    /// Label value
    pub value: String,
}

impl Label {
    /// Create a label
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// A subnet inclusion or exclusion rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetRule {
    subnets: Vec<IpNetwork>,
    negate: bool,
    labels: Vec<Label>,
}

impl SubnetRule {
    /// Build a rule from already parsed networks
    pub fn new(
        subnets: Vec<IpNetwork>,
        negate: bool,
        labels: Vec<Label>,
    ) -> Result<Self, RuleError> {
        if subnets.is_empty() {
            return Err(RuleError::NoSubnets);
        }
        Ok(Self {
            subnets,
            negate,
            labels,
        })
    }

    /// Build a rule from CIDR strings
    ///
    /// Every subnet must parse as a network address with a prefix length; a
    /// bare address is taken as a host network (`/32` or `/128`).
    pub fn parse<S: AsRef<str>>(
        subnets: &[S],
        negate: bool,
        labels: Vec<Label>,
    ) -> Result<Self, RuleError> {
        let subnets = subnets
            .iter()
            .map(|s| parse_subnet(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(subnets, negate, labels)
    }

    /// Whether the subnet match is inverted
    #[must_use]
    pub const fn negate(&self) -> bool {
        self.negate
    }

    /// Labels attached to services this rule discovers
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Whether `address` falls inside any subnet of this rule
    ///
    /// Subnets of the other address family never contain the address.
    #[must_use]
    pub fn contains(&self, address: IpAddr) -> bool {
        self.subnets.iter().any(|net| net.contains(address))
    }

    /// Whether this rule selects `address`, honoring `negate`
    #[must_use]
    pub fn matches(&self, address: IpAddr) -> bool {
        self.contains(address) != self.negate
    }
}

/// Parse one CIDR network string
pub fn parse_subnet(subnet: &str) -> Result<IpNetwork, RuleError> {
    let network: IpNetwork = subnet.parse().map_err(|e: ipnetwork::IpNetworkError| {
        RuleError::InvalidSubnet {
            subnet: subnet.to_string(),
            reason: e.to_string(),
        }
    })?;
    if network.ip() != network.network() {
        return Err(RuleError::HostBitsSet(subnet.to_string()));
    }
    Ok(network)
}
