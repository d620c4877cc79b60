//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    AddressFamily, CheckResult, NeighborRecord, Section, Service, Severity,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A parsed neighbor as shown to the user
#[derive(Debug, Serialize)]
pub struct NeighborInfo {
    /// Item name
    pub item: String,
    /// Raw adjacency state
    pub state: i64,
    /// Neighbor address
    pub address: String,
    /// Address family
    pub address_family: AddressFamily,
}

impl From<&NeighborRecord> for NeighborInfo {
    fn from(record: &NeighborRecord) -> Self {
        Self {
            item: record.key(),
            state: record.state,
            address: record.address.to_string(),
            address_family: record.address_family(),
        }
    }
}

/// Result of the `parse` command
#[derive(Debug, Serialize)]
pub struct ParseReport {
    /// Number of raw rows read
    pub rows: usize,
    /// Parsed neighbors
    pub neighbors: Vec<NeighborInfo>,
}

impl ParseReport {
    /// Build a report for a parsed section
    #[must_use]
    pub fn new(rows: usize, section: &Section) -> Self {
        Self {
            rows,
            neighbors: section.iter().map(|(_, record)| NeighborInfo::from(record)).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.neighbors.is_empty() {
            println!("No IS-IS neighbors in {} row(s).", self.rows);
            return;
        }

        println!("{} neighbor(s) from {} row(s):\n", self.neighbors.len(), self.rows);
        for n in &self.neighbors {
            println!("  {:<40} {:<5} state {}", n.item, n.address_family.to_string(), n.state);
        }
    }
}

/// Result of the `discover` command
#[derive(Debug, Serialize)]
pub struct DiscoveryReport {
    /// Number of parsed neighbors
    pub neighbors: usize,
    /// Number of configured rules
    pub rules: usize,
    /// Discovered services
    pub services: Vec<ServiceInfo>,
}

/// A discovered service as shown to the user
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Service description
    pub description: String,
    /// The discovered service
    #[serde(flatten)]
    pub service: Service,
}

impl DiscoveryReport {
    /// Build a report from discovered services
    #[must_use]
    pub fn new(neighbors: usize, rules: usize, services: Vec<Service>) -> Self {
        Self {
            neighbors,
            rules,
            services: services
                .into_iter()
                .map(|service| ServiceInfo {
                    description: service.description(),
                    service,
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.services.is_empty() {
            println!(
                "No services discovered ({} neighbor(s), {} rule(s)).",
                self.neighbors, self.rules
            );
            return;
        }

        println!("Discovered {} service(s):\n", self.services.len());
        for s in &self.services {
            if s.service.labels.is_empty() {
                println!("  {}", s.description);
            } else {
                let labels: Vec<String> =
                    s.service.labels.iter().map(ToString::to_string).collect();
                println!("  {}  [{}]", s.description, labels.join(", "));
            }
        }
    }
}

/// Result of the `check` command
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Checked item
    pub item: String,
    /// Overall state; `UNKNOWN` when no result was produced
    pub state: Severity,
    /// Individual results
    pub results: Vec<CheckResult>,
    /// Why the check could not be evaluated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Build a report from check results
    #[must_use]
    pub fn new(item: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let state = results.iter().map(|r| r.state).max().unwrap_or(Severity::Unknown);
        Self {
            item: item.into(),
            state,
            results,
            error: None,
        }
    }

    /// Build a report for a failed evaluation
    #[must_use]
    pub fn failed(item: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            state: Severity::Unknown,
            results: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(error) = &self.error {
            println!("{} {}", colorize(Severity::Unknown), error);
            return;
        }
        if self.results.is_empty() {
            println!("{} Item {} not found in SNMP data", colorize(Severity::Unknown), self.item);
            return;
        }
        for r in &self.results {
            println!("{} {}", colorize(r.state), r.summary);
        }
    }
}

fn colorize(state: Severity) -> colored::ColoredString {
    let label = format!("[{state}]");
    let text = label.as_str();
    match state {
        Severity::Ok => text.green(),
        Severity::Warn => text.yellow(),
        Severity::Crit => text.red().bold(),
        Severity::Unknown => text.magenta(),
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
