//! Discovery service - decides which neighbors become monitored services
//!
//! Rules are evaluated in the order they are configured; the first rule that
//! matches a neighbor decides its labels and no later rule is consulted.

use crate::core::models::{NeighborRecord, Section, Service, SubnetRule};

/// Discover one service per neighbor, filtered by `rules`
///
/// With no rules every neighbor is discovered without labels. With rules, a
/// neighbor no rule matches is not discovered.
#[must_use]
pub fn discover_services(section: &Section, rules: &[SubnetRule]) -> Vec<Service> {
    section
        .iter()
        .filter_map(|(item, record)| {
            if rules.is_empty() {
                return Some(Service::new(item));
            }
            first_matching_rule(record, rules)
                .map(|rule| Service::with_labels(item, rule.labels().to_vec()))
        })
        .collect()
}

/// Find the first rule selecting `record`
#[must_use]
pub fn first_matching_rule<'r>(
    record: &NeighborRecord,
    rules: &'r [SubnetRule],
) -> Option<&'r SubnetRule> {
    let found = rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(record.address));

    match found {
        Some((index, rule)) => {
            log::debug!("neighbor {} selected by rule #{}", record.address, index + 1);
            Some(rule)
        },
        None => {
            log::debug!("neighbor {} matched no discovery rule", record.address);
            None
        },
    }
}
