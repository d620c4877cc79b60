//! Tests for the section parser

use isis_adjacency::core::models::{AddressFamily, SnmpRow};
use isis_adjacency::core::services::{SectionParser, parse_section};

use crate::common::fixtures::{LINK_LOCAL_A, sample_rows};

#[test]
fn test_parse_sample_rows() {
    let section = parse_section(&sample_rows());

    assert_eq!(section.len(), 4);
    assert_eq!(section.get("192.168.0.1").unwrap().state, 3);
    assert_eq!(section.get("fe80::8c21:b316:7d4e:a9dd").unwrap().state, 3);
    assert_eq!(section.get("10.0.0.1").unwrap().state, 2);
    assert_eq!(section.get("fe80::43a8:bc11:839c:882c").unwrap().state, 2);
}

#[test]
fn test_record_carries_family() {
    let section = parse_section(&sample_rows());
    assert_eq!(section.get("10.0.0.1").unwrap().address_family(), AddressFamily::Ipv4);
    assert_eq!(
        section.get("fe80::8c21:b316:7d4e:a9dd").unwrap().address_family(),
        AddressFamily::Ipv6
    );
}

#[test]
fn test_rows_from_collector_text() {
    // OCTET STRING cells arrive as one character per octet
    let rows = [
        SnmpRow::from_text("3", ""),
        SnmpRow::from_text("", "\u{c0}\u{a8}\u{0}\u{1}"),
        SnmpRow::from_text("3", ""),
        SnmpRow::from_text("", "\n\u{0}\u{0}\u{1}"),
    ];
    let section = parse_section(&rows);

    let keys: Vec<&str> = section.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["10.0.0.1", "192.168.0.1"]);
}

#[test]
fn test_incremental_parser_matches_batch() {
    let rows = sample_rows();
    let mut parser = SectionParser::new();
    for row in &rows {
        parser.feed(row);
    }
    assert_eq!(parser.finish(), parse_section(&rows));
}

#[test]
fn test_state_cell_wins_over_address_cell() {
    let rows = [
        SnmpRow {
            state: "3".to_string(),
            address: vec![10, 0, 0, 1],
        },
        SnmpRow::address(LINK_LOCAL_A),
    ];
    let section = parse_section(&rows);
    assert_eq!(section.len(), 1);
    assert!(section.get("10.0.0.1").is_none());
}

#[test]
fn test_empty_input() {
    let rows: Vec<SnmpRow> = Vec::new();
    assert!(parse_section(&rows).is_empty());
}

#[test]
fn test_state_with_whitespace() {
    let rows = [SnmpRow::state(" 1 "), SnmpRow::address([10, 0, 0, 1])];
    assert_eq!(parse_section(&rows).get("10.0.0.1").unwrap().state, 1);
}
