//! Line-level parsing of `snmpwalk` output
//!
//! Understands both numeric (`snmpwalk -On`) and symbolic (`ISIS-MIB::`)
//! object names:
//!
//! ```text
//! ISIS-MIB::isisISAdjState.1024.1 = INTEGER: up(3)
//! .1.3.6.1.2.1.138.1.6.3.1.3.1024.1.1 = Hex-STRING: C0 A8 00 01
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::core::mib;

static VARBIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<oid>\S+)\s+=\s+(?P<kind>[A-Za-z0-9-]+):\s*(?P<value>.*?)\s*$")
        .expect("varbind pattern is valid")
});

static ENUM_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?P<num>-?\d+)\)$").expect("enum pattern is valid"));

static HEX_CONTINUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[0-9A-Fa-f]{2}\s*)+$").expect("continuation pattern is valid")
});

/// Which of the two walked columns a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// `isisISAdjState`
    State,
    /// `isisISAdjIPAddrAddress`
    Address,
}

/// A decoded value from one walk line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer value rendered as decimal text
    Integer(String),
    /// Raw octets
    Octets(Vec<u8>),
}

/// One recognized varbind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Varbind {
    /// Column the object belongs to
    pub column: Column,
    /// Instance index below the column OID
    pub index: Vec<u32>,
    /// Decoded value
    pub value: Value,
}

/// Result of looking at one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A varbind of one of our columns
    Varbind(Varbind),
    /// More hex octets continuing the previous `Hex-STRING`
    HexContinuation(Vec<u8>),
    /// Anything else
    Other,
}

/// Classify and decode one line of walk output
#[must_use]
pub fn parse_line(line: &str) -> Line {
    if let Some(caps) = VARBIND.captures(line) {
        let Some((column, index)) = classify_oid(&caps["oid"]) else {
            return Line::Other;
        };
        return decode_value(column, &caps["kind"], &caps["value"]).map_or(Line::Other, |value| {
            Line::Varbind(Varbind {
                column,
                index,
                value,
            })
        });
    }

    if HEX_CONTINUATION.is_match(line) {
        if let Some(octets) = parse_hex(line) {
            return Line::HexContinuation(octets);
        }
    }

    Line::Other
}

/// Map an object name to its column and instance index
fn classify_oid(oid: &str) -> Option<(Column, Vec<u32>)> {
    let symbolic = oid.strip_prefix("ISIS-MIB::").unwrap_or(oid);
    if let Some(rest) = symbolic.strip_prefix(mib::ADJ_STATE_NAME) {
        return parse_index(rest).map(|index| (Column::State, index));
    }
    if let Some(rest) = symbolic.strip_prefix(mib::ADJ_ADDRESS_NAME) {
        return parse_index(rest).map(|index| (Column::Address, index));
    }

    let numeric = match oid.strip_prefix("iso") {
        Some(rest) => format!(".1{rest}"),
        None if oid.starts_with('.') => oid.to_string(),
        None => format!(".{oid}"),
    };
    if let Some(rest) = numeric.strip_prefix(&mib::state_column_oid()) {
        return parse_index(rest).map(|index| (Column::State, index));
    }
    if let Some(rest) = numeric.strip_prefix(&mib::address_column_oid()) {
        return parse_index(rest).map(|index| (Column::Address, index));
    }
    None
}

/// Parse `.1024.1.2` into `[1024, 1, 2]`
fn parse_index(rest: &str) -> Option<Vec<u32>> {
    let rest = rest.strip_prefix('.')?;
    rest.split('.').map(|part| part.parse().ok()).collect()
}

fn decode_value(column: Column, kind: &str, value: &str) -> Option<Value> {
    match (column, kind) {
        (Column::State, "INTEGER") => {
            let number = ENUM_VALUE
                .captures(value)
                .map_or(value, |caps| caps.name("num").map_or(value, |m| m.as_str()));
            if number.parse::<i64>().is_err() {
                log::debug!("ignoring non-numeric adjacency state {value:?}");
                return None;
            }
            Some(Value::Integer(number.to_string()))
        },
        (Column::Address, "Hex-STRING") => {
            let octets = parse_hex(value);
            if octets.is_none() {
                log::warn!("ignoring malformed Hex-STRING {value:?}");
            }
            octets.map(Value::Octets)
        },
        (Column::Address, "STRING") => {
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            Some(Value::Octets(unescape(unquoted).into_bytes()))
        },
        (Column::Address, "IpAddress") => value
            .parse::<std::net::Ipv4Addr>()
            .ok()
            .map(|ip| Value::Octets(ip.octets().to_vec())),
        _ => {
            log::debug!("ignoring {kind} value in {column:?} column");
            None
        },
    }
}

/// Undo net-snmp's backslash escaping of `"` and `\` in quoted strings
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
                continue;
            }
        }
        out.push(c);
    }
    out
}

fn parse_hex(text: &str) -> Option<Vec<u8>> {
    text.split_whitespace().map(|pair| u8::from_str_radix(pair, 16).ok()).collect()
}
