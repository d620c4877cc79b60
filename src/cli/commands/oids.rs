//! Print the SNMP objects the plugin needs

use isis_adjacency::core::mib;
use isis_adjacency::output::OutputMode;

/// Print detect and fetch OIDs
pub fn oids(mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "detect": mib::DETECT_OID,
                "fetch": [mib::state_column_oid(), mib::address_column_oid()],
            })
        );
        return;
    }

    println!("detect  {}  (must exist)", mib::DETECT_OID);
    println!("fetch   {}  {}", mib::state_column_oid(), mib::ADJ_STATE_NAME);
    println!("fetch   {}  {}", mib::address_column_oid(), mib::ADJ_ADDRESS_NAME);
    println!();
    println!(
        "e.g. snmpwalk -v2c -c public -On <host> {} > walk.txt",
        mib::FETCH_BASE
    );
}
