//! JSON fixtures for valor documents.

use serde_json::{Map, Value};

/// Member IDs used by fixtures start at this value.
pub const FIRST_MEMBER_ID: u64 = 100_000_000_000_000_001;

/// Builds a points document with `count` members, valor `i` for the i-th member.
///
/// Keys are stringified member IDs starting at `FIRST_MEMBER_ID`, inserted in
/// ascending order.
///
/// # Arguments
/// - `count` - Number of entries to generate
///
/// # Returns
/// - `Value` - JSON object mapping member ID strings to integers
pub fn points_document(count: u64) -> Value {
    let mut map = Map::new();
    for i in 0..count {
        map.insert((FIRST_MEMBER_ID + i).to_string(), Value::from(i));
    }
    Value::Object(map)
}
