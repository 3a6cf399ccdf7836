//! Random (version 4) UUID generation and format checks.

use ::uuid::Uuid;
use regex::Regex;
use std::sync::LazyLock;

/// Any RFC 4122 version 1-5 UUID, either case.
static UUID_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

/// Generate one lowercase hyphenated v4 UUID.
pub fn generate_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Generate `count` independent v4 UUIDs.
pub fn generate_multiple_uuids(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_uuid()).collect()
}

/// Check the canonical 8-4-4-4-12 layout with a version 1-5 nibble.
pub fn is_valid_uuid(value: &str) -> bool {
    UUID_FORMAT.is_match(value)
}
