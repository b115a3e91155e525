//! Shared helpers for widget configuration structs.

/// Serialize a `Duration` as whole milliseconds.
///
/// Use with `#[serde(with = "crate::config::duration_ms")]`.
pub mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Returns true when the string has visible content.
pub(crate) fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
