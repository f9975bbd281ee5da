//! Identifier and display color generation.

use chrono::Utc;
use rand::Rng;

/// Custom epoch for minted ids: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Current UTC timestamp in milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Temporary id for an unsaved draft: the current clock tick.
#[must_use]
pub fn temporary_id() -> i64 {
    now_millis()
}

/// Snowflake-style id.
///
/// Layout (53 bits):
///   - 41 bits: milliseconds since [`EPOCH_MS`]
///   - 12 bits: random
#[must_use]
pub fn snowflake_id() -> i64 {
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000);
    (ts << 12) | rand_bits
}

/// Snowflake id not rejected by `taken`.
pub fn unique_snowflake_id<F>(taken: F) -> i64
where
    F: Fn(i64) -> bool,
{
    loop {
        let id = snowflake_id();
        if !taken(id) {
            return id;
        }
    }
}

/// Random `#RRGGBB` display color.
#[must_use]
pub fn random_color() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..0x100_0000);
    format!("#{value:06X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_ids_are_positive_and_recent() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id >> 12 <= now_millis() - EPOCH_MS);
    }

    #[test]
    fn test_unique_snowflake_skips_taken_ids() {
        let first = snowflake_id();
        let id = unique_snowflake_id(|candidate| candidate == first);
        assert_ne!(id, first);
    }

    #[test]
    fn test_random_color_shape() {
        let color = random_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
