//! Identifier and clock utility.
//!
//! Ids embed the creation timestamp plus a random component, so two
//! inserts in the same millisecond from the same process still get
//! distinct ids. They are unique enough for a single local registry,
//! nothing more; callers must not treat them as cryptographic tokens.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Fresh video id for a record created at `now` (epoch millis).
pub fn new_video_id(now: i64) -> String {
    format!("video-{}-{:08x}", now, rand::random::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_embed_the_timestamp() {
        let id = new_video_id(1_700_000_000_000);
        assert!(id.starts_with("video-1700000000000-"));
    }

    #[test]
    fn ids_are_distinct_within_one_millisecond() {
        let now = now_millis();
        let ids: HashSet<String> = (0..64).map(|_| new_video_id(now)).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn now_millis_is_plausible() {
        // After 2023-01-01 and before 2100.
        let now = now_millis();
        assert!(now > 1_672_531_200_000);
        assert!(now < 4_102_444_800_000);
    }
}
