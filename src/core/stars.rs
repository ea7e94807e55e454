//! Star rating - completion time to stars, with a floor of one
//!
//! Earned stars are monotonic: a worse re-run never lowers the stored count.

use crate::types::{MAX_STARS, THREE_STAR_MAX_SECS, TWO_STAR_MAX_SECS};

/// Stars earned for a completion time in seconds.
/// 3 stars up to 30s, 2 up to 60s, otherwise 1 (finishing always earns one).
pub fn stars_for_time(seconds: u64) -> u8 {
    if seconds <= THREE_STAR_MAX_SECS {
        3
    } else if seconds <= TWO_STAR_MAX_SECS {
        2
    } else {
        1
    }
}

/// Merge a freshly earned star count with the stored one; stars only go up.
pub fn merge_stars(new: u8, existing: u8) -> u8 {
    new.max(existing).min(MAX_STARS)
}
