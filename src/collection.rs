//! Collection module - the grow-only record of unlocked characters
//!
//! Entries are append-only per character id; re-completing a level never
//! duplicates or rewrites an entry. Statistics and ordering are pure
//! functions over a slice so screens can re-sort without touching storage.

use serde::{Deserialize, Serialize};

use crate::types::Rarity;

/// One permanently unlocked character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    /// Level id the unlock came from
    pub id: u32,
    pub name: String,
    pub image: String,
    pub rarity: Rarity,
    /// Unlock timestamp, milliseconds since the Unix epoch
    pub date_unlocked: u64,
}

/// Counts by rarity tier over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total: usize,
    pub common: usize,
    pub rare: usize,
    pub epic: usize,
    pub legendary: usize,
}

/// Count collection entries by rarity
pub fn collection_stats(items: &[CollectionItem]) -> CollectionStats {
    let mut stats = CollectionStats {
        total: items.len(),
        ..Default::default()
    };
    for item in items {
        match item.rarity {
            Rarity::Common => stats.common += 1,
            Rarity::Rare => stats.rare += 1,
            Rarity::Epic => stats.epic += 1,
            Rarity::Legendary => stats.legendary += 1,
        }
    }
    stats
}

/// Sort by rarity rank descending, ties broken newest-first
pub fn sort_by_rarity(items: &mut [CollectionItem]) {
    items.sort_by(|a, b| {
        b.rarity
            .rank()
            .cmp(&a.rarity.rank())
            .then(b.date_unlocked.cmp(&a.date_unlocked))
    });
}

/// Sort by unlock date descending (newest first)
pub fn sort_by_date(items: &mut [CollectionItem]) {
    items.sort_by(|a, b| b.date_unlocked.cmp(&a.date_unlocked));
}

/// The `count` most recently unlocked items, newest first
pub fn recently_unlocked(items: &[CollectionItem], count: usize) -> Vec<CollectionItem> {
    let mut sorted = items.to_vec();
    sort_by_date(&mut sorted);
    sorted.truncate(count);
    sorted
}
