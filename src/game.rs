//! Game module - the orchestrating application state
//!
//! One explicit state object replaces the original app's ambient global
//! provider: screens receive a `Game` and go through its entry points for
//! every mutation. In-memory state is the source of truth; persistence is a
//! best-effort mirror and its failures degrade to warnings, never to a
//! blocked game.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::collection::{collection_stats, recently_unlocked, CollectionItem, CollectionStats};
use crate::core::stars::merge_stars;
use crate::levels::{load_player_levels, Level};
use crate::store::{keys, Storage};
use crate::types::{CompletionStats, LevelProgress, Rarity};

/// Outcome of an attempt to add a level's character to the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockResult {
    /// False only when the level id is unknown or persistence failed
    pub success: bool,
    /// True iff this call appended a new entry
    pub new_unlock: bool,
    /// The entry for this level id, newly added or pre-existing
    pub item: Option<CollectionItem>,
}

/// Application state: personalized levels, per-level progress, and the
/// collection, all mirrored to a `Storage` backend.
#[derive(Debug)]
pub struct Game<S: Storage> {
    store: S,
    levels: Vec<Level>,
    progress: BTreeMap<u32, LevelProgress>,
    collection: Vec<CollectionItem>,
    current_level: Option<u32>,
    completion_stats: CompletionStats,
}

impl<S: Storage> Game<S> {
    /// Load (or initialize) all player state. Storage failures fall back to
    /// defaults; construction itself cannot fail.
    pub async fn load(store: S) -> Self {
        let levels = load_player_levels(&store).await;
        let progress = Self::load_progress(&store).await;
        let collection = Self::load_collection(&store).await;
        Self {
            store,
            levels,
            progress,
            collection,
            current_level: None,
            completion_stats: CompletionStats::default(),
        }
    }

    async fn load_progress(store: &S) -> BTreeMap<u32, LevelProgress> {
        match store.get(keys::PROGRESS).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(progress) => return progress,
                Err(e) => eprintln!("[storage] discarding unparseable progress: {e}"),
            },
            Ok(None) => {}
            Err(e) => eprintln!("[storage] progress unavailable, starting fresh: {e}"),
        }
        let initial = BTreeMap::from([(1, LevelProgress::unlocked())]);
        if let Ok(json) = serde_json::to_string(&initial) {
            if let Err(e) = store.set(keys::PROGRESS, &json).await {
                eprintln!("[storage] failed to persist initial progress: {e}");
            }
        }
        initial
    }

    async fn load_collection(store: &S) -> Vec<CollectionItem> {
        match store.get(keys::COLLECTION).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(collection) => collection,
                Err(e) => {
                    eprintln!("[storage] discarding unparseable collection: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("[storage] collection unavailable, starting empty: {e}");
                Vec::new()
            }
        }
    }

    // ---- accessors ----

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, id: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn current_level(&self) -> Option<&Level> {
        self.current_level.and_then(|id| self.level(id))
    }

    /// Progress record for a level (locked/zero if never touched)
    pub fn level_progress(&self, id: u32) -> LevelProgress {
        let mut record = self.progress.get(&id).copied().unwrap_or_default();
        if id == 1 {
            // Level 1 is unlocked by default, before any play.
            record.unlocked = true;
        }
        record
    }

    pub fn collection(&self) -> &[CollectionItem] {
        &self.collection
    }

    pub fn completion_stats(&self) -> CompletionStats {
        self.completion_stats
    }

    // ---- level selection ----

    /// Make a level current. Only unlocked levels are selectable.
    pub fn select_level(&mut self, id: u32) -> bool {
        if self.level(id).is_none() || !self.level_progress(id).unlocked {
            return false;
        }
        self.current_level = Some(id);
        true
    }

    // ---- completion orchestration ----

    /// Record a completion of the current level: merge stars monotonically,
    /// mark it completed, unlock the next level (without downgrading any
    /// progress it already has), persist, and add the character to the
    /// collection. Returns the stats for the win screen.
    pub async fn handle_level_complete(&mut self, time: u64, stars: u8) -> CompletionStats {
        let stats = CompletionStats { time, stars };
        let Some(level_id) = self.current_level else {
            eprintln!("[game] completion reported with no current level");
            return stats;
        };

        let existing = self.level_progress(level_id);
        self.progress.insert(
            level_id,
            LevelProgress {
                unlocked: true,
                completed: true,
                stars: merge_stars(stars, existing.stars),
            },
        );

        let next_id = level_id + 1;
        if next_id as usize <= self.levels.len() {
            self.progress
                .entry(next_id)
                .or_insert_with(LevelProgress::locked)
                .unlocked = true;
        }

        self.save_progress().await;
        self.add_level_to_collection(level_id).await;

        self.completion_stats = stats;
        stats
    }

    async fn save_progress(&self) {
        match serde_json::to_string(&self.progress) {
            Ok(json) => {
                if let Err(e) = self.store.set(keys::PROGRESS, &json).await {
                    eprintln!("[storage] failed to persist progress: {e}");
                }
            }
            Err(e) => eprintln!("[storage] failed to encode progress: {e}"),
        }
    }

    // ---- collection ----

    /// Idempotently add a level's character to the collection.
    pub async fn add_level_to_collection(&mut self, level_id: u32) -> UnlockResult {
        if let Some(existing) = self.collection.iter().find(|item| item.id == level_id) {
            return UnlockResult {
                success: true,
                new_unlock: false,
                item: Some(existing.clone()),
            };
        }

        let Some(level) = self.level(level_id) else {
            eprintln!("[collection] level {level_id} is not in the pool, ignoring");
            return UnlockResult {
                success: false,
                new_unlock: false,
                item: None,
            };
        };

        let item = CollectionItem {
            id: level.id,
            name: level.name.clone(),
            image: level.image.clone(),
            rarity: level.rarity,
            date_unlocked: now_ms(),
        };
        self.collection.push(item.clone());
        let success = self.save_collection().await;
        UnlockResult {
            success,
            new_unlock: true,
            item: Some(item),
        }
    }

    async fn save_collection(&self) -> bool {
        match serde_json::to_string(&self.collection) {
            Ok(json) => match self.store.set(keys::COLLECTION, &json).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("[storage] failed to persist collection: {e}");
                    false
                }
            },
            Err(e) => {
                eprintln!("[storage] failed to encode collection: {e}");
                false
            }
        }
    }

    pub fn collection_statistics(&self) -> CollectionStats {
        collection_stats(&self.collection)
    }

    pub fn collection_by_rarity(&self, rarity: Rarity) -> Vec<&CollectionItem> {
        self.collection
            .iter()
            .filter(|item| item.rarity == rarity)
            .collect()
    }

    pub fn is_level_collected(&self, level_id: u32) -> bool {
        self.collection.iter().any(|item| item.id == level_id)
    }

    pub fn recently_unlocked(&self, count: usize) -> Vec<CollectionItem> {
        recently_unlocked(&self.collection, count)
    }

    /// Drop every collection entry, in memory and in storage
    pub async fn clear_collection(&mut self) {
        self.collection.clear();
        if let Err(e) = self.store.remove(keys::COLLECTION).await {
            eprintln!("[storage] failed to clear collection: {e}");
        }
    }

    /// Wipe all persisted player state and reset in-memory progress and
    /// collection. The personalized level order stays for this session; a
    /// reload after the wipe will generate a fresh seed.
    pub async fn reset_all(&mut self) {
        if let Err(e) = self.store.clear().await {
            eprintln!("[storage] failed to clear player state: {e}");
        }
        self.progress = BTreeMap::from([(1, LevelProgress::unlocked())]);
        self.collection.clear();
        self.current_level = None;
        self.completion_stats = CompletionStats::default();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[tokio::test]
    async fn test_fresh_game_has_level_one_unlocked() {
        let game = Game::load(MemoryStorage::new()).await;
        assert_eq!(game.levels().len(), crate::types::POOL_SIZE);
        assert!(game.level_progress(1).unlocked);
        assert!(!game.level_progress(2).unlocked);
        assert!(game.collection().is_empty());
    }

    #[tokio::test]
    async fn test_select_level_requires_unlock() {
        let mut game = Game::load(MemoryStorage::new()).await;
        assert!(game.select_level(1));
        assert!(!game.select_level(2));
        assert!(!game.select_level(99));
        assert_eq!(game.current_level().map(|l| l.id), Some(1));
    }

    #[tokio::test]
    async fn test_completion_unlocks_next_level() {
        let mut game = Game::load(MemoryStorage::new()).await;
        game.select_level(1);
        let stats = game.handle_level_complete(25, 3).await;
        assert_eq!(stats, CompletionStats { time: 25, stars: 3 });

        let first = game.level_progress(1);
        assert!(first.completed);
        assert_eq!(first.stars, 3);
        assert!(game.level_progress(2).unlocked);
        assert!(!game.level_progress(2).completed);
        assert!(game.is_level_collected(1));
    }

    #[tokio::test]
    async fn test_completion_with_no_current_level_is_harmless() {
        let mut game = Game::load(MemoryStorage::new()).await;
        let stats = game.handle_level_complete(10, 3).await;
        assert_eq!(stats.time, 10);
        assert!(!game.level_progress(1).completed);
        assert!(game.collection().is_empty());
    }
}
