//! Levels module - deterministic per-player level personalization
//!
//! Each installation gets a persisted integer seed; the fixed character pool
//! is permuted by a seeded Fisher-Yates shuffle into that player's level
//! order. Regenerating from the same seed reproduces the same order exactly,
//! which is what keeps a player's progress mapping stable across reloads.

pub mod characters;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::rng::{generate_player_seed, seeded_shuffle};
use crate::store::{keys, Storage};
use crate::types::{Rarity, POOL_SIZE};
pub use characters::{character_by_id, Character, CHARACTER_POOL};

/// One playable level, bound to a character from the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Sequential level id, starting at 1
    pub id: u32,
    /// Stable id of the character this level unlocks
    pub character_id: u32,
    pub name: String,
    pub image: String,
    pub rarity: Rarity,
    pub unlocked: bool,
    pub completed: bool,
    pub stars: u8,
}

impl Level {
    fn from_character(position: usize, character: &Character) -> Self {
        Self {
            id: position as u32 + 1,
            character_id: character.id,
            name: character.name.to_string(),
            image: character.image.to_string(),
            rarity: character.rarity,
            unlocked: position == 0,
            completed: false,
            stars: 0,
        }
    }
}

/// Deterministically generate a player's level list from their seed.
///
/// Same seed + same `num_levels` always yields the same ordered list; the
/// full-length list is a permutation of the whole pool. Only level 1 starts
/// unlocked.
pub fn generate_player_levels(seed: i64, num_levels: usize) -> Vec<Level> {
    let mut pool: Vec<&Character> = CHARACTER_POOL.iter().collect();
    seeded_shuffle(&mut pool, seed);
    pool.into_iter()
        .take(num_levels.min(POOL_SIZE))
        .enumerate()
        .map(|(position, character)| Level::from_character(position, character))
        .collect()
}

/// Unshuffled pool order; the degraded fallback when storage fails
pub fn default_levels(num_levels: usize) -> Vec<Level> {
    CHARACTER_POOL
        .iter()
        .take(num_levels.min(POOL_SIZE))
        .enumerate()
        .map(|(position, character)| Level::from_character(position, character))
        .collect()
}

/// Load the persisted player seed, generating and persisting one on first
/// run. If storage fails, returns a fresh unpersisted seed so the session
/// still works (the permutation just won't survive a restart).
pub async fn load_player_seed<S: Storage>(store: &S) -> i64 {
    match try_load_player_seed(store).await {
        Ok(seed) => seed,
        Err(e) => {
            eprintln!("[storage] player seed unavailable, using session-only seed: {e}");
            generate_player_seed()
        }
    }
}

async fn try_load_player_seed<S: Storage>(store: &S) -> Result<i64> {
    if let Some(raw) = store.get(keys::PLAYER_SEED).await? {
        if let Ok(seed) = raw.parse::<i64>() {
            return Ok(seed);
        }
        eprintln!("[storage] discarding unparseable player seed: {raw:?}");
    }
    let seed = generate_player_seed();
    store.set(keys::PLAYER_SEED, &seed.to_string()).await?;
    Ok(seed)
}

/// Load the persisted personalized level list, generating and persisting it
/// from the player seed on first run. Falls back to the unshuffled default
/// list if storage fails.
pub async fn load_player_levels<S: Storage>(store: &S) -> Vec<Level> {
    match try_load_player_levels(store).await {
        Ok(levels) => levels,
        Err(e) => {
            eprintln!("[storage] player levels unavailable, using default order: {e}");
            default_levels(POOL_SIZE)
        }
    }
}

async fn try_load_player_levels<S: Storage>(store: &S) -> Result<Vec<Level>> {
    if let Some(raw) = store.get(keys::PLAYER_LEVELS).await? {
        match serde_json::from_str::<Vec<Level>>(&raw) {
            Ok(levels) if !levels.is_empty() => return Ok(levels),
            Ok(_) => eprintln!("[storage] discarding empty persisted level list"),
            Err(e) => eprintln!("[storage] discarding unparseable level list: {e}"),
        }
    }
    let seed = try_load_player_seed(store).await?;
    let levels = generate_player_levels(seed, POOL_SIZE);
    store
        .set(keys::PLAYER_LEVELS, &serde_json::to_string(&levels)?)
        .await?;
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use std::collections::HashSet;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_player_levels(42, POOL_SIZE);
        let b = generate_player_levels(42, POOL_SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generation_is_a_permutation_of_the_pool() {
        for seed in [0, 1, 42, 999_999] {
            let levels = generate_player_levels(seed, POOL_SIZE);
            assert_eq!(levels.len(), POOL_SIZE);
            let ids: HashSet<u32> = levels.iter().map(|l| l.character_id).collect();
            assert_eq!(ids.len(), POOL_SIZE, "seed {seed} lost characters");
            // Ids are sequential regardless of character order.
            for (i, level) in levels.iter().enumerate() {
                assert_eq!(level.id, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_only_first_level_starts_unlocked() {
        let levels = generate_player_levels(7, POOL_SIZE);
        assert!(levels[0].unlocked);
        for level in &levels[1..] {
            assert!(!level.unlocked);
            assert!(!level.completed);
            assert_eq!(level.stars, 0);
        }
    }

    #[test]
    fn test_num_levels_is_clamped() {
        assert_eq!(generate_player_levels(1, 40).len(), POOL_SIZE);
        assert_eq!(generate_player_levels(1, 5).len(), 5);
        assert!(generate_player_levels(1, 0).is_empty());
    }

    #[test]
    fn test_adjacent_seeds_diverge() {
        let a = generate_player_levels(42, POOL_SIZE);
        let b = generate_player_levels(43, POOL_SIZE);
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_levels_keep_pool_order() {
        let levels = default_levels(POOL_SIZE);
        for (level, character) in levels.iter().zip(CHARACTER_POOL.iter()) {
            assert_eq!(level.character_id, character.id);
            assert_eq!(level.name, character.name);
        }
    }

    #[test]
    fn test_level_json_uses_camel_case() {
        let levels = generate_player_levels(42, 1);
        let json = serde_json::to_string(&levels[0]).unwrap();
        assert!(json.contains("\"characterId\""));
        assert!(!json.contains("\"character_id\""));
    }

    #[tokio::test]
    async fn test_seed_persists_once() {
        let store = MemoryStorage::new();
        let first = load_player_seed(&store).await;
        let second = load_player_seed(&store).await;
        assert_eq!(first, second);
        assert_eq!(
            store.get(keys::PLAYER_SEED).await.unwrap(),
            Some(first.to_string())
        );
    }

    #[tokio::test]
    async fn test_levels_persist_and_reload_identically() {
        let store = MemoryStorage::new();
        let first = load_player_levels(&store).await;
        let second = load_player_levels(&store).await;
        assert_eq!(first, second);
        assert_eq!(first.len(), POOL_SIZE);
    }

    #[tokio::test]
    async fn test_levels_match_regeneration_from_persisted_seed() {
        let store = MemoryStorage::new();
        store.set(keys::PLAYER_SEED, "42").await.unwrap();
        let loaded = load_player_levels(&store).await;
        assert_eq!(loaded, generate_player_levels(42, POOL_SIZE));
    }

    #[tokio::test]
    async fn test_corrupt_persisted_levels_are_regenerated() {
        let store = MemoryStorage::new();
        store.set(keys::PLAYER_SEED, "42").await.unwrap();
        store.set(keys::PLAYER_LEVELS, "not json").await.unwrap();
        let loaded = load_player_levels(&store).await;
        assert_eq!(loaded, generate_player_levels(42, POOL_SIZE));
    }
}
