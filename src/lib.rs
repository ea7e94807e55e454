//! puzzle-pals - sliding-puzzle engine with seeded level personalization
//!
//! Two subsystems make up the crate:
//!
//! - **Board engine** (`core`): a 3x3 tile grid plus one external holding
//!   slot adjacent to the bottom-right corner. It validates moves, detects
//!   the win condition, and exposes pure movability queries for input gating.
//! - **Levels and collection** (`levels`, `collection`, `game`): a
//!   per-installation seed deterministically permutes a fixed pool of 17
//!   characters into that player's level order; completing levels earns
//!   stars, unlocks the next level, and grows a permanent rarity-tagged
//!   collection.
//!
//! Persistence goes through the async [`store::Storage`] contract. Storage
//! failures always degrade to safe in-memory defaults; nothing in this crate
//! lets a persistence hiccup block gameplay.

pub mod collection;
pub mod core;
pub mod game;
pub mod levels;
pub mod store;
pub mod types;

pub use collection::{
    collection_stats, recently_unlocked, sort_by_date, sort_by_rarity, CollectionItem,
    CollectionStats,
};
pub use self::core::{Board, BoardSnapshot, PlaySession};
pub use game::{Game, UnlockResult};
pub use levels::{default_levels, generate_player_levels, Character, Level, CHARACTER_POOL};
pub use store::{MemoryStorage, Storage};
pub use types::{CompletionStats, Direction, LevelProgress, MoveResult, Rarity};
