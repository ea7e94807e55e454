//! Core types shared across the crate
//! This module contains pure data types with no dependencies beyond the
//! serde derives on the persisted ones.

use serde::{Deserialize, Serialize};

/// Grid dimensions (the puzzle is always 3x3 plus one external slot)
pub const GRID_SIZE: usize = 3;
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Size of the fixed character authoring pool
pub const POOL_SIZE: usize = 17;

/// Maximum stars awardable for a level
pub const MAX_STARS: u8 = 3;

/// Star time thresholds (seconds)
pub const THREE_STAR_MAX_SECS: u64 = 30;
pub const TWO_STAR_MAX_SECS: u64 = 60;

/// Player seeds are reduced modulo this bound at generation time
pub const PLAYER_SEED_MODULUS: i64 = 1_000_000;

/// Identifier of one of the 9 unique tiles (0..8)
pub type TileId = u8;

/// Cell on the board (None = empty, Some = occupied by a tile)
pub type Cell = Option<TileId>;

/// Row index that addresses the external slot in the public move API.
/// The external slot sits below grid cell (2,2) and is adjacent only to it.
pub const EXTERNAL_ROW: usize = 3;
pub const EXTERNAL_COL: usize = 2;

/// Compass direction for a tile move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Offset of one step in this direction as (row delta, col delta)
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Rarity tier of a collectible character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Numeric rank used for ordering (legendary highest)
    pub fn rank(&self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }

    /// Parse rarity from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Outcome of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether the board changed
    pub moved: bool,
    /// Whether the board is solved after this move
    pub is_win: bool,
}

impl MoveResult {
    /// Result for a request that matched no legal case
    pub fn no_op() -> Self {
        Self::default()
    }
}

/// Per-level progress record, persisted as JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub unlocked: bool,
    pub completed: bool,
    pub stars: u8,
}

impl LevelProgress {
    /// Record for a level the player has not reached yet
    pub fn locked() -> Self {
        Self {
            unlocked: false,
            completed: false,
            stars: 0,
        }
    }

    /// Record for a level that is available but untouched
    pub fn unlocked() -> Self {
        Self {
            unlocked: true,
            completed: false,
            stars: 0,
        }
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::locked()
    }
}

/// Completion summary shown on the win screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// Completion time in whole seconds
    pub time: u64,
    pub stars: u8,
}
