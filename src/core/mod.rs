//! Core module - pure puzzle logic with no I/O dependencies
//!
//! Board rules, seeded randomness, star rating, and session timing live here.
//! Nothing in this module touches storage, async, or the UI layer.

pub mod board;
pub mod rng;
pub mod session;
pub mod stars;

// Re-export commonly used types
pub use board::{Board, BoardSnapshot};
pub use rng::{generate_player_seed, seeded_random, seeded_shuffle, SimpleRng};
pub use session::PlaySession;
pub use stars::{merge_stars, stars_for_time};
