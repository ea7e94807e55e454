//! Character pool - the fixed authoring-time roster of collectible characters
//!
//! Exactly 17 unique characters with hand-assigned rarities (8 common,
//! 5 rare, 3 epic, 1 legendary). Order here is the canonical unshuffled
//! order; per-player level order is a seeded permutation of this list.

use crate::types::{Rarity, POOL_SIZE};

/// One collectible character as authored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub rarity: Rarity,
}

/// The full authoring pool, in canonical order
pub const CHARACTER_POOL: [Character; POOL_SIZE] = [
    Character {
        id: 1,
        name: "Mochi the Cat",
        image: "characters/mochi.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 2,
        name: "Biscuit the Pup",
        image: "characters/biscuit.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 3,
        name: "Pip the Chick",
        image: "characters/pip.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 4,
        name: "Sesame the Bunny",
        image: "characters/sesame.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 5,
        name: "Clover the Frog",
        image: "characters/clover.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 6,
        name: "Pebble the Turtle",
        image: "characters/pebble.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 7,
        name: "Waffle the Hamster",
        image: "characters/waffle.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 8,
        name: "Maple the Fox",
        image: "characters/maple.png",
        rarity: Rarity::Common,
    },
    Character {
        id: 9,
        name: "Juniper the Owl",
        image: "characters/juniper.png",
        rarity: Rarity::Rare,
    },
    Character {
        id: 10,
        name: "Cosmo the Raccoon",
        image: "characters/cosmo.png",
        rarity: Rarity::Rare,
    },
    Character {
        id: 11,
        name: "Saffron the Deer",
        image: "characters/saffron.png",
        rarity: Rarity::Rare,
    },
    Character {
        id: 12,
        name: "Indigo the Penguin",
        image: "characters/indigo.png",
        rarity: Rarity::Rare,
    },
    Character {
        id: 13,
        name: "Marble the Red Panda",
        image: "characters/marble.png",
        rarity: Rarity::Rare,
    },
    Character {
        id: 14,
        name: "Ember the Dragonet",
        image: "characters/ember.png",
        rarity: Rarity::Epic,
    },
    Character {
        id: 15,
        name: "Nimbus the Sky Whale",
        image: "characters/nimbus.png",
        rarity: Rarity::Epic,
    },
    Character {
        id: 16,
        name: "Aurora the Unicorn",
        image: "characters/aurora.png",
        rarity: Rarity::Epic,
    },
    Character {
        id: 17,
        name: "Solstice the Phoenix",
        image: "characters/solstice.png",
        rarity: Rarity::Legendary,
    },
];

/// Look up a character by its stable id
pub fn character_by_id(id: u32) -> Option<&'static Character> {
    CHARACTER_POOL.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_size_and_unique_ids() {
        assert_eq!(CHARACTER_POOL.len(), POOL_SIZE);
        let ids: HashSet<u32> = CHARACTER_POOL.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), POOL_SIZE);
    }

    #[test]
    fn test_rarity_census() {
        let count = |rarity: Rarity| {
            CHARACTER_POOL
                .iter()
                .filter(|c| c.rarity == rarity)
                .count()
        };
        assert_eq!(count(Rarity::Common), 8);
        assert_eq!(count(Rarity::Rare), 5);
        assert_eq!(count(Rarity::Epic), 3);
        assert_eq!(count(Rarity::Legendary), 1);
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(character_by_id(1).map(|c| c.name), Some("Mochi the Cat"));
        assert_eq!(
            character_by_id(17).map(|c| c.rarity),
            Some(Rarity::Legendary)
        );
        assert!(character_by_id(18).is_none());
        assert!(character_by_id(0).is_none());
    }
}
