//! Faction relationship table.
//!
//! Same-faction pairs are Friendly, explicitly configured pairs use their
//! override, and everything else falls back to a configurable default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use aimassist_core::enums::Reaction;
use aimassist_core::oracles::RelationPolicy;
use aimassist_core::types::FactionTag;

/// One symmetric relation override, as authored in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationEntry {
    pub a: FactionTag,
    pub b: FactionTag,
    pub reaction: Reaction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactionTable {
    overrides: HashMap<(FactionTag, FactionTag), Reaction>,
    same_faction: Reaction,
    default: Reaction,
}

impl Default for FactionTable {
    fn default() -> Self {
        Self {
            overrides: HashMap::new(),
            same_faction: Reaction::Friendly,
            default: Reaction::Hostile,
        }
    }
}

impl FactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every faction hostile to every other, including its own members.
    pub fn free_for_all() -> Self {
        Self {
            same_faction: Reaction::Hostile,
            ..Self::default()
        }
    }

    /// Reaction used between distinct factions without an override.
    pub fn with_default(mut self, reaction: Reaction) -> Self {
        self.default = reaction;
        self
    }

    pub fn from_entries(entries: &[RelationEntry]) -> Self {
        let mut table = Self::default();
        for e in entries {
            table.set(e.a, e.b, e.reaction);
        }
        table
    }

    /// Set the reaction between two factions, in both directions.
    pub fn set(&mut self, a: FactionTag, b: FactionTag, reaction: Reaction) {
        self.overrides.insert((a, b), reaction);
        self.overrides.insert((b, a), reaction);
    }
}

impl RelationPolicy for FactionTable {
    fn relation(&self, from: FactionTag, to: FactionTag) -> Reaction {
        if let Some(r) = self.overrides.get(&(from, to)) {
            return *r;
        }
        if from == to {
            self.same_faction
        } else {
            self.default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: FactionTag = FactionTag(1);
    const BLUE: FactionTag = FactionTag(2);
    const GREY: FactionTag = FactionTag(3);

    #[test]
    fn test_default_relations() {
        let table = FactionTable::new();
        assert_eq!(table.relation(RED, RED), Reaction::Friendly);
        assert_eq!(table.relation(RED, BLUE), Reaction::Hostile);
    }

    #[test]
    fn test_override_is_symmetric() {
        let mut table = FactionTable::new();
        table.set(RED, GREY, Reaction::Neutral);
        assert_eq!(table.relation(RED, GREY), Reaction::Neutral);
        assert_eq!(table.relation(GREY, RED), Reaction::Neutral);
        assert_eq!(table.relation(BLUE, GREY), Reaction::Hostile);
    }

    #[test]
    fn test_free_for_all() {
        let table = FactionTable::free_for_all();
        assert_eq!(table.relation(RED, RED), Reaction::Hostile);
    }

    #[test]
    fn test_from_entries_and_default() {
        let table = FactionTable::from_entries(&[RelationEntry {
            a: RED,
            b: BLUE,
            reaction: Reaction::Friendly,
        }])
        .with_default(Reaction::Neutral);
        assert_eq!(table.relation(BLUE, RED), Reaction::Friendly);
        assert_eq!(table.relation(RED, GREY), Reaction::Neutral);
    }
}
