//! Session-level match rules.

use std::collections::HashMap;

use aimassist_core::oracles::MatchRules;
use aimassist_core::types::EntityId;

/// Game mode flag plus per-shooter manual target locks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionRules {
    pub competitive: bool,
    manual_targets: HashMap<EntityId, EntityId>,
}

impl SessionRules {
    pub fn new(competitive: bool) -> Self {
        Self {
            competitive,
            manual_targets: HashMap::new(),
        }
    }

    /// Record that `shooter` has locked onto `target` by hand.
    pub fn set_manual_target(&mut self, shooter: EntityId, target: EntityId) {
        self.manual_targets.insert(shooter, target);
    }

    pub fn clear_manual_target(&mut self, shooter: EntityId) {
        self.manual_targets.remove(&shooter);
    }

    pub fn manual_target(&self, shooter: EntityId) -> Option<EntityId> {
        self.manual_targets.get(&shooter).copied()
    }
}

impl MatchRules for SessionRules {
    fn is_competitive(&self) -> bool {
        self.competitive
    }

    fn has_manual_target(&self, shooter: EntityId) -> bool {
        self.manual_targets.contains_key(&shooter)
    }
}
