//! Amortized visibility table.
//!
//! Line-of-sight tests are too expensive to run for every candidate on every
//! shot, so answers are cached per (shooter, target) pair and refreshed on a
//! per-frame budget. `can_see` never runs a test itself: it returns the cached
//! answer (false when the pair has never been checked) and queues a refresh
//! when the answer is older than the caller's latency budget. `update` runs
//! the queued tests, oldest request first.
//!
//! Entries are keyed by entity id, so despawned entities must be dropped with
//! [`VisTable::forget`]. Queued pairs whose entities no longer resolve are
//! dropped by `update`.

use std::collections::{HashMap, VecDeque};

use glam::Vec3;

use aimassist_core::constants::VIS_CHECKS_PER_FRAME;
use aimassist_core::oracles::VisibilityOracle;
use aimassist_core::types::EntityId;

use crate::los::LineOfSight;

type PairKey = (EntityId, EntityId);

#[derive(Debug, Clone, Copy, Default)]
struct VisEntry {
    visible: bool,
    /// Frame of the last completed test.
    checked_frame: Option<u64>,
    /// Whether the pair is waiting in the refresh queue.
    queued: bool,
}

/// Cached, rate-limited visibility oracle over any [`LineOfSight`] source.
#[derive(Debug)]
pub struct VisTable<L> {
    los: L,
    frame: u64,
    max_checks_per_frame: usize,
    entries: HashMap<PairKey, VisEntry>,
    pending: VecDeque<PairKey>,
}

impl<L: LineOfSight> VisTable<L> {
    pub fn new(los: L) -> Self {
        Self {
            los,
            frame: 0,
            max_checks_per_frame: VIS_CHECKS_PER_FRAME,
            entries: HashMap::new(),
            pending: VecDeque::new(),
        }
    }

    /// Override the number of line-of-sight tests run per `update`.
    pub fn with_checks_per_frame(mut self, checks: usize) -> Self {
        self.max_checks_per_frame = checks.max(1);
        self
    }

    /// Number of `update` calls so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Pairs waiting for a refresh.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Cached (shooter, target) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance one frame and run up to the per-frame budget of queued tests.
    ///
    /// `position_of` resolves an entity to the world point tested from/to.
    /// Pairs it cannot resolve are dropped, which reads as not visible.
    pub fn update<F>(&mut self, position_of: F)
    where
        F: Fn(EntityId) -> Option<Vec3>,
    {
        self.frame += 1;

        let mut checks = 0;
        while checks < self.max_checks_per_frame {
            let Some(key) = self.pending.pop_front() else {
                break;
            };
            if !self.entries.contains_key(&key) {
                continue; // forgotten while queued
            }

            let (shooter, target) = key;
            let (Some(from), Some(to)) = (position_of(shooter), position_of(target)) else {
                tracing::trace!(%shooter, %target, "visibility pair unresolved, dropping");
                self.entries.remove(&key);
                continue;
            };
            let visible = self.los.line_of_sight(from, to);
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.visible = visible;
                entry.checked_frame = Some(self.frame);
                entry.queued = false;
            }
            checks += 1;
        }
    }

    /// Drop every cached answer involving `id` (call on despawn).
    pub fn forget(&mut self, id: EntityId) {
        self.entries.retain(|(a, b), _| *a != id && *b != id);
        self.pending.retain(|(a, b)| *a != id && *b != id);
    }
}

impl<L: LineOfSight> VisibilityOracle for VisTable<L> {
    fn can_see(&mut self, shooter: EntityId, candidate: EntityId, budget_hint: u32) -> bool {
        let key = (shooter, candidate);
        let frame = self.frame;
        let entry = self.entries.entry(key).or_default();

        let fresh = entry
            .checked_frame
            .is_some_and(|checked| frame.saturating_sub(checked) <= u64::from(budget_hint));
        if !fresh && !entry.queued {
            entry.queued = true;
            self.pending.push_back(key);
        }

        entry.visible
    }
}
