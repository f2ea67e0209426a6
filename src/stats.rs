//! Health and the player stat table
//!
//! This module provides:
//! - `Health`: current/max pair that can never leave `[0, max]`
//! - `StatKind`: the closed set of upgradable player attributes
//! - `StatTable`: base + boost bookkeeping for every `StatKind`
//!
//! # Totals
//!
//! A stat's total is never stored. `StatEntry::total()` always computes
//! `base + boost`, so the invariant cannot drift no matter how many shop
//! purchases or team boosts are stacked on top of each other.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Hit points shared by the character, zombies and the house
///
/// Regeneration and repairs heal up to `max`; damage stops at zero.
///
/// # Example
///
/// ```rust
/// use fortress::stats::Health;
///
/// let mut health = Health::new(100.0);
/// health.take_damage(30.0);
/// assert_eq!(health.current(), 70.0);
/// assert_eq!(health.fraction(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Full health at `max`
    ///
    /// A negative or non-finite max is treated as zero.
    pub fn new(max: f32) -> Self {
        let max = sanitize_max(max);
        Health { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Health still missing before the bar is full
    pub fn missing(&self) -> f32 {
        self.max - self.current
    }

    /// Returns health as a fraction (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    /// Checks if health has been depleted
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Subtracts `amount`, never going below zero
    ///
    /// Negative and NaN amounts deal no damage.
    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        if amount <= 0.0 || amount.is_nan() {
            return DamageResult::no_damage(self.is_depleted());
        }

        let old_health = self.current;
        self.current = (self.current - amount).max(0.0);

        DamageResult {
            damage_dealt: old_health - self.current,
            is_fatal: self.current <= 0.0,
        }
    }

    /// Adds `amount` up to `max` and returns what was actually gained
    pub fn heal(&mut self, amount: f32) -> f32 {
        if amount <= 0.0 || amount.is_nan() {
            return 0.0;
        }
        let old_health = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - old_health
    }

    /// Restores health to max, returning how much was restored
    pub fn restore_full(&mut self) -> f32 {
        let restored = self.missing();
        self.current = self.max;
        restored
    }

    /// Changes `max`, pulling `current` down if it no longer fits
    pub fn set_max(&mut self, new_max: f32) {
        self.max = sanitize_max(new_max);
        if self.current > self.max {
            self.current = self.max;
        }
    }
}

fn sanitize_max(max: f32) -> f32 {
    if max.is_finite() && max > 0.0 { max } else { 0.0 }
}

/// Outcome of `Health::take_damage`
#[derive(Debug, Clone, PartialEq)]
pub struct DamageResult {
    /// Health actually removed
    pub damage_dealt: f32,
    /// Whether the target is at zero health after this hit
    pub is_fatal: bool,
}

impl DamageResult {
    pub fn no_damage(already_dead: bool) -> Self {
        DamageResult {
            damage_dealt: 0.0,
            is_fatal: already_dead,
        }
    }
}

/// Upgradable player attributes
///
/// Every place that turns a stat into gameplay matches on this enum, so a new
/// kind cannot be added without the compiler pointing at each consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKind {
    /// Character movement speed in units per second
    Speed,
    /// Character max health
    Health,
    /// Fixed offset added to every aim point
    Accuracy,
    /// Shots per second while the trigger is held
    FireRate,
    /// Damage dealt by each bullet
    Damage,
    /// Character health regained per second
    HealthRegen,
    /// House health regained per second
    BuildingRegen,
}

impl StatKind {
    /// All kinds in stat-window display order
    pub const ALL: [StatKind; 7] = [
        StatKind::Speed,
        StatKind::Health,
        StatKind::Accuracy,
        StatKind::FireRate,
        StatKind::Damage,
        StatKind::HealthRegen,
        StatKind::BuildingRegen,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Speed => "Speed",
            StatKind::Health => "Health",
            StatKind::Accuracy => "Accuracy",
            StatKind::FireRate => "Rate of Fire",
            StatKind::Damage => "Damage",
            StatKind::HealthRegen => "Health Regen Rate",
            StatKind::BuildingRegen => "Building Regen Rate",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the stat table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatEntry {
    pub base: f32,
    pub boost: f32,
}

impl StatEntry {
    pub fn new(base: f32) -> Self {
        StatEntry { base, boost: 0.0 }
    }

    pub fn total(&self) -> f32 {
        self.base + self.boost
    }
}

/// Base/boost/total bookkeeping for every `StatKind`
///
/// Boosts from team roles and shop upgrades stack additively on top of the
/// base value. The table is the single source of truth; the character and
/// house only hold copies of the totals.
#[derive(Debug, Clone)]
pub struct StatTable {
    entries: HashMap<StatKind, StatEntry>,
}

impl StatTable {
    /// Creates a table where each kind starts at `base(kind)` with no boost
    pub fn from_bases(base: impl Fn(StatKind) -> f32) -> Self {
        let entries = StatKind::ALL
            .iter()
            .map(|&kind| (kind, StatEntry::new(base(kind))))
            .collect();
        StatTable { entries }
    }

    pub fn entry(&self, kind: StatKind) -> StatEntry {
        self.entries.get(&kind).copied().unwrap_or_default()
    }

    pub fn base(&self, kind: StatKind) -> f32 {
        self.entry(kind).base
    }

    pub fn boost(&self, kind: StatKind) -> f32 {
        self.entry(kind).boost
    }

    pub fn total(&self, kind: StatKind) -> f32 {
        self.entry(kind).total()
    }

    /// Adds `amount` to the boost of `kind` and returns the new total
    ///
    /// A zero boost leaves the entry untouched. Non-finite amounts are ignored.
    pub fn apply_boost(&mut self, kind: StatKind, amount: f32) -> f32 {
        let entry = self.entries.entry(kind).or_default();
        if amount.is_finite() {
            entry.boost += amount;
        }
        entry.total()
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = (StatKind, StatEntry)> + '_ {
        StatKind::ALL.iter().map(move |&kind| (kind, self.entry(kind)))
    }
}
