//! Weighted quantity rolls
//!
//! Each resource has an inclusive range `[min, max]`. Value `v` is drawn with
//! weight `weight_ceiling - v`, so the low end of the range is the common
//! case and the top value is the rarest.

use crate::config::{DropConfig, ResourceRange};
use crate::drops::ResourceKind;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct LootTable {
    food: ResourceRange,
    ammo: ResourceRange,
    scrap: ResourceRange,
}

impl LootTable {
    pub fn new(config: &DropConfig) -> Self {
        LootTable {
            food: config.food,
            ammo: config.ammo,
            scrap: config.scrap,
        }
    }

    pub fn range(&self, kind: ResourceKind) -> ResourceRange {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Ammo => self.ammo,
            ResourceKind::Scrap => self.scrap,
        }
    }

    /// Quantity yielded by collecting one drop of `kind`
    pub fn roll(&self, kind: ResourceKind, rng: &mut impl Rng) -> u32 {
        roll_quantity(self.range(kind), rng)
    }
}

/// Draws one value from `range` with linearly decreasing weights
///
/// Falls back to `range.min` if no value has a positive weight. Sampling
/// picks a uniform candidate and keeps it with probability
/// `weight / heaviest weight`. The mean weight is at least half the
/// heaviest, so this takes about two draws whatever the range width.
pub fn roll_quantity(range: ResourceRange, rng: &mut impl Rng) -> u32 {
    let ceiling = range.weight_ceiling;
    if range.min > range.max || ceiling <= range.min {
        return range.min;
    }
    // Values at or past the ceiling have zero weight
    let top = range.max.min(ceiling - 1);

    let heaviest = ceiling - range.min;
    loop {
        let candidate = rng.random_range(range.min..=top);
        if rng.random_range(0..heaviest) < ceiling - candidate {
            return candidate;
        }
    }
}
