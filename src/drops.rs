//! Resource crates lying in the field
//!
//! Walking over a drop collects it. The quantity is rolled at collection
//! time (see `economy::loot`), so a drop itself only knows its kind.

use crate::collision::{Bounds, Collidable};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Food,
    Ammo,
    Scrap,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Food, ResourceKind::Ammo, ResourceKind::Scrap];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Food => "Food",
            ResourceKind::Ammo => "Ammo",
            ResourceKind::Scrap => "Scrap",
        }
    }

    /// Uniformly random kind
    pub fn random(rng: &mut impl Rng) -> Self {
        ResourceKind::ALL[rng.random_range(0..ResourceKind::ALL.len())]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct ResourceDrop {
    /// Top-left corner in world units
    pub position: Vec2,
    pub kind: ResourceKind,
    pub size: f32,
}

impl ResourceDrop {
    pub fn new(position: Vec2, kind: ResourceKind, size: f32) -> Self {
        ResourceDrop { position, kind, size }
    }

    /// Places a drop at a random point fully inside the `screen` rectangle
    pub fn scatter(kind: ResourceKind, screen: Vec2, size: f32, rng: &mut impl Rng) -> Self {
        let max = (screen - Vec2::splat(size)).max(Vec2::ZERO);
        let position = Vec2::new(rng.random_range(0.0..=max.x), rng.random_range(0.0..=max.y));
        ResourceDrop::new(position, kind, size)
    }
}

impl Collidable for ResourceDrop {
    fn get_bounds(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.size, self.size)
    }
}
