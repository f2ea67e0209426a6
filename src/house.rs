//! The house at the center of the screen
//!
//! A destroyed house turns to rubble on screen but the game goes on: it can
//! still be repaired and still regenerates.

use crate::config::{CharacterConfig, HouseConfig};
use crate::stats::{DamageResult, Health};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct House {
    center: Vec2,
    pub size: f32,
    pub health: Health,
    /// Health regained per second
    pub building_regen: f32,
}

impl House {
    pub fn new(center: Vec2, config: &HouseConfig) -> Self {
        House {
            center,
            size: config.size,
            health: Health::new(config.max_health),
            building_regen: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        self.health.take_damage(amount)
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_depleted()
    }

    /// Whole points of health needed to be back at max
    pub fn missing_health(&self) -> u32 {
        self.health.missing().max(0.0).ceil() as u32
    }

    /// Restores full health and returns how much was restored
    pub fn repair_full(&mut self) -> f32 {
        self.health.restore_full()
    }

    /// Heals `building_regen * dt`, capped at max health
    pub fn regenerate(&mut self, dt: f32) -> f32 {
        self.health.heal(self.building_regen * dt)
    }

    /// True when `point` is close enough to the center to step inside
    pub fn within_entry_radius(&self, point: Vec2, radius: f32) -> bool {
        self.center.distance(point) <= radius
    }
}

/// Which way the house prompt points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Enter,
    Exit,
}

impl HintKind {
    pub fn message(&self) -> &'static str {
        match self {
            HintKind::Enter => "Press E to enter house",
            HintKind::Exit => "Press E to exit house",
        }
    }
}

/// "Press E to enter/exit house" prompt
///
/// Shown in full for most of its lifetime, then fades out linearly.
#[derive(Debug, Clone)]
pub struct InteractionHint {
    kind: HintKind,
    remaining: f32,
    duration: f32,
    fade: f32,
}

impl InteractionHint {
    pub fn new(config: &CharacterConfig) -> Self {
        InteractionHint {
            kind: HintKind::Exit,
            remaining: 0.0,
            duration: config.hint_duration,
            fade: config.hint_fade,
        }
    }

    pub fn show(&mut self, kind: HintKind) {
        self.kind = kind;
        self.remaining = self.duration;
    }

    pub fn hide(&mut self) {
        self.remaining = 0.0;
    }

    pub fn kind(&self) -> HintKind {
        self.kind
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt).max(0.0);
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0
    }

    /// Opacity in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        if self.remaining <= 0.0 {
            0.0
        } else if self.fade <= 0.0 || self.remaining >= self.fade {
            1.0
        } else {
            self.remaining / self.fade
        }
    }
}
