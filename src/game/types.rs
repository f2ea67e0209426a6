// Shared input and snapshot types
//
// `PlayerInput` flows from the presentation layer into the world once per
// frame. `HudSnapshot` flows back out; it is plain data the HUD can draw
// without holding a borrow on the world.

use crate::character::MoveIntent;
use crate::house::HintKind;
use glam::Vec2;

/// Held controls for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub movement: MoveIntent,
    /// Left mouse button held
    pub fire_held: bool,
    /// Cursor position in world units
    pub aim: Vec2,
}

/// Counters and health fractions for the HUD
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub day: u32,
    /// `m:ss` while the next-day countdown runs
    pub countdown: Option<String>,
    pub money: u32,
    pub food: u32,
    pub ammo: u32,
    pub scrap: u32,
    pub zombies_remaining: usize,
    pub character_health: f32,
    pub house_health: f32,
    pub house_destroyed: bool,
    pub in_house: bool,
    pub dps: f32,
    pub sps: f32,
    pub player_speed: f32,
    pub zoom: f32,
    /// Prompt and its opacity, when one is showing
    pub hint: Option<(HintKind, f32)>,
}

/// What happened during one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub shots: u32,
    pub hits: u32,
    pub kills: u32,
    pub character_damage: f32,
    pub house_damage: f32,
    pub pickups: u32,
    pub day_cleared: bool,
    pub day_advanced: bool,
}
