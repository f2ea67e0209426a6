//! Shooting cadence and bullet-vs-zombie resolution
//!
//! This module provides:
//! - `FireControl`: the automatic-fire timer
//! - `try_fire`: turns a held trigger into at most one bullet
//! - `resolve_bullet_hits`: applies bullet damage and removes the dead
//!
//! # Rust Learning Notes
//!
//! - **Enums with data**: `Shot::Fired(Bullet)` carries the new bullet, the
//!   other variants say why nothing was fired
//! - **Deferred removal**: hits are marked during the scan and removed with
//!   `retain` afterwards, so no collection is mutated while it is iterated

use crate::bullet::Bullet;
use crate::character::Character;
use crate::collision::check_collisions_with_collection;
use crate::config::BulletConfig;
use crate::economy::Materials;
use crate::zombie::Zombie;
use glam::Vec2;
use rand::Rng;

/// Time since the last shot, compared against the shooting interval
#[derive(Debug, Clone)]
pub struct FireControl {
    since_last_shot: f32,
}

impl Default for FireControl {
    fn default() -> Self {
        // Ready to fire on the first tick
        FireControl {
            since_last_shot: f32::INFINITY,
        }
    }
}

impl FireControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        self.since_last_shot += dt;
    }

    pub fn is_ready(&self, interval: f32) -> bool {
        self.since_last_shot >= interval
    }

    pub fn mark_fired(&mut self) {
        self.since_last_shot = 0.0;
    }
}

/// What a held trigger produced this tick
#[derive(Debug, Clone)]
pub enum Shot {
    Fired(Bullet),
    /// Still inside the shooting interval
    NotReady,
    /// Outside the house with no ammo
    DryFire,
    /// Jittered aim landed on the muzzle
    NoDirection,
}

/// Fires one bullet from the character's center if the cadence allows
///
/// Outside the house a shot costs one round; inside it is free. A dry
/// trigger or a degenerate aim leaves both the ammo count and the cadence
/// untouched.
pub fn try_fire(
    fire: &mut FireControl,
    character: &Character,
    materials: &mut Materials,
    target: Vec2,
    zoom: f32,
    config: &BulletConfig,
    rng: &mut impl Rng,
) -> Shot {
    if !fire.is_ready(character.shooting_interval(config.min_fire_rate)) {
        return Shot::NotReady;
    }
    let costs_ammo = !character.in_house();
    if costs_ammo && materials.ammo == 0 {
        return Shot::DryFire;
    }

    let aimed = character.aim(target, rng);
    let Some(bullet) = Bullet::new(character.center(), aimed, zoom, config) else {
        return Shot::NoDirection;
    };

    if costs_ammo {
        materials.consume_ammo();
    }
    fire.mark_fired();
    Shot::Fired(bullet)
}

/// Totals from one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitReport {
    pub hits: u32,
    pub damage: f32,
    pub kills: u32,
}

/// Applies `damage` to every living zombie a bullet overlaps
///
/// A bullet sitting on a stack of zombies damages all of them. Zombies
/// already killed earlier in the pass are skipped, so a later bullet in the
/// same spot can miss. Bullets that hit and zombies that died are removed
/// after the scan.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, zombies: &mut Vec<Zombie>, damage: f32) -> HitReport {
    let mut report = HitReport::default();
    let mut spent = vec![false; bullets.len()];

    for (bullet, hit) in bullets.iter().zip(spent.iter_mut()) {
        for index in check_collisions_with_collection(bullet, &zombies[..]) {
            let zombie = &mut zombies[index];
            if zombie.is_dead() {
                continue;
            }

            let result = zombie.take_damage(damage);
            log::debug!(
                "hit zombie for {} ({} left)",
                result.damage_dealt,
                zombie.health.current()
            );
            report.hits += 1;
            report.damage += damage;
            if result.is_fatal {
                report.kills += 1;
            }
            *hit = true;
        }
    }

    let mut flags = spent.into_iter();
    bullets.retain(|_| !flags.next().unwrap_or(false));
    zombies.retain(|z| !z.is_dead());

    report
}
