//! Zombies: spawn outside the screen, walk at the house, chase the character
//! when it wanders close.
//!
//! A zombie never mutates anything but itself. When a melee timer fires,
//! `update` returns a `MeleeStrike` and the world applies the damage.

use crate::character::Character;
use crate::collision::{Bounds, Collidable};
use crate::config::ZombieConfig;
use crate::stats::{DamageResult, Health};
use glam::Vec2;
use rand::Rng;

/// What a zombie is currently walking toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZombieTarget {
    House,
    Character,
}

/// Damage a zombie landed this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeleeStrike {
    Character(f32),
    House(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpawnSide {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Zombie {
    /// Top-left corner in world units
    pub position: Vec2,
    /// Units per second, recomputed every tick
    pub velocity: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: Health,
    pub speed: f32,
    target: ZombieTarget,
    character_timer: f32,
    house_timer: f32,
}

impl Zombie {
    pub fn new(position: Vec2, config: &ZombieConfig) -> Self {
        Zombie {
            position,
            velocity: Vec2::ZERO,
            width: config.width,
            height: config.height,
            health: Health::new(config.max_health),
            speed: config.speed,
            target: ZombieTarget::House,
            character_timer: 0.0,
            house_timer: 0.0,
        }
    }

    /// Creates a zombie at a random point just outside one of the four edges
    pub fn spawn(config: &ZombieConfig, screen: Vec2, rng: &mut impl Rng) -> Self {
        let position = Zombie::spawn_location(screen, config.spawn_buffer, rng);
        Zombie::new(position, config)
    }

    /// Random point `buffer` units beyond a randomly chosen screen edge
    pub fn spawn_location(screen: Vec2, buffer: f32, rng: &mut impl Rng) -> Vec2 {
        let side = match rng.random_range(0..4) {
            0 => SpawnSide::Top,
            1 => SpawnSide::Bottom,
            2 => SpawnSide::Left,
            _ => SpawnSide::Right,
        };
        let along_x = rng.random_range(-buffer..=screen.x + buffer);
        let along_y = rng.random_range(-buffer..=screen.y + buffer);

        match side {
            SpawnSide::Top => Vec2::new(along_x, -buffer),
            SpawnSide::Bottom => Vec2::new(along_x, screen.y + buffer),
            SpawnSide::Left => Vec2::new(-buffer, along_y),
            SpawnSide::Right => Vec2::new(screen.x + buffer, along_y),
        }
    }

    pub fn target(&self) -> ZombieTarget {
        self.target
    }

    /// Points the velocity at `target`; zero when already there
    pub fn steer_towards(&mut self, target: Vec2) {
        self.velocity = (target - self.position).normalize_or_zero() * self.speed;
    }

    /// Advances the zombie by one tick
    ///
    /// Target choice: the character when it is exposed and closer than the
    /// aggro range, the house center otherwise. After moving, a zombie in
    /// melee range of the character ticks its character timer; failing that,
    /// one in range of the house ticks its house timer. Each timer strikes and
    /// resets once it reaches its interval.
    pub fn update(
        &mut self,
        dt: f32,
        character: &Character,
        house_center: Vec2,
        config: &ZombieConfig,
    ) -> Option<MeleeStrike> {
        let exposed = character.is_exposed();

        self.target = if exposed && self.position.distance(character.position) < config.aggro_range {
            ZombieTarget::Character
        } else {
            ZombieTarget::House
        };
        let goal = match self.target {
            ZombieTarget::Character => character.position,
            ZombieTarget::House => house_center,
        };
        self.steer_towards(goal);
        self.position += self.velocity * dt;

        if exposed && self.position.distance(character.position) < config.melee_range {
            self.character_timer += dt;
            if self.character_timer >= config.melee_interval {
                self.character_timer = 0.0;
                return Some(MeleeStrike::Character(config.melee_damage));
            }
        } else if self.position.distance(house_center) < config.melee_range {
            self.house_timer += dt;
            if self.house_timer >= config.house_interval {
                self.house_timer = 0.0;
                return Some(MeleeStrike::House(config.house_damage));
            }
        }
        None
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        self.health.take_damage(amount)
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }
}

impl Collidable for Zombie {
    fn get_bounds(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.width, self.height)
    }
}
