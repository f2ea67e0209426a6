//! The player-controlled survivor
//!
//! The character's tunable numbers (speed, accuracy bonus, damage, fire rate,
//! regeneration) are copies of stat-table totals. `apply_stat` is the only
//! way those copies change, so an upgrade bought in the shop reaches the
//! character in exactly one place.

use crate::collision::{Bounds, Collidable};
use crate::config::CharacterConfig;
use crate::stats::{DamageResult, Health, StatKind, StatTable};
use glam::Vec2;
use rand::Rng;

/// Held movement keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Unit-per-axis direction, each component in {-1, 0, 1}
    pub fn axes(&self) -> Vec2 {
        let mut axes = Vec2::ZERO;
        if self.up {
            axes.y -= 1.0;
        }
        if self.down {
            axes.y += 1.0;
        }
        if self.left {
            axes.x -= 1.0;
        }
        if self.right {
            axes.x += 1.0;
        }
        axes
    }
}

#[derive(Debug, Clone)]
pub struct Character {
    /// Top-left corner in world units
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Units per second
    pub speed: f32,
    pub health: Health,
    /// Half-width of the uniform aim jitter
    pub accuracy_offset: f32,
    /// Fixed offset added to both aim axes
    pub accuracy_bonus: f32,
    /// Damage each bullet deals
    pub damage_bonus: f32,
    /// Shots per second
    pub fire_rate: f32,
    /// Health regained per second
    pub health_regen: f32,
    in_house: bool,
    visible: bool,
}

impl Character {
    /// Creates the character at `position` with parameters taken from `stats`
    ///
    /// The character starts inside the house and invisible.
    pub fn new(position: Vec2, config: &CharacterConfig, stats: &StatTable) -> Self {
        let mut character = Character {
            position,
            width: config.width,
            height: config.height,
            speed: 0.0,
            health: Health::new(stats.total(StatKind::Health)),
            accuracy_offset: config.accuracy_offset,
            accuracy_bonus: 0.0,
            damage_bonus: 0.0,
            fire_rate: 0.0,
            health_regen: 0.0,
            in_house: true,
            visible: false,
        };
        for (kind, entry) in stats.rows() {
            character.apply_stat(kind, entry.total());
        }
        character
    }

    /// Pushes a stat total into the matching character parameter
    ///
    /// Returns false for stats the character does not own.
    pub fn apply_stat(&mut self, kind: StatKind, total: f32) -> bool {
        match kind {
            StatKind::Speed => self.speed = total.max(0.0),
            StatKind::Health => self.health.set_max(total),
            StatKind::Accuracy => self.accuracy_bonus = total,
            StatKind::FireRate => self.fire_rate = total,
            StatKind::Damage => self.damage_bonus = total.max(0.0),
            StatKind::HealthRegen => self.health_regen = total.max(0.0),
            StatKind::BuildingRegen => return false,
        }
        true
    }

    /// Seconds between automatic shots; the rate never drops below `min_rate`
    pub fn shooting_interval(&self, min_rate: f32) -> f32 {
        1.0 / self.fire_rate.max(min_rate).max(f32::EPSILON)
    }

    /// Moves the character for one tick and returns the distance covered
    ///
    /// Each held axis contributes `speed`; a diagonal is divided by √2 so it
    /// covers the same distance as a straight move.
    pub fn handle_movement(&mut self, intent: MoveIntent, dt: f32) -> f32 {
        let mut velocity = intent.axes() * self.speed;
        if velocity.x != 0.0 && velocity.y != 0.0 {
            velocity /= std::f32::consts::SQRT_2;
        }
        let step = velocity * dt;
        self.position += step;
        step.length()
    }

    /// Jitters `target` by the accuracy offset and adds the accuracy bonus
    pub fn aim(&self, target: Vec2, rng: &mut impl Rng) -> Vec2 {
        let spread = self.accuracy_offset.max(0.0);
        let jitter = Vec2::new(
            rng.random_range(-spread..=spread),
            rng.random_range(-spread..=spread),
        );
        target + jitter + Vec2::splat(self.accuracy_bonus)
    }

    pub fn center(&self) -> Vec2 {
        self.position + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn in_house(&self) -> bool {
        self.in_house
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flips house occupancy; the character is visible exactly when outside
    pub fn toggle_in_house(&mut self) {
        self.in_house = !self.in_house;
        self.visible = !self.in_house;
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    /// True when zombies may target and strike the character
    pub fn is_exposed(&self) -> bool {
        !self.in_house && !self.is_dead()
    }

    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        self.health.take_damage(amount)
    }

    /// Heals `health_regen * dt`, capped at max health
    pub fn regenerate(&mut self, dt: f32) -> f32 {
        self.health.heal(self.health_regen * dt)
    }
}

impl Collidable for Character {
    fn get_bounds(&self) -> Bounds {
        Bounds::new(self.position.x, self.position.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const DT: f32 = 1.0 / 60.0;

    fn character() -> Character {
        let config = GameConfig::default();
        let stats = StatTable::from_bases(|kind| config.base_stats.get(kind));
        Character::new(Vec2::new(100.0, 100.0), &config.character, &stats)
    }

    #[test]
    fn test_starts_hidden_in_house_with_base_stats() {
        let c = character();
        assert!(c.in_house());
        assert!(!c.is_visible());
        assert_eq!(c.speed, 72.0);
        assert_eq!(c.damage_bonus, 25.0);
        assert_eq!(c.health.max(), 100.0);
        assert_eq!(c.accuracy_offset, 10.0);
    }

    #[test]
    fn test_toggle_visibility_tracks_occupancy() {
        let mut c = character();
        c.toggle_in_house();
        assert!(!c.in_house());
        assert!(c.is_visible());
        c.toggle_in_house();
        assert!(c.in_house());
        assert!(!c.is_visible());
    }

    #[test]
    fn test_axis_movement() {
        let mut c = character();
        let moved = c.handle_movement(
            MoveIntent {
                right: true,
                ..Default::default()
            },
            1.0,
        );
        assert!((moved - 72.0).abs() < 1e-4);
        assert!((c.position.x - 172.0).abs() < 1e-4);
        assert_eq!(c.position.y, 100.0);
    }

    #[test]
    fn test_diagonal_matches_axis_magnitude() {
        let mut c = character();
        let straight = c.clone().handle_movement(
            MoveIntent {
                up: true,
                ..Default::default()
            },
            DT,
        );
        let diagonal = c.handle_movement(
            MoveIntent {
                up: true,
                left: true,
                ..Default::default()
            },
            DT,
        );
        assert!((straight - diagonal).abs() < 1e-4);
        assert!(c.position.x < 100.0 && c.position.y < 100.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut c = character();
        let moved = c.handle_movement(
            MoveIntent {
                left: true,
                right: true,
                ..Default::default()
            },
            DT,
        );
        assert_eq!(moved, 0.0);
    }

    #[test]
    fn test_movement_applies_inside_house() {
        let mut c = character();
        assert!(c.in_house());
        c.handle_movement(
            MoveIntent {
                down: true,
                ..Default::default()
            },
            1.0,
        );
        assert!(c.position.y > 100.0);
    }

    #[test]
    fn test_aim_stays_within_jitter() {
        let mut c = character();
        c.accuracy_bonus = 5.0;
        let mut rng = StdRng::seed_from_u64(7);
        let target = Vec2::new(300.0, 300.0);
        for _ in 0..100 {
            let aimed = c.aim(target, &mut rng);
            let offset = aimed - target - Vec2::splat(5.0);
            assert!(offset.x.abs() <= 10.0 && offset.y.abs() <= 10.0);
        }
    }

    #[test]
    fn test_aim_without_jitter_is_exact() {
        let mut c = character();
        c.accuracy_offset = 0.0;
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(c.aim(Vec2::new(10.0, 20.0), &mut rng), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_shooting_interval_clamps_rate() {
        let mut c = character();
        assert!((c.shooting_interval(0.1) - 1.0 / 3.0).abs() < 1e-6);
        c.apply_stat(StatKind::FireRate, 0.0);
        assert!((c.shooting_interval(0.1) - 10.0).abs() < 1e-4);
        c.apply_stat(StatKind::FireRate, -3.0);
        assert!(c.shooting_interval(0.1).is_finite());
    }

    #[test]
    fn test_apply_stat_routes_by_kind() {
        let mut c = character();
        assert!(c.apply_stat(StatKind::Speed, 90.0));
        assert!(c.apply_stat(StatKind::HealthRegen, 0.5));
        assert!(!c.apply_stat(StatKind::BuildingRegen, 2.0));
        assert_eq!(c.speed, 90.0);
        assert_eq!(c.health_regen, 0.5);
    }

    #[test]
    fn test_regenerate_caps_at_max() {
        let mut c = character();
        c.health_regen = 2.0;
        c.take_damage(1.0);
        let healed = c.regenerate(1.0);
        assert_eq!(healed, 1.0);
        assert_eq!(c.health.current(), 100.0);
    }

    #[test]
    fn test_exposed_only_outside_and_alive() {
        let mut c = character();
        assert!(!c.is_exposed());
        c.toggle_in_house();
        assert!(c.is_exposed());
        c.take_damage(500.0);
        assert!(c.is_dead());
        assert!(!c.is_exposed());
    }

    #[test]
    fn test_center() {
        let c = character();
        assert_eq!(c.center(), Vec2::new(110.0, 120.0));
    }
}
