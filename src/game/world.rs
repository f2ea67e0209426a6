// GameWorld: owns every entity and counter in a running game
//
// The presentation layer talks to the simulation only through this struct.
// It feeds input with `set_input`, calls `tick` once per fixed step, invokes
// the player-facing actions (upgrade, repair, next day, house toggle, zoom)
// and reads state back through the accessors and `hud()`.

use crate::bullet::Bullet;
use crate::character::Character;
use crate::collision::{Collidable, aabb_intersect};
use crate::combat::{self, FireControl, Shot};
use crate::config::GameConfig;
use crate::day::{self, DayCounter};
use crate::drops::{ResourceDrop, ResourceKind};
use crate::economy::{LootTable, Materials, Purchase, Shop, Wallet};
use crate::error::ShopError;
use crate::house::{HintKind, House, InteractionHint};
use crate::metrics::{RateMeter, SpeedMeter};
use crate::stats::{StatKind, StatTable};
use crate::team::Team;
use crate::zombie::{MeleeStrike, Zombie};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use super::{HudSnapshot, PlayerInput, TickReport};

pub struct GameWorld {
    config: GameConfig,
    rng: StdRng,
    team: Team,
    stats: StatTable,
    character: Character,
    house: House,
    zombies: Vec<Zombie>,
    bullets: Vec<Bullet>,
    drops: Vec<ResourceDrop>,
    materials: Materials,
    wallet: Wallet,
    shop: Shop,
    loot: LootTable,
    day: DayCounter,
    fire: FireControl,
    dps: RateMeter,
    sps: RateMeter,
    speed: SpeedMeter,
    hint: InteractionHint,
    near_house: bool,
    input: PlayerInput,
    zoom: f32,
}

impl GameWorld {
    /// Starts day 1 with an OS-seeded random source
    pub fn new(config: GameConfig, team: Team) -> Self {
        Self::with_rng(config, team, StdRng::from_os_rng())
    }

    /// Starts day 1 with a reproducible random source
    pub fn with_seed(config: GameConfig, team: Team, seed: u64) -> Self {
        Self::with_rng(config, team, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, team: Team, rng: StdRng) -> Self {
        let mut stats = StatTable::from_bases(|kind| config.base_stats.get(kind));
        team.apply_boosts(&mut stats);

        let house_center = Vec2::new(config.screen_width, config.screen_height) / 2.0;
        let house = House::new(house_center, &config.house);
        // Position is the top-left anchor, so the character starts on the house center
        let character = Character::new(house_center, &config.character, &stats);

        let mut hint = InteractionHint::new(&config.character);
        hint.show(HintKind::Exit);

        let mut world = GameWorld {
            rng,
            stats,
            character,
            house,
            zombies: Vec::new(),
            bullets: Vec::new(),
            drops: Vec::new(),
            materials: Materials {
                ammo: config.economy.starting_ammo,
                ..Default::default()
            },
            wallet: Wallet::new(config.economy.starting_money),
            shop: Shop::new(&config.economy),
            loot: LootTable::new(&config.drops),
            day: DayCounter::new(config.progression.countdown_secs),
            fire: FireControl::new(),
            dps: RateMeter::new(config.metrics.dps_window),
            sps: RateMeter::new(config.metrics.sps_window),
            speed: SpeedMeter::new(config.metrics.speed_samples, config.metrics.speed_floor),
            hint,
            near_house: true,
            input: PlayerInput::default(),
            zoom: config.zoom.initial,
            team,
            config,
        };
        world.push_stat(StatKind::BuildingRegen);

        let initial_drops = world.config.drops.initial_count;
        world.spawn_drops(initial_drops);
        world.spawn_wave();
        log::info!(
            "day 1 begins: protecting {} with {} zombies incoming",
            world.team.family,
            world.zombies.len()
        );
        world
    }

    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Advances the simulation by one step of `dt` seconds
    ///
    /// Order within a tick: movement, regeneration, shooting, bullet flight
    /// and hits, zombie movement and melee, drop pickup, day progression,
    /// meters.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        if !(dt.is_finite() && dt > 0.0) {
            return report;
        }

        let moved = self.character.handle_movement(self.input.movement, dt);
        self.speed.push(moved / dt);
        self.update_house_hint();

        self.character.regenerate(dt);
        self.house.regenerate(dt);

        self.update_shooting(dt, &mut report);
        self.update_bullets(dt, &mut report);
        self.update_zombies(dt, &mut report);
        self.collect_drops(&mut report);
        self.update_day(dt, &mut report);

        self.dps.tick(dt);
        self.sps.tick(dt);
        self.hint.tick(dt);
        report
    }

    fn update_shooting(&mut self, dt: f32, report: &mut TickReport) {
        self.fire.tick(dt);
        if !self.input.fire_held {
            return;
        }
        let shot = combat::try_fire(
            &mut self.fire,
            &self.character,
            &mut self.materials,
            self.input.aim,
            self.zoom,
            &self.config.bullet,
            &mut self.rng,
        );
        match shot {
            Shot::Fired(bullet) => {
                log::debug!("shot fired toward {:?} ({} ammo left)", self.input.aim, self.materials.ammo);
                self.bullets.push(bullet);
                self.sps.record(1.0);
                report.shots += 1;
            }
            Shot::DryFire => log::trace!("trigger pulled with no ammo"),
            Shot::NotReady | Shot::NoDirection => {}
        }
    }

    fn update_bullets(&mut self, dt: f32, report: &mut TickReport) {
        let (width, height) = (self.config.screen_width, self.config.screen_height);
        for bullet in self.bullets.iter_mut() {
            bullet.update(dt);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen(width, height));

        let hits = combat::resolve_bullet_hits(&mut self.bullets, &mut self.zombies, self.character.damage_bonus);
        self.dps.record(hits.damage);
        if hits.kills > 0 {
            let reward = self.config.progression.kill_reward.saturating_mul(hits.kills);
            self.wallet.earn(reward);
            log::debug!("{} zombie(s) killed, +{} money", hits.kills, reward);
        }
        report.hits += hits.hits;
        report.kills += hits.kills;
    }

    fn update_zombies(&mut self, dt: f32, report: &mut TickReport) {
        let house_center = self.house.center();
        let strikes: Vec<MeleeStrike> = self
            .zombies
            .iter_mut()
            .filter_map(|zombie| zombie.update(dt, &self.character, house_center, &self.config.zombie))
            .collect();

        for strike in strikes {
            match strike {
                MeleeStrike::Character(damage) => {
                    let result = self.character.take_damage(damage);
                    report.character_damage += result.damage_dealt;
                    if result.is_fatal && result.damage_dealt > 0.0 {
                        log::info!("the character has fallen");
                    }
                }
                MeleeStrike::House(damage) => {
                    let result = self.house.take_damage(damage);
                    report.house_damage += result.damage_dealt;
                    if result.is_fatal && result.damage_dealt > 0.0 {
                        log::info!("the house has been reduced to rubble");
                    }
                }
            }
        }
    }

    fn collect_drops(&mut self, report: &mut TickReport) {
        if self.character.in_house() {
            return;
        }
        let bounds = self.character.get_bounds();
        let (picked, remaining): (Vec<ResourceDrop>, Vec<ResourceDrop>) = std::mem::take(&mut self.drops)
            .into_iter()
            .partition(|drop| aabb_intersect(&bounds, &drop.get_bounds()));
        self.drops = remaining;

        for drop in picked {
            let amount = self.loot.roll(drop.kind, &mut self.rng);
            self.materials.add(drop.kind, amount);
            log::debug!("picked up {} {}", amount, drop.kind);
            report.pickups += 1;
        }
    }

    fn update_day(&mut self, dt: f32, report: &mut TickReport) {
        if self.zombies.is_empty() && self.day.begin_countdown() {
            log::info!(
                "day {} cleared; next wave in {}s",
                self.day.day(),
                self.config.progression.countdown_secs
            );
            report.day_cleared = true;
        }
        if self.day.tick(dt) {
            self.advance_day();
            report.day_advanced = true;
        }
    }

    fn update_house_hint(&mut self) {
        if self.character.in_house() {
            return;
        }
        let near = self
            .house
            .within_entry_radius(self.character.position, self.config.character.house_entry_radius);
        if near && !self.near_house {
            self.hint.show(HintKind::Enter);
        } else if !near && self.near_house {
            self.hint.hide();
        }
        self.near_house = near;
    }

    fn advance_day(&mut self) {
        let day = self.day.advance();
        self.spawn_wave();
        let (min, max) = (self.config.drops.min_per_day, self.config.drops.max_per_day);
        let count = self.rng.random_range(min..=max.max(min));
        self.spawn_drops(count);
        log::info!("day {} begins: {} zombies, {} new drops", day, self.zombies.len(), count);
    }

    fn spawn_wave(&mut self) {
        let count = day::wave_size(self.config.progression.wave_base, self.day.day());
        let screen = self.screen_size();
        for _ in 0..count {
            let zombie = Zombie::spawn(&self.config.zombie, screen, &mut self.rng);
            self.zombies.push(zombie);
        }
    }

    fn spawn_drops(&mut self, count: u32) {
        let screen = self.screen_size();
        for _ in 0..count {
            let kind = ResourceKind::random(&mut self.rng);
            let drop = ResourceDrop::scatter(kind, screen, self.config.drops.size, &mut self.rng);
            self.drops.push(drop);
        }
    }

    /// Pushes the stat table total for `kind` into the entity that owns it
    fn push_stat(&mut self, kind: StatKind) {
        let total = self.stats.total(kind);
        match kind {
            StatKind::BuildingRegen => self.house.building_regen = total.max(0.0),
            StatKind::Speed
            | StatKind::Health
            | StatKind::Accuracy
            | StatKind::FireRate
            | StatKind::Damage
            | StatKind::HealthRegen => {
                self.character.apply_stat(kind, total);
            }
        }
    }

    /// Buys one upgrade level of `stat`
    pub fn purchase_upgrade(&mut self, stat: StatKind) -> Result<Purchase, ShopError> {
        let purchase = self.shop.upgrade(stat, &mut self.wallet, &mut self.stats)?;
        self.push_stat(stat);
        log::info!(
            "upgraded {} to {:.2} for {} (next: {}, money left: {})",
            stat,
            purchase.new_total,
            purchase.price_paid,
            purchase.next_price,
            self.wallet.balance()
        );
        Ok(purchase)
    }

    /// Restores the house to full health for scrap; returns the scrap spent
    pub fn repair_house(&mut self) -> Result<u32, ShopError> {
        let cost = self.shop.repair(&mut self.house, &mut self.materials)?;
        log::info!("house repaired for {} scrap ({} left)", cost, self.materials.scrap);
        Ok(cost)
    }

    /// Starts the next day early; only possible once the wave is cleared
    pub fn confirm_next_day(&mut self) -> bool {
        if !self.day.is_countdown_active() {
            return false;
        }
        self.advance_day();
        true
    }

    /// Enters or leaves the house
    ///
    /// Leaving always works. Entering needs the character within the entry
    /// radius of the house center. Returns whether occupancy changed.
    pub fn toggle_house(&mut self) -> bool {
        if self.character.in_house() {
            self.character.toggle_in_house();
            // Stepping out lands next to the door; the enter prompt waits until
            // the character has walked away and come back
            self.near_house = true;
            self.hint.hide();
            log::debug!("left the house");
            return true;
        }
        let radius = self.config.character.house_entry_radius;
        if !self.house.within_entry_radius(self.character.position, radius) {
            return false;
        }
        self.character.toggle_in_house();
        self.hint.show(HintKind::Exit);
        log::debug!("entered the house");
        true
    }

    /// Moves the zoom level by `steps` increments, never below the minimum
    pub fn adjust_zoom(&mut self, steps: i32) -> f32 {
        let zoom = self.zoom + steps as f32 * self.config.zoom.step;
        self.zoom = zoom.max(self.config.zoom.min);
        self.zoom
    }

    /// Drops an extra zombie at `position`
    pub fn spawn_zombie_at(&mut self, position: Vec2) {
        log::debug!("spawned zombie at {:?}", position);
        self.zombies.push(Zombie::new(position, &self.config.zombie));
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            day: self.day.day(),
            countdown: self.day.countdown_display(),
            money: self.wallet.balance(),
            food: self.materials.food,
            ammo: self.materials.ammo,
            scrap: self.materials.scrap,
            zombies_remaining: self.zombies.len(),
            character_health: self.character.health.fraction(),
            house_health: self.house.health.fraction(),
            house_destroyed: self.house.is_destroyed(),
            in_house: self.character.in_house(),
            dps: self.dps.rate(),
            sps: self.sps.rate(),
            player_speed: self.speed.average(),
            zoom: self.zoom,
            hint: self
                .hint
                .is_visible()
                .then(|| (self.hint.kind(), self.hint.alpha())),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.config.screen_width, self.config.screen_height)
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn zombies(&self) -> &[Zombie] {
        &self.zombies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn drops(&self) -> &[ResourceDrop] {
        &self.drops
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    pub fn money(&self) -> u32 {
        self.wallet.balance()
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn day(&self) -> &DayCounter {
        &self.day
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Mutable handles for scenario setup in tests
    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> WorldParts<'_> {
        WorldParts {
            character: &mut self.character,
            house: &mut self.house,
            zombies: &mut self.zombies,
            drops: &mut self.drops,
            materials: &mut self.materials,
            wallet: &mut self.wallet,
        }
    }
}

#[cfg(test)]
pub(crate) struct WorldParts<'a> {
    pub character: &'a mut Character,
    pub house: &'a mut House,
    pub zombies: &'a mut Vec<Zombie>,
    pub drops: &'a mut Vec<ResourceDrop>,
    pub materials: &'a mut Materials,
    pub wallet: &'a mut Wallet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::MoveIntent;
    use crate::team::{Family, Role};

    const DT: f32 = 1.0 / 60.0;

    fn team(roles: [Role; 2]) -> Team {
        Team::new(Family::Wellingtons, roles.to_vec())
    }

    fn world() -> GameWorld {
        GameWorld::with_seed(GameConfig::default(), team([Role::Medic, Role::Engineer]), 7)
    }

    fn run(world: &mut GameWorld, seconds: f32) -> TickReport {
        let mut total = TickReport::default();
        let ticks = (seconds / DT).round() as u32;
        for _ in 0..ticks {
            let r = world.tick(DT);
            total.shots += r.shots;
            total.hits += r.hits;
            total.kills += r.kills;
            total.pickups += r.pickups;
            total.day_cleared |= r.day_cleared;
            total.day_advanced |= r.day_advanced;
        }
        total
    }

    #[test]
    fn test_starts_on_day_one() {
        let w = world();
        assert_eq!(w.day().day(), 1);
        assert_eq!(w.zombies().len(), 5);
        assert_eq!(w.drops().len(), 5);
        assert_eq!(w.money(), 0);
        assert_eq!(w.materials().ammo, 0);
        assert!(w.character().in_house());
        assert!(!w.character().is_visible());
        assert!(w.hud().hint.is_some());
    }

    #[test]
    fn test_team_boosts_reach_entities() {
        let w = GameWorld::with_seed(GameConfig::default(), team([Role::MachineGunner, Role::Engineer]), 1);
        assert_eq!(w.character().damage_bonus, 35.0);
        assert_eq!(w.character().fire_rate, 3.5);
        assert!((w.house().building_regen - 0.05).abs() < 1e-6);
        assert_eq!(w.stats().boost(StatKind::Damage), 10.0);
    }

    #[test]
    fn test_upgrade_cascades_into_character() {
        let mut w = world();
        w.parts_mut().wallet.earn(50);

        let purchase = w.purchase_upgrade(StatKind::Speed).unwrap();
        assert_eq!(w.money(), 0);
        assert_eq!(purchase.next_price, 60);
        assert_eq!(w.shop().price(StatKind::Speed), Some(60));
        assert_eq!(w.character().speed, 87.0);
    }

    #[test]
    fn test_building_regen_upgrade_reaches_house() {
        let mut w = world();
        w.parts_mut().wallet.earn(100);
        w.purchase_upgrade(StatKind::BuildingRegen).unwrap();
        assert!((w.house().building_regen - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_failed_upgrade_changes_nothing() {
        let mut w = world();
        let before = w.character().speed;
        assert!(w.purchase_upgrade(StatKind::Speed).is_err());
        assert_eq!(w.character().speed, before);
        assert_eq!(w.shop().price(StatKind::Speed), Some(50));
    }

    #[test]
    fn test_enter_requires_proximity() {
        let mut w = world();
        assert!(w.toggle_house());
        assert!(!w.character().in_house());

        w.parts_mut().character.position += Vec2::new(200.0, 0.0);
        assert!(!w.toggle_house());
        assert!(!w.character().in_house());

        w.parts_mut().character.position -= Vec2::new(170.0, 0.0);
        assert!(w.toggle_house());
        assert!(w.character().in_house());
    }

    #[test]
    fn test_enter_hint_when_walking_near() {
        let mut w = world();
        w.toggle_house();
        w.parts_mut().character.position += Vec2::new(300.0, 0.0);
        run(&mut w, 5.0);
        assert!(w.hud().hint.is_none());

        w.parts_mut().character.position -= Vec2::new(290.0, 0.0);
        w.tick(DT);
        let (kind, alpha) = w.hud().hint.unwrap();
        assert_eq!(kind, HintKind::Enter);
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn test_movement_updates_speed_meter() {
        let mut w = world();
        w.set_input(PlayerInput {
            movement: MoveIntent {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        });
        run(&mut w, 0.5);
        assert!((w.hud().player_speed - 72.0).abs() < 0.01);
    }

    #[test]
    fn test_shooting_inside_is_free_and_paced() {
        let mut w = world();
        w.parts_mut().zombies.clear();
        w.set_input(PlayerInput {
            fire_held: true,
            aim: Vec2::new(640.0, 0.0),
            ..Default::default()
        });
        let report = run(&mut w, 1.0);
        // 3 shots per second, the first on the first tick
        assert!(report.shots == 3 || report.shots == 4, "shots = {}", report.shots);
        assert_eq!(w.materials().ammo, 0);
    }

    #[test]
    fn test_dry_fire_outside() {
        let mut w = world();
        w.toggle_house();
        w.set_input(PlayerInput {
            fire_held: true,
            aim: Vec2::new(640.0, 0.0),
            ..Default::default()
        });
        let report = run(&mut w, 1.0);
        assert_eq!(report.shots, 0);
        assert!(w.bullets().is_empty());
    }

    #[test]
    fn test_shots_outside_consume_ammo() {
        let mut w = world();
        w.toggle_house();
        w.parts_mut().materials.ammo = 2;
        w.set_input(PlayerInput {
            fire_held: true,
            aim: Vec2::new(640.0, 0.0),
            ..Default::default()
        });
        let report = run(&mut w, 2.0);
        assert_eq!(report.shots, 2);
        assert_eq!(w.materials().ammo, 0);
    }

    #[test]
    fn test_drops_collected_only_outside() {
        let mut w = world();
        let at = w.character().position;
        {
            let parts = w.parts_mut();
            parts.drops.clear();
            parts.drops.push(ResourceDrop::new(at, ResourceKind::Ammo, 30.0));
            parts.zombies.clear();
        }
        w.tick(DT);
        assert_eq!(w.drops().len(), 1);

        w.toggle_house();
        let report = w.tick(DT);
        assert_eq!(report.pickups, 1);
        assert!(w.drops().is_empty());
        let ammo = w.materials().ammo;
        assert!((10..=20).contains(&ammo), "ammo = {}", ammo);
    }

    #[test]
    fn test_kill_pays_reward() {
        let mut w = world();
        let target = Vec2::new(640.0, 200.0);
        {
            let parts = w.parts_mut();
            parts.zombies.clear();
            parts.character.accuracy_offset = 0.0;
        }
        w.spawn_zombie_at(target);
        w.parts_mut().zombies[0].speed = 0.0;
        w.set_input(PlayerInput {
            fire_held: true,
            aim: target + Vec2::new(10.0, 25.0),
            ..Default::default()
        });
        let report = run(&mut w, 3.0);
        assert_eq!(report.kills, 1);
        assert_eq!(w.money(), 10);
        assert!(w.zombies().is_empty());
    }

    #[test]
    fn test_countdown_and_confirm() {
        let mut w = world();
        w.parts_mut().zombies.clear();
        let report = w.tick(DT);
        assert!(report.day_cleared);
        assert!(w.hud().countdown.is_some());

        assert!(w.confirm_next_day());
        assert_eq!(w.day().day(), 2);
        assert_eq!(w.zombies().len(), 10);
        assert!(w.hud().countdown.is_none());
        assert!(!w.confirm_next_day());
    }

    #[test]
    fn test_next_day_spawns_drops() {
        let mut w = world();
        w.parts_mut().zombies.clear();
        w.parts_mut().drops.clear();
        w.tick(DT);
        w.confirm_next_day();
        let n = w.drops().len();
        assert!((3..=7).contains(&n), "drops = {}", n);
    }

    #[test]
    fn test_zombie_melee_damages_character() {
        let mut w = world();
        w.toggle_house();
        let at = w.character().position;
        w.parts_mut().zombies.clear();
        w.spawn_zombie_at(at + Vec2::new(5.0, 0.0));
        w.parts_mut().zombies[0].speed = 0.0;

        run(&mut w, 1.1);
        // One strike, then a little medic regeneration
        let health = w.character().health.current();
        assert!((95.0..95.05).contains(&health), "health = {}", health);
    }

    #[test]
    fn test_house_damage_and_repair() {
        let mut w = world();
        let center = w.house().center();
        w.parts_mut().zombies.clear();
        w.spawn_zombie_at(center);
        run(&mut w, 2.05);
        let missing = w.house().missing_health();
        assert!(missing > 0);

        assert!(matches!(w.repair_house(), Err(ShopError::InsufficientScrap { .. })));
        w.parts_mut().materials.scrap = 1000;
        let cost = w.repair_house().unwrap();
        assert_eq!(cost, missing * 5);
        assert_eq!(w.materials().scrap, 1000 - cost);
        assert_eq!(w.house().missing_health(), 0);
    }

    #[test]
    fn test_countdown_expiry_starts_next_wave() {
        let mut w = world();
        w.parts_mut().zombies.clear();
        let early = run(&mut w, 89.0);
        assert!(early.day_cleared);
        assert!(!early.day_advanced);
        assert_eq!(w.day().day(), 1);

        let late = run(&mut w, 1.5);
        assert!(late.day_advanced);
        assert_eq!(w.day().day(), 2);
        assert_eq!(w.zombies().len(), 10);
        assert!(!w.day().is_countdown_active());
    }

    #[test]
    fn test_zoom_clamped() {
        let mut w = world();
        assert!((w.adjust_zoom(1) - 1.1).abs() < 1e-5);
        assert!((w.adjust_zoom(-50) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_is_ignored() {
        let mut w = world();
        let before = w.zombies()[0].position;
        w.tick(0.0);
        w.tick(f32::NAN);
        assert_eq!(w.zombies()[0].position, before);
    }
}
