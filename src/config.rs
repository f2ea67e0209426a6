//! Tuning values for the whole game
//!
//! Every constant the simulation uses lives in `GameConfig`. The defaults are
//! the shipped balance; a JSON file can override any subset of fields:
//!
//! ```json
//! {
//!   "zombie": { "speed": 80.0 },
//!   "progression": { "wave_base": 3 }
//! }
//! ```
//!
//! Lookup order in `GameConfig::discover`:
//! 1. an explicit path (the `--config` flag)
//! 2. the `FORTRESS_CONFIG` environment variable
//! 3. `<config_dir>/fortress/config.json`
//! 4. built-in defaults
//!
//! Whatever is loaded goes through `sanitized()` so the simulation never sees
//! a zero interval or an inverted range.

use crate::error::ConfigError;
use crate::stats::StatKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "FORTRESS_CONFIG";

/// Widest `max - min` a drop quantity range may span
pub const MAX_QUANTITY_SPAN: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub character: CharacterConfig,
    pub zombie: ZombieConfig,
    pub bullet: BulletConfig,
    pub house: HouseConfig,
    pub drops: DropConfig,
    pub progression: ProgressionConfig,
    pub economy: EconomyConfig,
    pub base_stats: BaseStats,
    pub zoom: ZoomConfig,
    pub metrics: MetricsConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 1280.0,
            screen_height: 720.0,
            tick_rate: 60,
            character: CharacterConfig::default(),
            zombie: ZombieConfig::default(),
            bullet: BulletConfig::default(),
            house: HouseConfig::default(),
            drops: DropConfig::default(),
            progression: ProgressionConfig::default(),
            economy: EconomyConfig::default(),
            base_stats: BaseStats::default(),
            zoom: ZoomConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub width: f32,
    pub height: f32,
    /// Half-width of the uniform aim jitter
    pub accuracy_offset: f32,
    /// Max distance from the house center at which the character may enter
    pub house_entry_radius: f32,
    /// Seconds the house hint stays on screen
    pub hint_duration: f32,
    /// Trailing seconds of `hint_duration` spent fading out
    pub hint_fade: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        CharacterConfig {
            width: 20.0,
            height: 40.0,
            accuracy_offset: 10.0,
            house_entry_radius: 50.0,
            hint_duration: 4.0,
            hint_fade: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieConfig {
    pub width: f32,
    pub height: f32,
    pub max_health: f32,
    /// Units per second
    pub speed: f32,
    /// Distance under which a zombie switches from the house to the character
    pub aggro_range: f32,
    pub melee_range: f32,
    pub melee_damage: f32,
    pub melee_interval: f32,
    pub house_damage: f32,
    pub house_interval: f32,
    /// How far outside the screen edge zombies appear
    pub spawn_buffer: f32,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        ZombieConfig {
            width: 20.0,
            height: 50.0,
            max_health: 100.0,
            speed: 60.0,
            aggro_range: 100.0,
            melee_range: 20.0,
            melee_damage: 5.0,
            melee_interval: 1.0,
            house_damage: 5.0,
            house_interval: 1.0,
            spawn_buffer: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Hit-box width at zoom 1.0
    pub width: f32,
    /// Hit-box height at zoom 1.0
    pub height: f32,
    /// Units per second
    pub speed: f32,
    /// Floor applied to the fire-rate stat before it becomes an interval
    pub min_fire_rate: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        BulletConfig {
            width: 10.0,
            height: 30.0,
            speed: 600.0,
            min_fire_rate: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseConfig {
    pub size: f32,
    pub max_health: f32,
}

impl Default for HouseConfig {
    fn default() -> Self {
        HouseConfig {
            size: 200.0,
            max_health: 100.0,
        }
    }
}

/// Inclusive quantity range for one resource
///
/// A value `v` is rolled with weight `weight_ceiling - v`, so higher values
/// are rarer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceRange {
    pub min: u32,
    pub max: u32,
    pub weight_ceiling: u32,
}

impl ResourceRange {
    pub const fn new(min: u32, max: u32, weight_ceiling: u32) -> Self {
        ResourceRange {
            min,
            max,
            weight_ceiling,
        }
    }

    fn sanitized(self) -> Self {
        let (min, max) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let max = if max - min > MAX_QUANTITY_SPAN {
            log::warn!(
                "drop range {}..={} is wider than {}; capping at {}",
                min,
                max,
                MAX_QUANTITY_SPAN,
                min + MAX_QUANTITY_SPAN
            );
            min + MAX_QUANTITY_SPAN
        } else {
            max
        };
        // Every value in range needs a weight of at least one.
        let weight_ceiling = self.weight_ceiling.max(max.saturating_add(1));
        ResourceRange {
            min,
            max,
            weight_ceiling,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    pub size: f32,
    /// Drops placed when the game starts
    pub initial_count: u32,
    pub min_per_day: u32,
    pub max_per_day: u32,
    pub food: ResourceRange,
    pub ammo: ResourceRange,
    pub scrap: ResourceRange,
}

impl Default for DropConfig {
    fn default() -> Self {
        DropConfig {
            size: 30.0,
            initial_count: 5,
            min_per_day: 3,
            max_per_day: 7,
            food: ResourceRange::new(20, 100, 120),
            ammo: ResourceRange::new(10, 20, 31),
            scrap: ResourceRange::new(70, 100, 101),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Zombies per wave are `wave_base * day`
    pub wave_base: u32,
    /// Seconds between a cleared wave and the automatic next day
    pub countdown_secs: f32,
    /// Money paid per zombie kill
    pub kill_reward: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        ProgressionConfig {
            wave_base: 5,
            countdown_secs: 90.0,
            kill_reward: 10,
        }
    }
}

/// One shop catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOffer {
    pub stat: StatKind,
    pub price: u32,
    pub boost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub starting_money: u32,
    pub starting_ammo: u32,
    pub scrap_per_repair_point: u32,
    pub upgrades: Vec<UpgradeOffer>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        let offer = |stat, price, boost| UpgradeOffer { stat, price, boost };
        EconomyConfig {
            starting_money: 0,
            starting_ammo: 0,
            scrap_per_repair_point: 5,
            upgrades: vec![
                offer(StatKind::Speed, 50, 15.0),
                offer(StatKind::Accuracy, 70, 0.05),
                offer(StatKind::HealthRegen, 80, 0.02),
                offer(StatKind::BuildingRegen, 100, 0.01),
                offer(StatKind::Damage, 90, 5.0),
                offer(StatKind::FireRate, 120, 0.5),
            ],
        }
    }
}

/// Starting value of each stat before any boost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub speed: f32,
    pub health: f32,
    pub accuracy: f32,
    pub fire_rate: f32,
    pub damage: f32,
    pub health_regen: f32,
    pub building_regen: f32,
}

impl Default for BaseStats {
    fn default() -> Self {
        BaseStats {
            speed: 72.0,
            health: 100.0,
            accuracy: 0.0,
            fire_rate: 3.0,
            damage: 25.0,
            health_regen: 0.0,
            building_regen: 0.0,
        }
    }
}

impl BaseStats {
    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Speed => self.speed,
            StatKind::Health => self.health,
            StatKind::Accuracy => self.accuracy,
            StatKind::FireRate => self.fire_rate,
            StatKind::Damage => self.damage,
            StatKind::HealthRegen => self.health_regen,
            StatKind::BuildingRegen => self.building_regen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub initial: f32,
    pub step: f32,
    pub min: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            initial: 1.0,
            step: 0.1,
            min: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Seconds of damage summed into each DPS sample
    pub dps_window: f32,
    /// Seconds of shots counted into each SPS sample
    pub sps_window: f32,
    /// Ticks averaged for the displayed movement speed
    pub speed_samples: usize,
    /// Speeds below this read as zero
    pub speed_floor: f32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig {
            dps_window: 0.25,
            sps_window: 1.0,
            speed_samples: 10,
            speed_floor: 0.1,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds, loads and sanitizes the config, falling back to defaults
    ///
    /// Candidates are tried in order: the explicit path alone if given,
    /// otherwise `FORTRESS_CONFIG` then the user config dir. A file that
    /// exists but cannot be read is logged and skipped rather than aborting
    /// startup.
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self::discover_from(candidate_paths(explicit))
    }

    fn discover_from(paths: Vec<PathBuf>) -> Self {
        for path in paths {
            if !path.exists() {
                log::debug!("no config at {}", path.display());
                continue;
            }
            match GameConfig::load_from_file(&path) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    return config.sanitized();
                }
                Err(e) => log::warn!("{}; trying the next location", e),
            }
        }
        log::debug!("using built-in config");
        GameConfig::default()
    }

    /// Clamps every value into a range the simulation can run with
    pub fn sanitized(mut self) -> Self {
        let defaults = GameConfig::default();

        clamp_positive(&mut self.screen_width, defaults.screen_width, "screen_width");
        clamp_positive(&mut self.screen_height, defaults.screen_height, "screen_height");
        if self.tick_rate == 0 {
            log::warn!("tick_rate must be at least 1; using {}", defaults.tick_rate);
            self.tick_rate = defaults.tick_rate;
        }

        let c = &mut self.character;
        clamp_positive(&mut c.width, defaults.character.width, "character.width");
        clamp_positive(&mut c.height, defaults.character.height, "character.height");
        clamp_non_negative(&mut c.accuracy_offset, "character.accuracy_offset");
        clamp_non_negative(&mut c.house_entry_radius, "character.house_entry_radius");
        clamp_non_negative(&mut c.hint_duration, "character.hint_duration");
        clamp_non_negative(&mut c.hint_fade, "character.hint_fade");
        c.hint_fade = c.hint_fade.min(c.hint_duration);

        let z = &mut self.zombie;
        clamp_positive(&mut z.width, defaults.zombie.width, "zombie.width");
        clamp_positive(&mut z.height, defaults.zombie.height, "zombie.height");
        clamp_positive(&mut z.max_health, defaults.zombie.max_health, "zombie.max_health");
        clamp_non_negative(&mut z.speed, "zombie.speed");
        clamp_non_negative(&mut z.aggro_range, "zombie.aggro_range");
        clamp_non_negative(&mut z.melee_range, "zombie.melee_range");
        clamp_non_negative(&mut z.melee_damage, "zombie.melee_damage");
        clamp_non_negative(&mut z.house_damage, "zombie.house_damage");
        clamp_non_negative(&mut z.spawn_buffer, "zombie.spawn_buffer");
        clamp_positive(&mut z.melee_interval, defaults.zombie.melee_interval, "zombie.melee_interval");
        clamp_positive(&mut z.house_interval, defaults.zombie.house_interval, "zombie.house_interval");

        let b = &mut self.bullet;
        clamp_positive(&mut b.width, defaults.bullet.width, "bullet.width");
        clamp_positive(&mut b.height, defaults.bullet.height, "bullet.height");
        clamp_positive(&mut b.speed, defaults.bullet.speed, "bullet.speed");
        clamp_positive(&mut b.min_fire_rate, defaults.bullet.min_fire_rate, "bullet.min_fire_rate");

        clamp_positive(&mut self.house.size, defaults.house.size, "house.size");
        clamp_positive(&mut self.house.max_health, defaults.house.max_health, "house.max_health");

        let d = &mut self.drops;
        clamp_positive(&mut d.size, defaults.drops.size, "drops.size");
        if d.min_per_day > d.max_per_day {
            log::warn!("drops.min_per_day exceeds max_per_day; swapping");
            std::mem::swap(&mut d.min_per_day, &mut d.max_per_day);
        }
        d.food = d.food.sanitized();
        d.ammo = d.ammo.sanitized();
        d.scrap = d.scrap.sanitized();

        clamp_non_negative(&mut self.progression.countdown_secs, "progression.countdown_secs");

        self.economy.upgrades.retain(|offer| {
            let keep = offer.boost.is_finite();
            if !keep {
                log::warn!("dropping {} upgrade with non-finite boost", offer.stat);
            }
            keep
        });

        let z = &mut self.zoom;
        clamp_positive(&mut z.min, defaults.zoom.min, "zoom.min");
        clamp_positive(&mut z.step, defaults.zoom.step, "zoom.step");
        if !z.initial.is_finite() || z.initial < z.min {
            z.initial = z.min.max(defaults.zoom.initial);
        }

        let m = &mut self.metrics;
        clamp_positive(&mut m.dps_window, defaults.metrics.dps_window, "metrics.dps_window");
        clamp_positive(&mut m.sps_window, defaults.metrics.sps_window, "metrics.sps_window");
        if m.speed_samples == 0 {
            m.speed_samples = 1;
        }
        clamp_non_negative(&mut m.speed_floor, "metrics.speed_floor");

        self
    }

    /// Seconds per simulation tick
    pub fn tick_duration(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    let mut paths = Vec::new();
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(path));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("fortress").join("config.json"));
    }
    paths
}

fn clamp_positive(value: &mut f32, fallback: f32, name: &str) {
    if !value.is_finite() || *value <= 0.0 {
        log::warn!("{} must be positive (got {}); using {}", name, value, fallback);
        *value = fallback;
    }
}

fn clamp_non_negative(value: &mut f32, name: &str) {
    if !value.is_finite() || *value < 0.0 {
        log::warn!("{} must be non-negative (got {}); using 0", name, value);
        *value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fortress-{}-{}", std::process::id(), name));
        fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults_match_shipped_balance() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 1280.0);
        assert_eq!(config.zombie.aggro_range, 100.0);
        assert_eq!(config.progression.countdown_secs, 90.0);
        assert_eq!(config.economy.upgrades.len(), 6);
        assert_eq!(config.base_stats.get(StatKind::Damage), 25.0);
        assert_eq!(config.drops.ammo, ResourceRange::new(10, 20, 31));
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "zombie": { "speed": 80.0 }, "tick_rate": 30 }"#).unwrap();

        assert_eq!(config.zombie.speed, 80.0);
        assert_eq!(config.zombie.max_health, 100.0);
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.house, HouseConfig::default());
    }

    #[test]
    fn test_upgrade_catalogue_from_json() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "economy": { "upgrades": [ { "stat": "Damage", "price": 10, "boost": 1.0 } ] } }"#,
        )
        .unwrap();

        assert_eq!(config.economy.upgrades.len(), 1);
        assert_eq!(config.economy.upgrades[0].stat, StatKind::Damage);
        assert_eq!(config.economy.scrap_per_repair_point, 5);
    }

    #[test]
    fn test_sanitized_clamps_bad_values() {
        let mut config = GameConfig::default();
        config.screen_width = -1.0;
        config.tick_rate = 0;
        config.zombie.melee_interval = 0.0;
        config.zombie.speed = f32::NAN;
        config.zoom.min = 0.0;
        config.drops.min_per_day = 9;
        config.drops.max_per_day = 2;
        config.drops.food = ResourceRange::new(100, 20, 50);
        config.metrics.speed_samples = 0;

        let config = config.sanitized();
        assert_eq!(config.screen_width, 1280.0);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.zombie.melee_interval, 1.0);
        assert_eq!(config.zombie.speed, 0.0);
        assert_eq!(config.zoom.min, 0.1);
        assert_eq!((config.drops.min_per_day, config.drops.max_per_day), (2, 9));
        assert_eq!(config.drops.food, ResourceRange::new(20, 100, 101));
        assert_eq!(config.metrics.speed_samples, 1);
    }

    #[test]
    fn test_sanitized_leaves_defaults_alone() {
        assert_eq!(GameConfig::default().sanitized(), GameConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = GameConfig::load_from_file("/definitely/not/here/fortress.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_bad_json_is_parse_error() {
        let path = temp_file("bad.json", "{ not json");
        let result = GameConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_discover_explicit_path() {
        let path = temp_file("good.json", r#"{ "progression": { "wave_base": 3 } }"#);
        let config = GameConfig::discover(Some(&path));
        assert_eq!(config.progression.wave_base, 3);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_discover_unreadable_falls_back_to_defaults() {
        let path = temp_file("broken.json", "[1, 2");
        let config = GameConfig::discover(Some(&path));
        assert_eq!(config, GameConfig::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_discover_skips_broken_file_for_next_candidate() {
        let broken = temp_file("first-broken.json", "{ \"zombie\": ");
        let good = temp_file("second-good.json", r#"{ "progression": { "wave_base": 7 } }"#);
        let missing = PathBuf::from("/definitely/not/here/fortress.json");

        let config = GameConfig::discover_from(vec![missing, broken.clone(), good.clone()]);
        assert_eq!(config.progression.wave_base, 7);

        let _ = fs::remove_file(broken);
        let _ = fs::remove_file(good);
    }

    #[test]
    fn test_sanitized_caps_quantity_span() {
        let range = ResourceRange::new(5, u32::MAX, 0).sanitized();
        assert_eq!(range.min, 5);
        assert_eq!(range.max, 5 + MAX_QUANTITY_SPAN);
        assert_eq!(range.weight_ceiling, range.max + 1);

        let narrow = ResourceRange::new(10, 20, 31).sanitized();
        assert_eq!(narrow, ResourceRange::new(10, 20, 31));
    }

    #[test]
    fn test_tick_duration() {
        let config = GameConfig::default();
        assert!((config.tick_duration() - 1.0 / 60.0).abs() < 1e-6);
    }
}
