// Whole-game scenarios driven through the public API only

use fortress::character::MoveIntent;
use fortress::stats::StatKind;
use fortress::{Family, GameConfig, GameWorld, PlayerInput, Role, SetupFlow, ShopError, TickReport};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

fn team() -> fortress::Team {
    let mut flow = SetupFlow::new();
    flow.start();
    flow.continue_intro();
    flow.choose_family(Family::Harpers);
    flow.toggle_role(Role::Sniper).unwrap();
    flow.toggle_role(Role::Medic).unwrap();
    flow.confirm_team().unwrap()
}

/// No zombies of its own, so each scenario places exactly what it needs
fn quiet_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.progression.wave_base = 0;
    config
}

fn run_until(world: &mut GameWorld, max_seconds: f32, mut done: impl FnMut(&TickReport, &GameWorld) -> bool) -> bool {
    let ticks = (max_seconds / DT).ceil() as u32;
    for _ in 0..ticks {
        let report = world.tick(DT);
        if done(&report, world) {
            return true;
        }
    }
    false
}

#[test]
fn countdown_runs_ninety_seconds_then_advances() {
    let mut world = GameWorld::with_seed(quiet_config(), team(), 3);
    let report = world.tick(DT);
    assert!(report.day_cleared);
    assert!(world.hud().countdown.is_some());

    assert!(!run_until(&mut world, 89.0, |r, _| r.day_advanced));
    assert_eq!(world.day().day(), 1);

    assert!(run_until(&mut world, 2.0, |r, _| r.day_advanced));
    assert_eq!(world.day().day(), 2);
}

#[test]
fn four_hits_kill_a_zombie_and_pay_out() {
    let mut config = quiet_config();
    config.zombie.speed = 0.0;
    config.character.accuracy_offset = 0.0;
    let mut world = GameWorld::with_seed(config, team(), 11);

    // Sniper accuracy shifts the shot by (5, 5); aim compensates
    let target = Vec2::new(640.0, 180.0);
    world.spawn_zombie_at(target);
    world.set_input(PlayerInput {
        fire_held: true,
        aim: target + Vec2::new(5.0, 20.0),
        ..Default::default()
    });

    assert!(run_until(&mut world, 2.0, |r, _| r.hits > 0));
    assert_eq!(world.zombies()[0].health.current(), 75.0);
    assert_eq!(world.money(), 0);

    assert!(run_until(&mut world, 5.0, |r, _| r.kills > 0));
    assert!(world.zombies().is_empty());
    assert_eq!(world.money(), 10);
    // Shooting from inside the house is free
    assert_eq!(world.materials().ammo, 0);
}

#[test]
fn one_bullet_damages_a_stack_of_zombies() {
    let mut config = quiet_config();
    config.zombie.speed = 0.0;
    config.character.accuracy_offset = 0.0;
    let mut world = GameWorld::with_seed(config, team(), 11);

    let target = Vec2::new(640.0, 180.0);
    world.spawn_zombie_at(target);
    world.spawn_zombie_at(target);
    world.set_input(PlayerInput {
        fire_held: true,
        aim: target + Vec2::new(5.0, 20.0),
        ..Default::default()
    });

    let mut hits = 0;
    assert!(run_until(&mut world, 2.0, |r, _| {
        hits = r.hits;
        r.hits > 0
    }));
    assert_eq!(hits, 2);
    assert_eq!(world.zombies().len(), 2);
    for zombie in world.zombies() {
        assert_eq!(zombie.health.current(), 75.0);
    }
}

#[test]
fn speed_upgrade_spends_money_and_raises_price() {
    let mut config = quiet_config();
    config.economy.starting_money = 50;
    let mut world = GameWorld::with_seed(config, team(), 5);

    let purchase = world.purchase_upgrade(StatKind::Speed).unwrap();
    assert_eq!(purchase.price_paid, 50);
    assert_eq!(purchase.next_price, 60);
    assert_eq!(world.money(), 0);
    assert_eq!(world.character().speed, 87.0);

    assert_eq!(
        world.purchase_upgrade(StatKind::Speed),
        Err(ShopError::InsufficientMoney { price: 60, available: 0 })
    );
    assert_eq!(
        world.purchase_upgrade(StatKind::Health),
        Err(ShopError::NotForSale(StatKind::Health))
    );
}

#[test]
fn repair_needs_damage_and_scrap() {
    let mut config = quiet_config();
    config.zombie.speed = 0.0;
    let mut world = GameWorld::with_seed(config, team(), 9);
    assert_eq!(world.repair_house(), Err(ShopError::NothingToRepair));

    let center = world.house().center();
    world.spawn_zombie_at(center);
    assert!(run_until(&mut world, 1.5, |r, _| r.house_damage > 0.0));
    assert_eq!(world.house().missing_health(), 5);
    assert_eq!(
        world.repair_house(),
        Err(ShopError::InsufficientScrap { cost: 25, available: 0 })
    );
}

#[test]
fn house_entry_depends_on_distance() {
    let mut world = GameWorld::with_seed(quiet_config(), team(), 1);
    assert!(world.character().in_house());
    assert!(world.toggle_house());
    assert!(world.character().is_visible());

    let walk = |right: bool| PlayerInput {
        movement: MoveIntent {
            right,
            left: !right,
            ..Default::default()
        },
        ..Default::default()
    };

    world.set_input(walk(true));
    run_until(&mut world, 1.0, |_, _| false);
    world.set_input(PlayerInput::default());
    assert!(!world.toggle_house());
    assert!(!world.character().in_house());

    world.set_input(walk(false));
    run_until(&mut world, 1.0, |_, _| false);
    world.set_input(PlayerInput::default());
    assert!(world.toggle_house());
    assert!(world.character().in_house());
}

#[test]
fn next_day_only_after_clearing_the_wave() {
    let mut world = GameWorld::with_seed(GameConfig::default(), team(), 2);
    assert_eq!(world.zombies().len(), 5);
    world.tick(DT);
    assert!(!world.confirm_next_day());
    assert_eq!(world.day().day(), 1);

    let mut quiet = GameWorld::with_seed(quiet_config(), team(), 2);
    quiet.tick(DT);
    assert!(quiet.confirm_next_day());
    assert_eq!(quiet.day().day(), 2);
    assert!(quiet.hud().countdown.is_none());
}

#[test]
fn hud_reflects_starting_state() {
    let world = GameWorld::with_seed(GameConfig::default(), team(), 4);
    let hud = world.hud();
    assert_eq!(hud.day, 1);
    assert_eq!(hud.zombies_remaining, 5);
    assert_eq!(hud.character_health, 1.0);
    assert_eq!(hud.house_health, 1.0);
    assert!(hud.in_house);
    assert!(!hud.house_destroyed);
    assert_eq!(hud.zoom, 1.0);
}
