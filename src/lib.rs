//! Fortress of the Undead
//!
//! A top-down survival game: a hired security team guards a family's house
//! from waves of zombies, scavenges the drops scattered around the yard and
//! spends kill money on upgrades between waves.
//!
//! This library is the headless simulation. It has no windowing or drawing
//! code; the `fortress` binary (feature `render`) wraps it in an SDL2 window.
//!
//! Entry points:
//! - `team::SetupFlow` walks the menu, intro, family and team screens
//! - `game::GameWorld` runs the game once a `Team` is chosen
//! - `config::GameConfig` holds every tuning value

pub mod bullet;
pub mod character;
pub mod collision;
pub mod combat;
pub mod config;
pub mod day;
pub mod drops;
pub mod economy;
pub mod error;
pub mod game;
pub mod house;
pub mod logging;
pub mod metrics;
pub mod stats;
pub mod team;
pub mod zombie;

pub use config::GameConfig;
pub use error::{ConfigError, SetupError, ShopError};
pub use game::{GameWorld, HudSnapshot, PlayerInput, SimClock, TickReport};
pub use team::{Family, Role, SetupFlow, Team};
