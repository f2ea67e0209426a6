//! Screen-Space GUI System
//!
//! UI elements drawn at fixed screen positions, on top of the world.
//!
//! # Available Components
//!
//! - [`Menu`] - Centered list menu (main menu, intro, family and team screens)
//! - [`ShopPanel`] - Upgrades and repairs
//! - [`hud`] - Counters, meters, prompt and bottom health bar
//! - [`stat_window`] - Stat table overlay

pub mod hud;
pub mod menu;
pub mod shop_panel;
pub mod stat_window;

pub use menu::{Menu, MenuItem};
pub use shop_panel::{ShopCommand, ShopPanel};
