//! World-Space HUD Components
//!
//! UI elements drawn in world coordinates, attached to entities.
//!
//! # Available Components
//!
//! - [`HealthBar`] - Health under zombies and along the bottom of the screen

pub mod health_bar;

pub use health_bar::{HealthBar, HealthBarStyle};
