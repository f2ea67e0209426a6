// Game module - The running simulation and what flows in and out of it
//
// This module contains:
// - world.rs: GameWorld, which owns every entity and runs one tick at a time
// - clock.rs: SimClock, turning frame time into fixed ticks
// - types.rs: PlayerInput, HudSnapshot and TickReport

// Module declarations
pub mod clock;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use clock::SimClock;
pub use types::*;
pub use world::GameWorld;
