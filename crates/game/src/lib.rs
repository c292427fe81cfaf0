//! Joyride Game Logic
//!
//! This crate contains the demo's simulation:
//!
//! - Input intent structures built once per frame from raw key events
//! - The player avatar and the enterable vehicle
//! - The simulation state machine (on foot vs. driving) and per-frame tick
//!
//! # Architecture
//!
//! All state lives in [`Simulation`] and advances through a single pure tick,
//! so the whole loop runs headless in tests.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Simulation                          │
//! │  ┌─────────┐    ┌────────────┐    ┌─────────────────────┐  │
//! │  │ Player  │───►│ Kinematics │───►│ Game State          │  │
//! │  │ Input   │    │ (walk /    │    │ (player, vehicle,   │  │
//! │  └─────────┘    │  drive)    │    │  control mode)      │  │
//! │                 └────────────┘    └─────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod input;
pub mod player;
pub mod simulation;
pub mod vehicle;

// Re-export main types
pub use input::PlayerInput;
pub use player::Player;
pub use simulation::{Mode, Simulation, SimulationConfig};
pub use vehicle::Vehicle;

// Re-export kinematics types for convenience
pub use joyride_physics::{
    DriveCommand, DriveConfig, DriveController, DriveState, WalkCommand, WalkConfig, WalkState,
    Walker,
};
