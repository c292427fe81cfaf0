//! Joyride Kinematics
//!
//! Kinematic movement for the demo's two controllable entities:
//!
//! - **Walk**: planar, camera-relative avatar movement
//! - **Drive**: a kinematic bicycle-style vehicle model
//!
//! There is no rigid-body physics and no collision response; both entities
//! are pinned to a flat ground plane after every update. All updates are
//! pure state transformations driven by a per-frame command and a time step,
//! so they can be unit tested without a rendering context.

pub mod config;
pub mod drive;
pub mod walk;

// Re-export commonly used types
pub use config::{DriveConfig, WalkConfig};
pub use drive::{DriveCommand, DriveController, DriveState};
pub use walk::{WalkCommand, WalkState, Walker};
