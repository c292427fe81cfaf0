//! Movement configuration constants.
//!
//! All tunable movement parameters are grouped here. Values use metric
//! units (meters, seconds) unless otherwise noted.

use serde::{Deserialize, Serialize};

/// Configuration for avatar walking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Walking speed (meters/second).
    pub speed: f32,

    /// Height the avatar's origin is pinned to (meters).
    pub ground_height: f32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            speed: 6.0,
            ground_height: 1.0,
        }
    }
}

/// Configuration for vehicle driving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Maximum speed, forward or reverse (meters/second).
    pub max_speed: f32,

    /// Throttle acceleration (meters/second²).
    pub acceleration: f32,

    /// Brake/reverse deceleration (meters/second²).
    pub brake_deceleration: f32,

    /// Steering rate (radians of yaw per meter traveled, halved in the
    /// bicycle approximation).
    pub steer_rate: f32,

    /// Multiplicative speed retention per frame while coasting.
    /// Frame-rate-dependent, not time-scaled.
    pub coast_friction: f32,

    /// Height the vehicle's origin is pinned to (meters).
    pub ground_height: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            max_speed: 20.0,
            acceleration: 30.0,
            brake_deceleration: 40.0,
            steer_rate: 1.5,
            coast_friction: 0.98,
            ground_height: 0.5,
        }
    }
}

impl DriveConfig {
    /// A heavier vehicle: slower to accelerate, harder to turn.
    pub fn heavy() -> Self {
        Self {
            max_speed: 14.0,
            acceleration: 18.0,
            brake_deceleration: 30.0,
            steer_rate: 1.0,
            coast_friction: 0.97,
            ..Default::default()
        }
    }
}
