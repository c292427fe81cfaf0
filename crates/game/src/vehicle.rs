//! The enterable vehicle.

use glam::Vec3;
use joyride_physics::DriveState;
use serde::{Deserialize, Serialize};

/// The drivable vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Driving kinematics state.
    pub drive: DriveState,
}

impl Vehicle {
    /// Spawn position, a short walk from the player spawn.
    pub const SPAWN_POSITION: Vec3 = Vec3::new(6.0, 0.5, 0.0);

    /// Create a vehicle at the spawn position.
    pub fn new() -> Self {
        Self {
            drive: DriveState::new(Self::SPAWN_POSITION),
        }
    }

    /// Get the vehicle's current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.drive.position
    }

    /// Get the vehicle's heading (yaw in radians).
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.drive.yaw
    }

    /// Get the vehicle's signed speed (meters/second).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.drive.speed
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new()
    }
}
