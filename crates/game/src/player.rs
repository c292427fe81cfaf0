//! The player avatar.

use glam::Vec3;
use joyride_physics::WalkState;
use serde::{Deserialize, Serialize};

/// The on-foot player avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Walking kinematics state.
    pub walk: WalkState,
}

impl Player {
    /// Spawn position (origin, standing on the ground plane).
    pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// Create a player at the spawn position.
    pub fn new() -> Self {
        Self {
            walk: WalkState::new(Self::SPAWN_POSITION),
        }
    }

    /// Get the player's current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.walk.position
    }

    /// Get the player's facing (yaw in radians).
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.walk.yaw
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
