//! Avatar walking.
//!
//! Planar movement relative to the camera: the held movement axes are
//! composed into a world-space direction from the camera's flattened
//! forward/right basis, and the avatar turns to face the way it moves.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::WalkConfig;

/// Movement state for the walking avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkState {
    /// Position in world space.
    pub position: Vec3,

    /// Velocity in world space (meters/second). Zero while idle.
    pub velocity: Vec3,

    /// Facing direction (yaw in radians).
    pub yaw: f32,
}

impl Default for WalkState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

impl WalkState {
    /// Create a new walk state at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Get the facing direction (horizontal only).
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    /// Check if moving (has significant velocity).
    pub fn is_moving(&self) -> bool {
        self.velocity.length_squared() > 0.01
    }
}

/// Walking intent for a single frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WalkCommand {
    /// Forward/backward axis (-1.0 to 1.0), relative to the camera.
    pub forward_move: f32,

    /// Strafe axis (-1.0 to 1.0), positive = camera right.
    pub right_move: f32,

    /// Yaw of the camera the axes are relative to (radians).
    pub camera_yaw: f32,
}

impl WalkCommand {
    /// Check if any movement input is active.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.forward_move.abs() > 0.01 || self.right_move.abs() > 0.01
    }

    /// Resolve the intent into a normalized world-space direction.
    ///
    /// Returns `None` when no movement is requested.
    pub fn move_direction(&self) -> Option<Vec3> {
        if !self.has_movement() {
            return None;
        }

        let (sin_yaw, cos_yaw) = self.camera_yaw.sin_cos();
        let forward = Vec3::new(cos_yaw, 0.0, sin_yaw);
        let right = Vec3::new(-sin_yaw, 0.0, cos_yaw);

        Some((forward * self.forward_move + right * self.right_move).normalize())
    }
}

/// Avatar walking integrator.
#[derive(Debug, Clone)]
pub struct Walker {
    /// Walking configuration.
    pub config: WalkConfig,
}

impl Walker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Update the avatar for one frame.
    ///
    /// # Arguments
    ///
    /// * `state` - The avatar's walk state (will be modified)
    /// * `command` - The movement intent for this frame
    /// * `delta_time` - Time step in seconds
    pub fn update(&self, state: &mut WalkState, command: &WalkCommand, delta_time: f32) {
        match command.move_direction() {
            Some(direction) => {
                state.position += direction * self.config.speed * delta_time;
                state.yaw = direction.z.atan2(direction.x);
                state.velocity = direction * self.config.speed;
            }
            None => {
                state.velocity = Vec3::ZERO;
            }
        }

        // Keep the avatar on the ground plane
        state.position.y = self.config.ground_height;
    }
}
