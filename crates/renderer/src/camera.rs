//! Third-person follow camera.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Follow camera state.
///
/// Each frame the camera computes a desired position from a fixed offset in
/// the followed entity's local frame and eases toward it, looking at a point
/// slightly above the entity. Only `position` persists between frames; the
/// look target is derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowCamera {
    /// Current eye position in world space.
    pub position: Vec3,

    /// Desired offset in the target's local frame:
    /// x along the facing direction (negative = behind), y up, z right.
    pub offset: Vec3,

    /// Interpolation factor toward the desired position, per frame.
    /// Frame-rate-dependent, not time-normalized.
    pub smoothing: f32,

    /// How far above the target position the camera looks (meters).
    pub look_height: f32,

    /// Field of view in degrees.
    pub fov: f32,

    /// Near clipping plane.
    pub near: f32,

    /// Far clipping plane.
    pub far: f32,

    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 6.0, -10.0),
            offset: Vec3::new(-8.0, 4.0, 0.0),
            smoothing: 0.12,
            look_height: 1.5,
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl FollowCamera {
    /// Create a camera at the given starting position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// The position the camera wants to occupy for the given target.
    pub fn desired_position(&self, target: Vec3, target_yaw: f32) -> Vec3 {
        let (sin_yaw, cos_yaw) = target_yaw.sin_cos();
        let forward = Vec3::new(cos_yaw, 0.0, sin_yaw);
        let right = Vec3::new(-sin_yaw, 0.0, cos_yaw);

        target + forward * self.offset.x + Vec3::Y * self.offset.y + right * self.offset.z
    }

    /// Ease toward the desired position for one frame.
    pub fn update(&mut self, target: Vec3, target_yaw: f32) {
        let desired = self.desired_position(target, target_yaw);
        self.position = self.position.lerp(desired, self.smoothing);
    }

    /// Jump straight to the desired position, skipping the easing.
    pub fn snap_to(&mut self, target: Vec3, target_yaw: f32) {
        self.position = self.desired_position(target, target_yaw);
    }

    /// The point the camera looks at for the given target.
    pub fn look_target(&self, target: Vec3) -> Vec3 {
        target + Vec3::new(0.0, self.look_height, 0.0)
    }

    /// Yaw of the camera's flattened view direction toward the target.
    ///
    /// Avatar movement keys are interpreted relative to this.
    pub fn yaw_toward(&self, target: Vec3) -> f32 {
        let dir = self.look_target(target) - self.position;
        dir.z.atan2(dir.x)
    }

    /// Get the view matrix for rendering.
    pub fn view_matrix(&self, target: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target(target), Vec3::Y)
    }

    /// Get the projection matrix for rendering.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self, target: Vec3) -> Mat4 {
        self.projection_matrix() * self.view_matrix(target)
    }
}
