//! Vehicle driving.
//!
//! A kinematic bicycle-style approximation: speed integrates under throttle
//! and brake, decays multiplicatively while coasting, and steering turns the
//! vehicle in proportion to the distance covered this frame, so it is
//! effective at speed and inert when stationary. No wheel forces, no slip.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::DriveConfig;

/// Movement state for the vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveState {
    /// Position in world space.
    pub position: Vec3,

    /// Heading (yaw in radians).
    pub yaw: f32,

    /// Signed speed along the heading (meters/second, negative = reverse).
    pub speed: f32,
}

impl Default for DriveState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            speed: 0.0,
        }
    }
}

impl DriveState {
    /// Create a new drive state at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Get the heading direction (horizontal only).
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw)
    }

    /// Check if moving (has significant speed).
    pub fn is_moving(&self) -> bool {
        self.speed.abs() > 0.01
    }
}

/// Driving intent for a single frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DriveCommand {
    /// Accelerate along the heading.
    pub throttle: bool,

    /// Brake, then reverse.
    pub brake: bool,

    /// Steering axis (-1.0 to 1.0), positive = right.
    pub steer: f32,
}

/// Vehicle driving integrator.
#[derive(Debug, Clone)]
pub struct DriveController {
    /// Driving configuration.
    pub config: DriveConfig,
}

impl DriveController {
    /// Create a new drive controller with the given configuration.
    pub fn new(config: DriveConfig) -> Self {
        Self { config }
    }

    /// Update the vehicle for one frame.
    ///
    /// # Arguments
    ///
    /// * `state` - The vehicle's drive state (will be modified)
    /// * `command` - The driving intent for this frame
    /// * `delta_time` - Time step in seconds
    pub fn update(&self, state: &mut DriveState, command: &DriveCommand, delta_time: f32) {
        if command.throttle {
            state.speed += self.config.acceleration * delta_time;
        } else if command.brake {
            state.speed -= self.config.brake_deceleration * delta_time;
        } else {
            state.speed *= self.config.coast_friction;
        }

        state.speed = state
            .speed
            .clamp(-self.config.max_speed, self.config.max_speed);

        // Steering scales with the distance covered this frame; a
        // stationary vehicle does not turn
        let distance = state.speed * delta_time;
        state.yaw += command.steer * self.config.steer_rate * (distance / 2.0);

        state.position += state.forward() * distance;

        // Keep the vehicle on the ground plane
        state.position.y = self.config.ground_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn controller() -> DriveController {
        DriveController::new(DriveConfig::default())
    }

    fn spawn() -> DriveState {
        DriveState::new(Vec3::new(6.0, 0.5, 0.0))
    }

    #[test]
    fn test_throttle_accelerates_forward() {
        let controller = controller();
        let mut state = spawn();

        let command = DriveCommand {
            throttle: true,
            ..Default::default()
        };
        controller.update(&mut state, &command, DT);

        assert!(state.speed > 0.0);
        // Heading is +X at yaw 0
        assert!(state.position.x > 6.0);
        assert!(state.position.z.abs() < 1e-5);
    }

    #[test]
    fn test_brake_reverses() {
        let controller = controller();
        let mut state = spawn();

        let command = DriveCommand {
            brake: true,
            ..Default::default()
        };
        for _ in 0..30 {
            controller.update(&mut state, &command, DT);
        }

        assert!(state.speed < 0.0);
        assert!(state.position.x < 6.0);
    }

    #[test]
    fn test_speed_clamped_to_max() {
        let controller = controller();
        let mut state = spawn();

        let command = DriveCommand {
            throttle: true,
            ..Default::default()
        };
        for _ in 0..600 {
            controller.update(&mut state, &command, DT);
        }
        assert!(state.speed <= controller.config.max_speed);

        let command = DriveCommand {
            brake: true,
            ..Default::default()
        };
        for _ in 0..600 {
            controller.update(&mut state, &command, DT);
        }
        assert!(state.speed >= -controller.config.max_speed);
    }

    #[test]
    fn test_coasting_decays_speed() {
        let controller = controller();
        let mut state = spawn();
        state.speed = 10.0;

        controller.update(&mut state, &DriveCommand::default(), DT);
        assert!((state.speed - 10.0 * controller.config.coast_friction).abs() < 1e-4);

        for _ in 0..600 {
            controller.update(&mut state, &DriveCommand::default(), DT);
        }
        assert!(state.speed.abs() < 0.1);
    }

    #[test]
    fn test_stationary_steering_is_inert() {
        let controller = controller();
        let mut state = spawn();

        let command = DriveCommand {
            steer: 1.0,
            ..Default::default()
        };
        controller.update(&mut state, &command, DT);

        assert_eq!(state.yaw, 0.0);
        assert_eq!(state.position.x, 6.0);
    }

    #[test]
    fn test_steering_scales_with_distance() {
        let controller = controller();

        let mut slow = spawn();
        slow.speed = 5.0;
        let command = DriveCommand {
            steer: 1.0,
            ..Default::default()
        };
        controller.update(&mut slow, &command, DT);

        let mut fast = spawn();
        fast.speed = 15.0;
        controller.update(&mut fast, &command, DT);

        assert!(slow.yaw > 0.0);
        assert!(fast.yaw > slow.yaw);
    }

    #[test]
    fn test_idle_from_rest_is_a_no_op() {
        let controller = controller();
        let mut state = spawn();

        controller.update(&mut state, &DriveCommand::default(), DT);

        assert_eq!(state.speed, 0.0);
        assert_eq!(state.position, Vec3::new(6.0, 0.5, 0.0));
        assert_eq!(state.yaw, 0.0);
    }

    #[test]
    fn test_pinned_to_ground() {
        let controller = controller();
        let mut state = DriveState::new(Vec3::new(6.0, 3.0, 0.0));

        controller.update(&mut state, &DriveCommand::default(), DT);

        assert_eq!(state.position.y, controller.config.ground_height);
    }
}
