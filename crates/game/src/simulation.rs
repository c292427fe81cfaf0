//! The demo simulation - entities, control mode, and the per-frame tick.
//!
//! All mutable state lives here and advances through [`Simulation::tick`],
//! a pure state transformation with no rendering-context dependency.

use glam::Vec3;
use joyride_physics::{DriveConfig, DriveController, WalkConfig, Walker};
use serde::{Deserialize, Serialize};

use crate::input::PlayerInput;
use crate::player::Player;
use crate::vehicle::Vehicle;

/// Which entity currently receives player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// The avatar is controlled and visible.
    OnFoot,
    /// The vehicle is controlled; the avatar is hidden inside it.
    Driving,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on the per-frame time step (seconds). Guards against
    /// integration jumps on frame hitches such as a backgrounded window.
    pub max_delta_time: f32,

    /// How close the avatar must be to enter the vehicle (meters).
    pub interact_radius: f32,

    /// Where the avatar reappears relative to the vehicle on exit.
    pub exit_offset: Vec3,

    /// Avatar kinematics configuration.
    pub walk: WalkConfig,

    /// Vehicle kinematics configuration.
    pub drive: DriveConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_delta_time: 0.05,
            interact_radius: 3.0,
            exit_offset: Vec3::new(2.5, 0.0, 0.0),
            walk: WalkConfig::default(),
            drive: DriveConfig::default(),
        }
    }
}

/// The demo simulation.
///
/// Holds the two entities and the control mode, and advances them one frame
/// at a time from sampled input.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// The player avatar.
    pub player: Player,

    /// The drivable vehicle.
    pub vehicle: Vehicle,

    /// Which entity receives input.
    pub mode: Mode,

    /// Avatar kinematics integrator.
    walker: Walker,

    /// Vehicle kinematics integrator.
    driver: DriveController,
}

impl Simulation {
    /// Create a new simulation with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        let walker = Walker::new(config.walk.clone());
        let driver = DriveController::new(config.drive.clone());

        Self {
            frame: 0,
            config,
            player: Player::new(),
            vehicle: Vehicle::new(),
            mode: Mode::OnFoot,
            walker,
            driver,
        }
    }

    /// Whether the avatar should be drawn this frame.
    #[inline]
    pub fn player_visible(&self) -> bool {
        self.mode == Mode::OnFoot
    }

    /// Position and yaw of the entity the camera should follow.
    pub fn camera_target(&self) -> (Vec3, f32) {
        match self.mode {
            Mode::OnFoot => (self.player.position(), self.player.yaw()),
            Mode::Driving => (self.vehicle.position(), self.vehicle.yaw()),
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// # Arguments
    ///
    /// * `input` - Sampled input for this frame
    /// * `camera_yaw` - Yaw of the active camera (avatar movement is
    ///   camera-relative)
    /// * `delta_time` - Time step in seconds (clamped internally)
    pub fn tick(&mut self, input: &PlayerInput, camera_yaw: f32, delta_time: f32) {
        let delta_time = delta_time.clamp(0.0, self.config.max_delta_time);

        if input.reset {
            self.reset();
        }
        if input.interact {
            self.try_enter_exit();
        }

        match self.mode {
            Mode::OnFoot => {
                let command = input.to_walk_command(camera_yaw);
                self.walker.update(&mut self.player.walk, &command, delta_time);
            }
            Mode::Driving => {
                let command = input.to_drive_command();
                self.driver
                    .update(&mut self.vehicle.drive, &command, delta_time);
            }
        }

        // Both entities stay on the ground plane, controlled or not
        self.player.walk.position.y = self.config.walk.ground_height;
        self.vehicle.drive.position.y = self.config.drive.ground_height;

        self.frame += 1;
    }

    /// Enter the vehicle when close enough, or exit it.
    ///
    /// Entering requires the avatar within `interact_radius` of the vehicle
    /// and hides it in place; exiting reappears it beside the vehicle.
    /// A no-op when the proximity guard fails.
    fn try_enter_exit(&mut self) {
        match self.mode {
            Mode::OnFoot => {
                let distance = self.player.position().distance(self.vehicle.position());
                if distance < self.config.interact_radius {
                    self.mode = Mode::Driving;
                    log::debug!("entered vehicle at distance {distance:.2}");
                }
            }
            Mode::Driving => {
                self.mode = Mode::OnFoot;
                self.player.walk.position = self.vehicle.position() + self.config.exit_offset;
                self.player.walk.position.y = self.config.walk.ground_height;
                self.player.walk.velocity = Vec3::ZERO;
                log::debug!("exited vehicle at {:?}", self.player.position());
            }
        }
    }

    /// Return both entities to their spawn state and the control to the
    /// avatar.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.vehicle = Vehicle::new();
        self.mode = Mode::OnFoot;
        log::debug!("simulation reset");
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn interact() -> PlayerInput {
        PlayerInput {
            interact: true,
            ..Default::default()
        }
    }

    fn forward() -> PlayerInput {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input
    }

    #[test]
    fn test_initial_state() {
        let sim = Simulation::default();
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.mode, Mode::OnFoot);
        assert!(sim.player_visible());
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut sim = Simulation::default();
        sim.tick(&PlayerInput::default(), 0.0, DT);
        sim.tick(&PlayerInput::default(), 0.0, DT);
        assert_eq!(sim.frame, 2);
    }

    #[test]
    fn test_ground_pinning_invariant() {
        let mut sim = Simulation::default();
        sim.player.walk.position.y = 7.0;
        sim.vehicle.drive.position.y = -2.0;

        sim.tick(&forward(), 0.0, DT);

        assert_eq!(sim.player.position().y, 1.0);
        assert_eq!(sim.vehicle.position().y, 0.5);
    }

    #[test]
    fn test_no_input_is_idempotent() {
        let mut sim = Simulation::default();
        let player_pos = sim.player.position();
        let vehicle_speed = sim.vehicle.speed();

        sim.tick(&PlayerInput::default(), 0.0, DT);

        assert_eq!(sim.player.position(), player_pos);
        assert_eq!(sim.vehicle.speed(), vehicle_speed);
    }

    #[test]
    fn test_interact_out_of_range_is_a_no_op() {
        let mut sim = Simulation::default();

        // Spawn distance is ~6, well outside the radius
        sim.tick(&interact(), 0.0, DT);

        assert_eq!(sim.mode, Mode::OnFoot);
        assert!(sim.player_visible());
    }

    #[test]
    fn test_interact_in_range_enters_vehicle() {
        let mut sim = Simulation::default();
        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);

        sim.tick(&interact(), 0.0, DT);

        assert_eq!(sim.mode, Mode::Driving);
        assert!(!sim.player_visible());
        // The hidden avatar stays where it was
        assert_eq!(sim.player.position(), Vec3::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn test_exit_repositions_beside_vehicle() {
        let mut sim = Simulation::default();
        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);
        sim.tick(&interact(), 0.0, DT);

        // Drive away, then exit
        for _ in 0..60 {
            sim.tick(&forward(), 0.0, DT);
        }
        sim.tick(&interact(), 0.0, DT);

        assert_eq!(sim.mode, Mode::OnFoot);
        assert!(sim.player_visible());
        let expected = sim.vehicle.position() + sim.config.exit_offset;
        assert!((sim.player.position().x - expected.x).abs() < 1e-4);
        assert!((sim.player.position().z - expected.z).abs() < 1e-4);
        assert_eq!(sim.player.position().y, 1.0);
        assert_eq!(sim.player.walk.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_driving_moves_vehicle_not_player() {
        let mut sim = Simulation::default();
        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);
        sim.tick(&interact(), 0.0, DT);

        for _ in 0..30 {
            sim.tick(&forward(), 0.0, DT);
        }

        assert!(sim.vehicle.speed() > 0.0);
        assert!(sim.vehicle.position().x > 6.0);
        assert_eq!(sim.player.position(), Vec3::new(4.0, 1.0, 0.0));
    }

    #[test]
    fn test_vehicle_speed_stays_bounded() {
        let mut sim = Simulation::default();
        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);
        sim.tick(&interact(), 0.0, DT);

        for _ in 0..1200 {
            sim.tick(&forward(), 0.0, DT);
        }

        assert!(sim.vehicle.speed() <= sim.config.drive.max_speed);
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let mut sim = Simulation::default();
        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);
        sim.tick(&interact(), 0.0, DT);
        for _ in 0..60 {
            sim.tick(&forward(), 0.0, DT);
        }

        let reset = PlayerInput {
            reset: true,
            ..Default::default()
        };
        sim.tick(&reset, 0.0, DT);

        assert_eq!(sim.mode, Mode::OnFoot);
        assert!(sim.player_visible());
        assert_eq!(sim.player.position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sim.player.walk.velocity, Vec3::ZERO);
        assert_eq!(sim.vehicle.position(), Vec3::new(6.0, 0.5, 0.0));
        assert_eq!(sim.vehicle.yaw(), 0.0);
        assert_eq!(sim.vehicle.speed(), 0.0);
    }

    #[test]
    fn test_delta_time_is_clamped() {
        let mut sim = Simulation::default();

        // A one-second hitch advances the avatar no further than the clamp
        sim.tick(&forward(), 0.0, 1.0);

        let travelled = sim.player.position().distance(Player::SPAWN_POSITION);
        let bound = sim.config.walk.speed * sim.config.max_delta_time;
        assert!(travelled <= bound + 1e-4);
    }

    #[test]
    fn test_camera_target_follows_mode() {
        let mut sim = Simulation::default();

        let (pos, _) = sim.camera_target();
        assert_eq!(pos, sim.player.position());

        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);
        sim.tick(&interact(), 0.0, DT);

        let (pos, yaw) = sim.camera_target();
        assert_eq!(pos, sim.vehicle.position());
        assert_eq!(yaw, sim.vehicle.yaw());
    }

    #[test]
    fn test_enter_requires_closing_the_gap() {
        let mut sim = Simulation::default();

        sim.tick(&interact(), 0.0, DT);
        assert_eq!(sim.mode, Mode::OnFoot);

        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);
        sim.tick(&interact(), 0.0, DT);
        assert_eq!(sim.mode, Mode::Driving);
        assert!(!sim.player_visible());
    }

    #[test]
    fn test_reset_wins_over_interact_in_same_frame() {
        let mut sim = Simulation::default();
        sim.player.walk.position = Vec3::new(4.0, 1.0, 0.0);

        // Reset first returns the avatar to spawn, so the interact guard
        // fails at distance ~6
        let both = PlayerInput {
            interact: true,
            reset: true,
            ..Default::default()
        };
        sim.tick(&both, 0.0, DT);

        assert_eq!(sim.mode, Mode::OnFoot);
        assert_eq!(sim.player.position(), Player::SPAWN_POSITION);
    }
}
