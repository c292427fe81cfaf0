//! Player input handling.
//!
//! This module converts raw input (held keys plus one-frame triggers) into
//! commands for the kinematics system.

use joyride_physics::{DriveCommand, WalkCommand};
use serde::{Deserialize, Serialize};

/// Raw player input for a single frame.
///
/// Built once per frame by the window layer from key events. The movement
/// axes are level-triggered (held keys); `interact` and `reset` are
/// edge-triggered and fire for exactly one frame per key press.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys held this frame.
    pub movement: MovementInput,

    /// Enter/exit the vehicle (one frame per press).
    pub interact: bool,

    /// Reset the scene (one frame per press).
    pub reset: bool,
}

/// Movement key states (W/A/S/D).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    /// Convert to a walking command, relative to the given camera yaw.
    ///
    /// Diagonal movement is normalized so it is no faster than straight.
    pub fn to_walk_command(&self, camera_yaw: f32) -> WalkCommand {
        let mut cmd = WalkCommand {
            camera_yaw,
            ..Default::default()
        };

        if self.movement.forward {
            cmd.forward_move += 1.0;
        }
        if self.movement.backward {
            cmd.forward_move -= 1.0;
        }
        if self.movement.right {
            cmd.right_move += 1.0;
        }
        if self.movement.left {
            cmd.right_move -= 1.0;
        }

        let magnitude = (cmd.forward_move.powi(2) + cmd.right_move.powi(2)).sqrt();
        if magnitude > 1.0 {
            cmd.forward_move /= magnitude;
            cmd.right_move /= magnitude;
        }

        cmd
    }

    /// Convert to a driving command.
    ///
    /// W is throttle, S is brake/reverse, A/D steer (positive = right).
    pub fn to_drive_command(&self) -> DriveCommand {
        let mut steer = 0.0;
        if self.movement.right {
            steer += 1.0;
        }
        if self.movement.left {
            steer -= 1.0;
        }

        DriveCommand {
            throttle: self.movement.forward,
            brake: self.movement.backward,
            steer,
        }
    }

    /// Check if any movement input is active.
    pub fn has_movement(&self) -> bool {
        self.movement.forward
            || self.movement.backward
            || self.movement.left
            || self.movement.right
    }
}
