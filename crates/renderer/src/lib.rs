//! Joyride Renderer Support
//!
//! Camera math for the demo. The scene itself (meshes, materials, lights)
//! is owned by the binary and drawn with `three-d`; this crate keeps the
//! camera state that persists between frames so it stays unit-testable
//! without a GL context.

pub mod camera;

pub use camera::FollowCamera;
