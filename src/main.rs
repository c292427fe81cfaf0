//! Joyride - Main Entry Point
//!
//! A minimal third-person sandbox: a walkable avatar, an enterable vehicle,
//! and a smoothed follow camera, drawn with three-d.

use glam::Vec3;
use joyride_game::input::MovementInput;
use joyride_game::{PlayerInput, Simulation};
use joyride_renderer::FollowCamera;
use three_d::*;

/// Input state tracking.
///
/// W/A/S/D are level-triggered; E (enter/exit), R (reset), and O (orbit
/// debug camera) fire once per physical press, ignoring OS key repeat.
#[derive(Default)]
struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    interact: bool,
    reset: bool,
    orbit_toggle: bool,
    interact_held: bool,
    reset_held: bool,
    orbit_held: bool,
}

impl InputState {
    fn handle_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::W => self.forward = pressed,
            Key::S => self.backward = pressed,
            Key::A => self.left = pressed,
            Key::D => self.right = pressed,
            Key::E => {
                if pressed && !self.interact_held {
                    self.interact = true;
                }
                self.interact_held = pressed;
            }
            Key::R => {
                if pressed && !self.reset_held {
                    self.reset = true;
                }
                self.reset_held = pressed;
            }
            Key::O => {
                if pressed && !self.orbit_held {
                    self.orbit_toggle = true;
                }
                self.orbit_held = pressed;
            }
            _ => {}
        }
    }

    fn to_player_input(&self) -> PlayerInput {
        PlayerInput {
            movement: MovementInput {
                forward: self.forward,
                backward: self.backward,
                left: self.left,
                right: self.right,
            },
            interact: self.interact,
            reset: self.reset,
        }
    }

    fn take_orbit_toggle(&mut self) -> bool {
        std::mem::take(&mut self.orbit_toggle)
    }

    fn clear_triggers(&mut self) {
        self.interact = false;
        self.reset = false;
    }
}

fn v3(v: Vec3) -> three_d::Vec3 {
    vec3(v.x, v.y, v.z)
}

fn main() {
    env_logger::init();

    // Create window
    let window = Window::new(WindowSettings {
        title: "Joyride".to_string(),
        max_size: Some((1280, 720)),
        ..Default::default()
    })
    .unwrap();

    let context = window.gl();

    // Create simulation and follow camera
    let mut simulation = Simulation::default();
    let mut follow = FollowCamera::default();

    let mut camera = Camera::new_perspective(
        window.viewport(),
        v3(follow.position),
        v3(follow.look_target(simulation.player.position())),
        vec3(0.0, 1.0, 0.0),
        degrees(follow.fov),
        follow.near,
        follow.far,
    );

    // Orbit debug camera (O to toggle)
    let mut orbit_enabled = false;
    let mut orbit = OrbitControl::new(v3(simulation.player.position()), 2.0, 200.0);

    // Input state
    let mut input_state = InputState::default();

    // Ground plane
    let mut ground = Gm::new(
        Mesh::new(&context, &CpuMesh::square()),
        ColorMaterial {
            color: Srgba::new(43, 122, 0, 255),
            ..Default::default()
        },
    );
    ground.set_transformation(Mat4::from_scale(200.0) * Mat4::from_angle_x(degrees(-90.0)));

    // Reference grid, drawn as thin instanced boxes just above the ground
    let mut grid_transforms = Vec::new();
    for i in 0..=40 {
        let p = -100.0 + i as f32 * 5.0;
        grid_transforms.push(
            Mat4::from_translation(vec3(p, 0.01, 0.0))
                * Mat4::from_nonuniform_scale(0.05, 0.01, 100.0),
        );
        grid_transforms.push(
            Mat4::from_translation(vec3(0.0, 0.01, p))
                * Mat4::from_nonuniform_scale(100.0, 0.01, 0.05),
        );
    }
    let grid = Gm::new(
        InstancedMesh::new(
            &context,
            &Instances {
                transformations: grid_transforms,
                ..Default::default()
            },
            &CpuMesh::cube(),
        ),
        ColorMaterial {
            color: Srgba::new(102, 102, 102, 255),
            ..Default::default()
        },
    );

    // Player: a tall tan box
    let mut player_mesh = Gm::new(
        Mesh::new(&context, &CpuMesh::cube()),
        ColorMaterial {
            color: Srgba::new(255, 204, 153, 255),
            ..Default::default()
        },
    );

    // Vehicle: a long red box
    let mut vehicle_mesh = Gm::new(
        Mesh::new(&context, &CpuMesh::cube()),
        ColorMaterial {
            color: Srgba::new(255, 0, 0, 255),
            ..Default::default()
        },
    );

    // Light rig
    let ambient = AmbientLight::new(&context, 0.4, Srgba::WHITE);
    let sun = PointLight::new(
        &context,
        2.0,
        Srgba::WHITE,
        vec3(5.0, 10.0, 7.0),
        Attenuation::default(),
    );

    log::info!("controls: WASD move/drive, E enter/exit vehicle, R reset, O orbit camera, Esc quit");

    // Main loop
    window.render_loop(move |mut frame_input| {
        // Handle input events
        for event in frame_input.events.iter() {
            match event {
                Event::KeyPress { kind, handled, .. } if !*handled => {
                    input_state.handle_key(*kind, true);

                    if *kind == Key::Escape {
                        return FrameOutput {
                            exit: true,
                            ..Default::default()
                        };
                    }
                }
                Event::KeyRelease { kind, handled, .. } if !*handled => {
                    input_state.handle_key(*kind, false);
                }
                _ => {}
            }
        }

        if input_state.take_orbit_toggle() {
            orbit_enabled = !orbit_enabled;
            if !orbit_enabled {
                // Hand the orbit camera's position back to the follow easing
                let p = camera.position();
                follow.position = Vec3::new(p.x, p.y, p.z);
            }
            log::info!(
                "orbit camera {}",
                if orbit_enabled { "on" } else { "off" }
            );
        }

        camera.set_viewport(frame_input.viewport);
        follow.aspect = frame_input.viewport.aspect();

        // Avatar movement is relative to whichever camera is active
        let view = camera.target() - camera.position();
        let camera_yaw = view.z.atan2(view.x);

        // Update simulation
        let player_input = input_state.to_player_input();
        let delta_time = (frame_input.elapsed_time / 1000.0) as f32;
        simulation.tick(&player_input, camera_yaw, delta_time);

        // Clear one-frame triggers after processing
        input_state.clear_triggers();

        // Ease the follow camera after the controlled entity
        let (target_position, target_yaw) = simulation.camera_target();
        follow.update(target_position, target_yaw);
        if orbit_enabled {
            orbit.handle_events(&mut camera, &mut frame_input.events);
        } else {
            camera.set_view(
                v3(follow.position),
                v3(follow.look_target(target_position)),
                vec3(0.0, 1.0, 0.0),
            );
        }

        // Write entity transforms: unit cube has half-extent 1, so scale is
        // half the box dimensions; the long axis faces along yaw
        player_mesh.set_transformation(
            Mat4::from_translation(v3(simulation.player.position()))
                * Mat4::from_angle_y(radians(-simulation.player.yaw()))
                * Mat4::from_nonuniform_scale(0.5, 1.0, 0.5),
        );
        vehicle_mesh.set_transformation(
            Mat4::from_translation(v3(simulation.vehicle.position()))
                * Mat4::from_angle_y(radians(-simulation.vehicle.yaw()))
                * Mat4::from_nonuniform_scale(2.0, 0.5, 1.0),
        );

        let mut movers = vec![&vehicle_mesh];
        if simulation.player_visible() {
            movers.push(&player_mesh);
        }

        // Render
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(0.53, 0.81, 0.92, 1.0, 1.0))
            .render(&camera, &[&ground], &[&ambient, &sun])
            .render(&camera, &[&grid], &[&ambient, &sun])
            .render(&camera, movers.as_slice(), &[&ambient, &sun]);

        FrameOutput::default()
    });
}
