use reaction_config::Settings;

use crate::camera::{rad_to_deg, Camera, ScreenRect};
use crate::input::{button_action, key_action, Action, ElementState, InputEvent, InputQueue};
use crate::physics::{Physics, Point2, Vector2, SPAWN_POINT, SUBSTEPS, TIMESTEP};

/// The world state plus the per-frame bookkeeping around it: input
/// queue, camera, thrust key state, and the running flag. Everything
/// here is headless; the renderer only reads the sprite accessors.
pub struct Simulation {
    pub physics: Physics,
    pub camera: Camera,
    queue: InputQueue,
    running: bool,
    thrust_held: bool,
    continuous_thrust: bool,
}

impl Simulation {
    pub fn new(settings: &Settings) -> Self {
        let physics = Physics::new(Vector2::new(settings.gravity.0, settings.gravity.1));
        let camera = Camera::new(
            (settings.window.width, settings.window.height),
            settings.pixels_per_unit,
        );
        Self {
            physics,
            camera,
            queue: InputQueue::new(settings.events_per_frame),
            running: true,
            thrust_held: false,
            continuous_thrust: settings.continuous_thrust,
        }
    }

    /// False once a quit signal has been dispatched. The loop must not
    /// step or render after that.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// One frame of simulation, in fixed order: reapply held thrust (if
    /// configured), advance the physics world by one nominal frame, then
    /// dispatch pending input per the events-per-frame policy.
    pub fn advance_frame(&mut self) {
        if !self.running {
            return;
        }
        if self.continuous_thrust && self.thrust_held {
            self.physics.apply_thrust();
        }
        self.physics.step(TIMESTEP, SUBSTEPS);
        for event in self.queue.take_for_frame() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.running = false,
            InputEvent::Key(code, ElementState::Pressed) => match key_action(code) {
                Some(Action::Thrust) => {
                    self.thrust_held = true;
                    // One impulse-like nudge per key-down; sustained
                    // propulsion needs the continuous_thrust setting.
                    if !self.continuous_thrust {
                        self.physics.apply_thrust();
                    }
                }
                Some(Action::SpawnBox) => {
                    self.spawn_box();
                }
                None => (),
            },
            InputEvent::Key(code, ElementState::Released) => {
                if key_action(code) == Some(Action::Thrust) {
                    self.thrust_held = false;
                }
            }
            InputEvent::Button(button) => match button_action(button) {
                Some(Action::SpawnBox) => {
                    self.spawn_box();
                }
                Some(Action::Thrust) => self.physics.apply_thrust(),
                None => (),
            },
            InputEvent::Resized(width, height) => self.camera.set_viewport(width, height),
        }
    }

    fn spawn_box(&mut self) {
        self.physics
            .spawn_box(Point2::new(SPAWN_POINT.0, SPAWN_POINT.1));
    }

    /// Ship rectangle and rotation (degrees) in screen space.
    pub fn ship_sprite(&self) -> (ScreenRect, f32) {
        let (position, angle) = self.physics.ship_pose();
        (self.camera.project(position), rad_to_deg(angle))
    }

    /// Spawned-box rectangles in insertion order.
    pub fn spawned_sprites(&self) -> Vec<(ScreenRect, f32)> {
        self.physics
            .spawned()
            .iter()
            .filter_map(|handle| self.physics.body_pose(*handle))
            .map(|(position, angle)| (self.camera.project(position), rad_to_deg(angle)))
            .collect()
    }
}
