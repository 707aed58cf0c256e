use reaction_config::{EventPolicy, Settings};
use reaction_core::camera::{rad_to_deg, Camera};
use reaction_core::input::{
    button_action, key_action, Action, Button, ElementState, InputEvent, VirtualKeyCode,
};
use reaction_core::physics::{Physics, Point2, Vector2, SUBSTEPS, TIMESTEP};
use reaction_core::simulation::Simulation;

fn test_settings() -> Settings {
    Settings {
        gravity: (0.0, -1.0),
        ..Default::default()
    }
}

fn weightless_settings() -> Settings {
    Settings {
        gravity: (0.0, 0.0),
        ..Default::default()
    }
}


// ========== World state bookkeeping ==========

#[test]
fn spawned_list_grows_by_one_per_spawn() {
    let mut physics = Physics::new(Vector2::new(0.0, -10.0));
    for n in 1..=100 {
        physics.spawn_box(Point2::new(0.0, 10.0));
        assert_eq!(physics.spawned().len(), n);
    }
    // Unbounded growth is the current behavior; nothing in the frame
    // loop ever removes a spawned box.
    assert!(!physics.spawned().contains(&physics.ship()));
    assert!(!physics.spawned().contains(&physics.ground()));
}


#[test]
fn remove_box_shrinks_the_list() {
    let mut physics = Physics::new(Vector2::new(0.0, -10.0));
    let a = physics.spawn_box(Point2::new(-2.0, 10.0));
    let b = physics.spawn_box(Point2::new(2.0, 10.0));
    physics.remove_box(a);
    assert_eq!(physics.spawned(), &[b]);
    assert!(physics.body_pose(a).is_none());
    assert!(physics.body_pose(b).is_some());
}


#[test]
fn step_advances_fixed_time_regardless_of_wall_clock() {
    let mut physics = Physics::new(Vector2::new(0.0, -10.0));
    let steps = 120;
    for _ in 0..steps {
        physics.step(TIMESTEP, SUBSTEPS);
    }
    let expected = f64::from(steps) * f64::from(TIMESTEP);
    assert!(
        (physics.elapsed() - expected).abs() < 1e-9,
        "elapsed {} != {}",
        physics.elapsed(),
        expected
    );
}


#[test]
fn spawned_boxes_fall_under_gravity() {
    let mut physics = Physics::new(Vector2::new(0.0, -1.0));
    // spread out horizontally so contact resolution between the fresh
    // boxes cannot mask the free fall
    let handles: Vec<_> = [-3.0f32, 0.0, 3.0]
        .iter()
        .map(|x| physics.spawn_box(Point2::new(*x, 80.0)))
        .collect();
    physics.step(TIMESTEP, SUBSTEPS);

    for handle in &handles {
        let (position, _) = physics.body_pose(*handle).unwrap();
        assert!(position.y < 80.0, "body did not fall, y = {}", position.y);
    }
    assert!(handles[0] != handles[1]);
    assert!(handles[1] != handles[2]);
    assert!(handles[0] != handles[2]);
}


// ========== Coordinate mapping ==========

#[test]
fn camera_maps_the_origin_to_the_bottom_center() {
    let camera = Camera::new((800, 600), 20.0);
    let rect = camera.project(Point2::new(0.0, 0.0));
    assert_eq!((rect.left, rect.top), (400.0, 600.0));
    assert_eq!((rect.width, rect.height), (20.0, 20.0));
}


#[test]
fn camera_maps_offset_positions() {
    let camera = Camera::new((800, 600), 20.0);
    let rect = camera.project(Point2::new(10.0, 0.0));
    assert_eq!((rect.left, rect.top), (500.0, 600.0));
}


#[test]
fn half_a_turn_is_180_degrees() {
    assert!((rad_to_deg(std::f32::consts::PI) - 180.0).abs() <= 0.01);
}


#[test]
fn resize_updates_the_mapping_without_touching_physics() {
    let mut sim = Simulation::new(&test_settings());
    let pose_before = sim.physics.ship_pose();

    sim.handle_event(InputEvent::Resized(1024, 768));

    assert_eq!(sim.camera.viewport(), (1024, 768));
    let rect = sim.camera.project(Point2::new(0.0, 0.0));
    assert_eq!((rect.left, rect.top), (512.0, 768.0));

    assert_eq!(sim.physics.ship_pose(), pose_before);
    assert_eq!(sim.physics.elapsed(), 0.0);
}


// ========== Input contract ==========

#[test]
fn space_thrusts_and_return_spawns() {
    assert_eq!(key_action(VirtualKeyCode::Space), Some(Action::Thrust));
    assert_eq!(key_action(VirtualKeyCode::Return), Some(Action::SpawnBox));
}


#[test]
fn movement_keys_are_reserved_noops() {
    for code in [
        VirtualKeyCode::Up,
        VirtualKeyCode::Left,
        VirtualKeyCode::Right,
        VirtualKeyCode::Down,
        VirtualKeyCode::W,
        VirtualKeyCode::A,
        VirtualKeyCode::D,
        VirtualKeyCode::S,
    ] {
        assert_eq!(key_action(code), None, "{:?} should be unbound", code);
    }
}


#[test]
fn controller_a_spawns_and_the_rest_are_reserved() {
    assert_eq!(button_action(Button::South), Some(Action::SpawnBox));
    for button in [
        Button::East,
        Button::North,
        Button::West,
        Button::DPadUp,
        Button::DPadDown,
        Button::DPadLeft,
        Button::DPadRight,
    ] {
        assert_eq!(button_action(button), None, "{:?} should be unbound", button);
    }
}


#[test]
fn return_key_spawns_through_the_frame_loop() {
    let mut sim = Simulation::new(&test_settings());
    sim.push_event(InputEvent::Key(VirtualKeyCode::Return, ElementState::Pressed));
    sim.advance_frame();
    assert_eq!(sim.physics.spawned().len(), 1);
}


#[test]
fn controller_a_spawns_through_the_frame_loop() {
    let mut sim = Simulation::new(&test_settings());
    sim.push_event(InputEvent::Button(Button::South));
    sim.advance_frame();
    assert_eq!(sim.physics.spawned().len(), 1);
}


#[test]
fn single_policy_dispatches_one_event_per_frame() {
    let mut sim = Simulation::new(&test_settings());
    for _ in 0..3 {
        sim.push_event(InputEvent::Key(VirtualKeyCode::Return, ElementState::Pressed));
    }
    sim.advance_frame();
    assert_eq!(sim.physics.spawned().len(), 1);
    sim.advance_frame();
    assert_eq!(sim.physics.spawned().len(), 2);
    sim.advance_frame();
    assert_eq!(sim.physics.spawned().len(), 3);
}


#[test]
fn drain_policy_dispatches_all_pending_events() {
    let settings = Settings {
        events_per_frame: EventPolicy::Drain,
        ..test_settings()
    };
    let mut sim = Simulation::new(&settings);
    for _ in 0..3 {
        sim.push_event(InputEvent::Key(VirtualKeyCode::Return, ElementState::Pressed));
    }
    sim.advance_frame();
    assert_eq!(sim.physics.spawned().len(), 3);
}


// ========== Thrust ==========

#[test]
fn thrust_keydown_nudges_the_ship_upward() {
    let mut sim = Simulation::new(&weightless_settings());
    let y_start = sim.physics.ship_pose().0.y;

    sim.push_event(InputEvent::Key(VirtualKeyCode::Space, ElementState::Pressed));
    // Frame 1 dispatches the key-down after stepping; the force acts on
    // the following step.
    sim.advance_frame();
    sim.advance_frame();

    assert!(
        sim.physics.ship_pose().0.y > y_start,
        "ship did not rise: y = {}",
        sim.physics.ship_pose().0.y
    );
}


#[test]
fn continuous_thrust_keeps_pushing_while_held() {
    let settings = Settings {
        continuous_thrust: true,
        ..weightless_settings()
    };
    let mut sim = Simulation::new(&settings);
    let y_start = sim.physics.ship_pose().0.y;

    sim.push_event(InputEvent::Key(VirtualKeyCode::Space, ElementState::Pressed));
    sim.advance_frame();
    let y_after_press = sim.physics.ship_pose().0.y;
    for _ in 0..10 {
        sim.advance_frame();
    }
    let y_held = sim.physics.ship_pose().0.y;
    assert!(y_held > y_after_press);
    assert!(y_held > y_start);
}


// ========== Quit ==========

#[test]
fn quit_stops_the_simulation_for_good() {
    let mut sim = Simulation::new(&test_settings());
    sim.push_event(InputEvent::Quit);
    sim.advance_frame();
    assert!(!sim.is_running());

    let elapsed = sim.physics.elapsed();
    sim.advance_frame();
    sim.advance_frame();
    assert_eq!(
        sim.physics.elapsed(),
        elapsed,
        "a stopped simulation must not advance"
    );
}
