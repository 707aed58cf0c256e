use std::collections::VecDeque;

use colored::Colorize;
use gilrs::{EventType, Gilrs};
use reaction_config::EventPolicy;

use crate::simulation::Simulation;

pub use gilrs::Button;
pub use glium::glutin::event::{ElementState, VirtualKeyCode};

/// A raw input occurrence, queued by the window/controller layer and
/// dispatched by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    Key(VirtualKeyCode, ElementState),
    Button(Button),
    Resized(u32, u32),
}

/// What a recognized key or button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Thrust,
    SpawnBox,
}

/// Keyboard vocabulary. The movement keys are part of the input
/// contract but not bound to anything yet; they stay listed here as
/// reserved slots rather than falling into the catch-all arm.
pub fn key_action(code: VirtualKeyCode) -> Option<Action> {
    match code {
        VirtualKeyCode::Up => None,
        VirtualKeyCode::Left => None,
        VirtualKeyCode::Right => None,
        VirtualKeyCode::Down => None,
        VirtualKeyCode::W => None,
        VirtualKeyCode::A => None,
        VirtualKeyCode::D => None,
        VirtualKeyCode::S => None,
        VirtualKeyCode::Space => Some(Action::Thrust),
        VirtualKeyCode::Return => Some(Action::SpawnBox),
        _ => None,
    }
}

/// Controller vocabulary, same deal: only A is bound, the rest are
/// reserved.
pub fn button_action(button: Button) -> Option<Action> {
    match button {
        Button::South => Some(Action::SpawnBox),
        Button::East => None,
        Button::North => None,
        Button::West => None,
        Button::DPadUp => None,
        Button::DPadDown => None,
        Button::DPadLeft => None,
        Button::DPadRight => None,
        _ => None,
    }
}

/// Pending input events. How many get handed out per frame is governed
/// by the configured [`EventPolicy`]: `Single` reproduces the original
/// one-poll-per-frame pacing, `Drain` empties the queue.
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    policy: EventPolicy,
}

impl InputQueue {
    pub fn new(policy: EventPolicy) -> Self {
        Self {
            events: VecDeque::new(),
            policy,
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn take_for_frame(&mut self) -> Vec<InputEvent> {
        match self.policy {
            EventPolicy::Single => self.events.pop_front().into_iter().collect(),
            EventPolicy::Drain => self.events.drain(..).collect(),
        }
    }
}

/// Game-controller plumbing. Opening the backend can fail (or find no
/// pads at all); both are non-fatal, the sandbox just runs keyboard-only.
pub struct Controllers {
    gilrs: Option<Gilrs>,
}

impl Controllers {
    pub fn open() -> Self {
        match Gilrs::new() {
            Ok(gilrs) => {
                let count = gilrs.gamepads().count();
                println!("{} {} joysticks detected.", "[reaction-core]:".bold(), count);
                match gilrs.gamepads().next() {
                    Some((_, pad)) => println!(
                        "{} Controller connected: {}",
                        "[reaction-core]:".green().bold(),
                        pad.name()
                    ),
                    None => println!("{} No controllers found.", "[reaction-core]:".bold()),
                }
                Self { gilrs: Some(gilrs) }
            }
            Err(err) => {
                println!(
                    "{} Could not initialize controller support: {}",
                    "[reaction-core]:".red().bold(),
                    err
                );
                Self { gilrs: None }
            }
        }
    }

    /// Forwards pending button presses into the simulation's queue.
    pub fn pump(&mut self, sim: &mut Simulation) {
        if let Some(gilrs) = self.gilrs.as_mut() {
            while let Some(event) = gilrs.next_event() {
                if let EventType::ButtonPressed(button, _) = event.event {
                    sim.push_event(InputEvent::Button(button));
                }
            }
        }
    }
}
