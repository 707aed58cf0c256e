pub mod parser;

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

pub use parser::parse_string;


/// How many queued input events the frame loop hands to the dispatcher
/// per frame. `Single` is the historical behavior of the sandbox (one
/// poll per frame); `Drain` empties the whole queue every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPolicy {
    Single,
    Drain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

/// Everything the sandbox reads from `config.yaml`. Every field has a
/// default matching the stock sandbox, so a missing file (or any subset
/// of keys) is fine.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window: WindowSettings,
    /// Gravity vector of the physics world, in physical units.
    pub gravity: (f32, f32),
    pub events_per_frame: EventPolicy,
    /// When true, holding the thrust key reapplies the force every frame
    /// instead of once per key-down event.
    pub continuous_thrust: bool,
    /// Scale of the camera mapping, pixels per physical unit.
    pub pixels_per_unit: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                width: 800,
                height: 600,
            },
            gravity: (0.0, -10.0),
            events_per_frame: EventPolicy::Single,
            continuous_thrust: false,
            pixels_per_unit: 20.0,
        }
    }
}

/// Loads settings from `path`. A missing file is not an error, the
/// defaults are used; a file that is present but malformed is.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let f = std::fs::read_to_string(path)
        .with_context(|| format!("could not read '{}'", path.display()))?;
    let settings = parse_string(f)?;
    println!("{}", "[reaction-config]: Parsing ok.".green().bold());
    Ok(settings)
}
