use std::path::Path;

use anyhow::Result;

const CONFIG_FILE: &str = "config.yaml";

/// Loads the optional settings file from the working directory and
/// hands off to the sandbox loop. No command-line arguments.
pub fn run() -> Result<()> {
    let settings = reaction_config::load(Path::new(CONFIG_FILE))?;
    reaction_core::run(settings)
}
