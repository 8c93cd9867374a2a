use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Runs the Wayland backend until the user exits or the compositor closes the surface.
///
/// # Arguments
/// * `config` - Validated configuration for the canvas and render pacing
pub fn run_wayland(config: Config) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config);
    backend.run()
}
