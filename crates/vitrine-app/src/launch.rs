//! Launch collaborator.
//!
//! Activating a tile opens a link or starts a program. The kiosk shell
//! has no window manager or browser to hand off to, so the side effect is
//! a logged stub; the contract callers rely on is the synchronous
//! `Result` and the absence of retries.

use vitrine_types::{LaunchSpec, Result, Tile, VitrineError};

/// Execute a tile's launch action.
pub fn execute_app(tile: &Tile) -> Result<()> {
    if tile.launch.target().is_empty() {
        return Err(VitrineError::Launch(format!(
            "tile '{}' has an empty launch target",
            tile.name
        )));
    }
    match &tile.launch {
        LaunchSpec::Link(url) => {
            log::info!("Opening link for '{}': {url}", tile.name);
        },
        LaunchSpec::Program(path) => {
            log::info!("Starting program for '{}': {path}", tile.name);
        },
    }
    Ok(())
}
