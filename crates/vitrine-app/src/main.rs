//! Vitrine kiosk launcher entry point.
//!
//! Paginated 4x2 tile grid with d-pad style navigation, voice commands,
//! and an audible navigation cue. Commands arrive one per line on stdin
//! (`w`/`a`/`s`/`d`, arrow words, enter to launch, `say <phrase>` for the
//! voice path, `v` to toggle voice, `q` to quit) and are applied strictly
//! in arrival order.

mod app_state;
mod catalog;
mod input;
mod launch;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use app_state::AppState;
use vitrine_types::config::LauncherConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LauncherConfig::load(Path::new("vitrine.toml"))?;
    log::info!(
        "Starting Vitrine (viewport {}px, catalog {})",
        config.viewport_width,
        config.catalog_path.display(),
    );

    let tiles = match catalog::load_tiles(&config.catalog_path) {
        Ok(tiles) => tiles,
        Err(e) => {
            log::warn!("Catalog unavailable ({e}), using the demo catalog");
            catalog::demo_tiles()
        },
    };
    log::info!("Loaded {} tiles", tiles.len());

    let mut state = AppState::new(config, tiles);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", render::render(&state));
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;

        // The voice path: a transcript goes through the listener and
        // lands on the same navigation call as the keyboard.
        if let Some(phrase) = line.trim().strip_prefix("say ") {
            if let Some(direction) = state.listener.on_transcript(phrase) {
                state.apply_direction(direction);
            }
        } else if let Some(event) = input::parse_line(&line) {
            if input::handle_event(event, &mut state) == input::InputResult::Quit {
                break;
            }
        } else {
            log::debug!("Ignoring unrecognized input {line:?}");
        }

        print!("{}", render::render(&state));
        stdout.flush()?;
    }

    log::info!("Vitrine shut down cleanly");
    Ok(())
}
