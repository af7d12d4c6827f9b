//! Command-line input mapping and event application.
//!
//! The kiosk shell reads one command per line. Keyboard-style keys
//! (`w`/`a`/`s`/`d`, arrow words, enter) and pointer clicks map onto the
//! same `InputEvent` vocabulary the voice listener feeds into, so every
//! source goes through the identical navigation path.

use vitrine_types::{Direction, InputEvent};

use crate::app_state::AppState;
use crate::launch;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Map one input line to an event. Unknown input maps to nothing.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "w" | "up" => Some(InputEvent::Direction(Direction::Up)),
        "s" | "down" => Some(InputEvent::Direction(Direction::Down)),
        "a" | "left" => Some(InputEvent::Direction(Direction::Left)),
        "d" | "right" => Some(InputEvent::Direction(Direction::Right)),
        "" | "enter" | "ok" => Some(InputEvent::Activate),
        "v" | "voice" => Some(InputEvent::ToggleVoice),
        "q" | "quit" | "exit" => Some(InputEvent::Quit),
        _ => line
            .strip_prefix("click ")
            .and_then(|rest| rest.trim().parse().ok())
            .map(InputEvent::Select),
    }
}

/// Apply one event to the launcher state.
pub fn handle_event(event: InputEvent, state: &mut AppState) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::Direction(direction) => {
            state.apply_direction(direction);
        },
        InputEvent::Activate => {
            if let Some(tile) = state.selected_tile() {
                // Launch failures are reported and dropped; they never
                // touch navigation state and are not retried.
                if let Err(e) = launch::execute_app(tile) {
                    log::error!("Launch failed: {e}");
                }
            }
        },
        InputEvent::Select(id) => {
            if state.select_tile(id) {
                // A click both selects and activates.
                if let Some(tile) = state.selected_tile()
                    && let Err(e) = launch::execute_app(tile)
                {
                    log::error!("Launch failed: {e}");
                }
            }
        },
        InputEvent::ToggleVoice => {
            state.listener.toggle();
        },
    }
    InputResult::Continue
}
