//! Platform-agnostic input event types.
//!
//! Every command source (keyboard listener, voice recognizer, pointer)
//! maps its native input to these types. The core navigation engine never
//! sees raw platform input.

use serde::{Deserialize, Serialize};

use crate::tile::TileId;

/// A directional navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A discrete command consumed by the launcher event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move the selection cursor.
    Direction(Direction),
    /// Activate the currently selected tile (confirm key).
    Activate,
    /// Direct selection of a tile on the visible page (pointer click,
    /// already hit-tested by the presentation layer).
    Select(TileId),
    /// Toggle the voice recognizer on or off.
    ToggleVoice,
    /// User requested quit.
    Quit,
}
