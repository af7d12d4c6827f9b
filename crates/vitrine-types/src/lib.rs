//! Foundation types for the Vitrine launcher.
//!
//! This crate contains the platform-agnostic types shared by all Vitrine
//! crates: tiles and their size classes, input events, launcher
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod tile;

pub use error::{Result, VitrineError};
pub use input::{Direction, InputEvent};
pub use tile::{LaunchSpec, SizeClass, Tile, TileId};
