//! Application tiles and their fixed grid footprints.
//!
//! Tiles are constructed once from the external catalog feed at startup and
//! are read-only afterward. Their ids are derived from feed order and stay
//! stable for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Stable tile identifier, derived from catalog order.
pub type TileId = usize;

/// Footprint class of a tile on the grid.
///
/// The feed spells the tall variant `"retangle-vertical"`; that spelling is
/// the wire format and is preserved here verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    #[serde(rename = "box")]
    Box,
    #[serde(rename = "retangle-vertical")]
    TallBox,
}

impl SizeClass {
    /// Width in grid columns.
    pub fn width(self) -> usize {
        1
    }

    /// Height in grid rows.
    pub fn height(self) -> usize {
        match self {
            SizeClass::Box => 1,
            SizeClass::TallBox => 2,
        }
    }
}

/// What activating a tile does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchSpec {
    /// Open a URL.
    Link(String),
    /// Start a local program.
    Program(String),
}

impl LaunchSpec {
    /// The launch target (URL or path).
    pub fn target(&self) -> &str {
        match self {
            LaunchSpec::Link(url) => url,
            LaunchSpec::Program(path) => path,
        }
    }
}

/// One application entry with a fixed footprint on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    /// Symbolic icon name, resolved by the presentation layer.
    pub icon: String,
    /// Footprint in grid columns (1 or 2).
    pub width: usize,
    /// Footprint in grid rows (1 or 2).
    pub height: usize,
    /// Background color as an opaque render hint (CSS-style string).
    pub background: String,
    /// Foreground color as an opaque render hint.
    pub foreground: String,
    pub launch: LaunchSpec,
}

impl Tile {
    /// Build a tile from catalog fields, deriving the footprint from the
    /// size class.
    pub fn new(
        id: TileId,
        name: impl Into<String>,
        icon: impl Into<String>,
        size: SizeClass,
        background: impl Into<String>,
        foreground: impl Into<String>,
        launch: LaunchSpec,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            width: size.width(),
            height: size.height(),
            background: background.into(),
            foreground: foreground.into(),
            launch,
        }
    }

    /// Occupied cell count (width x height).
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the tile spans two grid rows.
    pub fn is_tall(&self) -> bool {
        self.height == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: TileId, size: SizeClass) -> Tile {
        Tile::new(
            id,
            format!("App {id}"),
            "Globe",
            size,
            "#1e3a8a",
            "#ffffff",
            LaunchSpec::Link("https://example.com".into()),
        )
    }

    #[test]
    fn box_footprint() {
        let t = tile(0, SizeClass::Box);
        assert_eq!((t.width, t.height), (1, 1));
        assert_eq!(t.area(), 1);
        assert!(!t.is_tall());
    }

    #[test]
    fn tall_box_footprint() {
        let t = tile(3, SizeClass::TallBox);
        assert_eq!((t.width, t.height), (1, 2));
        assert_eq!(t.area(), 2);
        assert!(t.is_tall());
    }

    #[test]
    fn size_class_wire_spelling() {
        let s: SizeClass = serde_json::from_str("\"retangle-vertical\"").unwrap();
        assert_eq!(s, SizeClass::TallBox);
        let s: SizeClass = serde_json::from_str("\"box\"").unwrap();
        assert_eq!(s, SizeClass::Box);
    }

    #[test]
    fn launch_spec_target() {
        assert_eq!(
            LaunchSpec::Link("https://a.example".into()).target(),
            "https://a.example"
        );
        assert_eq!(
            LaunchSpec::Program("/usr/bin/player".into()).target(),
            "/usr/bin/player"
        );
    }
}
