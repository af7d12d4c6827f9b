//! Grid engine for the Vitrine launcher.
//!
//! Turns the flat tile catalog into fixed-capacity pages (first-fit
//! packing), synthesizes placeholder cells beneath two-row tiles, and
//! resolves directional navigation across pages. Pages are a derived view:
//! recomputed from the catalog, never independently mutated.

mod mask;
pub mod metrics;
pub mod navigator;
pub mod packer;
pub mod page;
pub mod placeholder;
pub mod selection;

pub use navigator::{NavOutcome, navigate};
pub use packer::pack;
pub use page::{Page, PlacedTile};
pub use placeholder::inject_placeholders;
pub use selection::SelectionState;

use vitrine_types::Tile;

/// Fixed grid rows per page.
pub const GRID_ROWS: usize = 2;
/// Fixed grid columns per page.
pub const GRID_COLS: usize = 4;

/// Page geometry. The launcher always uses 2x4; tests exercise other
/// shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
        }
    }
}

impl GridSpec {
    /// Cell capacity of one page.
    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// Pack the catalog and inject placeholders: the page list the navigator
/// operates on.
pub fn build_pages(tiles: &[Tile], spec: &GridSpec) -> Vec<Page> {
    let mut pages = pack(tiles, spec);
    for page in &mut pages {
        inject_placeholders(page, spec.cols);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_types::{LaunchSpec, SizeClass, Tile};

    fn boxes(n: usize) -> Vec<Tile> {
        (0..n)
            .map(|i| {
                Tile::new(
                    i,
                    format!("App {i}"),
                    "Globe",
                    SizeClass::Box,
                    "#222",
                    "#eee",
                    LaunchSpec::Link("https://example.com".into()),
                )
            })
            .collect()
    }

    #[test]
    fn default_spec_is_2x4() {
        let spec = GridSpec::default();
        assert_eq!(spec.rows, 2);
        assert_eq!(spec.cols, 4);
        assert_eq!(spec.capacity(), 8);
    }

    #[test]
    fn build_pages_sorts_row_major() {
        let pages = build_pages(&boxes(5), &GridSpec::default());
        assert_eq!(pages.len(), 1);
        let keys: Vec<usize> = pages[0]
            .cells
            .iter()
            .map(|c| c.row * GRID_COLS + c.col)
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
