//! First-fit page packer.
//!
//! Tiles are placed strictly in catalog order: the first clear top-left
//! cell (row-major scan) on the current page wins. A tile that does not
//! fit closes the page and opens a fresh one; a tile whose footprint
//! exceeds the page itself is force-placed at the origin. Tiles are never
//! split across pages.

use vitrine_types::Tile;

use crate::GridSpec;
use crate::mask::OccupancyMask;
use crate::page::{Page, PlacedTile};

/// Pack tiles into pages. Cells come back in placement order; callers
/// wanting navigable pages run `inject_placeholders` afterward, which also
/// sorts row-major.
///
/// Empty input yields an empty page list.
pub fn pack(tiles: &[Tile], spec: &GridSpec) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut mask = OccupancyMask::new(spec);

    for tile in tiles {
        if let Some((row, col)) = mask.find_fit(tile.width, tile.height) {
            mask.occupy(row, col, tile.width, tile.height);
            current.cells.push(PlacedTile::real(tile, row, col));
            continue;
        }

        // Close the current page and retry on a fresh one.
        if !current.is_empty() {
            pages.push(std::mem::take(&mut current));
        }
        mask = OccupancyMask::new(spec);

        if let Some((row, col)) = mask.find_fit(tile.width, tile.height) {
            mask.occupy(row, col, tile.width, tile.height);
            current.cells.push(PlacedTile::real(tile, row, col));
        } else {
            // Footprint exceeds the page. Degenerate fallback: force the
            // tile to the origin without marking the mask; rendering
            // overlap is tolerated, not corrected.
            log::warn!(
                "Tile '{}' ({}x{}) exceeds the {}x{} page, forcing placement at origin",
                tile.name,
                tile.width,
                tile.height,
                spec.rows,
                spec.cols,
            );
            current.cells.push(PlacedTile::real(tile, 0, 0));
        }
    }

    if !current.is_empty() {
        pages.push(current);
    }
    pages
}
