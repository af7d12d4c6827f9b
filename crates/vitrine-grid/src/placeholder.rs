//! Placeholder synthesis for two-row tiles.
//!
//! A two-row tile occupies a cell in the row beneath its top-left
//! position, but the packer records only the top-left placement. Without a
//! marker there, the navigator's row scans would see a navigable gap. This
//! pass appends one phantom cell per tall tile and re-sorts the page so
//! index order matches visual row-major order.

use crate::page::{Page, PlacedTile};

/// Insert a placeholder beneath every two-row tile on the page, then sort
/// the page row-major. Placeholders never collide: the packer already
/// guaranteed the tall tile's own two-row footprint was clear.
pub fn inject_placeholders(page: &mut Page, cols: usize) {
    let placeholders: Vec<PlacedTile> = page
        .cells
        .iter()
        .filter(|c| c.height == 2 && !c.is_placeholder())
        .map(PlacedTile::placeholder_below)
        .collect();
    page.cells.extend(placeholders);
    page.sort_row_major(cols);
}
