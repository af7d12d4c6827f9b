//! Viewport sizing helpers.
//!
//! Display-only arithmetic: the viewport width feeds pixel sizing for the
//! renderer but never changes the column count, which is fixed by the
//! layout rule.

use crate::GRID_COLS;

/// Column count for a viewport. Fixed at four regardless of width.
pub fn columns_for_viewport(_viewport_width: u32) -> usize {
    GRID_COLS
}

/// Square tile edge in pixels for the given viewport, after removing page
/// padding (both sides) and the gaps between columns. Floored to avoid
/// sub-pixel sizes.
pub fn tile_size_px(viewport_width: u32, cols: usize, gap: u32, page_padding: u32) -> u32 {
    if cols == 0 {
        return 0;
    }
    let available = viewport_width.saturating_sub(2 * page_padding);
    let gaps = gap.saturating_mul(cols.saturating_sub(1) as u32);
    available.saturating_sub(gaps) / cols as u32
}
