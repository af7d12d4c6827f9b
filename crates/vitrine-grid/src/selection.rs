//! Selection and page state.
//!
//! The single source of truth for "what is selected, which page is
//! visible". Mutated only by navigator outcomes, direct-select events, and
//! the corrective reset applied when the catalog shrinks.

use vitrine_types::TileId;

/// Selected tile id plus visible page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected: TileId,
    pub page: usize,
}

impl SelectionState {
    /// Direct selection (pointer click / confirm target). Click targets
    /// are always on the visible page, so the page index stays put.
    pub fn select(&mut self, id: TileId) {
        self.selected = id;
    }

    /// Reset to the first tile on the first page if the selected id no
    /// longer references a catalog tile. Returns true when a reset
    /// happened.
    pub fn ensure_valid(&mut self, tile_count: usize) -> bool {
        if tile_count > 0 && self.selected >= tile_count {
            log::info!(
                "Selected tile {} no longer exists, resetting to start",
                self.selected
            );
            *self = SelectionState::default();
            return true;
        }
        false
    }
}
