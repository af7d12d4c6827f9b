//! Directional navigation across the paginated grid.
//!
//! Pure resolution: `(state, pages, direction) -> state'`. The shell owns
//! the one live `SelectionState` and applies outcomes. All arithmetic
//! happens on the index of the selection within the current page's
//! row-major-sorted cell vec (`row = idx / cols`, `col = idx % cols`);
//! placeholders count as occupied cells but every landing resolves to the
//! owning real tile's id.
//!
//! Horizontal moves wrap between pages; vertical moves never leave the
//! page.

use vitrine_types::{Direction, TileId};

use crate::page::Page;
use crate::selection::SelectionState;

/// Result of resolving one directional command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    pub state: SelectionState,
    /// True only when the selected tile actually changed; this is what
    /// gates the audible navigation cue.
    pub moved: bool,
}

impl NavOutcome {
    fn unchanged(state: SelectionState) -> Self {
        Self {
            state,
            moved: false,
        }
    }
}

/// Resolve one directional command against the placeholder-injected,
/// row-major-sorted page list. No tiles, an out-of-range page, or a
/// selection absent from the current page all resolve to a no-op.
pub fn navigate(
    direction: Direction,
    state: SelectionState,
    pages: &[Page],
    cols: usize,
) -> NavOutcome {
    if pages.is_empty() || cols == 0 {
        return NavOutcome::unchanged(state);
    }
    let page_index = state.page;
    let Some(page) = pages.get(page_index) else {
        return NavOutcome::unchanged(state);
    };
    let Some(idx) = page.index_of(state.selected) else {
        return NavOutcome::unchanged(state);
    };
    let row = idx / cols;
    let col = idx % cols;

    let mut next = state;
    match direction {
        Direction::Left => {
            if col > 0 {
                if let Some(cell) = page.cells.get(idx - 1) {
                    next.selected = cell.id;
                }
            } else {
                // Grid edge: wrap to the previous page, landing on the
                // last occupied cell of the same row (or the last cell
                // overall if that row is empty there).
                next.page = (page_index + pages.len() - 1) % pages.len();
                let target = &pages[next.page];
                if let Some(id) = last_in_row(target, row, cols) {
                    next.selected = id;
                } else if let Some(cell) = target.cells.last() {
                    next.selected = cell.id;
                }
            }
        },
        Direction::Right => {
            let at_edge = col + 1 >= cols;
            let target_idx = idx + 1;
            let right_spot_empty = target_idx >= page.len();
            let on_last_real = page
                .last_real()
                .is_some_and(|cell| cell.id == state.selected);
            let is_last_page = page_index + 1 == pages.len();

            if is_last_page && on_last_real && (at_edge || right_spot_empty) {
                // Global wraparound: back to the very first page.
                next.page = 0;
                if let Some(id) = first_real_in_row(&pages[0], row, cols) {
                    next.selected = id;
                }
            } else if at_edge {
                next.page = (page_index + 1) % pages.len();
                if let Some(id) = first_real_in_row(&pages[next.page], row, cols) {
                    next.selected = id;
                }
            } else if !right_spot_empty {
                next.selected = page.cells[target_idx].id;
            }
        },
        Direction::Up => {
            if idx >= cols
                && let Some(cell) = page.cells.get(idx - cols)
            {
                next.selected = cell.id;
            }
        },
        Direction::Down => {
            let target_row = row + 1;
            let below: Vec<(usize, TileId)> = page
                .cells
                .iter()
                .enumerate()
                .filter(|(i, _)| i / cols == target_row)
                .map(|(i, cell)| (i, cell.id))
                .collect();
            if let Some(&(_, id)) = below.iter().find(|(i, _)| i % cols == col) {
                next.selected = id;
            } else if let Some(&(_, id)) = below.last() {
                // No same-column cell: fall back to the right-most
                // occupied cell of the row below.
                next.selected = id;
            }
        },
    }

    NavOutcome {
        moved: next.selected != state.selected,
        state: next,
    }
}

/// First real (non-placeholder) tile in the given index-row, falling back
/// to the first real tile on the page.
fn first_real_in_row(page: &Page, row: usize, cols: usize) -> Option<TileId> {
    page.cells
        .iter()
        .enumerate()
        .find(|(i, cell)| i / cols == row && !cell.is_placeholder())
        .map(|(_, cell)| cell.id)
        .or_else(|| page.first_real().map(|cell| cell.id))
}

/// Last occupied cell in the given index-row; placeholders count and
/// resolve to their owner.
fn last_in_row(page: &Page, row: usize, cols: usize) -> Option<TileId> {
    page.cells
        .iter()
        .enumerate()
        .filter(|(i, _)| i / cols == row)
        .map(|(_, cell)| cell.id)
        .last()
}
