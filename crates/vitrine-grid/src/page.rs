//! Pages and placed tiles.
//!
//! A page holds one screen's worth of cells: real tiles plus the
//! placeholders synthesized beneath two-row tiles. Placeholders carry the
//! owning tile's id, so any cell a navigation lands on resolves to a real
//! tile.

use vitrine_types::{Tile, TileId};

/// A tile (or placeholder) positioned on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    /// Owning real tile id. For a placeholder this is the id of the tile
    /// it sits beneath.
    pub id: TileId,
    pub width: usize,
    pub height: usize,
    /// Row within the page, 0-indexed.
    pub row: usize,
    /// Column within the page, 0-indexed.
    pub col: usize,
    /// Set on placeholders only; back-reference, not ownership.
    pub placeholder_for: Option<TileId>,
}

impl PlacedTile {
    /// Place a real tile at a grid position.
    pub fn real(tile: &Tile, row: usize, col: usize) -> Self {
        Self {
            id: tile.id,
            width: tile.width,
            height: tile.height,
            row,
            col,
            placeholder_for: None,
        }
    }

    /// Synthesize the phantom cell directly beneath a two-row tile.
    pub fn placeholder_below(owner: &PlacedTile) -> Self {
        Self {
            id: owner.id,
            width: owner.width,
            height: 1,
            row: owner.row + 1,
            col: owner.col,
            placeholder_for: Some(owner.id),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder_for.is_some()
    }
}

/// One screen's worth of cells, kept in row-major order once placeholders
/// are injected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub cells: Vec<PlacedTile>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells that are real tiles, in cell order.
    pub fn real_tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.cells.iter().filter(|c| !c.is_placeholder())
    }

    pub fn first_real(&self) -> Option<&PlacedTile> {
        self.real_tiles().next()
    }

    pub fn last_real(&self) -> Option<&PlacedTile> {
        self.real_tiles().last()
    }

    /// Index of the first cell owned by `id`. For a two-row tile this is
    /// the tile's own cell, since its placeholder sorts after it.
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.cells.iter().position(|c| c.id == id)
    }

    /// Total occupied cells, counting real tile footprints only.
    pub fn real_area(&self) -> usize {
        self.real_tiles().map(|c| c.width * c.height).sum()
    }

    /// Sort cells so index order matches visual row-major order. The
    /// navigator's row/column arithmetic depends on this ordering.
    pub fn sort_row_major(&mut self, cols: usize) {
        self.cells.sort_by_key(|c| c.row * cols + c.col);
    }
}
