//! Transient occupancy mask used while packing a single page.
//!
//! One mask exists per page under construction and is discarded once the
//! page is closed.

use crate::GridSpec;

#[derive(Debug, Clone)]
pub(crate) struct OccupancyMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyMask {
    pub(crate) fn new(spec: &GridSpec) -> Self {
        Self {
            rows: spec.rows,
            cols: spec.cols,
            cells: vec![false; spec.rows * spec.cols],
        }
    }

    fn occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// First top-left cell (row-major scan) where a w x h footprint lies
    /// entirely in bounds over unoccupied cells.
    pub(crate) fn find_fit(&self, w: usize, h: usize) -> Option<(usize, usize)> {
        if w == 0 || h == 0 || w > self.cols || h > self.rows {
            return None;
        }
        for row in 0..=(self.rows - h) {
            for col in 0..=(self.cols - w) {
                let clear = (0..h).all(|dr| (0..w).all(|dc| !self.occupied(row + dr, col + dc)));
                if clear {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Mark a footprint occupied. Caller guarantees bounds (from
    /// `find_fit`).
    pub(crate) fn occupy(&mut self, row: usize, col: usize, w: usize, h: usize) {
        for dr in 0..h {
            for dc in 0..w {
                self.cells[(row + dr) * self.cols + col + dc] = true;
            }
        }
    }
}
