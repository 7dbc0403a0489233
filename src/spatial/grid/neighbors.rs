//! Candidate pair enumeration for the narrow phase
//!
//! Each cell is tested against itself and its four forward neighbours.
//! The backward half (left, up, up-left, up-right) is covered when those
//! cells visit us, so every 8-connected cell pair is visited exactly once.
//! A pass over row `y` only reads rows `y` and `y + 1`.

use super::*;

/// (dx, dy) of the forward neighbours: right, down-left, down, down-right
pub const FORWARD_NEIGHBORS: [(isize, usize); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

impl Grid {
    /// Call `visit(a, b)` with the flat slot indices of every candidate pair
    /// owned by row `y`.
    pub fn for_each_row_pair<F: FnMut(usize, usize)>(&self, y: usize, mut visit: F) {
        for x in 0..self.cols {
            let here = self.cell_slots(self.index(x, y));
            if here.is_empty() {
                continue;
            }

            for a in here.clone() {
                for b in (a + 1)..here.end {
                    visit(a, b);
                }
            }

            for &(dx, dy) in FORWARD_NEIGHBORS.iter() {
                let nx = x as isize + dx;
                let ny = y + dy;
                if !self.in_bounds(nx, ny as isize) {
                    continue;
                }
                let other = self.cell_slots(self.index(nx as usize, ny));
                for a in here.clone() {
                    for b in other.clone() {
                        visit(a, b);
                    }
                }
            }
        }
    }

    /// Every candidate pair in the grid, row by row
    pub fn for_each_pair<F: FnMut(usize, usize)>(&self, mut visit: F) {
        for y in 0..self.rows {
            self.for_each_row_pair(y, &mut visit);
        }
    }
}
