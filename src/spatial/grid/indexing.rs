use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) { (self.cols, self.rows) }

    #[inline]
    pub fn cell_count(&self) -> usize { self.cols * self.rows }

    #[inline]
    pub fn capacity(&self) -> usize { self.capacity }

    #[inline]
    pub fn world_size(&self) -> Vec2 { self.world }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );
        y * self.cols + x
    }

    /// Cell holding `position`: `floor(p * dims / world)`, clamped into the
    /// grid. Negative and NaN coordinates land in column/row 0.
    #[inline]
    pub fn cell_coords(&self, position: Vec2) -> (usize, usize) {
        let fx = (position.x * self.cols as f32 / self.world.x).floor();
        let fy = (position.y * self.rows as f32 / self.world.y).floor();
        // float -> usize casts saturate
        let x = (fx as usize).min(self.cols - 1);
        let y = (fy as usize).min(self.rows - 1);
        (x, y)
    }

    #[inline]
    pub fn cell_index(&self, position: Vec2) -> usize {
        let (x, y) = self.cell_coords(position);
        self.index(x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < self.cols && y >= 0 && (y as usize) < self.rows
    }

    /// Flat slot span covering rows `y` and `y + 1` (the rows a striped
    /// task for row `y` may touch)
    #[inline]
    pub fn row_pair_slots(&self, y: usize) -> Range<usize> {
        let stride = self.cols * self.capacity;
        let end_row = (y + 2).min(self.rows);
        y * stride..end_row * stride
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_world_positions_are_clamped() {
        let grid = Grid::new(Vec2::new(100.0, 100.0), 2.0, 4).expect("valid grid");
        assert_eq!(grid.cell_coords(Vec2::new(-5.0, -1.0)), (0, 0));
        assert_eq!(grid.cell_coords(Vec2::new(100.0, 100.0)), (49, 49));
        assert_eq!(grid.cell_coords(Vec2::new(1.0e9, 3.0)), (49, 1));
        assert_eq!(grid.cell_coords(Vec2::new(f32::NAN, 3.0)), (0, 1));
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(Vec2::new(100.0, 60.0), 2.0, 4).expect("valid grid");
        assert_eq!(grid.dimensions(), (50, 30));
        let cell = grid.index(7, 3);
        assert_eq!(cell, 157);
        assert!(grid.in_bounds(49, 29));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, 30));
    }

    #[test]
    fn row_pair_span_stops_at_last_row() {
        let grid = Grid::new(Vec2::new(20.0, 20.0), 2.0, 4).expect("valid grid");
        // 10x10 cells, 40 slots per row
        assert_eq!(grid.row_pair_slots(0), 0..80);
        assert_eq!(grid.row_pair_slots(9), 360..400);
    }
}
