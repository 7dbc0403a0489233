//! Grid - uniform broad-phase bucket grid
//!
//! Cells are `diameter` wide, so two overlapping circles always sit in the
//! same or 8-adjacent cells. Storage is a flat slot arena:
//!
//!   slots[cell * capacity .. cell * capacity + len(cell)]  -> particle ids
//!
//! Per-cell counts are atomic so the grid can be filled through `&Grid`
//! from many threads at once. A count may run past `capacity`; the extra
//! inserts are refused and tallied in `overflow_count`.

use std::ops::Range;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::core::Vec2;
use crate::domain::config::{check_geometry, grid_dimensions};
use crate::domain::{CellOverflow, ConfigError, ParticleId};

mod indexing;
mod neighbors;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use neighbors::FORWARD_NEIGHBORS;

pub struct Grid {
    cols: usize,
    rows: usize,
    capacity: usize,
    world: Vec2,

    counts: Vec<AtomicU32>,   // attempted inserts per cell (may exceed capacity)
    slots: Vec<AtomicU32>,    // cols * rows * capacity particle ids
    overflows: AtomicU32,     // refused inserts since last clear
}

impl Grid {
    /// Grid covering `world` with cells `diameter` wide
    pub fn new(world: Vec2, diameter: f32, capacity: usize) -> Result<Self, ConfigError> {
        check_geometry(world, diameter, capacity)?;
        let (cols, rows) = grid_dimensions(world, diameter);
        let cells = cols * rows;

        log::debug!(
            "grid: {}x{} cells, capacity {}, {} slots",
            cols,
            rows,
            capacity,
            cells * capacity
        );

        Ok(Self {
            cols,
            rows,
            capacity,
            world,
            counts: (0..cells).map(|_| AtomicU32::new(0)).collect(),
            slots: (0..cells * capacity).map(|_| AtomicU32::new(0)).collect(),
            overflows: AtomicU32::new(0),
        })
    }

    /// Empty every cell. O(cells), slot contents are left stale.
    pub fn clear(&mut self) {
        for count in self.counts.iter_mut() {
            *count.get_mut() = 0;
        }
        *self.overflows.get_mut() = 0;
    }

    #[cfg(feature = "parallel")]
    pub fn par_clear(&mut self) {
        self.counts.par_iter_mut().for_each(|count| *count.get_mut() = 0);
        *self.overflows.get_mut() = 0;
    }

    /// Register `id` in the cell containing `position`.
    ///
    /// Safe to call concurrently. A full cell refuses the id and bumps the
    /// overflow counter.
    #[inline]
    pub fn insert(&self, position: Vec2, id: ParticleId) -> Result<(), CellOverflow> {
        let cell = self.cell_index(position);
        let slot = self.counts[cell].fetch_add(1, Ordering::Relaxed) as usize;
        if slot < self.capacity {
            self.slots[cell * self.capacity + slot].store(id, Ordering::Relaxed);
            Ok(())
        } else {
            self.overflows.fetch_add(1, Ordering::Relaxed);
            Err(CellOverflow {
                cell,
                id,
                capacity: self.capacity,
            })
        }
    }

    /// Number of ids actually stored in `cell`
    #[inline]
    pub fn cell_len(&self, cell: usize) -> usize {
        (self.counts[cell].load(Ordering::Relaxed) as usize).min(self.capacity)
    }

    /// Flat slot range holding the ids of `cell`
    #[inline]
    pub fn cell_slots(&self, cell: usize) -> Range<usize> {
        let start = cell * self.capacity;
        start..start + self.cell_len(cell)
    }

    /// Particle id stored in a flat slot
    #[inline]
    pub fn slot_id(&self, slot: usize) -> ParticleId {
        self.slots[slot].load(Ordering::Relaxed)
    }

    pub fn cell_ids(&self, cell: usize) -> impl Iterator<Item = ParticleId> + '_ {
        self.cell_slots(cell).map(move |slot| self.slot_id(slot))
    }

    /// Refused inserts since the last `clear`
    pub fn overflow_count(&self) -> u32 {
        self.overflows.load(Ordering::Relaxed)
    }

    /// Ids currently stored across all cells
    pub fn occupied(&self) -> usize {
        (0..self.cell_count()).map(|c| self.cell_len(c)).sum()
    }

    /// Most ids stored in a single cell
    pub fn max_occupancy(&self) -> usize {
        (0..self.cell_count()).map(|c| self.cell_len(c)).max().unwrap_or(0)
    }
}
