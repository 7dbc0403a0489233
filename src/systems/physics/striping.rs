//! Row-striped parallel collision pass
//!
//! The task for row `y` touches cells in rows `y` and `y + 1` only. Running
//! all even rows, joining, then all odd rows means no two concurrent tasks
//! share a row, and since a particle lives in exactly one cell, no particle
//! is corrected from two threads. Each task resolves a private copy of its
//! row pair's positions and hands back a patch; patches are written after
//! the wave joins.

use rayon::prelude::*;

use crate::core::Vec2;
use crate::domain::{Particle, ParticleId};
use crate::spatial::Grid;

use super::collision::CollisionStats;
use super::contact::ContactResolver;

/// Resolved positions of one row pair
struct RowPatch {
    ids: Vec<ParticleId>,
    positions: Vec<Vec2>,
    contacts: u32,
}

/// Broad phase with concurrent inserts
pub fn populate_parallel(grid: &mut Grid, particles: &[Particle]) -> u32 {
    grid.par_clear();
    let shared: &Grid = grid;
    particles.par_iter().enumerate().for_each(|(id, p)| {
        let _ = shared.insert(p.position, id as ParticleId);
    });
    grid.overflow_count()
}

fn solve_row_pair(
    grid: &Grid,
    particles: &[Particle],
    resolver: &ContactResolver,
    y: usize,
    scratch: &mut Vec<Vec2>,
) -> RowPatch {
    let span = grid.row_pair_slots(y);
    let base = span.start;
    let end_row = (y + 2).min(grid.rows());

    scratch.clear();
    scratch.resize(span.len(), Vec2::ZERO);
    for row in y..end_row {
        for x in 0..grid.cols() {
            for slot in grid.cell_slots(grid.index(x, row)) {
                scratch[slot - base] = particles[grid.slot_id(slot) as usize].position;
            }
        }
    }

    let mut contacts = 0u32;
    grid.for_each_row_pair(y, |a, b| {
        if resolver.resolve_positions(&mut scratch[..], a - base, b - base) {
            contacts += 1;
        }
    });

    let mut patch = RowPatch {
        ids: Vec::new(),
        positions: Vec::new(),
        contacts,
    };
    if contacts == 0 {
        return patch;
    }
    for row in y..end_row {
        for x in 0..grid.cols() {
            for slot in grid.cell_slots(grid.index(x, row)) {
                patch.ids.push(grid.slot_id(slot));
                patch.positions.push(scratch[slot - base]);
            }
        }
    }
    patch
}

/// Narrow phase as two joined waves: even rows, then odd rows
pub fn resolve_contacts_striped(grid: &Grid, particles: &mut [Particle], resolver: &ContactResolver) -> u32 {
    let mut contacts = 0u32;
    for parity in 0..2 {
        let patches: Vec<RowPatch> = {
            let shared: &[Particle] = particles;
            (0..grid.rows())
                .into_par_iter()
                .filter(|y| y % 2 == parity)
                .map_init(Vec::new, |scratch, y| solve_row_pair(grid, shared, resolver, y, scratch))
                .collect()
        };

        for patch in patches {
            contacts += patch.contacts;
            for (&id, &position) in patch.ids.iter().zip(patch.positions.iter()) {
                particles[id as usize].position = position;
            }
        }
    }
    contacts
}

/// One full parallel collision pass
pub fn solve_collisions_parallel(
    grid: &mut Grid,
    particles: &mut [Particle],
    resolver: &ContactResolver,
) -> CollisionStats {
    let overflows = populate_parallel(grid, particles);
    let contacts = resolve_contacts_striped(grid, particles, resolver);
    CollisionStats { contacts, overflows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::collision::solve_collisions;

    fn pool() -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .expect("thread pool")
    }

    #[test]
    fn single_contact_matches_sequential_pass() {
        let resolver = ContactResolver::new(1.0, 1.0);
        let start = vec![
            Particle::at(Vec2::new(50.0, 50.0)),
            Particle::at(Vec2::new(50.0, 51.5)),
            Particle::at(Vec2::new(10.0, 10.0)),
        ];

        let mut seq = start.clone();
        let mut grid = Grid::new(Vec2::new(100.0, 100.0), 2.0, 4).expect("valid grid");
        let seq_stats = solve_collisions(&mut grid, &mut seq, &resolver);

        let mut par = start;
        let par_stats = pool().install(|| solve_collisions_parallel(&mut grid, &mut par, &resolver));

        assert_eq!(seq_stats, par_stats);
        assert_eq!(seq, par);
    }

    #[test]
    fn contacts_spanning_both_waves_are_resolved() {
        let resolver = ContactResolver::new(1.0, 1.0);
        let mut grid = Grid::new(Vec2::new(20.0, 20.0), 2.0, 4).expect("valid grid");
        // one pair per row boundary: rows (0,1), (1,2), (2,3)
        let mut particles = vec![
            Particle::at(Vec2::new(3.0, 1.9)),
            Particle::at(Vec2::new(3.0, 2.1)),
            Particle::at(Vec2::new(9.0, 3.9)),
            Particle::at(Vec2::new(9.0, 4.1)),
            Particle::at(Vec2::new(15.0, 5.9)),
            Particle::at(Vec2::new(15.0, 6.1)),
        ];
        let stats = pool().install(|| solve_collisions_parallel(&mut grid, &mut particles, &resolver));
        assert_eq!(stats.contacts, 3);
        for pair in particles.chunks(2) {
            let d = pair[0].position.distance(pair[1].position);
            assert!((d - 2.0).abs() < 1e-4, "pair distance {}", d);
        }
    }

    #[test]
    fn parallel_populate_counts_overflow() {
        let mut grid = Grid::new(Vec2::new(20.0, 20.0), 2.0, 2).expect("valid grid");
        let particles: Vec<Particle> = (0..5).map(|_| Particle::at(Vec2::new(5.0, 5.0))).collect();
        let overflows = pool().install(|| populate_parallel(&mut grid, &particles));
        assert_eq!(overflows, 3);
        assert_eq!(grid.occupied(), 2);
    }
}
