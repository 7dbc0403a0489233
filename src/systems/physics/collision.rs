use crate::domain::{Particle, ParticleId};
use crate::spatial::Grid;

use super::contact::ContactResolver;

/// Counters from one collision pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Pairs that actually overlapped and were pushed apart
    pub contacts: u32,
    /// Particles the broad phase could not register (full cells)
    pub overflows: u32,
}

/// Broad phase: clear the grid and register every particle by its center.
/// Returns how many particles were refused by full cells.
pub fn populate(grid: &mut Grid, particles: &[Particle]) -> u32 {
    grid.clear();
    for (id, p) in particles.iter().enumerate() {
        // refused ids are tallied by the grid
        let _ = grid.insert(p.position, id as ParticleId);
    }
    grid.overflow_count()
}

/// Narrow phase over the whole grid, row by row, correcting in place
pub fn resolve_contacts(grid: &Grid, particles: &mut [Particle], resolver: &ContactResolver) -> u32 {
    let mut contacts = 0u32;
    grid.for_each_pair(|a, b| {
        let ia = grid.slot_id(a) as usize;
        let ib = grid.slot_id(b) as usize;
        if resolver.resolve(particles, ia, ib) {
            contacts += 1;
        }
    });
    contacts
}

/// One full sequential collision pass
pub fn solve_collisions(grid: &mut Grid, particles: &mut [Particle], resolver: &ContactResolver) -> CollisionStats {
    let overflows = populate(grid, particles);
    let contacts = resolve_contacts(grid, particles, resolver);
    CollisionStats { contacts, overflows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;

    fn grid_20() -> Grid {
        Grid::new(Vec2::new(20.0, 20.0), 2.0, 4).expect("valid grid")
    }

    #[test]
    fn neighbours_across_cell_border_are_resolved() {
        let mut grid = grid_20();
        let resolver = ContactResolver::new(1.0, 1.0);
        // cells (1,1) and (2,2), overlapping diagonally
        let mut particles = vec![
            Particle::at(Vec2::new(3.9, 3.9)),
            Particle::at(Vec2::new(4.1, 4.1)),
        ];
        let stats = solve_collisions(&mut grid, &mut particles, &resolver);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.overflows, 0);
        let d = particles[0].position.distance(particles[1].position);
        assert!((d - 2.0).abs() < 1e-4);
    }

    #[test]
    fn non_adjacent_cells_are_never_tested() {
        let mut grid = grid_20();
        // radius 3 makes these overlap geometrically, but the grid is
        // sized for diameter 2 so they sit two cells apart
        let resolver = ContactResolver::new(3.0, 1.0);
        let mut particles = vec![
            Particle::at(Vec2::new(1.0, 1.0)),
            Particle::at(Vec2::new(5.0, 1.0)),
        ];
        let stats = solve_collisions(&mut grid, &mut particles, &resolver);
        assert_eq!(stats.contacts, 0);
        assert_eq!(particles[0].position, Vec2::new(1.0, 1.0));
        assert_eq!(particles[1].position, Vec2::new(5.0, 1.0));
    }

    #[test]
    fn full_cells_are_reported_as_overflow() {
        let mut grid = grid_20();
        let resolver = ContactResolver::new(1.0, 1.0);
        let mut particles: Vec<Particle> = (0..6)
            .map(|i| Particle::at(Vec2::new(10.2 + i as f32 * 0.1, 10.5)))
            .collect();
        let stats = solve_collisions(&mut grid, &mut particles, &resolver);
        assert_eq!(stats.overflows, 2);
        assert!(stats.contacts > 0);
    }
}
