//! Physics - contact resolution, broad/narrow phase and Verlet integration
//!
//! Pipeline for one sub-step:
//! 1. `populate`: clear the grid, register every particle by center
//! 2. `resolve_contacts`: push apart overlapping pairs from 3x3 neighbourhoods
//! 3. `Integrator`: gravity, damped Verlet move, wall clamp
//!
//! With the `parallel` feature each stage has a rayon counterpart
//! (concurrent inserts, row-striped waves, chunked integration).

mod collision;
mod contact;
mod integrate;
#[cfg(feature = "parallel")]
mod striping;

pub use collision::{populate, resolve_contacts, solve_collisions, CollisionStats};
pub use contact::{pair_mut, ContactResolver, COINCIDENT_EPSILON};
pub use integrate::Integrator;
#[cfg(feature = "parallel")]
pub use striping::{populate_parallel, resolve_contacts_striped, solve_collisions_parallel};
