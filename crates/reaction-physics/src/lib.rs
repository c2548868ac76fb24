//! # Reaction Physics
//!
//! Pure particle math for the 2D reaction simulation: the particle record,
//! the element/fundamental species catalogs, the static reaction table, and
//! the pairwise merge/scatter/separation math. Everything here is free of
//! simulation state; the mutable engine lives in `reaction-simulation`.

pub mod catalog;
pub mod collision;
pub mod constants;
pub mod particle;

pub use catalog::*;
pub use collision::*;
pub use constants::*;
pub use particle::*;
