//! # Reaction Simulation Engine
//!
//! Single-threaded tick engine over the `reaction-physics` primitives:
//! particle store, motion integration, the pairwise merge/scatter pass,
//! cooperative decay/replenish timers, and copy-out snapshots for readers.

pub mod collide;
pub mod decay;
pub mod error;
pub mod motion;
pub mod params;
pub mod simulation;
pub mod snapshot;
pub mod store;

pub use collide::*;
pub use decay::*;
pub use error::*;
pub use motion::*;
pub use params::*;
pub use simulation::*;
pub use snapshot::*;
pub use store::*;
