use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation engine.
///
/// Geometry problems and missing reaction entries are not errors (the former
/// are guarded per pair, the latter mean "no reaction"); what remains is bad
/// configuration and resource limits. None of these should ever terminate a
/// running simulation: capacity and placement failures are reported to the
/// caller, logged, and recovered.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The particle store is at its configured limit.
    #[error("particle capacity exceeded: limit is {limit}")]
    CapacityExceeded { limit: usize },

    /// No non-overlapping position could be found within the attempt budget.
    #[error("failed to place particle: {0}")]
    PlacementFailed(String),

    /// Particle construction refused the requested parameters.
    #[error(transparent)]
    Particle(#[from] reaction_physics::ParticleError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::CapacityExceeded { limit: 128 };
        let msg = format!("{e}");
        assert!(msg.contains("capacity"));
        assert!(msg.contains("128"));
    }
}
