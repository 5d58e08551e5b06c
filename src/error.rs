use thiserror::Error;

/// Errors raised at the boundary of the kernel: configuration, course setup
/// and the column shuffle. The collision functions themselves never fail.
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("coefficient of restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f32),
    #[error("friction coefficient must be non-negative and finite, got {0}")]
    InvalidFriction(f32),
    #[error("{0} has a non-finite coordinate")]
    NonFinite(&'static str),
    #[error("playfield bounds enclose no area")]
    EmptyBounds,
    #[error("column {column} has length {found}, expected {expected}")]
    LengthMismatch {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("no ball with index {0}")]
    UnknownBall(usize),
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}
