use thiserror::Error;

/// Rejected solver configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("radius must be finite and > 0, got {0}")]
    InvalidRadius(f32),

    #[error("world size must be finite and > 0, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    /// The clamp range `[diameter, world - diameter]` would be empty, or the
    /// grid would have no cells.
    #[error("world {width}x{height} is too small for particles of diameter {diameter}")]
    WorldTooSmall { width: f32, height: f32, diameter: f32 },

    #[error("sub_steps must be >= 1")]
    ZeroSubSteps,

    #[error("response coefficient must be in (0, 1], got {0}")]
    InvalidResponseCoef(f32),

    #[error("friction must be finite and >= 0, got {0}")]
    InvalidFriction(f32),

    #[error("gravity must be finite, got ({x}, {y})")]
    InvalidGravity { x: f32, y: f32 },

    #[error("cell capacity must be >= 1")]
    ZeroCellCapacity,

    #[error("grid of {cols}x{rows} cells with capacity {capacity} is too large")]
    GridTooLarge { cols: usize, rows: usize, capacity: usize },

    #[error("invalid config json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e.to_string())
    }
}

/// A grid cell was already full; the particle was not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {cell} is full (capacity {capacity}), particle {id} dropped")]
pub struct CellOverflow {
    pub cell: usize,
    pub id: u32,
    pub capacity: usize,
}
