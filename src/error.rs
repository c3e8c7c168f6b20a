//! Configuration errors.
//!
//! Every parameter is checked once, when a sampler, motion field or engine is
//! built. Nothing in the per-frame path returns an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("minimum distance must be finite and positive, got {0}")]
    InvalidMinDistance(f32),

    #[error("point budget must be at least 1")]
    ZeroPoints,

    #[error("item count must be at least 1")]
    ZeroCount,

    #[error("candidate attempts per base point must be at least 1")]
    ZeroAttempts,

    #[error("sampling grid of {cells} cells exceeds the limit of {limit}")]
    GridTooLarge { cells: usize, limit: usize },

    #[error("spacing spread must be finite and positive, got {0}")]
    InvalidSpread(f32),

    #[error("item count {count} exceeds the limit of {limit}")]
    TooManyItems { count: usize, limit: usize },

    #[error("placement margin {margin} and clear band {clear_band} leave no room to place items")]
    InvalidPlacement { margin: f32, clear_band: f32 },

    #[error("repel radius must be finite and positive, got {0}")]
    InvalidRepelRadius(f32),

    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    #[error("ease factor must be in (0, 1], got {0}")]
    InvalidEaseFactor(f32),

    #[error("ease factor times speed must not exceed 1, got {0}")]
    EaseStepTooLarge(f32),

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}
