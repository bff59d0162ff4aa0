//! Error types for simulation configuration.
//!
//! A tick itself cannot fail; only parameter sets can be rejected before a
//! flock is seeded from them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("domain {axis} must be positive, got {value}")]
    NonPositiveDimension { axis: &'static str, value: f32 },

    #[error("boundary margin must not be negative, got {0}")]
    NegativeMargin(f32),

    #[error("max speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    #[error("max force must be positive, got {0}")]
    NonPositiveForce(f32),

    #[error("initial speed must not be negative, got {0}")]
    NegativeInitialSpeed(f32),

    #[error("perception radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("{rule} weight must be finite, got {value}")]
    NonFiniteWeight { rule: &'static str, value: f32 },

    #[error("tick rate must be positive")]
    ZeroTickRate,
}
