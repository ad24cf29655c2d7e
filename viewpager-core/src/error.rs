//! Errors reported when a pager configuration is rejected.

use thiserror::Error;

/// Rejected pager configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The pointer history must retain at least one sample.
    #[error("pointer history capacity must be at least 1")]
    ZeroHistoryCapacity,
    /// A slide animation that moves zero pixels per tick never finishes.
    #[error("animation step must be positive, got {0}px")]
    NonPositiveStep(i32),
    /// The animation tick needs a non-zero period.
    #[error("animation tick interval must be non-zero")]
    ZeroTickInterval,
    /// Pixel thresholds are distances and cannot be negative.
    #[error("`{name}` must not be negative, got {value}px")]
    NegativeThreshold {
        /// Name of the offending option.
        name: &'static str,
        /// Value supplied by the caller.
        value: i32,
    },
}
