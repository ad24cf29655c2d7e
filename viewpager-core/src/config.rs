//! Pager options.
//!
//! ```
//! use std::time::Duration;
//! use viewpager_core::{PagerConfig, px::Px};
//!
//! let config = PagerConfig::default()
//!     .max_delta_time_for_slide_leave(Duration::from_millis(200))
//!     .min_pixels_to_start_move(Px(8))
//!     .hide_indicator(true);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use derive_setters::Setters;

use crate::{error::ConfigError, history::DEFAULT_HISTORY_CAPACITY, px::Px};

const DEFAULT_MAX_DELTA_TIME_FOR_SLIDE_LEAVE: Duration = Duration::from_millis(150);
const DEFAULT_MIN_DELTA_PIXELS_FOR_SLIDE_ACCELERATION: Px = Px(3);
const DEFAULT_MIN_PIXELS_TO_START_MOVE: Px = Px(5);
const DEFAULT_STEP_PIXELS: Px = Px(50);
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(15);
const DEFAULT_MIN_DELTA_TO_POSITION: Px = Px(9);

/// Fixed-step slide animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationConfig {
    /// Pixels moved per tick.
    pub step_pixels: Px,
    /// Time between ticks.
    pub tick_interval: Duration,
    /// Distance at which the animation snaps straight to its destination.
    pub min_delta_to_position: Px,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_pixels: DEFAULT_STEP_PIXELS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            min_delta_to_position: DEFAULT_MIN_DELTA_TO_POSITION,
        }
    }
}

/// Configuration of a [`ViewPagerCore`](crate::ViewPagerCore).
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Longest gesture window that still counts as a fling.
    pub max_delta_time_for_slide_leave: Duration,
    /// Net horizontal travel across the history window needed for a fling.
    pub min_delta_pixels_for_slide_acceleration: Px,
    /// Travel from the first sample needed before the axis lock is decided.
    pub min_pixels_to_start_move: Px,
    /// Extra margin around the viewport inside which moves are still tracked.
    pub leave_radius: Px,
    /// Number of recent pointer samples kept per gesture.
    pub history_capacity: usize,
    /// Hide the page-count indicator.
    pub hide_indicator: bool,
    /// Ask the host to suppress native handling of pointer-down.
    pub prevent_defaults: bool,
    /// Settle and navigation animation.
    pub animation: AnimationConfig,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            max_delta_time_for_slide_leave: DEFAULT_MAX_DELTA_TIME_FOR_SLIDE_LEAVE,
            min_delta_pixels_for_slide_acceleration:
                DEFAULT_MIN_DELTA_PIXELS_FOR_SLIDE_ACCELERATION,
            min_pixels_to_start_move: DEFAULT_MIN_PIXELS_TO_START_MOVE,
            leave_radius: Px::ZERO,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            hide_indicator: false,
            prevent_defaults: false,
            animation: AnimationConfig::default(),
        }
    }
}

impl PagerConfig {
    /// Checks the options for values the pager cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if self.animation.step_pixels <= Px::ZERO {
            return Err(ConfigError::NonPositiveStep(self.animation.step_pixels.raw()));
        }
        if self.animation.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        let thresholds = [
            (
                "min_delta_pixels_for_slide_acceleration",
                self.min_delta_pixels_for_slide_acceleration,
            ),
            ("min_pixels_to_start_move", self.min_pixels_to_start_move),
            ("leave_radius", self.leave_radius),
            (
                "min_delta_to_position",
                self.animation.min_delta_to_position,
            ),
        ];
        for (name, value) in thresholds {
            if value < Px::ZERO {
                return Err(ConfigError::NegativeThreshold {
                    name,
                    value: value.raw(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = PagerConfig::default();
        assert_eq!(
            config.max_delta_time_for_slide_leave,
            Duration::from_millis(150)
        );
        assert_eq!(config.min_delta_pixels_for_slide_acceleration, Px(3));
        assert_eq!(config.min_pixels_to_start_move, Px(5));
        assert_eq!(config.leave_radius, Px(0));
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.animation.step_pixels, Px(50));
        assert_eq!(config.animation.tick_interval, Duration::from_millis(15));
        assert_eq!(config.animation.min_delta_to_position, Px(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = PagerConfig::default().history_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroHistoryCapacity));
    }

    #[test]
    fn degenerate_animation_is_rejected() {
        let config =
            PagerConfig::default().animation(AnimationConfig::default().step_pixels(Px(0)));
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveStep(0)));

        let config = PagerConfig::default()
            .animation(AnimationConfig::default().tick_interval(Duration::ZERO));
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn negative_thresholds_are_rejected() {
        let config = PagerConfig::default().leave_radius(Px(-1));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeThreshold {
                name: "leave_radius",
                value: -1,
            })
        );
    }
}
