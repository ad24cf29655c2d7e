//! Pointer input as seen by the pager.
//!
//! The host converts its native mouse and touch events into [`PointerEvent`]s.
//! Every accepted event becomes an immutable [`PointerSample`] that the
//! gesture controller records in its history.

use std::time::Duration;

use crate::px::{Px, PxPosition};

/// Which kind of device produced a pointer event.
///
/// Only one kind is tracked per gesture so hybrid devices that emit both a
/// touch and a synthesized mouse event are not handled twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad cursor.
    Mouse,
    /// A single touch point.
    Touch,
}

/// Device tag attached to a raw host event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Mouse input.
    Mouse,
    /// Touch input, carrying the position of the first touch point.
    Touch,
    /// Anything the host could not classify. Such events are dropped.
    Unrecognized,
}

impl PointerSource {
    /// Returns the pointer kind, or `None` for unrecognized sources.
    pub fn kind(self) -> Option<PointerKind> {
        match self {
            Self::Mouse => Some(PointerKind::Mouse),
            Self::Touch => Some(PointerKind::Touch),
            Self::Unrecognized => None,
        }
    }
}

/// A pointer event delivered by the host.
///
/// `timestamp` is measured from any fixed epoch the host chooses, as long as it
/// is monotonic for the lifetime of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Device that produced the event.
    pub source: PointerSource,
    /// Pointer location in viewport-relative physical pixels.
    pub position: PxPosition,
    /// When the event happened.
    pub timestamp: Duration,
}

impl PointerEvent {
    /// Creates a mouse event.
    pub fn mouse(position: impl Into<PxPosition>, timestamp: Duration) -> Self {
        Self {
            source: PointerSource::Mouse,
            position: position.into(),
            timestamp,
        }
    }

    /// Creates a touch event.
    pub fn touch(position: impl Into<PxPosition>, timestamp: Duration) -> Self {
        Self {
            source: PointerSource::Touch,
            position: position.into(),
            timestamp,
        }
    }

    /// Converts the event into a sample, dropping unrecognized sources.
    pub fn sample(&self) -> Option<PointerSample> {
        self.source.kind()?;
        Some(PointerSample::new(self.position, self.timestamp))
    }
}

/// An immutable pointer reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    position: PxPosition,
    captured_at: Duration,
}

impl PointerSample {
    /// Creates a sample at `position` captured at `captured_at`.
    pub fn new(position: impl Into<PxPosition>, captured_at: Duration) -> Self {
        Self {
            position: position.into(),
            captured_at,
        }
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> Px {
        self.position.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> Px {
        self.position.y
    }

    /// Full position.
    pub fn position(&self) -> PxPosition {
        self.position
    }

    /// Capture timestamp.
    pub fn captured_at(&self) -> Duration {
        self.captured_at
    }

    /// Vector from `self` to `other`, i.e. `other - self`.
    pub fn delta_to(&self, other: &PointerSample) -> PxPosition {
        other.position - self.position
    }

    /// Absolute time between two samples, regardless of their order.
    pub fn elapsed_between(&self, other: &PointerSample) -> Duration {
        self.captured_at.abs_diff(other.captured_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn unrecognized_events_produce_no_sample() {
        let event = PointerEvent {
            source: PointerSource::Unrecognized,
            position: PxPosition::ZERO,
            timestamp: ms(0),
        };
        assert_eq!(event.sample(), None);
    }

    #[test]
    fn mouse_and_touch_events_produce_samples() {
        let mouse = PointerEvent::mouse([10, 20], ms(5));
        let touch = PointerEvent::touch([30, 40], ms(6));

        assert_eq!(mouse.sample(), Some(PointerSample::new([10, 20], ms(5))));
        assert_eq!(touch.sample(), Some(PointerSample::new([30, 40], ms(6))));
    }

    #[test]
    fn delta_points_from_self_to_other() {
        let a = PointerSample::new([100, 50], ms(0));
        let b = PointerSample::new([70, 55], ms(10));

        assert_eq!(a.delta_to(&b), PxPosition::from([-30, 5]));
        assert_eq!(b.delta_to(&a), PxPosition::from([30, -5]));
    }

    #[test]
    fn elapsed_is_absolute() {
        let early = PointerSample::new([0, 0], ms(20));
        let late = PointerSample::new([0, 0], ms(170));

        assert_eq!(early.elapsed_between(&late), ms(150));
        assert_eq!(late.elapsed_between(&early), ms(150));
    }
}
