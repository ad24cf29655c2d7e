//! Interfaces the pager consumes from its host environment.
//!
//! The pager never touches a concrete rendering surface. A host implements
//! three small traits:
//!
//! - [`ViewportSurface`] exposes panel geometry and the horizontal scroll
//!   offset, which is the only thing the pager mutates.
//! - [`PointerBinder`] attaches and detaches the move listener for one pointer
//!   kind at a time.
//! - [`TickScheduler`] runs the repeating animation tick and cancels it by
//!   handle.
//!
//! Anything implementing all three is a [`PagerHost`].

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use crate::{
    layout::{PanelLayout, ReadingDirection},
    pointer::PointerKind,
    px::{Px, PxPosition},
};

/// Geometry and scroll state of the paged viewport.
pub trait ViewportSurface {
    /// Number of child panels.
    fn panel_count(&self) -> usize;

    /// Width of one page.
    fn viewport_width(&self) -> Px;

    /// Current horizontal scroll offset.
    fn scroll_offset(&self) -> Px;

    /// Moves the viewport to `offset`.
    fn set_scroll_offset(&mut self, offset: Px);

    /// Hit-tests `point` against the viewport bounds grown by `leave_radius`.
    fn is_point_inside_viewport(&self, point: PxPosition, leave_radius: Px) -> bool;

    /// Natural reading direction of the content.
    ///
    /// Right-to-left surfaces are expected to start scrolled to the end; one
    /// that reports a zero offset on first layout is treated as mirrored.
    fn reading_direction(&self) -> ReadingDirection {
        ReadingDirection::LeftToRight
    }

    /// Positions the panels. Called on first layout and on every resize.
    fn apply_panel_layout(&mut self, _layout: &PanelLayout) {}
}

/// Opaque identity of a pager's move listener.
///
/// A pager creates exactly one token and uses it both to bind and to unbind,
/// so hosts can key their listener tables on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

impl ListenerToken {
    /// Allocates a process-unique token.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw token value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Dynamic binding of pointer-move listeners.
pub trait PointerBinder {
    /// Starts delivering move events of `kind` for `token`.
    fn bind_move(&mut self, kind: PointerKind, token: ListenerToken);

    /// Stops delivering move events of every kind for `token`.
    fn unbind_move(&mut self, token: ListenerToken);
}

/// Handle of a scheduled repeating tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    /// Wraps a host-specific timer id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw timer id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Repeating timer used by the slide animation.
pub trait TickScheduler {
    /// Schedules a tick every `interval` until cancelled.
    ///
    /// The host calls [`ViewPagerCore::on_tick`](crate::ViewPagerCore::on_tick)
    /// with the returned handle each time it fires.
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle;

    /// Cancels a pending tick. Unknown handles are ignored.
    fn cancel(&mut self, handle: TickHandle);
}

/// Everything the pager needs from its host.
pub trait PagerHost: ViewportSurface + PointerBinder + TickScheduler {}

impl<T: ViewportSurface + PointerBinder + TickScheduler> PagerHost for T {}
