//! In-memory host.
//!
//! [`HeadlessHost`] keeps the scroll offset, viewport rectangle, bound move
//! listeners and scheduled ticks in plain fields. It backs the unit tests and
//! lets a pager be driven without any windowing system, e.g. to replay
//! recorded input.

use std::{collections::HashMap, time::Duration};

use crate::{
    host::{ListenerToken, PointerBinder, TickHandle, TickScheduler, ViewportSurface},
    layout::{PanelLayout, ReadingDirection},
    pointer::PointerKind,
    px::{Px, PxPosition, PxRect},
};

const DEFAULT_VIEWPORT_HEIGHT: Px = Px(400);

/// A repeating tick registered with a [`HeadlessHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    /// Handle returned to the scheduler's caller.
    pub handle: TickHandle,
    /// Requested period.
    pub interval: Duration,
}

/// Host that lives entirely in memory.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    panel_count: usize,
    viewport: PxRect,
    scroll_offset: Px,
    reading_direction: ReadingDirection,
    listeners: HashMap<ListenerToken, PointerKind>,
    ticks: Vec<ScheduledTick>,
    next_tick: u64,
    layout: Option<PanelLayout>,
}

impl HeadlessHost {
    /// Creates a host with `panel_count` panels in a viewport of `width`
    /// pixels anchored at the origin.
    pub fn new(panel_count: usize, width: Px) -> Self {
        Self {
            panel_count,
            viewport: PxRect::new(Px::ZERO, Px::ZERO, width, DEFAULT_VIEWPORT_HEIGHT),
            scroll_offset: Px::ZERO,
            reading_direction: ReadingDirection::LeftToRight,
            listeners: HashMap::new(),
            ticks: Vec::new(),
            next_tick: 1,
            layout: None,
        }
    }

    /// Replaces the viewport rectangle used for hit-testing and page width.
    pub fn with_viewport(mut self, viewport: PxRect) -> Self {
        self.viewport = viewport;
        self
    }

    /// Sets the reading direction reported to the pager.
    pub fn with_reading_direction(mut self, direction: ReadingDirection) -> Self {
        self.reading_direction = direction;
        self
    }

    /// Changes the number of panels.
    pub fn set_panel_count(&mut self, panel_count: usize) {
        self.panel_count = panel_count;
    }

    /// Changes the viewport width, as a window resize would.
    pub fn set_viewport_width(&mut self, width: Px) {
        self.viewport.width = width;
    }

    /// Pointer kind bound for `token`, if any.
    pub fn bound_kind(&self, token: ListenerToken) -> Option<PointerKind> {
        self.listeners.get(&token).copied()
    }

    /// Number of bound move listeners.
    pub fn bound_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Ticks that were scheduled and not yet cancelled.
    pub fn pending_ticks(&self) -> &[ScheduledTick] {
        &self.ticks
    }

    /// Handle of the oldest pending tick.
    pub fn next_pending_tick(&self) -> Option<TickHandle> {
        self.ticks.first().map(|tick| tick.handle)
    }

    /// Layout most recently applied by the pager.
    pub fn last_layout(&self) -> Option<&PanelLayout> {
        self.layout.as_ref()
    }
}

impl ViewportSurface for HeadlessHost {
    fn panel_count(&self) -> usize {
        self.panel_count
    }

    fn viewport_width(&self) -> Px {
        self.viewport.width
    }

    fn scroll_offset(&self) -> Px {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: Px) {
        self.scroll_offset = offset;
    }

    fn is_point_inside_viewport(&self, point: PxPosition, leave_radius: Px) -> bool {
        self.viewport.contains(point, leave_radius)
    }

    fn reading_direction(&self) -> ReadingDirection {
        self.reading_direction
    }

    fn apply_panel_layout(&mut self, layout: &PanelLayout) {
        self.layout = Some(layout.clone());
    }
}

impl PointerBinder for HeadlessHost {
    fn bind_move(&mut self, kind: PointerKind, token: ListenerToken) {
        self.listeners.insert(token, kind);
    }

    fn unbind_move(&mut self, token: ListenerToken) {
        self.listeners.remove(&token);
    }
}

impl TickScheduler for HeadlessHost {
    fn schedule_repeating(&mut self, interval: Duration) -> TickHandle {
        let handle = TickHandle::new(self.next_tick);
        self.next_tick += 1;
        self.ticks.push(ScheduledTick { handle, interval });
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.ticks.retain(|tick| tick.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_hands_out_distinct_handles() {
        let mut host = HeadlessHost::new(3, Px(250));
        let a = host.schedule_repeating(Duration::from_millis(15));
        let b = host.schedule_repeating(Duration::from_millis(15));

        assert_ne!(a, b);
        assert_eq!(host.next_pending_tick(), Some(a));
        host.cancel(a);
        assert_eq!(host.next_pending_tick(), Some(b));
        host.cancel(TickHandle::new(999));
        assert_eq!(host.pending_ticks().len(), 1);
    }

    #[test]
    fn binding_is_keyed_by_token() {
        let mut host = HeadlessHost::new(3, Px(250));
        let token = ListenerToken::next();

        host.bind_move(PointerKind::Touch, token);
        assert_eq!(host.bound_kind(token), Some(PointerKind::Touch));
        host.unbind_move(token);
        assert_eq!(host.bound_listener_count(), 0);
    }

    #[test]
    fn hit_test_uses_viewport_rect() {
        let host = HeadlessHost::new(3, Px(250))
            .with_viewport(PxRect::new(Px(100), Px(0), Px(250), Px(300)));

        assert!(host.is_point_inside_viewport(PxPosition::from([100, 10]), Px::ZERO));
        assert!(!host.is_point_inside_viewport(PxPosition::from([99, 10]), Px::ZERO));
        assert!(host.is_point_inside_viewport(PxPosition::from([99, 10]), Px(1)));
    }
}
