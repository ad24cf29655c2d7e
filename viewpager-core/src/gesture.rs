//! Press, drag and release tracking.
//!
//! A gesture moves through three phases:
//!
//! - **Idle**: nothing is tracked.
//! - **Armed**: a pointer is down and its move listener is bound, but the
//!   pointer has not yet travelled far enough to tell a horizontal drag from a
//!   vertical scroll.
//! - **Dragging**: the gesture is locked to the horizontal axis and every move
//!   scrolls the viewport 1:1.
//!
//! The axis lock is decided once, on the first move that reaches
//! `min_pixels_to_start_move` on either axis. A vertical-dominant move at that
//! point abandons the gesture so the page can scroll natively.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{
    config::PagerConfig,
    history::{PointerHistory, SwipeDirection},
    host::{ListenerToken, PointerBinder, ViewportSurface},
    pointer::{PointerEvent, PointerKind, PointerSample},
    px::Px,
};

/// Current phase of the tracked gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is tracked.
    Idle,
    /// Pointer down, axis not decided yet.
    Armed,
    /// Horizontal drag in progress.
    Dragging,
}

/// What a move event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not tracked: idle, wrong pointer kind, or outside the viewport.
    Ignored,
    /// Recorded, but the viewport did not move.
    Tracked,
    /// Recorded and the viewport scrolled by `delta`.
    Dragged {
        /// Horizontal scroll change applied by this move.
        delta: Px,
    },
    /// The axis lock chose vertical; the gesture was dropped.
    Abandoned,
}

/// How a released gesture should end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No gesture was tracked.
    Ignored,
    /// The pointer was released before a drag started.
    Tap,
    /// A fast swipe qualified as a fling.
    Fling {
        /// Net swipe direction over the history window.
        direction: SwipeDirection,
        /// Page in view when the gesture started.
        starting_page: i32,
    },
    /// A drag ended without a fling; the viewport should settle.
    Settle,
}

#[derive(Debug, Clone, Copy)]
struct GestureState {
    kind: PointerKind,
    first: PointerSample,
    previous: PointerSample,
    starting_page: i32,
    dragging: bool,
}

/// Tracks one gesture at a time and turns it into scroll changes.
#[derive(Debug)]
pub struct GestureController {
    token: ListenerToken,
    history: PointerHistory,
    state: Option<GestureState>,
    max_delta_time_for_slide_leave: Duration,
    min_delta_pixels_for_slide_acceleration: Px,
    min_pixels_to_start_move: Px,
    leave_radius: Px,
}

impl GestureController {
    /// Creates an idle controller with its own listener token.
    pub fn new(config: &PagerConfig) -> Self {
        Self {
            token: ListenerToken::next(),
            history: PointerHistory::with_capacity(config.history_capacity),
            state: None,
            max_delta_time_for_slide_leave: config.max_delta_time_for_slide_leave,
            min_delta_pixels_for_slide_acceleration: config
                .min_delta_pixels_for_slide_acceleration,
            min_pixels_to_start_move: config.min_pixels_to_start_move,
            leave_radius: config.leave_radius,
        }
    }

    /// Token used to bind and unbind this controller's move listener.
    pub fn token(&self) -> ListenerToken {
        self.token
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        match &self.state {
            None => GesturePhase::Idle,
            Some(state) if state.dragging => GesturePhase::Dragging,
            Some(_) => GesturePhase::Armed,
        }
    }

    /// Returns `true` while a move listener is bound.
    pub fn is_bound(&self) -> bool {
        self.state.is_some()
    }

    /// Pointer kind of the tracked gesture.
    pub fn active_kind(&self) -> Option<PointerKind> {
        self.state.map(|state| state.kind)
    }

    /// Page in view when the tracked gesture started.
    pub fn starting_page(&self) -> Option<i32> {
        self.state.map(|state| state.starting_page)
    }

    /// Recent samples of the tracked gesture.
    pub fn history(&self) -> &PointerHistory {
        &self.history
    }

    /// Arms a new gesture.
    ///
    /// Returns `false` without side effects if a gesture is already bound or
    /// the event comes from an unrecognized device.
    pub fn press<H: PointerBinder>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
        starting_page: i32,
    ) -> bool {
        if self.state.is_some() {
            trace!("pointer down ignored: gesture already bound");
            return false;
        }
        let (Some(kind), Some(sample)) = (event.source.kind(), event.sample()) else {
            debug!(source = ?event.source, "pointer down ignored: unrecognized pointer");
            return false;
        };

        host.bind_move(kind, self.token);
        self.history.push(sample);
        self.state = Some(GestureState {
            kind,
            first: sample,
            previous: sample,
            starting_page,
            dragging: false,
        });
        debug!(?kind, starting_page, "gesture armed");
        true
    }

    /// Processes a move event of the tracked gesture.
    pub fn track<H>(&mut self, host: &mut H, event: &PointerEvent) -> MoveOutcome
    where
        H: ViewportSurface + PointerBinder,
    {
        let Some(mut state) = self.state else {
            return MoveOutcome::Ignored;
        };
        if event.source.kind() != Some(state.kind) {
            return MoveOutcome::Ignored;
        }
        let Some(sample) = event.sample() else {
            return MoveOutcome::Ignored;
        };
        if !host.is_point_inside_viewport(sample.position(), self.leave_radius) {
            trace!(x = sample.x().raw(), y = sample.y().raw(), "move outside viewport");
            return MoveOutcome::Ignored;
        }

        if !state.dragging {
            let travel = state.first.delta_to(&sample);
            let (dx, dy) = (travel.x.abs(), travel.y.abs());
            let threshold = self.min_pixels_to_start_move.abs();
            if (dx > 0 || dy > 0) && (dx >= threshold || dy >= threshold) {
                if dy < dx {
                    debug!(dx, dy, "axis locked: horizontal drag");
                    state.dragging = true;
                } else {
                    debug!(dx, dy, "axis locked: vertical, gesture abandoned");
                    self.reset(host);
                    return MoveOutcome::Abandoned;
                }
            }
        }

        let outcome = if state.dragging {
            let delta = sample.delta_to(&state.previous).x;
            host.set_scroll_offset(host.scroll_offset() + delta);
            trace!(delta = delta.raw(), offset = host.scroll_offset().raw(), "drag");
            MoveOutcome::Dragged { delta }
        } else {
            MoveOutcome::Tracked
        };

        state.previous = sample;
        self.history.push(sample);
        self.state = Some(state);
        outcome
    }

    /// Ends the tracked gesture on pointer-up.
    ///
    /// The controller is always idle afterwards.
    pub fn release<H: PointerBinder>(&mut self, host: &mut H) -> Release {
        let Some(state) = self.state else {
            return Release::Ignored;
        };
        if !state.dragging {
            self.reset(host);
            debug!("gesture released before drag");
            return Release::Tap;
        }

        let release = self.evaluate_fling(state.starting_page);
        self.reset(host);
        debug!(?release, "gesture released");
        release
    }

    /// Ends a drag when the pointer leaves the window. A no-op unless dragging.
    pub fn leave_window<H: PointerBinder>(&mut self, host: &mut H) -> Release {
        if self.phase() != GesturePhase::Dragging {
            return Release::Ignored;
        }
        self.release(host)
    }

    /// Unbinds the move listener and forgets the gesture.
    pub fn reset<H: PointerBinder>(&mut self, host: &mut H) {
        host.unbind_move(self.token);
        self.history.clear();
        self.state = None;
    }

    fn evaluate_fling(&self, starting_page: i32) -> Release {
        let direction = self
            .history
            .classify_swipe(self.min_delta_pixels_for_slide_acceleration);
        let elapsed = self.history.elapsed().unwrap_or(Duration::MAX);

        match direction {
            Some(direction) if elapsed <= self.max_delta_time_for_slide_leave => {
                Release::Fling {
                    direction,
                    starting_page,
                }
            }
            _ => Release::Settle,
        }
    }
}
