//! The pager facade tying gestures, animation and page bookkeeping together.

use tracing::{debug, instrument, trace};

use crate::{
    animator::{SlideAnimator, SlideJob, SlideOutcome, TickOutcome},
    config::PagerConfig,
    error::ConfigError,
    gesture::{GestureController, GesturePhase, MoveOutcome, Release},
    history::SwipeDirection,
    host::{PagerHost, TickHandle},
    layout::{self, IndicatorState, PanelLayout, ScrollMapping},
    pointer::PointerEvent,
};

/// Whether the host should let its native pointer-down handling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let the host handle the event as usual.
    Continue,
    /// Suppress the host's default behavior for this event.
    PreventDefault,
}

/// A horizontally swipeable pager over a host-provided viewport.
///
/// The host forwards pointer, resize and timer events; the pager answers by
/// moving the viewport's scroll offset.
///
/// ```
/// use std::time::Duration;
/// use viewpager_core::{
///     HeadlessHost, PagerConfig, PointerEvent, ViewPagerCore, ViewportSurface, px::Px,
/// };
///
/// let host = HeadlessHost::new(3, Px(250));
/// let mut pager = ViewPagerCore::new(host, PagerConfig::default()).unwrap();
/// pager.on_layout_ready();
///
/// assert!(pager.slide_right().is_started());
/// while let Some(handle) = pager.host().next_pending_tick() {
///     pager.on_tick(handle);
/// }
/// assert_eq!(pager.current_page(), 1);
/// assert_eq!(pager.host().scroll_offset(), Px(250));
/// ```
#[derive(Debug)]
pub struct ViewPagerCore<H: PagerHost> {
    host: H,
    config: PagerConfig,
    gesture: GestureController,
    animator: SlideAnimator,
    current_page: i32,
    mapping: ScrollMapping,
}

impl<H: PagerHost> ViewPagerCore<H> {
    /// Creates a pager over `host`.
    pub fn new(host: H, config: PagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            gesture: GestureController::new(&config),
            animator: SlideAnimator::new(config.animation),
            host,
            config,
            current_page: 0,
            mapping: ScrollMapping::Natural,
        })
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to change panel count between
    /// gestures.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the pager and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Active configuration.
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Page committed by the last finished slide or layout.
    pub fn current_page(&self) -> i32 {
        self.current_page
    }

    /// Page nearest to the current scroll offset.
    pub fn page_in_view(&self) -> i32 {
        layout::page_in_view(
            self.host.scroll_offset(),
            self.host.viewport_width(),
            self.mapping,
        )
    }

    /// How offsets map to pages on this surface.
    pub fn scroll_mapping(&self) -> ScrollMapping {
        self.mapping
    }

    /// Whether a page left of the one in view exists.
    pub fn can_slide_left(&self) -> bool {
        layout::can_slide_left(self.page_in_view(), self.host.panel_count())
    }

    /// Whether a page right of the one in view exists.
    pub fn can_slide_right(&self) -> bool {
        layout::can_slide_right(self.page_in_view(), self.host.panel_count())
    }

    /// Phase of the tracked gesture.
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// The gesture controller.
    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    /// The running slide, if any.
    pub fn animation(&self) -> Option<&SlideJob> {
        self.animator.job()
    }

    /// Returns `true` while a slide runs.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Indicator model, or `None` when the indicator is hidden.
    pub fn indicator(&self) -> Option<IndicatorState> {
        if self.config.hide_indicator {
            return None;
        }
        Some(IndicatorState::new(
            self.host.panel_count(),
            self.current_page,
            self.mapping,
        ))
    }

    /// Slides to the page left of the one in view.
    pub fn slide_left(&mut self) -> SlideOutcome {
        let target = self.page_in_view() - 1;
        self.slide_to_element(target)
    }

    /// Slides to the page right of the one in view.
    pub fn slide_right(&mut self) -> SlideOutcome {
        let target = self.page_in_view() + 1;
        self.slide_to_element(target)
    }

    /// Slides to `index`. Out-of-range indices are not clamped.
    pub fn slide_to_element(&mut self, index: i32) -> SlideOutcome {
        self.animator.start(&mut self.host, index)
    }

    /// Lays out the panels and detects the scroll mapping.
    ///
    /// Call once, after the host has performed its first layout and applied
    /// its initial scroll position.
    pub fn on_layout_ready(&mut self) {
        self.place_panels();
        self.mapping =
            ScrollMapping::detect(self.host.reading_direction(), self.host.scroll_offset());
        self.current_page = self.page_in_view();
        debug!(mapping = ?self.mapping, page = self.current_page, "layout ready");
    }

    /// Re-lays out the panels for the new viewport size.
    pub fn on_window_resize(&mut self) {
        self.place_panels();
    }

    /// Handles pointer-down: cancels any slide and arms a gesture.
    #[instrument(level = "trace", skip(self))]
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> Propagation {
        if event.sample().is_none() {
            debug!(source = ?event.source, "pointer down dropped");
            return Propagation::Continue;
        }

        self.animator.cancel(&mut self.host);
        let starting_page = self.page_in_view();
        self.gesture.press(&mut self.host, event, starting_page);

        if self.config.prevent_defaults {
            Propagation::PreventDefault
        } else {
            Propagation::Continue
        }
    }

    /// Handles a pointer move delivered to the bound listener.
    #[instrument(level = "trace", skip(self))]
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> MoveOutcome {
        self.gesture.track(&mut self.host, event)
    }

    /// Handles pointer-up.
    pub fn on_pointer_up(&mut self) -> Release {
        let release = self.gesture.release(&mut self.host);
        self.finish_release(release);
        release
    }

    /// Handles the pointer leaving the window. Only ends an active drag.
    pub fn on_window_leave(&mut self) -> Release {
        let release = self.gesture.leave_window(&mut self.host);
        self.finish_release(release);
        release
    }

    /// Advances the running slide. Ticks for other handles are ignored.
    pub fn on_tick(&mut self, handle: TickHandle) -> TickOutcome {
        let outcome = self.animator.tick(&mut self.host, handle, self.mapping);
        if let TickOutcome::Finished { page } = outcome {
            self.current_page = page;
        }
        outcome
    }

    fn finish_release(&mut self, release: Release) {
        match release {
            Release::Ignored | Release::Tap => {}
            Release::Fling {
                direction,
                starting_page,
            } => {
                if !self.fling(direction, starting_page) {
                    self.settle();
                }
            }
            Release::Settle => self.settle(),
        }
    }

    fn fling(&mut self, direction: SwipeDirection, starting_page: i32) -> bool {
        let target = match direction {
            SwipeDirection::Left if self.can_slide_left() => starting_page - 1,
            SwipeDirection::Right if self.can_slide_right() => starting_page + 1,
            _ => {
                trace!(?direction, "fling has no neighbor");
                return false;
            }
        };
        let started = self.slide_to_element(target).is_started();
        if started {
            debug!(?direction, target, "fling");
        }
        started
    }

    fn settle(&mut self) {
        let nearest = self.page_in_view();
        let target = layout::clamp_page(nearest, self.host.panel_count(), self.mapping);
        if target != nearest {
            trace!(nearest, target, "overscroll clamped");
        }
        debug!(target, "settle");
        self.slide_to_element(target);
    }

    fn place_panels(&mut self) {
        let layout = PanelLayout::compute(self.host.panel_count(), self.host.viewport_width());
        trace!(
            panels = layout.frames.len(),
            content_width = layout.content_width.raw(),
            "panels placed"
        );
        self.host.apply_panel_layout(&layout);
    }
}
