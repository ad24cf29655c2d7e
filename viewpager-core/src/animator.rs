//! Fixed-step slide animation.
//!
//! The animator moves the viewport by a constant number of pixels per tick
//! until the next step would pass the destination, then snaps onto it. There
//! is no easing; every slide runs at constant speed.

use tracing::{debug, trace};

use crate::{
    config::AnimationConfig,
    host::{TickHandle, TickScheduler, ViewportSurface},
    layout::{ScrollMapping, page_in_view, page_offset},
    px::Px,
};

/// Direction the scroll offset travels during a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    /// Offset decreases.
    Left,
    /// Offset increases.
    Right,
}

/// A running slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideJob {
    /// Page the slide ends on.
    pub target_page: i32,
    /// Scroll offset of the target page.
    pub destination: Px,
    /// Travel direction, fixed when the job starts.
    pub direction: SlideDirection,
    /// Handle of the repeating tick driving this job.
    pub handle: TickHandle,
}

/// Result of asking for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// A new job is running.
    Started,
    /// The viewport already sits on the destination; nothing was scheduled.
    AlreadyAtDestination,
    /// Another job is running; the request was dropped.
    Busy,
}

impl SlideOutcome {
    /// Returns `true` only if a new job was started.
    pub fn is_started(self) -> bool {
        self == Self::Started
    }
}

/// Result of a single animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No job matched the tick handle.
    Ignored,
    /// The offset moved one step.
    Stepped,
    /// The offset snapped onto the destination and the job ended.
    Finished {
        /// Page in view after the snap.
        page: i32,
    },
}

/// Drives at most one slide at a time.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    config: AnimationConfig,
    job: Option<SlideJob>,
}

impl SlideAnimator {
    /// Creates an idle animator.
    pub fn new(config: AnimationConfig) -> Self {
        Self { config, job: None }
    }

    /// Returns `true` while a job is running.
    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    /// The running job, if any.
    pub fn job(&self) -> Option<&SlideJob> {
        self.job.as_ref()
    }

    /// Starts sliding towards `page`.
    ///
    /// Rejected with [`SlideOutcome::Busy`] while another job runs. The page
    /// index is not clamped.
    pub fn start<H>(&mut self, host: &mut H, page: i32) -> SlideOutcome
    where
        H: ViewportSurface + TickScheduler,
    {
        if let Some(job) = &self.job {
            debug!(
                requested = page,
                running = job.target_page,
                "slide rejected: animation in progress"
            );
            return SlideOutcome::Busy;
        }

        let destination = page_offset(page, host.viewport_width());
        let offset = host.scroll_offset();
        if offset == destination {
            trace!(page, "slide skipped: already at destination");
            return SlideOutcome::AlreadyAtDestination;
        }

        let direction = if offset < destination {
            SlideDirection::Right
        } else {
            SlideDirection::Left
        };
        let handle = host.schedule_repeating(self.config.tick_interval);
        self.job = Some(SlideJob {
            target_page: page,
            destination,
            direction,
            handle,
        });
        debug!(page, ?direction, from = offset.raw(), to = destination.raw(), "slide started");
        SlideOutcome::Started
    }

    /// Advances the running job by one tick.
    pub fn tick<H>(&mut self, host: &mut H, handle: TickHandle, mapping: ScrollMapping) -> TickOutcome
    where
        H: ViewportSurface + TickScheduler,
    {
        let Some(job) = self.job.filter(|job| job.handle == handle) else {
            trace!(handle = handle.raw(), "stale animation tick");
            return TickOutcome::Ignored;
        };

        let step = self.config.step_pixels;
        let offset = host.scroll_offset();
        let remaining = job.destination - offset;
        let passes_destination = match job.direction {
            SlideDirection::Left => offset - step < job.destination,
            SlideDirection::Right => offset + step > job.destination,
        };
        let close_enough = Px(remaining.raw().saturating_abs()) <= self.config.min_delta_to_position;

        if passes_destination || close_enough {
            host.set_scroll_offset(job.destination);
            host.cancel(job.handle);
            self.job = None;
            let page = page_in_view(job.destination, host.viewport_width(), mapping);
            debug!(page, "slide finished");
            return TickOutcome::Finished { page };
        }

        let next = if offset < job.destination {
            offset + step
        } else {
            offset - step
        };
        trace!(offset = next.raw(), "slide step");
        host.set_scroll_offset(next);
        TickOutcome::Stepped
    }

    /// Cancels the running job, leaving the offset where it is.
    pub fn cancel<H: TickScheduler>(&mut self, host: &mut H) -> bool {
        match self.job.take() {
            Some(job) => {
                host.cancel(job.handle);
                debug!(page = job.target_page, "slide cancelled");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;

    fn host_at(offset: i32) -> HeadlessHost {
        let mut host = HeadlessHost::new(5, Px(250));
        host.set_scroll_offset(Px(offset));
        host
    }

    fn run_to_completion(
        animator: &mut SlideAnimator,
        host: &mut HeadlessHost,
        handle: TickHandle,
    ) -> (usize, i32) {
        for ticks in 1..=1_000 {
            if let TickOutcome::Finished { page } =
                animator.tick(host, handle, ScrollMapping::Natural)
            {
                return (ticks, page);
            }
        }
        panic!("animation did not finish");
    }

    #[test]
    fn boundary_snap_finishes_in_one_tick() {
        let mut host = host_at(245);
        let mut animator = SlideAnimator::new(AnimationConfig::default());

        assert_eq!(animator.start(&mut host, 1), SlideOutcome::Started);
        let handle = animator.job().map(|job| job.handle).unwrap();
        assert_eq!(
            animator.tick(&mut host, handle, ScrollMapping::Natural),
            TickOutcome::Finished { page: 1 }
        );
        assert_eq!(host.scroll_offset(), Px(250));
        assert!(!animator.is_running());
        assert!(host.pending_ticks().is_empty());
    }

    #[test]
    fn second_start_is_rejected_and_keeps_first_destination() {
        let mut host = host_at(0);
        let mut animator = SlideAnimator::new(AnimationConfig::default());

        assert!(animator.start(&mut host, 2).is_started());
        let before = *animator.job().unwrap();
        assert_eq!(animator.start(&mut host, 4), SlideOutcome::Busy);
        assert_eq!(animator.start(&mut host, 0), SlideOutcome::Busy);
        assert_eq!(animator.job(), Some(&before));
        assert_eq!(host.pending_ticks().len(), 1);
    }

    #[test]
    fn start_at_destination_is_a_no_op() {
        let mut host = host_at(500);
        let mut animator = SlideAnimator::new(AnimationConfig::default());

        assert_eq!(
            animator.start(&mut host, 2),
            SlideOutcome::AlreadyAtDestination
        );
        assert!(!animator.is_running());
        assert!(host.pending_ticks().is_empty());
    }

    #[test]
    fn converges_within_ceil_distance_over_step_ticks() {
        let step = 50;
        for start in [0, 3, 49, 120, 245, 333, 500, 777, 1000] {
            for page in 0..5 {
                let mut host = host_at(start);
                let mut animator = SlideAnimator::new(AnimationConfig::default());
                let destination = page * 250;
                if animator.start(&mut host, page) != SlideOutcome::Started {
                    assert_eq!(start, destination);
                    continue;
                }
                let handle = animator.job().unwrap().handle;

                let budget = (start - destination).unsigned_abs().div_ceil(step) as usize;
                let mut reached = false;
                let mut finished = None;
                for _ in 0..budget {
                    let before = host.scroll_offset().raw();
                    let outcome = animator.tick(&mut host, handle, ScrollMapping::Natural);
                    let after = host.scroll_offset().raw();
                    // Never steps past the destination.
                    assert!((after - destination).abs() <= (before - destination).abs());
                    if let TickOutcome::Finished { page } = outcome {
                        finished = Some(page);
                    }
                    if after == destination {
                        reached = true;
                        break;
                    }
                }
                assert!(reached, "start {start} to page {page} within {budget} ticks");

                let finished_page = match finished {
                    Some(page) => page,
                    None => run_to_completion(&mut animator, &mut host, handle).1,
                };
                assert_eq!(finished_page, page);
                assert_eq!(host.scroll_offset(), Px(destination));
            }
        }
    }

    #[test]
    fn long_slide_steps_by_fixed_amount() {
        let mut host = host_at(0);
        let mut animator = SlideAnimator::new(AnimationConfig::default());
        animator.start(&mut host, 1);
        let handle = animator.job().unwrap().handle;

        let mut offsets = Vec::new();
        while animator.tick(&mut host, handle, ScrollMapping::Natural) == TickOutcome::Stepped {
            offsets.push(host.scroll_offset().raw());
        }
        assert_eq!(offsets, vec![50, 100, 150, 200, 250]);
        assert_eq!(host.scroll_offset(), Px(250));
    }

    #[test]
    fn leftward_slide_reaches_destination() {
        let mut host = host_at(480);
        let mut animator = SlideAnimator::new(AnimationConfig::default());
        animator.start(&mut host, 0);
        let job = *animator.job().unwrap();
        assert_eq!(job.direction, SlideDirection::Left);

        let (_, page) = run_to_completion(&mut animator, &mut host, job.handle);
        assert_eq!(page, 0);
        assert_eq!(host.scroll_offset(), Px(0));
    }

    #[test]
    fn stale_handles_are_ignored() {
        let mut host = host_at(0);
        let mut animator = SlideAnimator::new(AnimationConfig::default());
        animator.start(&mut host, 1);

        let stale = TickHandle::new(u64::MAX);
        assert_eq!(
            animator.tick(&mut host, stale, ScrollMapping::Natural),
            TickOutcome::Ignored
        );
        assert_eq!(host.scroll_offset(), Px(0));
    }

    #[test]
    fn cancel_stops_the_job_in_place() {
        let mut host = host_at(0);
        let mut animator = SlideAnimator::new(AnimationConfig::default());
        animator.start(&mut host, 2);
        let handle = animator.job().unwrap().handle;
        animator.tick(&mut host, handle, ScrollMapping::Natural);

        assert!(animator.cancel(&mut host));
        assert!(!animator.cancel(&mut host));
        assert_eq!(host.scroll_offset(), Px(50));
        assert!(host.pending_ticks().is_empty());
        assert_eq!(
            animator.tick(&mut host, handle, ScrollMapping::Natural),
            TickOutcome::Ignored
        );
    }
}
