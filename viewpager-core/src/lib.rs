//! Gesture recognition and slide animation for a horizontally swipeable view
//! pager.
//!
//! The pager shows one full-width panel at a time. Users drag or swipe with a
//! mouse or a finger; a fast swipe ("fling") jumps to the neighboring panel,
//! anything slower settles on the nearest panel with a fixed-step animation.
//!
//! # Architecture
//!
//! - [`pointer`] turns host events into immutable samples.
//! - [`history`] keeps the last few samples of a gesture and classifies the
//!   swipe direction.
//! - [`gesture`] runs the press/drag/release state machine and the one-shot
//!   horizontal-vs-vertical axis lock.
//! - [`animator`] moves the scroll offset towards a page boundary on a
//!   repeating tick.
//! - [`pager`] composes the above into [`ViewPagerCore`].
//!
//! Rendering, event delivery and timers belong to the host, which the pager
//! reaches only through the traits in [`host`]. [`HeadlessHost`] implements
//! them in memory.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: gesture and animation transitions at
//! `debug`, per-move and per-tick detail at `trace`. It never installs a
//! subscriber.

pub mod animator;
pub mod config;
pub mod error;
pub mod gesture;
pub mod headless;
pub mod history;
pub mod host;
pub mod layout;
pub mod pager;
pub mod pointer;
pub mod px;


pub use crate::{
    animator::{SlideAnimator, SlideDirection, SlideJob, SlideOutcome, TickOutcome},
    config::{AnimationConfig, PagerConfig},
    error::ConfigError,
    gesture::{GestureController, GesturePhase, MoveOutcome, Release},
    headless::HeadlessHost,
    history::{PointerHistory, SwipeDirection},
    host::{ListenerToken, PagerHost, PointerBinder, TickHandle, TickScheduler, ViewportSurface},
    layout::{IndicatorState, PanelFrame, PanelLayout, ReadingDirection, ScrollMapping},
    pager::{Propagation, ViewPagerCore},
    pointer::{PointerEvent, PointerKind, PointerSample, PointerSource},
    px::{Px, PxPosition, PxRect},
};
