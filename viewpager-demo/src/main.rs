//! Replays scripted gestures against an in-memory pager and logs the pages
//! they land on.
//!
//! Set `RUST_LOG=viewpager_core=debug` to watch the gesture state machine.

use std::time::Duration;

use tracing::info;
use viewpager_core::{
    HeadlessHost, PagerConfig, PointerEvent, Px, Release, ViewPagerCore, ViewportSurface,
};

const PANELS: usize = 4;
const PAGE_WIDTH: Px = Px(360);

enum Step {
    Down(PointerEvent),
    Move(PointerEvent),
    Up,
    Leave,
}

struct Scenario {
    name: &'static str,
    steps: Vec<Step>,
}

fn mouse(x: i32, y: i32, ms: u64) -> PointerEvent {
    PointerEvent::mouse([x, y], Duration::from_millis(ms))
}

fn touch(x: i32, y: i32, ms: u64) -> PointerEvent {
    PointerEvent::touch([x, y], Duration::from_millis(ms))
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "quick flick",
            steps: vec![
                Step::Down(touch(100, 200, 0)),
                Step::Move(touch(130, 202, 30)),
                Step::Move(touch(190, 204, 60)),
                Step::Up,
            ],
        },
        Scenario {
            name: "slow drag",
            steps: vec![
                Step::Down(mouse(300, 150, 1_000)),
                Step::Move(mouse(250, 150, 1_400)),
                Step::Move(mouse(90, 152, 1_900)),
                Step::Up,
            ],
        },
        Scenario {
            name: "vertical scroll",
            steps: vec![
                Step::Down(touch(180, 100, 3_000)),
                Step::Move(touch(182, 160, 3_040)),
                Step::Up,
            ],
        },
        Scenario {
            name: "drag out of window",
            steps: vec![
                Step::Down(mouse(200, 100, 5_000)),
                Step::Move(mouse(60, 100, 5_500)),
                Step::Leave,
            ],
        },
    ]
}

fn settle(pager: &mut ViewPagerCore<HeadlessHost>) -> usize {
    let mut ticks = 0;
    while let Some(handle) = pager.host().next_pending_tick() {
        pager.on_tick(handle);
        ticks += 1;
    }
    ticks
}

fn replay(pager: &mut ViewPagerCore<HeadlessHost>, scenario: &Scenario) {
    let mut release = Release::Ignored;
    for step in &scenario.steps {
        match step {
            Step::Down(event) => {
                pager.on_pointer_down(event);
            }
            Step::Move(event) => {
                pager.on_pointer_move(event);
            }
            Step::Up => release = pager.on_pointer_up(),
            Step::Leave => release = pager.on_window_leave(),
        }
    }
    let ticks = settle(pager);

    info!(
        scenario = scenario.name,
        ?release,
        ticks,
        page = pager.current_page(),
        offset = pager.host().scroll_offset().raw(),
        "scenario replayed"
    );
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,viewpager_core=info,viewpager_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut host = HeadlessHost::new(PANELS, PAGE_WIDTH);
    host.set_scroll_offset(PAGE_WIDTH);
    let mut pager = ViewPagerCore::new(host, PagerConfig::default())?;
    pager.on_layout_ready();
    info!(page = pager.current_page(), "pager ready");

    for scenario in scenarios() {
        replay(&mut pager, &scenario);
    }

    pager.slide_to_element(PANELS as i32 - 1);
    let ticks = settle(&mut pager);
    info!(ticks, page = pager.current_page(), "jumped to last page");

    if let Some(indicator) = pager.indicator() {
        info!(
            dots = indicator.page_count,
            active = ?indicator.active_dot,
            "indicator"
        );
    }

    Ok(())
}
