//! Headless collapsing-header simulation: replays a synthetic gesture
//! stream through the coordinator and logs what a renderer would draw each
//! frame. Run with `RUST_LOG=info`.

use masthead_core::{
    AnimationSpec, PointerPhase, PointerSample, Rect, ScrollSource, Size, TestClock, Vec2,
    set_clock,
};
use masthead_ui::{
    CollapsingHeaderState, ContentScrollState, DragOutcome, DragScrollTracker, HeaderChrome,
    HeaderSpec, place_toolbar,
};
use std::rc::Rc;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

fn log_frame(tag: &str, state: &CollapsingHeaderState, chrome: &HeaderChrome) {
    let m = state.metrics();
    let c = chrome.resolve(m.progress);
    log::info!(
        "{tag}: progress {:.2} height {:.0}px offset {:.0}px title x{:.2} elevation {:.1}",
        m.progress,
        m.height,
        state.content().offset(),
        c.title_scale,
        c.elevation,
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let content = Rc::new(ContentScrollState::new());
    content.set_viewport_height(640.0);
    content.set_content_height(2400.0);

    let state = CollapsingHeaderState::with_content(HeaderSpec::new(64.0, 264.0)?, content.clone());
    let chrome = HeaderChrome::default();
    let mut tracker = DragScrollTracker::new();

    let mut t = Instant::now();
    set_clock(Box::new(TestClock { t }));

    // Fast upward drag: the header collapses first, then the list scrolls.
    let mut pos = Vec2 { x: 180.0, y: 600.0 };
    tracker.handle(
        PointerSample {
            phase: PointerPhase::Down,
            position: pos,
        },
        t,
    );
    for _ in 0..24 {
        t += FRAME;
        set_clock(Box::new(TestClock { t }));
        pos.y -= 18.0;
        let sample = PointerSample {
            phase: PointerPhase::Move,
            position: pos,
        };
        if let DragOutcome::Scroll { delta } = tracker.handle(sample, t) {
            state.dispatch(delta, ScrollSource::Drag);
            log_frame("drag", &state, &chrome);
        }
    }

    t += FRAME;
    set_clock(Box::new(TestClock { t }));
    let lift = PointerSample {
        phase: PointerPhase::Up,
        position: pos,
    };
    if let DragOutcome::Fling { velocity } = tracker.handle(lift, t) {
        // Gesture deltas move content opposite to the finger.
        content.fling(-velocity.y);
        log::info!("fling at {:.0} px/s", -velocity.y);
    }
    for _ in 0..600 {
        t += FRAME;
        set_clock(Box::new(TestClock { t }));
        if !state.tick(t) {
            break;
        }
        log_frame("fling", &state, &chrome);
    }

    // Drag back down until the list is at its top and the header has mostly
    // re-expanded, then release gently and let it settle.
    tracker.handle(
        PointerSample {
            phase: PointerPhase::Down,
            position: pos,
        },
        t,
    );
    for _ in 0..600 {
        if state.metrics().progress >= 0.6 {
            break;
        }
        t += FRAME;
        set_clock(Box::new(TestClock { t }));
        pos.y += 24.0;
        let sample = PointerSample {
            phase: PointerPhase::Move,
            position: pos,
        };
        if let DragOutcome::Scroll { delta } = tracker.handle(sample, t) {
            state.dispatch(delta, ScrollSource::Drag);
            log_frame("return", &state, &chrome);
        }
    }

    // A barely-moving final sample keeps the release below fling speed.
    t += FRAME;
    set_clock(Box::new(TestClock { t }));
    pos.y += 0.5;
    tracker.handle(
        PointerSample {
            phase: PointerPhase::Move,
            position: pos,
        },
        t,
    );
    t += FRAME;
    set_clock(Box::new(TestClock { t }));
    tracker.handle(
        PointerSample {
            phase: PointerPhase::Up,
            position: pos,
        },
        t,
    );

    state.settle(AnimationSpec::fast());
    for _ in 0..120 {
        t += FRAME;
        set_clock(Box::new(TestClock { t }));
        let active = state.tick(t);
        log_frame("settle", &state, &chrome);
        if !active {
            break;
        }
    }

    // A text selection inside the content asks for its toolbar.
    let selection = Rect::new(48.0, 180.0, 220.0, 36.0);
    let placed = place_toolbar(
        selection,
        Size::new(180.0, 44.0),
        Rect::new(0.0, 0.0, 360.0, 640.0),
        12.0,
    );
    log::info!(
        "toolbar {:?} at ({:.0}, {:.0})",
        placed.side,
        placed.position.x,
        placed.position.y
    );

    Ok(())
}
