//! Wiring for one collapsible-header screen: the pre-scroll interceptor,
//! the content scroll state, and an optional settle tween, driven through a
//! single dispatch entry point.

use masthead_core::{AnimatedValue, AnimationSpec, ScrollSource, Vec2};
use std::cell::RefCell;
use std::rc::Rc;
use web_time::Instant;

use crate::collapse::{HeaderCollapseConnection, HeaderCollapseState, HeaderSpec, PreScroll};
use crate::scroll::ContentScrollState;

/// What a header-render callback needs each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderMetrics {
    pub progress: f32,
    pub height: f32,
    pub min_height: f32,
    pub max_height: f32,
}

/// Owns the collapse state for one screen and runs the full gesture step:
/// header pre-consumes, content takes the leftover, whatever neither used
/// is returned to the caller as overscroll.
pub struct CollapsingHeaderState {
    header: Rc<HeaderCollapseState>,
    content: Rc<ContentScrollState>,
    connection: HeaderCollapseConnection,
    settle: RefCell<Option<AnimatedValue<f32>>>,
}

impl CollapsingHeaderState {
    pub fn new(spec: HeaderSpec) -> Self {
        Self::with_content(spec, Rc::new(ContentScrollState::new()))
    }

    pub fn with_content(spec: HeaderSpec, content: Rc<ContentScrollState>) -> Self {
        let header = Rc::new(HeaderCollapseState::new(spec));
        let connection = HeaderCollapseConnection::new(header.clone(), content.clone());
        Self {
            header,
            content,
            connection,
            settle: RefCell::new(None),
        }
    }

    pub fn header(&self) -> &Rc<HeaderCollapseState> {
        &self.header
    }

    pub fn content(&self) -> &Rc<ContentScrollState> {
        &self.content
    }

    pub fn metrics(&self) -> HeaderMetrics {
        let spec = self.header.spec();
        HeaderMetrics {
            progress: self.header.progress(),
            height: self.header.height(),
            min_height: spec.min_height,
            max_height: spec.max_height,
        }
    }

    /// Re-run `f` whenever the collapse amount or the content offset moves.
    pub fn on_change(&self, f: impl Fn() + 'static) {
        let f = Rc::new(f);
        let g = f.clone();
        self.header.subscribe(move |_| g());
        self.content.subscribe_offset(move |_| f());
    }

    /// One gesture step. `available` is the delta the platform proposes
    /// (`dy < 0` collapses); the return value is the portion nobody
    /// consumed, in the same sign convention.
    pub fn dispatch(&self, available: Vec2, source: ScrollSource) -> Vec2 {
        if source == ScrollSource::Drag {
            self.cancel_settle();
        }
        let consumed = self.connection.on_pre_scroll(available, source);
        let leftover = available.y - consumed.y;
        // Content offset moves opposite to the gesture delta.
        let content_leftover = self.content.scroll_by(-leftover);
        Vec2 {
            x: available.x,
            y: -content_leftover,
        }
    }

    /// Snap the header to the nearest bound after a drag ends. A no-op for
    /// degenerate ranges and when already at a bound.
    pub fn settle(&self, spec: AnimationSpec) {
        let range = self.header.spec().collapse_range();
        if range <= 0.0 {
            return;
        }
        let consumed = self.header.consumed();
        let target = if self.header.progress() >= 0.5 {
            0.0
        } else {
            range
        };
        if consumed == target {
            return;
        }
        let mut av = AnimatedValue::new(consumed, spec);
        av.set_target(target);
        *self.settle.borrow_mut() = Some(av);
    }

    pub fn is_settling(&self) -> bool {
        self.settle.borrow().is_some()
    }

    pub fn cancel_settle(&self) {
        self.settle.borrow_mut().take();
    }

    /// Advance fling and settle one frame; returns true while anything is
    /// still moving.
    pub fn tick(&self, now: Instant) -> bool {
        let mut active = self.content.tick(now);

        let step = {
            let mut slot = self.settle.borrow_mut();
            if let Some(av) = slot.as_mut() {
                let ongoing = av.update();
                let value = *av.get();
                if !ongoing {
                    slot.take();
                }
                Some((value, ongoing))
            } else {
                None
            }
        };
        // The signal write happens after the settle borrow is released so
        // subscribers may query this state again.
        if let Some((value, ongoing)) = step {
            self.header.set_consumed(value);
            active |= ongoing;
        }
        active
    }
}
