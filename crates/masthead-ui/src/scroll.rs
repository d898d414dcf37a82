//! # Content scroll model
//!
//! The scrollable content region that sits under a collapsing header. The
//! state stores viewport size, content size, offset, and fling velocity.
//! `scroll_by` consumes a requested offset delta and returns the leftover
//! motion, which is what makes header and content compose into one gesture:
//! each consumer takes what it can and hands the rest on.
//!
//! Offset convention: `0` is the top of the content; positive offsets move
//! down-list. The offset is always clamped to
//! `[0, max(content_height - viewport_height, 0)]`.
//!
//! Fling physics is advanced with an explicit `now` so replayed input is
//! deterministic; the embedder calls `tick` once per frame while
//! `is_flinging()` holds.

use masthead_core::{Signal, signal};
use std::cell::RefCell;
use web_time::Instant;

const FLING_STOP_PX_S: f32 = 5.0;
const FLING_DECAY_PER_60HZ: f32 = 0.90;

pub struct ContentScrollState {
    offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,

    // physics
    vel_px_s: RefCell<f32>,
    last_tick: RefCell<Option<Instant>>,
}

impl Default for ContentScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentScrollState {
    pub fn new() -> Self {
        Self {
            offset: signal(0.0),
            viewport_height: signal(0.0),
            content_height: signal(0.0),
            vel_px_s: RefCell::new(0.0),
            last_tick: RefCell::new(None),
        }
    }

    pub fn set_viewport_height(&self, h: f32) {
        self.viewport_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_content_height(&self, h: f32) {
        self.content_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn set_offset(&self, off: f32) {
        self.offset.set(off.clamp(0.0, self.max_offset()));
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height.get() - self.viewport_height.get()).max(0.0)
    }

    pub fn subscribe_offset(&self, f: impl Fn(&f32) + 'static) {
        self.offset.subscribe(f);
    }

    fn clamp_offset(&self) {
        let max_off = self.max_offset();
        self.offset.update(|o| {
            *o = o.clamp(0.0, max_off);
        });
    }

    /// Consume an offset delta (positive scrolls down-list), clamp to
    /// bounds, return leftover.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let before = self.offset.get();
        let new_off = (before + delta).clamp(0.0, self.max_offset());
        self.offset.set(new_off);
        delta - (new_off - before)
    }

    /// Start inertial scrolling at `velocity_px_s` (offset px/sec).
    pub fn fling(&self, velocity_px_s: f32) {
        *self.vel_px_s.borrow_mut() = velocity_px_s;
        *self.last_tick.borrow_mut() = None;
    }

    pub fn is_flinging(&self) -> bool {
        self.vel_px_s.borrow().abs() >= FLING_STOP_PX_S
    }

    pub fn stop_fling(&self) {
        *self.vel_px_s.borrow_mut() = 0.0;
        *self.last_tick.borrow_mut() = None;
    }

    /// Advance fling physics one frame; returns true while still moving.
    pub fn tick(&self, now: Instant) -> bool {
        let vel0 = *self.vel_px_s.borrow();
        if vel0.abs() < FLING_STOP_PX_S {
            return false;
        }

        let dt = match self.last_tick.replace(Some(now)) {
            // First frame after `fling` establishes the time base.
            None => return true,
            Some(last) => (now.saturating_duration_since(last)).as_secs_f32().min(0.1),
        };
        if dt <= 0.0 {
            return true;
        }

        let before = self.offset.get();
        let new_off = (before + vel0 * dt).clamp(0.0, self.max_offset());
        self.offset.set(new_off);

        // Stop immediately when pinned at a bound.
        if (new_off - before).abs() < 0.01 {
            self.stop_fling();
            return false;
        }

        let decay = FLING_DECAY_PER_60HZ.powf(dt * 60.0);
        *self.vel_px_s.borrow_mut() = vel0 * decay;
        true
    }
}
