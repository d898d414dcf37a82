//! Turns raw pointer samples into the scroll-delta stream the coordinator
//! consumes, with a px/s velocity estimate for the fling handoff.

use masthead_core::{PointerPhase, PointerSample, Vec2};
use web_time::Instant;

// Input cadence clamp: keeps one late or duplicated timestamp from blowing
// up the velocity estimate.
const MIN_INPUT_DT: f32 = 1.0 / 240.0;
const MAX_INPUT_DT: f32 = 1.0 / 15.0;

/// Below this release speed a lift is a stop, not a fling.
const FLING_MIN_PX_S: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    None,
    /// Dispatch this delta with `ScrollSource::Drag`.
    Scroll { delta: Vec2 },
    /// Pointer lifted with speed; hand the velocity to the fling.
    Fling { velocity: Vec2 },
}

struct Press {
    last: Vec2,
    last_t: Instant,
    vel: Vec2,
}

#[derive(Default)]
pub struct DragScrollTracker {
    press: Option<Press>,
}

impl DragScrollTracker {
    pub fn new() -> Self {
        Self { press: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }

    pub fn handle(&mut self, sample: PointerSample, now: Instant) -> DragOutcome {
        match sample.phase {
            PointerPhase::Down => {
                self.press = Some(Press {
                    last: sample.position,
                    last_t: now,
                    vel: Vec2::ZERO,
                });
                DragOutcome::None
            }
            PointerPhase::Move => {
                let Some(p) = self.press.as_mut() else {
                    return DragOutcome::None;
                };
                let delta = Vec2 {
                    x: sample.position.x - p.last.x,
                    y: sample.position.y - p.last.y,
                };
                let dt = now
                    .saturating_duration_since(p.last_t)
                    .as_secs_f32()
                    .clamp(MIN_INPUT_DT, MAX_INPUT_DT);
                p.vel = Vec2 {
                    x: delta.x / dt,
                    y: delta.y / dt,
                };
                p.last = sample.position;
                p.last_t = now;
                DragOutcome::Scroll { delta }
            }
            PointerPhase::Up => match self.press.take() {
                Some(p) if p.vel.x.abs().max(p.vel.y.abs()) >= FLING_MIN_PX_S => {
                    DragOutcome::Fling { velocity: p.vel }
                }
                _ => DragOutcome::None,
            },
            PointerPhase::Cancel => {
                self.press = None;
                DragOutcome::None
            }
        }
    }
}
