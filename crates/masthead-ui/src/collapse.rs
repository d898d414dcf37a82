//! # Collapsing-header scroll coordination
//!
//! Converts vertical scroll deltas into a bounded collapse amount for a
//! header plus residual motion for the content region underneath, so header
//! collapse and content scroll compose into one continuous gesture.
//!
//! The interception point is *pre-scroll*: [`PreScroll::on_pre_scroll`] runs
//! before the content consumes anything, takes the portion of the delta the
//! header needs, and leaves the rest for the list.
//!
//! Delta convention: `dy < 0` is the finger moving up (content scrolling
//! down-list, header collapsing); `dy > 0` is the finger moving down
//! (header re-expanding once the content is back at its own top).
//!
//! State model: one stored field, `consumed` — how many of the
//! `collapse_range()` pixels have been used to collapse the header.
//! Progress is derived on read (`1 - consumed / range`, in `[0, 1]`,
//! `1` = fully expanded) and never stored, so the two can't drift apart.

use masthead_core::{ScrollSource, Signal, SpecError, Vec2, signal};
use std::rc::Rc;

use crate::scroll::ContentScrollState;

/// Header height bounds, fixed for the lifetime of the state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderSpec {
    pub min_height: f32,
    pub max_height: f32,
}

impl HeaderSpec {
    /// Rejects non-finite, negative, or inverted heights. `min == max` is
    /// accepted and yields a header that never collapses.
    pub fn new(min_height: f32, max_height: f32) -> Result<Self, SpecError> {
        if !min_height.is_finite() || !max_height.is_finite() {
            return Err(SpecError::NonFiniteHeight {
                min: min_height,
                max: max_height,
            });
        }
        if min_height < 0.0 || max_height < 0.0 {
            return Err(SpecError::NegativeHeight {
                min: min_height,
                max: max_height,
            });
        }
        if min_height > max_height {
            return Err(SpecError::InvertedRange {
                min: min_height,
                max: max_height,
            });
        }
        Ok(Self {
            min_height,
            max_height,
        })
    }

    /// Total scroll distance that corresponds to fully collapsing the
    /// header.
    pub fn collapse_range(&self) -> f32 {
        self.max_height - self.min_height
    }
}

/// Progress from a consumed amount; pinned to 0 for a degenerate range so
/// the `min == max` configuration renders always-collapsed without ever
/// dividing.
pub fn progress_of(consumed: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (1.0 - consumed / range).clamp(0.0, 1.0)
}

/// Rendered header height for a given progress.
pub fn height_for(spec: &HeaderSpec, progress: f32) -> f32 {
    spec.min_height + spec.collapse_range() * progress.clamp(0.0, 1.0)
}

/// The collapse amount of one header. Mutated only from the scroll
/// interception path (single logical writer); reads happen for rendering on
/// the same thread.
pub struct HeaderCollapseState {
    spec: HeaderSpec,
    consumed: Signal<f32>,
}

impl HeaderCollapseState {
    pub fn new(spec: HeaderSpec) -> Self {
        if spec.collapse_range() <= 0.0 {
            log::warn!(
                "collapsing header constructed with zero collapse range \
                 (min {} == max {}); it will stay collapsed",
                spec.min_height,
                spec.max_height
            );
        }
        Self {
            spec,
            consumed: signal(0.0),
        }
    }

    pub fn spec(&self) -> HeaderSpec {
        self.spec
    }

    pub fn consumed(&self) -> f32 {
        self.consumed.get()
    }

    pub fn progress(&self) -> f32 {
        progress_of(self.consumed.get(), self.spec.collapse_range())
    }

    pub fn height(&self) -> f32 {
        height_for(&self.spec, self.progress())
    }

    /// Programmatic jump to a progress value (1 = expanded).
    pub fn set_progress(&self, progress: f32) {
        let range = self.spec.collapse_range();
        self.set_consumed(range * (1.0 - progress.clamp(0.0, 1.0)));
    }

    pub fn subscribe(&self, f: impl Fn(&f32) + 'static) {
        self.consumed.subscribe(f);
    }

    pub(crate) fn set_consumed(&self, px: f32) {
        let range = self.spec.collapse_range().max(0.0);
        self.consumed.set(px.clamp(0.0, range));
    }
}

/// Pre-scroll interception: consume part of a scroll delta before the
/// nested scrollable content receives it. Returns the consumed portion;
/// the caller forwards the remainder to the content.
pub trait PreScroll {
    fn on_pre_scroll(&self, available: Vec2, source: ScrollSource) -> Vec2;
}

/// The one concrete interceptor: couples a header's collapse state to the
/// scroll offset of the content region so the header may only re-expand
/// once the content has scrolled back to its own top.
pub struct HeaderCollapseConnection {
    header: Rc<HeaderCollapseState>,
    content: Rc<ContentScrollState>,
}

impl HeaderCollapseConnection {
    pub fn new(header: Rc<HeaderCollapseState>, content: Rc<ContentScrollState>) -> Self {
        Self { header, content }
    }

    pub fn header(&self) -> &Rc<HeaderCollapseState> {
        &self.header
    }
}

impl PreScroll for HeaderCollapseConnection {
    fn on_pre_scroll(&self, available: Vec2, _source: ScrollSource) -> Vec2 {
        let dy = available.y;
        let range = self.header.spec.collapse_range();
        if range <= 0.0 || dy == 0.0 {
            return Vec2::ZERO;
        }

        let consumed = self.header.consumed();

        if dy < 0.0 {
            // Collapsing: the header shrinks before the list moves.
            if self.header.progress() <= 0.0 {
                return Vec2::ZERO;
            }
            let allowed = range - consumed;
            if -dy <= allowed {
                self.header.set_consumed(consumed - dy);
                Vec2 { x: 0.0, y: dy }
            } else {
                self.header.set_consumed(range);
                Vec2 {
                    x: 0.0,
                    y: -allowed,
                }
            }
        } else {
            // Expanding: gated on the content being back at its own top.
            if self.header.progress() >= 1.0 {
                return Vec2::ZERO;
            }
            let available_to_expand = dy - self.content.offset();
            if available_to_expand <= 0.0 {
                return Vec2::ZERO;
            }
            let allowed = consumed;
            if available_to_expand <= allowed {
                self.header.set_consumed(consumed - available_to_expand);
                Vec2 { x: 0.0, y: dy }
            } else {
                self.header.set_consumed(0.0);
                Vec2 { x: 0.0, y: allowed }
            }
        }
    }
}
