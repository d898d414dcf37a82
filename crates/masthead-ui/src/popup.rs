//! Selection-toolbar placement: a pure transform from an anchor rect (the
//! selection bounds), the popup size, and the container bounds to an
//! on-screen position that avoids the container edges.
//!
//! Placement order: centered above the anchor, below it when the top would
//! clip, pinned inside the container when neither side fits. The result
//! stays inside the container whenever the popup can fit at all.

use masthead_core::{Rect, Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarSide {
    Above,
    Below,
    /// Neither side had room; the popup overlays the anchor region.
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolbarPlacement {
    pub position: Vec2,
    pub side: ToolbarSide,
}

pub fn place_toolbar(anchor: Rect, popup: Size, container: Rect, margin: f32) -> ToolbarPlacement {
    let bounds = container.inset(margin.max(0.0));

    let x = if popup.width >= bounds.w {
        bounds.x
    } else {
        (anchor.center_x() - popup.width / 2.0).clamp(bounds.x, bounds.right() - popup.width)
    };

    let above_y = anchor.y - margin.max(0.0) - popup.height;
    let below_y = anchor.bottom() + margin.max(0.0);

    let (y, side) = if above_y >= bounds.y {
        (above_y, ToolbarSide::Above)
    } else if below_y + popup.height <= bounds.bottom() {
        (below_y, ToolbarSide::Below)
    } else if popup.height >= bounds.h {
        (bounds.y, ToolbarSide::Overlay)
    } else {
        (
            (anchor.y - popup.height).clamp(bounds.y, bounds.bottom() - popup.height),
            ToolbarSide::Overlay,
        )
    };

    ToolbarPlacement {
        position: Vec2 { x, y },
        side,
    }
}
