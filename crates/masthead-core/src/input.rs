use crate::Vec2;

/// Where a scroll delta came from. The collapse arithmetic treats all
/// sources uniformly; embedders use the tag to decide things like
/// settle-on-release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollSource {
    Drag,
    Fling,
    Wheel,
    Programmatic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer event as the platform delivers it. Timestamps travel
/// separately so replayed streams stay deterministic.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub position: Vec2,
}
