//! # Masthead
//!
//! Headless collapsing-header scroll coordination. The library owns no
//! views and draws nothing: it converts the platform's scroll-delta stream
//! into a bounded collapse progress for a header plus residual motion for
//! the content underneath, and hands rendering the numbers it needs.
//!
//! ```rust
//! use masthead_core::{ScrollSource, Vec2};
//! use masthead_ui::*;
//!
//! let header = CollapsingHeaderState::new(HeaderSpec::new(64.0, 264.0)?);
//! header.content().set_viewport_height(640.0);
//! header.content().set_content_height(2400.0);
//!
//! // Finger moves up 50 px: the header shrinks before the list scrolls.
//! header.dispatch(Vec2 { x: 0.0, y: -50.0 }, ScrollSource::Drag);
//! assert_eq!(header.metrics().progress, 0.75);
//! # Ok::<(), masthead_core::SpecError>(())
//! ```
//!
//! The pieces, separable when an embedder needs them raw:
//!
//! - [`collapse`] — the pre-scroll interceptor and its single stored field.
//! - [`scroll`] — the content scroll state with the consume/leftover
//!   contract.
//! - [`header`] — one screen's wiring: dispatch, metrics, settle.
//! - [`chrome`] — explicit theme configuration resolved by progress.
//! - [`popup`] — selection-toolbar placement avoiding container edges.
//! - [`gestures`] — pointer samples to scroll deltas and fling velocity.

pub mod chrome;
pub mod collapse;
pub mod gestures;
pub mod header;
pub mod popup;
pub mod scroll;

pub use chrome::{HeaderChrome, ResolvedChrome};
pub use collapse::{
    HeaderCollapseConnection, HeaderCollapseState, HeaderSpec, PreScroll, height_for, progress_of,
};
pub use gestures::{DragOutcome, DragScrollTracker};
pub use header::{CollapsingHeaderState, HeaderMetrics};
pub use popup::{ToolbarPlacement, ToolbarSide, place_toolbar};
pub use scroll::ContentScrollState;
