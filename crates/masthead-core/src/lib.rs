//! # Masthead core
//!
//! The value layer shared by everything in Masthead: observable state,
//! float geometry, colors, the animation clock, and the input vocabulary
//! that scroll coordination consumes.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use masthead_core::*;
//!
//! let offset = signal(0.0f32);
//! offset.set(24.0);
//! offset.update(|o| *o += 8.0);
//! assert_eq!(offset.get(), 32.0);
//! ```
//!
//! Stateful objects (`ContentScrollState`, `HeaderCollapseState` in
//! `masthead-ui`) store their observable fields as signals so render
//! callbacks can subscribe without the state knowing who is watching.
//!
//! ## Animation clock
//!
//! Tweens read time through a process-wide [`Clock`]. The platform installs
//! [`SystemClock`]; tests install [`TestClock`] and step it explicitly:
//!
//! ```rust
//! use masthead_core::*;
//! use web_time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! set_clock(Box::new(TestClock { t: t0 }));
//!
//! let mut height = AnimatedValue::new(
//!     64.0f32,
//!     AnimationSpec::tween(Duration::from_millis(200), Easing::Linear),
//! );
//! height.set_target(264.0);
//! set_clock(Box::new(TestClock { t: t0 + Duration::from_millis(100) }));
//! height.update();
//! assert!((*height.get() - 164.0).abs() < 0.01);
//! ```
//!
//! There is no composition runtime here: Masthead is headless, and the
//! embedding toolkit owns state lifetimes.

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod signal;
pub mod tests;

pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use signal::*;
