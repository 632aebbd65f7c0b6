//! Tween Engine
//!
//! A property tweening engine: an easing catalog, a generic interpolation
//! abstraction, a per-animation state machine, and tick-driven registries
//! that track and advance many concurrent tweens from an external clock.
//!
//! The engine is single-threaded and cooperative. It never owns the targets
//! it mutates, performs no rendering, and has no opinion on where clock
//! ticks come from.

pub mod clock;
pub mod easing;
pub mod error;
pub mod property;
pub mod registry;
pub mod time;
pub mod tween;
pub mod value;

// Re-export common types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Ease;
pub use error::TweenError;
pub use property::{InterpolationPair, Property};
pub use registry::{Directory, Registry, MANUAL_CONTEXT, SHARED_CONTEXT};
pub use time::{Timer, TweenTime};
pub use tween::{Callbacks, Tween, TweenEvent, TweenHandle, TweenState};
pub use value::{Color, Value, ValueKind, Vector2, Vector3, Vector4};

/// Tween engine result type
pub type Result<T> = core::result::Result<T, TweenError>;
