//! The interpolation abstraction: the capability contract a property type
//! implements so the engine can read it from a target, produce in-between
//! values, and write them back.

use crate::easing::Ease;
use crate::error::TweenError;
use crate::time::TweenTime;
use crate::value::Value;

/// Capability contract for one animatable property of a target type.
///
/// `capture` and `apply` are required; `combine` has a default that eases
/// each component of the value pair and suits every plain numeric property.
/// Override it for properties with a type-specific interpolation rule
/// (discrete states, hue-wrapped colors, and the like).
pub trait Property<T> {
    /// Read the current value of this property from a target.
    ///
    /// Returns `TweenError::NotAnimatable` when the target does not satisfy
    /// the expected capability.
    fn capture(&self, target: &T) -> Result<Value, TweenError>;

    /// Write a value back to the target.
    fn apply(&self, target: &mut T, value: &Value) -> Result<(), TweenError>;

    /// Produce the in-between value for an eased moment in time.
    #[inline]
    fn combine(
        &self,
        start: &Value,
        end: &Value,
        ease: Ease,
        elapsed: TweenTime,
        duration: TweenTime,
    ) -> Result<Value, TweenError> {
        start.combine(end, ease, elapsed, duration)
    }
}

/// Start/end pair for one property, captured when its tween (re)starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationPair {
    pub start: Value,
    pub end: Value,
}

impl InterpolationPair {
    #[inline]
    pub fn new(start: Value, end: Value) -> Self {
        Self { start, end }
    }

    /// Swap start and end
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
