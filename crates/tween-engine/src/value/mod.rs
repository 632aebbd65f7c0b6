//! Property value model: a tagged union over every animatable variant, with
//! exhaustive matching in `combine` so that a mismatched start/end pair is a
//! typed error rather than a silent coercion.

pub mod color;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use color::Color;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

use serde::{Deserialize, Serialize};

use crate::easing::Ease;
use crate::error::TweenError;
use crate::time::TweenTime;

/// Enum naming the variant of a `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Scalar,
    Vector2,
    Vector3,
    Vector4,
    Color,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Scalar => "Scalar",
            ValueKind::Vector2 => "Vector2",
            ValueKind::Vector3 => "Vector3",
            ValueKind::Vector4 => "Vector4",
            ValueKind::Color => "Color",
        }
    }

    /// Number of interpolatable components carried by this variant
    pub fn component_count(&self) -> usize {
        match self {
            ValueKind::Scalar => 1,
            ValueKind::Vector2 => 2,
            ValueKind::Vector3 => 3,
            ValueKind::Vector4 | ValueKind::Color => 4,
        }
    }
}

/// A concrete animatable property value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit floating point number
    Scalar(f64),
    /// 2D vector
    Vector2(Vector2),
    /// 3D vector
    Vector3(Vector3),
    /// 4D vector
    Vector4(Vector4),
    /// RGBA color
    Color(Color),
}

impl Value {
    /// Get the variant of this value as a `ValueKind` enum.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vector2(_) => ValueKind::Vector2,
            Value::Vector3(_) => ValueKind::Vector3,
            Value::Vector4(_) => ValueKind::Vector4,
            Value::Color(_) => ValueKind::Color,
        }
    }

    /// Check if this value can be combined with another value
    pub fn can_combine_with(&self, other: &Value) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Get the interpolatable components of this value
    pub fn components(&self) -> Vec<f64> {
        match self {
            Value::Scalar(s) => vec![*s],
            Value::Vector2(v) => vec![v.x, v.y],
            Value::Vector3(v) => vec![v.x, v.y, v.z],
            Value::Vector4(v) => vec![v.x, v.y, v.z, v.w],
            Value::Color(c) => vec![c.r, c.g, c.b, c.a],
        }
    }

    /// Rebuild a value of the given kind from raw components.
    pub fn from_components(kind: ValueKind, components: &[f64]) -> Result<Value, TweenError> {
        if components.len() != kind.component_count() {
            return Err(TweenError::ComponentCountMismatch {
                expected: kind.component_count(),
                actual: components.len(),
            });
        }
        Ok(match kind {
            ValueKind::Scalar => Value::Scalar(components[0]),
            ValueKind::Vector2 => Value::Vector2(Vector2::new(components[0], components[1])),
            ValueKind::Vector3 => {
                Value::Vector3(Vector3::new(components[0], components[1], components[2]))
            }
            ValueKind::Vector4 => Value::Vector4(Vector4::new(
                components[0],
                components[1],
                components[2],
                components[3],
            )),
            ValueKind::Color => Value::Color(Color::new(
                components[0],
                components[1],
                components[2],
                components[3],
            )),
        })
    }

    /// Compute the in-between value toward `end` at `elapsed` of `duration`.
    ///
    /// Each numeric component is eased independently through the catalog. A
    /// mismatched variant pair is an error, never a silent no-op.
    pub fn combine(
        &self,
        end: &Value,
        ease: Ease,
        elapsed: TweenTime,
        duration: TweenTime,
    ) -> Result<Value, TweenError> {
        let t = elapsed.as_seconds();
        let d = duration.as_seconds();
        match (self, end) {
            (Value::Scalar(s), Value::Scalar(e)) => Ok(Value::Scalar(ease.apply(*s, e - s, t, d))),
            (Value::Vector2(s), Value::Vector2(e)) => Ok(Value::Vector2(Vector2::new(
                ease.apply(s.x, e.x - s.x, t, d),
                ease.apply(s.y, e.y - s.y, t, d),
            ))),
            (Value::Vector3(s), Value::Vector3(e)) => Ok(Value::Vector3(Vector3::new(
                ease.apply(s.x, e.x - s.x, t, d),
                ease.apply(s.y, e.y - s.y, t, d),
                ease.apply(s.z, e.z - s.z, t, d),
            ))),
            (Value::Vector4(s), Value::Vector4(e)) => Ok(Value::Vector4(Vector4::new(
                ease.apply(s.x, e.x - s.x, t, d),
                ease.apply(s.y, e.y - s.y, t, d),
                ease.apply(s.z, e.z - s.z, t, d),
                ease.apply(s.w, e.w - s.w, t, d),
            ))),
            (Value::Color(s), Value::Color(e)) => Ok(Value::Color(Color::new(
                ease.apply(s.r, e.r - s.r, t, d),
                ease.apply(s.g, e.g - s.g, t, d),
                ease.apply(s.b, e.b - s.b, t, d),
                ease.apply(s.a, e.a - s.a, t, d),
            ))),
            (start, end) => Err(TweenError::ValueMismatch {
                expected: start.kind(),
                actual: end.kind(),
            }),
        }
    }
}

impl From<f64> for Value {
    fn from(scalar: f64) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Vector2> for Value {
    fn from(v: Vector2) -> Self {
        Value::Vector2(v)
    }
}

impl From<Vector3> for Value {
    fn from(v: Vector3) -> Self {
        Value::Vector3(v)
    }
}

impl From<Vector4> for Value {
    fn from(v: Vector4) -> Self {
        Value::Vector4(v)
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}
