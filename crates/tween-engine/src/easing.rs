//! Easing catalog.
//!
//! Every function follows the classic `(begin, change, time, duration)`
//! contract: it returns the position at `time`, with `f(b, c, 0, d) == b` and
//! `f(b, c, d, d) == b + c`. The exponential and elastic curves special-case
//! the boundaries explicitly because their closed forms are numerically
//! ill-defined there.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Overshoot constant for the `back` family.
const BACK_OVERSHOOT: f64 = 1.70158;

/// Parabola scale for the `bounce` family.
const BOUNCE_SCALE: f64 = 7.5625;

pub fn linear(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    change * time / duration + begin
}

pub fn quad_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration;
    change * t * t + begin
}

pub fn quad_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration;
    -change * t * (t - 2.0) + begin
}

pub fn quad_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * t * t + begin
    } else {
        t -= 1.0;
        -change / 2.0 * (t * (t - 2.0) - 1.0) + begin
    }
}

pub fn cubic_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration;
    change * t * t * t + begin
}

pub fn cubic_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration - 1.0;
    change * (t * t * t + 1.0) + begin
}

pub fn cubic_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * t * t * t + begin
    } else {
        t -= 2.0;
        change / 2.0 * (t * t * t + 2.0) + begin
    }
}

pub fn quart_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration;
    change * t * t * t * t + begin
}

pub fn quart_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration - 1.0;
    -change * (t * t * t * t - 1.0) + begin
}

pub fn quart_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * t * t * t * t + begin
    } else {
        t -= 2.0;
        -change / 2.0 * (t * t * t * t - 2.0) + begin
    }
}

pub fn quint_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration;
    change * t * t * t * t * t + begin
}

pub fn quint_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration - 1.0;
    change * (t * t * t * t * t + 1.0) + begin
}

pub fn quint_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * t * t * t * t * t + begin
    } else {
        t -= 2.0;
        change / 2.0 * (t * t * t * t * t + 2.0) + begin
    }
}

pub fn sine_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    -change * (time / duration * FRAC_PI_2).cos() + change + begin
}

pub fn sine_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    change * (time / duration * FRAC_PI_2).sin() + begin
}

pub fn sine_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    -change / 2.0 * ((PI * time / duration).cos() - 1.0) + begin
}

pub fn expo_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time == 0.0 {
        begin
    } else {
        change * 2f64.powf(10.0 * (time / duration - 1.0)) + begin
    }
}

pub fn expo_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time == duration {
        begin + change
    } else {
        change * (-(2f64.powf(-10.0 * time / duration)) + 1.0) + begin
    }
}

pub fn expo_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time == 0.0 {
        return begin;
    }
    if time == duration {
        return begin + change;
    }
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + begin
    } else {
        t -= 1.0;
        change / 2.0 * (-(2f64.powf(-10.0 * t)) + 2.0) + begin
    }
}

pub fn circ_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration;
    -change * ((1.0 - t * t).sqrt() - 1.0) + begin
}

pub fn circ_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let t = time / duration - 1.0;
    change * (1.0 - t * t).sqrt() + begin
}

pub fn circ_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        -change / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + begin
    } else {
        t -= 2.0;
        change / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + begin
    }
}

pub fn back_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = time / duration;
    change * t * t * ((s + 1.0) * t - s) + begin
}

pub fn back_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = time / duration - 1.0;
    change * (t * t * ((s + 1.0) * t + s) + 1.0) + begin
}

pub fn back_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let s = BACK_OVERSHOOT * 1.525;
    let mut t = time / (duration / 2.0);
    if t < 1.0 {
        change / 2.0 * (t * t * ((s + 1.0) * t - s)) + begin
    } else {
        t -= 2.0;
        change / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + begin
    }
}

pub fn elastic_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time == 0.0 {
        return begin;
    }
    let mut t = time / duration;
    if t == 1.0 {
        return begin + change;
    }
    let period = duration * 0.3;
    let amplitude = change;
    let phase = period / 4.0;
    t -= 1.0;
    -(amplitude * 2f64.powf(10.0 * t) * ((t * duration - phase) * TAU / period).sin()) + begin
}

pub fn elastic_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time == 0.0 {
        return begin;
    }
    let t = time / duration;
    if t == 1.0 {
        return begin + change;
    }
    let period = duration * 0.3;
    let amplitude = change;
    let phase = period / 4.0;
    amplitude * 2f64.powf(-10.0 * t) * ((t * duration - phase) * TAU / period).sin() + change + begin
}

pub fn elastic_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time == 0.0 {
        return begin;
    }
    let mut t = time / (duration / 2.0);
    if t == 2.0 {
        return begin + change;
    }
    let period = duration * 0.45;
    let amplitude = change;
    let phase = period / 4.0;
    t -= 1.0;
    if t < 0.0 {
        -0.5 * (amplitude * 2f64.powf(10.0 * t) * ((t * duration - phase) * TAU / period).sin())
            + begin
    } else {
        amplitude * 2f64.powf(-10.0 * t) * ((t * duration - phase) * TAU / period).sin() * 0.5
            + change
            + begin
    }
}

pub fn bounce_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    let mut t = time / duration;
    if t < 1.0 / 2.75 {
        change * (BOUNCE_SCALE * t * t) + begin
    } else if t < 2.0 / 2.75 {
        t -= 1.5 / 2.75;
        change * (BOUNCE_SCALE * t * t + 0.75) + begin
    } else if t < 2.5 / 2.75 {
        t -= 2.25 / 2.75;
        change * (BOUNCE_SCALE * t * t + 0.9375) + begin
    } else {
        t -= 2.625 / 2.75;
        change * (BOUNCE_SCALE * t * t + 0.984375) + begin
    }
}

pub fn bounce_in(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    change - bounce_out(0.0, change, duration - time, duration) + begin
}

pub fn bounce_in_out(begin: f64, change: f64, time: f64, duration: f64) -> f64 {
    if time < duration / 2.0 {
        bounce_in(0.0, change, time * 2.0, duration) * 0.5 + begin
    } else {
        bounce_out(0.0, change, time * 2.0 - duration, duration) * 0.5 + change * 0.5 + begin
    }
}

/// Selector naming one curve family and direction variant.
///
/// Stateless; selecting a variant selects one of the pure functions above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

impl Ease {
    /// Every selector in the catalog, in family order.
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::QuadIn,
        Ease::QuadOut,
        Ease::QuadInOut,
        Ease::CubicIn,
        Ease::CubicOut,
        Ease::CubicInOut,
        Ease::QuartIn,
        Ease::QuartOut,
        Ease::QuartInOut,
        Ease::QuintIn,
        Ease::QuintOut,
        Ease::QuintInOut,
        Ease::SineIn,
        Ease::SineOut,
        Ease::SineInOut,
        Ease::ExpoIn,
        Ease::ExpoOut,
        Ease::ExpoInOut,
        Ease::CircIn,
        Ease::CircOut,
        Ease::CircInOut,
        Ease::BackIn,
        Ease::BackOut,
        Ease::BackInOut,
        Ease::ElasticIn,
        Ease::ElasticOut,
        Ease::ElasticInOut,
        Ease::BounceIn,
        Ease::BounceOut,
        Ease::BounceInOut,
    ];

    /// Get the name of this easing selector
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::QuadIn => "quad_in",
            Ease::QuadOut => "quad_out",
            Ease::QuadInOut => "quad_in_out",
            Ease::CubicIn => "cubic_in",
            Ease::CubicOut => "cubic_out",
            Ease::CubicInOut => "cubic_in_out",
            Ease::QuartIn => "quart_in",
            Ease::QuartOut => "quart_out",
            Ease::QuartInOut => "quart_in_out",
            Ease::QuintIn => "quint_in",
            Ease::QuintOut => "quint_out",
            Ease::QuintInOut => "quint_in_out",
            Ease::SineIn => "sine_in",
            Ease::SineOut => "sine_out",
            Ease::SineInOut => "sine_in_out",
            Ease::ExpoIn => "expo_in",
            Ease::ExpoOut => "expo_out",
            Ease::ExpoInOut => "expo_in_out",
            Ease::CircIn => "circ_in",
            Ease::CircOut => "circ_out",
            Ease::CircInOut => "circ_in_out",
            Ease::BackIn => "back_in",
            Ease::BackOut => "back_out",
            Ease::BackInOut => "back_in_out",
            Ease::ElasticIn => "elastic_in",
            Ease::ElasticOut => "elastic_out",
            Ease::ElasticInOut => "elastic_in_out",
            Ease::BounceIn => "bounce_in",
            Ease::BounceOut => "bounce_out",
            Ease::BounceInOut => "bounce_in_out",
        }
    }

    /// Evaluate the selected curve at `time`.
    ///
    /// A non-positive `duration` returns `begin + change` so that
    /// zero-duration tweens land on their end value without dividing by zero.
    pub fn apply(&self, begin: f64, change: f64, time: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return begin + change;
        }
        match self {
            Ease::Linear => linear(begin, change, time, duration),
            Ease::QuadIn => quad_in(begin, change, time, duration),
            Ease::QuadOut => quad_out(begin, change, time, duration),
            Ease::QuadInOut => quad_in_out(begin, change, time, duration),
            Ease::CubicIn => cubic_in(begin, change, time, duration),
            Ease::CubicOut => cubic_out(begin, change, time, duration),
            Ease::CubicInOut => cubic_in_out(begin, change, time, duration),
            Ease::QuartIn => quart_in(begin, change, time, duration),
            Ease::QuartOut => quart_out(begin, change, time, duration),
            Ease::QuartInOut => quart_in_out(begin, change, time, duration),
            Ease::QuintIn => quint_in(begin, change, time, duration),
            Ease::QuintOut => quint_out(begin, change, time, duration),
            Ease::QuintInOut => quint_in_out(begin, change, time, duration),
            Ease::SineIn => sine_in(begin, change, time, duration),
            Ease::SineOut => sine_out(begin, change, time, duration),
            Ease::SineInOut => sine_in_out(begin, change, time, duration),
            Ease::ExpoIn => expo_in(begin, change, time, duration),
            Ease::ExpoOut => expo_out(begin, change, time, duration),
            Ease::ExpoInOut => expo_in_out(begin, change, time, duration),
            Ease::CircIn => circ_in(begin, change, time, duration),
            Ease::CircOut => circ_out(begin, change, time, duration),
            Ease::CircInOut => circ_in_out(begin, change, time, duration),
            Ease::BackIn => back_in(begin, change, time, duration),
            Ease::BackOut => back_out(begin, change, time, duration),
            Ease::BackInOut => back_in_out(begin, change, time, duration),
            Ease::ElasticIn => elastic_in(begin, change, time, duration),
            Ease::ElasticOut => elastic_out(begin, change, time, duration),
            Ease::ElasticInOut => elastic_in_out(begin, change, time, duration),
            Ease::BounceIn => bounce_in(begin, change, time, duration),
            Ease::BounceOut => bounce_out(begin, change, time, duration),
            Ease::BounceInOut => bounce_in_out(begin, change, time, duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<_> = Ease::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), Ease::ALL.len());
    }

    #[test]
    fn zero_duration_lands_on_end_value() {
        for ease in Ease::ALL {
            assert_eq!(ease.apply(2.0, 8.0, 0.0, 0.0), 10.0);
            assert_eq!(ease.apply(2.0, 8.0, 0.5, 0.0), 10.0);
        }
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(Ease::default(), Ease::Linear);
    }
}
