use serde::{Deserialize, Serialize};

/// Lifecycle state of a tween.
///
/// Exactly one state holds at any instant. Captured interpolation pairs are
/// only valid in `Delayed`, `Active`, `Paused`, and `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TweenState {
    /// Constructed, never started (or revived via reset)
    New,
    /// Started, waiting out its configured delay
    Delayed,
    /// Advancing and applying values every tick
    Active,
    /// Frozen mid-flight; elapsed time retained
    Paused,
    /// Stopped; elapsed time and delay discarded
    Inactive,
    /// Reached its duration; final values applied
    Completed,
    /// Removed from its registry; terminal unless revived via reset
    Killed,
}

impl TweenState {
    /// Get the name of this state
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Delayed => "delayed",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Inactive => "inactive",
            Self::Completed => "completed",
            Self::Killed => "killed",
        }
    }

    #[inline]
    pub fn can_start(&self) -> bool {
        matches!(self, Self::New | Self::Inactive)
    }

    #[inline]
    pub fn can_stop(&self) -> bool {
        matches!(self, Self::Active | Self::Paused | Self::Delayed)
    }

    #[inline]
    pub fn can_restart(&self) -> bool {
        matches!(self, Self::Active | Self::Paused | Self::Completed)
    }

    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Active)
    }

    #[inline]
    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Paused)
    }

    #[inline]
    pub fn can_complete(&self) -> bool {
        matches!(self, Self::Active | Self::Paused)
    }

    #[inline]
    pub fn can_kill(&self) -> bool {
        !matches!(self, Self::Killed)
    }

    /// Whether `update` has any effect in this state
    #[inline]
    pub fn can_update(&self) -> bool {
        matches!(self, Self::Active | Self::Delayed)
    }
}

impl From<&str> for TweenState {
    fn from(s: &str) -> Self {
        match s {
            "delayed" => Self::Delayed,
            "active" => Self::Active,
            "paused" => Self::Paused,
            "inactive" => Self::Inactive,
            "completed" => Self::Completed,
            "killed" => Self::Killed,
            _ => Self::New,
        }
    }
}
