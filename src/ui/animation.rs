// SPDX-License-Identifier: MPL-2.0
//! Visual lifecycle of a toast, independent of the alert data.
//!
//! Each rendered toast moves through `Entering -> Active -> Exiting`;
//! "removed" is simply no longer being rendered. The phase machine knows
//! nothing about stores or timers: it turns elapsed time into a slide
//! offset and an opacity, so the rendering layer can be swapped without
//! touching store logic.

use crate::config::Direction;
use crate::ui::design_tokens::motion;
use std::time::Duration;

/// Where a toast is in its visual lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Sliding and fading into view. `progress` runs 0.0 -> 1.0.
    Entering { progress: f32 },
    /// Fully visible, at rest.
    Active,
    /// Sliding and fading out of view. `progress` runs 0.0 -> 1.0.
    Exiting { progress: f32 },
}

impl Phase {
    /// Starting phase for a freshly mounted toast.
    #[must_use]
    pub fn entering() -> Self {
        Phase::Entering { progress: 0.0 }
    }

    /// Advances the animation by `dt`.
    ///
    /// Returns `true` once the exit animation has completed and the toast
    /// should be dropped.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match self {
            Phase::Entering { progress } => {
                *progress += fraction_of(dt, motion::ENTER);
                if *progress >= 1.0 {
                    *self = Phase::Active;
                }
                false
            }
            Phase::Active => false,
            Phase::Exiting { progress } => {
                *progress += fraction_of(dt, motion::EXIT);
                *progress >= 1.0
            }
        }
    }

    /// Switches to the exit animation.
    ///
    /// A toast interrupted mid-entry starts its exit from the matching
    /// visual point instead of snapping to the resting state first.
    pub fn begin_exit(&mut self) {
        if let Phase::Exiting { .. } = self {
            return;
        }
        let progress = match *self {
            Phase::Entering { progress } => 1.0 - progress.min(1.0),
            _ => 0.0,
        };
        *self = Phase::Exiting { progress };
    }

    /// Returns `true` while the exit animation runs.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self, Phase::Exiting { .. })
    }

    /// Returns `true` once the entry animation has completed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }
}

fn fraction_of(dt: Duration, total: Duration) -> f32 {
    dt.as_secs_f32() / total.as_secs_f32()
}

/// Cubic ease-out: fast start, gentle landing.
fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Computed presentation of a toast for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Offset along the slide axis, in logical pixels. Positive values
    /// point right (horizontal directions) or down (vertical directions).
    pub offset: f32,
    /// Overall opacity, 0.0 (invisible) to 1.0 (resting).
    pub alpha: f32,
}

impl VisualState {
    /// The resting presentation: centered, fully opaque.
    pub const RESTING: Self = Self {
        offset: 0.0,
        alpha: 1.0,
    };
}

/// Maps a phase and slide direction to this frame's offset and opacity.
#[must_use]
pub fn visual_state(phase: Phase, direction: Direction) -> VisualState {
    let travel = if direction.is_horizontal() {
        motion::SLIDE_X
    } else {
        motion::SLIDE_Y
    };
    let sign = match direction {
        Direction::Left | Direction::Top => -1.0,
        Direction::Right | Direction::Bottom => 1.0,
    };

    match phase {
        Phase::Entering { progress } => {
            let eased = ease_out_cubic(progress);
            VisualState {
                offset: sign * travel * (1.0 - eased),
                alpha: eased,
            }
        }
        Phase::Active => VisualState::RESTING,
        Phase::Exiting { progress } => {
            let eased = ease_out_cubic(progress);
            VisualState {
                offset: sign * travel * eased,
                alpha: 1.0 - eased,
            }
        }
    }
}
