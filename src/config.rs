// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration and centralized defaults.
//!
//! `AlertsConfig` is handed to the overlay at construction time. The enums
//! derive serde so hosts can persist a user's preferred corner or slide
//! direction alongside their own settings.
//!
//! # Defaults
//!
//! - Position: top-right
//! - Direction: right
//! - Base display duration: 3000 ms
//! - Per-item stagger: 500 ms

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default base display duration before auto-dismissal (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Minimum allowed base display duration (in milliseconds).
pub const MIN_DURATION_MS: u64 = 500;

/// Maximum allowed base display duration (in milliseconds).
pub const MAX_DURATION_MS: u64 = 60_000;

/// Default per-item stagger added on top of the base duration
/// (in milliseconds). Keeps near-simultaneous dismissals from colliding
/// visually when several alerts arrive in quick succession.
pub const DEFAULT_STAGGER_MS: u64 = 500;

/// Screen corner the overlay anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    CenterTop,
    CenterBottom,
}

/// Axis and sign of the entry/exit slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

impl Direction {
    /// Returns `true` for `Left`/`Right`.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Configuration for the alerts overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertsConfig {
    /// Screen anchor for the toast stack.
    pub position: Position,
    /// Slide axis for entry/exit animations.
    pub direction: Direction,
    /// Base display duration before auto-dismissal.
    pub duration: Duration,
    /// Per-item stagger added on top of the base duration.
    pub stagger: Duration,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            direction: Direction::default(),
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
        }
    }
}

/// Keeps the display duration inside the supported range so host-provided
/// values cannot request unreadable flashes or forever-toasts.
fn clamp_duration(duration: Duration) -> Duration {
    Duration::from_millis(
        (duration.as_millis() as u64).clamp(MIN_DURATION_MS, MAX_DURATION_MS),
    )
}

impl AlertsConfig {
    /// Creates a configuration with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the screen anchor.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the slide direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the base display duration, clamped to the supported range.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = clamp_duration(duration);
        self
    }

    /// Sets the per-item stagger.
    #[must_use]
    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}
