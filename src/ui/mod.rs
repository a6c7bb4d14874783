// SPDX-License-Identifier: MPL-2.0
//! Presentation layer for the alert system.
//!
//! This module follows a component-based architecture with the Elm-style
//! "state down, messages up" pattern: the overlay owns the render state,
//! the host forwards its messages and composes its view.
//!
//! # Components
//!
//! - [`overlay`] - The `Alerts` component: anchoring, reconciliation, timers
//! - [`toast`] - Card rendering for a single alert
//! - [`animation`] - Entry/exit phase machine and easing
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`icons`] - SVG icon loading and rendering

pub mod animation;
pub mod design_tokens;
pub mod icons;
pub mod overlay;
pub mod toast;
