// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Every asset paints with `currentColor`, so the
//! caller picks the tint through the widget's style (category accents for
//! severity icons, theme text color for the dismiss cross).
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{design_tokens::sizing, icons};
//!
//! let dismiss = icons::sized(icons::cross(), sizing::ICON_SM);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_alert`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Category Icons
// =============================================================================

define_icon!(
    check_circle,
    "check_circle.svg",
    "Checkmark inside a circle."
);
define_icon!(cross_circle, "cross_circle.svg", "Cross inside a circle.");
define_icon!(
    warning_triangle,
    "warning_triangle.svg",
    "Exclamation mark inside a triangle."
);
define_icon!(info_circle, "info_circle.svg", "Letter i inside a circle.");

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(cross, "cross.svg", "Plain cross.");

/// Sizes an icon to a square of the given side length.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
