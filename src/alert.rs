// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the `Alert` record and `Category` enum used
//! throughout the crate. Records are immutable after creation; the only
//! thing that ever changes is the collection that contains them.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic category of an alert. Determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something went wrong (red).
    Error,
    /// Needs attention but didn't block the operation (yellow).
    Warning,
    /// Neutral informational message (blue).
    Info,
}

impl Category {
    /// Returns the fixed display color for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
        }
    }
}

/// An alert to be displayed to the user.
///
/// Created through [`Alert::new`] or the per-category constructors; every
/// field is fixed at creation time.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Unique identifier for this alert.
    id: AlertId,
    /// Short heading shown above the message.
    title: String,
    /// Body text.
    message: String,
    /// Semantic category (determines the accent color).
    category: Category,
    /// When this alert was created.
    created_at: Instant,
}

impl Alert {
    /// Creates a new alert with a freshly generated identity.
    pub fn new(title: impl Into<String>, message: impl Into<String>, category: Category) -> Self {
        Self {
            id: AlertId::new(),
            title: title.into(),
            message: message.into(),
            category,
            created_at: Instant::now(),
        }
    }

    /// Creates a success alert.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Category::Success)
    }

    /// Creates an error alert.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Category::Error)
    }

    /// Creates a warning alert.
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Category::Warning)
    }

    /// Creates an info alert.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Category::Info)
    }

    /// Returns the alert's unique ID.
    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the semantic category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns when this alert was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this alert.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
