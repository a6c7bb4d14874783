// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` provides animated toast/alert notifications for
//! applications built with the Iced GUI toolkit.
//!
//! An [`AlertProvider`] owns the alert collection for one UI session and
//! hands out [`AlertContext`] accessors; any part of the application
//! holding a context can add, remove, or clear alerts. The [`Alerts`]
//! overlay component renders the active alerts at a screen corner,
//! animates them in and out, and auto-dismisses each one after a
//! configurable, staggered delay.
//!
//! # Wiring it up
//!
//! ```no_run
//! use iced_alerts::{Alerts, AlertsConfig, AlertProvider, Category};
//!
//! struct App {
//!     provider: AlertProvider,
//!     alerts: Alerts,
//! }
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Alerts(iced_alerts::Message),
//!     SavePressed,
//! }
//!
//! impl App {
//!     fn new() -> Self {
//!         let provider = AlertProvider::new();
//!         let alerts = Alerts::new(AlertsConfig::default(), provider.context());
//!         Self { provider, alerts }
//!     }
//!
//!     fn update(&mut self, message: Message) {
//!         match message {
//!             Message::Alerts(message) => self.alerts.update(message),
//!             Message::SavePressed => {
//!                 self.provider
//!                     .add_alert("Saved", "Document written to disk", Category::Success);
//!             }
//!         }
//!     }
//!
//!     fn subscription(&self) -> iced::Subscription<Message> {
//!         self.alerts.subscription().map(Message::Alerts)
//!     }
//! }
//! ```
//!
//! In the host's `view`, stack the overlay over the screen content:
//!
//! ```ignore
//! iced::widget::stack![content, self.alerts.view().map(Message::Alerts)].into()
//! ```

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.2.0")]

pub mod alert;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod provider;
pub mod store;
pub mod timer;
pub mod ui;

pub use alert::{Alert, AlertId, Category};
pub use config::{AlertsConfig, Direction, Position};
pub use error::{Error, Result};
pub use provider::{AlertContext, AlertProvider};
pub use store::AlertStore;
pub use ui::overlay::{Alerts, Message};
