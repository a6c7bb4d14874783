// SPDX-License-Identifier: MPL-2.0
//! Alerts overlay: renders the active alerts at a screen anchor and
//! drives their lifecycle.
//!
//! The overlay reads the store through an [`AlertContext`] and keeps its
//! own render list next to the alert data: store records say *what* is
//! active, entries say *how* each toast currently looks. A periodic tick
//! advances animations, fires due dismissal deadlines, and reconciles the
//! render list with the store:
//!
//! - records present in the store but not rendered are mounted in the
//!   `Entering` phase and get a dismissal deadline of
//!   `duration + index * stagger`;
//! - rendered records that left the store (deadline, dismiss button,
//!   external remove or clear) switch to `Exiting` and their pending
//!   deadline is cancelled;
//! - toasts whose exit animation finished are dropped.
//!
//! Rendering keys toasts by alert identity so adding or removing one
//! alert never restarts the animations of its neighbors.

use super::animation::{visual_state, Phase};
use super::design_tokens::{motion, sizing, spacing};
use super::toast;
use crate::alert::{Alert, AlertId};
use crate::config::{AlertsConfig, Direction, Position};
use crate::provider::AlertContext;
use crate::timer::DismissSchedule;
use iced::widget::{keyed_column, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Messages for the alerts overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation/lifecycle tick.
    Tick(Instant),
    /// The dismiss button of a toast was pressed.
    Dismiss(AlertId),
}

/// One rendered toast.
#[derive(Debug)]
struct Entry {
    /// Snapshot of the record; kept for exit rendering after the store
    /// has already dropped it.
    alert: Alert,
    phase: Phase,
    /// Time this toast has been on screen.
    shown: Duration,
    /// Full display duration for this toast (base + its stagger share).
    total: Duration,
}

/// State of the alerts overlay component.
#[derive(Debug)]
pub struct Alerts {
    config: AlertsConfig,
    context: AlertContext,
    entries: Vec<Entry>,
    schedule: DismissSchedule,
    last_tick: Option<Instant>,
}

impl Alerts {
    /// Creates an overlay bound to a provider's scope.
    #[must_use]
    pub fn new(config: AlertsConfig, context: AlertContext) -> Self {
        Self {
            config,
            context,
            entries: Vec::new(),
            schedule: DismissSchedule::new(),
            last_tick: None,
        }
    }

    /// Returns the overlay configuration.
    #[must_use]
    pub fn config(&self) -> &AlertsConfig {
        &self.config
    }

    /// Returns `true` when nothing is rendered and nothing is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty() && self.schedule.is_empty()
    }

    /// Returns the number of toasts currently rendered (including ones
    /// playing their exit animation).
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of pending dismissal deadlines.
    #[must_use]
    pub fn pending_dismissals(&self) -> usize {
        self.schedule.len()
    }

    /// Handles an overlay message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    /// The tick subscription driving animations and dismissals.
    ///
    /// Active only while there is work to do; an empty overlay over an
    /// empty store subscribes to nothing.
    pub fn subscription(&self) -> Subscription<Message> {
        let store_has_alerts = self
            .context
            .alerts()
            .map(|alerts| !alerts.is_empty())
            .unwrap_or(false);

        if store_has_alerts || !self.entries.is_empty() {
            iced::time::every(motion::TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn dismiss(&mut self, id: AlertId) {
        // Remove is idempotent, so a dismissal racing a deadline is harmless.
        let _ = self.context.remove_alert(id);
        self.schedule.cancel(id);
        if let Some(entry) = self.entries.iter_mut().find(|e| e.alert.id() == id) {
            entry.phase.begin_exit();
        }
    }

    fn tick(&mut self, now: Instant) {
        let dt = match self.last_tick {
            // After an idle stretch the previous tick is stale; restart
            // the clock instead of advancing animations by the gap.
            Some(last) if !self.entries.is_empty() => now.saturating_duration_since(last),
            _ => Duration::ZERO,
        };
        self.last_tick = Some(now);

        // Fire due deadlines. Firing consumes the schedule entry.
        for id in self.schedule.expired(now) {
            let _ = self.context.remove_alert(id);
        }

        // Reconcile the render list with the store. A detached context
        // reads as an empty store, so leftover toasts exit cleanly.
        let snapshot = self.context.alerts().unwrap_or_default();

        for entry in &mut self.entries {
            let id = entry.alert.id();
            if snapshot.iter().all(|alert| alert.id() != id) && !entry.phase.is_exiting() {
                entry.phase.begin_exit();
                self.schedule.cancel(id);
            }
        }

        for alert in snapshot {
            let id = alert.id();
            if self.entries.iter().any(|entry| entry.alert.id() == id) {
                continue;
            }
            // The stagger share is fixed here, at mount time. Removing an
            // earlier alert later does not reshuffle pending deadlines.
            let index = self
                .entries
                .iter()
                .filter(|entry| !entry.phase.is_exiting())
                .count() as u32;
            let total = self.config.duration + self.config.stagger * index;
            self.schedule.schedule(id, now + total);
            self.entries.push(Entry {
                alert,
                phase: Phase::entering(),
                shown: Duration::ZERO,
                total,
            });
        }

        // Advance animations; drop toasts whose exit has completed.
        self.entries.retain_mut(|entry| {
            if !entry.phase.is_exiting() {
                entry.shown = (entry.shown + dt).min(entry.total);
            }
            !entry.phase.advance(dt)
        });
    }

    /// Renders the toast stack at the configured screen anchor.
    pub fn view(&self) -> Element<'_, Message> {
        if self.entries.is_empty() {
            // Empty element that takes no space and swallows no input.
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let direction = self.config.direction;
        let stack = keyed_column(
            self.entries
                .iter()
                .map(|entry| (entry.alert.id(), slot(entry, direction))),
        )
        .spacing(if direction.is_horizontal() {
            spacing::XS
        } else {
            // Vertical sliding borrows the gap between toasts as its
            // travel gutter; see `slot`.
            0.0
        });

        let (align_x, align_y) = anchor(self.config.position);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }
}

/// Renders one toast inside its slide gutter.
///
/// Horizontal directions travel inside a fixed-width slot
/// (`TOAST_WIDTH + 2 * SLIDE_X`); vertical directions travel by growing
/// and shrinking the space above the toast, which doubles as the stack
/// spacing.
fn slot(entry: &Entry, direction: Direction) -> Element<'_, Message> {
    let visual = visual_state(entry.phase, direction);
    let elapsed = if entry.total.is_zero() {
        1.0
    } else {
        entry.shown.as_secs_f32() / entry.total.as_secs_f32()
    };
    let card = toast::view(&entry.alert, visual, elapsed);

    if direction.is_horizontal() {
        let lead = motion::SLIDE_X + visual.offset;
        Container::new(
            Row::new()
                .push(Space::new().width(Length::Fixed(lead)).height(Length::Shrink))
                .push(card),
        )
        .width(Length::Fixed(sizing::TOAST_WIDTH + 2.0 * motion::SLIDE_X))
        .into()
    } else {
        let lead = motion::SLIDE_Y + visual.offset;
        Column::new()
            .push(Space::new().width(Length::Shrink).height(Length::Fixed(lead)))
            .push(card)
            .into()
    }
}

/// Maps a screen position to container alignment.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        Position::CenterTop => (alignment::Horizontal::Center, alignment::Vertical::Top),
        Position::CenterBottom => (alignment::Horizontal::Center, alignment::Vertical::Bottom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Category;
    use crate::provider::AlertProvider;

    fn overlay(provider: &AlertProvider) -> Alerts {
        Alerts::new(AlertsConfig::default(), provider.context())
    }

    /// Advances the overlay tick-by-tick until `deadline`.
    fn run_until(alerts: &mut Alerts, from: Instant, deadline: Instant) -> Instant {
        let mut now = from;
        while now < deadline {
            now += motion::TICK;
            alerts.update(Message::Tick(now));
        }
        now
    }

    #[test]
    fn mounting_schedules_staggered_deadlines() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        let a = provider.add_alert("A", "", Category::Info);
        let b = provider.add_alert("B", "", Category::Info);
        let c = provider.add_alert("C", "", Category::Info);
        alerts.update(Message::Tick(t0));

        assert_eq!(alerts.rendered_count(), 3);
        let config = AlertsConfig::default();
        assert_eq!(alerts.schedule.deadline(a), Some(t0 + config.duration));
        assert_eq!(
            alerts.schedule.deadline(b),
            Some(t0 + config.duration + config.stagger)
        );
        assert_eq!(
            alerts.schedule.deadline(c),
            Some(t0 + config.duration + config.stagger * 2)
        );
    }

    #[test]
    fn toast_auto_removes_after_its_duration_and_not_before() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();
        let duration = alerts.config().duration;

        provider.add_alert("T", "", Category::Success);
        alerts.update(Message::Tick(t0));

        // One tick short of the deadline: still in the store.
        let now = run_until(&mut alerts, t0, t0 + duration - motion::TICK * 2);
        assert_eq!(provider.alerts().len(), 1);

        // Crossing the deadline removes the record and starts the exit.
        let now = run_until(&mut alerts, now, t0 + duration + motion::TICK);
        assert!(provider.alerts().is_empty());
        assert_eq!(alerts.rendered_count(), 1);
        assert_eq!(alerts.pending_dismissals(), 0);

        // After the exit animation the toast is gone entirely.
        run_until(&mut alerts, now, now + motion::EXIT + motion::TICK * 2);
        assert!(alerts.is_idle());
    }

    #[test]
    fn stagger_is_fixed_at_mount_time() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        let a = provider.add_alert("A", "", Category::Info);
        let b = provider.add_alert("B", "", Category::Info);
        alerts.update(Message::Tick(t0));
        let b_deadline = alerts.schedule.deadline(b).expect("b is scheduled");

        // Removing the earlier alert must not reshuffle b's deadline.
        provider.remove_alert(a);
        alerts.update(Message::Tick(t0 + motion::TICK));
        assert_eq!(alerts.schedule.deadline(b), Some(b_deadline));
    }

    #[test]
    fn clear_cancels_every_pending_deadline() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        provider.add_alert("a", "", Category::Info);
        provider.add_alert("b", "", Category::Warning);
        alerts.update(Message::Tick(t0));
        assert_eq!(alerts.pending_dismissals(), 2);

        provider.clear_alerts();
        let now = t0 + motion::TICK;
        alerts.update(Message::Tick(now));

        assert!(provider.alerts().is_empty());
        assert_eq!(alerts.pending_dismissals(), 0);
        assert!(alerts.entries.iter().all(|e| e.phase.is_exiting()));

        // Later ticks are inert: the exit plays out and nothing resurfaces.
        run_until(&mut alerts, now, now + motion::EXIT + motion::TICK * 2);
        assert!(alerts.is_idle());
    }

    #[test]
    fn dismiss_message_cancels_the_deadline_and_exits() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        let id = provider.add_alert("bye", "", Category::Info);
        alerts.update(Message::Tick(t0));

        alerts.update(Message::Dismiss(id));
        assert!(provider.alerts().is_empty());
        assert_eq!(alerts.pending_dismissals(), 0);
        assert!(alerts.entries[0].phase.is_exiting());
    }

    #[test]
    fn dismissing_an_absent_identity_is_harmless() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);

        alerts.update(Message::Dismiss(AlertId::new()));
        assert!(alerts.is_idle());
    }

    #[test]
    fn external_removal_starts_the_exit_animation() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        let id = provider.add_alert("gone", "", Category::Error);
        alerts.update(Message::Tick(t0));

        provider.remove_alert(id);
        alerts.update(Message::Tick(t0 + motion::TICK));
        assert!(alerts.entries[0].phase.is_exiting());
        assert_eq!(alerts.pending_dismissals(), 0);
    }

    #[test]
    fn dropped_provider_drains_the_overlay() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        provider.add_alert("orphan", "", Category::Info);
        alerts.update(Message::Tick(t0));
        drop(provider);

        let now = t0 + motion::TICK;
        alerts.update(Message::Tick(now));
        assert!(alerts.entries.iter().all(|e| e.phase.is_exiting()));

        run_until(&mut alerts, now, now + motion::EXIT + motion::TICK * 2);
        assert!(alerts.is_idle());
    }

    #[test]
    fn entries_follow_store_insertion_order() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        let a = provider.add_alert("A", "", Category::Info);
        alerts.update(Message::Tick(t0));
        let b = provider.add_alert("B", "", Category::Info);
        alerts.update(Message::Tick(t0 + motion::TICK));

        let order: Vec<AlertId> = alerts.entries.iter().map(|e| e.alert.id()).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn entering_toast_becomes_active() {
        let provider = AlertProvider::new();
        let mut alerts = overlay(&provider);
        let t0 = Instant::now();

        provider.add_alert("in", "", Category::Success);
        alerts.update(Message::Tick(t0));
        assert!(matches!(alerts.entries[0].phase, Phase::Entering { .. }));

        run_until(&mut alerts, t0, t0 + motion::ENTER + motion::TICK * 2);
        assert!(alerts.entries[0].phase.is_active());
    }
}
