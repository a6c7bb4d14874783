// SPDX-License-Identifier: MPL-2.0
//! Interactive gallery: raise alerts of every category and watch them
//! enter, stagger their dismissals, and exit.
//!
//! Run with `cargo run --example gallery`.

use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{alignment, Element, Length, Subscription, Task};
use iced_alerts::{AlertProvider, Alerts, AlertsConfig, Category, Direction, Position};

fn main() -> iced::Result {
    iced::application(Gallery::new, Gallery::update, Gallery::view)
        .title("iced_alerts gallery")
        .subscription(Gallery::subscription)
        .run()
}

struct Gallery {
    provider: AlertProvider,
    alerts: Alerts,
    raised: u32,
}

#[derive(Debug, Clone)]
enum Message {
    Alerts(iced_alerts::Message),
    Raise(Category),
    ClearAll,
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let provider = AlertProvider::new();
        let config = AlertsConfig::new()
            .position(Position::TopRight)
            .direction(Direction::Right);
        let alerts = Alerts::new(config, provider.context());

        (
            Self {
                provider,
                alerts,
                raised: 0,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Alerts(message) => self.alerts.update(message),
            Message::Raise(category) => {
                self.raised += 1;
                let title = match category {
                    Category::Success => "Success",
                    Category::Error => "Error",
                    Category::Warning => "Warning",
                    Category::Info => "Info",
                };
                self.provider.add_alert(
                    title,
                    format!("Alert #{} raised from the gallery", self.raised),
                    category,
                );
            }
            Message::ClearAll => self.provider.clear_alerts(),
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.alerts.subscription().map(Message::Alerts)
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(8.0)
            .push(button(text("Success")).on_press(Message::Raise(Category::Success)))
            .push(button(text("Error")).on_press(Message::Raise(Category::Error)))
            .push(button(text("Warning")).on_press(Message::Raise(Category::Warning)))
            .push(button(text("Info")).on_press(Message::Raise(Category::Info)))
            .push(button(text("Clear all")).on_press(Message::ClearAll));

        let content = container(
            Column::new()
                .spacing(16.0)
                .align_x(alignment::Horizontal::Center)
                .push(text("Raise a few alerts in quick succession").size(20.0))
                .push(controls),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(content)
            .push(self.alerts.view().map(Message::Alerts))
            .into()
    }
}
