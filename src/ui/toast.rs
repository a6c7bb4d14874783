// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering a single alert.
//!
//! A toast is a small card with a category-colored accent border, a
//! severity icon, the alert's title and message, a dismiss button, and a
//! thin track along the top showing elapsed display time. The whole card
//! fades with the entry/exit animation; sliding is handled by the overlay.

use super::animation::VisualState;
use super::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use super::icons;
use super::overlay::Message;
use crate::alert::{Alert, Category};
use iced::widget::svg::Svg;
use iced::widget::{button, container, svg, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

/// Scales a color's alpha by the animation's opacity.
fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Renders one toast card.
///
/// `elapsed` is the fraction of the display duration already spent,
/// 0.0..=1.0, shown as the track at the top of the card.
pub fn view(alert: &Alert, visual: VisualState, elapsed: f32) -> Element<'_, Message> {
    let accent = alert.category().color();
    let alpha = visual.alpha;

    // Severity icon, tinted with the category accent.
    let icon = icons::sized(category_icon(alert.category()), sizing::ICON_MD).style(
        move |_theme: &Theme, _status| svg::Style {
            color: Some(faded(accent, alpha)),
        },
    );

    let title = text(alert.title())
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, alpha)),
        });

    let message = text(alert.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, alpha)),
        });

    let body = Column::new().spacing(spacing::XXS).push(title).push(message);

    let dismiss: Element<'static, Message> = button(icons::sized(icons::cross(), sizing::ICON_SM).style(
        move |theme: &Theme, _status| svg::Style {
            color: Some(faded(theme.palette().text, alpha)),
        },
    ))
    .on_press(Message::Dismiss(alert.id()))
    .padding(spacing::XXS)
    .style(move |theme, status| dismiss_button_style(theme, status, alpha))
    .into();

    // Layout: [track] over [icon] [title + message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    let track = elapsed_track(accent, alpha, elapsed);

    let card = Column::new()
        .push(track)
        .push(Container::new(content).padding(spacing::SM));

    Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .style(move |theme: &Theme| card_style(theme, accent, alpha))
        .into()
}

/// The elapsed-time track: a faint accent strip with a stronger bar that
/// grows from left to right as display time is spent.
fn elapsed_track<'a>(accent: Color, alpha: f32, elapsed: f32) -> Element<'a, Message> {
    let fraction = elapsed.clamp(0.0, 1.0);

    let bar = Container::new(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_TRACK)),
    )
    .width(Length::Fixed(sizing::TOAST_WIDTH * fraction))
    .style(move |_theme: &Theme| {
        container::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..accent
                },
                alpha,
            ))),
            ..Default::default()
        }
    });

    Container::new(bar)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(faded(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..accent
                },
                alpha,
            ))),
            ..Default::default()
        })
        .into()
}

/// Returns the appropriate icon for the category.
fn category_icon(category: Category) -> Svg<'static> {
    match category {
        Category::Success => icons::check_circle(),
        Category::Error => icons::cross_circle(),
        Category::Warning => icons::warning_triangle(),
        Category::Info => icons::info_circle(),
    }
}

/// Style for the toast card: theme surface with an accent border.
fn card_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(
            Color {
                a: opacity::SURFACE,
                ..base
            },
            alpha,
        ))),
        border: iced::Border {
            color: faded(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style for the dismiss button: invisible at rest, subtle gray feedback.
fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = faded(theme.extended_palette().background.base.text, alpha);

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(iced::Background::Color(faded(
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            alpha,
        ))),
        button::Status::Pressed => Some(iced::Background::Color(faded(
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
            alpha,
        ))),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}
