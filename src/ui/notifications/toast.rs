// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a status-colored border, a status glyph, the
//! title and optional description, a close button and, while a countdown
//! runs, a thin bar showing the time left. Hovering a toast emits
//! [`Message::Pause`], leaving it emits [`Message::Resume`].

use super::notification::{Notification, NotificationId, Status};
use super::provider::{Message, Provider};
use super::timer::Clock;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, keyed_column, mouse_area, text, Column, Container, Row, Text,
};
use iced::{alignment, Color, Element, Length, Theme};
use serde::{Deserialize, Serialize};

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Position {
    fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    fn vertical(self) -> alignment::Vertical {
        match self {
            Position::TopLeft | Position::TopRight => alignment::Vertical::Top,
            Position::BottomLeft | Position::BottomRight => alignment::Vertical::Bottom,
        }
    }
}

/// Resolution of the remaining-time bar.
const PROGRESS_STEPS: u16 = 1000;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `progress` is the fraction of the countdown left, `None` for sticky or
    /// paused-without-countdown toasts.
    pub fn view<'a>(
        notification: &Notification,
        progress: Option<f32>,
        i18n: &I18n,
    ) -> Element<'a, Message> {
        let id = notification.id();
        let status = notification.status();
        let accent_color = status.color();

        let icon = Text::new(Self::status_glyph(status))
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS).push(
            Text::new(notification.title().to_owned())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
        if let Some(description) = notification.description() {
            body = body.push(
                Text::new(description.to_owned())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_STRONG,
                            ..theme.palette().text
                        }),
                    }),
            );
        }

        let close_button = button(Text::new("\u{2715}").size(typography::CAPTION))
            .on_press(Message::Close(id))
            .padding(spacing::XXS)
            .style(close_button_style);

        // Layout: [icon] [title/description] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(Container::new(body).width(Length::Fill))
            .push(close_button);

        let mut card = Column::new().spacing(spacing::XS).push(content);
        if let Some(fraction) = progress {
            card = card.push(progress_bar(fraction, accent_color));
        }

        let labelled = Column::new()
            .push(
                Text::new(i18n.tr(status.i18n_key()))
                    .size(typography::CAPTION)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent_color),
                    }),
            )
            .push(card)
            .spacing(spacing::XXS);

        let toast = Container::new(labelled)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color));

        mouse_area(toast)
            .on_enter(Message::Pause(id))
            .on_exit(Message::Resume(id))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Toasts are stacked newest first in the requested corner.
    pub fn view_overlay<'a, C: Clock>(
        provider: &Provider<C>,
        i18n: &I18n,
        position: Position,
    ) -> Element<'a, Message> {
        let toasts = Self::keyed_toasts(provider, i18n);

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            // Keyed by id: widget state (hover tracking) must follow the
            // notification, not its slot, when a toast above it closes.
            let toast_column = keyed_column(toasts)
                .spacing(spacing::XS)
                .align_items(position.horizontal().into());

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(position.horizontal())
                .align_y(position.vertical())
                .padding(spacing::MD)
                .into()
        }
    }

    fn keyed_toasts<'a, C: Clock>(
        provider: &Provider<C>,
        i18n: &I18n,
    ) -> Vec<(NotificationId, Element<'a, Message>)> {
        provider
            .visible()
            .iter()
            .map(|notification| {
                let id = notification.id();
                (id, Self::view(notification, provider.progress(id), i18n))
            })
            .collect()
    }

    /// Returns the glyph shown for the status.
    fn status_glyph(status: Status) -> &'static str {
        match status {
            Status::Info => "\u{2139}",
            Status::Success => "\u{2713}",
            Status::Warning => "\u{26A0}",
            Status::Error => "\u{2716}",
        }
    }
}

/// Thin two-segment bar: filled part in the accent color, rest transparent.
fn progress_bar<'a>(fraction: f32, accent_color: Color) -> Element<'a, Message> {
    let (filled, empty) = progress_portions(fraction);

    let mut bar = Row::new().height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT));
    if filled > 0 {
        bar = bar.push(
            Container::new(text(""))
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(iced::Background::Color(accent_color)),
                    border: iced::Border {
                        radius: radius::SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        );
    }
    if empty > 0 {
        bar = bar.push(
            Container::new(text(""))
                .width(Length::FillPortion(empty))
                .height(Length::Fill),
        );
    }
    bar.into()
}

fn progress_portions(fraction: f32) -> (u16, u16) {
    let filled = (fraction.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    (filled, PROGRESS_STEPS - filled)
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ManualClock, Options};

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn status_glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<&str> =
            Status::ALL.iter().map(|s| Toast::status_glyph(*s)).collect();
        assert_eq!(glyphs.len(), Status::ALL.len());
    }

    #[test]
    fn progress_portions_cover_the_full_bar() {
        assert_eq!(progress_portions(1.0), (PROGRESS_STEPS, 0));
        assert_eq!(progress_portions(0.0), (0, PROGRESS_STEPS));
        assert_eq!(progress_portions(0.25), (250, 750));
        assert_eq!(progress_portions(7.0), (PROGRESS_STEPS, 0));
    }

    #[test]
    fn position_maps_to_alignment() {
        assert_eq!(Position::TopLeft.horizontal(), alignment::Horizontal::Left);
        assert_eq!(Position::TopLeft.vertical(), alignment::Vertical::Top);
        assert_eq!(
            Position::BottomRight.horizontal(),
            alignment::Horizontal::Right
        );
        assert_eq!(Position::BottomRight.vertical(), alignment::Vertical::Bottom);
    }

    #[test]
    fn overlay_keys_follow_notifications_after_a_close() {
        let provider = Provider::with_clock(ManualClock::new());
        let i18n = I18n::default();
        let oldest = provider.notify(Options::new("oldest"));
        let hovered = provider.notify(Options::new("hovered"));
        let newest = provider.notify(Options::new("newest"));

        let keys = |provider: &Provider<ManualClock>| -> Vec<NotificationId> {
            Toast::keyed_toasts(provider, &i18n)
                .into_iter()
                .map(|(id, _)| id)
                .collect()
        };
        assert_eq!(keys(&provider), vec![newest, hovered, oldest]);

        // The toast sliding into the closed one's slot keeps its own key,
        // so it does not inherit that slot's hover state.
        provider.close(hovered);
        assert_eq!(keys(&provider), vec![newest, oldest]);
    }

    #[test]
    fn disabled_close_button_keeps_text_visible() {
        let style = close_button_style(&Theme::Light, button::Status::Disabled);
        assert!(style.text_color.a > 0.0);
    }
}
