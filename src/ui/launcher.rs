// SPDX-License-Identifier: MPL-2.0
//! Launcher panel used to raise sample notifications.
//!
//! The panel never touches the provider directly: it only holds the
//! [`Notifier`] handed down by the application, the same way any nested
//! component would.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::notifications::{NotificationId, Notifier, Options, Status};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Border, Color, Element, Length, Theme};

/// Contextual data needed to render the launcher.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Number of toasts currently on screen.
    pub visible: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Raise(Status),
    ToggleSticky,
    CloseAll,
}

/// Launcher state.
#[derive(Debug, Clone, Default)]
pub struct State {
    notifier: Notifier,
    sticky: bool,
}

impl State {
    #[must_use]
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            sticky: false,
        }
    }

    /// Whether newly raised samples stay until closed.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Handles a launcher message; returns the id of a raised notification.
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Option<NotificationId> {
        match message {
            Message::Raise(status) => {
                let options = self.sample(status, i18n);
                match self.notifier.try_notify(options) {
                    Ok(id) => {
                        tracing::debug!(%id, ?status, sticky = self.sticky, "sample raised");
                        Some(id)
                    }
                    Err(err) => {
                        tracing::error!(%err, "cannot raise sample notification");
                        None
                    }
                }
            }
            Message::ToggleSticky => {
                self.sticky = !self.sticky;
                None
            }
            Message::CloseAll => {
                if let Err(err) = self.notifier.try_close_all() {
                    tracing::error!(%err, "cannot close notifications");
                }
                None
            }
        }
    }

    fn sample(&self, status: Status, i18n: &I18n) -> Options {
        let status_label = i18n.tr(status.i18n_key());
        let options = Options::new(
            i18n.tr_with_args("launcher-sample-title", &[("status", status_label.as_str())]),
        )
        .status(status)
        .description(i18n.tr("launcher-sample-description"));

        if self.sticky {
            options.sticky()
        } else {
            options
        }
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let raise_buttons = Status::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, &status| {
                let accent = status.color();
                row.push(
                    button(Text::new(i18n.tr(status.i18n_key())).size(typography::BODY))
                        .width(Length::Fixed(sizing::BUTTON_WIDTH))
                        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                        .on_press(Message::Raise(status))
                        .style(move |theme: &Theme, state| {
                            raise_button_style(theme, state, accent)
                        }),
                )
            },
        );

        let marker = if self.sticky { "\u{2611}" } else { "\u{2610}" };
        let sticky_toggle = button(
            text(format!("{marker} {}", i18n.tr("launcher-sticky-toggle"))).size(typography::BODY),
        )
        .on_press(Message::ToggleSticky)
        .style(button::text);

        let close_all = button(text(i18n.tr("launcher-close-all")).size(typography::BODY))
            .on_press_maybe((ctx.visible > 0).then_some(Message::CloseAll))
            .style(button::secondary);

        let count = ctx.visible.to_string();
        let content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr("launcher-heading")).size(typography::TITLE_MD))
            .push(
                Text::new(i18n.tr("launcher-hint"))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity::OVERLAY_STRONG,
                            ..theme.palette().text
                        }),
                    }),
            )
            .push(raise_buttons)
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .align_y(alignment::Vertical::Center)
                    .push(sticky_toggle)
                    .push(close_all),
            )
            .push(
                Text::new(i18n.tr_with_args("launcher-count", &[("count", count.as_str())]))
                    .size(typography::CAPTION),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .into()
    }
}

/// Filled button in the status accent color.
fn raise_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let alpha = match status {
        button::Status::Active => opacity::OPAQUE,
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed | button::Status::Disabled => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
        text_color: theme.extended_palette().background.base.color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::notifications::Provider;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn raise_shows_a_toast_with_the_requested_status() {
        let provider = Provider::new();
        let mut launcher = State::new(provider.notifier());

        let id = launcher
            .update(Message::Raise(Status::Warning), &i18n())
            .expect("mounted provider accepts notifications");

        let visible = provider.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), id);
        assert_eq!(visible[0].status(), Status::Warning);
        assert!(visible[0].title().contains("Warning"));
        assert!(!visible[0].is_sticky());
    }

    #[test]
    fn sticky_toggle_applies_to_later_samples() {
        let provider = Provider::new();
        let mut launcher = State::new(provider.notifier());

        launcher.update(Message::ToggleSticky, &i18n());
        assert!(launcher.is_sticky());
        launcher.update(Message::Raise(Status::Info), &i18n());

        assert!(provider.visible()[0].is_sticky());
        assert!(!provider.has_countdowns());
    }

    #[test]
    fn close_all_empties_the_provider() {
        let provider = Provider::new();
        let mut launcher = State::new(provider.notifier());
        for status in Status::ALL {
            launcher.update(Message::Raise(status), &i18n());
        }
        assert_eq!(provider.len(), Status::ALL.len());

        launcher.update(Message::CloseAll, &i18n());
        assert!(provider.is_empty());
    }

    #[test]
    fn detached_launcher_does_not_raise() {
        let mut launcher = State::default();
        assert!(launcher
            .update(Message::Raise(Status::Error), &i18n())
            .is_none());
    }

    #[test]
    fn raise_button_keeps_accent_hue() {
        let accent = Status::Success.color();
        let style = raise_button_style(&Theme::Light, button::Status::Hovered, accent);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_eq!(color.g, accent.g);
                assert_eq!(color.a, opacity::OVERLAY_STRONG);
            }
            other => panic!("unexpected background: {other:?}"),
        }
    }
}
