// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The launcher fills the window; the toast overlay is stacked on top of it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::launcher::{self, ViewContext as LauncherViewContext};
use crate::ui::notifications::{Clock, Position, Provider, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a, C: Clock> {
    pub i18n: &'a I18n,
    pub launcher: &'a launcher::State,
    pub provider: &'a Provider<C>,
    pub position: Position,
}

/// Renders the launcher with the toast overlay above it.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<C: Clock>(ctx: ViewContext<'_, C>) -> Element<'_, Message> {
    let content = ctx
        .launcher
        .view(LauncherViewContext {
            i18n: ctx.i18n,
            visible: ctx.provider.len(),
        })
        .map(Message::Launcher);

    let overlay =
        Toast::view_overlay(ctx.provider, ctx.i18n, ctx.position).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
