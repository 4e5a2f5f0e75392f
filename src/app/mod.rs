// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the launcher and the
//! notification provider.
//!
//! The `App` struct mounts a single [`Provider`] at the root, hands a
//! [`Notifier`](crate::ui::notifications::Notifier) down to the launcher and
//! routes toast interactions, Escape presses and countdown ticks back to the
//! provider.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, NotificationsConfig};
use crate::i18n::fluent::I18n;
use crate::ui::launcher;
use crate::ui::notifications::{Options, Provider, Status};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    provider: Provider,
    launcher: launcher::State,
    theme_mode: ThemeMode,
    /// Notification settings read at startup.
    notifications: NotificationsConfig,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("provider", &self.provider)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, mounts the provider and surfaces config problems as
    /// warning toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let app = Self::with_config(i18n, &config);
        if let Some(key) = config_warning {
            app.provider
                .notify(Options::new(app.i18n.tr(&key)).status(Status::Warning));
        }

        (app, Task::none())
    }

    /// Builds the application state from already loaded preferences.
    pub fn with_config(i18n: I18n, config: &config::Config) -> Self {
        let notifications = config.notifications.clone();
        let provider = Provider::new()
            .with_default_expiry(notifications.default_expiry())
            .with_pause_on_hover(notifications.pause_on_hover())
            .on_remove(|notification, reason| {
                tracing::debug!(id = %notification.id(), ?reason, "notification removed");
            });
        let launcher = launcher::State::new(provider.notifier());

        Self {
            i18n,
            provider,
            launcher,
            theme_mode: config.general.theme_mode,
            notifications,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Read access to the mounted provider.
    #[must_use]
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_escape_subscription(self.notifications.escape_dismisses()),
            subscription::create_tick_subscription(
                self.provider.has_countdowns(),
                self.notifications.tick_interval(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => self.provider.handle_message(&message),
            Message::Launcher(message) => {
                self.launcher.update(message, &self.i18n);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            launcher: &self.launcher,
            provider: &self.provider,
            position: self.notifications.position(),
        })
    }
}
