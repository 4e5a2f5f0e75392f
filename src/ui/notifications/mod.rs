// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions without
//! blocking interaction. Each one counts down to its own dismissal; hovering a
//! toast pauses the countdown and leaving it resumes from where it stopped.
//! Escape closes the newest toast.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Status`, `Expiry` and the `Options` builder
//! - [`provider`] - `Provider` owning the list and the countdown registries
//! - [`notifier`] - `Notifier`, the handle components use to raise toasts
//! - [`timer`] - `Countdown` and the `Clock` abstraction (wall or manual time)
//! - [`keyboard`] - Escape key mapping
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Options, Provider, Status, Toast};
//!
//! let provider = Provider::new();
//! let notifier = provider.notifier();
//!
//! // Anywhere a notifier was handed down
//! let id = notifier.notify(Options::new("Image saved").status(Status::Success));
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&provider, &i18n, Position::BottomRight)
//!     .map(Message::Notification);
//! ```

pub mod keyboard;
mod notification;
mod notifier;
mod provider;
mod timer;
mod toast;

pub use notification::{Expiry, Notification, NotificationId, Options, Status};
pub use notifier::Notifier;
pub use provider::{Message as NotificationMessage, Phase, Provider, Removal};
pub use timer::{Clock, Countdown, ManualClock, SystemClock};
pub use toast::{Position, Toast};
