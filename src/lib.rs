// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification system built with the Iced GUI framework.
//!
//! A [`Provider`](ui::notifications::Provider) mounted at the application root
//! owns the visible notifications and their auto-dismiss countdowns. Nested
//! components raise and close toasts through a cloneable
//! [`Notifier`](ui::notifications::Notifier). Hovering a toast pauses its
//! countdown and Escape closes the newest one.
//!
//! The crate also ships a small demo application (`iced-toast`) with Fluent
//! localization and user preferences stored in `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
