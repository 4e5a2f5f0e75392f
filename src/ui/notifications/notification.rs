// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Status` enum and the
//! `Options` builder callers hand to [`Notifier::notify`](super::Notifier::notify).

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids come from a process-wide monotonic counter, so two notifications
/// created within the same clock tick still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Status determines the accent color and icon of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Info,
        Status::Success,
        Status::Warning,
        Status::Error,
    ];

    /// Returns the primary color for this status.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Status::Info => palette::INFO_500,
            Status::Success => palette::SUCCESS_500,
            Status::Warning => palette::WARNING_500,
            Status::Error => palette::ERROR_500,
        }
    }

    /// Returns the i18n key naming this status (used for the icon label).
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Status::Info => "notification-status-info",
            Status::Success => "notification-status-success",
            Status::Warning => "notification-status-warning",
            Status::Error => "notification-status-error",
        }
    }
}

/// When a notification leaves the screen on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Auto-dismiss once the countdown has run for this long.
    After(Duration),
    /// Sticky: only a manual close removes it.
    Never,
}

impl Expiry {
    /// Maps a millisecond count to an expiry. Zero and negative values are sticky.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        match u64::try_from(millis) {
            Ok(ms) if ms > 0 => Expiry::After(Duration::from_millis(ms)),
            _ => Expiry::Never,
        }
    }

    /// Maps a duration to an expiry. `Duration::ZERO` is sticky.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        if duration.is_zero() {
            Expiry::Never
        } else {
            Expiry::After(duration)
        }
    }

    /// Returns the countdown length, or `None` for sticky notifications.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Expiry::After(duration) => Some(duration),
            Expiry::Never => None,
        }
    }
}

impl Default for Expiry {
    fn default() -> Self {
        Expiry::from_millis(crate::config::DEFAULT_NOTIFICATION_DURATION_MS)
    }
}

/// What a caller asks for. Unset fields fall back to the provider defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    title: String,
    status: Option<Status>,
    description: Option<String>,
    expiry: Option<Expiry>,
}

impl Options {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            description: None,
            expiry: None,
        }
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the auto-dismiss delay. A zero duration makes the toast sticky.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.expiry = Some(Expiry::from_duration(duration));
        self
    }

    /// Sets the auto-dismiss delay in milliseconds; `<= 0` makes the toast sticky.
    #[must_use]
    pub fn duration_ms(mut self, millis: i64) -> Self {
        self.expiry = Some(Expiry::from_millis(millis));
        self
    }

    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.expiry = Some(Expiry::Never);
        self
    }

    pub(super) fn build(self, default_expiry: Expiry, now: Instant) -> Notification {
        Notification {
            id: NotificationId::new(),
            title: self.title,
            status: self.status.unwrap_or_default(),
            description: self.description,
            created_at: now,
            expiry: self.expiry.unwrap_or(default_expiry),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    title: String,
    status: Status,
    description: Option<String>,
    created_at: Instant,
    expiry: Expiry,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns when this notification was registered, as seen by the provider's clock.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }

    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.expiry == Expiry::Never
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn build(options: Options) -> Notification {
        options.build(Expiry::default(), Instant::now())
    }

    #[test]
    fn notification_ids_are_unique_under_rapid_creation() {
        let ids: HashSet<NotificationId> = (0..10_000).map(|_| NotificationId::new()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn status_colors_are_distinct() {
        let colors: Vec<Color> = Status::ALL.iter().map(Status::color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_expiry_uses_the_configured_default_duration() {
        assert_eq!(
            Expiry::default(),
            Expiry::from_millis(crate::config::DEFAULT_NOTIFICATION_DURATION_MS)
        );
        assert_eq!(
            Expiry::default().duration(),
            Some(Duration::from_millis(5000))
        );
    }

    #[test]
    fn options_fall_back_to_info_and_provider_default() {
        let notification = build(Options::new("Saved"));

        assert_eq!(notification.status(), Status::Info);
        assert_eq!(
            notification.expiry(),
            Expiry::After(Duration::from_millis(5000))
        );
        assert!(notification.description().is_none());
    }

    #[test]
    fn non_positive_millis_are_sticky() {
        assert_eq!(Expiry::from_millis(0), Expiry::Never);
        assert_eq!(Expiry::from_millis(-250), Expiry::Never);
        assert_eq!(
            Expiry::from_millis(1200),
            Expiry::After(Duration::from_millis(1200))
        );
    }

    #[test]
    fn zero_duration_is_sticky() {
        let notification = build(Options::new("Pinned").duration(Duration::ZERO));
        assert!(notification.is_sticky());
    }

    #[test]
    fn builder_sets_every_field() {
        let notification = build(
            Options::new("Upload failed")
                .status(Status::Error)
                .description("Connection reset")
                .duration_ms(800),
        );

        assert_eq!(notification.title(), "Upload failed");
        assert_eq!(notification.status(), Status::Error);
        assert_eq!(notification.description(), Some("Connection reset"));
        assert_eq!(
            notification.expiry().duration(),
            Some(Duration::from_millis(800))
        );
    }

    #[test]
    fn status_i18n_keys_are_distinct() {
        let keys: HashSet<&str> = Status::ALL.iter().map(Status::i18n_key).collect();
        assert_eq!(keys.len(), Status::ALL.len());
    }
}
