// SPDX-License-Identifier: MPL-2.0
//! Shared access point for raising and closing notifications.

use super::notification::{NotificationId, Options};
use super::provider::{Removal, Shared};
use super::timer::{Clock, SystemClock};
use crate::error::{Error, Result};
use std::fmt;
use std::rc::{Rc, Weak};

/// Cheap, cloneable handle to a mounted [`Provider`](super::Provider).
///
/// A notifier only works while the provider that created it is alive. Using a
/// detached notifier (one built with `Notifier::default()`, or one whose
/// provider was dropped) is a bug in the caller: the plain methods panic and
/// the `try_` methods return [`Error::ProviderNotMounted`].
pub struct Notifier<C: Clock = SystemClock> {
    shared: Weak<Shared<C>>,
}

impl<C: Clock> Notifier<C> {
    pub(super) fn attached(shared: Weak<Shared<C>>) -> Self {
        Self { shared }
    }

    /// Whether the provider behind this notifier is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.shared.strong_count() > 0
    }

    fn provider(&self) -> Result<Rc<Shared<C>>> {
        self.shared.upgrade().ok_or(Error::ProviderNotMounted)
    }

    pub fn try_notify(&self, options: Options) -> Result<NotificationId> {
        Ok(self.provider()?.notify(options))
    }

    pub fn try_close(&self, id: NotificationId) -> Result<bool> {
        Ok(self.provider()?.close(id, Removal::Closed))
    }

    pub fn try_close_all(&self) -> Result<()> {
        self.provider()?.close_all();
        Ok(())
    }

    /// Shows a notification and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the notifier is not attached to a mounted provider.
    pub fn notify(&self, options: Options) -> NotificationId {
        self.try_notify(options).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Closes a notification; unknown ids are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the notifier is not attached to a mounted provider.
    pub fn close(&self, id: NotificationId) {
        if let Err(err) = self.try_close(id) {
            panic!("{err}");
        }
    }

    /// Closes every notification.
    ///
    /// # Panics
    ///
    /// Panics if the notifier is not attached to a mounted provider.
    pub fn close_all(&self) {
        if let Err(err) = self.try_close_all() {
            panic!("{err}");
        }
    }
}

impl<C: Clock> Clone for Notifier<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<C: Clock> Default for Notifier<C> {
    /// A detached notifier. Every call on it fails.
    fn default() -> Self {
        Self {
            shared: Weak::new(),
        }
    }
}

impl<C: Clock> fmt::Debug for Notifier<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ManualClock, Phase, Provider};
    use std::time::Duration;

    #[test]
    fn notifier_reaches_the_provider() {
        let clock = ManualClock::new();
        let provider = Provider::with_clock(clock.clone());
        let notifier = provider.notifier();

        let id = notifier.notify(Options::new("From a child component"));
        assert_eq!(provider.phase(id), Some(Phase::Scheduled));

        notifier.close(id);
        assert!(provider.is_empty());
    }

    #[test]
    fn clones_share_the_provider() {
        let provider = Provider::new();
        let first = provider.notifier();
        let second = first.clone();

        first.notify(Options::new("a"));
        second.notify(Options::new("b"));
        second.close_all();

        assert!(provider.is_empty());
    }

    #[test]
    fn detached_notifier_reports_error() {
        let notifier: Notifier = Notifier::default();

        assert!(!notifier.is_mounted());
        assert_eq!(
            notifier.try_notify(Options::new("nowhere")),
            Err(Error::ProviderNotMounted)
        );
        assert_eq!(
            notifier.try_close(NotificationId::new()),
            Err(Error::ProviderNotMounted)
        );
        assert_eq!(notifier.try_close_all(), Err(Error::ProviderNotMounted));
    }

    #[test]
    #[should_panic(expected = "outside of a mounted notification provider")]
    fn detached_notifier_panics_on_notify() {
        Notifier::<SystemClock>::default().notify(Options::new("nowhere"));
    }

    #[test]
    #[should_panic(expected = "outside of a mounted notification provider")]
    fn notifier_panics_after_provider_is_dropped() {
        let clock = ManualClock::new();
        let provider = Provider::with_clock(clock.clone());
        let notifier = provider.notifier();
        notifier.notify(Options::new("before").duration(Duration::from_millis(10)));

        drop(provider);
        notifier.close_all();
    }

    #[test]
    fn try_close_reports_whether_anything_was_removed() {
        let provider = Provider::new();
        let notifier = provider.notifier();
        let id = notifier.notify(Options::new("x"));

        assert_eq!(notifier.try_close(id), Ok(true));
        assert_eq!(notifier.try_close(id), Ok(false));
    }
}
