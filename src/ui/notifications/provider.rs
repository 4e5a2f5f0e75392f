// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Provider` owns the visible notifications plus two registries: running
//! countdowns and the time left on paused (hovered) notifications. A live
//! notification sits in at most one of them; sticky ones sit in neither.
//!
//! Every UI event reaches the provider as a [`Message`] through
//! [`Provider::handle_message`]. Components that only need to raise or close
//! notifications get a [`Notifier`] instead of the provider itself.

use super::notification::{Expiry, Notification, NotificationId, Options};
use super::notifier::Notifier;
use super::timer::{Clock, Countdown, SystemClock};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button pressed on a toast.
    Close(NotificationId),
    /// Pointer entered a toast.
    Pause(NotificationId),
    /// Pointer left a toast.
    Resume(NotificationId),
    /// Escape pressed: close the newest toast.
    DismissLatest,
    /// Close every toast.
    CloseAll,
    /// Periodic check for countdowns that ran out.
    Tick,
}

/// Why a notification left the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Closed by id (close button or a [`Notifier`]).
    Closed,
    /// Dismissed as the newest entry with Escape.
    Dismissed,
    /// Its countdown ran out.
    Expired,
    /// Swept away by `close_all`.
    ClearedAll,
}

/// Where a live notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown running.
    Scheduled,
    /// Countdown suspended while hovered.
    Paused,
    /// Sticky, no countdown.
    Idle,
}

type RemovalHook = Box<dyn FnMut(&Notification, Removal)>;

/// Mutable state, only ever touched through a short `RefCell` borrow.
struct Registry<C> {
    clock: C,
    default_expiry: Expiry,
    pause_on_hover: bool,
    /// Newest first.
    visible: VecDeque<Notification>,
    timers: HashMap<NotificationId, Countdown>,
    remaining: HashMap<NotificationId, Duration>,
}

impl<C: Clock> Registry<C> {
    fn new(clock: C) -> Self {
        Self {
            clock,
            default_expiry: Expiry::default(),
            pause_on_hover: true,
            visible: VecDeque::new(),
            timers: HashMap::new(),
            remaining: HashMap::new(),
        }
    }

    fn insert(&mut self, options: Options) -> NotificationId {
        let now = self.clock.now();
        let notification = options.build(self.default_expiry, now);
        let id = notification.id();

        if let Some(duration) = notification.expiry().duration() {
            self.timers.insert(id, Countdown::start(now, duration));
        }
        tracing::debug!(
            %id,
            status = ?notification.status(),
            expiry = ?notification.expiry(),
            "notification shown"
        );
        self.visible.push_front(notification);
        id
    }

    fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        // Cancel first so nothing can fire for an entry we're removing.
        self.timers.remove(&id);
        self.remaining.remove(&id);

        let pos = self.visible.iter().position(|n| n.id() == id)?;
        self.visible.remove(pos)
    }

    fn drain(&mut self) -> Vec<Notification> {
        self.timers.clear();
        self.remaining.clear();
        self.visible.drain(..).collect()
    }

    /// Suspends the countdown. Returns the notification if it turned out to be
    /// already due, in which case it has been removed instead of paused.
    fn pause(&mut self, id: NotificationId) -> Option<Notification> {
        if !self.pause_on_hover {
            return None;
        }
        let countdown = self.timers.remove(&id)?;
        let now = self.clock.now();

        if countdown.is_due(now) {
            tracing::debug!(%id, "countdown ran out before pause");
            return self.remove(id);
        }

        let left = countdown.remaining(now);
        tracing::debug!(%id, remaining_ms = left.as_millis() as u64, "countdown paused");
        self.remaining.insert(id, left);
        None
    }

    fn resume(&mut self, id: NotificationId) {
        if !self.pause_on_hover {
            return;
        }
        let Some(left) = self.remaining.remove(&id) else {
            return;
        };
        if left.is_zero() {
            return;
        }

        tracing::debug!(%id, remaining_ms = left.as_millis() as u64, "countdown resumed");
        self.timers
            .insert(id, Countdown::start(self.clock.now(), left));
    }

    /// Removes every notification whose countdown is due, oldest first.
    fn expire_due(&mut self) -> Vec<Notification> {
        let now = self.clock.now();
        let due: Vec<NotificationId> = self
            .visible
            .iter()
            .rev()
            .map(Notification::id)
            .filter(|id| self.timers.get(id).is_some_and(|c| c.is_due(now)))
            .collect();

        due.into_iter()
            .filter_map(|id| {
                tracing::debug!(%id, "notification expired");
                self.remove(id)
            })
            .collect()
    }

    fn phase(&self, id: NotificationId) -> Option<Phase> {
        if !self.visible.iter().any(|n| n.id() == id) {
            return None;
        }
        Some(if self.timers.contains_key(&id) {
            Phase::Scheduled
        } else if self.remaining.contains_key(&id) {
            Phase::Paused
        } else {
            Phase::Idle
        })
    }

    fn remaining(&self, id: NotificationId) -> Option<Duration> {
        if let Some(countdown) = self.timers.get(&id) {
            return Some(countdown.remaining(self.clock.now()));
        }
        self.remaining.get(&id).copied()
    }

    fn progress(&self, id: NotificationId) -> Option<f32> {
        if let Some(countdown) = self.timers.get(&id) {
            let total = self.total_duration(id)?;
            let left = countdown.remaining(self.clock.now());
            return Some(fraction(left, total));
        }
        let left = *self.remaining.get(&id)?;
        Some(fraction(left, self.total_duration(id)?))
    }

    fn total_duration(&self, id: NotificationId) -> Option<Duration> {
        self.visible
            .iter()
            .find(|n| n.id() == id)
            .and_then(|n| n.expiry().duration())
    }
}

fn fraction(left: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 0.0;
    }
    (left.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

/// State shared between a provider and the notifiers it hands out.
pub(super) struct Shared<C> {
    registry: RefCell<Registry<C>>,
    on_remove: RefCell<Option<RemovalHook>>,
}

impl<C: Clock> Shared<C> {
    pub(super) fn notify(&self, options: Options) -> NotificationId {
        self.registry.borrow_mut().insert(options)
    }

    pub(super) fn close(&self, id: NotificationId, reason: Removal) -> bool {
        let removed = self.registry.borrow_mut().remove(id);
        match removed {
            Some(notification) => {
                tracing::debug!(%id, ?reason, "notification closed");
                self.report([(notification, reason)]);
                true
            }
            None => false,
        }
    }

    pub(super) fn close_all(&self) {
        let removed = self.registry.borrow_mut().drain();
        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "all notifications closed");
        }
        self.report(removed.into_iter().map(|n| (n, Removal::ClearedAll)));
    }

    /// Runs the removal hook. Called with the registry borrow released so the
    /// hook may raise new notifications.
    fn report(&self, removed: impl IntoIterator<Item = (Notification, Removal)>) {
        let Ok(mut hook) = self.on_remove.try_borrow_mut() else {
            tracing::warn!("removal hook re-entered itself; skipping nested report");
            return;
        };
        if let Some(hook) = hook.as_mut() {
            for (notification, reason) in removed {
                hook(&notification, reason);
            }
        }
    }
}

/// Owns notifications and their countdowns for as long as it is alive.
///
/// Dropping the provider (or calling [`Provider::unmount`]) cancels every
/// countdown, clears both registries and detaches all notifiers handed out by
/// [`Provider::notifier`].
pub struct Provider<C: Clock = SystemClock> {
    shared: Rc<Shared<C>>,
}

impl Provider<SystemClock> {
    /// Creates a provider driven by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Provider<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> fmt::Debug for Provider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.shared.registry.borrow();
        f.debug_struct("Provider")
            .field("visible", &registry.visible.len())
            .field("countdowns", &registry.timers.len())
            .field("paused", &registry.remaining.len())
            .finish()
    }
}

impl<C: Clock> Provider<C> {
    /// Creates a provider that reads time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            shared: Rc::new(Shared {
                registry: RefCell::new(Registry::new(clock)),
                on_remove: RefCell::new(None),
            }),
        }
    }

    /// Sets the expiry used when [`Options`] don't specify one.
    #[must_use]
    pub fn with_default_expiry(self, expiry: Expiry) -> Self {
        self.shared.registry.borrow_mut().default_expiry = expiry;
        self
    }

    /// Enables or disables pausing countdowns while a toast is hovered.
    #[must_use]
    pub fn with_pause_on_hover(self, enabled: bool) -> Self {
        self.shared.registry.borrow_mut().pause_on_hover = enabled;
        self
    }

    /// Registers a callback invoked after each notification is removed.
    ///
    /// It is not invoked for the notifications swept away at teardown.
    #[must_use]
    pub fn on_remove(self, hook: impl FnMut(&Notification, Removal) + 'static) -> Self {
        *self.shared.on_remove.borrow_mut() = Some(Box::new(hook));
        self
    }

    /// Returns a handle components can use to raise and close notifications.
    #[must_use]
    pub fn notifier(&self) -> Notifier<C> {
        Notifier::attached(Rc::downgrade(&self.shared))
    }

    /// Shows a notification and starts its countdown unless it is sticky.
    pub fn notify(&self, options: Options) -> NotificationId {
        self.shared.notify(options)
    }

    /// Closes a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown or
    /// already closed IDs are ignored.
    pub fn close(&self, id: NotificationId) -> bool {
        self.shared.close(id, Removal::Closed)
    }

    /// Closes every notification and cancels all countdowns.
    pub fn close_all(&self) {
        self.shared.close_all();
    }

    /// Suspends the countdown of `id`, keeping the time left for [`Provider::resume`].
    pub fn pause(&self, id: NotificationId) {
        let expired = self.shared.registry.borrow_mut().pause(id);
        if let Some(notification) = expired {
            self.shared.report([(notification, Removal::Expired)]);
        }
    }

    /// Restarts a paused countdown from where it stopped.
    pub fn resume(&self, id: NotificationId) {
        self.shared.registry.borrow_mut().resume(id);
    }

    /// Closes the newest notification, leaving the others untouched.
    pub fn dismiss_latest(&self) -> Option<NotificationId> {
        let head = self.shared.registry.borrow().visible.front().map(Notification::id)?;
        self.shared.close(head, Removal::Dismissed);
        Some(head)
    }

    /// Removes every notification whose countdown has run out.
    ///
    /// Returns how many were removed.
    pub fn tick(&self) -> usize {
        let expired = self.shared.registry.borrow_mut().expire_due();
        let count = expired.len();
        self.shared
            .report(expired.into_iter().map(|n| (n, Removal::Expired)));
        count
    }

    /// Handles a notification message.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.close(*id);
            }
            Message::Pause(id) => self.pause(*id),
            Message::Resume(id) => self.resume(*id),
            Message::DismissLatest => {
                self.dismiss_latest();
            }
            Message::CloseAll => self.close_all(),
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns a snapshot of the visible notifications, newest first.
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.shared.registry.borrow().visible.iter().cloned().collect()
    }

    /// Returns the IDs of the visible notifications, newest first.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.shared
            .registry
            .borrow()
            .visible
            .iter()
            .map(Notification::id)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.registry.borrow().visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.phase(id).is_some()
    }

    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Option<Phase> {
        self.shared.registry.borrow().phase(id)
    }

    /// Time left before `id` expires; `None` for sticky or unknown notifications.
    #[must_use]
    pub fn remaining(&self, id: NotificationId) -> Option<Duration> {
        self.shared.registry.borrow().remaining(id)
    }

    /// Fraction of the countdown still left (1.0 down to 0.0).
    #[must_use]
    pub fn progress(&self, id: NotificationId) -> Option<f32> {
        self.shared.registry.borrow().progress(id)
    }

    /// Whether any countdown is running, i.e. whether ticks are needed.
    #[must_use]
    pub fn has_countdowns(&self) -> bool {
        !self.shared.registry.borrow().timers.is_empty()
    }

    /// Tears the provider down. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl<C: Clock> Drop for Provider<C> {
    fn drop(&mut self) {
        if let Ok(mut hook) = self.shared.on_remove.try_borrow_mut() {
            hook.take();
        }
        if let Ok(mut registry) = self.shared.registry.try_borrow_mut() {
            let pending = registry.timers.len();
            registry.drain();
            tracing::debug!(pending, "notification provider torn down");
        }
    }
}
