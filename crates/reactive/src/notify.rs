//! Notification dispatch.
//!
//! `Notifier` is the sink the adapter emits into. Immediate notifications go
//! straight to subscribers. Deferred ones are raised during a render pass,
//! when the host must not be re-entered, and delivered by `flush` once the
//! pass is over. Deferring the same kind twice before a flush delivers it once.

use crate::notification::Notification;
use crate::subscription::{SubscriptionId, SubscriptionManager};
use alloc::vec::Vec;
use tracing::trace;

/// Dispatches adapter notifications to host subscriptions.
#[derive(Default)]
pub struct Notifier {
    /// Host subscriptions
    subscriptions: SubscriptionManager,
    /// Notifications waiting for the end of the render pass, without duplicates
    pending: Vec<Notification>,
}

impl Notifier {
    /// Creates a notifier with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to all notifications.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Notification) + 'static,
    {
        self.subscriptions.subscribe(callback)
    }

    /// Removes a subscription. Returns true if it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.unsubscribe(id)
    }

    /// Returns the number of subscriptions.
    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Delivers a notification to every subscriber now.
    pub fn emit(&self, notification: Notification) {
        trace!(event = notification.name(), "emit");
        self.subscriptions.notify_all(notification);
    }

    /// Schedules a notification for the next `flush`.
    ///
    /// Returns false if the same kind is already pending.
    pub fn defer(&mut self, notification: Notification) -> bool {
        if self.pending.contains(&notification) {
            return false;
        }
        trace!(event = notification.name(), "defer");
        self.pending.push(notification);
        true
    }

    /// Returns true if the given kind is waiting for a flush.
    #[inline]
    pub fn is_pending(&self, notification: Notification) -> bool {
        self.pending.contains(&notification)
    }

    /// Returns true if anything is waiting for a flush.
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Delivers and clears every pending notification, in scheduling order.
    ///
    /// Returns the number delivered.
    pub fn flush(&mut self) -> usize {
        let pending = core::mem::take(&mut self.pending);
        for notification in &pending {
            self.emit(*notification);
        }
        pending.len()
    }
}
