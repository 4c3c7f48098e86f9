//! Subscription management for host notifications.
//!
//! This module provides subscription IDs and a manager for tracking the
//! callbacks a host registers to hear about schema and shape changes.

use crate::notification::Notification;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;

/// Unique identifier for a subscription.
pub type SubscriptionId = u64;

/// Callback type for notifications.
pub type NotificationCallback = Box<dyn Fn(Notification)>;

/// Manages the host's subscriptions.
///
/// Callbacks are invoked in subscription order.
pub struct SubscriptionManager {
    /// Callbacks keyed by the ID they were registered under
    subscriptions: BTreeMap<SubscriptionId, NotificationCallback>,
    /// Next subscription ID to assign
    next_id: SubscriptionId,
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionManager {
    /// Creates a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Subscribes with the given callback.
    ///
    /// Returns the subscription ID that can be used to unsubscribe.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Notification) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        self.subscriptions.insert(id, Box::new(callback));
        id
    }

    /// Unsubscribes by ID.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.remove(&id).is_some()
    }

    /// Notifies every subscription, oldest first.
    pub fn notify_all(&self, notification: Notification) {
        for callback in self.subscriptions.values() {
            callback(notification);
        }
    }

    /// Returns the number of subscriptions.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns true if there are no subscriptions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
