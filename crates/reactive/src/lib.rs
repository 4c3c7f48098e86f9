//! gridsource Reactive - Host notifications for gridsource.
//!
//! The adapter never calls into the host grid directly. It emits
//! notifications into a `Notifier`, and the host subscribes to them.
//!
//! # Core Concepts
//!
//! - `Notification`: The kinds of change the host hears about
//! - `SubscriptionManager`: Tracks host callbacks
//! - `Notifier`: Immediate and deferred (coalesced) dispatch
//!
//! # Example
//!
//! ```rust
//! use gridsource_reactive::{Notification, Notifier};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Rc::new(Cell::new(0));
//! let seen = count.clone();
//!
//! let mut notifier = Notifier::new();
//! notifier.subscribe(move |_| seen.set(seen.get() + 1));
//!
//! notifier.defer(Notification::ShapeChanged);
//! notifier.defer(Notification::ShapeChanged);
//! assert_eq!(count.get(), 0);
//!
//! notifier.flush();
//! assert_eq!(count.get(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod notification;
pub mod notify;
pub mod subscription;

pub use notification::Notification;
pub use notify::Notifier;
pub use subscription::{NotificationCallback, SubscriptionId, SubscriptionManager};
