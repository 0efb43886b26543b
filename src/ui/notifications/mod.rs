// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to confirm
//! a like, report a quiz result or warn about a preferences problem,
//! without blocking interaction with the page.
//!
//! # Components
//!
//! - [`Notification`] - message key, arguments and severity
//! - [`Manager`] - queuing and auto-dismiss lifecycle
//! - [`Toast`] - rendering of the visible notifications
//!
//! # Usage
//!
//! ```
//! use feline_fascination::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-like-thanks"));
//! assert_eq!(manager.visible_count(), 1);
//! ```
//!
//! Success and info toasts last about 3s, warnings 5s and errors stay until
//! dismissed. At most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
