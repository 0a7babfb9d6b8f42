//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme classification and selectable targets
//! - List rows and notifications shown by the UI
//! - Message types for the event system

pub mod messages;
pub mod notification;
pub mod theme;

pub use messages::Message;
pub use notification::{Notification, NotificationStyle};
pub use theme::{TargetTheme, Theme, ThemeListItem};
