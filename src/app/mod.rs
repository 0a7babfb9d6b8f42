//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Theme, Notification, Messages)
//! - `controllers/` - Orchestration (ThemeController)
//! - `services/` - Business operations (reading and writing the flag)
//! - `infrastructure/` - External integrations (child processes, registry store, errors)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::{CycleReport, ThemeController, UiState};
pub use domain::{Message, Notification, NotificationStyle, TargetTheme, Theme, ThemeListItem};
pub use infrastructure::config::StoreConfig;
pub use infrastructure::error::{AppError, CommandError};
pub use infrastructure::store::{AppearanceStore, RegistryStore};
pub use services::{Applied, ApplyError, ThemeReader};
