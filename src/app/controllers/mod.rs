//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controller that ties the appearance store,
//! the reader/writer services and the UI state together.

pub mod theme;

pub use theme::{CycleReport, ThemeController, UiState};
