//! Switch the Windows per-user app theme between light and dark.
//!
//! The `app` module holds everything that can run without a display;
//! `ui` binds it to an FLTK window.

pub mod app;
pub mod ui;
