//! FLTK presentation layer: the main window, its list and toast, menu,
//! colours and dialogs.

pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod theme;
pub mod theme_list;
pub mod toast;
