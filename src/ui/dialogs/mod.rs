pub mod about;

use fltk::{app, prelude::*, window::Window};

/// Pump events until `dialog` is closed. Returns early, hiding the dialog,
/// once the event loop has nothing left to run or the app is quitting.
pub fn run_dialog(dialog: &mut Window) {
    while dialog.shown() {
        if !app::wait() || app::should_program_quit() {
            dialog.hide();
            break;
        }
    }
}
