use crate::app::controllers::theme::CycleReport;

use super::theme::TargetTheme;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks, list events and the switch worker send these; the
/// dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Theme
    SelectTheme(TargetTheme),
    ApplySelected,
    RefreshTheme,

    // Worker results
    SwitchFinished(CycleReport),

    // Toast
    DismissToast(u64),

    // Window & Help
    ShowAbout,
    Quit,
}
