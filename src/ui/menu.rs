use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Message, TargetTheme};

pub const LIGHT_ITEM: &str = "Theme/Switch to Light Mode";
pub const DARK_ITEM: &str = "Theme/Switch to Dark Mode";
pub const REFRESH_ITEM: &str = "Theme/Refresh";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Theme
    menu.add(LIGHT_ITEM, Shortcut::Ctrl | 'l', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SelectTheme(TargetTheme::Light)) });
    menu.add(DARK_ITEM, Shortcut::Ctrl | 'd', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::SelectTheme(TargetTheme::Dark)) });
    menu.add(REFRESH_ITEM, Shortcut::None | Key::F5, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::RefreshTheme) });

    // Help
    menu.add("Help/About ThemeSwitch", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Grey out the theme actions while a switch is running
pub fn set_theme_actions_enabled(menu: &MenuBar, enabled: bool) {
    for path in [LIGHT_ITEM, DARK_ITEM, REFRESH_ITEM] {
        let idx = menu.find_index(path);
        if idx < 0 {
            continue;
        }
        if let Some(mut item) = menu.at(idx) {
            if enabled {
                item.activate();
            } else {
                item.deactivate();
            }
        }
    }
}
