use fltk::{
    button::Button,
    browser::HoldBrowser,
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

/// Colours used for the window chrome in one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub list_background: Color,
    pub selection: Color,
    pub menu: Color,
    pub menu_hover: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            background: Color::from_rgb(25, 25, 25),
            text: Color::from_rgb(220, 220, 220),
            muted_text: Color::from_rgb(150, 150, 150),
            list_background: Color::from_rgb(30, 30, 30),
            selection: Color::from_rgb(70, 70, 100),
            menu: Color::from_rgb(35, 35, 35),
            menu_hover: Color::from_rgb(60, 60, 60),
        }
    } else {
        Palette {
            background: Color::from_rgb(240, 240, 240),
            text: Color::Black,
            muted_text: Color::from_rgb(100, 100, 100),
            list_background: Color::White,
            selection: Color::from_rgb(173, 216, 230),
            menu: Color::from_rgb(240, 240, 240),
            menu_hover: Color::from_rgb(200, 200, 200),
        }
    }
}

pub struct ThemedWidgets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub list: &'a mut HoldBrowser,
    pub labels: [&'a mut Frame; 2],
    pub button: &'a mut Button,
}

/// Recolour the window to follow the observed system theme
pub fn apply_theme(widgets: ThemedWidgets, is_dark: bool) {
    let p = palette(is_dark);

    widgets.window.set_color(p.background);
    widgets.window.set_label_color(p.text);
    widgets.menu.set_color(p.menu);
    widgets.menu.set_text_color(p.text);
    widgets.menu.set_selection_color(p.menu_hover);
    widgets.list.set_color(p.list_background);
    widgets.list.set_text_color(p.text);
    widgets.list.set_selection_color(p.selection);
    for label in widgets.labels {
        label.set_label_color(p.muted_text);
    }
    widgets.button.set_color(p.menu);
    widgets.button.set_label_color(p.text);

    widgets.window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    let on: i32 = if is_dark { 1 } else { 0 };

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE (Windows 11 / Windows 10 2004+),
        // 19 on Windows 10 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
