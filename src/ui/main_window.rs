use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::controllers::UiState;
use crate::app::domain::{Message, Notification, Theme, ThemeListItem};
use super::menu::set_theme_actions_enabled;
use super::theme::{apply_theme, ThemedWidgets};
#[cfg(target_os = "windows")]
use super::theme::set_windows_titlebar_theme;
use super::theme_list::ThemeList;
use super::toast::{Toast, ToastWidgets};

pub const WINDOW_TITLE: &str = "ThemeSwitch";
const PROMPT: &str = "Choose a theme to apply";

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub prompt: Frame,
    pub list: ThemeList,
    pub toast: Toast,
    pub status: Frame,
    pub apply_button: Button,
}

/// Status line under the list
pub fn status_text(state: UiState) -> String {
    if state.is_loading {
        return "Working...".to_string();
    }
    match state.current {
        Theme::Unknown => "Current theme unknown".to_string(),
        known => format!("Current theme: {}", known),
    }
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 520, 260, WINDOW_TITLE);
    wind.set_xclass(WINDOW_TITLE);

    let mut flex = Flex::new(0, 0, 520, 260, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut prompt = Frame::default().with_label(PROMPT);
    prompt.set_align(Align::Left | Align::Inside);
    prompt.set_label_size(13);
    flex.fixed(&prompt, 26);

    let list = ThemeList::new(sender);

    // Toast banner (initially hidden)
    let toast = Toast::new();
    flex.fixed(&toast.frame, 0);

    let mut bottom = Flex::default();
    bottom.set_type(FlexType::Row);
    bottom.set_margin(4);

    let mut status = Frame::default();
    status.set_align(Align::Left | Align::Inside);
    status.set_label_size(12);
    status.set_label_font(Font::HelveticaItalic);

    let mut apply_button = Button::default().with_label("Apply");
    bottom.fixed(&apply_button, 110);
    {
        let s = *sender;
        apply_button.set_callback(move |_| s.send(Message::ApplySelected));
    }
    bottom.end();
    flex.fixed(&bottom, 36);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        prompt,
        list,
        toast,
        status,
        apply_button,
    }
}

impl MainWidgets {
    /// Bring every widget in line with the controller state
    pub fn render(&mut self, state: UiState) {
        let items = ThemeListItem::for_current(state.current);
        self.list.update(&items, state.is_loading);

        self.status.set_label(&status_text(state));
        if state.is_loading {
            self.apply_button.deactivate();
        } else {
            self.apply_button.activate();
        }
        set_theme_actions_enabled(&self.menu, !state.is_loading);

        // Unknown renders light, the OS default
        let is_dark = state.current.is_dark();
        apply_theme(
            ThemedWidgets {
                window: &mut self.wind,
                menu: &mut self.menu,
                list: &mut self.list.widget,
                labels: [&mut self.prompt, &mut self.status],
                button: &mut self.apply_button,
            },
            is_dark,
        );
        #[cfg(target_os = "windows")]
        {
            if self.wind.shown() {
                set_windows_titlebar_theme(&self.wind, is_dark);
            }
        }
    }

    pub fn show_notification(&mut self, notification: &Notification, is_dark: bool, sender: &Sender<Message>) {
        self.toast.show(
            notification,
            is_dark,
            sender,
            &mut ToastWidgets {
                flex: &mut self.flex,
                window: &mut self.wind,
            },
        );
    }

    pub fn dismiss_toast(&mut self, generation: u64) {
        self.toast.dismiss(
            generation,
            &mut ToastWidgets {
                flex: &mut self.flex,
                window: &mut self.wind,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(UiState { current: Theme::Dark, is_loading: false }), "Current theme: Dark");
        assert_eq!(status_text(UiState { current: Theme::Unknown, is_loading: false }), "Current theme unknown");
        assert_eq!(status_text(UiState { current: Theme::Light, is_loading: true }), "Working...");
    }
}
