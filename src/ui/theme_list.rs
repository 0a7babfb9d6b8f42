use fltk::{
    app::{self, Sender},
    browser::HoldBrowser,
    enums::{Event, Key},
    prelude::*,
};

use crate::app::domain::{Message, TargetTheme, ThemeListItem};

const COLUMN_WIDTHS: &[i32] = &[200, 180, 90];

/// Two-row selectable list, one row per switchable theme.
///
/// Double-click or Enter on a row sends `Message::ApplySelected`.
pub struct ThemeList {
    pub widget: HoldBrowser,
    targets: Vec<TargetTheme>,
}

/// Browser line for one item: bold title, subtitle, italic accessory
pub fn row_text(item: &ThemeListItem) -> String {
    format!("@b{}\t{}\t@i{}", item.title, item.subtitle, item.accessory)
}

impl ThemeList {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut widget = HoldBrowser::default();
        widget.set_column_widths(COLUMN_WIDTHS);
        widget.set_column_char('\t');
        widget.set_text_size(14);

        let s = *sender;
        widget.set_callback(move |_| {
            if app::event_clicks() {
                s.send(Message::ApplySelected);
            }
        });

        let s = *sender;
        widget.handle(move |_, event| {
            if event != Event::KeyDown {
                return false;
            }
            let key = app::event_key();
            if key == Key::Enter || key == Key::KPEnter {
                s.send(Message::ApplySelected);
                return true;
            }
            false
        });

        Self {
            widget,
            targets: Vec::new(),
        }
    }

    /// Replace the rows, keeping the selected line if there is one
    pub fn update(&mut self, items: &[ThemeListItem], loading: bool) {
        let selected = self.widget.value();
        self.widget.clear();
        for item in items {
            self.widget.add(&row_text(item));
        }
        self.targets = items.iter().map(|item| item.target).collect();

        let line = if selected > 0 { selected } else { 1 };
        if line as usize <= self.targets.len() {
            self.widget.select(line);
        }

        if loading {
            self.widget.deactivate();
        } else {
            self.widget.activate();
        }
        self.widget.redraw();
    }

    pub fn selected(&self) -> Option<TargetTheme> {
        let line = self.widget.value();
        if line < 1 {
            return None;
        }
        self.targets.get(line as usize - 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Theme;

    #[test]
    fn test_row_text_columns() {
        let item = ThemeListItem::new(TargetTheme::Dark, Theme::Dark);
        assert_eq!(row_text(&item), "@bAlready in Dark mode\tCurrent theme: Dark\t@iCurrent");
    }

    #[test]
    fn test_row_text_unknown() {
        let item = ThemeListItem::new(TargetTheme::Light, Theme::Unknown);
        let text = row_text(&item);
        assert_eq!(text.split('\t').count(), COLUMN_WIDTHS.len());
        assert!(text.contains("Current theme unknown"));
    }
}
