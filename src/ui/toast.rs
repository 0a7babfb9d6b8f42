use fltk::{
    app::{self, Sender},
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::domain::{Message, Notification, NotificationStyle};

pub const TOAST_HEIGHT: i32 = 28;
const TOAST_SECONDS: f64 = 4.0;

pub struct ToastWidgets<'a> {
    pub flex: &'a mut Flex,
    pub window: &'a mut Window,
}

/// Transient banner shown after each switch attempt.
///
/// Each toast gets a generation number; a dismiss timer only hides the
/// toast it was scheduled for.
pub struct Toast {
    pub frame: Frame,
    generation: u64,
}

/// Background and label colour for a toast
pub fn toast_colors(style: NotificationStyle, is_dark: bool) -> (Color, Color) {
    match (style, is_dark) {
        (NotificationStyle::Success, false) => (Color::from_rgb(212, 237, 218), Color::from_rgb(21, 87, 36)),
        (NotificationStyle::Success, true) => (Color::from_rgb(30, 70, 40), Color::from_rgb(200, 240, 210)),
        (NotificationStyle::Failure, false) => (Color::from_rgb(248, 215, 218), Color::from_rgb(114, 28, 36)),
        (NotificationStyle::Failure, true) => (Color::from_rgb(90, 30, 35), Color::from_rgb(250, 210, 215)),
    }
}

impl Toast {
    pub fn new() -> Self {
        let mut frame = Frame::default().with_size(0, 0);
        frame.set_frame(FrameType::FlatBox);
        frame.set_label_size(13);
        frame.set_align(Align::Left | Align::Inside | Align::Clip);
        frame.hide();
        Self { frame, generation: 0 }
    }

    pub fn show(
        &mut self,
        notification: &Notification,
        is_dark: bool,
        sender: &Sender<Message>,
        widgets: &mut ToastWidgets,
    ) {
        self.generation += 1;
        let (bg, fg) = toast_colors(notification.style, is_dark);
        self.frame.set_color(bg);
        self.frame.set_label_color(fg);
        self.frame.set_label(&format!("  {}", notification.banner_text()));
        self.frame.show();
        widgets.flex.fixed(&self.frame, TOAST_HEIGHT);
        widgets.window.redraw();

        let s = *sender;
        let generation = self.generation;
        app::add_timeout3(TOAST_SECONDS, move |_| s.send(Message::DismissToast(generation)));
    }

    pub fn dismiss(&mut self, generation: u64, widgets: &mut ToastWidgets) {
        if generation != self.generation {
            return;
        }
        self.frame.hide();
        widgets.flex.fixed(&self.frame, 0);
        widgets.window.redraw();
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}
