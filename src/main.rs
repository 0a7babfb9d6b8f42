use std::sync::Arc;

use fltk::{app, dialog, prelude::*};

use theme_switch::app::infrastructure::error::Result;
use theme_switch::app::{
    AppearanceStore, Message, RegistryStore, StoreConfig, ThemeController, ThemeReader,
};
use theme_switch::ui::dialogs::about::show_about_dialog;
use theme_switch::ui::main_window::build_main_window;
use theme_switch::ui::menu::build_menu;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        dialog::alert_default(&format!("ThemeSwitch could not start:\n\n{}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let config = StoreConfig::default();
    let reader = ThemeReader::new(&config)?;
    let store: Arc<dyn AppearanceStore> = Arc::new(RegistryStore::new(config));
    let mut controller = ThemeController::new(store, reader);

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);

    widgets.render(controller.state());
    widgets.wind.show();

    let initial = controller.refresh();
    log::info!("current theme: {}", initial);
    widgets.render(controller.state());

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::SelectTheme(theme) => {
                let started = controller.spawn_select(theme, move |report| {
                    sender.send(Message::SwitchFinished(report));
                });
                if !started {
                    log::debug!("switch to {} not started", theme);
                }
                // A failed start has already re-read the theme
                widgets.render(controller.state());
            }
            Message::ApplySelected => {
                if let Some(theme) = widgets.list.selected() {
                    sender.send(Message::SelectTheme(theme));
                }
            }
            Message::RefreshTheme => {
                controller.refresh();
                widgets.render(controller.state());
            }
            Message::SwitchFinished(report) => {
                controller.finish(&report);
                let current = controller.current();
                widgets.render(controller.state());
                widgets.show_notification(&report.notification(), current.is_dark(), &sender);
            }
            Message::DismissToast(generation) => widgets.dismiss_toast(generation),
            Message::ShowAbout => show_about_dialog(),
            Message::Quit => widgets.wind.hide(),
        }
    }

    Ok(())
}
