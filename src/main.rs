use fltk::{app, prelude::*};

use jot_pad::app::{AppSettings, AppState, Message};
use jot_pad::ui::main_window::build_main_window;
use jot_pad::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let mut widgets = build_main_window(&settings);
    build_menu(&mut widgets.menu, &sender);

    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == fltk::enums::Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    widgets.wind.end();
    widgets.wind.show();

    let mut state = AppState::new(
        widgets.text_editor,
        widgets.text_buffer,
        widgets.wind,
        settings,
    );
    state.apply_font();
    state.update_window_title();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        fltk_app.quit();
                    }
                }
                Message::SetFamily(family) => state.set_family(family),
                Message::ToggleBold => state.toggle_bold(),
                Message::ToggleItalic => state.toggle_italic(),
            }
        }
    }
}
