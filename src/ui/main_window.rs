use fltk::{
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::settings::AppSettings;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub text_buffer: TextBuffer,
}

pub fn build_main_window(settings: &AppSettings) -> MainWidgets {
    let width = settings.window_width;
    let height = settings.window_height;

    let mut wind = Window::new(100, 100, width, height, "Untitled - JotPad");
    wind.set_xclass("JotPad");

    let mut flex = Flex::new(0, 0, width, height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let text_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(text_buffer.clone());
    // Wrap long lines at word boundaries, like a notepad should
    text_editor.wrap_mode(WrapMode::AtBounds, 0);

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        text_buffer,
    }
}
