use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::font::{FontFamily, FontSelection};
use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Font: an exclusive radio group for the family, independent toggles for
    // the styles. The startup default family starts selected.
    let families = FontFamily::all();
    for (i, &family) in families.iter().enumerate() {
        let mut flags = MenuFlag::Radio;
        if family == FontSelection::default().family {
            flags = flags | MenuFlag::Value;
        }
        if i == families.len() - 1 {
            flags = flags | MenuFlag::MenuDivider;
        }
        menu.add(&format!("Font/{}", family.label()), Shortcut::None, flags, { let s = *s; move |_| s.send(Message::SetFamily(family)) });
    }
    menu.add("Font/Bold", Shortcut::None, MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleBold) });
    menu.add("Font/Italic", Shortcut::None, MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleItalic) });
}
