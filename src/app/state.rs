use std::path::Path;

use fltk::{
    enums::Font,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::document::DocumentSession;
use super::font::{self, FontFamily, FontSelection, StyleMask};
use super::settings::AppSettings;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

pub struct AppState {
    pub session: DocumentSession,
    pub selection: FontSelection,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub window: Window,
    pub settings: AppSettings,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(
        editor: TextEditor,
        buffer: TextBuffer,
        window: Window,
        settings: AppSettings,
    ) -> Self {
        let last_open_directory = settings.last_open_directory.clone();
        Self {
            session: DocumentSession::new(),
            selection: FontSelection::default(),
            editor,
            buffer,
            window,
            settings,
            last_open_directory,
        }
    }

    /// Update the window title based on the associated file
    pub fn update_window_title(&mut self) {
        match self.session.display_name() {
            Some(name) => self.window.set_label(&format!("{} - JotPad", name)),
            None => self.window.set_label("Untitled - JotPad"),
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    /// Copy the widget's text into the session before a save.
    fn sync_session_text(&mut self) {
        let text = self.buffer.text();
        self.session.set_text(&text);
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.session.clear();
        self.buffer.set_text("");
        self.update_window_title();
    }

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(&path);
        }
    }

    pub fn open_file(&mut self, path: &str) {
        self.remember_directory(Path::new(path));
        match self.session.open(path) {
            Ok(()) => {
                self.buffer.set_text(self.session.text());
                self.update_window_title();
            }
            Err(e) => {
                // No error dialog; the widget mirrors the emptied session
                eprintln!("{}", e);
                self.buffer.set_text("");
                self.update_window_title();
            }
        }
    }

    pub fn file_save(&mut self) {
        self.sync_session_text();
        match self.session.save() {
            Ok(Some(path)) => {
                self.remember_directory(&path);
                self.update_window_title();
            }
            Ok(None) => self.file_save_as(),
            Err(e) => eprintln!("{}", e),
        }
    }

    pub fn file_save_as(&mut self) {
        self.sync_session_text();
        let Some(chosen) = native_save_dialog(self.last_open_directory.as_deref()) else {
            // Cancelled: buffer and association unchanged
            return;
        };
        match self.session.save_as(&chosen) {
            Ok(path) => {
                self.remember_directory(&path);
                self.update_window_title();
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    /// Handle quit. Persists window preferences, never prompts.
    pub fn file_quit(&mut self) -> bool {
        self.settings.window_width = self.window.width();
        self.settings.window_height = self.window.height();
        self.settings.last_open_directory = self.last_open_directory.clone();
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
        true
    }

    // --- Font ---

    pub fn set_family(&mut self, family: FontFamily) {
        self.selection.family = family;
        self.apply_font();
    }

    pub fn toggle_bold(&mut self) {
        self.selection.bold = !self.selection.bold;
        self.apply_font();
    }

    pub fn toggle_italic(&mut self) {
        self.selection.italic = !self.selection.italic;
        self.apply_font();
    }

    /// Re-resolve the effective font from current state and restyle the
    /// whole note area.
    pub fn apply_font(&mut self) {
        let resolved = font::resolve(self.selection);
        self.editor.set_text_font(editor_font(self.selection.family, resolved.style));
        self.editor.set_text_size(resolved.size_pt);
        self.editor.redraw();
    }
}

/// Map a resolved family/style onto the FLTK font table.
fn editor_font(family: FontFamily, style: StyleMask) -> Font {
    let bold = style.contains(StyleMask::BOLD);
    let italic = style.contains(StyleMask::ITALIC);
    match (family, bold, italic) {
        (FontFamily::Monospaced, false, false) => Font::Courier,
        (FontFamily::Monospaced, true, false) => Font::CourierBold,
        (FontFamily::Monospaced, false, true) => Font::CourierItalic,
        (FontFamily::Monospaced, true, true) => Font::CourierBoldItalic,
        (FontFamily::Serif, false, false) => Font::Times,
        (FontFamily::Serif, true, false) => Font::TimesBold,
        (FontFamily::Serif, false, true) => Font::TimesItalic,
        (FontFamily::Serif, true, true) => Font::TimesBoldItalic,
        (FontFamily::SansSerif, false, false) => Font::Helvetica,
        (FontFamily::SansSerif, true, false) => Font::HelveticaBold,
        (FontFamily::SansSerif, false, true) => Font::HelveticaItalic,
        (FontFamily::SansSerif, true, true) => Font::HelveticaBoldItalic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_font_covers_every_style_combination() {
        // Every family/style pair must land on a distinct FLTK font
        let mut seen = Vec::new();
        for &family in FontFamily::all() {
            for bold in [false, true] {
                for italic in [false, true] {
                    let mut style = StyleMask::PLAIN;
                    if bold {
                        style |= StyleMask::BOLD;
                    }
                    if italic {
                        style |= StyleMask::ITALIC;
                    }
                    let mapped = editor_font(family, style);
                    assert!(!seen.contains(&mapped));
                    seen.push(mapped);
                }
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_plain_families_map_to_base_fonts() {
        assert_eq!(editor_font(FontFamily::Monospaced, StyleMask::PLAIN), Font::Courier);
        assert_eq!(editor_font(FontFamily::Serif, StyleMask::PLAIN), Font::Times);
        assert_eq!(editor_font(FontFamily::SansSerif, StyleMask::PLAIN), Font::Helvetica);
    }
}
