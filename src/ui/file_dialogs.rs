use fltk::dialog;

/// Filter shown in both choosers; FLTK adds an "All Files (*)" option itself.
const TXT_FILTER: &str = "*.txt";

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    dialog::file_chooser("Open File", TXT_FILTER, directory.unwrap_or("."), false)
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    dialog::file_chooser("Save As", TXT_FILTER, directory.unwrap_or("."), false)
}
