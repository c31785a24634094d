use std::path::Path;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::{get_open_filter, get_save_filter};

/// Show the native open dialog. Returns the chosen path, or None if dismissed.
pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    show_chooser(FileDialogType::BrowseFile, &get_open_filter(), directory)
}

/// Show the native save dialog. Returns the chosen path, or None if dismissed.
pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    show_chooser(FileDialogType::BrowseSaveFile, &get_save_filter(), directory)
}

fn show_chooser(kind: FileDialogType, filter: &str, directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_filter(filter);
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&Path::new(dir));
    }
    nfc.show(); // blocks until close

    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
