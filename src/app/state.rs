use std::path::Path;

use fltk::{dialog, enums::Font, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

use super::document::Document;
use super::file_io::{read_document_text, write_document_text};
use super::settings::{AppSettings, FontSelection};
use crate::ui::dialogs::font::show_font_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

/// The single top-level session object. Owns the document, the widgets
/// the handlers touch, and the persisted settings; the dispatch loop in
/// main routes every menu action to one of the methods below.
pub struct AppState {
    pub document: Document,
    pub editor: TextEditor,
    pub window: Window,
    pub menu: MenuBar,
    pub settings: AppSettings,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(
        mut editor: TextEditor,
        window: Window,
        menu: MenuBar,
        settings: AppSettings,
    ) -> Self {
        let document = Document::new_untitled();
        editor.set_buffer(document.buffer.clone());

        let mut state = Self {
            document,
            editor,
            window,
            menu,
            settings,
            last_open_directory: None,
        };
        let initial_font = state.settings.font_selection();
        state.apply_font(&initial_font);
        state.update_window_title();
        state
    }

    /// Update the window title from the document's display name
    pub fn update_window_title(&mut self) {
        self.window
            .set_label(&format!("{} - QuillPad", self.document.display_name));
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.document.clear();
        self.update_window_title();
    }

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(path);
        }
    }

    /// Read `path` in full and replace the document with it. On failure the
    /// prior text and path are left untouched.
    pub fn open_file(&mut self, path: String) {
        self.remember_directory(&path);
        match read_document_text(Path::new(&path)) {
            Ok(content) => {
                self.document.replace_with_file(path, &content);
                self.update_window_title();
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        let Some(path) = self.document.file_path.clone() else {
            self.file_save_as();
            return;
        };

        let text = self.document.text();
        if let Err(e) = write_document_text(Path::new(&path), &text) {
            dialog::alert_default(&format!("Error saving file: {}", e));
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };

        self.remember_directory(&path);
        // Path is associated before the write, so a failed first save still
        // retries the same destination on plain Save.
        self.document.set_path(path.clone());
        self.update_window_title();

        let text = self.document.text();
        if let Err(e) = write_document_text(Path::new(&path), &text) {
            dialog::alert_default(&format!("Error saving file: {}", e));
        }
    }

    // --- Format ---

    pub fn choose_font(&mut self) {
        let current = self.settings.font_selection();
        if let Some(selection) = show_font_dialog(&current) {
            self.apply_font(&selection);
            self.settings.set_font_selection(&selection);
            if let Err(e) = self.settings.save() {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
            }
        }
    }

    pub fn apply_font(&mut self, selection: &FontSelection) {
        self.editor.set_text_font(Font::by_name(&selection.family));
        self.editor.set_text_size(selection.size as i32);
        self.editor.redraw();
    }
}
