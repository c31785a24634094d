use fltk::text::TextBuffer;

use super::text_ops::extract_filename;

/// The in-memory text being edited: one FLTK buffer plus the filesystem
/// location last associated with it via Open or Save As.
pub struct Document {
    pub buffer: TextBuffer,
    pub file_path: Option<String>,
    pub display_name: String,
}

impl Document {
    pub fn new_untitled() -> Self {
        Self {
            buffer: TextBuffer::default(),
            file_path: None,
            display_name: "Untitled".to_string(),
        }
    }

    /// Replace the whole document with freshly read file content.
    pub fn replace_with_file(&mut self, path: String, content: &str) {
        self.buffer.set_text(content);
        self.display_name = extract_filename(&path);
        self.file_path = Some(path);
    }

    /// Associate a new path with the document (Save As), keeping the text.
    pub fn set_path(&mut self, path: String) {
        self.display_name = extract_filename(&path);
        self.file_path = Some(path);
    }

    /// Reset to an empty, untitled document.
    pub fn clear(&mut self) {
        self.buffer.set_text("");
        self.file_path = None;
        self.display_name = "Untitled".to_string();
    }

    /// Read the full buffer text without leaking the C-allocated copy.
    pub fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }
}

/// fltk-rs's `TextBuffer::text()` copies the string FLTK `malloc()`s but
/// never frees the original, leaking the full buffer size per call. Save
/// reads the whole buffer every time, so go through the FFI directly and
/// free the C allocation ourselves.
fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() is valid while `buf` lives, and
    // Fl_Text_Buffer_text returns either null (empty buffer) or a malloc'd,
    // null-terminated C string we copy and then free exactly once.
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}
