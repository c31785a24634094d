use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Normalize line endings on file read.
///
/// Each input line contributes `line + "\n"`: CRLF collapses to LF and a
/// non-empty file always ends in exactly one newline. Empty input stays empty.
pub fn normalize_line_endings(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/letter.txt"), "letter.txt");
        assert_eq!(extract_filename("notes.txt"), "notes.txt");
        assert_eq!(extract_filename("/path/with/many/levels/file.txt"), "file.txt");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename("/home/user/"), "user");
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_normalize_crlf() {
        assert_eq!(normalize_line_endings("one\r\ntwo\r\n"), "one\ntwo\n");
    }

    #[test]
    fn test_normalize_appends_final_newline() {
        assert_eq!(normalize_line_endings("no trailing newline"), "no trailing newline\n");
    }

    #[test]
    fn test_normalize_already_normalized() {
        assert_eq!(normalize_line_endings("a\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_line_endings(""), "");
    }

    #[test]
    fn test_normalize_preserves_blank_lines() {
        assert_eq!(normalize_line_endings("a\n\nb"), "a\n\nb\n");
    }
}
