/// Filter for the open dialog, one option per line.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// FLTK adds an "All Files (*)" option itself, so we don't include one.
pub fn get_open_filter() -> String {
    ["Text Files\t*.txt", "Markdown Files\t*.{md,markdown}"].join("\n")
}

/// Filter for the save dialog: any destination is fair game.
pub fn get_save_filter() -> String {
    "*".to_string()
}
