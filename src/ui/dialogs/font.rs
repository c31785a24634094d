use fltk::{
    app,
    browser::HoldBrowser,
    button::Button,
    frame::Frame,
    misc::Spinner,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::settings::{FontSelection, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Show the modal font chooser and return the confirmed selection.
///
/// Lists every family FLTK loaded from the system (`load_system_fonts()`
/// must have run at startup). Returns `Some` only when the user presses
/// Select with a family highlighted; Cancel, closing the dialog, or
/// confirming with nothing highlighted all return `None` and leave the
/// caller's font untouched.
pub fn show_font_dialog(current: &FontSelection) -> Option<FontSelection> {
    let mut dialog = Window::default()
        .with_size(340, 430)
        .with_label("Choose Font")
        .center_screen();
    dialog.make_modal(true);

    Frame::default()
        .with_pos(15, 10)
        .with_size(310, 25)
        .with_label("Font:")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);

    let mut family_browser = HoldBrowser::default().with_pos(15, 40).with_size(310, 280);
    for family in app::fonts() {
        family_browser.add(&family);
    }

    // Preselect the caller's current family when it is still installed
    for line in 1..=family_browser.size() {
        if family_browser.text(line).as_deref() == Some(current.family.as_str()) {
            family_browser.select(line);
            family_browser.middle_line(line);
            break;
        }
    }

    Frame::default()
        .with_pos(15, 330)
        .with_size(60, 30)
        .with_label("Size:")
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut size_spinner = Spinner::default().with_pos(80, 330).with_size(80, 30);
    size_spinner.set_minimum(MIN_FONT_SIZE as f64);
    size_spinner.set_maximum(MAX_FONT_SIZE as f64);
    size_spinner.set_step(1.0);
    size_spinner.set_value(current.size as f64);

    let mut select_btn = Button::default()
        .with_pos(160, 380)
        .with_size(80, 30)
        .with_label("Select");
    let mut cancel_btn = Button::default()
        .with_pos(250, 380)
        .with_size(75, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.make_resizable(false);
    dialog.show();

    let result = Rc::new(RefCell::new(None));

    let result_select = result.clone();
    let browser_select = family_browser.clone();
    let spinner_select = size_spinner.clone();
    let dialog_select = dialog.clone();
    select_btn.set_callback(move |_| {
        let line = browser_select.value();
        if line > 0 {
            if let Some(family) = browser_select.text(line) {
                *result_select.borrow_mut() =
                    Some(FontSelection::new(family, spinner_select.value() as u32));
            }
        }
        dialog_select.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}
