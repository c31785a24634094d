use fltk::{app, enums::Event, prelude::*};

use quill_pad::app::{AppSettings, AppState, Message};
use quill_pad::ui::main_window::build_main_window;
use quill_pad::ui::menu::build_menu;

fn main() {
    // load_system_fonts makes the installed families visible to the font dialog
    let fltk_app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();

    let mut widgets = build_main_window();
    build_menu(&mut widgets.menu, &sender);

    // X on the main window quits like File/Exit
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::FileExit);
            }
        }
    });

    let mut state = AppState::new(widgets.text_editor, widgets.wind, widgets.menu, settings);
    state.window.show();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileExit => fltk_app.quit(),
                Message::ChooseFont => state.choose_font(),
            }
        }
    }
}
