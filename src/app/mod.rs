//! Application layer: the document, its settings, and the handlers the
//! menu dispatch loop drives.

pub mod document;
pub mod error;
pub mod file_filters;
pub mod file_io;
pub mod messages;
pub mod settings;
pub mod state;
pub mod text_ops;

pub use document::Document;
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::{AppSettings, FontSelection};
pub use state::AppState;
