//! State layers for the applications hosted in desktop window panes.
//!
//! Each module owns one pane's data model as plain Rust state, loaded
//! from and saved to a [`wos_store::BlobStore`] as a whole JSON blob,
//! scoped per user. Nothing here renders; the shell layers UI on top.

pub mod browser;
pub mod calendar;
pub mod editor;
pub mod files;
pub mod notes;
pub mod notifications;
pub mod terminal;
pub mod weather;

pub use browser::{Bookmark, BrowserState, Tab};
pub use calendar::{CalendarEvent, CalendarState};
pub use editor::{CodeFile, EditorState};
pub use files::{FileKind, FileRecord, FilesError, FilesState};
pub use notes::{Note, NotesState};
pub use notifications::{Notification, NotificationKind, NotificationsState};
pub use terminal::{TerminalEnv, TerminalLine, TerminalState};
pub use weather::{Weather, WeatherCondition};
