//! JotPad - a minimal note-taking text editor.
//!
//! The crate splits into two layers:
//!
//! - `app/` - the editor's logic: the document session (New/Open/Save/Save As
//!   and the `.txt` naming policy), the font resolver, settings, errors.
//! - `ui/` - FLTK widget construction. Menu callbacks only send [`app::Message`]
//!   values; the dispatch loop in `main` routes them to [`app::AppState`].

pub mod app;
pub mod ui;
