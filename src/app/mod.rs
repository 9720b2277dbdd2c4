//! Application layer.
//!
//! # Structure
//!
//! - `font.rs` - font family/style selection and the effective-font resolver
//! - `document.rs` - the document session: buffer, associated path, file I/O
//! - `settings.rs` - persisted window/dialog preferences
//! - `messages.rs` - the message enum sent from menu callbacks
//! - `error.rs` - session error type
//! - `state.rs` - main application coordinator

pub mod document;
pub mod error;
pub mod font;
pub mod messages;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use document::DocumentSession;
pub use error::{Result, SessionError};
pub use font::{EffectiveFont, FontFamily, FontSelection, StyleMask};
pub use messages::Message;
pub use settings::AppSettings;
pub use state::AppState;
