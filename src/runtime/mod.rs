//! Runtime: the session that executes commands, plus clipboard backends

mod clipboard;
mod session;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use session::Session;
