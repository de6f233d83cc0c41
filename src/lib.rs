//! textpad - a plain-text editing core
//!
//! This library exposes the editing engine (linear and column selection,
//! undo history, search/replace, case conversion) and the Elm-style
//! application layer that drives it, for integration tests, benchmarks
//! and the `textpad` binary.

pub mod case;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod search;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Session;
