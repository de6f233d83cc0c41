//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The update layer never touches the clipboard or the filesystem itself.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the document and selection
    Redraw,
    /// Store text on the clipboard (failures are logged, not reported)
    WriteClipboard(String),
    /// Read the clipboard and paste it into the active editor
    ReadClipboard,
    /// Load a word list asynchronously
    /// Sends Msg::App(DictionaryLoaded) when done
    LoadDictionary { path: PathBuf },
    /// Load file asynchronously
    LoadFile { path: PathBuf },
    /// Save file asynchronously
    SaveFile { path: PathBuf, content: String },
    /// Hand the document to the embedding host instead of writing a file
    PublishContent(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// A side effect followed by a redraw
    pub fn with_redraw(self) -> Self {
        Cmd::Batch(vec![self, Cmd::Redraw])
    }

    /// Flatten nested batches, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_redraw_runs_effect_first() {
        assert_eq!(
            Cmd::WriteClipboard("x".into()).with_redraw().flatten(),
            vec![Cmd::WriteClipboard("x".into()), Cmd::Redraw]
        );
    }

    #[test]
    fn test_flatten() {
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::Redraw,
            Cmd::batch(vec![Cmd::ReadClipboard, Cmd::None]),
        ]);
        assert_eq!(cmd.flatten(), vec![Cmd::Redraw, Cmd::ReadClipboard]);
    }
}
