//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection, mode and history transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug` - selection diffs only
//! - `RUST_LOG=textpad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/textpad/logs/textpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::editable::{ColumnSelection, Position, Selection};
use crate::model::{AppModel, EditMode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output (stderr) respects RUST_LOG and defaults to `warn`.
/// File logging writes to `~/.config/textpad/logs/textpad.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection/mode state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub column_mode: bool,
    pub selection: Option<Selection>,
    pub rectangle: Option<ColumnSelection>,
    pub column_cursor: Option<Position>,
    pub history_len: usize,
    pub history_cursor: usize,
}

impl SelectionSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let (selection, rectangle, column_cursor) = match &model.mode {
            EditMode::Linear(sel) => (Some(*sel), None, None),
            EditMode::Column(editor) => (None, editor.rectangle, Some(editor.cursor)),
        };
        Self {
            column_mode: model.is_column_mode(),
            selection,
            rectangle,
            column_cursor,
            history_len: model.history.len(),
            history_cursor: model.history.cursor(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.column_mode != other.column_mode {
            let mode = if other.column_mode { "column" } else { "linear" };
            changes.push(format!("mode → {}", mode));
        }
        if self.selection != other.selection {
            if let Some(sel) = other.selection {
                changes.push(format!("selection {}..{}", sel.start, sel.end));
            }
        }
        if self.rectangle != other.rectangle {
            match other.rectangle {
                Some(r) => changes.push(format!(
                    "rect ({},{}) → ({},{})",
                    r.start_line, r.start_col, r.end_line, r.end_col
                )),
                None => changes.push("rect cleared".to_string()),
            }
        }
        if self.history_len != other.history_len || self.history_cursor != other.history_cursor {
            changes.push(format!(
                "history {}/{} → {}/{}",
                self.history_cursor, self.history_len, other.history_cursor, other.history_len
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editable::{ColumnEditor, Document};

    #[test]
    fn test_snapshot_diff_reports_mode_and_history() {
        let mut model = AppModel::new("ab\ncd", EditorConfig::default());
        let before = SelectionSnapshot::from_model(&model);

        model.commit(Document::from_text("ab\ncd\n"));
        model.mode = EditMode::Column(ColumnEditor::enter(Position::new(1, 1)));
        let after = SelectionSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("mode → column"));
        assert!(diff.contains("rect (1,1) → (1,1)"));
        assert!(diff.contains("history 0/1 → 1/2"));
    }

    #[test]
    fn test_snapshot_diff_none_when_unchanged() {
        let model = AppModel::default();
        let a = SelectionSnapshot::from_model(&model);
        let b = SelectionSnapshot::from_model(&model);
        assert!(a.diff(&b).is_none());
    }
}
