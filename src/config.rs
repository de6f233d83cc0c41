//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/textpad/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editable::column::DEFAULT_PAGE_LINES;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Word list loaded at session start for case conversion
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,

    /// Lines moved by PageUp/PageDown in column mode
    #[serde(default = "default_page_lines")]
    pub page_lines: usize,

    /// Maximum undo entries kept (unbounded when absent)
    #[serde(default)]
    pub history_limit: Option<usize>,

    /// Initial case sensitivity of find/replace
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive_search: bool,
}

fn default_page_lines() -> usize {
    DEFAULT_PAGE_LINES
}

fn default_case_sensitive() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            page_lines: default_page_lines(),
            history_limit: None,
            case_sensitive_search: default_case_sensitive(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<EditorConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The config as it would be written to disk
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Replace nonsensical values with defaults
    fn sanitized(mut self) -> Self {
        if self.page_lines == 0 {
            tracing::warn!("page_lines must be at least 1, using {}", DEFAULT_PAGE_LINES);
            self.page_lines = DEFAULT_PAGE_LINES;
        }
        if self.history_limit == Some(0) {
            tracing::warn!("history_limit of 0 ignored");
            self.history_limit = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: EditorConfig = serde_yaml::from_str("page_lines: 4\n").unwrap();
        assert_eq!(config.page_lines, 4);
        assert!(config.case_sensitive_search);
        assert_eq!(config.history_limit, None);
        assert_eq!(config.dictionary_path, None);
    }

    #[test]
    fn test_sanitize_zero_values() {
        let config = EditorConfig {
            page_lines: 0,
            history_limit: Some(0),
            ..EditorConfig::default()
        }
        .sanitized();
        assert_eq!(config.page_lines, DEFAULT_PAGE_LINES);
        assert_eq!(config.history_limit, None);
    }
}
