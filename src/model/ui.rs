//! UI-facing state that is not part of the document

/// Status line and busy flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Status bar message
    pub status_message: String,
    /// A file load is in flight
    pub is_loading: bool,
    /// A file save is in flight
    pub is_saving: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Check if the UI is busy (loading or saving)
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }
}
