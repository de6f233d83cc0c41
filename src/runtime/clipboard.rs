//! Clipboard access behind a trait, so headless runs and tests never touch
//! the system clipboard.

/// Text clipboard. Both directions may fail (no display, permission denied).
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, String>;
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.get_text().map_err(|e| e.to_string())
    }

    fn write_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
    }
}

/// In-process clipboard
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            denied: false,
        }
    }

    /// A clipboard that refuses every read and write
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, String> {
        if self.denied {
            return Err("clipboard access denied".to_string());
        }
        self.contents
            .clone()
            .ok_or_else(|| "clipboard is empty".to_string())
    }

    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if self.denied {
            return Err("clipboard access denied".to_string());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_roundtrip() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.read_text().is_err());
        clipboard.write_text("hello").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "hello");
        assert_eq!(clipboard.contents(), Some("hello"));
    }

    #[test]
    fn test_denied_clipboard() {
        let mut clipboard = MemoryClipboard::denied();
        assert!(clipboard.write_text("x").is_err());
        assert!(clipboard.read_text().is_err());
    }
}
