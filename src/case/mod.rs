//! Case conversion backed by dictionary word segmentation.
//!
//! `UPPERCASE` and `lowercase` operate on raw characters. Every other style
//! first splits the input into words with [`segment_words`], which needs a
//! loaded [`Dictionary`]; until one is available those styles fail with
//! [`CaseError::DictionaryRequired`], which callers can retry later.

mod convert;
mod dictionary;
mod segment;

pub use convert::{convert_case, CaseStyle};
pub use dictionary::Dictionary;
pub use segment::{normalize, segment_words};

use thiserror::Error;

/// Errors from case conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The style segments words and no dictionary is loaded (yet)
    #[error("{0} needs a dictionary, which is not loaded")]
    DictionaryRequired(CaseStyle),

    #[error("unknown case style: {0:?}")]
    UnknownStyle(String),
}

impl CaseError {
    /// True when retrying after the dictionary finishes loading may succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CaseError::DictionaryRequired(_))
    }
}
