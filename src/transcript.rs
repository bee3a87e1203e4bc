//! Transcript input handling.

use crate::error::{Result, SessionScopeError};

/// Raw session text plus the lower-cased view every keyword heuristic
/// matches against. Speaker tags (`Therapist:` / `Client:`) are kept inline;
/// the heuristics operate on the full text.
#[derive(Debug, Clone)]
pub struct Transcript {
    raw: String,
    lower: String,
}

impl Transcript {
    pub fn new(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(SessionScopeError::Validation {
                message: "transcript is empty".to_string(),
            });
        }
        Ok(Self {
            raw: text.to_string(),
            lower: text.to_lowercase(),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Whitespace-delimited word count of the raw text
    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }
}
