//! Parser diagnostics.
//!
//! The progression parser is generous: malformed input is never fatal.
//! It tokenizes what it can and records a warning for anything it had
//! to assume, so callers can surface the assumption to the user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// Parsed with an assumption that may not match user intent
    Warning,
    /// Style note or minor issue
    Info,
}

/// A single diagnostic emitted while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            level: DiagnosticLevel::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Diagnostic {
            level: DiagnosticLevel::Info,
            message: message.into(),
        }
    }
}

/// Result of parsing: the value plus any diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> ParseResult<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        ParseResult { value, diagnostics }
    }

    pub fn clean(value: T) -> Self {
        ParseResult {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
    }
}
