use serde::{Deserialize, Serialize};
use std::fmt;

use crate::attribute::Attribute;

/// Classification of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Empty cell for a mandatory attribute.
    MandatoryMissing,
    /// Empty cell for a recommended attribute.
    RecommendedMissing,
    /// Non-empty cell that fails the attribute grammar.
    Malformed,
    /// Well-formed cell whose value is not in the relevant picklist.
    Unlisted,
}

impl DiagnosticKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::MandatoryMissing => "mandatory missing",
            DiagnosticKind::RecommendedMissing => "recommended missing",
            DiagnosticKind::Malformed => "malformed",
            DiagnosticKind::Unlisted => "unlisted",
        }
    }
}

/// Report level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
        }
    }
}

/// A single finding tied to an attribute and a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub attribute: Attribute,
    /// 1-based line number in the source file.
    pub line: usize,
    pub kind: DiagnosticKind,
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        attribute: Attribute,
        line: usize,
        kind: DiagnosticKind,
        level: Level,
        message: impl Into<String>,
    ) -> Self {
        Self {
            attribute,
            line,
            kind,
            level,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}
