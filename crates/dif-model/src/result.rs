use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::diagnostic::{Diagnostic, Level};

/// Outcome of checking one attribute across the record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "kebab-case")]
pub enum AttributeOutcome {
    /// Column present; findings in row order.
    Diagnostics(Vec<Diagnostic>),
    /// Column absent from every record.
    ColumnMissing(String),
}

impl AttributeOutcome {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            AttributeOutcome::Diagnostics(diagnostics) => diagnostics,
            AttributeOutcome::ColumnMissing(_) => &[],
        }
    }

    /// String form handed to the report writer.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AttributeOutcome::Diagnostics(diagnostics) => {
                diagnostics.iter().map(ToString::to_string).collect()
            }
            AttributeOutcome::ColumnMissing(message) => vec![message.clone()],
        }
    }
}

/// Result of one validation run, keyed by attribute in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Number of data rows that were checked.
    pub record_count: usize,
    pub outcomes: Vec<(Attribute, AttributeOutcome)>,
}

impl ValidationResult {
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, attribute: Attribute, outcome: AttributeOutcome) {
        self.outcomes.push((attribute, outcome));
    }

    pub fn get(&self, attribute: Attribute) -> Option<&AttributeOutcome> {
        self.outcomes
            .iter()
            .find(|(candidate, _)| *candidate == attribute)
            .map(|(_, outcome)| outcome)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.outcomes
            .iter()
            .flat_map(|(_, outcome)| outcome.diagnostics())
    }

    /// Attributes whose column was absent.
    pub fn missing_columns(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, AttributeOutcome::ColumnMissing(_)))
            .map(|(attribute, _)| *attribute)
    }

    /// Error-level diagnostics plus absent mandatory columns.
    pub fn error_count(&self) -> usize {
        let row_errors = self
            .diagnostics()
            .filter(|diagnostic| diagnostic.level == Level::Error)
            .count();
        let column_errors = self
            .missing_columns()
            .filter(|attribute| attribute.requirement().is_mandatory())
            .count();
        row_errors + column_errors
    }

    /// Warning-level diagnostics plus absent recommended columns.
    pub fn warning_count(&self) -> usize {
        let row_warnings = self
            .diagnostics()
            .filter(|diagnostic| diagnostic.level == Level::Warning)
            .count();
        let column_warnings = self
            .missing_columns()
            .filter(|attribute| !attribute.requirement().is_mandatory())
            .count();
        row_warnings + column_warnings
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Report columns: attribute name and its message list.
    pub fn columns(&self) -> Vec<(&'static str, Vec<String>)> {
        self.outcomes
            .iter()
            .map(|(attribute, outcome)| (attribute.name(), outcome.messages()))
            .collect()
    }
}
