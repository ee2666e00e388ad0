//! Record checker: evaluates the rule table against a record set.

use tracing::{debug, info, info_span};

use dif_model::{
    Attribute, AttributeOutcome, Diagnostic, LineLocator, RecordSet, ValidationResult,
};
use dif_standards::ReferenceData;

use crate::grammar::{community_name, is_valid_community_item};
use crate::rules::{AttributeRule, CellCheck, Finding, rule_for, rules};
use crate::split::split_multi_value;

/// Per-run configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Extra header lines between the column-name row and the first data row.
    pub header_lines: usize,
}

impl ValidationConfig {
    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }
}

/// Checks DIF records against the attribute rules.
///
/// Holds only read-only state for the run; every check is a pure function
/// of the cells it is given.
#[derive(Debug, Clone, Copy)]
pub struct RecordChecker<'a> {
    reference: &'a ReferenceData,
    locator: LineLocator,
}

impl<'a> RecordChecker<'a> {
    pub fn new(reference: &'a ReferenceData, config: ValidationConfig) -> Self {
        Self {
            reference,
            locator: LineLocator::new(config.header_lines),
        }
    }

    pub fn locator(&self) -> LineLocator {
        self.locator
    }

    /// Check every attribute of the record set in processing order.
    pub fn check(&self, records: &RecordSet) -> ValidationResult {
        let span = info_span!(
            "check_records",
            records = records.len(),
            header_offset = self.locator.header_offset()
        );
        let _guard = span.enter();

        let mut result = ValidationResult::new(records.len());
        for rule in rules() {
            let attribute = rule.attribute;
            let outcome = match records.column(attribute.name()) {
                Some(column) => {
                    let diagnostics = self.check_rule(rule, column.cells());
                    debug!(
                        attribute = attribute.name(),
                        diagnostics = diagnostics.len(),
                        "attribute checked"
                    );
                    AttributeOutcome::Diagnostics(diagnostics)
                }
                None => {
                    debug!(attribute = attribute.name(), "attribute column missing");
                    AttributeOutcome::ColumnMissing(attribute.missing_column_message().to_string())
                }
            };
            result.push(attribute, outcome);
        }

        info!(
            records = result.record_count,
            errors = result.error_count(),
            warnings = result.warning_count(),
            "records checked"
        );
        result
    }

    /// Check one attribute's cells, given in row order.
    pub fn check_column<'c, I>(&self, attribute: Attribute, cells: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = &'c str>,
    {
        self.check_rule(rule_for(attribute), cells)
    }

    fn check_rule<'c, I>(&self, rule: &AttributeRule, cells: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let mut diagnostics = Vec::new();
        for (row_index, cell) in cells.into_iter().enumerate() {
            self.check_cell(rule, row_index, cell, &mut diagnostics);
        }
        diagnostics
    }

    fn check_cell(
        &self,
        rule: &AttributeRule,
        row_index: usize,
        cell: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let line = self.locator.line_of(row_index);
        let report = |diagnostics: &mut Vec<Diagnostic>, finding: &Finding| {
            diagnostics.push(Diagnostic::new(
                rule.attribute,
                line,
                finding.kind,
                finding.level,
                finding.message,
            ));
        };

        if cell.trim().is_empty() {
            diagnostics.push(Diagnostic::new(
                rule.attribute,
                line,
                rule.missing_kind(),
                rule.missing_level(),
                rule.missing,
            ));
            return;
        }

        // Grammars and picklists see the raw cell; surrounding whitespace is a finding.
        let padded = has_surrounding_whitespace(cell);
        match &rule.check {
            CellCheck::Presence => {}
            CellCheck::Cell { grammar, finding } => {
                if !grammar(cell) {
                    report(diagnostics, finding);
                }
            }
            CellCheck::EachItem { grammar, finding } => {
                if padded || !split_multi_value(cell).into_iter().all(|item| grammar(item)) {
                    report(diagnostics, finding);
                }
            }
            CellCheck::Listed { picklist, finding } => {
                if !picklist.values(self.reference).contains(cell) {
                    report(diagnostics, finding);
                }
            }
            CellCheck::Community {
                malformed,
                unlisted,
            } => {
                let items = split_multi_value(cell);
                if padded || !items.iter().all(|item| is_valid_community_item(item)) {
                    report(diagnostics, malformed);
                }
                let communities = &self.reference.communities;
                if !items
                    .iter()
                    .all(|item| communities.contains(&*community_name(item)))
                {
                    report(diagnostics, unlisted);
                }
            }
            CellCheck::FormatThenListed {
                grammar,
                malformed,
                picklist,
                unlisted,
            } => {
                if !grammar(cell) {
                    report(diagnostics, malformed);
                    return;
                }
                let values = picklist.values(self.reference);
                if !split_multi_value(cell)
                    .into_iter()
                    .all(|item| values.contains(item))
                {
                    report(diagnostics, unlisted);
                }
            }
        }
    }
}

fn has_surrounding_whitespace(cell: &str) -> bool {
    cell.trim().len() != cell.len()
}

/// Check a record set with a fresh [`RecordChecker`].
pub fn validate_records(
    records: &RecordSet,
    reference: &ReferenceData,
    config: ValidationConfig,
) -> ValidationResult {
    RecordChecker::new(reference, config).check(records)
}
