use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dif_cli::pipeline::CheckOutcome;
use dif_model::{AttributeOutcome, Diagnostic, Level, Requirement};
use dif_standards::ReferenceData;

pub fn print_summary(outcome: &CheckOutcome) {
    let result = &outcome.result;
    println!("Input: {}", outcome.input.display());
    println!("Records: {}", result.record_count);
    if let Some(path) = &outcome.report {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Attribute"),
        header_cell("Requirement"),
        header_cell("Column"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for (attribute, attribute_outcome) in &result.outcomes {
        let requirement = attribute.requirement();
        let (column, errors, warnings) = match attribute_outcome {
            AttributeOutcome::Diagnostics(diagnostics) => (
                Cell::new("✓").fg(Color::Green),
                count_level(diagnostics, Level::Error),
                count_level(diagnostics, Level::Warning),
            ),
            AttributeOutcome::ColumnMissing(_) if requirement == Requirement::Mandatory => {
                (missing_cell(Color::Red), 1, 0)
            }
            AttributeOutcome::ColumnMissing(_) => (missing_cell(Color::Yellow), 0, 1),
        };
        table.add_row(vec![
            Cell::new(attribute.name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            requirement_cell(requirement),
            column,
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(result.error_count(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(result.warning_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if outcome.report.is_none() {
        print_diagnostic_table(outcome);
    }
}

fn print_diagnostic_table(outcome: &CheckOutcome) {
    let result = &outcome.result;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Attribute"),
        header_cell("Level"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut rows = 0usize;
    for (attribute, attribute_outcome) in &result.outcomes {
        if let AttributeOutcome::ColumnMissing(message) = attribute_outcome {
            table.add_row(vec![
                dim_cell("-"),
                Cell::new(attribute.name()),
                level_cell(missing_level(attribute.requirement())),
                Cell::new(message),
            ]);
            rows += 1;
        }
    }
    let mut diagnostics: Vec<&Diagnostic> = result.diagnostics().collect();
    diagnostics.sort_by_key(|diagnostic| (diagnostic.line, diagnostic.attribute));
    for diagnostic in diagnostics {
        table.add_row(vec![
            Cell::new(diagnostic.line),
            Cell::new(diagnostic.attribute.name()),
            level_cell(diagnostic.level),
            Cell::new(&diagnostic.message),
        ]);
        rows += 1;
    }
    if rows == 0 {
        return;
    }
    println!();
    println!("Diagnostics:");
    println!("{table}");
}

fn missing_level(requirement: Requirement) -> Level {
    match requirement {
        Requirement::Mandatory => Level::Error,
        Requirement::Recommended => Level::Warning,
    }
}

fn level_cell(level: Level) -> Cell {
    match level {
        Level::Error => Cell::new(level.label()).fg(Color::Red),
        Level::Warning => Cell::new(level.label()).fg(Color::Yellow),
    }
}

pub fn print_resources(dir: &Path, reference: &ReferenceData) {
    let summary = reference.summary();
    println!("Resources: {}", dir.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Picklist"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in [
        ("Licenses", summary.licenses),
        ("Communities", summary.communities),
        ("File formats", summary.file_formats),
        ("Target groups", summary.target_groups),
    ] {
        table.add_row(vec![Cell::new(name), count_cell(count, Color::Green)]);
    }
    println!("{table}");
}

fn count_level(diagnostics: &[Diagnostic], level: Level) -> usize {
    diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.level == level)
        .count()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn requirement_cell(requirement: Requirement) -> Cell {
    match requirement {
        Requirement::Mandatory => Cell::new(requirement.as_str()).add_attribute(Attribute::Bold),
        Requirement::Recommended => dim_cell(requirement.as_str()),
    }
}

fn missing_cell(color: Color) -> Cell {
    Cell::new("missing").fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
