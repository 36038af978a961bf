use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use oas_cli::audit::AuditResult;
use oas_model::{Severity, SpecVersion};
use oas_validate::RuleOutcome;

/// Printed once the document is parsed, ahead of the rule lines.
pub fn print_header(source: &str, version: &SpecVersion) {
    println!("Spec: {source}");
    println!("Version: {version}");
    println!();
}

pub fn print_summary(result: &AuditResult) {
    let report = &result.report;
    for outcome in &report.outcomes {
        print_outcome(outcome);
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Check"),
        header_cell("Severity"),
        header_cell("Findings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &report.outcomes {
        table.add_row(vec![
            rule_cell(outcome),
            Cell::new(&outcome.heading),
            severity_cell(outcome.severity),
            count_cell(outcome.findings.len(), severity_color(outcome.severity)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(report.finding_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
}

fn print_outcome(outcome: &RuleOutcome) {
    if outcome.is_clean() {
        println!("✓ {} — OK", outcome.heading);
        return;
    }
    println!("⚠ {}: {} issue(s)", outcome.heading, outcome.findings.len());
    for finding in &outcome.findings {
        println!("  • {}", finding.render());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
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

fn rule_cell(outcome: &RuleOutcome) -> Cell {
    if outcome.is_clean() {
        dim_cell(outcome.rule.id())
    } else {
        Cell::new(outcome.rule.id())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

pub fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
