use anyhow::Result;
use comfy_table::{Cell, Table};

use oas_cli::audit::{AuditRequest, AuditResult, FailOn, run_audit_with};
use oas_report::ReportFormat;
use oas_validate::{Category, RuleId};

use crate::cli::{AuditArgs, FailOnArg, ReportFormatArg};
use crate::summary::{apply_table_style, header_cell, print_header, severity_cell};

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Heading"),
        header_cell("Category"),
        header_cell("Severity"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for rule in RuleId::all() {
        table.add_row(vec![
            Cell::new(rule.id()),
            Cell::new(rule.heading()),
            Cell::new(rule.category().label()),
            severity_cell(rule.default_severity()),
            Cell::new(rule.description()),
        ]);
    }
    println!("{table}");

    println!();
    for category in Category::all() {
        println!("{:<14} {}", category.label(), category.description());
    }
    Ok(())
}

pub fn run_audit_command(args: &AuditArgs) -> Result<AuditResult> {
    let request = AuditRequest {
        spec: args.spec.clone(),
        config: args.config.clone(),
        only: args.only.clone(),
        skip: args.skip.clone(),
        output: (!args.no_report).then(|| (args.out.clone(), report_format(args.format))),
    };
    run_audit_with(&request, print_header)
}

pub fn fail_on(arg: FailOnArg) -> FailOn {
    match arg {
        FailOnArg::Error => FailOn::Error,
        FailOnArg::Warning => FailOn::Warning,
        FailOnArg::Never => FailOn::Never,
    }
}

fn report_format(arg: ReportFormatArg) -> ReportFormat {
    match arg {
        ReportFormatArg::Markdown => ReportFormat::Markdown,
        ReportFormatArg::Json => ReportFormat::Json,
    }
}
