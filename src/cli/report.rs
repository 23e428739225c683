//! Report formatting and printing utilities.
//!
//! This module displays verification findings in cargo-style format and
//! prints command summaries. Separate from core logic to allow keymint to
//! be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, GenerateSummary, InitSummary, VerifySummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::findings::{Describe, Finding, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, writer),
        CommandSummary::Verify(summary) => {
            report_findings(&result.findings, writer);
            print_verify_summary(summary, &result.findings, writer);
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Findings (cargo-style)
// ============================================================

fn report_findings<W: Write>(findings: &[Finding], writer: &mut W) {
    for finding in findings {
        print_finding(finding, writer);
    }
}

fn print_finding<W: Write>(finding: &Finding, writer: &mut W) {
    let severity_str = match finding.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        finding.message(),
        finding.report_rule().to_string().dimmed().cyan()
    );

    if let Some(path) = finding.location() {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
    }

    if let Some(details) = finding.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between findings
}

fn print_verify_summary<W: Write>(
    summary: &VerifySummary,
    findings: &[Finding],
    writer: &mut W,
) {
    if findings.is_empty() {
        let mut scope = format!(
            "{} artifact {}, {} locale {}",
            summary.artifacts_checked,
            plural(summary.artifacts_checked, "file", "files"),
            summary.locales_checked,
            plural(summary.locales_checked, "table", "tables"),
        );
        if summary.schema_checked {
            scope.push_str(", and the API schema");
        }
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Verified {} {} across {} - no discrepancies found",
                summary.registry_keys,
                plural(summary.registry_keys, "key", "keys"),
                scope
            )
            .green()
        );
        return;
    }

    let errors = findings
        .iter()
        .filter(|f| f.report_severity() == Severity::Error)
        .count();
    let warnings = findings.len() - errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        findings.len(),
        plural(findings.len(), "problem", "problems"),
        errors,
        plural(errors, "error", "errors").red(),
        warnings,
        plural(warnings, "warning", "warnings").yellow()
    );
}

// ============================================================
// Generate Summary
// ============================================================

fn print_generate<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    for write in &summary.writes {
        if summary.dry_run {
            let _ = writeln!(
                writer,
                "{} {} {} {}",
                "Would".yellow().bold(),
                write.kind.planned_verb(),
                write.kind.label(),
                format!("-> {}", write.output).cyan()
            );
        } else {
            let _ = writeln!(
                writer,
                "{} {} {}",
                write.kind.done_verb().green().bold(),
                write.kind.label(),
                format!("-> {}", write.output).cyan()
            );
        }
    }

    for kind in &summary.skipped {
        let _ = writeln!(
            writer,
            "{}",
            format!("Skipping disabled target '{}'", kind.name()).dimmed()
        );
    }

    if summary.dry_run {
        let _ = writeln!(
            writer,
            "Run without {} to write these files.",
            "--dry-run".cyan()
        );
        return;
    }

    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated from {} {} in {} {}",
            stats.total_messages,
            plural(stats.total_messages, "message", "messages"),
            stats.namespace_counts.len(),
            plural(stats.namespace_counts.len(), "namespace", "namespaces"),
        )
        .green()
    );
    for (namespace, count) in &stats.namespace_counts {
        let _ = writeln!(writer, "  - {}: {}", namespace, count);
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// Tests
// ============================================================
