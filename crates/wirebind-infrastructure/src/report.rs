//! Analysis reports
//!
//! Turns an [`AnalysisOutcome`] into a serializable report, rendered either as
//! pretty JSON or as a human-readable listing for the terminal.

use crate::config::ReportFormat;
use crate::constants::REPORT_TITLE;
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use wirebind_application::AnalysisOutcome;
use wirebind_domain::diagnostics::{Diagnostic, Severity};
use wirebind_domain::value_objects::Location;

/// Complete report of one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// RFC 3339 time the report was produced
    pub timestamp: String,
    /// Model document the analysis ran on
    pub model: PathBuf,
    pub summary: ReportSummary,
    pub diagnostics: Vec<DiagnosticEntry>,
}

/// Counters of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub sites: usize,
    /// Registrations found by extraction
    pub registrations: usize,
    /// Registrations that survived validation
    pub valid: usize,
    pub rejected: usize,
    pub errors: usize,
    pub warnings: usize,
    pub passed: bool,
}

/// One diagnostic, flattened for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEntry {
    pub id: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
    pub location: Location,
}

impl From<&Diagnostic> for DiagnosticEntry {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            id: diagnostic.id(),
            severity: diagnostic.severity(),
            title: diagnostic.title(),
            message: diagnostic.message(),
            location: diagnostic.location().clone(),
        }
    }
}

impl AnalysisReport {
    /// Build a report stamped with the current time
    ///
    /// The run fails on any error, and on any warning when `deny_warnings`.
    pub fn new(model: &Path, outcome: &AnalysisOutcome, deny_warnings: bool) -> Self {
        let stats = &outcome.stats;
        let passed = !outcome.has_errors() && !(deny_warnings && outcome.has_warnings());
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            model: model.to_path_buf(),
            summary: ReportSummary {
                sites: stats.sites,
                registrations: stats.extracted,
                valid: outcome.records.len(),
                rejected: stats.rejected,
                errors: stats.errors,
                warnings: stats.warnings,
                passed,
            },
            diagnostics: outcome.diagnostics.iter().map(DiagnosticEntry::from).collect(),
        }
    }

    pub fn passed(&self) -> bool {
        self.summary.passed
    }
}

/// Report renderer
pub struct Reporter;

impl Reporter {
    /// Render in the requested format
    pub fn render(report: &AnalysisReport, format: ReportFormat) -> String {
        match format {
            ReportFormat::Human => Self::to_human_readable(report),
            ReportFormat::Json => Self::to_json(report),
        }
    }

    /// Generate JSON report
    pub fn to_json(report: &AnalysisReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &AnalysisReport) -> String {
        let summary = &report.summary;
        let mut output = String::new();

        let _ = writeln!(output, "{REPORT_TITLE}");
        let _ = writeln!(output);
        let _ = writeln!(output, "Timestamp: {}", report.timestamp);
        let _ = writeln!(output, "Model: {}", report.model.display());
        let _ = writeln!(output);
        let _ = writeln!(output, "--- Summary ---");
        let _ = writeln!(output, "Invocation sites: {}", summary.sites);
        let _ = writeln!(output, "Registrations:    {}", summary.registrations);
        let _ = writeln!(output, "Valid:            {}", summary.valid);
        let _ = writeln!(output, "Rejected:         {}", summary.rejected);
        let _ = writeln!(output, "Errors:           {}", summary.errors);
        let _ = writeln!(output, "Warnings:         {}", summary.warnings);
        let _ = writeln!(output);
        let status = if summary.passed { "PASSED" } else { "FAILED" };
        let _ = writeln!(output, "Status: {status}");

        if !report.diagnostics.is_empty() {
            let _ = writeln!(output);
            let _ = writeln!(output, "--- Diagnostics ---");
            for entry in &report.diagnostics {
                let _ = writeln!(
                    output,
                    "  [{}] {} {}: {}",
                    entry.severity, entry.id, entry.location, entry.message
                );
            }
        }

        output
    }
}
